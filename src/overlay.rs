//! Open/closed state of a service detail overlay.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Card or its "+" control activated.
    Activate,
    CloseButton,
    Backdrop,
    Escape,
    /// "Nous contacter": closes, then the page scrolls to the contact section.
    ContactRequested,
}

impl OverlayState {
    pub fn on(self, event: OverlayEvent) -> OverlayState {
        match event {
            OverlayEvent::Activate => OverlayState::Open,
            OverlayEvent::CloseButton
            | OverlayEvent::Backdrop
            | OverlayEvent::Escape
            | OverlayEvent::ContactRequested => OverlayState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == OverlayState::Open
    }
}

/// Keyboard keys that dismiss an overlay or the mobile menu.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::{is_locked, ScrollLock};

    /// Mirrors the component: the lock lives exactly as long as the open state.
    struct Card {
        state: OverlayState,
        lock: Option<ScrollLock>,
    }

    impl Card {
        fn new() -> Self {
            Card { state: OverlayState::Closed, lock: None }
        }

        fn send(&mut self, event: OverlayEvent) {
            self.state = self.state.on(event);
            if self.state.is_open() {
                self.lock.get_or_insert_with(ScrollLock::acquire);
            } else {
                self.lock = None;
            }
        }
    }

    #[test]
    fn test_every_dismissal_closes_and_unlocks() {
        for dismissal in [
            OverlayEvent::Escape,
            OverlayEvent::Backdrop,
            OverlayEvent::CloseButton,
            OverlayEvent::ContactRequested,
        ] {
            let mut card = Card::new();
            card.send(OverlayEvent::Activate);
            assert!(card.state.is_open());
            assert!(is_locked());

            card.send(dismissal);
            assert_eq!(card.state, OverlayState::Closed, "{:?}", dismissal);
            assert!(!is_locked(), "{:?}", dismissal);
        }
    }

    #[test]
    fn test_activate_twice_keeps_single_lock() {
        let mut card = Card::new();
        card.send(OverlayEvent::Activate);
        card.send(OverlayEvent::Activate);
        card.send(OverlayEvent::Escape);
        assert!(!is_locked());
    }

    #[test]
    fn test_dismiss_while_closed_is_harmless() {
        assert_eq!(OverlayState::Closed.on(OverlayEvent::Escape), OverlayState::Closed);
    }

    #[test]
    fn test_dismiss_key() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
    }
}
