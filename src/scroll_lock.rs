//! Page scroll suppression while an overlay or the mobile menu is open.
//!
//! Holding a [`ScrollLock`] keeps `<body>` from scrolling; dropping the last
//! one restores it. Locks are counted, so the menu and a detail overlay can
//! overlap without one release unlocking the other.

use std::cell::Cell;

use leptos::prelude::StoredValue;

thread_local! {
    static HOLDERS: Cell<usize> = const { Cell::new(0) };
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        let previous = HOLDERS.with(|h| {
            let n = h.get();
            h.set(n + 1);
            n
        });
        if previous == 0 {
            set_body_overflow("hidden");
        }
        ScrollLock { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let remaining = HOLDERS.with(|h| {
            let n = h.get().saturating_sub(1);
            h.set(n);
            n
        });
        if remaining == 0 {
            set_body_overflow("unset");
        }
    }
}

/// A lock held until the current reactive owner is cleaned up.
pub fn lock_while_mounted() -> StoredValue<ScrollLock> {
    StoredValue::new(ScrollLock::acquire())
}

pub fn is_locked() -> bool {
    HOLDERS.with(|h| h.get() > 0)
}

#[cfg(target_arch = "wasm32")]
fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        tracing::warn!("<body> introuvable, défilement inchangé");
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        tracing::warn!(error = ?e, "impossible de modifier overflow");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_body_overflow(value: &str) {
    tracing::trace!(overflow = value, "pas de DOM, verrou logique seulement");
}
