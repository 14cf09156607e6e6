//! Header links, header visual mode and in-page anchor scrolling.

use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window,
};

use crate::constants::{ANCHOR_SCROLL_OFFSET, SCROLL_SOLID_THRESHOLD};
use crate::error::SiteError;
use crate::routes::{CONTACT_PATH, HOME_PATH, SERVICES_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLink {
    pub label: &'static str,
    pub href: String,
    pub is_anchor: bool,
}

/// Links for the current path: anchors on the home page, routes elsewhere.
pub fn navigation_links(pathname: &str) -> Vec<NavigationLink> {
    let on_home = pathname == HOME_PATH;
    let section = |label: &'static str, anchor: &str, route: &str| NavigationLink {
        label,
        href: if on_home { anchor.to_string() } else { route.to_string() },
        is_anchor: on_home,
    };

    vec![
        NavigationLink { label: "Accueil", href: "#top".to_string(), is_anchor: true },
        section("Services", "#services", SERVICES_PATH),
        section("Contact", "#contact", CONTACT_PATH),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Over the hero, before any real scrolling.
    Transparent,
    Solid,
}

impl HeaderMode {
    pub fn from_scroll(offset: f64) -> Self {
        if offset > SCROLL_SOLID_THRESHOLD {
            HeaderMode::Solid
        } else {
            HeaderMode::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderMode::Transparent => "header header-transparent",
            HeaderMode::Solid => "header header-solid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    Top,
    Id(String),
}

impl AnchorTarget {
    /// `None` for anything that is not an in-page anchor.
    pub fn parse(href: &str) -> Option<Self> {
        match href.strip_prefix('#')? {
            "" | "top" => Some(AnchorTarget::Top),
            id => Some(AnchorTarget::Id(id.to_string())),
        }
    }
}

/// Last-resort selector when no element carries the exact id.
pub fn broad_selector(id: &str) -> String {
    format!("[id*=\"{id}\"], [class*=\"{id}\"]")
}

/// Document offset to scroll to so `element_top` lands under the fixed header.
pub fn offset_scroll_top(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset + ANCHOR_SCROLL_OFFSET
}

fn smooth_scroll_window(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Whether the browser honours CSS `scroll-behavior`, and with it smooth `scrollIntoView`.
fn supports_smooth_scroll(document: &Document) -> bool {
    document
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .map(|root| js_sys::Reflect::has(&root.style(), &JsValue::from_str("scrollBehavior")).unwrap_or(false))
        .unwrap_or(false)
}

fn scroll_element_into_view(window: &Window, document: &Document, element: &Element) -> Result<(), SiteError> {
    if supports_smooth_scroll(document) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        let rect = element.get_bounding_client_rect();
        let top = offset_scroll_top(rect.top(), window.page_y_offset()?);
        smooth_scroll_window(window, top);
    }
    Ok(())
}

/// Smooth-scroll to an in-page anchor such as `#services`.
///
/// Falls back to a broad id/class search when the exact id is missing;
/// a target that cannot be found at all is logged and ignored.
pub fn scroll_to_anchor(href: &str) -> Result<(), SiteError> {
    let Some(target) = AnchorTarget::parse(href) else {
        return Ok(());
    };
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;

    let id = match target {
        AnchorTarget::Top => {
            smooth_scroll_window(&window, 0.0);
            return Ok(());
        }
        AnchorTarget::Id(id) => id,
    };

    let document = window.document().ok_or(SiteError::NoDocument)?;
    if let Some(element) = document.get_element_by_id(&id) {
        return scroll_element_into_view(&window, &document, &element);
    }

    debug!(anchor = %id, "id introuvable, recherche élargie");
    match document.query_selector(&broad_selector(&id))? {
        Some(element) => scroll_element_into_view(&window, &document, &element),
        None => {
            warn!(anchor = %id, "cible de navigation introuvable");
            Ok(())
        }
    }
}

/// [`scroll_to_anchor`] for event handlers: failures are only logged.
pub fn follow_anchor(href: &str) {
    if let Err(e) = scroll_to_anchor(href) {
        warn!(href, error = %e, "défilement vers l'ancre impossible");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_on_home_are_anchors() {
        let links = navigation_links("/");
        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#top", "#services", "#contact"]);
        assert!(links.iter().all(|l| l.is_anchor));
    }

    #[test]
    fn test_links_elsewhere_are_routes() {
        let links = navigation_links("/contact");
        assert_eq!(links[0].href, "#top");
        assert!(links[0].is_anchor);
        assert_eq!(links[1], NavigationLink { label: "Services", href: "/services".to_string(), is_anchor: false });
        assert_eq!(links[2].href, "/contact");
        assert!(!links[2].is_anchor);
    }

    #[test]
    fn test_header_mode_threshold() {
        assert_eq!(HeaderMode::from_scroll(0.0), HeaderMode::Transparent);
        assert_eq!(HeaderMode::from_scroll(10.0), HeaderMode::Transparent);
        assert_eq!(HeaderMode::from_scroll(10.5), HeaderMode::Solid);
    }

    #[test]
    fn test_anchor_parse() {
        assert_eq!(AnchorTarget::parse("#top"), Some(AnchorTarget::Top));
        assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Top));
        assert_eq!(AnchorTarget::parse("#services"), Some(AnchorTarget::Id("services".to_string())));
        assert_eq!(AnchorTarget::parse("/services"), None);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(broad_selector("services"), "[id*=\"services\"], [class*=\"services\"]");
        assert_eq!(offset_scroll_top(250.0, 1000.0), 1150.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_reports_smooth_scroll() {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(supports_smooth_scroll(&document));
    }

    #[wasm_bindgen_test]
    fn test_scroll_to_existing_and_missing_anchor() {
        let document = web_sys::window().unwrap().document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_id("services");
        document.body().unwrap().append_child(&section).unwrap();

        assert!(scroll_to_anchor("#services").is_ok());
        assert!(scroll_to_anchor("#introuvable").is_ok());
        section.remove();
    }
}
