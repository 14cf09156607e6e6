pub mod catalog;
pub mod components;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod overlay;
pub mod pages;
pub mod routes;
pub mod scroll_lock;
pub mod seo;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Router};
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;
use tracing::info;

use config::SiteConfig;
use routes::{resolve, Resolution};

/// Renders whatever `routes::resolve` picks for the current path.
#[component]
fn RoutedPage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || match resolve(&pathname.get()) {
        Resolution::Render(page) => pages::render(page),
        Resolution::Redirect(target) => {
            info!(from = %pathname.get_untracked(), to = target, "ancienne adresse redirigée");
            let options = NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            };
            view! { <Redirect path=target options=options /> }.into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    logging::init(&config.log_level);
    info!(base_url = %config.base_url, "démarrage du site");
    provide_context(config);

    view! {
        <Router>
            <RoutedPage />
        </Router>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn open_at(path: &str) -> HtmlElement {
        let window = web_sys::window().unwrap();
        window
            .history()
            .unwrap()
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .unwrap();
        let document = window.document().unwrap();
        let root = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn test_legacy_path_lands_on_home() {
        let root = open_at("/accueil");
        let handle = leptos::mount::mount_to(root.clone(), App);
        TimeoutFuture::new(50).await;

        assert_eq!(web_sys::window().unwrap().location().pathname().unwrap(), "/");
        assert!(root.inner_html().contains("Pourquoi nous choisir"));
        drop(handle);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_unknown_path_renders_not_found() {
        let root = open_at("/inexistante");
        let handle = leptos::mount::mount_to(root.clone(), App);
        TimeoutFuture::new(10).await;

        assert!(root.inner_html().contains("Page non trouvée"));
        drop(handle);
        root.remove();
    }
}
