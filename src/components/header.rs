use gloo::timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::config::SiteConfig;
use crate::constants::{BRAND_NAME, LOGO_PATH, MOBILE_SCROLL_DELAY_MS};
use crate::navigation::{follow_anchor, navigation_links, HeaderMode, NavigationLink};
use crate::overlay::is_dismiss_key;
use crate::scroll_lock::ScrollLock;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let pathname = use_location().pathname;

    // État visuel de l'en-tête selon le défilement
    let (mode, set_mode) = signal(HeaderMode::from_scroll(window().scroll_y().unwrap_or(0.0)));
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        set_mode.set(HeaderMode::from_scroll(window().scroll_y().unwrap_or(0.0)));
    });

    // Menu mobile: ouvert/fermé, Échap pour fermer
    let (menu_open, set_menu_open) = signal(false);
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        if menu_open.get_untracked() && is_dismiss_key(&ev.key()) {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || {
        scroll_handle.remove();
        key_handle.remove();
    });

    // Le verrou vit tant que le menu est ouvert; il part avec le composant
    let lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move |_| {
        let open = menu_open.get();
        lock.update_value(|held| {
            if open {
                held.get_or_insert_with(ScrollLock::acquire);
            } else {
                *held = None;
            }
        });
    });

    let links = move || navigation_links(&pathname.get());

    let desktop_link = move |link: NavigationLink| {
        if link.is_anchor {
            let href = link.href.clone();
            view! {
                <a
                    href=link.href
                    class="nav-link"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        follow_anchor(&href);
                    }
                >
                    {link.label}
                </a>
            }
            .into_any()
        } else {
            view! { <A href=link.href><span class="nav-link">{link.label}</span></A> }.into_any()
        }
    };

    let mobile_link = move |link: NavigationLink| {
        if link.is_anchor {
            let href = link.href.clone();
            view! {
                <a
                    href=link.href
                    class="mobile-nav-link"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        set_menu_open.set(false);
                        let href = href.clone();
                        // Laisser le menu se refermer avant de défiler
                        spawn_local(async move {
                            TimeoutFuture::new(MOBILE_SCROLL_DELAY_MS).await;
                            follow_anchor(&href);
                        });
                    }
                >
                    {link.label}
                </a>
            }
            .into_any()
        } else {
            view! {
                <A href=link.href>
                    <span class="mobile-nav-link" on:click=move |_| set_menu_open.set(false)>
                        {link.label}
                    </span>
                </A>
            }
            .into_any()
        }
    };

    let mailto = config.mailto();
    let tel = config.tel();
    let email = config.contact.email.clone();
    let phone = config.contact.phone.clone();

    view! {
        <header class=move || mode.get().class()>
            <div class="container">
                <div class="header-content">
                    <a
                        href="#top"
                        class="logo-container"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            follow_anchor("#top");
                        }
                    >
                        <img class="logo-icon" src=LOGO_PATH alt=BRAND_NAME width="40" height="40" />
                        <div class="logo-text">{BRAND_NAME}</div>
                    </a>

                    <nav class="main-nav">
                        <ul class="nav-list">
                            {move || links().into_iter().map(|link| view! { <li>{desktop_link(link)}</li> }).collect_view()}
                        </ul>
                    </nav>

                    <button
                        class="menu-toggle"
                        aria-label="Menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="menu-bar"></span>
                        <span class="menu-bar"></span>
                        <span class="menu-bar"></span>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu-backdrop" on:click=move |_| set_menu_open.set(false)></div>
                <div class="mobile-menu">
                    <ul class="mobile-nav-list">
                        {move || links().into_iter().map(|link| view! { <li>{mobile_link(link)}</li> }).collect_view()}
                    </ul>
                    <div class="mobile-menu-contact">
                        <a href=mailto.clone()>{email.clone()}</a>
                        <a href=tel.clone()>{phone.clone()}</a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
