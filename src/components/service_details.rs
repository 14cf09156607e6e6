use gloo::timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use crate::catalog::{supplement_for, ServiceOffering};
use crate::navigation::follow_anchor;
use crate::overlay::{is_dismiss_key, OverlayEvent};
use crate::scroll_lock::lock_while_mounted;

// Laisse l'overlay disparaître avant de défiler vers le formulaire
const CONTACT_SCROLL_DELAY_MS: u32 = 300;

fn bullet_list(title: &'static str, class: &'static str, items: &'static [&'static str]) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class=class>
                <h3>{title}</h3>
                <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

/// Modal with everything known about one offering.
///
/// Mounted only while the card is open: the body stays locked for exactly
/// that long, and the Escape listener goes away with it.
#[component]
pub fn ServiceDetails(service: &'static ServiceOffering, on_event: Callback<OverlayEvent>) -> impl IntoView {
    let supplement = supplement_for(service.id);

    // Libéré quand le propriétaire du composant est détruit
    let _lock = lock_while_mounted();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            on_event.run(OverlayEvent::Escape);
        }
    });
    on_cleanup(move || handle.remove());

    let (image_failed, set_image_failed) = signal(false);

    let request_contact = move |_| {
        on_event.run(OverlayEvent::ContactRequested);
        spawn_local(async {
            TimeoutFuture::new(CONTACT_SCROLL_DELAY_MS).await;
            follow_anchor("#contact");
        });
    };

    view! {
        <div class="overlay-backdrop" on:click=move |_| on_event.run(OverlayEvent::Backdrop)>
            <div
                class="overlay-content card"
                role="dialog"
                aria-modal="true"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <button class="overlay-close" aria-label="Fermer" on:click=move |_| on_event.run(OverlayEvent::CloseButton)>
                    "×"
                </button>

                <div class="overlay-media">
                    {move || {
                        if image_failed.get() {
                            view! {
                                <div class="service-image-fallback">
                                    <div class="fallback-icon">"💼"</div>
                                    <p>{service.title}</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <img src=service.image alt=service.title on:error=move |_| set_image_failed.set(true) />
                            }
                                .into_any()
                        }
                    }}
                    <div class="overlay-badges">
                        {service.price.map(|price| view! { <span class="badge badge-price">{price}</span> })}
                        {service.duration.map(|duration| view! { <span class="badge badge-duration">{duration}</span> })}
                    </div>
                </div>

                <div class="overlay-body">
                    <h2>{service.title}</h2>
                    <p class="overlay-lede">{service.long_description.unwrap_or(service.description)}</p>

                    {bullet_list("Fonctionnalités principales", "overlay-features", service.features)}

                    {(!supplement.process_steps.is_empty()).then(|| view! {
                        <div class="overlay-process">
                            <h3>"Notre processus"</h3>
                            <ol>
                                {supplement.process_steps.iter().map(|step| view! {
                                    <li class="detail-item">
                                        <div class="step-number">{step.step}</div>
                                        <div>
                                            <h4 class="detail-label">{step.title}</h4>
                                            <p class="detail-value">{step.description}</p>
                                        </div>
                                    </li>
                                }).collect_view()}
                            </ol>
                        </div>
                    })}

                    {bullet_list("Résultats attendus", "overlay-results", supplement.results)}
                    {bullet_list("Détails du service", "overlay-details", service.details)}
                    {bullet_list("Avantages", "overlay-advantages", service.advantages)}

                    {(!supplement.testimonials.is_empty()).then(|| view! {
                        <div class="overlay-testimonials">
                            <h3>"Témoignages clients"</h3>
                            {supplement.testimonials.iter().map(|t| view! {
                                <blockquote class="testimonial">
                                    <p>{t.text}</p>
                                    <footer>{format!("{}, {} – {}", t.name, t.position, t.company)}</footer>
                                </blockquote>
                            }).collect_view()}
                        </div>
                    })}

                    {(!supplement.faqs.is_empty()).then(|| view! {
                        <div class="overlay-faq">
                            <h3>"Questions fréquentes"</h3>
                            {supplement.faqs.iter().map(|faq| view! {
                                <details>
                                    <summary>{faq.question}</summary>
                                    <p>{faq.answer}</p>
                                </details>
                            }).collect_view()}
                        </div>
                    })}
                </div>

                <div class="overlay-actions">
                    <button class="button button-primary" on:click=request_contact>"Nous contacter"</button>
                    <button class="button button-outline" on:click=move |_| on_event.run(OverlayEvent::CloseButton)>
                        "Fermer"
                    </button>
                </div>
            </div>
        </div>
    }
}
