use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::ServiceOffering;
use crate::components::service_details::ServiceDetails;
use crate::overlay::{OverlayEvent, OverlayState};

#[component]
pub fn ServiceCard(service: &'static ServiceOffering) -> impl IntoView {
    let (state, set_state) = signal(OverlayState::Closed);
    let (image_failed, set_image_failed) = signal(false);

    let on_event = Callback::new(move |event: OverlayEvent| {
        set_state.update(|state| *state = state.on(event));
    });

    view! {
        <article
            class="service-card card"
            tabindex="0"
            on:click=move |_| on_event.run(OverlayEvent::Activate)
        >
            <div class="service-card-media">
                {move || {
                    if image_failed.get() {
                        view! { <div class="service-image-fallback">"Service Image"</div> }.into_any()
                    } else {
                        view! {
                            <img
                                src=service.image
                                alt=service.title
                                loading="lazy"
                                on:error=move |_| set_image_failed.set(true)
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
            <h3 class="service-card-title">{service.title}</h3>
            <p class="service-card-description">{service.description}</p>
            <button
                class="service-card-more"
                aria-label="Voir les détails"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    on_event.run(OverlayEvent::Activate);
                }
            >
                "+"
            </button>
        </article>

        <Show when=move || state.get().is_open()>
            <ServiceDetails service=service on_event=on_event />
        </Show>
    }
}
