use leptos::prelude::*;

use crate::constants::HERO_VIDEO;
use crate::navigation::follow_anchor;

#[component]
pub fn Hero() -> impl IntoView {
    // La vidéo est remplacée par un bloc texte si elle ne charge pas
    let (video_failed, set_video_failed) = signal(false);

    view! {
        <div class="hero-section">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">"Et si vous arrêtiez de perdre de l'argent sans le savoir ?"</h1>
                    <p class="hero-description">
                        "La trésorerie n'est pas qu'un chiffre : c'est le cœur de votre entreprise. "
                        "Avec CM360, transformez votre gestion financière en levier de réussite."
                    </p>
                    <button class="button button-primary" on:click=move |_| follow_anchor("#services")>
                        "Découvrir nos services"
                    </button>
                </div>

                <div class="hero-media">
                    {move || {
                        if video_failed.get() {
                            view! {
                                <div class="hero-video-fallback">
                                    <p class="fallback-title">"Expertise en Gestion de Trésorerie"</p>
                                    <p>"Solutions professionnelles pour votre entreprise"</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <video
                                    class="hero-video"
                                    src=HERO_VIDEO
                                    autoplay=true
                                    muted=true
                                    playsinline=true
                                    preload="metadata"
                                    on:error=move |_| {
                                        tracing::warn!(src = HERO_VIDEO, "vidéo d'accueil indisponible");
                                        set_video_failed.set(true);
                                    }
                                ></video>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
