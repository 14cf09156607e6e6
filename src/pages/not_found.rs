use leptos::prelude::*;
use leptos_router::components::A;
use tracing::info;

use crate::pages::PageShell;
use crate::routes::{Page, HOME_PATH};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = leptos_router::hooks::use_location().pathname.get_untracked();
    info!(path = %path, "page introuvable");

    view! {
        <PageShell page=Page::NotFound>
            <div class="not-found">
                <h1>"404"</h1>
                <h2>"Page non trouvée"</h2>
                <p>"La page que vous recherchez n'existe pas ou a été déplacée."</p>
                <A href=HOME_PATH>
                    <span class="button button-primary">"Retour à l'accueil"</span>
                </A>
            </div>
        </PageShell>
    }
}
