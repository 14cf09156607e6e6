use leptos::prelude::*;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::seo::{audit, synchronize, PageMetadata};

/// Keeps the document head in step with `metadata`. Renders nothing.
#[component]
pub fn Seo(#[prop(into)] metadata: Signal<PageMetadata>) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    Effect::new(move |_| {
        let meta = metadata.get();
        for suggestion in audit(&meta.title, &meta.description).suggestions() {
            debug!(url = %meta.url, suggestion, "audit SEO");
        }
        if let Err(e) = synchronize(&meta, &config) {
            warn!(url = %meta.url, error = %e, "synchronisation de l'en-tête ignorée");
        }
    });
}
