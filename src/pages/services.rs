use leptos::prelude::*;

use crate::components::services_section::ServicesSection;
use crate::pages::PageShell;
use crate::routes::Page;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <PageShell page=Page::Services>
            <section id="services" class="page-section">
                <ServicesSection />
            </section>
        </PageShell>
    }
}
