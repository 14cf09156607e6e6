use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::pages::PageShell;
use crate::routes::Page;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <PageShell page=Page::Contact>
            <section id="contact" class="page-section">
                <ContactSection />
            </section>
        </PageShell>
    }
}
