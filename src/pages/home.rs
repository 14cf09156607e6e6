use leptos::prelude::*;

use crate::components::contact_section::ContactSection;
use crate::components::hero::Hero;
use crate::components::services_section::ServicesSection;
use crate::components::why_choose_us::WhyChooseUs;
use crate::pages::PageShell;
use crate::routes::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell page=Page::Home>
            <section id="hero">
                <Hero />
            </section>
            <section id="why-choose-us">
                <WhyChooseUs />
            </section>
            <section id="services">
                <ServicesSection />
            </section>
            <section id="contact">
                <ContactSection />
            </section>
        </PageShell>
    }
}
