use leptos::prelude::*;

use crate::catalog;
use crate::components::service_card::ServiceCard;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <div class="services-section container">
            <h2 class="section-title">"Nos Services"</h2>
            <div class="services-grid">
                {catalog::all().iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
            </div>
        </div>
    }
}
