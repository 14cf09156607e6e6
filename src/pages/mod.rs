pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::seo::Seo;
use crate::routes::Page;
use contact::ContactPage;
use home::HomePage;
use not_found::NotFoundPage;
use services::ServicesPage;

/// Header, head metadata and footer around a page's own sections.
#[component]
pub fn PageShell(page: Page, children: Children) -> impl IntoView {
    view! {
        <Seo metadata=page.metadata() />
        <Header />
        <main id="top" class="page-main">
            {children()}
        </main>
        <Footer />
    }
}

pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Services => view! { <ServicesPage /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}
