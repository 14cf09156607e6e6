pub mod contact_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod seo;
pub mod service_card;
pub mod service_details;
pub mod services_section;
pub mod why_choose_us;
