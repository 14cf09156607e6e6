pub mod services;
pub mod supplement;

pub use services::{all, by_id, ServiceOffering, SERVICES};
pub use supplement::{supplement_for, Faq, ProcessStep, Supplement, Testimonial};
