pub mod form;
pub mod submit;
pub mod validation;

pub use form::{Banner, BannerKind, ContactForm};
pub use submit::{submitter_from_config, ContactSubmitter, HttpSubmitter, SimulatedSubmitter};
pub use validation::{validate, ContactSubmission, Field, ValidationErrors};
