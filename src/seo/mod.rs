//! Document head synchronization.
//!
//! Each page hands a [`PageMetadata`] to the synchronizer, which reconciles
//! the head against it: one node per logical tag, created on first use and
//! updated in place afterwards. Inputs are written as given; validating
//! them is the caller's job.

pub mod audit;
pub mod dom;
pub mod reconcile;
pub mod tags;

pub use audit::{audit, SeoAudit};
pub use dom::synchronize;
pub use reconcile::{reconcile, HeadOp, HeadSnapshot};
pub use tags::{desired_tags, full_title, ContentType, HeadKey, HeadTag, PageMetadata};
