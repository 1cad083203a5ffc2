//! Contact form domain: submission input, validation, the accepted record,
//! and the volatile in-memory store.
//!
//! This crate knows nothing about HTTP or SMTP; the web layer feeds it raw
//! field values and disposes of the records it produces.

mod record;
mod store;
mod submission;

pub use record::{ContactRecord, DEFAULT_SUBJECT};
pub use store::ContactStore;
pub use submission::{ContactSubmission, ValidationError};
