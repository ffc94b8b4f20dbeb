//! Contact form data model and field validation.

mod draft;
mod validate;

pub use draft::{Field, MessageDraft};
pub use validate::{validate, validate_form};
