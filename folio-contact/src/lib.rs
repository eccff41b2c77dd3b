//! Contact form state for the folio site.
//!
//! - Per-field validation (required name, email and message; advisory phone check)
//! - Touched tracking so problems only show after a blur or a submit attempt
//! - Submit gating, label variants and the preferred-contact choice
//! - The [`Submission`] payload posted to the form relay, hidden fields included
//!
//! Like the carousel crates this holds no UI objects: the UI forwards input/blur/click events
//! and renders the returned statuses.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod field;
mod form;
mod submission;


pub use field::{Field, FieldError, is_plausible_phone, is_valid_email};
pub use form::{ContactForm, ContactLabel, FieldState, FieldStatus, PreferredContact};
pub use submission::{AUTORESPONSE, SubmitError, Submission, TEMPLATE, subject_for};
