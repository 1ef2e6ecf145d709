//! Validation subsystem
//!
//! Walks a fully bound document and evaluates the declarative rule table:
//! - Required: the field must be present (blank text and empty sequences
//!   count as absent)
//! - Range: inclusive numeric bounds, absent values exempt
//! - Enumeration: trimmed value must be one of a closed keyword set,
//!   absent values exempt
//!
//! Validation never fails: it always returns a complete, ordered report.

mod errors;
pub mod rules;
mod validator;

pub use errors::{RuleKind, ValidationReport, Violation};
pub use rules::{Enumeration, FieldRule, Rule, UDDF_RULES};
pub use validator::{Validator, ROOT};

use std::sync::OnceLock;

use crate::model::Uddf;

static DEFAULT_VALIDATOR: OnceLock<Validator> = OnceLock::new();

/// Validates a document against [`UDDF_RULES`].
///
/// Accepts an absent document so callers never need a prior check; that
/// case is reported as a single violation.
pub fn validate(document: Option<&Uddf>) -> ValidationReport {
    DEFAULT_VALIDATOR
        .get_or_init(Validator::default)
        .validate_document(document)
}
