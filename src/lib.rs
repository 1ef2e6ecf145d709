//! uddf - decoding and validation of UDDF dive logs
//!
//! A document goes through two independent stages:
//! - [`decode`] binds the markup onto the entity model in [`model`],
//!   degrading malformed numbers to absent values and rejecting
//!   unparseable timestamps
//! - [`validate`] evaluates the declarative rule table and returns every
//!   violation found
//!
//! A decoded document may still be invalid; a document that fails to
//! decode is never returned at all.

pub mod cli;
pub mod decode;
pub mod model;
pub mod observability;
pub mod validation;

pub use decode::{decode, decode_from_path, decode_reader, decode_str, DecodeError, DecodeResult};
pub use model::Uddf;
pub use validation::{validate, ValidationReport, Violation};
