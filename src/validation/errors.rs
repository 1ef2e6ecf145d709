//! Validation report types
//!
//! A violation is data, not a failure of the engine: validation always
//! runs to completion and hands back every violation it found.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Kind of rule a violation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// No document was supplied at all
    Document,
    Required,
    Range,
    Enumeration,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Document => "document",
            RuleKind::Required => "required",
            RuleKind::Range => "range",
            RuleKind::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("field '{path}' ({rule}): expected {message}")]
pub struct Violation {
    /// Dotted path from the document root, sequence indices in brackets
    /// (e.g. "uddf.gasdefinitions.mix[0].o2")
    pub path: String,
    pub rule: RuleKind,
    /// Expected constraint, human readable
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rule,
            message: message.into(),
        }
    }

    pub fn missing_document() -> Self {
        Self::new("uddf", RuleKind::Document, "a document to be present")
    }

    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::new(path, RuleKind::Required, "field to be present")
    }

    pub fn out_of_range(path: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        Self::new(
            path,
            RuleKind::Range,
            format!("value in [{}, {}], got {}", min, max, actual),
        )
    }

    pub fn not_a_member(path: impl Into<String>, enumeration: &str, actual: &str) -> Self {
        Self::new(
            path,
            RuleKind::Enumeration,
            format!("one of {}, got '{}'", enumeration, actual),
        )
    }
}

/// Ordered result of one validation pass.
///
/// An empty report means the document is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Error)]
#[error("{}", describe(.violations))]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations reported at exactly `path`.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.path == path)
    }

    /// `Ok(())` when valid, the report itself otherwise.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn describe(violations: &[Violation]) -> String {
    if violations.is_empty() {
        return "document is valid".to_string();
    }
    let mut out = format!("{} validation violation(s)", violations.len());
    for violation in violations {
        out.push_str("\n  ");
        out.push_str(&violation.to_string());
    }
    out
}
