//! CLI-specific error types

use std::io;

use serde_json::Value;
use thiserror::Error;

use crate::decode::DecodeError;
use crate::validation::ValidationReport;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// I/O error (stdout)
    IoError,
    /// The document could not be decoded; carries the decode error code
    DecodeFailed(&'static str),
    /// The document decoded but broke at least one rule
    ValidationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "UDDF_CLI_IO_ERROR",
            Self::DecodeFailed(code) => *code,
            Self::ValidationFailed => "UDDF_VALIDATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
#[error("{}: {message}", .code.code())]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    details: Option<Value>,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Attach structured details to the error response
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DecodeError> for CliError {
    fn from(e: DecodeError) -> Self {
        let err = Self::new(CliErrorCode::DecodeFailed(e.code()), e.to_string());
        match e.path() {
            Some(path) => err.with_details(serde_json::json!({ "path": path })),
            None => err,
        }
    }
}

impl From<ValidationReport> for CliError {
    fn from(report: ValidationReport) -> Self {
        let details = serde_json::to_value(report.violations()).unwrap_or(Value::Null);
        Self::new(
            CliErrorCode::ValidationFailed,
            format!("{} validation violation(s)", report.len()),
        )
        .with_details(serde_json::json!({ "violations": details }))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn test_decode_error_keeps_library_code() {
        let err = crate::decode::decode(&[0xff]).unwrap_err();
        let cli: CliError = err.into();
        assert_eq!(cli.code_str(), "UDDF_DECODE_ENCODING");
    }

    #[test]
    fn test_display_prefixes_code() {
        let err = CliError::io_error("broken pipe");
        assert_eq!(err.to_string(), "UDDF_CLI_IO_ERROR: broken pipe");
    }

    #[test]
    fn test_validation_report_lists_violations() {
        let report = ValidationReport::new(vec![Violation::missing_field("uddf.diver")]);
        let cli: CliError = report.into();
        assert_eq!(cli.code_str(), "UDDF_VALIDATION_FAILED");
        let details = cli.details().unwrap();
        assert_eq!(details["violations"][0]["path"], "uddf.diver");
        assert_eq!(details["violations"][0]["rule"], "required");
    }
}
