//! Decode error types
//!
//! Error codes:
//! - UDDF_DECODE_ENCODING (structural)
//! - UDDF_DECODE_MALFORMED (structural)
//! - UDDF_RESOURCE_ACCESS (resource access)

use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Coarse classification of a decode failure.
///
/// Resource-access failures can be retried without re-attempting a parse;
/// structural failures mean the bytes themselves are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Malformed markup, unreadable encoding or a hard leaf failure
    Structural,
    /// The raw bytes could not be acquired
    ResourceAccess,
}

/// Errors produced while turning bytes into a [`Uddf`](crate::model::Uddf) document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not valid UTF-8
    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] Utf8Error),

    /// The binder rejected the document; `path` locates the offending node
    #[error("failed to decode UDDF document at '{path}': {source}")]
    Malformed {
        path: String,
        #[source]
        source: quick_xml::DeError,
    },

    /// The named resource could not be read
    #[error("failed to read {resource}: {source}")]
    Resource {
        resource: String,
        #[source]
        source: io::Error,
    },
}

impl DecodeError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Encoding(_) => "UDDF_DECODE_ENCODING",
            DecodeError::Malformed { .. } => "UDDF_DECODE_MALFORMED",
            DecodeError::Resource { .. } => "UDDF_RESOURCE_ACCESS",
        }
    }

    /// Returns the coarse error kind
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Encoding(_) | DecodeError::Malformed { .. } => DecodeErrorKind::Structural,
            DecodeError::Resource { .. } => DecodeErrorKind::ResourceAccess,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind() == DecodeErrorKind::Structural
    }

    pub fn is_resource_access(&self) -> bool {
        self.kind() == DecodeErrorKind::ResourceAccess
    }

    /// Field path of a binder failure, if known
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::Malformed { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// A temporal leaf matched none of the known layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse datetime '{raw}'")]
pub struct TimeParseError {
    raw: String,
}

impl TimeParseError {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The offending text, as supplied
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
