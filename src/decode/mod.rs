//! Decoding subsystem
//!
//! Turns raw bytes into a fully bound [`Uddf`] document:
//! - quick-xml's serde support walks the markup and binds tags to fields
//! - every scalar leaf goes through the lenient decoders in [`scalar`] and
//!   [`temporal`]
//! - any binder failure becomes a single [`DecodeError`] carrying the path
//!   of the offending node
//!
//! No partially bound document is ever returned.

mod errors;
pub mod scalar;
pub mod temporal;

pub use errors::{DecodeError, DecodeErrorKind, DecodeResult, TimeParseError};
pub use scalar::{decode_flag, decode_integer, decode_number};
pub use temporal::{decode_time, TimeLayout, UddfTime, LAYOUTS};

use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::model::Uddf;
use crate::observability::Event;

/// Decodes a UDDF document from raw bytes.
///
/// # Errors
///
/// Returns a structural [`DecodeError`] when the bytes are not UTF-8, the
/// markup is malformed, or a temporal leaf cannot be parsed.
pub fn decode(bytes: &[u8]) -> DecodeResult<Uddf> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        warn!(target: Event::DecodeFailed.as_str(), "input is not UTF-8: {}", e);
        DecodeError::from(e)
    })?;
    decode_str(text)
}

/// Decodes a UDDF document from text.
pub fn decode_str(text: &str) -> DecodeResult<Uddf> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    debug!(
        target: Event::DecodeStart.as_str(),
        "decoding UDDF document ({} bytes)", text.len()
    );

    let mut deserializer = quick_xml::de::Deserializer::from_str(text);
    let document: Uddf = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        let source = e.into_inner();
        warn!(
            target: Event::DecodeFailed.as_str(),
            "binder rejected document at '{}': {}", path, source
        );
        DecodeError::Malformed { path, source }
    })?;

    info!(
        target: Event::DecodeComplete.as_str(),
        "decoded UDDF document version '{}' with {} dive(s)",
        document.version,
        document.dives().count()
    );
    Ok(document)
}

/// Reads a stream to its end and decodes it.
///
/// # Errors
///
/// A failing read yields a resource-access error; everything after that
/// behaves like [`decode`].
pub fn decode_reader<R: Read>(mut reader: R) -> DecodeResult<Uddf> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DecodeError::Resource {
            resource: "<reader>".into(),
            source,
        })?;
    decode(&bytes)
}

/// Reads the named file and decodes it.
///
/// # Errors
///
/// A missing or unreadable file yields a resource-access error, distinct
/// from any structural failure of its content.
pub fn decode_from_path(path: impl AsRef<Path>) -> DecodeResult<Uddf> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| {
        warn!(
            target: Event::DecodeFailed.as_str(),
            "cannot read {}: {}", path.display(), source
        );
        DecodeError::Resource {
            resource: path.display().to_string(),
            source,
        }
    })?;
    decode(&bytes)
}
