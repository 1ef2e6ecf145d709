//! Observable events
//!
//! Every diagnostic emitted by the crate names one of these events as its
//! log target, so that structured output can be filtered on it.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Decoding
    /// Binding of a document begins
    DecodeStart,
    /// Document fully bound
    DecodeComplete,
    /// Decoding aborted (encoding, markup, temporal leaf or I/O)
    DecodeFailed,
    /// A numeric leaf did not parse and was dropped
    NumericValueDiscarded,

    // Validation
    /// Rule table evaluated against a document
    ValidationComplete,
}

impl Event {
    /// All events, in declaration order.
    pub const ALL: [Event; 5] = [
        Event::DecodeStart,
        Event::DecodeComplete,
        Event::DecodeFailed,
        Event::NumericValueDiscarded,
        Event::ValidationComplete,
    ];

    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::DecodeStart => "DECODE_START",
            Event::DecodeComplete => "DECODE_COMPLETE",
            Event::DecodeFailed => "DECODE_FAILED",
            Event::NumericValueDiscarded => "NUMERIC_VALUE_DISCARDED",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
