//! Lenient numeric decoding for UDDF leaves
//!
//! Exports from dive computers and logbooks routinely carry numbers that do
//! not parse ("n/a", "12,5", stray units). A numeric leaf never aborts the
//! document: empty text and malformed text both decode to `None`, and only
//! the malformed case leaves a `NUMERIC_VALUE_DISCARDED` diagnostic behind.

use std::fmt::Display;
use std::str::FromStr;

use log::warn;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::temporal::{decode_time, UddfTime};
use crate::observability::Event;

/// Decodes a real number.
///
/// Surrounding whitespace is ignored. Empty text is absent; text that is
/// not a real number is absent as well.
pub fn decode_number(raw: &str) -> Option<f64> {
    decode_flexible(raw)
}

/// Decodes an integer under the same contract as [`decode_number`].
pub fn decode_integer(raw: &str) -> Option<i64> {
    decode_flexible(raw)
}

fn decode_flexible<T>(raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                target: Event::NumericValueDiscarded.as_str(),
                "skipping invalid number '{}': {}", trimmed, e
            );
            None
        }
    }
}

/// Decodes a presence flag (`<nosuit/>`).
///
/// An explicit `false`/`no`/`0` body turns the flag off; any other body,
/// including none, turns it on.
pub fn decode_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "no" | "0"
    )
}

/// `deserialize_with` adapters binding leaves to the decoders above.
///
/// Each adapter reads the raw text of the bound node. Absent nodes never
/// reach an adapter; fields using them carry `#[serde(default)]`.
pub(crate) mod de {
    use super::*;

    pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(decode_number(&raw))
    }

    pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(decode_integer(&raw))
    }

    pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(decode_flag(&raw))
    }

    pub(crate) fn time<'de, D>(deserializer: D) -> Result<Option<UddfTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_time(&raw).map(Some).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parses_plain_values() {
        assert_eq!(decode_number("0.21"), Some(0.21));
        assert_eq!(decode_number("-3"), Some(-3.0));
        assert_eq!(decode_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_number_trims_whitespace() {
        assert_eq!(decode_number("  18.5\n"), Some(18.5));
        assert_eq!(decode_number("\t42\t"), Some(42.0));
    }

    #[test]
    fn test_number_empty_is_absent() {
        assert_eq!(decode_number(""), None);
        assert_eq!(decode_number("   "), None);
        assert_eq!(decode_number("\n\t "), None);
    }

    #[test]
    fn test_number_malformed_is_absent() {
        assert_eq!(decode_number("n/a"), None);
        assert_eq!(decode_number("12,5"), None);
        assert_eq!(decode_number("10 m"), None);
    }

    #[test]
    fn test_zero_is_present() {
        assert_eq!(decode_number("0"), Some(0.0));
        assert_eq!(decode_integer("0"), Some(0));
    }

    #[test]
    fn test_integer_contract() {
        assert_eq!(decode_integer(" 7 "), Some(7));
        assert_eq!(decode_integer(""), None);
        assert_eq!(decode_integer("seven"), None);
        assert_eq!(decode_integer("7.5"), None);
    }

    #[test]
    fn test_flag() {
        assert!(decode_flag(""));
        assert!(decode_flag("  "));
        assert!(decode_flag("true"));
        assert!(decode_flag("yes"));
        assert!(!decode_flag("false"));
        assert!(!decode_flag(" NO "));
        assert!(!decode_flag("0"));
    }
}
