//! Multi-layout temporal decoding
//!
//! UDDF producers disagree on how to write a point in time. The accepted
//! layouts form a fixed, ordered list; the first layout that matches wins.
//! Unlike numbers, a temporal leaf that is present but matches no layout is
//! a hard failure. Empty text matches no layout.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::errors::TimeParseError;

/// One accepted textual layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLayout {
    /// Date, time and an explicit `Z` or numeric offset
    Offset,
    /// Calendar date only, midnight UTC
    Date(&'static str),
    /// Date and time without an offset, read as UTC
    Naive(&'static str),
    /// Four-digit year, January 1st at midnight UTC
    Year,
}

/// Accepted layouts, in priority order.
pub static LAYOUTS: &[TimeLayout] = &[
    TimeLayout::Offset,
    TimeLayout::Date("%Y-%m-%d"),
    TimeLayout::Naive("%Y-%m-%dT%H:%M:%SZ"),
    TimeLayout::Naive("%Y-%m-%dT%H:%M:%S%.f"),
    TimeLayout::Naive("%Y-%m-%dT%H:%M"),
    TimeLayout::Year,
];

impl TimeLayout {
    fn parse(&self, text: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeLayout::Offset => DateTime::parse_from_rfc3339(text).ok(),
            TimeLayout::Date(format) => {
                let date = NaiveDate::parse_from_str(text, format).ok()?;
                date.and_hms_opt(0, 0, 0).map(as_utc)
            }
            TimeLayout::Naive(format) => NaiveDateTime::parse_from_str(text, format).ok().map(as_utc),
            TimeLayout::Year => {
                if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let year = text.parse::<i32>().ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)?
                    .and_hms_opt(0, 0, 0)
                    .map(as_utc)
            }
        }
    }
}

fn as_utc(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    Utc.from_utc_datetime(&naive).into()
}

/// Decodes a point in time, trying each of [`LAYOUTS`] in order.
pub fn decode_time(raw: &str) -> Result<UddfTime, TimeParseError> {
    let trimmed = raw.trim();
    LAYOUTS
        .iter()
        .find_map(|layout| layout.parse(trimmed))
        .map(UddfTime)
        .ok_or_else(|| TimeParseError::new(raw))
}

/// Canonical point in time carried by a temporal leaf.
///
/// The offset is kept when the source spelled one out, otherwise it is UTC.
/// Equality and ordering compare instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UddfTime(DateTime<FixedOffset>);

impl UddfTime {
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

impl From<UddfTime> for DateTime<FixedOffset> {
    fn from(time: UddfTime) -> Self {
        time.0
    }
}

impl fmt::Display for UddfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UddfTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode_time(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for UddfTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
