//! Bidirectional conversion between human-typed date-range text and a pair
//! of inclusive calendar-date boundaries.
//!
//! ```
//! use date_range_codec::{Config, FormatRegistry, RangeValue};
//!
//! let registry = FormatRegistry::new(Config::default()).unwrap();
//! let value = registry.decode("1905 - 1907");
//! assert!(value.is_valid());
//! assert_eq!(registry.encode(&value), "1905 - 1907");
//! assert_eq!(registry.decode("1907 - 1905"), RangeValue::Invalid("1907 - 1905".into()));
//! ```

#[macro_use]
mod macros;

mod consts;
mod decode;
mod encode;
mod prelude;
mod range;
mod registry;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use decode::DecodeError;
pub use range::{DateRange, RangeError, RangeValue};
pub use registry::{Config, FormatRegistry, Shape, TextFormat};
pub use types::Era;

use crate::prelude::*;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// A date-only boundary normalized to UTC midnight.
///
/// Proleptic Gregorian with an astronomical (signed) year, so BC years are
/// ordinary values rather than a separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Date out of range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from astronomical year, month and day, rejecting
    /// anything that is not a real calendar day.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` for e.g. month 13 or February 30.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ParseError::InvalidDate { year, month, day })
    }

    /// 1 January of `year`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the year is outside chrono's range.
    pub fn start_of_year(year: i32) -> Result<Self, ParseError> {
        Self::from_ymd(year, JANUARY, FIRST_DAY)
    }

    /// 1 January of a year counted within `era` (`1000 bc` is `(Bce, 1000)`)
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` if the year does not fit the calendar.
    pub fn from_era_year(era: Era, era_year: u32) -> Result<Self, ParseError> {
        let year = i32::try_from(era_year).map_err(|_| ParseError::OutOfRange(format!("{era_year} {era}")))?;
        Self::start_of_year(era.astronomical(year))
            .map_err(|_| ParseError::OutOfRange(format!("{era_year} {era}")))
    }

    /// Signed astronomical year
    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn era(&self) -> Era {
        Era::of_year(self.year())
    }

    /// Year as counted within its own era (always non-negative)
    pub fn era_year(&self) -> u32 {
        self.year().unsigned_abs()
    }

    /// Last day of the one-year span starting here: `self + 1 year - 1 day`.
    ///
    /// Year addition clamps to the end of the month, so 2020-02-29 spans to
    /// 2021-02-27. Returns `None` past the end of the supported calendar.
    pub fn end_of_year_span(&self) -> Option<Self> {
        self.0
            .checked_add_months(Months::new(MONTHS_IN_YEAR))
            .and_then(|d| d.pred_opt())
            .map(Self)
    }

    pub fn is_start_of_year(&self) -> bool {
        self.month() == JANUARY && self.day() == FIRST_DAY
    }

    pub fn is_end_of_year(&self) -> bool {
        self.month() == DECEMBER && self.day() == LAST_DAY_OF_DECEMBER
    }

    /// Parses one date with a chrono template such as `%d/%m/%Y`.
    ///
    /// # Errors
    /// `OutOfRange` when the text has the right shape but names no real day,
    /// `InvalidFormat` when it does not fit the template at all.
    pub fn parse_with(text: &str, template: &str) -> Result<Self, ParseError> {
        use chrono::format::ParseErrorKind;

        NaiveDate::parse_from_str(text, template).map(Self).map_err(|e| match e.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                ParseError::OutOfRange(format!("{text}: {e}"))
            },
            _ => ParseError::InvalidFormat(format!("{text}: {e}")),
        })
    }

    /// Renders with a chrono template such as `%d/%m/%Y`
    pub fn format_with(&self, template: &str) -> String {
        self.0.format(template).to_string()
    }

    /// Canonical UTC instant of this day's midnight, e.g.
    /// `1905-01-01T00:00:00.000Z`. Years outside `0..=9999` use the extended
    /// signed form (`-001000-01-01T00:00:00.000Z`).
    pub fn to_instant_string(&self) -> String {
        let year = self.year();
        let (month, day) = (self.month(), self.day());
        if PLAIN_YEAR_RANGE.contains(&year) {
            format!("{year:04}-{month:02}-{day:02}{INSTANT_TIME_SUFFIX}")
        } else {
            format!("{year:+0width$}-{month:02}-{day:02}{INSTANT_TIME_SUFFIX}", width = EXTENDED_YEAR_WIDTH)
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_instant_string())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts a canonical instant (any offset, time of day dropped after
    /// normalizing to UTC) or a bare `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(instant.with_timezone(&Utc).date_naive()));
        }
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, INSTANT_PARSE_TEMPLATE) {
            return Ok(Self(instant.date()));
        }
        NaiveDate::parse_from_str(trimmed, FULL_ISO_TEMPLATE)
            .map(Self)
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_instant_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
