use serde::{Deserialize, Serialize, de::Error as _};

use crate::{CalendarDate, INVALID_MARKER, ParseError, prelude::*};

/// Inclusive pair of calendar-date boundaries with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct DateRange {
    min: CalendarDate,
    max: CalendarDate,
}

/// Error type for building date ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Max boundary falls before min boundary.
    #[error("Invalid date range: max ({max}) is before min ({min})")]
    Reversed { min: CalendarDate, max: CalendarDate },

    /// Error parsing a boundary.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Exactly one boundary present.
    #[error("Open-ended ranges are not supported")]
    HalfOpen,
}

impl DateRange {
    /// Creates a new range, rejecting `max < min` rather than swapping.
    ///
    /// # Errors
    /// Returns `RangeError::Reversed` if max is before min.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, RangeError> {
        if max < min {
            return Err(RangeError::Reversed { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range covering exactly one day
    pub const fn single_day(date: CalendarDate) -> Self {
        Self { min: date, max: date }
    }

    /// Parses both boundaries from canonical instants.
    ///
    /// # Errors
    /// Returns `RangeError::Parse` for unreadable instants and
    /// `RangeError::Reversed` if they are out of order.
    pub fn from_instants(min: &str, max: &str) -> Result<Self, RangeError> {
        Self::new(min.parse()?, max.parse()?)
    }

    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    pub const fn bounds(&self) -> (CalendarDate, CalendarDate) {
        (self.min, self.max)
    }

    pub fn is_single_day(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.min <= *date && *date <= self.max
    }

    /// Both boundaries as canonical UTC instants
    pub fn to_instants(&self) -> (String, String) {
        (self.min.to_instant_string(), self.max.to_instant_string())
    }
}

/// Outcome of decoding user text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RangeValue {
    /// Nothing entered.
    Empty,
    /// A well-formed, ordered range.
    Valid(DateRange),
    /// Text that could not be decoded, kept verbatim (trimmed) for redisplay.
    Invalid(String),
}

impl RangeValue {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub const fn range(&self) -> Option<&DateRange> {
        match self {
            Self::Valid(range) => Some(range),
            Self::Empty | Self::Invalid(_) => None,
        }
    }

    /// Rejected input text, if any
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Invalid(raw) => Some(raw),
            Self::Empty | Self::Valid(_) => None,
        }
    }

    /// Flattens into the two-slot form: `(None, None)` when empty, a pair of
    /// instants when valid, `(INVALID_MARKER, raw)` when invalid.
    pub fn into_pair(self) -> (Option<String>, Option<String>) {
        match self {
            Self::Empty => (None, None),
            Self::Valid(range) => {
                let (min, max) = range.to_instants();
                (Some(min), Some(max))
            },
            Self::Invalid(raw) => (Some(INVALID_MARKER.to_owned()), Some(raw)),
        }
    }

    /// Rebuilds a value from the two-slot form.
    ///
    /// # Errors
    /// Returns `RangeError::HalfOpen` if exactly one slot is present, and
    /// parse or ordering errors for unreadable instants.
    pub fn from_pair(min: Option<&str>, max: Option<&str>) -> Result<Self, RangeError> {
        match (min, max) {
            (None, None) => Ok(Self::Empty),
            (Some(INVALID_MARKER), Some(raw)) => Ok(Self::Invalid(raw.to_owned())),
            (Some(min), Some(max)) => DateRange::from_instants(min, max).map(Self::Valid),
            (Some(_), None) | (None, Some(_)) => Err(RangeError::HalfOpen),
        }
    }
}

impl From<DateRange> for RangeValue {
    fn from(range: DateRange) -> Self {
        Self::Valid(range)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.min, self.max).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (min, max) = <(CalendarDate, CalendarDate)>::deserialize(deserializer)?;
        Self::new(min, max).map_err(D::Error::custom)
    }
}

impl Serialize for RangeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.clone().into_pair().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RangeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (min, max) = <(Option<String>, Option<String>)>::deserialize(deserializer)?;
        Self::from_pair(min.as_deref(), max.as_deref()).map_err(D::Error::custom)
    }
}
