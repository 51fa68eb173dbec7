use crate::{
    BC_SUFFIX, CalendarDate, DateRange, Era, FormatRegistry, ParseError, RANGE_SEPARATOR, RangeValue, Shape,
};

/// Why a piece of text failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The text fits none of the enabled shapes.
    #[error("No date range format matches: {0}")]
    NoMatchingShape(String),

    /// The text fits a shape but names no real calendar day.
    #[error("Invalid {shape} '{input}': {source}")]
    InvalidDate {
        shape:  Shape,
        input:  String,
        #[source]
        source: ParseError,
    },

    /// Max boundary falls before min boundary.
    #[error("Invalid date range: max ({max}) is before min ({min})")]
    Reversed { min: CalendarDate, max: CalendarDate },

    /// Widening a year ran past the end of the calendar.
    #[error("Date out of range: {0}")]
    OutOfRange(String),

    /// A ranged shape matched but its separator could not be located.
    #[error("Range separator not found in: {0}")]
    MissingSeparator(String),
}

impl FormatRegistry {
    /// Decodes free text into a range.
    ///
    /// Only the empty string is `Empty`; anything else that fails to decode
    /// comes back as `Invalid` carrying the trimmed text.
    #[cfg_attr(not(feature = "logs"), allow(unused_variables))]
    pub fn decode(&self, raw: &str) -> RangeValue {
        match self.try_decode(raw) {
            Ok(None) => RangeValue::Empty,
            Ok(Some(range)) => RangeValue::Valid(range),
            Err(error) => {
                log_debug!(input = raw, %error, "date range rejected");
                RangeValue::Invalid(raw.trim().to_owned())
            },
        }
    }

    /// Same algorithm as [`decode`](Self::decode), keeping the failure reason.
    ///
    /// # Errors
    /// See [`DecodeError`].
    pub fn try_decode(&self, raw: &str) -> Result<Option<DateRange>, DecodeError> {
        if raw.is_empty() {
            return Ok(None);
        }

        let trimmed = raw.trim();
        let shape = self
            .formats()
            .iter()
            .find(|format| format.is_match(trimmed))
            .map(|format| format.shape())
            .ok_or_else(|| DecodeError::NoMatchingShape(trimmed.to_owned()))?;

        log_trace!(input = trimmed, %shape, "matched shape");

        let (min, max) = match shape.sides() {
            None => {
                let date = parse_side(shape, trimmed)?;
                (date, widen(shape, date)?)
            },
            Some((min_shape, max_shape)) => {
                let (left, right) = split_range(trimmed, shape.separators_per_side())?;
                let min = parse_side(min_shape, left)?;
                let max = widen(max_shape, parse_side(max_shape, right)?)?;
                (min, max)
            },
        };

        DateRange::new(min, max)
            .map(Some)
            .map_err(|_| DecodeError::Reversed { min, max })
    }

    /// Whether the text would be rejected
    pub fn is_invalid(&self, raw: &str) -> bool {
        self.decode(raw).is_invalid()
    }
}

/// Parses one side with the rule of its single-date shape. Year shapes give
/// 1 January; widening the max side is left to [`widen`].
fn parse_side(shape: Shape, text: &str) -> Result<CalendarDate, DecodeError> {
    let invalid = |source: ParseError| DecodeError::InvalidDate {
        shape,
        input: text.to_owned(),
        source,
    };

    match shape {
        Shape::Year => {
            let year = text
                .parse::<i32>()
                .map_err(|_| invalid(ParseError::InvalidFormat(text.to_owned())))?;
            CalendarDate::start_of_year(year).map_err(invalid)
        },
        Shape::YearBc => {
            let digits = strip_bc_suffix(text);
            let year = digits
                .parse::<u32>()
                .map_err(|_| invalid(ParseError::InvalidFormat(text.to_owned())))?;
            CalendarDate::from_era_year(Era::Bce, year).map_err(invalid)
        },
        _ => CalendarDate::parse_with(text, shape.template()).map_err(invalid),
    }
}

fn widen(shape: Shape, date: CalendarDate) -> Result<CalendarDate, DecodeError> {
    if !shape.is_year() {
        return Ok(date);
    }
    date.end_of_year_span()
        .ok_or_else(|| DecodeError::OutOfRange(date.to_string()))
}

/// `1000 b.c.` -> `1000`
fn strip_bc_suffix(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '.' || BC_SUFFIX.contains(c))
        .trim_end()
}

/// Splits at the range separator that follows `skip` in-date separators,
/// trimming both halves.
fn split_range(text: &str, skip: usize) -> Result<(&str, &str), DecodeError> {
    let (pos, _) = text
        .match_indices(RANGE_SEPARATOR)
        .nth(skip)
        .ok_or_else(|| DecodeError::MissingSeparator(text.to_owned()))?;
    let (left, right) = (&text[..pos], &text[pos + RANGE_SEPARATOR.len_utf8()..]);
    Ok((left.trim(), right.trim()))
}
