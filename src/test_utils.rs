//! Fixture builders shared by the unit tests.

use crate::{CalendarDate, Config, DateRange, FormatRegistry};

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("valid fixture date")
}

pub fn range(min: CalendarDate, max: CalendarDate) -> DateRange {
    DateRange::new(min, max).expect("ordered fixture range")
}

/// 1 January of `first` through 31 December of `last`
pub fn year_range(first: i32, last: i32) -> DateRange {
    range(date(first, 1, 1), date(last, 12, 31))
}

pub fn registry() -> FormatRegistry {
    FormatRegistry::new(Config::default()).expect("built-in patterns compile")
}

pub fn bc_registry() -> FormatRegistry {
    FormatRegistry::new(Config::default().with_bc_years(true)).expect("built-in patterns compile")
}
