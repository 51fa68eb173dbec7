use crate::{
    BC_SUFFIX, BC_YEAR_WIDTH, CalendarDate, FormatRegistry, INVALID_MARKER, RENDERED_RANGE_SEPARATOR, RangeValue,
    Shape,
};

impl FormatRegistry {
    /// Renders a value in the most concise convention that decodes back to it.
    ///
    /// `Empty` renders as `""`; `Invalid` gives back the text the user typed.
    pub fn encode(&self, value: &RangeValue) -> String {
        match value {
            RangeValue::Empty => String::new(),
            RangeValue::Invalid(raw) => raw.clone(),
            RangeValue::Valid(range) => self.encode_bounds(Some(range.min()), Some(range.max())),
        }
    }

    /// Renders the two-slot form of a value: a pair of canonical instants, or
    /// `INVALID_MARKER` followed by the raw text. Missing or unreadable sides
    /// render as `""`.
    pub fn encode_pair(&self, min: Option<&str>, max: Option<&str>) -> String {
        match (min, max) {
            (Some(INVALID_MARKER), Some(raw)) => raw.to_owned(),
            (Some(min), Some(max)) => match (min.parse::<CalendarDate>(), max.parse::<CalendarDate>()) {
                (Ok(min), Ok(max)) => self.encode_bounds(Some(min), Some(max)),
                _ => String::new(),
            },
            _ => String::new(),
        }
    }

    /// Renders a raw pair of boundaries. Ordering is not checked.
    ///
    /// Rules, first match wins:
    /// 1. either side missing: `""`
    /// 2. one whole BC year: `01000 bc`
    /// 3. any BC side: `01000 bc - 0500`
    /// 4. a single day: `01/09/1901`
    /// 5. one whole calendar year: `1905`
    /// 6. whole years: `1905 - 1907`
    /// 7. anything else: `01/09/1901 - 05/09/1901`
    pub fn encode_bounds(&self, min: Option<CalendarDate>, max: Option<CalendarDate>) -> String {
        let (Some(min), Some(max)) = (min, max) else {
            return String::new();
        };

        // The year rules also need min on 1 January, otherwise the rendered
        // year would decode to a different span.
        let is_whole_year = min.is_start_of_year() && min.end_of_year_span() == Some(max);
        let (min_bc, max_bc) = (min.era().is_bc(), max.era().is_bc());

        if min_bc && is_whole_year {
            return bc_year_token(min);
        }

        if min_bc || max_bc {
            return format!("{}{RENDERED_RANGE_SEPARATOR}{}", year_token(min), year_token(max));
        }

        let day_template = Shape::FullSlashReversed.template();
        let year_template = Shape::Year.template();

        if min == max {
            return min.format_with(day_template);
        }

        if is_whole_year {
            return min.format_with(year_template);
        }

        if min.is_start_of_year() && max.is_end_of_year() {
            return format!(
                "{}{RENDERED_RANGE_SEPARATOR}{}",
                min.format_with(year_template),
                max.format_with(year_template)
            );
        }

        format!(
            "{}{RENDERED_RANGE_SEPARATOR}{}",
            min.format_with(day_template),
            max.format_with(day_template)
        )
    }
}

fn year_token(date: CalendarDate) -> String {
    if date.era().is_bc() {
        bc_year_token(date)
    } else {
        date.format_with(Shape::Year.template())
    }
}

fn bc_year_token(date: CalendarDate) -> String {
    format!("{:0width$} {BC_SUFFIX}", date.era_year(), width = BC_YEAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{bc_registry, date, range, registry, year_range};

    #[test]
    fn test_missing_sides() {
        let registry = registry();
        assert_eq!(registry.encode(&RangeValue::Empty), "");
        assert_eq!(registry.encode_bounds(None, Some(date(1905, 1, 1))), "");
        assert_eq!(registry.encode_bounds(Some(date(1905, 1, 1)), None), "");
        assert_eq!(registry.encode_pair(None, None), "");
        assert_eq!(registry.encode_pair(Some("1905-01-01T00:00:00.000Z"), None), "");
    }

    #[test]
    fn test_invalid_passes_through() {
        let registry = registry();
        assert_eq!(
            registry.encode(&RangeValue::Invalid("1907 - 1905".to_owned())),
            "1907 - 1905"
        );
        assert_eq!(registry.encode_pair(Some("invalid"), Some("13/13/1901")), "13/13/1901");
    }

    #[test]
    fn test_encode_cases() {
        struct TestCase {
            min:         CalendarDate,
            max:         CalendarDate,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                min:         date(1901, 9, 1),
                max:         date(1901, 9, 1),
                expected:    "01/09/1901",
                description: "single day",
            },
            TestCase {
                min:         date(1905, 1, 1),
                max:         date(1905, 1, 1),
                expected:    "01/01/1905",
                description: "single day on 1 January is not a year",
            },
            TestCase {
                min:         date(1905, 1, 1),
                max:         date(1905, 12, 31),
                expected:    "1905",
                description: "whole year",
            },
            TestCase {
                min:         date(2020, 1, 1),
                max:         date(2020, 12, 31),
                expected:    "2020",
                description: "whole leap year",
            },
            TestCase {
                min:         date(50, 1, 1),
                max:         date(50, 12, 31),
                expected:    "0050",
                description: "small year is zero padded",
            },
            TestCase {
                min:         date(1905, 1, 1),
                max:         date(1907, 12, 31),
                expected:    "1905 - 1907",
                description: "several whole years",
            },
            TestCase {
                min:         date(1905, 3, 15),
                max:         date(1906, 3, 14),
                expected:    "15/03/1905 - 14/03/1906",
                description: "year-long span off the calendar year",
            },
            TestCase {
                min:         date(1901, 9, 1),
                max:         date(1901, 9, 5),
                expected:    "01/09/1901 - 05/09/1901",
                description: "general range",
            },
            TestCase {
                min:         date(1905, 1, 1),
                max:         date(1907, 6, 30),
                expected:    "01/01/1905 - 30/06/1907",
                description: "starts on a year boundary only",
            },
        ];

        let registry = registry();
        for case in &cases {
            assert_eq!(
                registry.encode_bounds(Some(case.min), Some(case.max)),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_bc_cases() {
        struct TestCase {
            min:         CalendarDate,
            max:         CalendarDate,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                min:         date(-1000, 1, 1),
                max:         date(-1000, 12, 31),
                expected:    "01000 bc",
                description: "one BC year",
            },
            TestCase {
                min:         date(-1000, 1, 1),
                max:         date(-500, 12, 31),
                expected:    "01000 bc - 00500 bc",
                description: "BC year range",
            },
            TestCase {
                min:         date(-1000, 1, 1),
                max:         date(500, 12, 31),
                expected:    "01000 bc - 0500",
                description: "BC to AD range",
            },
        ];

        // BC boundaries render whether or not BC input is accepted
        for registry in [registry(), bc_registry()] {
            for case in &cases {
                assert_eq!(
                    registry.encode_bounds(Some(case.min), Some(case.max)),
                    case.expected,
                    "{}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_encode_value() {
        let registry = registry();
        assert_eq!(registry.encode(&year_range(1905, 1907).into()), "1905 - 1907");
        assert_eq!(
            registry.encode(&range(date(1901, 9, 1), date(1901, 9, 1)).into()),
            "01/09/1901"
        );
    }

    #[test]
    fn test_encode_pair_of_instants() {
        let registry = registry();
        assert_eq!(
            registry.encode_pair(Some("1905-01-01T00:00:00.000Z"), Some("1907-12-31T00:00:00.000Z")),
            "1905 - 1907"
        );
        assert_eq!(registry.encode_pair(Some("garbage"), Some("1907-12-31T00:00:00.000Z")), "");
    }

    #[test]
    fn test_bc_year_token() {
        assert_eq!(bc_year_token(date(-1000, 1, 1)), "01000 bc");
        assert_eq!(bc_year_token(date(-123_456, 1, 1)), "123456 bc");
        assert_eq!(year_token(date(1905, 1, 1)), "1905");
    }
}
