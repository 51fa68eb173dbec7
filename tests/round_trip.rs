use date_range_codec::{CalendarDate, Config, DateRange, FormatRegistry, RangeValue, Shape};

fn registry() -> FormatRegistry {
    FormatRegistry::new(Config::default()).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

fn assert_round_trip(registry: &FormatRegistry, min: CalendarDate, max: CalendarDate) {
    let value = RangeValue::Valid(DateRange::new(min, max).unwrap());
    let text = registry.encode(&value);
    assert_eq!(registry.decode(&text), value, "'{text}' should decode back to {min}..{max}");
    assert_eq!(registry.encode(&registry.decode(&text)), text, "'{text}' should be stable");
}

#[test]
fn single_days_round_trip() {
    let registry = registry();
    for year in [100, 999, 1000, 1900, 1901, 2000, 2020, 2024, 9999] {
        for (month, day) in [(1, 1), (2, 28), (6, 15), (9, 1), (12, 31)] {
            let d = date(year, month, day);
            assert_round_trip(&registry, d, d);
        }
    }
    assert_round_trip(&registry, date(2020, 2, 29), date(2020, 2, 29));
}

#[test]
fn single_day_decodes_to_midnight_instants() {
    let registry = registry();
    let d = date(1901, 9, 1);
    let text = registry.encode_bounds(Some(d), Some(d));
    assert_eq!(text, "01/09/1901");
    assert_eq!(
        registry.decode(&text).into_pair(),
        (
            Some("1901-09-01T00:00:00.000Z".to_owned()),
            Some("1901-09-01T00:00:00.000Z".to_owned())
        )
    );
}

#[test]
fn whole_years_round_trip_as_bare_years() {
    let registry = registry();
    for year in (100..=9999).step_by(97) {
        let (min, max) = (date(year, 1, 1), date(year, 12, 31));
        assert_eq!(registry.encode_bounds(Some(min), Some(max)), format!("{year:04}"));
        assert_round_trip(&registry, min, max);
    }
}

#[test]
fn year_spans_and_general_ranges_round_trip() {
    let registry = registry();
    assert_round_trip(&registry, date(1905, 1, 1), date(1907, 12, 31));
    assert_round_trip(&registry, date(1901, 9, 1), date(1901, 9, 5));
    assert_round_trip(&registry, date(1905, 3, 15), date(1906, 3, 14));
    assert_round_trip(&registry, date(2020, 2, 29), date(2021, 2, 27));
    assert_round_trip(&registry, date(1999, 12, 31), date(2000, 1, 1));
}

#[test]
fn year_range_decodes_and_encodes() {
    let registry = registry();
    let value = registry.decode("1905 - 1907");
    assert_eq!(
        value.clone().into_pair(),
        (
            Some("1905-01-01T00:00:00.000Z".to_owned()),
            Some("1907-12-31T00:00:00.000Z".to_owned())
        )
    );
    assert_eq!(registry.encode(&value), "1905 - 1907");
}

#[test]
fn every_accepted_convention_reencodes_to_a_decodable_string() {
    let registry = FormatRegistry::new(Config::default().with_bc_years(true)).unwrap();
    for shape in Shape::ALL {
        let value = registry.decode(shape.example());
        assert!(value.is_valid(), "{} should decode", shape.example());
        let text = registry.encode(&value);
        assert_eq!(registry.decode(&text), value, "{shape}: '{text}'");
    }
}

#[test]
fn empty_and_invalid_values() {
    let registry = registry();
    assert_eq!(registry.decode(""), RangeValue::Empty);
    assert_eq!(registry.encode(&RangeValue::Empty), "");

    for input in ["2020-02-30", "1907 - 1905", "not a date"] {
        let value = registry.decode(input);
        assert_eq!(value, RangeValue::Invalid(input.to_owned()));
        assert_eq!(registry.encode(&value), input);
    }
}

#[test]
fn legacy_pair_shape_round_trips_through_json() {
    let registry = registry();
    for input in ["", "1905", "01/09/1901 - 05/09/1901", "13/13/1901"] {
        let value = registry.decode(input);
        let json = serde_json::to_string(&value).unwrap();
        let parsed: RangeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value, "{json}");
    }
}
