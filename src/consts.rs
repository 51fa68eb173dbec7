/// First slot of a flattened invalid pair: `["invalid", "<what the user typed>"]`
pub const INVALID_MARKER: &str = "invalid";

/// Bare year, e.g. `1905`
pub const YEAR_TEMPLATE: &str = "%Y";
/// Full ISO date, e.g. `1901-09-01`
pub const FULL_ISO_TEMPLATE: &str = "%Y-%m-%d";
/// Day-month-year with hyphens, e.g. `01-09-1901`
pub const FULL_ISO_REVERSED_TEMPLATE: &str = "%d-%m-%Y";
/// Day/month/year with slashes, e.g. `01/09/1901`
pub const FULL_SLASH_REVERSED_TEMPLATE: &str = "%d/%m/%Y";

/// Suffix of a BC year token, e.g. `1000 bc`
pub const BC_SUFFIX: &str = "bc";
/// BC years render zero-padded to this many digits (`01000 bc`)
pub const BC_YEAR_WIDTH: usize = 5;

/// Separates the two sides of a ranged shape
pub const RANGE_SEPARATOR: char = '-';
/// Range separator as the encoder writes it
pub const RENDERED_RANGE_SEPARATOR: &str = " - ";

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;
/// First day of any month
pub const FIRST_DAY: u32 = 1;
/// Last day of December
pub const LAST_DAY_OF_DECEMBER: u32 = 31;
/// One calendar year, used by the year-widening rule
pub const MONTHS_IN_YEAR: u32 = 12;

/// Time part of a canonical instant; every boundary sits on UTC midnight
pub const INSTANT_TIME_SUFFIX: &str = "T00:00:00.000Z";
/// Years outside `0..=9999` use the extended signed form in instants
pub const EXTENDED_YEAR_WIDTH: usize = 7;
/// Four-digit year range that renders without a sign
pub const PLAIN_YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Parse template accepting any canonical instant (time part ignored)
pub(crate) const INSTANT_PARSE_TEMPLATE: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
