use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    FULL_ISO_REVERSED_TEMPLATE, FULL_ISO_TEMPLATE, FULL_SLASH_REVERSED_TEMPLATE, YEAR_TEMPLATE,
    prelude::*,
};

/// One recognized textual convention for writing a date or a date range.
///
/// Declaration order is precedence order: the decoder tries shapes from
/// first to last and the first structural match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Shape {
    /// `1905`
    #[display(fmt = "year")]
    Year,
    /// `1905 - 1907`
    #[display(fmt = "year range")]
    YearPair,
    /// `1901-09-01`
    #[display(fmt = "ISO date")]
    FullIso,
    /// `1901-09-01 - 1901-09-05`
    #[display(fmt = "ISO date range")]
    FullIsoPair,
    /// `01-09-1901`
    #[display(fmt = "day-month-year date")]
    FullIsoReversed,
    /// `01-09-1901 - 01-09-1902`
    #[display(fmt = "day-month-year date range")]
    FullIsoReversedPair,
    /// `01/09/1901`
    #[display(fmt = "day/month/year date")]
    FullSlashReversed,
    /// `01/09/1901 - 01/09/1902`
    #[display(fmt = "day/month/year date range")]
    FullSlashReversedPair,
    /// `1000 bc`
    #[display(fmt = "BC year")]
    YearBc,
    /// `1000 bc - 500 bc`
    #[display(fmt = "BC year range")]
    YearPairBc,
    /// `1000 bc - 500`
    #[display(fmt = "BC to AD year range")]
    YearPairMixed,
}

impl Shape {
    /// Every shape, in precedence order
    pub const ALL: [Self; 11] = [
        Self::Year,
        Self::YearPair,
        Self::FullIso,
        Self::FullIsoPair,
        Self::FullIsoReversed,
        Self::FullIsoReversedPair,
        Self::FullSlashReversed,
        Self::FullSlashReversedPair,
        Self::YearBc,
        Self::YearPairBc,
        Self::YearPairMixed,
    ];

    /// Regex source tested against the whole trimmed input
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Year => r"^[0-9]{3,4}$",
            Self::YearPair => r"^[0-9]{3,4} *- *[0-9]{3,4}$",
            Self::FullIso => r"^[0-9]{3,4}-[0-9]{1,2}-[0-9]{1,2}$",
            Self::FullIsoPair => r"^[0-9]{3,4}-[0-9]{1,2}-[0-9]{1,2} *- *[0-9]{3,4}-[0-9]{1,2}-[0-9]{1,2}$",
            Self::FullIsoReversed => r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{3,4}$",
            Self::FullIsoReversedPair => r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{3,4} *- *[0-9]{1,2}-[0-9]{1,2}-[0-9]{3,4}$",
            Self::FullSlashReversed => r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{3,4}$",
            Self::FullSlashReversedPair => r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{3,4} *- *[0-9]{1,2}/[0-9]{1,2}/[0-9]{3,4}$",
            Self::YearBc => r"^[0-9]{2,6} *b\.*c\.*$",
            Self::YearPairBc => r"^[0-9]{2,6} *b\.*c\.* *- *[0-9]{2,6} *b\.*c\.*$",
            Self::YearPairMixed => r"^[0-9]{2,6} *b\.*c\.* *- *[0-9]{3,4}$",
        }
    }

    /// chrono template used to parse and render one side of this shape
    pub const fn template(self) -> &'static str {
        match self {
            Self::Year | Self::YearPair | Self::YearBc | Self::YearPairBc | Self::YearPairMixed => YEAR_TEMPLATE,
            Self::FullIso | Self::FullIsoPair => FULL_ISO_TEMPLATE,
            Self::FullIsoReversed | Self::FullIsoReversedPair => FULL_ISO_REVERSED_TEMPLATE,
            Self::FullSlashReversed | Self::FullSlashReversedPair => FULL_SLASH_REVERSED_TEMPLATE,
        }
    }

    /// Single-date shapes of the (min, max) sides of a ranged shape
    pub const fn sides(self) -> Option<(Self, Self)> {
        match self {
            Self::YearPair => Some((Self::Year, Self::Year)),
            Self::FullIsoPair => Some((Self::FullIso, Self::FullIso)),
            Self::FullIsoReversedPair => Some((Self::FullIsoReversed, Self::FullIsoReversed)),
            Self::FullSlashReversedPair => Some((Self::FullSlashReversed, Self::FullSlashReversed)),
            Self::YearPairBc => Some((Self::YearBc, Self::YearBc)),
            Self::YearPairMixed => Some((Self::YearBc, Self::Year)),
            Self::Year | Self::FullIso | Self::FullIsoReversed | Self::FullSlashReversed | Self::YearBc => None,
        }
    }

    #[inline]
    pub const fn is_range(self) -> bool {
        self.sides().is_some()
    }

    /// Whole-year shapes widen their max side to the end of the year
    pub const fn is_year(self) -> bool {
        matches!(self, Self::Year | Self::YearBc)
    }

    /// Shapes that only exist while BC years are enabled
    pub const fn requires_bc(self) -> bool {
        matches!(self, Self::YearBc | Self::YearPairBc | Self::YearPairMixed)
    }

    /// How many range-separator characters one min side contains.
    ///
    /// Hyphenated full dates reuse the range separator between their
    /// components, so a ranged input splits at the separator after these.
    pub const fn separators_per_side(self) -> usize {
        match self {
            Self::FullIso | Self::FullIsoPair | Self::FullIsoReversed | Self::FullIsoReversedPair => 2,
            _ => 0,
        }
    }

    /// Sample input in this shape
    pub const fn example(self) -> &'static str {
        match self {
            Self::Year => "1905",
            Self::YearPair => "1905 - 1907",
            Self::FullIso => "1901-09-01",
            Self::FullIsoPair => "1901-09-01 - 1901-09-05",
            Self::FullIsoReversed => "01-09-1901",
            Self::FullIsoReversedPair => "01-09-1901 - 01-09-1902",
            Self::FullSlashReversed => "01/09/1901",
            Self::FullSlashReversedPair => "01/09/1901 - 01/09/1902",
            Self::YearBc => "1000 bc",
            Self::YearPairBc => "1000 bc - 500 bc",
            Self::YearPairMixed => "1000 bc - 500",
        }
    }
}

/// Decoder/encoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accept `1000 bc`, `1000 bc - 500 bc` and `1000 bc - 500`.
    /// Off by default; BC boundaries still encode either way.
    pub bc_years: bool,
}

impl Config {
    pub const fn with_bc_years(mut self, enabled: bool) -> Self {
        self.bc_years = enabled;
        self
    }
}

/// A shape with its compiled matcher and its side template.
#[derive(Debug, Clone)]
pub struct TextFormat {
    shape:    Shape,
    matcher:  Regex,
    template: &'static str,
}

impl TextFormat {
    /// Compiles the matcher for `shape`.
    ///
    /// # Errors
    /// Returns the regex compilation error, which the built-in patterns never produce.
    pub fn new(shape: Shape) -> Result<Self, regex::Error> {
        Ok(Self {
            shape,
            matcher: Regex::new(shape.pattern())?,
            template: shape.template(),
        })
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    pub const fn matcher(&self) -> &Regex {
        &self.matcher
    }

    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Structural test on already trimmed text
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Ordered catalogue of the enabled textual conventions.
///
/// Built once and shared by reference; the decoder and encoder are methods on it.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    formats: Vec<TextFormat>,
    config:  Config,
}

impl FormatRegistry {
    /// Compiles every shape `config` enables, in precedence order.
    ///
    /// # Errors
    /// Returns a regex compilation error; the built-in patterns are all valid.
    pub fn new(config: Config) -> Result<Self, regex::Error> {
        let formats = Shape::ALL
            .into_iter()
            .filter(|shape| config.bc_years || !shape.requires_bc())
            .map(TextFormat::new)
            .collect::<Result<Vec<_>, _>>()?;

        log_debug!(shapes = formats.len(), bc_years = config.bc_years, "format registry built");

        Ok(Self { formats, config })
    }

    pub fn formats(&self) -> &[TextFormat] {
        &self.formats
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    pub fn format(&self, shape: Shape) -> Option<&TextFormat> {
        self.formats.iter().find(|f| f.shape() == shape)
    }

    pub fn is_enabled(&self, shape: Shape) -> bool {
        self.format(shape).is_some()
    }

    /// First enabled shape whose matcher accepts the trimmed text
    pub fn shape_of(&self, text: &str) -> Option<Shape> {
        let trimmed = text.trim();
        self.formats.iter().find(|f| f.is_match(trimmed)).map(TextFormat::shape)
    }
}
