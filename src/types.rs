use crate::consts::BC_SUFFIX;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Which side of the epoch origin (0000-01-01) a boundary falls on.
///
/// Years follow astronomical numbering: a BC year token `N bc` maps to
/// year `-N`, and year `0` counts as `Ce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    #[display(fmt = "{}", BC_SUFFIX)]
    Bce,
    #[display(fmt = "ad")]
    Ce,
}

impl Era {
    /// Era of an astronomical year number
    #[inline]
    pub const fn of_year(year: i32) -> Self {
        if year < 0 { Self::Bce } else { Self::Ce }
    }

    /// Signed astronomical year for a year counted within this era
    #[inline]
    pub const fn astronomical(self, era_year: i32) -> i32 {
        match self {
            Self::Bce => -era_year,
            Self::Ce => era_year,
        }
    }

    #[inline]
    pub const fn is_bc(self) -> bool {
        matches!(self, Self::Bce)
    }
}
