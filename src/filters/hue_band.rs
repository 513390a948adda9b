//! Hue bands targeted by the selective saturation filter.
//!
//! The bands are deliberately narrow and leave gaps (16-79, 161-189,
//! 261-344 degrees) that only `All` covers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Which hues the filter acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HueBand {
    /// 345-360 and 0-15 degrees (wraps around zero)
    Red,
    /// 80-160 degrees
    Green,
    /// 190-260 degrees
    #[default]
    Blue,
    /// Every hue
    All,
}

impl HueBand {
    pub const ALL_BANDS: [HueBand; 4] = [HueBand::Red, HueBand::Green, HueBand::Blue, HueBand::All];

    /// Lowercase name, as used by the bindings and serde.
    pub fn name(self) -> &'static str {
        match self {
            HueBand::Red => "red",
            HueBand::Green => "green",
            HueBand::Blue => "blue",
            HueBand::All => "all",
        }
    }

    /// Test whether a hue in degrees falls inside this band. Bounds are inclusive.
    #[inline]
    pub fn contains(self, h: f32) -> bool {
        match self {
            HueBand::Red => (345.0..=360.0).contains(&h) || (0.0..=15.0).contains(&h),
            HueBand::Green => (80.0..=160.0).contains(&h),
            HueBand::Blue => (190.0..=260.0).contains(&h),
            HueBand::All => true,
        }
    }
}

/// Test whether hue `h` (degrees) is targeted by `band`.
#[inline]
pub fn is_target_hue(h: f32, band: HueBand) -> bool {
    band.contains(h)
}

impl fmt::Display for HueBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HueBand {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(HueBand::Red),
            "green" => Ok(HueBand::Green),
            "blue" => Ok(HueBand::Blue),
            "all" => Ok(HueBand::All),
            _ => Err(FilterError::UnknownHueBand(s.to_string())),
        }
    }
}

impl TryFrom<String> for HueBand {
    type Error = FilterError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
