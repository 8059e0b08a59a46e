//! Qualitative severity levels and the per-level lookup table.
//!
//! [`NoiseLevel`] is the three-step Low/Medium/High scale shared by every
//! degradation. Quantitative parameters are never matched inline; they live
//! in a [`LevelMap`], an exhaustive table with one field per level, so that
//! retuning severity means editing data, not branching logic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

// ---------------------------------------------------------------------------
// NoiseLevel
// ---------------------------------------------------------------------------

/// Qualitative degradation severity.
///
/// Ordered: `Low < Medium < High`. Every level-to-parameter mapping in the
/// workspace is required to be strictly increasing along this order (checked
/// by [`SeverityProfile::validate`](crate::profile::SeverityProfile::validate)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Low,
    Medium,
    High,
}

impl NoiseLevel {
    /// All levels, in increasing severity order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl fmt::Display for NoiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for NoiseLevel {
    type Err = InvalidInput;

    /// Case-insensitive parse, matching the CLI surface.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(InvalidInput::UnknownLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// LevelMap
// ---------------------------------------------------------------------------

/// Exhaustive per-level parameter table.
///
/// One value per [`NoiseLevel`]; there is no "missing level" state, so
/// lookups are total and adding a level is a compile error at every table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelMap<T> {
    pub low: T,
    pub medium: T,
    pub high: T,
}

impl<T> LevelMap<T> {
    /// Create a table from its three entries in increasing severity order.
    pub const fn new(low: T, medium: T, high: T) -> Self {
        Self { low, medium, high }
    }

    /// Look up the entry for a level.
    pub const fn get(&self, level: NoiseLevel) -> &T {
        match level {
            NoiseLevel::Low => &self.low,
            NoiseLevel::Medium => &self.medium,
            NoiseLevel::High => &self.high,
        }
    }

    /// Entries in increasing severity order.
    pub const fn as_array(&self) -> [&T; 3] {
        [&self.low, &self.medium, &self.high]
    }
}

impl<T: Copy> LevelMap<T> {
    /// Copy out the entry for a level.
    pub const fn value(&self, level: NoiseLevel) -> T {
        *self.get(level)
    }
}

impl LevelMap<f32> {
    /// Whether entries strictly increase across `Low < Medium < High`.
    pub fn is_strictly_increasing(&self) -> bool {
        self.low < self.medium && self.medium < self.high
    }
}
