//! Quantitative severity parameters, loadable from TOML.
//!
//! A [`SeverityProfile`] maps each qualitative level to the concrete numbers
//! the degradation functions consume: blur sigma, occlusion area fraction,
//! and text edit fraction. Defaults match the reference experiment setup;
//! evaluators retune severity by editing a TOML file, never the algorithms.
//!
//! ```toml
//! [blur_sigma]
//! low = 1.0
//! medium = 3.0
//! high = 6.0
//!
//! [occlusion_area]
//! low = 0.08
//! medium = 0.20
//! high = 0.40
//!
//! [text_edit_fraction]
//! low = 0.05
//! medium = 0.15
//! high = 0.25
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::{LevelMap, NoiseLevel};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_blur_sigma() -> LevelMap<f32> {
    // Slight softening / noticeable detail loss / major detail loss.
    LevelMap::new(1.0, 3.0, 6.0)
}

const fn default_occlusion_area() -> LevelMap<f32> {
    // Fraction of total image area covered by the occlusion patch.
    LevelMap::new(0.08, 0.20, 0.40)
}

const fn default_text_edit_fraction() -> LevelMap<f32> {
    // Fraction of original characters targeted for modification.
    LevelMap::new(0.05, 0.15, 0.25)
}

// ---------------------------------------------------------------------------
// SeverityProfile
// ---------------------------------------------------------------------------

/// Level-to-parameter tables for every degradation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityProfile {
    /// Gaussian blur standard deviation in pixels, per level.
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: LevelMap<f32>,

    /// Occluded fraction of total image area, per level. In `(0, 1]`.
    #[serde(default = "default_occlusion_area")]
    pub occlusion_area: LevelMap<f32>,

    /// Fraction of original characters edited, per level. In `(0, 1]`.
    #[serde(default = "default_text_edit_fraction")]
    pub text_edit_fraction: LevelMap<f32>,
}

impl Default for SeverityProfile {
    fn default() -> Self {
        Self {
            blur_sigma: default_blur_sigma(),
            occlusion_area: default_occlusion_area(),
            text_edit_fraction: default_text_edit_fraction(),
        }
    }
}

impl SeverityProfile {
    /// Parse a profile from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file and validate it.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Check every table for range and monotonicity violations.
    ///
    /// - All values must be finite and positive.
    /// - Fractions must not exceed 1.
    /// - Each table must be strictly increasing across `Low < Medium < High`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("blur_sigma", &self.blur_sigma, f32::INFINITY)?;
        check_range("occlusion_area", &self.occlusion_area, 1.0)?;
        check_range("text_edit_fraction", &self.text_edit_fraction, 1.0)?;

        for (name, table) in [
            ("blur_sigma", &self.blur_sigma),
            ("occlusion_area", &self.occlusion_area),
            ("text_edit_fraction", &self.text_edit_fraction),
        ] {
            if !table.is_strictly_increasing() {
                return Err(ConfigError::NotMonotonic {
                    table: name,
                    low: table.low,
                    medium: table.medium,
                    high: table.high,
                });
            }
        }
        Ok(())
    }
}

fn check_range(name: &'static str, table: &LevelMap<f32>, max: f32) -> Result<(), ConfigError> {
    for level in NoiseLevel::ALL {
        let value = table.value(level);
        if !value.is_finite() || value <= 0.0 || value > max {
            return Err(ConfigError::OutOfRange {
                table: name,
                level: match level {
                    NoiseLevel::Low => "low",
                    NoiseLevel::Medium => "medium",
                    NoiseLevel::High => "high",
                },
                value,
                min: 0.0,
                max,
            });
        }
    }
    Ok(())
}
