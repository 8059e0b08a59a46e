//! Severity levels, parameter tables, errors, and seeding for the perturb
//! degradation toolkit.
//!
//! `perturb-core` holds everything shared between the image and text
//! degradation crates:
//!
//! - [`NoiseLevel`](level::NoiseLevel) — the qualitative Low/Medium/High
//!   severity scale.
//! - [`LevelMap`](level::LevelMap) — an exhaustive per-level lookup table,
//!   used instead of conditional branches for every level-to-parameter
//!   mapping.
//! - [`SeverityProfile`](profile::SeverityProfile) — the retunable
//!   quantitative parameters (blur sigma, occlusion area, edit fraction),
//!   loadable from TOML and validated eagerly.
//! - [`seed_rng`](seed::seed_rng) — the single deterministic seeding entry
//!   point. All degradation sampling takes an explicit `&mut R: Rng`
//!   parameter so that a fixed seed always reproduces the same output.
//!
//! # Quick start
//!
//! ```
//! use perturb_core::prelude::*;
//!
//! let profile = SeverityProfile::default();
//! assert!(profile.blur_sigma.get(NoiseLevel::Low) < profile.blur_sigma.get(NoiseLevel::High));
//!
//! let _rng = seed_rng(Some(42));
//! ```

pub mod error;
pub mod level;
pub mod profile;
pub mod seed;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::error::{ConfigError, InvalidInput, PerturbError};
    pub use crate::level::{LevelMap, NoiseLevel};
    pub use crate::profile::SeverityProfile;
    pub use crate::seed::seed_rng;
}
