//! Shared test fixtures for the perturb crates.
//!
//! Deterministic RNG construction plus a few small synthetic images with
//! known statistics, so degradation tests can assert exact pixel values.

pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{gradient_rgb, split_tone_gray, split_tone_rgb};
pub use rng::seeded_rng;
