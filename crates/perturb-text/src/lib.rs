//! Character-level text degradation for robustness experiments.
//!
//! Applies one of four edit operations (substitute, delete, insert, swap) to
//! a configured fraction of a string's characters, drawing replacement
//! characters from a per-language [`Alphabet`](alphabet::Alphabet).
//!
//! The central correctness property is **select-then-rebuild**: edit
//! positions are sampled from the *original* character indices before any
//! mutation, and the output is built in a single pass over an immutable
//! snapshot of the input. Length-changing operations (insert, delete)
//! therefore never shift which characters get edited.
//!
//! All randomness goes through an explicit `&mut R: Rng` parameter; with a
//! fixed seed the output is byte-identical across runs.
//!
//! # Quick start
//!
//! ```
//! use perturb_core::prelude::*;
//! use perturb_text::prelude::*;
//!
//! let noisy = add_char_noise_seeded(
//!     "A typical English question about the image content?",
//!     Language::English,
//!     NoiseLevel::Medium,
//!     NoiseOp::Substitute,
//!     Some(42),
//! )
//! .unwrap();
//! assert_eq!(noisy.chars().count(), 51);
//! ```

pub mod alphabet;
pub mod noise;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::alphabet::{Alphabet, Language};
    pub use crate::noise::{NoiseOp, add_char_noise, add_char_noise_seeded, add_char_noise_with_alphabet};
}
