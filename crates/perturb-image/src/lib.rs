//! Image degradation for robustness experiments.
//!
//! Two single-shot, stateless transforms over [`image::DynamicImage`]:
//!
//! - [`apply_gaussian_blur`](blur::apply_gaussian_blur) — sigma-driven
//!   isotropic Gaussian smoothing.
//! - [`apply_occlusion`](occlusion::apply_occlusion) — one randomly placed
//!   rectangle filled with the mean color of the original image.
//!
//! Both return a new image with the input's width, height, and channel
//! count; the input is never mutated. The four common 8-bit layouts (Luma8,
//! LumaA8, Rgb8, Rgba8) are processed in place of format; anything else is
//! normalized to Rgba8 first.
//!
//! Occlusion placement draws from an explicit `&mut R: Rng`, so a fixed
//! seed reproduces the patch position exactly.

pub mod blur;
pub mod occlusion;

use image::DynamicImage;
use perturb_core::error::InvalidInput;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::blur::apply_gaussian_blur;
    pub use crate::occlusion::{apply_occlusion, apply_occlusion_seeded};
}

/// Reject images with a zero dimension before any processing.
pub(crate) fn ensure_non_empty(image: &DynamicImage) -> Result<(), InvalidInput> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(InvalidInput::EmptyImage { width, height });
    }
    Ok(())
}
