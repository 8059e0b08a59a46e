//! Mean-color rectangular occlusion.
//!
//! The patch is filled with the per-channel mean of the *original* image
//! rather than black or random noise: a flat patch in the image's own
//! palette approximates a real sensor defect or physical obstruction
//! instead of an obviously synthetic artifact.

use image::{DynamicImage, ImageBuffer, Pixel};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use rand::Rng;

use perturb_core::error::InvalidInput;
use perturb_core::level::NoiseLevel;
use perturb_core::profile::SeverityProfile;
use perturb_core::seed::seed_rng;

use crate::ensure_non_empty;

/// Occlude a copy of `image` with one mean-colored rectangle.
///
/// The level's `occlusion_area` fraction sets the patch area; both patch
/// sides are `sqrt(fraction)` of the corresponding image side (min 1 px),
/// so the patch keeps the image's aspect ratio. The top-left corner is
/// drawn uniformly from `rng` such that the patch lies fully inside the
/// image. The fill color is the per-channel mean of the original image,
/// computed before anything is painted.
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyImage`] if either dimension is zero.
pub fn apply_occlusion<R: Rng + ?Sized>(
    image: &DynamicImage,
    level: NoiseLevel,
    profile: &SeverityProfile,
    rng: &mut R,
) -> Result<DynamicImage, InvalidInput> {
    ensure_non_empty(image)?;
    let fraction = profile.occlusion_area.value(level);

    let occluded = match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(occlude(buf, fraction, rng)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(occlude(buf, fraction, rng)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(occlude(buf, fraction, rng)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(occlude(buf, fraction, rng)),
        other => DynamicImage::ImageRgba8(occlude(&other.to_rgba8(), fraction, rng)),
    };
    Ok(occluded)
}

/// [`apply_occlusion`] with an optional seed (`None` seeds from OS
/// entropy).
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyImage`] if either dimension is zero.
pub fn apply_occlusion_seeded(
    image: &DynamicImage,
    level: NoiseLevel,
    profile: &SeverityProfile,
    seed: Option<u64>,
) -> Result<DynamicImage, InvalidInput> {
    let mut rng = seed_rng(seed);
    apply_occlusion(image, level, profile, &mut rng)
}

/// Patch side length for one image dimension: `sqrt(fraction)` of the side,
/// truncated, at least one pixel, never past the side itself.
fn patch_side(side: u32, fraction: f32) -> u32 {
    ((fraction.sqrt() * side as f32) as u32).clamp(1, side)
}

fn occlude<P, R>(buf: &ImageBuffer<P, Vec<u8>>, fraction: f32, rng: &mut R) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
    R: Rng + ?Sized,
{
    let (width, height) = buf.dimensions();
    let fill = mean_pixel(buf);

    let patch_w = patch_side(width, fraction);
    let patch_h = patch_side(height, fraction);
    let x0 = rng.gen_range(0..=width - patch_w);
    let y0 = rng.gen_range(0..=height - patch_h);

    let mut out = buf.clone();
    draw_filled_rect_mut(
        &mut out,
        Rect::at(x0 as i32, y0 as i32).of_size(patch_w, patch_h),
        fill,
    );
    out
}

/// Per-channel mean over every pixel, rounded to the nearest value.
fn mean_pixel<P: Pixel<Subpixel = u8>>(buf: &ImageBuffer<P, Vec<u8>>) -> P {
    let channels = P::CHANNEL_COUNT as usize;
    let count = u64::from(buf.width()) * u64::from(buf.height());
    let mut sums = [0u64; 4];
    for pixel in buf.pixels() {
        for (sum, &value) in sums.iter_mut().zip(pixel.channels()) {
            *sum += u64::from(value);
        }
    }
    let mut mean = [0u8; 4];
    for (out, sum) in mean.iter_mut().zip(&sums).take(channels) {
        *out = ((sum + count / 2) / count) as u8;
    }
    *P::from_slice(&mean[..channels])
}
