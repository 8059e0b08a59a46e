//! Level-mapped Gaussian blur.

use image::DynamicImage;
use imageproc::filter::gaussian_blur_f32;

use perturb_core::error::InvalidInput;
use perturb_core::level::NoiseLevel;
use perturb_core::profile::SeverityProfile;

use crate::ensure_non_empty;

/// Blur a copy of `image` with the sigma configured for `level`.
///
/// The kernel is sized from sigma by the filter itself (wide enough to
/// avoid truncation artifacts), so severity is controlled by the single
/// `blur_sigma` table in the profile. Output dimensions and channel count
/// match the input; the input is untouched.
///
/// # Errors
///
/// Returns [`InvalidInput::EmptyImage`] if either dimension is zero.
/// Sigma validity (finite, positive) is enforced when the profile is
/// constructed, not here.
pub fn apply_gaussian_blur(
    image: &DynamicImage,
    level: NoiseLevel,
    profile: &SeverityProfile,
) -> Result<DynamicImage, InvalidInput> {
    ensure_non_empty(image)?;
    let sigma = profile.blur_sigma.value(level);

    let blurred = match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(gaussian_blur_f32(buf, sigma)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(gaussian_blur_f32(buf, sigma)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(gaussian_blur_f32(buf, sigma)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(gaussian_blur_f32(buf, sigma)),
        other => DynamicImage::ImageRgba8(gaussian_blur_f32(&other.to_rgba8(), sigma)),
    };
    Ok(blurred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GenericImageView, GrayImage, RgbImage};
    use perturb_core::level::LevelMap;
    use perturb_test_utils::{gradient_rgb, split_tone_gray};

    #[test]
    fn empty_image_is_rejected() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
        let err = apply_gaussian_blur(&image, NoiseLevel::Low, &SeverityProfile::default())
            .unwrap_err();
        assert_eq!(
            err,
            InvalidInput::EmptyImage {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn dimensions_and_channels_are_preserved() {
        let profile = SeverityProfile::default();
        let rgb = DynamicImage::ImageRgb8(gradient_rgb(40, 30));
        let gray = DynamicImage::ImageLuma8(split_tone_gray(40, 30, 10, 250));
        for level in NoiseLevel::ALL {
            let out = apply_gaussian_blur(&rgb, level, &profile).unwrap();
            assert_eq!(out.dimensions(), rgb.dimensions());
            assert_eq!(out.color(), ColorType::Rgb8);

            let out = apply_gaussian_blur(&gray, level, &profile).unwrap();
            assert_eq!(out.dimensions(), gray.dimensions());
            assert_eq!(out.color(), ColorType::L8);
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let original = gradient_rgb(20, 20);
        let image = DynamicImage::ImageRgb8(original.clone());
        apply_gaussian_blur(&image, NoiseLevel::High, &SeverityProfile::default()).unwrap();
        assert_eq!(image.to_rgb8(), original);
    }

    #[test]
    fn higher_level_blurs_a_sharp_edge_more() {
        // A hard vertical edge; stronger blur leaks more across it, so the
        // pixel just left of the edge rises with level.
        let profile = SeverityProfile::default();
        let image = DynamicImage::ImageLuma8(split_tone_gray(64, 64, 0, 255));
        let probe = |level| {
            let out = apply_gaussian_blur(&image, level, &profile).unwrap();
            out.to_luma8().get_pixel(30, 32)[0]
        };
        let low = probe(NoiseLevel::Low);
        let medium = probe(NoiseLevel::Medium);
        let high = probe(NoiseLevel::High);
        assert!(low < medium, "low={low} medium={medium}");
        assert!(medium < high, "medium={medium} high={high}");
    }

    #[test]
    fn blur_is_deterministic() {
        let image = DynamicImage::ImageRgb8(gradient_rgb(32, 32));
        let profile = SeverityProfile::default();
        let a = apply_gaussian_blur(&image, NoiseLevel::Medium, &profile).unwrap();
        let b = apply_gaussian_blur(&image, NoiseLevel::Medium, &profile).unwrap();
        assert_eq!(a.to_rgb8(), b.to_rgb8());
    }

    #[test]
    fn custom_profile_sigma_is_honored() {
        // A flat image stays flat under any kernel, up to rounding.
        let profile = SeverityProfile {
            blur_sigma: LevelMap::new(0.1, 3.0, 6.0),
            ..SeverityProfile::default()
        };
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, image::Luma([100])));
        let out = apply_gaussian_blur(&image, NoiseLevel::Low, &profile).unwrap();
        assert!(
            out.to_luma8()
                .pixels()
                .all(|p| (i16::from(p[0]) - 100).abs() <= 1)
        );
    }
}
