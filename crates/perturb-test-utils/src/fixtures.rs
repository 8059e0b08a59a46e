//! Small synthetic images with known statistics.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// RGB image whose red channel ramps left-to-right and green channel
/// top-to-bottom. Non-uniform in every region, so blur visibly changes it.
pub fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 128])
    })
}

/// Grayscale image split into a left half of `left` and a right half of
/// `right`. With values equidistant from their mean, no pixel equals the
/// mean, which lets occlusion tests identify patch pixels exactly.
pub fn split_tone_gray(width: u32, height: u32, left: u8, right: u8) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Luma([left]) } else { Luma([right]) }
    })
}

/// RGB analogue of [`split_tone_gray`]: blue left half, red right half
/// (the reference demo's two-tone dummy image).
pub fn split_tone_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([0, 0, 255])
        } else {
            Rgb([255, 0, 0])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_has_requested_dimensions() {
        let img = gradient_rgb(13, 7);
        assert_eq!(img.dimensions(), (13, 7));
    }

    #[test]
    fn split_tone_gray_halves_hold_their_values() {
        let img = split_tone_gray(10, 4, 10, 250);
        assert_eq!(img.get_pixel(0, 0)[0], 10);
        assert_eq!(img.get_pixel(9, 3)[0], 250);
    }

    #[test]
    fn split_tone_gray_mean_matches_no_pixel() {
        let img = split_tone_gray(10, 4, 10, 250);
        let mean = 130u8; // (10 + 250) / 2
        assert!(img.pixels().all(|p| p[0] != mean));
    }
}
