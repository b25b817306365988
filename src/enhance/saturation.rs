use image::Rgb;
use imageproc::definitions::Image;
use imageproc::map::map_colors;

use crate::error::EnhanceResult;
use crate::utils::{blend_pixel, luma_601, validate_factor, validate_non_empty_image};

/// Trait for adjusting colour saturation.
///
/// Each pixel is blended with its own ITU-R 601-2 luminance:
///
/// ```text
/// out = grey + factor * (original - grey)
/// ```
///
/// A factor of 0 produces a greyscale image, 1 leaves the image unchanged and
/// values above 1 push colours further away from grey.
pub trait SaturationExt {
    /// Returns a new image with adjusted saturation.
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidFactor` - If `factor` is NaN or infinite
    fn adjust_saturation(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>>;
}

impl SaturationExt for Image<Rgb<u8>> {
    fn adjust_saturation(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>> {
        validate_non_empty_image(self)?;
        validate_factor("color", factor)?;

        Ok(map_colors(self, |pixel| {
            let grey = luma_601(pixel);
            blend_pixel(Rgb([grey, grey, grey]), pixel, factor)
        }))
    }
}
