use image::Rgb;
use imageproc::definitions::Image;
use imageproc::map::map_colors;
use tracing::debug;

use crate::error::EnhanceResult;
use crate::utils::{blend_channel, luma_601, validate_factor, validate_non_empty_image};

/// Trait for adjusting global contrast.
///
/// The image is blended with a flat grey image whose level is the mean
/// luminance of the input, so the overall brightness stays put while the
/// spread around it grows (`factor > 1`) or shrinks (`factor < 1`).
pub trait ContrastExt {
    /// Returns a new image with adjusted contrast.
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidFactor` - If `factor` is NaN or infinite
    fn adjust_contrast(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>>;
}

impl ContrastExt for Image<Rgb<u8>> {
    fn adjust_contrast(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>> {
        validate_non_empty_image(self)?;
        validate_factor("contrast", factor)?;

        let mean = mean_luma(self);
        debug!(mean, factor, "Blending with flat mean-grey image");

        Ok(map_colors(self, |Rgb([r, g, b])| {
            Rgb([
                blend_channel(mean, r, factor),
                blend_channel(mean, g, factor),
                blend_channel(mean, b, factor),
            ])
        }))
    }
}

/// Rounded mean of the ITU-R 601-2 luminance over all pixels.
///
/// The caller guarantees a non-empty image.
fn mean_luma(image: &Image<Rgb<u8>>) -> u8 {
    let total: u64 = image.pixels().map(|&p| u64::from(luma_601(p))).sum();
    let count = u64::from(image.width()) * u64::from(image.height());
    ((total + count / 2) / count) as u8
}
