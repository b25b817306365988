use image::{ImageBuffer, Rgb};
use imageproc::definitions::Image;
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

use crate::enhance::params::UnsharpMaskParams;
use crate::error::{EnhanceError, EnhanceResult};
use crate::utils::validate_non_empty_image;

/// Trait for thresholded unsharp masking.
///
/// For every channel the difference between the original and a Gaussian
/// blurred copy is scaled by `percent / 100` and added back. Differences whose
/// magnitude is below `threshold` are left out, which keeps flat regions and
/// low-contrast noise from being amplified.
pub trait UnsharpMaskExt {
    /// Returns a new image with the unsharp mask applied.
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidRadius` - If `params.radius` is not positive and finite
    ///
    /// # Examples
    /// ```no_run
    /// use image_enhance_3d::{Image, UnsharpMaskExt, UnsharpMaskParams};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgb<u8>> = Image::new(64, 64);
    /// let crisp = image.unsharp_mask(&UnsharpMaskParams::default())?;
    /// # Ok(())
    /// # }
    /// ```
    fn unsharp_mask(&self, params: &UnsharpMaskParams) -> EnhanceResult<Image<Rgb<u8>>>;
}

impl UnsharpMaskExt for Image<Rgb<u8>> {
    fn unsharp_mask(&self, params: &UnsharpMaskParams) -> EnhanceResult<Image<Rgb<u8>>> {
        validate_non_empty_image(self)?;
        if !params.radius.is_finite() || params.radius <= 0.0 {
            return Err(EnhanceError::InvalidRadius(params.radius));
        }

        let blurred = gaussian_blur_f32(self, params.radius);
        debug!(
            radius = params.radius,
            percent = params.percent,
            threshold = params.threshold,
            "Applying unsharp mask"
        );

        let processed: Vec<u8> = self
            .as_raw()
            .iter()
            .zip(blurred.as_raw().iter())
            .map(|(&original, &blurred)| {
                sharpen_channel(original, blurred, params.percent, params.threshold)
            })
            .collect();

        ImageBuffer::from_raw(self.width(), self.height(), processed)
            .ok_or(EnhanceError::BufferCreationFailed)
    }
}

/// Adds back `percent`% of the high-pass detail when it clears the threshold.
#[inline]
fn sharpen_channel(original: u8, blurred: u8, percent: i32, threshold: u8) -> u8 {
    let diff = i32::from(original) - i32::from(blurred);
    if diff.abs() < i32::from(threshold) {
        return original;
    }
    (i32::from(original) + diff * percent / 100).clamp(0, 255) as u8
}
