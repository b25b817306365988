use image::{ImageBuffer, Rgb};
use imageproc::definitions::Image;
use itertools::iproduct;
use tracing::debug;

use crate::error::EnhanceResult;
use crate::utils::{blend_pixel, round_to_u8, validate_factor, validate_non_empty_image};

/// Weight of the centre tap in the 3x3 smoothing kernel.
const SMOOTH_CENTER_WEIGHT: u32 = 5;

/// Sum of all taps in the 3x3 smoothing kernel (`8 * 1 + 5`).
const SMOOTH_KERNEL_SUM: f32 = 13.0;

/// Trait for adjusting the sharpness of an image.
///
/// Sharpness is controlled by a single linear knob. The image is blended with
/// a softly smoothed copy of itself:
///
/// ```text
/// out = smooth + factor * (original - smooth)
/// ```
///
/// - `factor == 0.0` yields the smoothed image
/// - `factor == 1.0` leaves the image unchanged
/// - `factor > 1.0` increases edge contrast
///
/// The smoothed copy uses the kernel `[1 1 1; 1 5 1; 1 1 1] / 13`. Pixels on
/// the image border are copied instead of filtered, so the outermost ring of
/// pixels is never altered by this operation.
pub trait SharpnessExt {
    /// Returns a new image with adjusted sharpness.
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidFactor` - If `factor` is NaN or infinite
    ///
    /// # Examples
    /// ```no_run
    /// use image_enhance_3d::{Image, SharpnessExt};
    /// use image::Rgb;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgb<u8>> = Image::new(32, 32);
    /// let sharpened = image.adjust_sharpness(1.3)?;
    /// # Ok(())
    /// # }
    /// ```
    fn adjust_sharpness(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>>;
}

impl SharpnessExt for Image<Rgb<u8>> {
    fn adjust_sharpness(&self, factor: f32) -> EnhanceResult<Image<Rgb<u8>>> {
        validate_non_empty_image(self)?;
        validate_factor("sharpness", factor)?;

        let smoothed = smooth_3x3(self);
        debug!(factor, "Blending with smoothed image");

        Ok(ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            blend_pixel(*smoothed.get_pixel(x, y), *self.get_pixel(x, y), factor)
        }))
    }
}

/// Applies the 3x3 smoothing kernel, copying border pixels unchanged.
fn smooth_3x3(image: &Image<Rgb<u8>>) -> Image<Rgb<u8>> {
    let (width, height) = image.dimensions();

    ImageBuffer::from_fn(width, height, |x, y| {
        let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
        if on_border {
            return *image.get_pixel(x, y);
        }

        let mut sums = [0u32; 3];
        for (dy, dx) in iproduct!(0..3u32, 0..3u32) {
            let Rgb(channels) = image.get_pixel(x + dx - 1, y + dy - 1);
            let weight = if dx == 1 && dy == 1 {
                SMOOTH_CENTER_WEIGHT
            } else {
                1
            };
            for (sum, &channel) in sums.iter_mut().zip(channels.iter()) {
                *sum += u32::from(channel) * weight;
            }
        }

        Rgb(sums.map(|sum| round_to_u8(sum as f32 / SMOOTH_KERNEL_SUM)))
    })
}
