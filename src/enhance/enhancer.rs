use image::{DynamicImage, Rgb};
use imageproc::definitions::Image;
use tracing::{debug, info, instrument, warn};

use crate::enhance::contrast::ContrastExt;
use crate::enhance::hsv::{HsvChannel, HsvConvertExt};
use crate::enhance::params::{EnhanceParams, UnsharpMaskParams, VibrancyParams, NEUTRAL_FACTOR};
use crate::enhance::saturation::SaturationExt;
use crate::enhance::sharpness::SharpnessExt;
use crate::enhance::unsharp_mask::UnsharpMaskExt;
use crate::error::EnhanceResult;
use crate::utils::validate_non_empty_image;

/// Enhances images for better 3D generation quality.
///
/// The public operations never fail. Each one runs its fallible twin
/// (`try_*`) against a borrow of the caller's image; on error it logs a
/// warning and hands the very same image back, so an enhancement problem can
/// never abort the caller's pipeline. On success the result is always an
/// 8-bit RGB image of the input's dimensions.
///
/// The enhancer only holds immutable configuration and can be shared freely
/// between threads.
///
/// # Examples
/// ```no_run
/// use image::{DynamicImage, RgbaImage};
/// use image_enhance_3d::ImageEnhancer;
///
/// let cutout = DynamicImage::ImageRgba8(RgbaImage::new(512, 512));
/// let enhancer = ImageEnhancer::new();
/// let ready = enhancer.prepare_for_trellis(cutout);
/// assert_eq!((ready.width(), ready.height()), (512, 512));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImageEnhancer {
    unsharp: UnsharpMaskParams,
    vibrancy: VibrancyParams,
}

impl ImageEnhancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the unsharp-mask settings used by [`Self::enhance_for_3d`].
    pub fn with_unsharp_params(mut self, unsharp: UnsharpMaskParams) -> Self {
        self.unsharp = unsharp;
        self
    }

    /// Replaces the multipliers used by [`Self::enhance_colors_for_matching`].
    pub fn with_vibrancy_params(mut self, vibrancy: VibrancyParams) -> Self {
        self.vibrancy = vibrancy;
        self
    }

    pub fn unsharp_params(&self) -> &UnsharpMaskParams {
        &self.unsharp
    }

    pub fn vibrancy_params(&self) -> &VibrancyParams {
        &self.vibrancy
    }

    /// Enhances sharpness, colour, contrast and edges for 3D generation.
    ///
    /// Steps run in a fixed order:
    ///
    /// 1. Normalize to 8-bit RGB (alpha is discarded)
    /// 2. Sharpness, skipped when `sharpen_factor == 1.0`
    /// 3. Saturation, skipped when `color_factor == 1.0`
    /// 4. Contrast, skipped when `contrast_factor == 1.0`
    /// 5. Unsharp mask, when `apply_unsharp` is set
    ///
    /// Returns the original image unchanged if any step fails.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn enhance_for_3d(&self, image: DynamicImage, params: &EnhanceParams) -> DynamicImage {
        match self.try_enhance_for_3d(&image, params) {
            Ok(enhanced) => {
                info!(
                    sharpen = params.sharpen_factor,
                    color = params.color_factor,
                    contrast = params.contrast_factor,
                    unsharp = params.apply_unsharp,
                    "Image enhanced"
                );
                DynamicImage::ImageRgb8(enhanced)
            }
            Err(err) => {
                warn!(error = %err, "Image enhancement failed, returning original");
                image
            }
        }
    }

    /// Fallible core of [`Self::enhance_for_3d`].
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidFactor` - If an active factor is NaN or infinite
    /// * `EnhanceError::InvalidRadius` - If the configured unsharp radius is invalid
    pub fn try_enhance_for_3d(
        &self,
        image: &DynamicImage,
        params: &EnhanceParams,
    ) -> EnhanceResult<Image<Rgb<u8>>> {
        let mut enhanced = image.to_rgb8();
        validate_non_empty_image(&enhanced)?;

        if params.sharpen_factor != NEUTRAL_FACTOR {
            debug!(factor = params.sharpen_factor, "Sharpening");
            enhanced = enhanced.adjust_sharpness(params.sharpen_factor)?;
        }

        if params.color_factor != NEUTRAL_FACTOR {
            debug!(factor = params.color_factor, "Adjusting saturation");
            enhanced = enhanced.adjust_saturation(params.color_factor)?;
        }

        if params.contrast_factor != NEUTRAL_FACTOR {
            debug!(factor = params.contrast_factor, "Adjusting contrast");
            enhanced = enhanced.adjust_contrast(params.contrast_factor)?;
        }

        if params.apply_unsharp {
            enhanced = enhanced.unsharp_mask(&self.unsharp)?;
        }

        Ok(enhanced)
    }

    /// Boosts saturation and brightness in HSV while keeping hue.
    ///
    /// Gives textures a livelier colour so the generated model matches the
    /// source photo better. Returns the original image unchanged on failure.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn enhance_colors_for_matching(&self, image: DynamicImage) -> DynamicImage {
        match self.try_enhance_colors_for_matching(&image) {
            Ok(enhanced) => {
                info!(
                    saturation_scale = self.vibrancy.saturation_scale,
                    value_scale = self.vibrancy.value_scale,
                    "Colors enhanced for better matching"
                );
                DynamicImage::ImageRgb8(enhanced)
            }
            Err(err) => {
                warn!(error = %err, "Color enhancement failed, returning original");
                image
            }
        }
    }

    /// Fallible core of [`Self::enhance_colors_for_matching`].
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    /// * `EnhanceError::InvalidFactor` - If a configured multiplier is NaN or infinite
    pub fn try_enhance_colors_for_matching(
        &self,
        image: &DynamicImage,
    ) -> EnhanceResult<Image<Rgb<u8>>> {
        let hsv = image.to_rgb8().to_hsv()?;
        let boosted = hsv
            .scale_channel(HsvChannel::Saturation, self.vibrancy.saturation_scale)?
            .scale_channel(HsvChannel::Value, self.vibrancy.value_scale)?;
        Ok(boosted.to_rgb())
    }

    /// Final preparation of a background-removed image before sending it to
    /// Trellis.
    ///
    /// Runs [`Self::enhance_for_3d`] with [`EnhanceParams::trellis`], a set of
    /// conservative values that sharpen and brighten without distorting
    /// geometry.
    pub fn prepare_for_trellis(&self, image: DynamicImage) -> DynamicImage {
        self.enhance_for_3d(image, &EnhanceParams::trellis())
    }
}
