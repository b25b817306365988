//! Tunable parameters for the enhancement recipe.
//!
//! Every default lives in a named constant so it can be referenced and tested
//! on its own. Parameters only exist for the duration of a call; nothing here
//! is persisted.

/// Default sharpness factor of the general pipeline.
pub const DEFAULT_SHARPEN_FACTOR: f32 = 1.3;
/// Default saturation factor of the general pipeline.
pub const DEFAULT_COLOR_FACTOR: f32 = 1.15;
/// Default contrast factor of the general pipeline.
pub const DEFAULT_CONTRAST_FACTOR: f32 = 1.1;
/// The general pipeline applies the unsharp mask unless told otherwise.
pub const DEFAULT_APPLY_UNSHARP: bool = true;

/// Sharpness factor used when preparing images for Trellis.
pub const TRELLIS_SHARPEN_FACTOR: f32 = 1.2;
/// Saturation factor used when preparing images for Trellis.
pub const TRELLIS_COLOR_FACTOR: f32 = 1.1;
/// Contrast factor used when preparing images for Trellis.
pub const TRELLIS_CONTRAST_FACTOR: f32 = 1.05;

/// Gaussian radius (sigma) of the unsharp mask, in pixels.
pub const DEFAULT_UNSHARP_RADIUS: f32 = 2.0;
/// Fraction of the high-pass detail added back, in percent.
pub const DEFAULT_UNSHARP_PERCENT: i32 = 150;
/// Minimum absolute difference (0..=255) before detail is added back.
pub const DEFAULT_UNSHARP_THRESHOLD: u8 = 3;

/// Saturation multiplier of the HSV vibrancy boost.
pub const DEFAULT_VIBRANCY_SATURATION_SCALE: f32 = 1.25;
/// Value (brightness) multiplier of the HSV vibrancy boost.
pub const DEFAULT_VIBRANCY_VALUE_SCALE: f32 = 1.05;

/// Factor that leaves an image unchanged for the blend-based steps.
pub const NEUTRAL_FACTOR: f32 = 1.0;

/// Parameters of the general enhancement pipeline.
///
/// The blend steps are skipped when their factor equals [`NEUTRAL_FACTOR`].
/// The unsharp mask is gated by `apply_unsharp` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceParams {
    /// Sharpness (1.0 = no change, >1.0 = sharper)
    pub sharpen_factor: f32,
    /// Colour saturation (1.0 = no change, >1.0 = more vibrant)
    pub color_factor: f32,
    /// Contrast (1.0 = no change, >1.0 = more contrast)
    pub contrast_factor: f32,
    /// Apply the unsharp mask for edge enhancement
    pub apply_unsharp: bool,
}

impl EnhanceParams {
    /// Parameters that leave an image untouched apart from RGB normalization.
    pub const fn neutral() -> Self {
        Self {
            sharpen_factor: NEUTRAL_FACTOR,
            color_factor: NEUTRAL_FACTOR,
            contrast_factor: NEUTRAL_FACTOR,
            apply_unsharp: false,
        }
    }

    /// Conservative values that do not distort the geometric structure a
    /// downstream 3D reconstructor relies on.
    pub const fn trellis() -> Self {
        Self {
            sharpen_factor: TRELLIS_SHARPEN_FACTOR,
            color_factor: TRELLIS_COLOR_FACTOR,
            contrast_factor: TRELLIS_CONTRAST_FACTOR,
            apply_unsharp: true,
        }
    }

    pub fn with_sharpen_factor(mut self, factor: f32) -> Self {
        self.sharpen_factor = factor;
        self
    }

    pub fn with_color_factor(mut self, factor: f32) -> Self {
        self.color_factor = factor;
        self
    }

    pub fn with_contrast_factor(mut self, factor: f32) -> Self {
        self.contrast_factor = factor;
        self
    }

    pub fn with_unsharp(mut self, apply: bool) -> Self {
        self.apply_unsharp = apply;
        self
    }
}

impl Default for EnhanceParams {
    fn default() -> Self {
        Self {
            sharpen_factor: DEFAULT_SHARPEN_FACTOR,
            color_factor: DEFAULT_COLOR_FACTOR,
            contrast_factor: DEFAULT_CONTRAST_FACTOR,
            apply_unsharp: DEFAULT_APPLY_UNSHARP,
        }
    }
}

/// Parameters of the thresholded unsharp mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMaskParams {
    /// Gaussian sigma in pixels
    pub radius: f32,
    /// Strength in percent of the high-pass detail
    pub percent: i32,
    /// Differences below this are not amplified
    pub threshold: u8,
}

impl UnsharpMaskParams {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_percent(mut self, percent: i32) -> Self {
        self.percent = percent;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Default for UnsharpMaskParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_UNSHARP_RADIUS,
            percent: DEFAULT_UNSHARP_PERCENT,
            threshold: DEFAULT_UNSHARP_THRESHOLD,
        }
    }
}

/// Multipliers of the HSV vibrancy boost. Hue is never scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrancyParams {
    pub saturation_scale: f32,
    pub value_scale: f32,
}

impl Default for VibrancyParams {
    fn default() -> Self {
        Self {
            saturation_scale: DEFAULT_VIBRANCY_SATURATION_SCALE,
            value_scale: DEFAULT_VIBRANCY_VALUE_SCALE,
        }
    }
}
