mod enhance;
mod error;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use enhance::contrast::ContrastExt;
pub use enhance::enhancer::ImageEnhancer;
pub use enhance::hsv::{Hsv, HsvChannel, HsvConvertExt, HsvImage};
pub use enhance::params::{
    EnhanceParams, UnsharpMaskParams, VibrancyParams, DEFAULT_APPLY_UNSHARP,
    DEFAULT_COLOR_FACTOR, DEFAULT_CONTRAST_FACTOR, DEFAULT_SHARPEN_FACTOR,
    DEFAULT_UNSHARP_PERCENT, DEFAULT_UNSHARP_RADIUS, DEFAULT_UNSHARP_THRESHOLD,
    DEFAULT_VIBRANCY_SATURATION_SCALE, DEFAULT_VIBRANCY_VALUE_SCALE, NEUTRAL_FACTOR,
    TRELLIS_COLOR_FACTOR, TRELLIS_CONTRAST_FACTOR, TRELLIS_SHARPEN_FACTOR,
};
pub use enhance::saturation::SaturationExt;
pub use enhance::sharpness::SharpnessExt;
pub use enhance::unsharp_mask::UnsharpMaskExt;
pub use error::{EnhanceError, EnhanceResult};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
