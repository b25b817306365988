//! Internal utility functions for image-enhance-3d.
//!
//! This module contains the numeric helpers shared by the individual filters:
//! clamping, luminance, blending and argument validation.

use image::{Primitive, Rgb};
use imageproc::definitions::{Clamp, Image};

use crate::error::{EnhanceError, EnhanceResult};

/// Clamps a floating-point value to the range of a primitive type.
///
/// Values outside the range saturate; values inside are truncated toward zero.
///
/// # Arguments
///
/// * `value` - The floating-point value to clamp
///
/// # Returns
///
/// The clamped value as the target primitive type
#[inline]
pub fn clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value)
}

/// Rounds to the nearest integer and clamps into `0..=255`.
#[inline]
pub fn round_to_u8(value: f32) -> u8 {
    clamp_f32_to_primitive(value.round())
}

/// ITU-R 601-2 luma of an 8-bit RGB pixel, in fixed point.
///
/// `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, rounded.
#[inline]
pub fn luma_601(pixel: Rgb<u8>) -> u8 {
    let Rgb([r, g, b]) = pixel;
    let weighted = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471;
    ((weighted + 0x8000) >> 16) as u8
}

/// Interpolates from `degenerate` toward `original` by `factor`.
///
/// A factor of 0 yields `degenerate`, 1 yields `original`, and values above
/// 1 extrapolate away from `degenerate`. The result is clamped, then
/// truncated toward zero.
#[inline]
pub fn blend_channel(degenerate: u8, original: u8, factor: f32) -> u8 {
    let degenerate = f32::from(degenerate);
    let original = f32::from(original);
    clamp_f32_to_primitive(degenerate + factor * (original - degenerate))
}

/// Blends two pixels channel by channel with [`blend_channel`].
#[inline]
pub fn blend_pixel(degenerate: Rgb<u8>, original: Rgb<u8>, factor: f32) -> Rgb<u8> {
    let Rgb([dr, dg, db]) = degenerate;
    let Rgb([or, og, ob]) = original;
    Rgb([
        blend_channel(dr, or, factor),
        blend_channel(dg, og, factor),
        blend_channel(db, ob, factor),
    ])
}

/// Validates that an image has non-zero dimensions.
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise [`EnhanceError::EmptyImage`]
pub fn validate_non_empty_image(image: &Image<Rgb<u8>>) -> EnhanceResult<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        Err(EnhanceError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Validates that a blend factor is finite.
pub fn validate_factor(name: &'static str, value: f32) -> EnhanceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EnhanceError::InvalidFactor { name, value })
    }
}
