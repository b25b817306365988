//! 8-bit HSV colour space and conversions to and from RGB.
//!
//! All three channels are stored as `u8`:
//! - hue maps the full colour wheel onto `0..=255` (0 = red, ~85 = green, ~170 = blue)
//! - saturation is `(max - min) / max` scaled to `0..=255`
//! - value is the largest RGB channel
//!
//! This is the quantization used by most imaging libraries for 8-bit HSV
//! buffers. Converting RGB to HSV and back is not lossless, but hue is kept
//! within a couple of steps for saturated colours.

use image::{ImageBuffer, Luma, Rgb};
use imageproc::definitions::Image;
use imageproc::map::map_colors;

use crate::error::EnhanceResult;
use crate::utils::{
    clamp_f32_to_primitive, round_to_u8, validate_factor, validate_non_empty_image,
};

/// A single 8-bit HSV pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    /// Converts an RGB pixel to HSV.
    ///
    /// Hue and saturation are truncated toward zero when quantized.
    pub fn from_rgb(pixel: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = pixel;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == min {
            return Self {
                hue: 0,
                saturation: 0,
                value: max,
            };
        }

        let chroma = f32::from(max - min);
        let saturation = chroma / f32::from(max);

        let rc = f32::from(max - r) / chroma;
        let gc = f32::from(max - g) / chroma;
        let bc = f32::from(max - b) / chroma;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        // Wrapped in f64 and narrowed so exact thirds quantize to 85 and 170.
        let hue = ((f64::from(sector) / 6.0 + 1.0) % 1.0) as f32;

        Self {
            hue: clamp_f32_to_primitive(hue * 255.0),
            saturation: clamp_f32_to_primitive(saturation * 255.0),
            value: max,
        }
    }

    /// Converts back to RGB using the six-sector hexcone model.
    pub fn to_rgb(self) -> Rgb<u8> {
        let Self {
            hue,
            saturation,
            value,
        } = self;

        if saturation == 0 {
            return Rgb([value, value, value]);
        }

        let position = f32::from(hue) * 6.0 / 255.0;
        let sector = position.floor();
        let fraction = position - sector;
        let s = f32::from(saturation) / 255.0;
        let v = f32::from(value);

        let p = round_to_u8(v * (1.0 - s));
        let q = round_to_u8(v * (1.0 - s * fraction));
        let t = round_to_u8(v * (1.0 - s * (1.0 - fraction)));

        match sector as u32 % 6 {
            0 => Rgb([value, t, p]),
            1 => Rgb([q, value, p]),
            2 => Rgb([p, value, t]),
            3 => Rgb([p, q, value]),
            4 => Rgb([t, p, value]),
            _ => Rgb([value, p, q]),
        }
    }
}

/// Selects one channel of an [`HsvImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsvChannel {
    Hue,
    Saturation,
    Value,
}

impl HsvChannel {
    const fn index(self) -> usize {
        match self {
            Self::Hue => 0,
            Self::Saturation => 1,
            Self::Value => 2,
        }
    }
}

/// An image in 8-bit HSV, with the same dimensions as its RGB source.
#[derive(Debug, Clone, PartialEq)]
pub struct HsvImage {
    // Channels are stored in [hue, saturation, value] order.
    buffer: Image<Rgb<u8>>,
}

impl HsvImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Returns the HSV pixel at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Hsv {
        let Rgb([hue, saturation, value]) = *self.buffer.get_pixel(x, y);
        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// Extracts a single channel as a greyscale plane.
    pub fn channel(&self, channel: HsvChannel) -> Image<Luma<u8>> {
        let index = channel.index();
        map_colors(&self.buffer, |pixel| Luma([pixel[index]]))
    }

    /// Multiplies one channel by `factor`, clamping into `0..=255` and
    /// truncating toward zero.
    ///
    /// # Errors
    /// * `EnhanceError::InvalidFactor` - If `factor` is NaN or infinite
    pub fn scale_channel(&self, channel: HsvChannel, factor: f32) -> EnhanceResult<Self> {
        validate_factor("channel scale", factor)?;
        let index = channel.index();
        let buffer = map_colors(&self.buffer, |mut pixel: Rgb<u8>| {
            pixel[index] = clamp_f32_to_primitive(f32::from(pixel[index]) * factor);
            pixel
        });
        Ok(Self { buffer })
    }

    /// Converts back to RGB.
    pub fn to_rgb(&self) -> Image<Rgb<u8>> {
        map_colors(&self.buffer, |Rgb([hue, saturation, value])| {
            Hsv {
                hue,
                saturation,
                value,
            }
            .to_rgb()
        })
    }
}

/// Trait for converting an RGB image into HSV.
pub trait HsvConvertExt {
    /// Converts every pixel with [`Hsv::from_rgb`].
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If the image has no pixels
    fn to_hsv(&self) -> EnhanceResult<HsvImage>;
}

impl HsvConvertExt for Image<Rgb<u8>> {
    fn to_hsv(&self) -> EnhanceResult<HsvImage> {
        validate_non_empty_image(self)?;
        let buffer = ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let Hsv {
                hue,
                saturation,
                value,
            } = Hsv::from_rgb(*self.get_pixel(x, y));
            Rgb([hue, saturation, value])
        });
        Ok(HsvImage { buffer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{flat_image, max_channel_difference, palette_image};

    #[test]
    fn from_rgb_primaries() {
        assert_eq!(
            Hsv::from_rgb(Rgb([255, 0, 0])),
            Hsv {
                hue: 0,
                saturation: 255,
                value: 255
            }
        );
        // 1/3 * 255 = 85
        assert_eq!(Hsv::from_rgb(Rgb([0, 255, 0])).hue, 85);
        // 2/3 * 255 = 170
        assert_eq!(Hsv::from_rgb(Rgb([0, 0, 255])).hue, 170);
    }

    #[test]
    fn from_rgb_grey_has_no_hue_or_saturation() {
        assert_eq!(
            Hsv::from_rgb(Rgb([128, 128, 128])),
            Hsv {
                hue: 0,
                saturation: 0,
                value: 128
            }
        );
    }

    #[test]
    fn to_rgb_primaries() {
        let red = Hsv {
            hue: 0,
            saturation: 255,
            value: 255,
        };
        assert_eq!(red.to_rgb(), Rgb([255, 0, 0]));

        let grey = Hsv {
            hue: 42,
            saturation: 0,
            value: 77,
        };
        assert_eq!(grey.to_rgb(), Rgb([77, 77, 77]));

        let wrapped = Hsv {
            hue: 255,
            saturation: 255,
            value: 200,
        };
        assert_eq!(wrapped.to_rgb(), Rgb([200, 0, 0]));
    }

    #[test]
    fn round_trip_stays_close() {
        let image = palette_image();
        let restored = image.to_hsv().unwrap().to_rgb();
        assert!(max_channel_difference(&image, &restored) <= Some(2));
    }

    #[test]
    fn channel_extracts_single_plane() {
        let mut image: Image<Rgb<u8>> = Image::new(2, 1);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([100, 100, 100]));
        let hsv = image.to_hsv().unwrap();

        let saturation = hsv.channel(HsvChannel::Saturation);
        assert_eq!(saturation.get_pixel(0, 0), &Luma([255]));
        assert_eq!(saturation.get_pixel(1, 0), &Luma([0]));

        let value = hsv.channel(HsvChannel::Value);
        assert_eq!(value.get_pixel(1, 0), &Luma([100]));
    }

    #[test]
    fn scale_channel_truncates_and_clamps() {
        let mut image: Image<Rgb<u8>> = Image::new(3, 1);
        image.put_pixel(0, 0, Rgb([250, 0, 0]));
        image.put_pixel(1, 0, Rgb([101, 101, 101]));
        image.put_pixel(2, 0, Rgb([100, 100, 100]));
        let hsv = image.to_hsv().unwrap();

        let brighter = hsv.scale_channel(HsvChannel::Value, 1.05).unwrap();
        assert_eq!(brighter.get_pixel(0, 0).value, 255);
        // 101 * 1.05 = 106.05
        assert_eq!(brighter.get_pixel(1, 0).value, 106);
        // 100 * 1.05f32 = 104.99999
        assert_eq!(brighter.get_pixel(2, 0).value, 104);
        assert_eq!(brighter.get_pixel(0, 0).hue, hsv.get_pixel(0, 0).hue);

        assert!(hsv.scale_channel(HsvChannel::Value, f32::NAN).is_err());
    }

    #[test]
    fn scale_channel_truncates_boosted_saturation() {
        // (200, 188, 188): saturation = 12 / 200 * 255 = 15.3 -> 15
        let image = flat_image(1, 1, [200, 188, 188]);
        let hsv = image.to_hsv().unwrap();
        assert_eq!(hsv.get_pixel(0, 0).saturation, 15);

        // 15 * 1.25 = 18.75
        let boosted = hsv.scale_channel(HsvChannel::Saturation, 1.25).unwrap();
        assert_eq!(boosted.get_pixel(0, 0).saturation, 18);
        assert_eq!(boosted.get_pixel(0, 0).value, 200);
    }

    #[test]
    fn to_hsv_rejects_empty_image() {
        let image: Image<Rgb<u8>> = Image::new(0, 5);
        assert!(image.to_hsv().is_err());
    }
}
