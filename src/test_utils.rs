//! Shared fixtures for the filter unit tests.
//!
//! Only compiled for tests. The images are small and hand-built so expected
//! pixel values can be worked out by hand next to each assertion.

use image::{ImageBuffer, Rgb, Rgba};
use imageproc::definitions::Image;

/// Pure primaries, mid-saturated tones, a dark olive and a neutral grey.
///
/// Row 0 holds the primaries, row 1 the softer colours. Every entry survives
/// an 8-bit HSV round trip within two steps per channel.
pub const PALETTE: [[u8; 3]; 8] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [128, 128, 128],
    [200, 150, 100],
    [100, 200, 150],
    [150, 100, 200],
    [50, 75, 25],
];

/// A `width`x`height` image where every pixel has the same colour.
pub fn flat_image(width: u32, height: u32, color: [u8; 3]) -> Image<Rgb<u8>> {
    ImageBuffer::from_pixel(width, height, Rgb(color))
}

/// 4x2 image laid out from [`PALETTE`] in row-major order.
pub fn palette_image() -> Image<Rgb<u8>> {
    ImageBuffer::from_fn(4, 2, |x, y| Rgb(PALETTE[(y * 4 + x) as usize]))
}

/// 5x5 grey-100 field with a single grey-200 pixel in the centre.
pub fn spike_image() -> Image<Rgb<u8>> {
    let mut image = flat_image(5, 5, [100, 100, 100]);
    image.put_pixel(2, 2, Rgb([200, 200, 200]));
    image
}

/// Vertical step: columns left of `width / 2` are `low`, the rest `high`.
pub fn step_edge_image(width: u32, height: u32, low: u8, high: u8) -> Image<Rgb<u8>> {
    ImageBuffer::from_fn(width, height, |x, _| {
        let level = if x < width / 2 { low } else { high };
        Rgb([level, level, level])
    })
}

/// Orange and teal stripes, one pixel wide, so every interior pixel sits on
/// an edge in both colour and brightness.
pub fn striped_image(width: u32, height: u32) -> Image<Rgb<u8>> {
    ImageBuffer::from_fn(width, height, |x, _| {
        if x % 2 == 0 {
            Rgb([230, 140, 40])
        } else {
            Rgb([30, 120, 140])
        }
    })
}

/// 2x2 cutout: an opaque, two partially transparent and one fully
/// transparent pixel, each with a distinct colour.
pub fn cutout_image() -> Image<Rgba<u8>> {
    let mut image = ImageBuffer::new(2, 2);
    image.put_pixel(0, 0, Rgba([210, 60, 30, 255]));
    image.put_pixel(1, 0, Rgba([40, 160, 90, 180]));
    image.put_pixel(0, 1, Rgba([20, 40, 200, 40]));
    image.put_pixel(1, 1, Rgba([77, 77, 77, 0]));
    image
}

/// Largest per-channel difference between two images, or `None` when their
/// dimensions differ.
pub fn max_channel_difference(a: &Image<Rgb<u8>>, b: &Image<Rgb<u8>>) -> Option<u8> {
    if a.dimensions() != b.dimensions() {
        return None;
    }
    let worst = a
        .as_raw()
        .iter()
        .zip(b.as_raw().iter())
        .map(|(&x, &y)| x.abs_diff(y))
        .max();
    Some(worst.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_image_follows_palette_order() {
        let image = palette_image();
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.get_pixel(2, 0), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(3, 1), &Rgb([50, 75, 25]));
    }

    #[test]
    fn step_edge_splits_at_half_width() {
        let image = step_edge_image(6, 2, 10, 90);
        assert_eq!(image.get_pixel(2, 1), &Rgb([10, 10, 10]));
        assert_eq!(image.get_pixel(3, 0), &Rgb([90, 90, 90]));
    }

    #[test]
    fn max_channel_difference_reports_worst_channel() {
        let a = flat_image(2, 2, [10, 20, 30]);
        let mut b = a.clone();
        b.put_pixel(1, 1, Rgb([10, 24, 27]));

        assert_eq!(max_channel_difference(&a, &a), Some(0));
        assert_eq!(max_channel_difference(&a, &b), Some(4));
        assert_eq!(max_channel_difference(&a, &flat_image(1, 2, [0, 0, 0])), None);
    }
}
