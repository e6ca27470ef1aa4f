//! Multi-line text measurement.
//!
//! Measurement is expressed over the [`Typeface`] trait so the layout engine
//! can run against a real TrueType face or the font-free [`BlockFace`].
//!
//! [`BlockFace`]: super::BlockFace

use image::{Rgb, RgbImage};

/// Rendered size of a single line, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSize {
    pub width: f32,
    pub height: f32,
}

/// Bounding box of a whole multi-line block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Widest single line.
    pub width: f32,
    /// Sum of line heights plus spacing between (not after) lines.
    pub height: f32,
}

impl TextExtent {
    /// Whether this extent fits inside a `width` x `height` box.
    pub fn fits_within(&self, width: f32, height: f32) -> bool {
        self.width <= width && self.height <= height
    }
}

/// A face that can measure and draw single lines at a pixel size.
pub trait Typeface: Send + Sync {
    /// Size of `line` rendered at `px` pixels.
    fn line_size(&self, line: &str, px: f32) -> LineSize;

    /// Draw `line` with its top-left corner at `(x, y)`. Pixels outside the
    /// canvas are clipped.
    fn draw_line(&self, canvas: &mut RgbImage, x: i32, y: i32, line: &str, px: f32, color: Rgb<u8>);
}

/// Measure a newline-separated block of text.
///
/// Width is the widest line; height sums each line's height plus `spacing`
/// between consecutive lines.
pub fn measure_multiline(face: &dyn Typeface, text: &str, px: f32, spacing: f32) -> TextExtent {
    let mut extent = TextExtent::default();
    let mut lines = 0usize;

    for line in text.split('\n') {
        let size = face.line_size(line, px);
        extent.width = extent.width.max(size.width);
        extent.height += size.height;
        lines += 1;
    }

    if lines > 1 {
        extent.height += spacing * (lines - 1) as f32;
    }
    extent
}

/// Draw a newline-separated block with each line centred within the
/// block's width, advancing by each line's measured height plus `spacing`.
pub fn draw_multiline(
    face: &dyn Typeface,
    canvas: &mut RgbImage,
    origin: (f32, f32),
    text: &str,
    px: f32,
    spacing: f32,
    color: Rgb<u8>,
) {
    let block = measure_multiline(face, text, px, spacing);
    let (x0, mut y) = origin;

    for line in text.split('\n') {
        let size = face.line_size(line, px);
        let x = x0 + ((block.width - size.width) / 2.0).floor();
        face.draw_line(canvas, x as i32, y as i32, line, px, color);
        y += size.height + spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BlockFace;

    #[test]
    fn test_single_line_has_no_spacing() {
        let face = BlockFace::default();
        let extent = measure_multiline(&face, "abcd", 10.0, 12.5);
        assert_eq!(extent.width, 20.0);
        assert_eq!(extent.height, 10.0);
    }

    #[test]
    fn test_spacing_between_lines_only() {
        let face = BlockFace::default();
        let extent = measure_multiline(&face, "ab\nabcdef\nabc", 10.0, 12.5);
        assert_eq!(extent.width, 30.0);
        assert_eq!(extent.height, 30.0 + 25.0);
    }

    #[test]
    fn test_fits_within() {
        let extent = TextExtent {
            width: 100.0,
            height: 50.0,
        };
        assert!(extent.fits_within(100.0, 50.0));
        assert!(!extent.fits_within(99.5, 50.0));
        assert!(!extent.fits_within(100.0, 49.0));
    }

    #[test]
    fn test_draw_multiline_stays_in_measured_box() {
        let face = BlockFace::default();
        let mut canvas = RgbImage::from_pixel(200, 100, Rgb([255, 255, 255]));
        let text = "short\nmuch longer line";
        let extent = measure_multiline(&face, text, 10.0, 4.0);

        draw_multiline(&face, &mut canvas, (10.0, 10.0), text, 10.0, 4.0, Rgb([0, 0, 0]));

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if pixel.0 == [0, 0, 0] {
                assert!(x as f32 >= 10.0 && (x as f32) < 10.0 + extent.width);
                assert!(y as f32 >= 10.0 && (y as f32) < 10.0 + extent.height);
            }
        }
        assert!(canvas.pixels().any(|p| p.0 == [0, 0, 0]));
    }
}
