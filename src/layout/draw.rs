//! Pixel-level drawing onto the sheet canvas.
//!
//! All functions clip silently at the canvas edge.

use image::{GrayImage, Rgb, RgbImage, RgbaImage};

use super::grid::Rect;

#[inline]
fn put_clipped(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u64) < canvas.width() as u64 && (y as u64) < canvas.height() as u64 {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

/// One-pixel outline with inclusive corners, so the right and bottom edges
/// sit at `rect.right()` and `rect.bottom()`.
pub fn outline(canvas: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let (x0, y0) = (rect.x as i64, rect.y as i64);
    let (x1, y1) = (rect.right() as i64, rect.bottom() as i64);

    for x in x0..=x1 {
        put_clipped(canvas, x, y0, color);
        put_clipped(canvas, x, y1, color);
    }
    for y in y0..=y1 {
        put_clipped(canvas, x0, y, color);
        put_clipped(canvas, x1, y, color);
    }
}

/// Composite an RGBA image using its own alpha channel as the mask.
pub fn paste_masked(canvas: &mut RgbImage, src: &RgbaImage, x: i64, y: i64) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let (cx, cy) = (x + sx as i64, y + sy as i64);
        if cx < 0 || cy < 0 || cx >= canvas.width() as i64 || cy >= canvas.height() as i64 {
            continue;
        }
        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        let alpha = a as u32;
        for (d, s) in dst.0.iter_mut().zip([r, g, b]) {
            *d = ((s as u32 * alpha + *d as u32 * (255 - alpha) + 127) / 255) as u8;
        }
    }
}

/// Copy a grayscale image verbatim.
pub fn paste_gray(canvas: &mut RgbImage, src: &GrayImage, x: i64, y: i64) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        let v = pixel.0[0];
        put_clipped(canvas, x + sx as i64, y + sy as i64, Rgb([v, v, v]));
    }
}
