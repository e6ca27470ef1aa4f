//! Font-free fixed-pitch face.
//!
//! Every glyph is a solid block, so sheets render without any font file.
//! Used for `--draft` output and for deterministic layout tests.

use image::{Rgb, RgbImage};

use super::metrics::{LineSize, Typeface};

/// Fixed-pitch face drawing each non-space character as a filled block.
#[derive(Debug, Clone, Copy)]
pub struct BlockFace {
    /// Horizontal advance as a fraction of the pixel size.
    pub advance_em: f32,
}

impl Default for BlockFace {
    fn default() -> Self {
        Self { advance_em: 0.5 }
    }
}

impl Typeface for BlockFace {
    fn line_size(&self, line: &str, px: f32) -> LineSize {
        LineSize {
            width: line.chars().count() as f32 * self.advance_em * px,
            height: px,
        }
    }

    fn draw_line(&self, canvas: &mut RgbImage, x: i32, y: i32, line: &str, px: f32, color: Rgb<u8>) {
        let advance = self.advance_em * px;
        let glyph_w = (advance * 0.8).floor() as i32;
        let top = y + (px * 0.2).floor() as i32;
        let bottom = y + px.floor() as i32;

        for (i, ch) in line.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let left = x + (i as f32 * advance).floor() as i32;
            for py in top..bottom {
                for gx in left..left + glyph_w {
                    if gx >= 0 && py >= 0 && (gx as u32) < canvas.width() && (py as u32) < canvas.height() {
                        canvas.put_pixel(gx as u32, py as u32, color);
                    }
                }
            }
        }
    }
}
