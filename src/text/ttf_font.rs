//! TrueType rendering via ab_glyph.
//!
//! Glyphs are laid out by horizontal advance and rasterised with coverage
//! blended onto the canvas, giving anti-aliased card text.

use ab_glyph::{Font, FontArc, ScaleFont};
use image::{Rgb, RgbImage};
use std::path::Path;

use super::metrics::{LineSize, Typeface};
use crate::error::CardError;

/// A TrueType/OpenType face loaded from disk.
#[derive(Clone)]
pub struct TtfFace {
    font: FontArc,
}

impl TtfFace {
    /// Load a face from a `.ttf`/`.otf` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CardError::Font(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_bytes(bytes)
    }

    /// Parse a face from owned font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CardError> {
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| CardError::Font(format!("Invalid font data: {}", e)))?;
        Ok(Self { font })
    }

    /// Glyph ids and caret positions for a line, plus its total advance.
    fn layout(&self, line: &str, px: f32) -> (Vec<(ab_glyph::GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(px);
        let mut glyphs = Vec::with_capacity(line.len());
        let mut caret_x = 0.0f32;

        for ch in line.chars() {
            let glyph_id = self.font.glyph_id(ch);
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
        }
        (glyphs, caret_x)
    }
}

impl Typeface for TtfFace {
    fn line_size(&self, line: &str, px: f32) -> LineSize {
        let scaled = self.font.as_scaled(px);
        let (_, advance) = self.layout(line, px);
        LineSize {
            width: advance.ceil(),
            height: (scaled.ascent() - scaled.descent()).ceil(),
        }
    }

    fn draw_line(&self, canvas: &mut RgbImage, x: i32, y: i32, line: &str, px: f32, color: Rgb<u8>) {
        let scaled = self.font.as_scaled(px);
        let baseline_y = y as f32 + scaled.ascent();
        let (glyphs, _) = self.layout(line, px);
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);

        for (glyph_id, glyph_x) in glyphs {
            let glyph =
                glyph_id.with_scale_and_position(px, ab_glyph::point(x as f32 + glyph_x, baseline_y));

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let cx = gx as i32 + bounds.min.x as i32;
                    let cy = gy as i32 + bounds.min.y as i32;
                    if cx >= 0 && cx < w && cy >= 0 && cy < h {
                        let pixel = canvas.get_pixel_mut(cx as u32, cy as u32);
                        let alpha = coverage.clamp(0.0, 1.0);
                        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                            *dst = (*dst as f32 * (1.0 - alpha) + src as f32 * alpha).round() as u8;
                        }
                    }
                });
            }
        }
    }
}
