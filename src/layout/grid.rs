//! # Sheet Geometry
//!
//! Fixed card geometry plus the grid derived from a card count.
//!
//! ## Standard sheet
//!
//! ```text
//! ├──── 533 ────┤20├──── 533 ────┤20├──── 533 ──…┤
//! │   card 0    │  │   card 1    │  │   card 2   │  266 tall
//! ├─────────────┤  ├─────────────┤  ├────────────┤
//!                 20 px border row
//! │   card 3    │  │   card 4    │  ...
//! ```
//!
//! The canvas is always 1600 px wide. Three 533 px cards plus two borders
//! need 1639 px, so the right edge of the third column is clipped.

/// Card sheet constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Total canvas width in pixels
    pub total_width: u32,
    /// Cards per row
    pub columns: u32,
    /// Card width divided by card height
    pub aspect_ratio: u32,
    /// Gap after each card, right and below
    pub border: u32,
    /// Line spacing, also used as the inner text padding
    pub text_spacing: f32,
    /// Extra gap between text and QR code
    pub qr_spacing: f32,
    /// QR code side length in pixels
    pub qr_size: u32,
    /// Distance from cell top to logo top
    pub logo_top_margin: u32,
    /// Logo height as a fraction of card height (divisor)
    pub logo_height_divisor: u32,
}

impl GridSpec {
    /// The standard printable sheet.
    pub const STANDARD: Self = Self {
        total_width: 1600,
        columns: 3,
        aspect_ratio: 2,
        border: 20,
        text_spacing: 12.5,
        qr_spacing: 40.0,
        qr_size: 110,
        logo_top_margin: 20,
        logo_height_divisor: 5,
    };

    #[inline]
    pub fn card_width(&self) -> u32 {
        self.total_width / self.columns
    }

    #[inline]
    pub fn card_height(&self) -> u32 {
        self.card_width() / self.aspect_ratio
    }

    /// Logo height in pixels; width follows the source aspect ratio.
    #[inline]
    pub fn logo_height(&self) -> u32 {
        self.card_height() / self.logo_height_divisor
    }

    /// Largest text block a cell accepts: cell size minus padding each side.
    pub fn text_box(&self) -> (f32, f32) {
        let padding = 2.0 * self.text_spacing;
        (
            self.card_width() as f32 - padding,
            self.card_height() as f32 - padding,
        )
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Grid for a specific card count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub spec: GridSpec,
    pub rows: u32,
}

impl GridLayout {
    pub fn new(spec: GridSpec, cards: usize) -> Self {
        Self {
            spec,
            rows: (cards as u32).div_ceil(spec.columns),
        }
    }

    /// Canvas size: fixed width, one card plus border per row.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.spec.total_width,
            self.rows * (self.spec.card_height() + self.spec.border),
        )
    }

    /// Cell for card `index`, filled row-major.
    pub fn cell(&self, index: usize) -> Rect {
        let index = index as u32;
        let row = index / self.spec.columns;
        let col = index % self.spec.columns;
        let (w, h) = (self.spec.card_width(), self.spec.card_height());
        Rect {
            x: col * (w + self.spec.border),
            y: row * (h + self.spec.border),
            width: w,
            height: h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let spec = GridSpec::STANDARD;
        assert_eq!(spec.card_width(), 533);
        assert_eq!(spec.card_height(), 266);
        assert_eq!(spec.logo_height(), 53);
        assert_eq!(spec.text_box(), (508.0, 241.0));
    }

    #[test]
    fn test_canvas_height_per_count() {
        for n in 1..=12usize {
            let grid = GridLayout::new(GridSpec::STANDARD, n);
            let rows = n.div_ceil(3) as u32;
            assert_eq!(grid.canvas_size(), (1600, rows * 286), "n = {}", n);
        }
    }

    #[test]
    fn test_cells_row_major() {
        let grid = GridLayout::new(GridSpec::STANDARD, 5);
        assert_eq!(
            grid.cell(0),
            Rect {
                x: 0,
                y: 0,
                width: 533,
                height: 266
            }
        );
        assert_eq!(grid.cell(2).x, 1106);
        assert_eq!(grid.cell(3).x, 0);
        assert_eq!(grid.cell(3).y, 286);
        assert_eq!(grid.cell(4).x, 553);
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let grid = GridLayout::new(GridSpec::STANDARD, 12);
        for a in 0..12 {
            for b in (a + 1)..12 {
                let (ra, rb) = (grid.cell(a), grid.cell(b));
                let disjoint = ra.right() <= rb.x
                    || rb.right() <= ra.x
                    || ra.bottom() <= rb.y
                    || rb.bottom() <= ra.y;
                assert!(disjoint, "cells {} and {} overlap", a, b);
            }
        }
    }
}
