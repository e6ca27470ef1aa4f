//! Auto-fit font selection.
//!
//! Starting from a maximum size, the font shrinks one pixel at a time until
//! the measured block fits the cell interior. The search stops at
//! [`MIN_FONT_SIZE`]; text that still overflows there is rejected.

use super::metrics::{TextExtent, Typeface, measure_multiline};

/// Smallest font size the fitter will try.
pub const MIN_FONT_SIZE: u32 = 8;

/// Result of a successful fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    /// Chosen pixel size.
    pub size: u32,
    /// Measured block at that size.
    pub extent: TextExtent,
}

/// Find the largest size in `[MIN_FONT_SIZE, max_size]` at which `text`
/// fits `max_width` x `max_height`.
///
/// Returns `None` when even [`MIN_FONT_SIZE`] overflows. If `max_size` is
/// already below the minimum, only `max_size` is tried.
pub fn fit_text(
    face: &dyn Typeface,
    text: &str,
    max_size: u32,
    spacing: f32,
    max_width: f32,
    max_height: f32,
) -> Option<FittedText> {
    let floor = MIN_FONT_SIZE.min(max_size).max(1);

    (floor..=max_size).rev().find_map(|size| {
        let extent = measure_multiline(face, text, size as f32, spacing);
        extent
            .fits_within(max_width, max_height)
            .then_some(FittedText { size, extent })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BlockFace;

    #[test]
    fn test_short_text_keeps_max_size() {
        let face = BlockFace::default();
        let fitted = fit_text(&face, "SSID: a\nPassword: b", 30, 12.5, 508.0, 241.0).unwrap();
        assert_eq!(fitted.size, 30);
    }

    #[test]
    fn test_long_text_shrinks() {
        let face = BlockFace::default();
        // 50 chars * 0.5 * size <= 200 → size 8
        let text = "x".repeat(50);
        let fitted = fit_text(&face, &text, 30, 12.5, 200.0, 241.0).unwrap();
        assert_eq!(fitted.size, 8);
        assert!(fitted.extent.width <= 200.0);
    }

    #[test]
    fn test_picks_largest_fitting_size() {
        let face = BlockFace::default();
        // 10 chars: width 5 * size <= 100 → size 20
        let fitted = fit_text(&face, "0123456789", 40, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(fitted.size, 20);
        let one_up = measure_multiline(&face, "0123456789", 21.0, 0.0);
        assert!(!one_up.fits_within(100.0, 100.0));
    }

    #[test]
    fn test_height_constraint() {
        let face = BlockFace::default();
        // 2 lines: 2 * size + 10 <= 50 → size 20
        let fitted = fit_text(&face, "a\nb", 40, 10.0, 500.0, 50.0).unwrap();
        assert_eq!(fitted.size, 20);
        assert_eq!(fitted.extent.height, 50.0);
    }

    #[test]
    fn test_overflow_at_minimum_is_none() {
        let face = BlockFace::default();
        let text = "x".repeat(200);
        assert!(fit_text(&face, &text, 30, 12.5, 508.0, 241.0).is_none());
    }

    #[test]
    fn test_deterministic() {
        let face = BlockFace::default();
        let a = fit_text(&face, "Name: Jane Doe\nPhone: 555-1234", 40, 12.5, 508.0, 241.0);
        let b = fit_text(&face, "Name: Jane Doe\nPhone: 555-1234", 40, 12.5, 508.0, 241.0);
        assert_eq!(a, b);
    }
}
