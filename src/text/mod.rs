//! # Card Text
//!
//! Everything between a raw form string and pixels on a card:
//!
//! | Module | Role |
//! |--------|------|
//! | [`sanitize`] | Strip unsupported characters, pad short passwords |
//! | [`metrics`] | The [`Typeface`] seam and multi-line measurement |
//! | [`fit`] | Shrink-to-fit font size search |
//! | [`ttf_font`] | TrueType face via ab_glyph |
//! | [`block_font`] | Font-free fixed-pitch face |

pub mod block_font;
pub mod fit;
pub mod metrics;
pub mod sanitize;
pub mod ttf_font;

pub use block_font::BlockFace;
pub use fit::{FittedText, MIN_FONT_SIZE, fit_text};
pub use metrics::{LineSize, TextExtent, Typeface, draw_multiline, measure_multiline};
pub use sanitize::{MIN_PASSWORD_LEN, normalize_credentials, sanitize};
pub use ttf_font::TtfFace;
