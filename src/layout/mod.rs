//! # Sheet Layout
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`grid`] | Fixed card geometry and the N-card grid |
//! | [`draw`] | Outline, masked paste and gray paste primitives |
//! | [`engine`] | Per-card planning and composition |

pub mod draw;
pub mod engine;
pub mod grid;

pub use engine::{CardPlan, CardRenderer, QrPlacement, RenderedSheet};
pub use grid::{GridLayout, GridSpec, Rect};
