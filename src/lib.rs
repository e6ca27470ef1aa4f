//! # Cardpress - Printable Card Sheets
//!
//! Cardpress renders WiFi-access cards and customer contact cards onto a
//! single PNG sheet. Each card carries a logo, auto-fitted text and, for
//! WiFi cards, a QR code that phones can scan to join the network.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use cardpress::{
//!     card::{CardBatch, CardKind},
//!     generator::CardGenerator,
//!     layout::{CardRenderer, GridSpec},
//!     sink::{ImageSink, LastGenerated},
//!     text::TtfFace,
//! };
//!
//! let face = Arc::new(TtfFace::from_file("static/arial.ttf")?);
//! let renderer = CardRenderer::with_logo_file(face, "static/logo.png", GridSpec::STANDARD)?;
//! let generator = CardGenerator::new(
//!     renderer,
//!     ImageSink::new("static/generated_cards")?,
//!     Arc::new(LastGenerated::new()),
//! );
//!
//! let batch = CardBatch::from_form(CardKind::WiFi, "2", "NetA\nNetB", "pw1\nlongpassword")?;
//! let artifact = generator.generate(&batch)?;
//! println!("saved {}", artifact.path.display());
//!
//! # Ok::<(), cardpress::CardError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`card`] | Card kinds, records and validated batches |
//! | [`text`] | Sanitizing, typefaces, measurement and auto-fit |
//! | [`layout`] | Grid geometry and the card layout engine |
//! | [`qr`] | WiFi provisioning payloads and QR matrices |
//! | [`sink`] | PNG output and the last-generated store |
//! | [`generator`] | Render, save and record in one call |
//! | [`password`] | Suggested passwords from an external service |
//! | [`server`] | HTTP front end |
//! | [`config`] | Paths and addresses |
//! | [`logging`] | Subscriber setup for the binary |
//! | [`error`] | Error types |

pub mod card;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logging;
pub mod password;
pub mod qr;
pub mod server;
pub mod sink;
pub mod text;

// Re-exports for convenience
pub use card::{CardBatch, CardKind, CardRecord};
pub use error::CardError;
pub use generator::CardGenerator;
