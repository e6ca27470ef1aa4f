//! # Error Types
//!
//! This module defines the error type used throughout the cardpress library.
//!
//! Errors fall into two groups. Validation errors come from bad caller input
//! and carry a message meant for the person filling the form. Everything else
//! is unexpected: it gets logged with detail and shown to the user only as a
//! generic failure.

use thiserror::Error;

use crate::card::{CardKind, MAX_CARDS, MIN_CARDS};

/// Generic message shown for failures the user cannot fix.
pub const GENERIC_FAILURE: &str =
    "An unexpected error occurred. Please check the logs for details.";

/// Main error type for cardpress operations
#[derive(Debug, Error)]
pub enum CardError {
    /// Requested card count is outside `[MIN_CARDS, MAX_CARDS]`
    #[error("card count {0} is outside {min}..={max}", min = MIN_CARDS, max = MAX_CARDS)]
    CountOutOfRange(i64),

    /// One of the two entry lists has fewer than `count` lines
    #[error("not enough {kind} entries: need {needed}, got {primary} and {secondary}")]
    NotEnoughEntries {
        kind: CardKind,
        needed: usize,
        primary: usize,
        secondary: usize,
    },

    /// Input that could not be parsed at all (e.g. a non-numeric count)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Text did not fit its cell even at the minimum font size
    #[error("content of card {card} does not fit its cell at {min_size}px")]
    ContentTooLarge { card: usize, min_size: u32 },

    /// Font file could not be read or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// QR matrix could not be built for the payload
    #[error("QR error: {0}")]
    Qr(String),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Remote password service failure
    #[error("Password service error: {0}")]
    PasswordService(String),

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Server bind/serve failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardError {
    /// True for errors caused by the request itself; no work was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::CountOutOfRange(_) | Self::NotEnoughEntries { .. } | Self::InvalidInput(_)
        )
    }

    /// Message suitable for showing to the person who made the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::CountOutOfRange(_) => format!(
                "Please select a number of cards between {} and {}.",
                MIN_CARDS, MAX_CARDS
            ),
            Self::NotEnoughEntries { kind, .. } => match kind {
                CardKind::WiFi => "Not enough SSIDs or passwords provided.".to_string(),
                CardKind::Contact => "Not enough names or phone numbers provided.".to_string(),
            },
            Self::InvalidInput(_) => {
                "Invalid input. Please ensure all fields are correctly filled.".to_string()
            }
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
