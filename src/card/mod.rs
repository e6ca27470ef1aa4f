//! # Card Data Model
//!
//! A [`CardBatch`] is an ordered list of [`CardRecord`]s, validated on
//! construction. Records hold the raw strings the caller supplied; sanitizing
//! and password padding happen at layout time.
//!
//! ## Form input
//!
//! ```
//! use cardpress::card::{CardBatch, CardKind};
//!
//! let batch = CardBatch::from_form(CardKind::WiFi, "2", "NetA\nNetB", "pw1\nlongpassword")?;
//! assert_eq!(batch.len(), 2);
//! # Ok::<(), cardpress::CardError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardError;

/// Fewest cards a batch may hold.
pub const MIN_CARDS: usize = 1;
/// Most cards a batch may hold.
pub const MAX_CARDS: usize = 12;

/// Which kind of card a batch renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Network name + password, with a QR code.
    WiFi,
    /// Customer name + phone number.
    Contact,
}

impl CardKind {
    /// Parse the form's mode discriminator. Anything that is not `WiFi` is a
    /// contact card.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "WiFi" {
            Self::WiFi
        } else {
            Self::Contact
        }
    }

    /// Tag used in generated file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Self::WiFi => "WiFi",
            Self::Contact => "Phone",
        }
    }

    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WiFi => "WiFi",
            Self::Contact => "customer",
        }
    }

    /// Starting font size for auto-fit.
    pub fn max_font_size(&self) -> u32 {
        match self {
            Self::WiFi => 30,
            Self::Contact => 40,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One card's raw text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRecord {
    WiFi { ssid: String, password: String },
    Contact { name: String, phone: String },
}

impl CardRecord {
    pub fn kind(&self) -> CardKind {
        match self {
            Self::WiFi { .. } => CardKind::WiFi,
            Self::Contact { .. } => CardKind::Contact,
        }
    }
}

/// A validated, non-empty batch of same-kind cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBatch {
    kind: CardKind,
    records: Vec<CardRecord>,
}

impl CardBatch {
    /// Build a batch from parallel field lists.
    ///
    /// `count` must lie in `[MIN_CARDS, MAX_CARDS]` and both lists must hold
    /// exactly `count` entries.
    pub fn new(
        kind: CardKind,
        count: usize,
        primary: Vec<String>,
        secondary: Vec<String>,
    ) -> Result<Self, CardError> {
        if !(MIN_CARDS..=MAX_CARDS).contains(&count) {
            return Err(CardError::CountOutOfRange(count as i64));
        }
        if primary.len() != count || secondary.len() != count {
            return Err(CardError::NotEnoughEntries {
                kind,
                needed: count,
                primary: primary.len(),
                secondary: secondary.len(),
            });
        }

        let records = primary
            .into_iter()
            .zip(secondary)
            .map(|(first, second)| match kind {
                CardKind::WiFi => CardRecord::WiFi {
                    ssid: first,
                    password: second,
                },
                CardKind::Contact => CardRecord::Contact {
                    name: first,
                    phone: second,
                },
            })
            .collect();

        Ok(Self { kind, records })
    }

    /// Build a batch from raw form fields.
    ///
    /// The count must be an integer. Each text block is trimmed and split on
    /// newlines; only the first `count` lines are used, and a block with fewer
    /// lines than `count` is rejected.
    pub fn from_form(
        kind: CardKind,
        count_text: &str,
        primary_text: &str,
        secondary_text: &str,
    ) -> Result<Self, CardError> {
        let count: i64 = count_text
            .trim()
            .parse()
            .map_err(|_| CardError::InvalidInput(format!("card count {:?}", count_text)))?;
        if count < MIN_CARDS as i64 || count > MAX_CARDS as i64 {
            return Err(CardError::CountOutOfRange(count));
        }
        let count = count as usize;

        let primary = split_entries(primary_text, count);
        let secondary = split_entries(secondary_text, count);
        Self::new(kind, count, primary, secondary)
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; an empty batch cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn split_entries(text: &str, count: usize) -> Vec<String> {
    text.trim()
        .split('\n')
        .take(count)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_builds_records_in_order() {
        let batch = CardBatch::new(
            CardKind::WiFi,
            2,
            strings(&["NetA", "NetB"]),
            strings(&["pw1", "longpassword"]),
        )
        .unwrap();

        assert_eq!(
            batch.records(),
            &[
                CardRecord::WiFi {
                    ssid: "NetA".into(),
                    password: "pw1".into()
                },
                CardRecord::WiFi {
                    ssid: "NetB".into(),
                    password: "longpassword".into()
                },
            ]
        );
    }

    #[test]
    fn test_count_bounds() {
        for count in [0, 13] {
            let result = CardBatch::new(CardKind::Contact, count, vec![], vec![]);
            assert!(matches!(result, Err(CardError::CountOutOfRange(_))));
        }
    }

    #[test]
    fn test_mismatched_lengths() {
        let result = CardBatch::new(
            CardKind::Contact,
            3,
            strings(&["a", "b", "c"]),
            strings(&["1", "2"]),
        );
        assert!(matches!(
            result,
            Err(CardError::NotEnoughEntries {
                needed: 3,
                primary: 3,
                secondary: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_from_form_truncates_extra_lines() {
        let batch =
            CardBatch::from_form(CardKind::Contact, "1", "Jane Doe\nJohn Roe", "555-1234\n555-9999")
                .unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch.records()[0],
            CardRecord::Contact {
                name: "Jane Doe".into(),
                phone: "555-1234".into()
            }
        );
    }

    #[test]
    fn test_from_form_rejects_non_numeric_count() {
        let result = CardBatch::from_form(CardKind::WiFi, "three", "a", "b");
        assert!(matches!(result, Err(CardError::InvalidInput(_))));
    }

    #[test]
    fn test_from_form_rejects_negative_count() {
        let result = CardBatch::from_form(CardKind::WiFi, "-1", "a", "b");
        assert!(matches!(result, Err(CardError::CountOutOfRange(-1))));
    }

    #[test]
    fn test_from_form_short_list() {
        let result = CardBatch::from_form(CardKind::WiFi, "2", "NetA\nNetB", "pw1\n");
        assert!(matches!(result, Err(CardError::NotEnoughEntries { .. })));
    }

    #[test]
    fn test_kind_from_mode() {
        assert_eq!(CardKind::from_mode("WiFi"), CardKind::WiFi);
        assert_eq!(CardKind::from_mode("Phone"), CardKind::Contact);
        assert_eq!(CardKind::from_mode(""), CardKind::Contact);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(CardKind::Contact.file_tag(), "Phone");
        assert_eq!(CardKind::Contact.to_string(), "customer");
        assert_eq!(CardKind::WiFi.to_string(), "WiFi");
    }
}
