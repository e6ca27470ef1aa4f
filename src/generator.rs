//! # Card Generation
//!
//! Ties the layout engine, the image sink and the last-generated store into
//! one call.
//!
//! ```text
//! CardBatch ─► CardRenderer::render ─► ImageSink::save ─► ArtifactStore::set
//! ```
//!
//! Either every step succeeds and the store points at the new file, or
//! nothing is saved and the store is left as it was.

use chrono::Local;
use std::sync::{Arc, Mutex};

use crate::card::{CardBatch, CardKind};
use crate::error::CardError;
use crate::layout::CardRenderer;
use crate::sink::{ArtifactStore, GeneratedArtifact, ImageSink};

/// Renders, saves and records card sheets.
pub struct CardGenerator {
    renderer: CardRenderer,
    sink: ImageSink,
    store: Arc<dyn ArtifactStore>,
    /// Serialises save + store update so the store always names the most
    /// recently completed save.
    publish: Mutex<()>,
}

impl CardGenerator {
    pub fn new(renderer: CardRenderer, sink: ImageSink, store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            renderer,
            sink,
            store,
            publish: Mutex::new(()),
        }
    }

    pub fn sink(&self) -> &ImageSink {
        &self.sink
    }

    /// Last successfully generated artifact, if any.
    pub fn last_generated(&self) -> Option<GeneratedArtifact> {
        self.store.get()
    }

    /// Render and save `batch`, then record it as the last generated sheet.
    pub fn generate(&self, batch: &CardBatch) -> Result<GeneratedArtifact, CardError> {
        let sheet = self.renderer.render(batch)?;

        let _guard = self.publish.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let artifact = self
            .sink
            .save(&sheet.image, batch.kind(), batch.len(), Local::now())?;
        self.store.set(artifact.clone());

        tracing::info!(
            "Generated {} {} cards and saved to {}",
            artifact.count,
            artifact.kind,
            artifact.filename
        );
        Ok(artifact)
    }

    /// Validate raw form fields and generate.
    ///
    /// Validation failures are returned untouched; other failures are logged
    /// at error level before being returned.
    pub fn generate_from_form(
        &self,
        kind: CardKind,
        count_text: &str,
        primary_text: &str,
        secondary_text: &str,
    ) -> Result<GeneratedArtifact, CardError> {
        let batch = CardBatch::from_form(kind, count_text, primary_text, secondary_text)?;
        self.generate(&batch).inspect_err(|e| {
            tracing::error!("Unexpected error during card generation: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridSpec;
    use crate::sink::LastGenerated;
    use crate::text::BlockFace;
    use image::{Rgba, RgbaImage};

    fn generator(dir: &std::path::Path) -> (CardGenerator, Arc<LastGenerated>) {
        let logo = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 255, 255]));
        let renderer =
            CardRenderer::new(Arc::new(BlockFace::default()), &logo, GridSpec::STANDARD).unwrap();
        let store = Arc::new(LastGenerated::new());
        let sink = ImageSink::new(dir).unwrap();
        (CardGenerator::new(renderer, sink, store.clone()), store)
    }

    #[test]
    fn test_generate_updates_store() {
        let dir = tempfile::tempdir().unwrap();
        let (generator, store) = generator(dir.path());

        let artifact = generator
            .generate_from_form(CardKind::Contact, "1", "Jane Doe", "555-1234")
            .unwrap();

        assert!(artifact.filename.starts_with("cards_Phone_1_"));
        assert!(artifact.path.exists());
        assert_eq!(store.get(), Some(artifact.clone()));
        assert_eq!(generator.last_generated(), Some(artifact));
    }

    #[test]
    fn test_validation_failure_leaves_store() {
        let dir = tempfile::tempdir().unwrap();
        let (generator, store) = generator(dir.path());

        let result = generator.generate_from_form(CardKind::WiFi, "13", "a", "b");
        assert!(matches!(result, Err(CardError::CountOutOfRange(13))));
        assert!(store.get().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_render_failure_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (generator, store) = generator(dir.path());
        let first = generator
            .generate_from_form(CardKind::WiFi, "1", "Home", "secret")
            .unwrap();

        let too_long = "N".repeat(400);
        let result = generator.generate_from_form(CardKind::WiFi, "2", &format!("ok\n{}", too_long), "a\nb");
        assert!(matches!(result, Err(CardError::ContentTooLarge { card: 1, .. })));

        assert_eq!(store.get(), Some(first));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
