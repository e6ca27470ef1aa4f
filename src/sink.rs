//! # Image Sink
//!
//! Persists composed sheets as PNG files and tracks the most recently saved
//! one.
//!
//! File names encode the card type, the count and a second-resolution local
//! timestamp: `cards_WiFi_2_20260101120000.png`. Saved files are never
//! removed.

use chrono::{DateTime, Local};
use image::{ImageFormat, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::card::CardKind;
use crate::error::CardError;

/// A saved sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// File name within the output directory.
    pub filename: String,
    /// Full path of the written file.
    pub path: PathBuf,
    pub kind: CardKind,
    pub count: usize,
    /// When the save completed.
    pub timestamp: DateTime<Local>,
}

/// Single-slot record of the last generated artifact.
pub trait ArtifactStore: Send + Sync {
    fn get(&self) -> Option<GeneratedArtifact>;
    fn set(&self, artifact: GeneratedArtifact);
}

/// In-memory [`ArtifactStore`]. Lost on restart.
#[derive(Debug, Default)]
pub struct LastGenerated {
    slot: Mutex<Option<GeneratedArtifact>>,
}

impl LastGenerated {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactStore for LastGenerated {
    fn get(&self) -> Option<GeneratedArtifact> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, artifact: GeneratedArtifact) {
        match self.slot.lock() {
            Ok(mut slot) => *slot = Some(artifact),
            Err(poisoned) => *poisoned.into_inner() = Some(artifact),
        }
    }
}

/// Build the file name for a sheet.
pub fn artifact_filename(kind: CardKind, count: usize, at: &DateTime<Local>) -> String {
    format!(
        "cards_{}_{}_{}.png",
        kind.file_tag(),
        count,
        at.format("%Y%m%d%H%M%S")
    )
}

/// Writes sheets into one output directory.
#[derive(Debug, Clone)]
pub struct ImageSink {
    dir: PathBuf,
}

impl ImageSink {
    /// Use `dir` for output, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CardError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `image` as PNG, named from `kind`, `count` and `at`.
    ///
    /// The PNG is written to a `.partial` file and renamed into place, so a
    /// reader never sees a half-written sheet. A save within the same second
    /// as an earlier one with the same kind and count replaces it.
    pub fn save(
        &self,
        image: &RgbImage,
        kind: CardKind,
        count: usize,
        at: DateTime<Local>,
    ) -> Result<GeneratedArtifact, CardError> {
        let filename = artifact_filename(kind, count, &at);
        let path = self.dir.join(&filename);
        let partial = self.dir.join(format!("{}.partial", filename));

        if let Err(e) = image.save_with_format(&partial, ImageFormat::Png) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&partial, &path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        Ok(GeneratedArtifact {
            filename,
            path,
            kind,
            count,
            timestamp: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use image::Rgb;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_filename_format() {
        let at = fixed_time();
        assert_eq!(
            artifact_filename(CardKind::WiFi, 2, &at),
            "cards_WiFi_2_20260309070501.png"
        );
        assert_eq!(
            artifact_filename(CardKind::Contact, 12, &at),
            "cards_Phone_12_20260309070501.png"
        );
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(dir.path().join("generated")).unwrap();
        let image = RgbImage::from_pixel(8, 4, Rgb([255, 255, 255]));

        let artifact = sink.save(&image, CardKind::WiFi, 1, fixed_time()).unwrap();

        assert_eq!(artifact.filename, "cards_WiFi_1_20260309070501.png");
        assert!(artifact.path.exists());
        let decoded = image::open(&artifact.path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));

        let leftovers: Vec<_> = fs::read_dir(sink.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_failed_rename_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(dir.path()).unwrap();
        let image = RgbImage::from_pixel(8, 4, Rgb([255, 255, 255]));

        // A non-empty directory where the sheet should land blocks the rename
        let blocked = dir.path().join("cards_WiFi_1_20260309070501.png");
        fs::create_dir(&blocked).unwrap();
        fs::write(blocked.join("keep"), b"x").unwrap();

        let result = sink.save(&image, CardKind::WiFi, 1, fixed_time());
        assert!(matches!(result, Err(CardError::Io(_))));

        let leftovers: Vec<_> = fs::read_dir(sink.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
            .collect();
        assert!(leftovers.is_empty());
        assert!(blocked.join("keep").exists());
    }

    #[test]
    fn test_store_overwrites() {
        let store = LastGenerated::new();
        assert!(store.get().is_none());

        let first = GeneratedArtifact {
            filename: "a.png".into(),
            path: PathBuf::from("a.png"),
            kind: CardKind::WiFi,
            count: 1,
            timestamp: fixed_time(),
        };
        let second = GeneratedArtifact {
            filename: "b.png".into(),
            path: PathBuf::from("b.png"),
            ..first.clone()
        };

        store.set(first);
        store.set(second.clone());
        assert_eq!(store.get(), Some(second));
    }
}
