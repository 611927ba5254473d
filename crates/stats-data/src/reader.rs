//! Reads one screenshot: decode, OCR, parse the follower count.

use std::path::Path;

use image::DynamicImage;
use stats_core::extract::{extract_number_with, ScalingMode};
use stats_core::models::ImageStats;
use stats_core::{Result, StatsError};
use tracing::{debug, error};

use crate::ocr::TextRecognizer;

/// Open and decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| StatsError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode `path` to reject unreadable files, recognise its text in `lang` and extract the follower count.
pub fn try_read_image_stats(
    path: &Path,
    recognizer: &dyn TextRecognizer,
    lang: &str,
    scaling: ScalingMode,
) -> Result<ImageStats> {
    let image = load_image(path)?;
    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    let text = recognizer.recognize(path, lang)?;
    debug!("OCR text for {}: {:?}", path.display(), text);

    let followers = extract_number_with(&text, scaling);
    Ok(ImageStats { text, followers })
}

/// Like [`try_read_image_stats`], but logs the failure and returns `None` so
/// a bad image only costs its own folder.
pub fn read_image_stats(
    path: &Path,
    recognizer: &dyn TextRecognizer,
    lang: &str,
    scaling: ScalingMode,
) -> Option<ImageStats> {
    match try_read_image_stats(path, recognizer, lang, scaling) {
        Ok(stats) => Some(stats),
        Err(e) => {
            error!("Error reading {}: {}", path.display(), e);
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
