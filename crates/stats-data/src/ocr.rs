//! Tesseract OCR backend.
//!
//! Wraps `rusty-tesseract`, which drives the installed `tesseract`
//! executable found on `PATH`.

use std::path::Path;

use rusty_tesseract::{Args, Image, TessError};
use stats_core::{Result, StatsError};
use tracing::debug;

/// Turns an image file into text.
pub trait TextRecognizer {
    fn recognize(&self, image_path: &Path, lang: &str) -> Result<String>;
}

/// [`TextRecognizer`] backed by Tesseract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tesseract;

impl Tesseract {
    /// Version banner of the installed Tesseract.
    ///
    /// Fails with [`StatsError::OcrUnavailable`] when Tesseract is missing.
    pub fn version(&self) -> Result<String> {
        let version = rusty_tesseract::get_tesseract_version().map_err(map_tess_error)?;
        Ok(version.lines().next().unwrap_or_default().trim().to_string())
    }

    /// Installed language packs.
    pub fn available_languages(&self) -> Result<Vec<String>> {
        rusty_tesseract::get_tesseract_langs().map_err(map_tess_error)
    }
}

impl TextRecognizer for Tesseract {
    fn recognize(&self, image_path: &Path, lang: &str) -> Result<String> {
        let image = Image::from_path(image_path).map_err(map_tess_error)?;
        let args = Args {
            lang: lang.to_string(),
            ..Args::default()
        };

        let text = rusty_tesseract::image_to_string(&image, &args).map_err(map_tess_error)?;
        debug!("OCR produced {} characters", text.len());
        Ok(text)
    }
}

fn map_tess_error(err: TessError) -> StatsError {
    match err {
        e @ TessError::TesseractNotFoundError => StatsError::OcrUnavailable(e.to_string()),
        e => StatsError::Ocr(e.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
