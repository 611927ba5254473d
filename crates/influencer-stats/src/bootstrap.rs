use stats_core::Result;
use stats_data::ocr::Tesseract;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI log level (`DEBUG`, `INFO`, `WARNING`, `ERROR`) to a
/// [`tracing_subscriber::EnvFilter`] directive.
pub fn filter_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber on stderr.
///
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── OCR availability ───────────────────────────────────────────────────────────

/// Printed when Tesseract cannot be started.
pub const INSTALL_INSTRUCTIONS: &str = "\
Tesseract OCR is not installed or not on PATH.

Installation:
  1. Install Tesseract (https://github.com/tesseract-ocr/tesseract#installing-tesseract;
     Windows builds: https://github.com/UB-Mannheim/tesseract/wiki)
  2. Install the French language pack (tesseract-ocr-fra)
  3. Make sure the `tesseract` executable is on PATH and re-run";

/// Check that Tesseract runs, and warn when `lang` is not installed.
///
/// Returns the version banner.
pub fn check_ocr(ocr: &Tesseract, lang: &str) -> Result<String> {
    let version = ocr.version()?;
    tracing::info!("Using {}", version);

    match ocr.available_languages() {
        Ok(langs) if !langs.iter().any(|l| l == lang) => {
            tracing::warn!(
                "Language pack '{}' not found (installed: {}); OCR will fail",
                lang,
                langs.join(", ")
            );
        }
        Ok(_) => {}
        Err(e) => tracing::debug!("Could not list OCR languages: {}", e),
    }

    Ok(version)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::StatsError;

    #[test]
    fn test_filter_directive_level_names() {
        assert_eq!(filter_directive("DEBUG"), "debug");
        assert_eq!(filter_directive("INFO"), "info");
        assert_eq!(filter_directive("WARNING"), "warn");
        assert_eq!(filter_directive("ERROR"), "error");
    }

    #[test]
    fn test_filter_directive_passthrough() {
        assert_eq!(filter_directive("stats_data=trace"), "stats_data=trace");
        assert_eq!(filter_directive("warn"), "warn");
    }

    #[test]
    fn test_check_ocr_reports_version_or_unavailable() {
        // Passes on hosts with and without Tesseract installed.
        match check_ocr(&Tesseract, "fra") {
            Ok(version) => assert!(!version.is_empty()),
            Err(e) => assert!(matches!(
                e,
                StatsError::OcrUnavailable(_) | StatsError::Ocr(_)
            )),
        }
    }

    #[test]
    fn test_install_instructions_mention_language_pack() {
        assert!(INSTALL_INSTRUCTIONS.contains("tesseract-ocr-fra"));
        assert!(INSTALL_INSTRUCTIONS.contains("on PATH"));
        assert!(!INSTALL_INSTRUCTIONS.contains("TESSERACT_CMD"));
    }
}
