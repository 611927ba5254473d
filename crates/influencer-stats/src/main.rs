mod bootstrap;

use anyhow::{anyhow, Context, Result};
use stats_core::settings::Settings;
use stats_data::extraction::scan_stats_directory;
use stats_data::ocr::Tesseract;
use stats_data::report::{render_summary, write_report};
use stats_data::scanner::selector_from_name;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Influencer stats v{} starting", env!("CARGO_PKG_VERSION"));

    let ocr = Tesseract;
    if let Err(e) = bootstrap::check_ocr(&ocr, &settings.lang) {
        tracing::error!("{}", e);
        eprintln!("{}", bootstrap::INSTALL_INSTRUCTIONS);
        return Err(e.into());
    }

    let config = settings.to_config().context("Invalid configuration")?;
    let selector = selector_from_name(&settings.select)
        .ok_or_else(|| anyhow!("Unknown image selector: {}", settings.select))?;

    tracing::info!(
        "Scanning {} folder(s) under {} (select: {}, lang: {})",
        config.mapping.len(),
        config.root.display(),
        selector.name(),
        config.lang
    );

    let result = scan_stats_directory(&config, &ocr, selector.as_ref());

    write_report(&settings.output, &result.influencers)
        .with_context(|| format!("Cannot write report to {}", settings.output.display()))?;

    tracing::info!("Extracted data: {} influencer(s)", result.influencers.len());
    tracing::info!("Report written to {}", settings.output.display());

    println!("{}", render_summary(&result.influencers));

    Ok(())
}
