use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, StatsError};
use crate::extract::ScalingMode;
use crate::mapping::InfluencerMapping;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Extract follower counts from social-media statistics screenshots
#[derive(Parser, Debug, Clone)]
#[command(
    name = "influencer-stats",
    about = "Extract follower counts from social-media statistics screenshots",
    version
)]
pub struct Settings {
    /// Directory holding one sub-folder of screenshots per mapping entry
    #[arg(
        long,
        env = "INFLUENCER_STATS_ROOT",
        default_value = "data-import/POUR INFLU/PNG"
    )]
    pub root: PathBuf,

    /// JSON mapping file (folder -> {name, platform}); built-in table when absent
    #[arg(long, env = "INFLUENCER_STATS_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Report destination
    #[arg(long, default_value = "extracted-influencers.json")]
    pub output: PathBuf,

    /// OCR language pack
    #[arg(long, default_value = "fra")]
    pub lang: String,

    /// Image file extension to look for
    #[arg(long, default_value = "png")]
    pub extension: String,

    /// Representative image selection
    #[arg(long, default_value = "first", value_parser = ["first", "largest"])]
    pub select: String,

    /// K/M suffix scaling
    #[arg(long, default_value = "global", value_parser = ["global", "per-match"])]
    pub scaling: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── ExtractorConfig ────────────────────────────────────────────────────────────

/// Everything a scan needs, detached from the command line.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub root: PathBuf,
    pub mapping: InfluencerMapping,
    pub extension: String,
    pub lang: String,
    pub scaling: ScalingMode,
}

impl ExtractorConfig {
    /// Config over `root` and `mapping` with the default extension,
    /// language and scaling.
    pub fn new(root: impl Into<PathBuf>, mapping: InfluencerMapping) -> Self {
        Self {
            root: root.into(),
            mapping,
            extension: "png".to_string(),
            lang: "fra".to_string(),
            scaling: ScalingMode::Global,
        }
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` flag.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<std::ffi::OsString>) -> Self {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Resolved scaling mode.
    pub fn scaling_mode(&self) -> Result<ScalingMode> {
        ScalingMode::from_name(&self.scaling)
            .ok_or_else(|| StatsError::Config(format!("unknown scaling mode: {}", self.scaling)))
    }

    /// Load the mapping table and build the scan configuration.
    pub fn to_config(&self) -> Result<ExtractorConfig> {
        let mapping = match &self.mapping {
            Some(path) => InfluencerMapping::load_from(path)?,
            None => InfluencerMapping::builtin(),
        };

        let extension = self.extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(StatsError::Config("image extension is empty".to_string()));
        }

        Ok(ExtractorConfig {
            root: self.root.clone(),
            mapping,
            extension,
            lang: self.lang.clone(),
            scaling: self.scaling_mode()?,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
