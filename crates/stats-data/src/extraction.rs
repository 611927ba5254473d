//! Main extraction pipeline.
//!
//! Walks the mapping table in order, reads the representative screenshot of
//! every folder and feeds the follower counts into a [`StatsAggregator`].
//! Every folder-level failure is logged and recorded as a [`FolderOutcome`];
//! none of them stop the run.

use std::path::Path;

use stats_core::formatting::format_count;
use stats_core::mapping::MappingEntry;
use stats_core::models::Influencer;
use stats_core::settings::ExtractorConfig;
use tracing::{error, info, warn};

use crate::aggregator::StatsAggregator;
use crate::ocr::TextRecognizer;
use crate::reader::read_image_stats;
use crate::scanner::{find_images, ImageSelector};

// ── Public types ──────────────────────────────────────────────────────────────

/// What happened to one mapped folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderOutcome {
    /// A follower count was read and recorded.
    Recorded { followers: u64 },
    /// The folder does not exist under the root.
    MissingFolder,
    /// The folder holds no image of the configured format.
    NoImages,
    /// The representative image could not be decoded or OCR failed.
    ReadFailed,
    /// OCR succeeded but no non-zero follower count was found in the text.
    NoNumber,
}

impl FolderOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, FolderOutcome::Recorded { .. })
    }
}

/// Outcome of one mapped folder, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
    pub folder: String,
    pub outcome: FolderOutcome,
}

/// The complete output of [`scan_stats_directory`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Influencers in first-reference order.
    pub influencers: Vec<Influencer>,
    /// One report per mapping entry.
    pub folders: Vec<FolderReport>,
}

impl ScanResult {
    /// Number of folders that produced a record.
    pub fn recorded_count(&self) -> usize {
        self.folders.iter().filter(|f| f.outcome.is_recorded()).count()
    }

    /// Number of folders skipped for any reason.
    pub fn skipped_count(&self) -> usize {
        self.folders.len() - self.recorded_count()
    }
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the extraction over every entry of `config.mapping`.
///
/// 1. Skip folders missing under `config.root`.
/// 2. List the images of `config.extension`; skip empty folders.
/// 3. Let `selector` pick the representative image and OCR it.
/// 4. Record the follower count against the mapped influencer.
pub fn scan_stats_directory(
    config: &ExtractorConfig,
    recognizer: &dyn TextRecognizer,
    selector: &dyn ImageSelector,
) -> ScanResult {
    let mut aggregator = StatsAggregator::new();
    let mut folders = Vec::with_capacity(config.mapping.len());

    for entry in config.mapping.entries() {
        let outcome = scan_folder(config, entry, recognizer, selector, &mut aggregator);
        folders.push(FolderReport {
            folder: entry.folder.clone(),
            outcome,
        });
    }

    let result = ScanResult {
        influencers: aggregator.into_influencers(),
        folders,
    };

    info!(
        "Scanned {} folder(s): {} recorded, {} skipped, {} influencer(s)",
        result.folders.len(),
        result.recorded_count(),
        result.skipped_count(),
        result.influencers.len()
    );

    result
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn scan_folder(
    config: &ExtractorConfig,
    entry: &MappingEntry,
    recognizer: &dyn TextRecognizer,
    selector: &dyn ImageSelector,
    aggregator: &mut StatsAggregator,
) -> FolderOutcome {
    let folder_path = config.root.join(&entry.folder);

    if !folder_path.exists() {
        warn!("Folder not found: {}", folder_path.display());
        return FolderOutcome::MissingFolder;
    }

    info!("Scanning {}...", entry.folder);

    let candidates = find_images(&folder_path, &config.extension);
    let Some(image_path) = selector.select(&candidates) else {
        warn!("No .{} file found in {}", config.extension, entry.folder);
        return FolderOutcome::NoImages;
    };

    read_followers(config, entry, &image_path, recognizer, aggregator)
}

fn read_followers(
    config: &ExtractorConfig,
    entry: &MappingEntry,
    image_path: &Path,
    recognizer: &dyn TextRecognizer,
    aggregator: &mut StatsAggregator,
) -> FolderOutcome {
    let Some(stats) = read_image_stats(image_path, recognizer, &config.lang, config.scaling)
    else {
        error!("Could not extract stats for {}", entry.folder);
        return FolderOutcome::ReadFailed;
    };

    // A zero count is an OCR artefact, not a real audience.
    let Some(followers) = stats.followers.filter(|&f| f > 0) else {
        error!(
            "Could not extract stats for {}: no follower count in {}",
            entry.folder,
            image_path.display()
        );
        return FolderOutcome::NoNumber;
    };

    let target = &entry.target;
    aggregator.record(&target.name, target.platform, followers);
    info!(
        "{}: {} followers ({})",
        target.platform,
        format_count(followers),
        target.name
    );

    FolderOutcome::Recorded { followers }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
