//! Screenshot discovery inside a mapped folder, and the strategies choosing
//! which screenshot stands for the folder.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// ── Discovery ─────────────────────────────────────────────────────────────────

/// List the files directly inside `folder` whose extension matches
/// `extension` (ASCII case-insensitive), sorted by path.
pub fn find_images(folder: &Path, extension: &str) -> Vec<PathBuf> {
    if !folder.exists() {
        warn!("Folder does not exist: {}", folder.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("{} .{} file(s) in {}", files.len(), extension, folder.display());
    files
}

// ── Selection strategies ──────────────────────────────────────────────────────

/// Picks the screenshot that represents a folder.
pub trait ImageSelector {
    /// Choose one of `candidates` (already in listing order).
    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf>;

    /// Name used on the command line and in logs.
    fn name(&self) -> &'static str;
}

/// First file in listing order. Statistics exports usually start with the
/// summary page.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstByName;

impl ImageSelector for FirstByName {
    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates.first().cloned()
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Largest file on disk; ties go to the earlier file in listing order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFile;

impl ImageSelector for LargestFile {
    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        let mut best: Option<(&PathBuf, u64)> = None;
        for path in candidates {
            let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
            match best {
                Some((_, best_size)) if size <= best_size => {}
                _ => best = Some((path, size)),
            }
        }
        best.map(|(path, _)| path.clone())
    }

    fn name(&self) -> &'static str {
        "largest"
    }
}

/// Resolve a selector from its CLI name.
pub fn selector_from_name(name: &str) -> Option<Box<dyn ImageSelector>> {
    match name {
        "first" => Some(Box::new(FirstByName)),
        "largest" => Some(Box::new(LargestFile)),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
