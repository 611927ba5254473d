//! JSON report and console summary.

use std::fmt::Write as _;
use std::path::Path;

use stats_core::formatting::format_count;
use stats_core::models::Influencer;
use stats_core::{Result, StatsError};

/// Write `influencers` to `path` as pretty-printed UTF-8 JSON.
///
/// Non-ASCII names are written as-is. Parent directories are created and the
/// file is replaced atomically through a temporary sibling.
pub fn write_report(path: &Path, influencers: &[Influencer]) -> Result<()> {
    let json = serde_json::to_string_pretty(influencers)?;

    let write_err = |source| StatsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    // Write to a temp file then rename for atomicity.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;

    Ok(())
}

/// Parse a report previously produced by [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<Influencer>> {
    let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Human-readable summary: one block per influencer, one line per platform,
/// the main platform flagged with `(main)`.
pub fn render_summary(influencers: &[Influencer]) -> String {
    let mut out = String::from("SUMMARY:\n");
    for inf in influencers {
        let _ = writeln!(out, "\n{}:", inf.name);
        for p in &inf.platforms {
            let main_indicator = if p.is_main { " (main)" } else { "" };
            let _ = writeln!(
                out,
                "  • {}: {} followers{}",
                p.platform,
                format_count(p.followers),
                main_indicator
            );
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stats_core::models::{ExtractedStat, Platform};
    use tempfile::TempDir;

    fn sample() -> Vec<Influencer> {
        vec![
            Influencer {
                name: "Rénovateurs du Dimanche (Ange et Violette)".to_string(),
                platforms: vec![
                    ExtractedStat {
                        platform: Platform::Instagram,
                        followers: 145_000,
                        is_main: true,
                    },
                    ExtractedStat {
                        platform: Platform::Tiktok,
                        followers: 1_200_000,
                        is_main: false,
                    },
                ],
            },
            Influencer {
                name: "Benjamin".to_string(),
                platforms: vec![ExtractedStat {
                    platform: Platform::Youtube,
                    followers: 48_213,
                    is_main: true,
                }],
            },
        ]
    }

    // ── write_report / read_report ────────────────────────────────────────────

    #[test]
    fn test_write_then_read_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("extracted-influencers.json");

        write_report(&path, &sample()).unwrap();
        let loaded = read_report(&path).unwrap();

        assert_eq!(loaded, sample());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_non_ascii_written_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");

        write_report(&path, &sample()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();

        assert!(raw.contains("Rénovateurs du Dimanche"));
        assert!(!raw.contains("\\u00e9"));
        assert!(raw.contains("\"isMain\": true"));
        assert!(raw.contains("\"platform\": \"INSTAGRAM\""));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("out.json");

        write_report(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_read_report_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_report(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StatsError::FileRead { .. }));
    }

    #[test]
    fn test_read_report_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            read_report(&path).unwrap_err(),
            StatsError::JsonParse(_)
        ));
    }

    // ── render_summary ────────────────────────────────────────────────────────

    #[test]
    fn test_render_summary() {
        let summary = render_summary(&sample());
        let expected = "SUMMARY:\n\
                        \n\
                        Rénovateurs du Dimanche (Ange et Violette):\n  \
                        • INSTAGRAM: 145,000 followers (main)\n  \
                        • TIKTOK: 1,200,000 followers\n\
                        \n\
                        Benjamin:\n  \
                        • YOUTUBE: 48,213 followers (main)\n";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_render_summary_empty() {
        assert_eq!(render_summary(&[]), "SUMMARY:\n");
    }
}
