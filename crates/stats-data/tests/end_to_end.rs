use std::path::Path;

use stats_core::mapping::InfluencerMapping;
use stats_core::models::Platform;
use stats_core::settings::ExtractorConfig;
use stats_core::Result;
use stats_data::extraction::{scan_stats_directory, FolderOutcome};
use stats_data::ocr::TextRecognizer;
use stats_data::report::{read_report, render_summary, write_report};
use stats_data::scanner::FirstByName;
use tempfile::TempDir;

struct FixedText(&'static str);

impl TextRecognizer for FixedText {
    fn recognize(&self, _image_path: &Path, _lang: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}

fn write_png(dir: &Path, name: &str) {
    std::fs::create_dir_all(dir).unwrap();
    image::RgbImage::new(16, 16).save(dir.join(name)).unwrap();
}

#[test]
fn single_folder_produces_expected_report() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("PNG");
    write_png(&root.join("A"), "capture.png");

    let mapping =
        InfluencerMapping::from_json_str(r#"{"A": {"name": "X", "platform": "INSTAGRAM"}}"#)
            .unwrap();
    let config = ExtractorConfig::new(&root, mapping);

    let result = scan_stats_directory(&config, &FixedText("200K abonnés"), &FirstByName);

    let output = tmp.path().join("extracted-influencers.json");
    write_report(&output, &result.influencers).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([
            {
                "name": "X",
                "platforms": [
                    {"platform": "INSTAGRAM", "followers": 200000, "isMain": true}
                ]
            }
        ])
    );
}

#[test]
fn report_round_trips_scan_result() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();
    write_png(&root.join("youtube aladdin"), "1.png");
    write_png(&root.join("STATS INSTA"), "1.png");

    let mapping = InfluencerMapping::from_rows([
        ("youtube aladdin", "Aladdin", Platform::Youtube),
        ("missing folder", "Ghost", Platform::Tiktok),
        ("STATS INSTA", "Aladdin", Platform::Instagram),
    ]);
    let config = ExtractorConfig::new(&root, mapping);

    let result = scan_stats_directory(&config, &FixedText("1,2M abonnés"), &FirstByName);
    assert_eq!(result.folders[1].outcome, FolderOutcome::MissingFolder);

    let output = root.join("out").join("report.json");
    write_report(&output, &result.influencers).unwrap();
    let loaded = read_report(&output).unwrap();

    assert_eq!(loaded, result.influencers);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Aladdin");
    let platforms: Vec<(Platform, u64, bool)> = loaded[0]
        .platforms
        .iter()
        .map(|p| (p.platform, p.followers, p.is_main))
        .collect();
    assert_eq!(
        platforms,
        vec![
            (Platform::Youtube, 1_200_000, true),
            (Platform::Instagram, 1_200_000, false),
        ]
    );

    let summary = render_summary(&loaded);
    assert!(summary.contains("Aladdin:"));
    assert!(summary.contains("• YOUTUBE: 1,200,000 followers (main)"));
    assert!(!summary.contains("Ghost"));
}
