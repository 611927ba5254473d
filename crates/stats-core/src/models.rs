use serde::{Deserialize, Serialize};
use std::fmt;

/// Social network a statistics screenshot was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
}

impl Platform {
    /// Upper-case label used in mapping files and in the JSON report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "INSTAGRAM",
            Platform::Tiktok => "TIKTOK",
            Platform::Youtube => "YOUTUBE",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follower count read for one platform of an influencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedStat {
    pub platform: Platform,
    pub followers: u64,
    /// `true` for the first platform recorded for the influencer.
    #[serde(rename = "isMain")]
    pub is_main: bool,
}

/// One influencer and every platform successfully read for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influencer {
    pub name: String,
    pub platforms: Vec<ExtractedStat>,
}

impl Influencer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platforms: Vec::new(),
        }
    }
}

/// Raw OCR text of an image together with the follower count parsed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStats {
    pub text: String,
    pub followers: Option<u64>,
}
