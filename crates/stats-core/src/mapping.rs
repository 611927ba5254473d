//! Folder name → influencer identity table.
//!
//! The table is ordered: folders are scanned in entry order and influencers
//! appear in the report in the order they were first recorded.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::models::Platform;

/// Identity a statistics folder belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MappingTarget {
    pub name: String,
    pub platform: Platform,
}

/// One row of the mapping table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Folder name relative to the stats root.
    pub folder: String,
    pub target: MappingTarget,
}

/// Ordered mapping of folder names to influencer identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfluencerMapping {
    entries: Vec<MappingEntry>,
}

/// Top-level members of a mapping document, in document order and with
/// repeated keys kept.
struct RawEntries(Vec<(String, serde_json::Value)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping folder names to influencers")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<RawEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Folders shipped with the tool, in scan order.
const BUILTIN: &[(&str, &str, Platform)] = &[
    ("harold insta", "Jore Jardin (Harold)", Platform::Instagram),
    ("HAROLD TIKTOK", "Jore Jardin (Harold)", Platform::Tiktok),
    ("INSTA AURELIA", "Aurelia (Villa Mahana Cassis)", Platform::Instagram),
    ("TIKTOK AURELIA", "Aurelia (Villa Mahana Cassis)", Platform::Tiktok),
    ("Stats-réseaux", "Mathilde Menier", Platform::Instagram),
    ("stats yann youtube", "Yann (Petit Copeau)", Platform::Youtube),
    ("STATS OLIVIA DEC", "Olivia (Mum Dalma)", Platform::Instagram),
    ("pdf24_converted 3", "Benjamin", Platform::Instagram),
    ("pdf24_converted 4", "Benjamin", Platform::Youtube),
    (
        "stats renovateurs du dimanche novembre 2025",
        "Rénovateurs du Dimanche (Ange et Violette)",
        Platform::Instagram,
    ),
    ("STATS INSTAGRAM BRICOMONT", "Marie Lys (Bricomont)", Platform::Instagram),
    ("STATS TIKTOK BRICOMONT", "Marie Lys (Bricomont)", Platform::Tiktok),
    ("YOUTUBE MARC & SANDY", "Marc & Sandy", Platform::Youtube),
    ("youtube aladdin", "Aladdin", Platform::Youtube),
    ("STATS INSTA", "Aladdin", Platform::Instagram),
    ("Youtube Statistiques 1 (7)", "Charley et Charlotte", Platform::Youtube),
    ("STATS INSTA TED", "Ted & Lisa", Platform::Instagram),
    ("STATS GUILLAUME", "Rénovaventure (Guillaume)", Platform::Instagram),
];

impl InfluencerMapping {
    /// Build a mapping from `(folder, name, platform)` rows.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str, Platform)>) -> Self {
        let entries = rows
            .into_iter()
            .map(|(folder, name, platform)| MappingEntry {
                folder: folder.to_string(),
                target: MappingTarget {
                    name: name.to_string(),
                    platform,
                },
            })
            .collect();
        Self { entries }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_rows(BUILTIN.iter().copied())
    }

    /// Parse a JSON object of the form
    /// `{"folder": {"name": "...", "platform": "INSTAGRAM"}, ...}`.
    ///
    /// Key order in the document is kept as scan order. A folder listed twice
    /// is a configuration error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let RawEntries(raw) = serde_json::from_str(json)?;

        let mut seen = HashSet::with_capacity(raw.len());
        let mut entries = Vec::with_capacity(raw.len());
        for (folder, value) in raw {
            if !seen.insert(folder.clone()) {
                return Err(StatsError::Config(format!(
                    "duplicate folder '{}' in mapping",
                    folder
                )));
            }
            let target: MappingTarget = serde_json::from_value(value).map_err(|e| {
                StatsError::Config(format!("invalid mapping for folder '{}': {}", folder, e))
            })?;
            entries.push(MappingEntry { folder, target });
        }

        if entries.is_empty() {
            return Err(StatsError::Config("mapping is empty".to_string()));
        }

        Ok(Self { entries })
    }

    /// Read and parse a mapping file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mapping = Self::from_json_str(&content)?;
        debug!("Loaded {} mapping entries from {}", mapping.len(), path.display());
        Ok(mapping)
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
