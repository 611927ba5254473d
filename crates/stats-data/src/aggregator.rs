//! Per-influencer accumulation of extracted follower counts.

use std::collections::HashMap;

use stats_core::models::{ExtractedStat, Influencer, Platform};

// ── StatsAggregator ───────────────────────────────────────────────────────────

/// Groups extracted stats by influencer name, keeping first-reference order.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    influencers: Vec<Influencer>,
    index: HashMap<String, usize>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a platform record for `name`, creating the influencer on first
    /// reference. The first record of each influencer is its main platform.
    ///
    /// Returns the stored record.
    pub fn record(&mut self, name: &str, platform: Platform, followers: u64) -> &ExtractedStat {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.influencers.push(Influencer::new(name));
                let idx = self.influencers.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };

        let influencer = &mut self.influencers[idx];
        let is_main = influencer.platforms.is_empty();
        influencer.platforms.push(ExtractedStat {
            platform,
            followers,
            is_main,
        });
        &influencer.platforms[influencer.platforms.len() - 1]
    }

    pub fn into_influencers(self) -> Vec<Influencer> {
        self.influencers
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_is_main() {
        let mut agg = StatsAggregator::new();
        let stat = agg.record("Aladdin", Platform::Youtube, 52_000);
        assert!(stat.is_main);
        assert_eq!(stat.followers, 52_000);
    }

    #[test]
    fn test_same_influencer_two_platforms() {
        let mut agg = StatsAggregator::new();
        agg.record("Marie Lys (Bricomont)", Platform::Instagram, 145_000);
        agg.record("Marie Lys (Bricomont)", Platform::Tiktok, 80_000);

        let influencers = agg.into_influencers();
        assert_eq!(influencers.len(), 1);
        let inf = &influencers[0];
        assert_eq!(inf.name, "Marie Lys (Bricomont)");
        assert_eq!(inf.platforms.len(), 2);
        assert_eq!(inf.platforms[0].platform, Platform::Instagram);
        assert!(inf.platforms[0].is_main);
        assert_eq!(inf.platforms[1].platform, Platform::Tiktok);
        assert!(!inf.platforms[1].is_main);
    }

    #[test]
    fn test_first_reference_order() {
        let mut agg = StatsAggregator::new();
        agg.record("B", Platform::Instagram, 1);
        agg.record("A", Platform::Instagram, 2);
        agg.record("B", Platform::Youtube, 3);

        let influencers = agg.into_influencers();
        let names: Vec<&str> = influencers.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(influencers[0].platforms.len(), 2);
        assert!(!influencers[0].platforms[1].is_main);
    }

    #[test]
    fn test_empty() {
        let agg = StatsAggregator::new();
        assert!(agg.into_influencers().is_empty());
    }
}
