#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SearchStats {
    pub prune_count: u64,
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
    pub state_scored_count: u64,
    pub depth_cutoff_count: u64,
}

impl SearchStats {
    pub fn record_prune(&mut self) {
        self.prune_count += 1;
    }

    pub fn record_cache_hit(&mut self) {
        self.cache_hit_count += 1;
    }

    pub fn record_cache_miss(&mut self) {
        self.cache_miss_count += 1;
    }

    pub fn record_state_scored(&mut self) {
        self.state_scored_count += 1;
    }

    pub fn record_depth_cutoff(&mut self) {
        self.depth_cutoff_count += 1;
    }

    /// What was recorded after `earlier` was taken.
    pub fn since(&self, earlier: &SearchStats) -> SearchStats {
        SearchStats {
            prune_count: self.prune_count - earlier.prune_count,
            cache_hit_count: self.cache_hit_count - earlier.cache_hit_count,
            cache_miss_count: self.cache_miss_count - earlier.cache_miss_count,
            state_scored_count: self.state_scored_count - earlier.state_scored_count,
            depth_cutoff_count: self.depth_cutoff_count - earlier.depth_cutoff_count,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::min_max::stats::SearchStats;

    #[test]
    fn since_keeps_only_later_records() {
        let mut stats = SearchStats::default();
        stats.record_cache_miss();
        stats.record_state_scored();
        let earlier = stats;

        stats.record_state_scored();
        stats.record_prune();
        assert_eq!(stats.since(&earlier), SearchStats { prune_count: 1, state_scored_count: 1, ..SearchStats::default() });
        assert_eq!(stats.since(&stats), SearchStats::default());
    }
}
