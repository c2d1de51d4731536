use bechdel_core::types::SearchSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Smallest edit distance the fuzzy fallback ever accepts.
    pub fuzzy_min_threshold: usize,
    /// Share of the query length (in chars) accepted as edits.
    pub fuzzy_ratio: f64,
}

impl SearchConfig {
    /// Largest distance accepted for a normalized query of `query_len` chars:
    /// `max(fuzzy_min_threshold, floor(fuzzy_ratio * query_len))`.
    pub fn fuzzy_threshold(&self, query_len: usize) -> usize {
        let scaled = (self.fuzzy_ratio * query_len as f64).floor() as usize;
        self.fuzzy_min_threshold.max(scaled)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_min_threshold: 3,
            fuzzy_ratio: 0.4,
        }
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            fuzzy_min_threshold: settings.fuzzy_min_threshold,
            fuzzy_ratio: settings.fuzzy_ratio,
        }
    }
}
