//! Title resolver: direct tiers first, edit distance as fallback.

use crate::config::SearchConfig;
use crate::query::NormalizedQuery;
use crate::results::Lookup;
use crate::tier::MatchTier;
use bechdel_core::types::MovieRecord;
use strsim::levenshtein;
use tracing::debug;

/// Resolves a free-form query to at most one movie.
///
/// Stateless apart from its configuration; every call is a single linear
/// scan of the records it is given.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: SearchConfig,
}

/// Create operations.
impl Resolver {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

/// Resolve operations.
impl Resolver {
    /// Exact, then prefix, then substring match on the lowercased title.
    ///
    /// Within the best non-empty tier the most recent release wins; among
    /// equal years the earliest record in dataset order is kept.
    pub fn resolve_exact<'a>(
        &self,
        query: &str,
        records: &'a [MovieRecord],
    ) -> Option<&'a MovieRecord> {
        let query = NormalizedQuery::new(query)?;

        let mut best: [Option<&'a MovieRecord>; MatchTier::COUNT] = [None; MatchTier::COUNT];
        for record in records {
            let title = record.title.to_lowercase();
            let Some(tier) = MatchTier::classify(&title, query.as_str()) else {
                continue;
            };
            let slot = &mut best[tier.rank()];
            if slot.is_none_or(|current| record.year > current.year) {
                *slot = Some(record);
            }
        }

        best.into_iter().flatten().next()
    }

    /// Closest title by edit distance, if within the configured threshold.
    ///
    /// Ties on distance go to the strictly more recent release; the first
    /// record seen keeps the spot against equal or older years.
    pub fn resolve_fuzzy<'a>(
        &self,
        query: &str,
        records: &'a [MovieRecord],
    ) -> Option<&'a MovieRecord> {
        let query = NormalizedQuery::new(query)?;
        let threshold = self.config.fuzzy_threshold(query.char_len());

        let mut best: Option<(&'a MovieRecord, usize)> = None;
        for record in records {
            let distance = levenshtein(query.as_str(), &record.title.to_lowercase());

            let replace = match best {
                None => true,
                Some((current, best_distance)) => {
                    distance < best_distance
                        || (distance == best_distance && record.year > current.year)
                }
            };
            if replace {
                best = Some((record, distance));
            }
        }

        let (record, distance) = best?;
        if distance > threshold {
            debug!(
                query = query.as_str(),
                distance, threshold, "closest title outside fuzzy threshold"
            );
            return None;
        }

        debug!(
            query = query.as_str(),
            title = record.title.as_str(),
            distance,
            threshold,
            "fuzzy match"
        );
        Some(record)
    }

    /// Direct match first, fuzzy fallback second.
    pub fn find_movie<'a>(&self, query: &str, records: &'a [MovieRecord]) -> Lookup<&'a MovieRecord> {
        if let Some(record) = self.resolve_exact(query, records) {
            return Lookup::Found {
                record,
                was_fuzzy: false,
            };
        }

        match self.resolve_fuzzy(query, records) {
            Some(record) => Lookup::Found {
                record,
                was_fuzzy: true,
            },
            None => Lookup::NotFound,
        }
    }
}
