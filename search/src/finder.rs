//! Async entry point combining the dataset loader and the resolver.

use crate::config::SearchConfig;
use crate::query::NormalizedQuery;
use crate::resolver::Resolver;
use crate::results::Lookup;
use bechdel_core::types::{AppConfig, MovieRecord};
use bechdel_core::{DatasetLoader, LoadError};
use tracing::debug;

/// Owns the process-wide dataset loader and answers one query per call.
///
/// Construct once and share by reference; the dataset is fetched on the
/// first non-blank query and reused afterwards.
pub struct MovieFinder {
    loader: DatasetLoader,
    resolver: Resolver,
}

impl MovieFinder {
    pub fn new(loader: DatasetLoader, config: SearchConfig) -> Self {
        Self {
            loader,
            resolver: Resolver::new(config),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, LoadError> {
        let loader = DatasetLoader::from_config(&config.dataset)?;
        Ok(Self::new(loader, SearchConfig::from(&config.search)))
    }

    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    /// Resolves `query` against the dataset, loading it if needed.
    ///
    /// A blank query is `NotFound` straight away: nothing is loaded or
    /// scanned.
    pub async fn find_movie(&self, query: &str) -> Result<Lookup<MovieRecord>, LoadError> {
        if NormalizedQuery::new(query).is_none() {
            debug!("blank query");
            return Ok(Lookup::NotFound);
        }

        let dataset = self.loader.load().await?;
        let lookup = self.resolver.find_movie(query, &dataset).cloned();
        debug!(
            query,
            found = lookup.is_found(),
            fuzzy = lookup.was_fuzzy(),
            "query resolved"
        );
        Ok(lookup)
    }
}
