//! Memoized dataset loader.
//!
//! The dataset is fetched at most once per successful load:
//!
//! - The first `load()` starts the fetch and parse.
//! - Callers arriving while that load is in flight await the same operation
//!   and receive the same result.
//! - A successful result is cached for the lifetime of the loader.
//! - A failed result is handed to every waiter and then forgotten, so the
//!   next `load()` starts a fresh attempt.

mod source;

pub use source::{DatasetLocation, DatasetSource, FileSource};
#[cfg(feature = "http")]
pub use source::HttpSource;

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::types::DatasetConfig;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

type PendingLoad = Shared<BoxFuture<'static, Result<Dataset, LoadError>>>;

enum LoadState {
    Idle,
    Loading(PendingLoad),
    Ready(Dataset),
}

pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
    timeout: Option<Duration>,
    state: Mutex<LoadState>,
}

/// Create operations.
impl DatasetLoader {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            timeout: None,
            state: Mutex::new(LoadState::Idle),
        }
    }

    /// Builds a loader for the configured location, with its fetch timeout.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, LoadError> {
        let source = DatasetLocation::parse(&config.source).into_source()?;
        Ok(Self::new(source).with_timeout(config.timeout()))
    }

    /// Bounds each fetch attempt. Parsing is not included.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Load operations.
impl DatasetLoader {
    /// Returns the dataset, fetching it on first use.
    pub async fn load(&self) -> Result<Dataset, LoadError> {
        let pending = {
            let mut state = self.lock_state();
            match &*state {
                LoadState::Ready(dataset) => return Ok(dataset.clone()),
                LoadState::Loading(pending) => {
                    debug!("joining in-flight dataset load");
                    pending.clone()
                }
                LoadState::Idle => {
                    let pending = fetch_and_parse(self.source.clone(), self.timeout)
                        .boxed()
                        .shared();
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut state = self.lock_state();
        // Only the attempt we awaited may settle the state.
        let settles = matches!(&*state, LoadState::Loading(current) if current.ptr_eq(&pending));
        if settles {
            *state = match &result {
                Ok(dataset) => LoadState::Ready(dataset.clone()),
                Err(_) => LoadState::Idle,
            };
        }

        result
    }

    /// Returns true once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(&*self.lock_state(), LoadState::Ready(_))
    }

    fn lock_state(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn fetch_and_parse(
    source: Arc<dyn DatasetSource>,
    timeout: Option<Duration>,
) -> Result<Dataset, LoadError> {
    let location = source.describe();
    info!(source = %location, "loading dataset");

    let fetched = match timeout {
        Some(limit) => match tokio::time::timeout(limit, source.fetch()).await {
            Ok(fetched) => fetched,
            Err(_) => Err(LoadError::TimedOut {
                after_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        },
        None => source.fetch().await,
    };

    let dataset = fetched.and_then(|bytes| Dataset::from_json_slice(&bytes));
    match &dataset {
        Ok(dataset) => info!(
            source = %location,
            records = dataset.len(),
            skipped = dataset.skipped_rows(),
            "dataset loaded"
        ),
        Err(error) => warn!(source = %location, %error, "dataset load failed"),
    }

    dataset
}

#[cfg(test)]
mod tests;
