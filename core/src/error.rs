use crate::types::{MovieIdError, RatingError, TitleError, YearError};
use thiserror::Error;

/// Failure to produce a dataset.
///
/// Clonable so that every caller awaiting the same in-flight load can receive
/// the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("could not read dataset at {path}: {message}")]
    Io { path: String, message: String },

    #[error("dataset request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("dataset request failed: {message}")]
    Request { message: String },

    #[error("dataset fetch timed out after {after_ms}ms")]
    TimedOut { after_ms: u64 },

    #[error("malformed dataset: {message}")]
    Malformed { message: String },

    #[error("unsupported dataset location: {0}")]
    UnsupportedLocation(String),
}

/// Reason a single dataset row was rejected.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("unexpected row shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("invalid title: {0}")]
    Title(#[from] TitleError),

    #[error("invalid year: {0}")]
    Year(#[from] YearError),

    #[error("invalid rating: {0}")]
    Rating(#[from] RatingError),

    #[error("invalid id: {0}")]
    Id(#[from] MovieIdError),
}
