//! Data model and dataset loading for the Bechdel title resolver.
//!
//! - [`types`]: validated movie records and user configuration.
//! - [`dataset`]: the immutable, shared movie list parsed from `movies.json`.
//! - [`loader`]: fetches the dataset once per process and shares the result.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod types;

pub use dataset::Dataset;
pub use error::{LoadError, RecordError};
pub use loader::{DatasetLoader, DatasetLocation, DatasetSource, FileSource};
