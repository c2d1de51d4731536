//! In-memory movie dataset.

use crate::error::{LoadError, RecordError};
use crate::types::{MovieRecord, RawMovieRow};
use std::ops::Deref;
use std::sync::Arc;
use tracing::warn;

/// Immutable, ordered list of movie records.
///
/// Cloning is cheap: all clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[MovieRecord]>,
    skipped_rows: usize,
}

impl Dataset {
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self {
            records: records.into(),
            skipped_rows: 0,
        }
    }

    /// Parses the `movies.json` payload.
    ///
    /// The payload must be a JSON array. Rows that fail to decode or validate
    /// are skipped and counted in [`Dataset::skipped_rows`]; a handful of bad
    /// rows never fails the whole load.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let rows: Vec<serde_json::Value> =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed {
                message: e.to_string(),
            })?;

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped_rows = 0;

        for (index, row) in rows.into_iter().enumerate() {
            match parse_row(row) {
                Ok(record) => records.push(record),
                Err(error) => {
                    skipped_rows += 1;
                    warn!(row = index, %error, "skipping malformed dataset row");
                }
            }
        }

        Ok(Self {
            records: records.into(),
            skipped_rows,
        })
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Number of source rows dropped while parsing.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl Deref for Dataset {
    type Target = [MovieRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_row(row: serde_json::Value) -> Result<MovieRecord, RecordError> {
    let raw: RawMovieRow = serde_json::from_value(row)?;
    MovieRecord::try_from(raw)
}
