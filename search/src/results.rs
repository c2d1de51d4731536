//! Resolution outcome.

use bechdel_core::types::MovieRecord;

/// Result of resolving a query to a single movie.
///
/// `NotFound` is an ordinary outcome, not an error: callers render a
/// not-found message for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found {
        record: T,
        /// True when the record came from the edit-distance fallback and
        /// should be presented as a suggestion.
        was_fuzzy: bool,
    },
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn was_fuzzy(&self) -> bool {
        matches!(self, Self::Found { was_fuzzy: true, .. })
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::NotFound => None,
        }
    }

    pub fn into_record(self) -> Option<T> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::NotFound => None,
        }
    }
}

impl Lookup<&MovieRecord> {
    /// Detaches the outcome from the dataset it borrows.
    pub fn cloned(self) -> Lookup<MovieRecord> {
        match self {
            Self::Found { record, was_fuzzy } => Lookup::Found {
                record: record.clone(),
                was_fuzzy,
            },
            Self::NotFound => Lookup::NotFound,
        }
    }
}
