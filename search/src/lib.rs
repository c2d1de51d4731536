//! Bechdel title resolver.
//!
//! Turns a free-form, possibly misspelled movie title into at most one record
//! of the dataset.
//!
//! # Design
//!
//! - Queries are trimmed and lowercased; blank queries never match.
//! - Direct matching classifies every title into one tier (exact, prefix,
//!   substring) and picks the most recent release from the best tier.
//! - Only when no title matches directly, the closest title by Levenshtein
//!   distance is accepted if it is within `max(3, floor(0.4 * len))` edits.
//! - Resolution is synchronous and pure; only [`MovieFinder`] awaits, for the
//!   one-time dataset load.

mod config;
mod finder;
mod query;
mod resolver;
mod results;
mod tier;

pub use config::SearchConfig;
pub use finder::MovieFinder;
pub use query::NormalizedQuery;
pub use resolver::Resolver;
pub use results::Lookup;
pub use tier::MatchTier;
