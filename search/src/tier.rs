//! Direct-match tiers.

/// How a title matched a query without edits, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

impl MatchTier {
    pub(crate) const COUNT: usize = 3;

    /// Classifies a lowercased title against a normalized query.
    ///
    /// Each title lands in at most one tier: the first rule it satisfies.
    pub fn classify(title: &str, query: &str) -> Option<Self> {
        if title == query {
            Some(Self::Exact)
        } else if title.starts_with(query) {
            Some(Self::Prefix)
        } else if title.contains(query) {
            Some(Self::Substring)
        } else {
            None
        }
    }

    pub(crate) fn rank(self) -> usize {
        match self {
            Self::Exact => 0,
            Self::Prefix => 1,
            Self::Substring => 2,
        }
    }
}
