//! Query normalization.

/// A user query after trimming and lowercasing.
///
/// Construction fails for blank input, so holding a `NormalizedQuery` means
/// there is something to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    char_len: usize,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }
        let char_len = text.chars().count();
        Some(Self { text, char_len })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars, the unit the fuzzy threshold is measured in.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}
