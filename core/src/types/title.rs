use nutype::nutype;

/// Display title of a movie, exactly as it appears in the dataset.
///
/// Matching is case-insensitive and goes through [`Title::to_lowercase`];
/// the stored value keeps its original casing for display.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Title(String);

impl Title {
    /// Lowercased form used for comparisons against a normalized query.
    pub fn to_lowercase(&self) -> String {
        self.as_str().to_lowercase()
    }
}
