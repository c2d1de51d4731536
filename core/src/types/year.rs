use nutype::nutype;

/// Earliest release year present in the bechdeltest.com archive.
pub const MIN_YEAR: i32 = 1874;
pub const MAX_YEAR: i32 = 2100;

#[nutype(
    validate(greater_or_equal = MIN_YEAR, less_or_equal = MAX_YEAR),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Year(i32);
