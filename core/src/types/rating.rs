use nutype::nutype;
use std::fmt;

/// Score that means all three criteria were met.
pub const PASSING_RATING: u8 = 3;

/// Bechdel score: how many of the three criteria a movie meets (0..=3).
#[nutype(
    validate(less_or_equal = PASSING_RATING),
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
pub struct Rating(u8);

impl Rating {
    pub fn verdict(self) -> Verdict {
        if self.into_inner() == PASSING_RATING {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn passes(self) -> bool {
        self.verdict() == Verdict::Pass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}
