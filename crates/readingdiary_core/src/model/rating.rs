//! Book rating states.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Integer code for `Rating::Excellent`.
pub const RATING_CODE_EXCELLENT: i32 = 3;
/// Integer code for `Rating::Good`.
pub const RATING_CODE_GOOD: i32 = 2;
/// Integer code for `Rating::Bad`.
pub const RATING_CODE_BAD: i32 = 1;
/// Integer code for `Rating::Unrated`.
pub const RATING_CODE_UNRATED: i32 = -1;

/// Rating attached to a book.
///
/// Every book starts as `Unrated`; only the three rated states can be
/// assigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Bad,
    #[default]
    Unrated,
}

impl Rating {
    /// Stable integer code.
    pub fn code(self) -> i32 {
        match self {
            Self::Excellent => RATING_CODE_EXCELLENT,
            Self::Good => RATING_CODE_GOOD,
            Self::Bad => RATING_CODE_BAD,
            Self::Unrated => RATING_CODE_UNRATED,
        }
    }

    /// Maps an integer code back to a rating. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            RATING_CODE_EXCELLENT => Some(Self::Excellent),
            RATING_CODE_GOOD => Some(Self::Good),
            RATING_CODE_BAD => Some(Self::Bad),
            RATING_CODE_UNRATED => Some(Self::Unrated),
            _ => None,
        }
    }

    /// Human-readable lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Unrated => "unrated",
        }
    }

    /// Whether this value may be assigned through `Book::set_rating`.
    pub fn is_rated(self) -> bool {
        !matches!(self, Self::Unrated)
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
