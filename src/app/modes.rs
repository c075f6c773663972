//! Sort mode state for the listing.
//!
//! The listing can be ordered two ways, mirroring the two radio buttons above the
//! card grid. Parsing is strict through [`FromStr`]; [`SortMode::from_key_lossy`]
//! is the lenient path that treats any unknown token as the default ordering.
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::SortMode;
//!
//! assert_eq!("popular".parse::<SortMode>().unwrap(), SortMode::Popular);
//! assert_eq!(SortMode::from_key_lossy("comprehensive"), SortMode::Recommended);
//! ```

use crate::domain::FoodgridError;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Rating, highest first. Labelled "微锦囊推荐".
    #[default]
    Recommended,

    /// Review count, highest first. Labelled "按人气".
    Popular,
}

impl SortMode {
    /// Both modes, in the order the sort bar shows them.
    pub const ALL: [Self; 2] = [Self::Recommended, Self::Popular];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Popular => "popular",
        }
    }

    /// Radio label shown in the sort bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recommended => "微锦囊推荐",
            Self::Popular => "按人气",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Recommended => Self::Popular,
            Self::Popular => Self::Recommended,
        }
    }

    /// Parses a mode token, falling back to [`SortMode::Recommended`] for anything
    /// unrecognised.
    #[must_use]
    pub fn from_key_lossy(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            tracing::debug!(token = %token, "unrecognised sort mode, ordering by rating");
            Self::Recommended
        })
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = FoodgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "recommended" => Ok(Self::Recommended),
            "popular" => Ok(Self::Popular),
            other => Err(FoodgridError::UnknownSortMode(other.to_string())),
        }
    }
}
