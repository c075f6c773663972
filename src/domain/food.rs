//! Food listing domain types.
//!
//! A [`FoodItem`] is one restaurant card in the listing, tagged with exactly one
//! [`CategoryKey`]. Category keys form a closed set fixed at compile time; the
//! `All` key is a sentinel that disables filtering and is never used as an item tag.

use super::error::FoodgridError;
use std::fmt;
use std::str::FromStr;

/// Short token identifying a cuisine or venue classification.
///
/// Variants are declared in display order, which is the order the category
/// filter presents them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryKey {
    /// Sentinel meaning "no filtering".
    #[default]
    All,
    Other,
    Chinese,
    FastFood,
    Hotpot,
    Cafe,
    Bbq,
    Snack,
    Fresh,
    Dessert,
    Seafood,
    Japanese,
    Bar,
}

impl CategoryKey {
    /// Every key, in display order.
    pub const ALL: [Self; 13] = [
        Self::All,
        Self::Other,
        Self::Chinese,
        Self::FastFood,
        Self::Hotpot,
        Self::Cafe,
        Self::Bbq,
        Self::Snack,
        Self::Fresh,
        Self::Dessert,
        Self::Seafood,
        Self::Japanese,
        Self::Bar,
    ];

    /// Returns the wire token for this key (e.g. `"hotpot"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Other => "other",
            Self::Chinese => "chinese",
            Self::FastFood => "fastfood",
            Self::Hotpot => "hotpot",
            Self::Cafe => "cafe",
            Self::Bbq => "bbq",
            Self::Snack => "snack",
            Self::Fresh => "fresh",
            Self::Dessert => "dessert",
            Self::Seafood => "seafood",
            Self::Japanese => "japanese",
            Self::Bar => "bar",
        }
    }

    /// Whether an item tagged with `tag` passes a filter set to `self`.
    #[must_use]
    pub fn admits(self, tag: Self) -> bool {
        self == Self::All || self == tag
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = FoodgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .ok_or_else(|| FoodgridError::UnknownCategory(token.to_string()))
    }
}

/// A category key paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryKey,
    pub label: String,
}

impl Category {
    pub fn new(key: CategoryKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

/// A display-only tab in the page header (景点, 美食, ...).
///
/// Tabs never influence the listing; only the highlighted tab changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTab {
    pub key: String,
    pub label: String,
}

impl SectionTab {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One restaurant record in the catalog.
///
/// Records are immutable once the catalog is built. `default_favorite` is the
/// record's shipped favorite flag; live favorite status is tracked by the view
/// state instead.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name, also used as the map lookup query.
    pub name: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    pub description: String,
    /// Image URL. Never fetched; only carried to the view.
    pub image_url: String,
    pub category: CategoryKey,
    /// Average spend per person, in yuan.
    pub price: u32,
    pub default_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_token() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_category_parse_trims_and_rejects_unknown() {
        assert_eq!(" hotpot ".parse::<CategoryKey>().unwrap(), CategoryKey::Hotpot);
        assert!(matches!(
            "Hotpot".parse::<CategoryKey>(),
            Err(FoodgridError::UnknownCategory(token)) if token == "Hotpot"
        ));
    }

    #[test]
    fn test_all_admits_every_tag() {
        assert!(CategoryKey::All.admits(CategoryKey::Bar));
        assert!(CategoryKey::Cafe.admits(CategoryKey::Cafe));
        assert!(!CategoryKey::Cafe.admits(CategoryKey::Snack));
    }
}
