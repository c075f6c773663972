//! Error types for the Foodgrid plugin.
//!
//! This module defines the centralized error type [`FoodgridError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for Foodgrid plugin operations.
///
/// The listing controller itself is total over its typed inputs, so most variants
/// come from the edges: parsing keys out of plugin configuration, resolving item
/// identifiers sent by the shim, and loading themes.
///
/// # Examples
///
/// ```
/// use foodgrid::domain::{CategoryKey, FoodgridError};
///
/// let err = "noodles".parse::<CategoryKey>().unwrap_err();
/// assert!(matches!(err, FoodgridError::UnknownCategory(_)));
/// ```
#[derive(Debug, Error)]
pub enum FoodgridError {
    /// An item identifier does not exist in the catalog.
    ///
    /// Raised when an event asks to navigate to an item that was never listed.
    #[error("Unknown food item: {0}")]
    UnknownItem(String),

    /// A category key is not part of the fixed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A sort mode token is not recognised.
    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Foodgrid operations.
pub type Result<T> = std::result::Result<T, FoodgridError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, AppState, Event, SortMode};
    use crate::domain::{Catalog, CategoryKey};
    use crate::ui::Theme;
    use std::io::Write;

    fn kind(err: &FoodgridError) -> &'static str {
        match err {
            FoodgridError::UnknownItem(_) => "item",
            FoodgridError::UnknownCategory(_) => "category",
            FoodgridError::UnknownSortMode(_) => "sort",
            FoodgridError::Io(_) => "io",
            FoodgridError::Theme(_) => "theme",
        }
    }

    #[test]
    fn test_every_variant_has_a_source() {
        let mut state = AppState::new(Catalog::builtin(), Theme::default());
        let unknown_item = handle_event(&mut state, &Event::Navigate("99".to_string())).unwrap_err();
        let unknown_category = "pizza".parse::<CategoryKey>().unwrap_err();
        let unknown_sort = "cheapest".parse::<SortMode>().unwrap_err();

        let dir = tempfile::tempdir().unwrap();
        let missing = Theme::from_file(dir.path().join("missing.toml")).unwrap_err();

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "not = [valid").unwrap();
        let malformed = Theme::from_file(broken.path()).unwrap_err();

        let kinds: Vec<_> = [unknown_item, unknown_category, unknown_sort, missing, malformed]
            .iter()
            .map(kind)
            .collect();
        assert_eq!(kinds, ["item", "category", "sort", "io", "theme"]);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(FoodgridError::UnknownItem("7".to_string()).to_string(), "Unknown food item: 7");
        assert_eq!(
            FoodgridError::UnknownSortMode("cheapest".to_string()).to_string(),
            "Unknown sort mode: cheapest"
        );
    }
}
