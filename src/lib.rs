//! Foodgrid: a restaurant discovery listing as a Zellij plugin.
//!
//! Foodgrid shows a fixed catalog of Chengdu eateries as a grid of cards:
//! - Category filter chips (`全部`, `火锅`, `咖啡馆`, ...)
//! - Two orderings: by rating (`微锦囊推荐`) or by review count (`按人气`)
//! - Pagination with a page size of 8 by default
//! - Session-local favorites
//! - Map lookup for a card, opened with the host's URL opener
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - View state and listing derivation                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain (domain/)        │
//! │ - Components, theming │   │ - Catalog, food types   │
//! │ - Width-aware layout  │   │ - Error type            │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/), paths (infrastructure/)
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/foodgrid.wasm" {
//!         theme "catppuccin-latte"
//!         page_size "4"
//!         default_category "hotpot"
//!         default_sort "popular"
//!         open_command "open"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use foodgrid::{handle_event, initialize, Config, Event};
//! use foodgrid::domain::CategoryKey;
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SetCategory(CategoryKey::Snack))?;
//!
//! let ids: Vec<&str> = state.visible_page().items.iter().map(|i| i.id.as_str()).collect();
//! assert_eq!(ids, ["2", "4"]);
//! # Ok::<(), foodgrid::FoodgridError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, SortMode, ViewState};
pub use domain::{Catalog, CategoryKey, FoodItem, FoodgridError, Result};
pub use ui::Theme;

use app::listing::DEFAULT_PAGE_SIZE;
use app::state::DEFAULT_MAPS_URL;
use std::collections::BTreeMap;

/// Opener used for map links unless configured otherwise.
pub const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `info`
    pub trace_level: String,

    /// Cards per page, at least 1. Default: 8
    pub page_size: usize,

    /// Category selected on load. Default: `all`
    pub default_category: CategoryKey,

    /// Ordering on load. Default: `recommended`
    pub default_sort: SortMode,

    /// Program run with the map URL as its only argument. Default: `xdg-open`
    pub open_command: String,

    /// Map lookup prefix; the percent-encoded name is appended.
    pub maps_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_category: CategoryKey::All,
            default_sort: SortMode::Recommended,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            maps_url: DEFAULT_MAPS_URL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Never fails: a missing key keeps its default, and a value that does not
    /// parse is logged at debug level and replaced by the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use foodgrid::{CategoryKey, Config};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "4".to_string());
    /// map.insert("default_category".to_string(), "hotpot".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 4);
    /// assert_eq!(config.default_category, CategoryKey::Hotpot);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let page_size = non_empty("page_size").map_or(defaults.page_size, |raw| {
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    tracing::debug!(page_size = %raw, "invalid page_size, using default");
                    defaults.page_size
                }
            }
        });

        let default_category = non_empty("default_category").map_or(defaults.default_category, |raw| {
            raw.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid default_category, using default");
                defaults.default_category
            })
        });

        let default_sort = non_empty("default_sort")
            .map_or(defaults.default_sort, |raw| SortMode::from_key_lossy(&raw));

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level").unwrap_or(defaults.trace_level),
            page_size,
            default_category,
            default_sort,
            open_command: non_empty("open_command").unwrap_or(defaults.open_command),
            maps_url: non_empty("maps_url").unwrap_or(defaults.maps_url),
        }
    }
}

/// Resolves the theme: `theme_file` first, then `theme_name`, then the default.
///
/// Failures are logged and fall through to the default theme.
fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds the initial application state over the built-in catalog.
///
/// # Example
///
/// ```rust
/// use foodgrid::{initialize, Config, SortMode};
///
/// let config = Config { default_sort: SortMode::Popular, page_size: 2, ..Config::default() };
/// let state = initialize(&config);
///
/// let page = state.visible_page();
/// assert_eq!(page.items.len(), 2);
/// assert_eq!(page.total_pages(), 3);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        page_size = config.page_size,
        category = %config.default_category,
        sort = %config.default_sort,
        "initializing foodgrid"
    );

    let mut state = AppState::new(Catalog::builtin(), load_theme(config));
    state.view = ViewState::new(config.default_category, config.default_sort);
    state.page_size = config.page_size.max(1);
    state.maps_url.clone_from(&config.maps_url);
    state
}
