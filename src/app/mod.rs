//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain layer.
//! It owns the listing's view state, derives the visible page and decides which
//! side effects the runtime should perform.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`listing`]: Filter, sort and paginate pipeline
//! - [`modes`]: Sort mode
//! - [`state`]: Central application state container and view model computation
//! - [`view_state`]: Category, sort, page and favorite selections
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::{handle_event, AppState, Event};
//! use foodgrid::domain::{Catalog, CategoryKey};
//! use foodgrid::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! handle_event(&mut state, &Event::SetCategory(CategoryKey::Hotpot))?;
//! assert_eq!(state.visible_page().items.len(), 1);
//! # Ok::<(), foodgrid::domain::FoodgridError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod listing;
pub mod modes;
pub mod state;
pub mod view_state;

pub use actions::Action;
pub use handler::{handle_event, Event, REQUIRED_PERMISSIONS};
pub use listing::{derive_visible_items, ListingPage};
pub use modes::SortMode;
pub use state::AppState;
pub use view_state::ViewState;
