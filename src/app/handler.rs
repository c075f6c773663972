//! Event handling and state transition logic.
//!
//! This module implements the handler that turns user input and host
//! notifications into view-state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `ViewState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Filter & sort**: `SetCategory`, `NextCategory`, `PrevCategory`, `SetSortMode`, `ToggleSortMode`
//! - **Paging**: `SetPage`, `NextPage`, `PrevPage`
//! - **Cards**: `CursorNext`, `CursorPrev`, `ToggleFavorite`, `ToggleFavoriteSelected`,
//!   `Navigate`, `NavigateSelected`
//! - **Chrome**: `NextSection`, `CloseFocus`
//! - **System**: `PermissionsResult`, `OpenerFinished`
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::{handle_event, Action, AppState, Event};
//! use foodgrid::domain::Catalog;
//! use foodgrid::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SetPage(1))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScrollToTop]);
//! # Ok::<(), foodgrid::domain::FoodgridError>(())
//! ```

use super::modes::SortMode;
use crate::app::{Action, AppState};
use crate::domain::{CategoryKey, FoodgridError, FoodItem, Result};
use zellij_tile::prelude::PermissionType;

/// Permissions the plugin requests on load.
///
/// `ChangeApplicationState` covers hiding the pane and scrolling; `RunCommands`
/// covers launching the map opener.
pub const REQUIRED_PERMISSIONS: [PermissionType; 2] =
    [PermissionType::ChangeApplicationState, PermissionType::RunCommands];

/// Events triggered by user input or host notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Filters the listing by a category and returns to page 1.
    SetCategory(CategoryKey),
    /// Selects the category after the current one (wraps).
    NextCategory,
    /// Selects the category before the current one (wraps).
    PrevCategory,

    /// Changes the ordering; the page is kept.
    SetSortMode(SortMode),
    /// Switches between the two orderings.
    ToggleSortMode,

    /// Jumps to a page. No upper bound is enforced.
    SetPage(usize),
    /// Advances one page, unless already on the last one.
    NextPage,
    /// Goes back one page, never below 1 and never past the last page.
    PrevPage,

    /// Moves the card cursor forward (wraps to the first card).
    CursorNext,
    /// Moves the card cursor back (wraps to the last card).
    CursorPrev,

    /// Flips an identifier in or out of the favorites.
    ToggleFavorite(String),
    /// Flips the card under the cursor.
    ToggleFavoriteSelected,

    /// Opens the map lookup for an item by identifier.
    Navigate(String),
    /// Opens the map lookup for the card under the cursor.
    NavigateSelected,

    /// Highlights the next section tab. Display only.
    NextSection,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Reports granted Zellij permissions after permission request.
    PermissionsResult {
        /// Permissions granted by the user.
        granted: Vec<PermissionType>,
    },

    /// Reports the exit of the URL opener command.
    OpenerFinished {
        /// Exit status, `None` when the process was killed.
        exit_code: Option<i32>,
        /// Captured standard error, lossily decoded.
        stderr: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the pane must re-render, and the actions to run in order.
///
/// # Errors
///
/// Returns [`FoodgridError::UnknownItem`] when `Navigate` names an identifier
/// that is not in the catalog. State is left untouched in that case.
///
/// # Tracing
///
/// Each call runs inside a debug-level span carrying the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetCategory(key) => {
            select_category(state, *key);
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            select_category(state, state.adjacent_category(1));
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            select_category(state, state.adjacent_category(-1));
            Ok((true, vec![]))
        }
        Event::SetSortMode(mode) => {
            if *mode == state.view.sort_mode() {
                return Ok((false, vec![]));
            }
            state.view.set_sort_mode(*mode);
            state.clamp_cursor();
            Ok((true, vec![]))
        }
        Event::ToggleSortMode => {
            let mode = state.view.sort_mode().toggled();
            state.view.set_sort_mode(mode);
            state.clamp_cursor();
            Ok((true, vec![]))
        }
        Event::SetPage(n) => Ok(change_page(state, *n)),
        Event::NextPage => {
            let current = state.view.current_page();
            let total = state.visible_page().total_pages();
            if current >= total {
                tracing::debug!(current, total, "already on the last page");
                return Ok((false, vec![]));
            }
            Ok(change_page(state, current + 1))
        }
        Event::PrevPage => {
            let current = state.view.current_page();
            if current <= 1 {
                tracing::debug!("already on the first page");
                return Ok((false, vec![]));
            }
            let total = state.visible_page().total_pages();
            Ok(change_page(state, (current - 1).min(total)))
        }
        Event::CursorNext => {
            state.move_cursor_next();
            Ok((true, vec![]))
        }
        Event::CursorPrev => {
            state.move_cursor_prev();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite(id) => {
            state.view.toggle_favorite(id);
            Ok((true, vec![]))
        }
        Event::ToggleFavoriteSelected => {
            let Some(item) = state.selected_item() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            state.view.toggle_favorite(&item.id);
            Ok((true, vec![]))
        }
        Event::Navigate(id) => {
            let item = state
                .catalog
                .find(id)
                .ok_or_else(|| FoodgridError::UnknownItem(id.clone()))?;
            Ok((false, vec![navigate(state, item)]))
        }
        Event::NavigateSelected => {
            let Some(item) = state.selected_item() else {
                tracing::debug!("no card selected to navigate to");
                return Ok((false, vec![]));
            };
            Ok((false, vec![navigate(state, item)]))
        }
        Event::NextSection => {
            state.cycle_section();
            tracing::debug!(section = state.active_section, "section tab changed");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            let missing: Vec<_> = REQUIRED_PERMISSIONS.iter().filter(|p| !granted.contains(*p)).collect();
            if missing.is_empty() {
                tracing::debug!(granted = ?granted, "permissions granted");
            } else {
                tracing::warn!(missing = ?missing, "permissions not granted, closing and map links will not work");
            }
            Ok((false, vec![]))
        }
        Event::OpenerFinished { exit_code, stderr } => {
            if *exit_code == Some(0) {
                tracing::debug!("opener finished");
            } else {
                tracing::warn!(exit_code = ?exit_code, stderr = %stderr.trim(), "opener failed");
            }
            Ok((false, vec![]))
        }
    }
}

fn select_category(state: &mut AppState, key: CategoryKey) {
    state.view.set_category(key);
    state.cursor = 0;
}

fn change_page(state: &mut AppState, page: usize) -> (bool, Vec<Action>) {
    state.view.set_page(page);
    state.cursor = 0;
    (true, vec![Action::ScrollToTop])
}

fn navigate(state: &AppState, item: &FoodItem) -> Action {
    let url = state.map_url(item);
    tracing::debug!(item_id = %item.id, url = %url, "navigate");
    Action::OpenUrl { url }
}
