//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the page components
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::AppState;
//! use foodgrid::domain::Catalog;
//! use foodgrid::ui::{render, Theme};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default());
//! render(&state, 40, 120); // Render to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen; the
/// host redraws the pane on every render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    tracing::trace!(
        cards = viewmodel.grid.cards.len(),
        page = viewmodel.pagination.current,
        empty = viewmodel.empty_state.is_some(),
        "render"
    );

    components::render_page(&viewmodel, &state.theme, rows, cols);
}
