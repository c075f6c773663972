//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the foodgrid library and the
//! Zellij plugin system: it maps keys to library events, runs the resulting
//! actions through the Zellij API and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `RunCommandResult` and `PermissionRequestResult`
//! 3. **Update**: Translate events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! - `Tab`/`l`/`Right`: Next category
//! - `Shift+Tab`/`h`/`Left`: Previous category
//! - `j`/`Down`, `k`/`Up`: Move the card cursor
//! - `s`: Toggle sort mode
//! - `n`/`PageDown`/`]`: Next page
//! - `p`/`PageUp`/`[`: Previous page
//! - `f`/`Space`: Toggle favorite on the selected card
//! - `Enter`/`g`: Open the map lookup for the selected card
//! - `t`: Cycle section tab
//! - `q`/`Esc`: Close plugin
//!
//! The shim only exists on `wasm32`; a native build prints a notice instead.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "foodgrid {} is a Zellij plugin; build it for wasm32-wasip1 and load the .wasm from a layout.",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use foodgrid::app::REQUIRED_PERMISSIONS;
    use foodgrid::{handle_event, Action, Config, Event};

    /// Context key tagging `run_command` calls that open a map URL.
    const OPENER_CONTEXT: &str = "foodgrid_open";

    /// Plugin state wrapper.
    pub struct State {
        /// Core application state from library layer.
        app: foodgrid::AppState,

        /// Program used to open map URLs.
        open_command: String,
    }

    impl Default for State {
        fn default() -> Self {
            let config = Config::default();
            Self {
                app: foodgrid::initialize(&config),
                open_command: config.open_command,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            foodgrid::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = foodgrid::initialize(&config);
            self.open_command = config.open_command;

            request_permission(&REQUIRED_PERMISSIONS);
            subscribe(&[
                EventType::Key,
                EventType::RunCommandResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete");
        }

        /// Translates a Zellij event and returns whether the pane should re-render.
        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                    if context.get(OPENER_CONTEXT).is_none() {
                        return false;
                    }
                    Event::OpenerFinished {
                        exit_code,
                        stderr: String::from_utf8_lossy(&stderr).into_owned(),
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                    granted: match status {
                        PermissionStatus::Granted => REQUIRED_PERMISSIONS.to_vec(),
                        PermissionStatus::Denied => vec![],
                    },
                },
                _ => return false,
            };

            let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    for action in &actions {
                        self.execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            foodgrid::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to application events.
        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
                return Some(Event::PrevCategory);
            }
            if !key.has_no_modifiers() {
                return None;
            }

            Some(match key.bare_key {
                BareKey::Tab | BareKey::Right | BareKey::Char('l') => Event::NextCategory,
                BareKey::Left | BareKey::Char('h') => Event::PrevCategory,
                BareKey::Down | BareKey::Char('j') => Event::CursorNext,
                BareKey::Up | BareKey::Char('k') => Event::CursorPrev,
                BareKey::Char('s') => Event::ToggleSortMode,
                BareKey::PageDown | BareKey::Char('n' | ']') => Event::NextPage,
                BareKey::PageUp | BareKey::Char('p' | '[') => Event::PrevPage,
                BareKey::Char('f' | ' ') => Event::ToggleFavoriteSelected,
                BareKey::Enter | BareKey::Char('g') => Event::NavigateSelected,
                BareKey::Char('t') => Event::NextSection,
                BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        /// Executes an action returned from event handling.
        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&self, action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::ScrollToTop => scroll_to_top(),
                Action::OpenUrl { url } => {
                    let mut context = BTreeMap::new();
                    context.insert(OPENER_CONTEXT.to_string(), url.clone());
                    run_command(&[self.open_command.as_str(), url.as_str()], context);
                }
            }
        }
    }
}
