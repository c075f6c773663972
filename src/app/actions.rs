//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches Zellij directly. It mutates [`AppState`] and
//! returns a `Vec<Action>`; the plugin shim then performs each action in order.
//! This keeps the listing logic testable without a running Zellij session.
//!
//! [`AppState`]: crate::app::AppState
//!
//! # Example
//!
//! ```rust
//! use foodgrid::app::Action;
//!
//! let actions = vec![
//!     Action::ScrollToTop,
//!     Action::OpenUrl { url: "https://maps.google.com/maps?q=%E7%81%AB%E9%94%85".to_string() },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Scrolls the plugin pane back to its first line.
    ///
    /// Emitted on every page change so a new page is read from the top.
    ScrollToTop,

    /// Opens a URL with the configured opener command.
    ///
    /// Fire-and-forget: the result is only logged.
    OpenUrl {
        /// Fully encoded URL.
        url: String,
    },
}
