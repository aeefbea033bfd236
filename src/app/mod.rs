//! The application controller.
//!
//! `App` owns the three utilities' shared state: the document, the i18n
//! dictionary and active language, the gallery state machine, and the live
//! feedback bubbles. The submodules split its behavior by concern, one
//! `impl App` block per file.

/// Copy-to-clipboard dispatch and quitting.
mod actions;
/// Construction and startup language application.
mod init;
/// Keyboard input routing.
mod keyboard;
/// Language switching and persistence.
mod language;
/// Mouse input routing, including terminal double-click detection.
mod mouse;
/// Gallery overlay open/close glue.
mod overlays;
/// The `App` struct itself.
mod state;
/// Timed effects: bubbles, deferred widget init, clipboard completions.
mod tick;

pub use state::App;
