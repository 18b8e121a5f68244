//! Terminal UI for the cardwall application.
//!
//! This crate provides a Ratatui-based terminal interface for arranging
//! boards and cards on a Kanban wall, by keyboard or by mouse drag.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state: selection, forms, keyboard carry
//! - [`layout`]: Wall geometry shared by rendering and hit-testing
//! - [`drag`]: Mouse drag gesture tracking
//! - [`form`]: New board / new card form state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use cardwall_protocol::dummy::dummy_store;
//! use cardwall_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(dummy_store());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod drag;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus};
