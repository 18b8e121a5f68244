//! Widget components for the cardwall TUI.
//!
//! Each widget is a pure function that renders state into a [`Buffer`],
//! which keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`wall`]: every visible column side by side
//! - [`column`]: one board with its cards, plus the "add board" column
//! - [`card`]: a card tile
//! - [`modal`]: the new board / new card form and the delete confirmation
//! - [`overlay`]: the dragged item floating under the pointer
//! - [`status_bar`]: status message and keybinding hints
//! - [`help`]: the keybinding overlay
//!
//! # Example
//!
//! ```
//! use cardwall_protocol::dummy::dummy_store;
//! use cardwall_tui::AppState;
//! use cardwall_tui::layout::WallLayout;
//! use cardwall_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let state = AppState::new(dummy_store());
//! let area = Rect::new(0, 0, 100, 24);
//! let layout = WallLayout::new(area, state.store.boards().len(), 0);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_wall(&state, &layout, None, &mut buf);
//! ```
//!
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod card;
pub mod column;
pub mod help;
pub mod modal;
pub mod overlay;
pub mod status_bar;
pub mod wall;

pub use card::{CardLook, render_card};
pub use column::{ColumnView, render_add_board_column, render_column};
pub use help::render_help_overlay;
pub use modal::{render_confirm_modal, render_form_modal};
pub use overlay::render_drag_overlay;
pub use status_bar::render_status_bar;
pub use wall::render_wall;
