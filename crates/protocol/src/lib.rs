//! Shared protocol types for the cardwall application.
//!
//! This crate holds the domain model of a wall of boards and cards, and the
//! rules for moving them around with drag gestures.
//!
//! # Overview
//!
//! - [`id`]: typed identifiers and the shared identifier generator
//! - [`board`] and [`card`]: the two entities
//! - [`drag`]: what is being dragged, and what it is dragged over
//! - [`ordering`]: the reorder and reparent rules
//! - [`store`]: the wall itself, with creation, deletion and drag handlers
//! - [`message`]: TUI event messages
//! - [`error`]: error types for store operations
//!
//! # Examples
//!
//! Moving a card to another board by dragging it over a card there:
//!
//! ```
//! use cardwall_protocol::{DragItem, Store};
//!
//! let mut store = Store::new();
//! let todo = store.add_board("To Do")?;
//! let done = store.add_board("Done")?;
//! let draft = store.create_card(todo, "Draft", "First pass")?;
//! let ship = store.create_card(done, "Ship", "Tag the release")?;
//!
//! let active = DragItem::Card(draft);
//! store.on_drag_start(active);
//! store.on_drag_over(active, Some(DragItem::Card(ship)));
//! store.on_drag_end(active, Some(DragItem::Card(ship)));
//!
//! let on_done: Vec<_> = store.cards_on(done).map(|c| c.id).collect();
//! assert_eq!(on_done, [draft, ship]);
//! # Ok::<(), cardwall_protocol::ProtocolError>(())
//! ```

pub mod board;
pub mod card;
pub mod drag;
pub mod dummy;
pub mod error;
pub mod id;
pub mod message;
pub mod ordering;
pub mod store;

pub use board::Board;
pub use card::Card;
pub use drag::{DragItem, DragKind, DragOutcome};
pub use error::{ProtocolError, Result};
pub use id::{BoardId, CardId, IdGenerator};
pub use message::Message;
pub use store::Store;
