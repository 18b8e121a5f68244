//! Board types.
//!
//! A board is a named column on the wall. Boards are kept in a single ordered
//! sequence whose order is the left-to-right display order.

use serde::{Deserialize, Serialize};

use crate::id::BoardId;

/// A named column holding an ordered set of cards.
///
/// Boards are never edited after creation; they are only reordered or
/// deleted.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{Board, BoardId};
///
/// let board = Board::new(BoardId::new(1), "To Do");
/// assert_eq!(board.title, "To Do");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier for this board.
    pub id: BoardId,
    /// Title shown in the board header.
    pub title: String,
}

impl Board {
    /// Creates a board with the given identifier and title.
    #[must_use]
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_new_keeps_fields() {
        let board = Board::new(BoardId::new(4), "Done");
        assert_eq!(board.id, BoardId::new(4));
        assert_eq!(board.title, "Done");
    }

    #[test]
    fn board_json_format() {
        let board = Board::new(BoardId::new(1), "To Do");
        let json = serde_json::to_string(&board).expect("serialize");
        assert_eq!(json, r#"{"id":1,"title":"To Do"}"#);
    }
}
