//! Drag descriptors.
//!
//! A drag gesture is described by the item being dragged (the *active* item)
//! and the item currently under the pointer (the *over* item), each tagged
//! with its kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{BoardId, CardId};

/// The kind of entity taking part in a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    /// A board column.
    Board,
    /// A card.
    Card,
}

impl DragKind {
    /// Lower-case name, as used in status messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity taking part in a drag, identified by kind and id.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{BoardId, CardId, DragItem, DragKind};
///
/// let item = DragItem::Card(CardId::new(10));
/// assert_eq!(item.kind(), DragKind::Card);
/// assert_eq!(item.kind().to_string(), "card");
/// assert_eq!(item.raw_id(), 10);
/// assert_ne!(item, DragItem::Board(BoardId::new(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DragItem {
    /// A board, by id.
    Board(BoardId),
    /// A card, by id.
    Card(CardId),
}

impl DragItem {
    /// Returns the kind of this item.
    #[must_use]
    pub const fn kind(self) -> DragKind {
        match self {
            Self::Board(_) => DragKind::Board,
            Self::Card(_) => DragKind::Card,
        }
    }

    /// Returns the raw integer id of this item.
    #[must_use]
    pub const fn raw_id(self) -> u64 {
        match self {
            Self::Board(id) => id.get(),
            Self::Card(id) => id.get(),
        }
    }
}

impl From<BoardId> for DragItem {
    fn from(id: BoardId) -> Self {
        Self::Board(id)
    }
}

impl From<CardId> for DragItem {
    fn from(id: CardId) -> Self {
        Self::Card(id)
    }
}

/// The effect a drag event had on the board and card sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Neither sequence changed.
    Unchanged,
    /// A card moved within the global card sequence and/or changed board.
    CardMoved {
        /// The card that moved.
        card: CardId,
        /// Index in the global card sequence before the move.
        from_index: usize,
        /// Index in the global card sequence after the move.
        to_index: usize,
        /// The board the card belongs to after the move.
        board: BoardId,
        /// Whether the card changed board.
        reparented: bool,
    },
    /// A board moved within the board sequence.
    BoardMoved {
        /// The board that moved.
        board: BoardId,
        /// Index in the board sequence before the move.
        from_index: usize,
        /// Index in the board sequence after the move.
        to_index: usize,
    },
}

impl DragOutcome {
    /// Returns `true` if either sequence changed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_of_different_kinds_never_compare_equal() {
        assert_ne!(
            DragItem::Board(BoardId::new(1)),
            DragItem::Card(CardId::new(1))
        );
    }

    #[test]
    fn kind_and_raw_id_follow_the_variant() {
        let board = DragItem::from(BoardId::new(4));
        let card = DragItem::from(CardId::new(9));

        assert_eq!((board.kind(), board.raw_id()), (DragKind::Board, 4));
        assert_eq!((card.kind(), card.raw_id()), (DragKind::Card, 9));
        assert_eq!(format!("{} {}", board.kind(), card.kind()), "board card");
    }

    #[test]
    fn item_json_format() {
        let json = serde_json::to_string(&DragItem::Card(CardId::new(5))).expect("serialize");
        assert_eq!(json, r#"{"type":"card","id":5}"#);
    }

    #[test]
    fn outcome_change_detection() {
        assert!(!DragOutcome::Unchanged.is_changed());
        assert!(
            DragOutcome::BoardMoved {
                board: BoardId::new(1),
                from_index: 0,
                to_index: 1,
            }
            .is_changed()
        );
    }
}
