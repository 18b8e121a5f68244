//! Card types.
//!
//! Cards live in one global ordered sequence shared by every board. The
//! cards of a single board, in display order, are the subsequence of that
//! global sequence whose `board_id` matches the board.

use serde::{Deserialize, Serialize};

use crate::id::{BoardId, CardId};

/// A unit of work belonging to exactly one board.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{BoardId, Card, CardId};
///
/// let card = Card::new(CardId::new(10), BoardId::new(1), "Fix login", "Session cookie expires early");
/// assert_eq!(card.board_id, BoardId::new(1));
/// assert!(card.belongs_to(BoardId::new(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Short summary shown on the card.
    pub title: String,
    /// Longer description shown below the title.
    pub description: String,
    /// The board this card currently belongs to.
    #[serde(rename = "boardId")]
    pub board_id: BoardId,
}

impl Card {
    /// Creates a card on the given board.
    #[must_use]
    pub fn new(
        id: CardId,
        board_id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            board_id,
        }
    }

    /// Returns `true` if this card sits on the given board.
    #[must_use]
    pub fn belongs_to(&self, board_id: BoardId) -> bool {
        self.board_id == board_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_new_keeps_fields() {
        let card = Card::new(CardId::new(3), BoardId::new(1), "Title", "Description");
        assert_eq!(card.id, CardId::new(3));
        assert_eq!(card.title, "Title");
        assert_eq!(card.description, "Description");
        assert!(card.belongs_to(BoardId::new(1)));
        assert!(!card.belongs_to(BoardId::new(2)));
    }

    #[test]
    fn card_json_uses_board_id_key() {
        let card = Card::new(CardId::new(10), BoardId::new(2), "T", "D");
        let json = serde_json::to_string(&card).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":10,"title":"T","description":"D","boardId":2}"#
        );
    }
}
