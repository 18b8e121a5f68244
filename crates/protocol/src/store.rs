//! The board and card store.
//!
//! [`Store`] owns the ordered board sequence, the global card sequence, the
//! identifier generator, and the state of the drag gesture in progress. All
//! positional changes go through the functions in [`crate::ordering`].

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::card::Card;
use crate::drag::{DragItem, DragOutcome};
use crate::error::{ProtocolError, Result};
use crate::id::{BoardId, CardId, IdGenerator};
use crate::ordering::{board_index, card_index, drag_end, drag_over};

/// State of the drag gesture in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DragSession {
    /// The entity being dragged, if it was found when the drag started.
    active: Option<DragItem>,
    /// The last `(active, over)` pair applied as a live preview.
    last_over: Option<(DragItem, DragItem)>,
}

/// Holds the boards and cards of a wall.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{DragItem, Store};
///
/// let mut store = Store::new();
/// let todo = store.add_board("To Do")?;
/// let done = store.add_board("Done")?;
/// let card = store.create_card(todo, "Write docs", "Document the public API")?;
///
/// // Drag the card onto the empty "Done" board.
/// store.on_drag_start(DragItem::Card(card));
/// store.on_drag_over(DragItem::Card(card), Some(DragItem::Board(done)));
/// store.on_drag_end(DragItem::Card(card), Some(DragItem::Board(done)));
///
/// assert_eq!(store.card(card).map(|c| c.board_id), Some(done));
/// # Ok::<(), cardwall_protocol::ProtocolError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    boards: Vec<Board>,
    cards: Vec<Card>,
    ids: IdGenerator,
    drag: DragSession,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the boards in display order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the global card sequence.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the board with the given id.
    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    /// Returns the card with the given id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns the position of a board in display order.
    #[must_use]
    pub fn board_position(&self, id: BoardId) -> Option<usize> {
        board_index(&self.boards, id)
    }

    /// Returns the cards of one board in display order.
    pub fn cards_on(&self, board_id: BoardId) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |card| card.belongs_to(board_id))
    }

    /// Returns the number of cards on one board.
    #[must_use]
    pub fn card_count_on(&self, board_id: BoardId) -> usize {
        self.cards_on(board_id).count()
    }

    /// Returns a fresh card identifier for a card about to be built.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::IdsExhausted`] once no identifier is left.
    pub fn next_card_id(&self) -> Result<CardId> {
        self.ids.next_card_id().ok_or(ProtocolError::IdsExhausted)
    }

    /// Appends a new board and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptyBoardTitle`] if the title is blank, or
    /// [`ProtocolError::IdsExhausted`] if no identifier is left.
    pub fn add_board(&mut self, title: impl Into<String>) -> Result<BoardId> {
        let title = title.into();
        if title.trim().is_empty() {
            warn!("rejected board with empty title");
            return Err(ProtocolError::EmptyBoardTitle);
        }
        let id = self.ids.next_board_id().ok_or(ProtocolError::IdsExhausted)?;
        info!(board = %id, title = %title, "added board");
        self.boards.push(Board::new(id, title));
        Ok(id)
    }

    /// Appends a pre-built card to the end of the global card sequence.
    ///
    /// The card's id is reserved so the store never hands it out again.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or description is blank, if the card's
    /// board does not exist, if a card with the same id already exists, or if
    /// the id is `u64::MAX` and would leave nothing for later boards and cards.
    pub fn add_card(&mut self, card: Card) -> Result<CardId> {
        if card.title.trim().is_empty() {
            warn!(card = %card.id, "rejected card with empty title");
            return Err(ProtocolError::EmptyCardTitle);
        }
        if card.description.trim().is_empty() {
            warn!(card = %card.id, "rejected card with empty description");
            return Err(ProtocolError::EmptyCardDescription);
        }
        if self.board(card.board_id).is_none() {
            warn!(card = %card.id, board = %card.board_id, "rejected card for unknown board");
            return Err(ProtocolError::BoardNotFound(card.board_id));
        }
        if self.card(card.id).is_some() {
            warn!(card = %card.id, "rejected duplicate card id");
            return Err(ProtocolError::DuplicateCardId(card.id));
        }

        let id = card.id;
        if !self.ids.reserve(id.get()) {
            warn!(card = %id, "rejected card id with no successor");
            return Err(ProtocolError::CardIdOutOfRange(id));
        }
        info!(card = %id, board = %card.board_id, title = %card.title, "added card");
        self.cards.push(card);
        Ok(id)
    }

    /// Builds a card with a fresh id and appends it to the given board.
    ///
    /// # Errors
    ///
    /// See [`Store::add_card`].
    pub fn create_card(
        &mut self,
        board_id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<CardId> {
        let card = Card::new(self.next_card_id()?, board_id, title, description);
        self.add_card(card)
    }

    /// Removes a board together with every card on it.
    ///
    /// Returns the removed board, or `None` if no board has this id. A drag
    /// involving the board or one of its cards is abandoned.
    pub fn delete_board(&mut self, id: BoardId) -> Option<Board> {
        let index = board_index(&self.boards, id)?;
        let board = self.boards.remove(index);

        let before = self.cards.len();
        self.cards.retain(|card| !card.belongs_to(id));
        let removed_cards = before - self.cards.len();

        if let Some(active) = self.drag.active.filter(|item| !self.contains(*item)) {
            debug!(?active, "abandoning drag of deleted entity");
            self.drag = DragSession::default();
        }

        info!(board = %id, removed_cards, "deleted board");
        Some(board)
    }

    /// Records the start of a drag.
    ///
    /// If `active` cannot be found the recorded active entity is cleared.
    pub fn on_drag_start(&mut self, active: DragItem) {
        let found = self.contains(active);
        self.drag = DragSession {
            active: found.then_some(active),
            last_over: None,
        };
        debug!(kind = %active.kind(), id = active.raw_id(), found, "drag started");
    }

    /// Applies the live preview for `active` hovering over `over`.
    ///
    /// Repeating the same `(active, over)` pair has no further effect until the
    /// pointer moves to another target or the drag ends.
    pub fn on_drag_over(&mut self, active: DragItem, over: Option<DragItem>) -> DragOutcome {
        let Some(target) = over else {
            self.drag.last_over = None;
            return DragOutcome::Unchanged;
        };
        if self.drag.last_over == Some((active, target)) {
            return DragOutcome::Unchanged;
        }
        self.drag.last_over = Some((active, target));
        drag_over(&self.boards, &mut self.cards, active, over)
    }

    /// Ends the drag, committing a board drop on `over`.
    ///
    /// The recorded drag state is always cleared, even without a target.
    pub fn on_drag_end(&mut self, active: DragItem, over: Option<DragItem>) -> DragOutcome {
        self.drag = DragSession::default();
        let outcome = drag_end(&mut self.boards, active, over);
        debug!(
            kind = %active.kind(),
            id = active.raw_id(),
            over_kind = over.map(|item| item.kind().as_str()),
            over_id = over.map(DragItem::raw_id),
            changed = outcome.is_changed(),
            "drag ended"
        );
        outcome
    }

    /// Returns the entity being dragged, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<DragItem> {
        self.drag.active
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.active.is_some()
    }

    /// Returns the board being dragged, if any.
    #[must_use]
    pub fn active_board(&self) -> Option<&Board> {
        match self.drag.active? {
            DragItem::Board(id) => self.board(id),
            DragItem::Card(_) => None,
        }
    }

    /// Returns the card being dragged, if any.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        match self.drag.active? {
            DragItem::Card(id) => self.card(id),
            DragItem::Board(_) => None,
        }
    }

    /// Returns `true` if the item exists in its sequence.
    #[must_use]
    pub fn contains(&self, item: DragItem) -> bool {
        match item {
            DragItem::Board(id) => board_index(&self.boards, id).is_some(),
            DragItem::Card(id) => card_index(&self.cards, id).is_some(),
        }
    }
}
