//! Drag reordering and reparenting.
//!
//! These functions compute how boards and cards move in response to drag
//! events. They operate on the sequences in place, behind a single mutable
//! borrow, so callers never observe a half-applied move.
//!
//! - [`drag_over`] is the live preview: it moves and reparents cards while the
//!   pointer hovers over a candidate target. Boards are not previewed.
//! - [`drag_end`] is the commit: it moves a dropped board to the slot of the
//!   board it was dropped on. Card drags were already applied live.
//!
//! Any id that cannot be found in its sequence turns the event into a no-op.

use tracing::{debug, trace};

use crate::board::Board;
use crate::card::Card;
use crate::drag::{DragItem, DragOutcome};
use crate::id::{BoardId, CardId};

/// Moves the element at `from` to `to`, shifting the elements in between by
/// one slot.
///
/// This is a remove-then-insert performed as a single rotation. Returns
/// `false`, leaving the slice untouched, if either index is out of range.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::ordering::move_element;
///
/// let mut items = vec!['a', 'b', 'c', 'd'];
/// assert!(move_element(&mut items, 0, 2));
/// assert_eq!(items, ['b', 'c', 'a', 'd']);
///
/// assert!(move_element(&mut items, 3, 0));
/// assert_eq!(items, ['d', 'b', 'c', 'a']);
///
/// assert!(!move_element(&mut items, 0, 9));
/// ```
pub fn move_element<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Returns the index of the board with the given id.
#[must_use]
pub fn board_index(boards: &[Board], id: BoardId) -> Option<usize> {
    boards.iter().position(|board| board.id == id)
}

/// Returns the index of the card with the given id in the global sequence.
#[must_use]
pub fn card_index(cards: &[Card], id: CardId) -> Option<usize> {
    cards.iter().position(|card| card.id == id)
}

/// Applies the live preview for the item `active` hovering over `over`.
///
/// Only card drags are previewed:
///
/// - over another card on a different board, the dragged card joins that
///   board and moves to the hovered card's index minus one. When the dragged
///   card came first this is the slot right before the hovered card; when it
///   came later it lands one further up. A hovered card at index zero has no
///   slot before it and the event is ignored;
/// - over another card on the same board, the dragged card takes the hovered
///   card's index;
/// - over a board, the dragged card joins that board and keeps its index.
///
/// Everything else (no target, hovering over itself, dragging a board, a
/// lookup miss) leaves both sequences untouched.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::ordering::drag_over;
/// use cardwall_protocol::{Board, BoardId, Card, CardId, DragItem};
///
/// let boards = vec![Board::new(BoardId::new(1), "To Do"), Board::new(BoardId::new(2), "Done")];
/// let mut cards = vec![
///     Card::new(CardId::new(10), BoardId::new(1), "a", "a"),
///     Card::new(CardId::new(11), BoardId::new(2), "b", "b"),
/// ];
///
/// drag_over(
///     &boards,
///     &mut cards,
///     DragItem::Card(CardId::new(10)),
///     Some(DragItem::Card(CardId::new(11))),
/// );
/// assert!(cards.iter().all(|card| card.board_id == BoardId::new(2)));
/// ```
pub fn drag_over(
    boards: &[Board],
    cards: &mut [Card],
    active: DragItem,
    over: Option<DragItem>,
) -> DragOutcome {
    let Some(over) = over else {
        return DragOutcome::Unchanged;
    };
    if active == over {
        return DragOutcome::Unchanged;
    }
    let DragItem::Card(active_id) = active else {
        trace!(?active, ?over, "board drags are not previewed");
        return DragOutcome::Unchanged;
    };

    match over {
        DragItem::Card(over_id) => card_over_card(cards, active_id, over_id),
        DragItem::Board(board_id) => card_over_board(boards, cards, active_id, board_id),
    }
}

fn card_over_card(cards: &mut [Card], active_id: CardId, over_id: CardId) -> DragOutcome {
    let (Some(active_index), Some(over_index)) =
        (card_index(cards, active_id), card_index(cards, over_id))
    else {
        trace!(%active_id, %over_id, "card lookup missed; ignoring drag over");
        return DragOutcome::Unchanged;
    };

    let source_board = cards[active_index].board_id;
    let target_board = cards[over_index].board_id;

    if source_board == target_board {
        move_element(cards, active_index, over_index);
        debug!(
            card = %active_id,
            from = active_index,
            to = over_index,
            board = %target_board,
            "reordered card within board"
        );
        return DragOutcome::CardMoved {
            card: active_id,
            from_index: active_index,
            to_index: over_index,
            board: target_board,
            reparented: false,
        };
    }

    // The slot just before the target's original index. A target at the
    // very front has no such slot, and the whole move (reparent included)
    // is dropped.
    let Some(to_index) = over_index.checked_sub(1) else {
        trace!(%active_id, %over_id, "target is first in sequence; ignoring drag over");
        return DragOutcome::Unchanged;
    };
    cards[active_index].board_id = target_board;
    move_element(cards, active_index, to_index);
    debug!(
        card = %active_id,
        from = active_index,
        to = to_index,
        from_board = %source_board,
        to_board = %target_board,
        "moved card onto another board"
    );
    DragOutcome::CardMoved {
        card: active_id,
        from_index: active_index,
        to_index,
        board: target_board,
        reparented: true,
    }
}

fn card_over_board(
    boards: &[Board],
    cards: &mut [Card],
    active_id: CardId,
    board_id: BoardId,
) -> DragOutcome {
    if board_index(boards, board_id).is_none() {
        trace!(%active_id, %board_id, "board lookup missed; ignoring drag over");
        return DragOutcome::Unchanged;
    }
    let Some(active_index) = card_index(cards, active_id) else {
        trace!(%active_id, "card lookup missed; ignoring drag over");
        return DragOutcome::Unchanged;
    };

    let card = &mut cards[active_index];
    if card.board_id == board_id {
        return DragOutcome::Unchanged;
    }
    let source_board = card.board_id;
    card.board_id = board_id;
    debug!(
        card = %active_id,
        index = active_index,
        from_board = %source_board,
        to_board = %board_id,
        "attached card to board"
    );
    DragOutcome::CardMoved {
        card: active_id,
        from_index: active_index,
        to_index: active_index,
        board: board_id,
        reparented: true,
    }
}

/// Commits the drop of `active` onto `over`.
///
/// Only board drags are committed: the dragged board moves to the index of
/// the board it was dropped on. Dropping on nothing, dropping a card, or
/// dropping on something that is not a known board changes nothing.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::ordering::drag_end;
/// use cardwall_protocol::{Board, BoardId, DragItem};
///
/// let mut boards = vec![
///     Board::new(BoardId::new(1), "To Do"),
///     Board::new(BoardId::new(2), "Doing"),
///     Board::new(BoardId::new(3), "Done"),
/// ];
///
/// drag_end(&mut boards, DragItem::Board(BoardId::new(1)), Some(DragItem::Board(BoardId::new(3))));
/// let order: Vec<u64> = boards.iter().map(|b| b.id.get()).collect();
/// assert_eq!(order, [2, 3, 1]);
/// ```
pub fn drag_end(boards: &mut [Board], active: DragItem, over: Option<DragItem>) -> DragOutcome {
    let Some(over) = over else {
        trace!(?active, "dropped without a target");
        return DragOutcome::Unchanged;
    };
    let DragItem::Board(active_id) = active else {
        return DragOutcome::Unchanged;
    };
    let DragItem::Board(over_id) = over else {
        trace!(%active_id, ?over, "board dropped on a non-board target");
        return DragOutcome::Unchanged;
    };

    let (Some(from_index), Some(to_index)) =
        (board_index(boards, active_id), board_index(boards, over_id))
    else {
        trace!(%active_id, %over_id, "board lookup missed; ignoring drop");
        return DragOutcome::Unchanged;
    };
    if from_index == to_index {
        return DragOutcome::Unchanged;
    }

    move_element(boards, from_index, to_index);
    debug!(board = %active_id, from = from_index, to = to_index, "moved board");
    DragOutcome::BoardMoved {
        board: active_id,
        from_index,
        to_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: u64) -> Board {
        Board::new(BoardId::new(id), format!("Board {id}"))
    }

    fn card(id: u64, board_id: u64) -> Card {
        Card::new(
            CardId::new(id),
            BoardId::new(board_id),
            format!("Card {id}"),
            "description",
        )
    }

    fn card_layout(cards: &[Card]) -> Vec<(u64, u64)> {
        cards
            .iter()
            .map(|card| (card.id.get(), card.board_id.get()))
            .collect()
    }

    fn board_order(boards: &[Board]) -> Vec<u64> {
        boards.iter().map(|board| board.id.get()).collect()
    }

    fn over_card(id: u64) -> Option<DragItem> {
        Some(DragItem::Card(CardId::new(id)))
    }

    fn over_board(id: u64) -> Option<DragItem> {
        Some(DragItem::Board(BoardId::new(id)))
    }

    #[test]
    fn move_element_forward() {
        let mut items = vec![1, 2, 3, 4, 5];
        assert!(move_element(&mut items, 1, 3));
        assert_eq!(items, [1, 3, 4, 2, 5]);
    }

    #[test]
    fn move_element_backward() {
        let mut items = vec![1, 2, 3, 4, 5];
        assert!(move_element(&mut items, 4, 0));
        assert_eq!(items, [5, 1, 2, 3, 4]);
    }

    #[test]
    fn move_element_same_index_is_identity() {
        let mut items = vec![1, 2, 3];
        assert!(move_element(&mut items, 1, 1));
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn move_element_out_of_range_is_rejected() {
        let mut items = vec![1, 2, 3];
        assert!(!move_element(&mut items, 3, 0));
        assert!(!move_element(&mut items, 0, 3));
        assert_eq!(items, [1, 2, 3]);

        let mut empty: Vec<i32> = Vec::new();
        assert!(!move_element(&mut empty, 0, 0));
    }

    #[test]
    fn card_over_card_on_other_board_lands_before_target() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1), card(11, 2)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(11));

        assert_eq!(card_layout(&cards), [(10, 2), (11, 2)]);
        assert_eq!(
            outcome,
            DragOutcome::CardMoved {
                card: CardId::new(10),
                from_index: 0,
                to_index: 0,
                board: BoardId::new(2),
                reparented: true,
            }
        );
    }

    #[test]
    fn card_over_card_on_other_board_from_the_right() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1), card(11, 1), card(12, 2), card(13, 2)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(13)), over_card(11));

        assert_eq!(card_layout(&cards), [(13, 1), (10, 1), (11, 1), (12, 2)]);
        assert!(matches!(
            outcome,
            DragOutcome::CardMoved {
                from_index: 3,
                to_index: 0,
                reparented: true,
                ..
            }
        ));
    }

    #[test]
    fn card_from_later_board_lands_one_slot_above_target() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(30, 2), card(20, 2), card(10, 1)];

        drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(20));

        assert_eq!(card_layout(&cards), [(10, 2), (30, 2), (20, 2)]);
    }

    #[test]
    fn card_over_first_card_of_other_board_is_noop() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(20, 2), card(10, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(20));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(card_layout(&cards), [(20, 2), (10, 1)]);
    }

    #[test]
    fn card_over_card_on_other_board_in_middle_of_sequence() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1), card(20, 2), card(11, 1), card(21, 2)];

        drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(21));

        assert_eq!(card_layout(&cards), [(20, 2), (11, 1), (10, 2), (21, 2)]);
    }

    #[test]
    fn card_over_card_on_same_board_takes_target_index() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1), card(11, 1), card(12, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(12));

        assert_eq!(card_layout(&cards), [(11, 1), (12, 1), (10, 1)]);
        assert!(matches!(
            outcome,
            DragOutcome::CardMoved {
                reparented: false,
                to_index: 2,
                ..
            }
        ));
    }

    #[test]
    fn card_over_card_on_same_board_moving_up() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1), card(11, 1), card(12, 1)];

        drag_over(&boards, &mut cards, DragItem::Card(CardId::new(12)), over_card(10));

        assert_eq!(card_layout(&cards), [(12, 1), (10, 1), (11, 1)]);
    }

    #[test]
    fn card_over_board_reparents_without_moving() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1), card(11, 1), card(12, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(11)), over_board(2));

        assert_eq!(card_layout(&cards), [(10, 1), (11, 2), (12, 1)]);
        assert_eq!(
            outcome,
            DragOutcome::CardMoved {
                card: CardId::new(11),
                from_index: 1,
                to_index: 1,
                board: BoardId::new(2),
                reparented: true,
            }
        );
    }

    #[test]
    fn card_over_own_board_is_noop() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_board(1));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(card_layout(&cards), [(10, 1)]);
    }

    #[test]
    fn card_over_unknown_board_is_noop() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_board(99));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(card_layout(&cards), [(10, 1)]);
    }

    #[test]
    fn card_over_itself_is_noop() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1), card(11, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(10));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(card_layout(&cards), [(10, 1), (11, 1)]);
    }

    #[test]
    fn drag_over_without_target_is_noop() {
        let boards = vec![board(1)];
        let mut cards = vec![card(10, 1), card(11, 1)];

        let outcome = drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), None);

        assert_eq!(outcome, DragOutcome::Unchanged);
    }

    #[test]
    fn board_over_anything_is_not_previewed() {
        let mut boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1)];

        let over_other_board =
            drag_over(&boards, &mut cards, DragItem::Board(BoardId::new(1)), over_board(2));
        let over_a_card =
            drag_over(&boards, &mut cards, DragItem::Board(BoardId::new(2)), over_card(10));

        assert_eq!(over_other_board, DragOutcome::Unchanged);
        assert_eq!(over_a_card, DragOutcome::Unchanged);
        assert_eq!(board_order(&boards), [1, 2]);
        assert_eq!(card_layout(&cards), [(10, 1)]);

        // The board order only changes on drop.
        drag_end(&mut boards, DragItem::Board(BoardId::new(1)), over_board(2));
        assert_eq!(board_order(&boards), [2, 1]);
    }

    #[test]
    fn unknown_cards_are_ignored() {
        let boards = vec![board(1), board(2)];
        let mut cards = vec![card(10, 1), card(11, 2)];

        let unknown_active =
            drag_over(&boards, &mut cards, DragItem::Card(CardId::new(99)), over_card(11));
        let unknown_over =
            drag_over(&boards, &mut cards, DragItem::Card(CardId::new(10)), over_card(99));
        let unknown_over_board =
            drag_over(&boards, &mut cards, DragItem::Card(CardId::new(99)), over_board(2));

        assert_eq!(unknown_active, DragOutcome::Unchanged);
        assert_eq!(unknown_over, DragOutcome::Unchanged);
        assert_eq!(unknown_over_board, DragOutcome::Unchanged);
        assert_eq!(card_layout(&cards), [(10, 1), (11, 2)]);
    }

    #[test]
    fn drop_board_on_board_moves_it() {
        let mut boards = vec![board(1), board(2), board(3)];

        let outcome = drag_end(&mut boards, DragItem::Board(BoardId::new(3)), over_board(1));

        assert_eq!(board_order(&boards), [3, 1, 2]);
        assert_eq!(
            outcome,
            DragOutcome::BoardMoved {
                board: BoardId::new(3),
                from_index: 2,
                to_index: 0,
            }
        );
    }

    #[test]
    fn drop_without_target_keeps_board_order() {
        let mut boards = vec![board(1), board(2)];

        let outcome = drag_end(&mut boards, DragItem::Board(BoardId::new(1)), None);

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(board_order(&boards), [1, 2]);
    }

    #[test]
    fn drop_card_commits_nothing() {
        let mut boards = vec![board(1), board(2)];

        let outcome = drag_end(&mut boards, DragItem::Card(CardId::new(10)), over_board(2));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(board_order(&boards), [1, 2]);
    }

    #[test]
    fn drop_board_on_card_or_unknown_board_is_noop() {
        let mut boards = vec![board(1), board(2)];

        let on_card = drag_end(&mut boards, DragItem::Board(BoardId::new(1)), over_card(10));
        let on_unknown = drag_end(&mut boards, DragItem::Board(BoardId::new(1)), over_board(42));
        let unknown_active = drag_end(&mut boards, DragItem::Board(BoardId::new(42)), over_board(1));

        assert_eq!(on_card, DragOutcome::Unchanged);
        assert_eq!(on_unknown, DragOutcome::Unchanged);
        assert_eq!(unknown_active, DragOutcome::Unchanged);
        assert_eq!(board_order(&boards), [1, 2]);
    }

    #[test]
    fn drop_board_on_itself_is_noop() {
        let mut boards = vec![board(1), board(2)];

        let outcome = drag_end(&mut boards, DragItem::Board(BoardId::new(2)), over_board(2));

        assert_eq!(outcome, DragOutcome::Unchanged);
        assert_eq!(board_order(&boards), [1, 2]);
    }
}
