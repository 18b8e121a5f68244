//! Application state management.
//!
//! [`AppState`] owns the [`Store`] together with everything the TUI layers
//! on top of it: selection, the open modal, the keyboard carry, and the last
//! status message.

use cardwall_protocol::{Board, BoardId, Card, CardId, DragItem, Store};
use tracing::debug;

use crate::drag::Carry;
use crate::form::{FormKind, FormState};
use crate::layout::Selection;

/// The current focus area in the UI.
///
/// Determines which key bindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the wall.
    #[default]
    Board,
    /// A "new board" or "new card" form is open.
    Form,
    /// A delete confirmation is open.
    Confirm,
}

/// An arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous board.
    Left,
    /// Towards the next board.
    Right,
    /// Towards the previous card.
    Up,
    /// Towards the next card.
    Down,
}

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The boards and cards being displayed.
    pub store: Store,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected board in board order.
    pub selected_board: usize,
    /// Index of the selected card among the selected board's cards.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The open modal form, if any.
    pub form: Option<FormState>,
    /// Board awaiting delete confirmation.
    pub pending_delete: Option<BoardId>,
    /// Item carried with the keyboard.
    pub carry: Option<Carry>,
    /// Last validation or info message, shown in the status bar.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a new application state around `store`, selecting the first
    /// board.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_protocol::dummy::dummy_store;
    /// use cardwall_tui::AppState;
    ///
    /// let state = AppState::new(dummy_store());
    /// assert_eq!(state.selected_board, 0);
    /// assert_eq!(state.selected_card, None);
    /// ```
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            focus: Focus::default(),
            selected_board: 0,
            selected_card: None,
            help_visible: false,
            form: None,
            pending_delete: None,
            carry: None,
            status: None,
        }
    }

    /// Returns the selection as used by layout and hit-testing.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection {
            board: self.selected_board,
            card: self.selected_card,
        }
    }

    /// Returns the selected board.
    #[must_use]
    pub fn selected_board(&self) -> Option<&Board> {
        self.store.boards().get(self.selected_board)
    }

    /// Returns the id of the selected board.
    #[must_use]
    pub fn selected_board_id(&self) -> Option<BoardId> {
        self.selected_board().map(|board| board.id)
    }

    /// Returns the selected card.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        let board = self.selected_board_id()?;
        self.store.cards_on(board).nth(self.selected_card?)
    }

    /// Returns the id of the selected card.
    #[must_use]
    pub fn selected_card_id(&self) -> Option<CardId> {
        self.selected_card().map(|card| card.id)
    }

    /// Returns the column the wall should keep on screen.
    ///
    /// While a board is carried this is the column it hovers over.
    #[must_use]
    pub fn focus_column(&self) -> usize {
        match self.carry {
            Some(Carry {
                active: DragItem::Board(_),
                over: Some(DragItem::Board(over)),
            }) => self
                .store
                .board_position(over)
                .unwrap_or(self.selected_board),
            _ => self.selected_board,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Moves the board selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = self.store.boards().len();
        if count == 0 {
            return;
        }
        self.selected_board = if self.selected_board == 0 {
            count - 1
        } else {
            self.selected_board - 1
        };
        self.clamp_card_selection();
    }

    /// Moves the board selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        let count = self.store.boards().len();
        if count == 0 {
            return;
        }
        self.selected_board = (self.selected_board + 1) % count;
        self.clamp_card_selection();
    }

    /// Moves the card selection up within the selected board, wrapping to
    /// the bottom.
    pub fn navigate_up(&mut self) {
        let count = self.selected_card_count();
        if count == 0 {
            self.selected_card = None;
            return;
        }
        self.selected_card = match self.selected_card {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(count - 1),
            None => Some(0),
        };
    }

    /// Moves the card selection down within the selected board, wrapping to
    /// the top.
    pub fn navigate_down(&mut self) {
        let count = self.selected_card_count();
        if count == 0 {
            self.selected_card = None;
            return;
        }
        self.selected_card = match self.selected_card {
            Some(idx) if idx + 1 < count => Some(idx + 1),
            Some(_) | None => Some(0),
        };
    }

    /// Clears the card selection, keeping the board selected.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Selects a board or card by identity.
    pub fn select_item(&mut self, item: DragItem) {
        match item {
            DragItem::Board(id) => {
                if let Some(index) = self.store.board_position(id) {
                    self.selected_board = index;
                    self.selected_card = None;
                }
            }
            DragItem::Card(id) => {
                let Some(board) = self.store.card(id).map(|card| card.board_id) else {
                    return;
                };
                let Some(board_index) = self.store.board_position(board) else {
                    return;
                };
                self.selected_board = board_index;
                self.selected_card = self.store.cards_on(board).position(|card| card.id == id);
            }
        }
    }

    /// Brings the selection back in range after boards or cards went away.
    pub fn clamp_selection(&mut self) {
        let count = self.store.boards().len();
        self.selected_board = self.selected_board.min(count.saturating_sub(1));
        self.clamp_card_selection();
    }

    fn selected_card_count(&self) -> usize {
        self.selected_board_id()
            .map_or(0, |board| self.store.card_count_on(board))
    }

    fn clamp_card_selection(&mut self) {
        let count = self.selected_card_count();
        if count == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= count
        {
            self.selected_card = Some(count - 1);
        }
    }

    // --- Forms ---

    /// Opens the "New board" form.
    pub fn open_new_board_form(&mut self) {
        self.form = Some(FormState::new_board());
        self.focus = Focus::Form;
    }

    /// Opens the "New card" form for the selected board.
    pub fn open_new_card_form(&mut self) {
        match self.selected_board_id() {
            Some(board) => {
                self.form = Some(FormState::new_card(board));
                self.focus = Focus::Form;
            }
            None => self.status = Some("Create a board first (b)".to_string()),
        }
    }

    /// Closes the open form without creating anything.
    pub fn close_form(&mut self) {
        self.form = None;
        self.focus = Focus::Board;
    }

    /// Submits the open form.
    ///
    /// On success the form closes and the new item is selected. On a
    /// validation error the form stays open and shows the error.
    pub fn submit_form(&mut self) {
        let result = match self.form.as_ref() {
            None => return,
            Some(form) => match form.kind() {
                FormKind::NewBoard => self
                    .store
                    .add_board(form.value(0).trim())
                    .map(DragItem::Board),
                FormKind::NewCard { board } => self
                    .store
                    .create_card(board, form.value(0).trim(), form.value(1).trim())
                    .map(DragItem::Card),
            },
        };

        match result {
            Ok(item) => {
                self.close_form();
                self.select_item(item);
                self.status = None;
            }
            Err(err) => {
                let message = err.to_string();
                if let Some(form) = self.form.as_mut() {
                    form.set_error(message.clone());
                }
                self.status = Some(message);
            }
        }
    }

    // --- Delete ---

    /// Asks for confirmation before deleting the selected board.
    pub fn request_delete(&mut self) {
        match self.selected_board_id() {
            Some(board) => {
                self.pending_delete = Some(board);
                self.focus = Focus::Confirm;
            }
            None => self.status = Some("No board to delete".to_string()),
        }
    }

    /// Deletes the board awaiting confirmation, with its cards.
    pub fn confirm_delete(&mut self) {
        if let Some(board) = self.pending_delete.take()
            && let Some(removed) = self.store.delete_board(board)
        {
            self.status = Some(format!("Deleted board \"{}\"", removed.title));
        }
        self.focus = Focus::Board;
        self.clamp_selection();
    }

    /// Keeps the board awaiting confirmation.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.focus = Focus::Board;
    }

    // --- Keyboard drag ---

    /// Picks up the selected card (or board, if no card is selected), or
    /// drops the carried item.
    pub fn pick_up(&mut self) {
        if self.carry.is_some() {
            self.drop_carried();
            return;
        }

        let item = match (self.selected_card_id(), self.selected_board_id()) {
            (Some(card), _) => DragItem::Card(card),
            (None, Some(board)) => DragItem::Board(board),
            (None, None) => {
                self.status = Some("Nothing to pick up".to_string());
                return;
            }
        };
        self.store.on_drag_start(item);
        self.carry = Some(Carry::new(item));
        debug!(?item, "picked up with keyboard");
    }

    /// Steers the carried item one step in `direction`.
    ///
    /// A card moves past its neighbour in the board (up and down) or onto
    /// the neighbouring board (left and right). A board only changes the
    /// column it will be dropped on.
    pub fn carry_move(&mut self, direction: Direction) {
        let Some(carry) = self.carry else {
            return;
        };
        let target = match carry.active {
            DragItem::Card(id) => self.card_neighbour(id, direction),
            DragItem::Board(id) => self.board_neighbour(id, carry.over, direction),
        };
        let Some(target) = target else {
            return;
        };

        // Each key press is a fresh hover, even over the previous target.
        self.store.on_drag_over(carry.active, None);
        self.store.on_drag_over(carry.active, Some(target));
        self.carry = Some(Carry {
            active: carry.active,
            over: Some(target),
        });
        self.select_item(carry.active);
    }

    /// Drops the carried item on its current target.
    pub fn drop_carried(&mut self) {
        let Some(carry) = self.carry.take() else {
            return;
        };
        let outcome = self.store.on_drag_end(carry.active, carry.over);
        self.select_item(carry.active);
        debug!(active = ?carry.active, over = ?carry.over, ?outcome, "dropped with keyboard");
    }

    /// Releases the carried item without a target.
    pub fn cancel_carry(&mut self) {
        let Some(carry) = self.carry.take() else {
            return;
        };
        self.store.on_drag_end(carry.active, None);
        self.select_item(carry.active);
        debug!(active = ?carry.active, "keyboard drag cancelled");
    }

    fn card_neighbour(&self, id: CardId, direction: Direction) -> Option<DragItem> {
        let board = self.store.card(id)?.board_id;
        match direction {
            Direction::Up | Direction::Down => {
                let cards: Vec<CardId> = self.store.cards_on(board).map(|card| card.id).collect();
                let position = cards.iter().position(|card| *card == id)?;
                let neighbour = match direction {
                    Direction::Up => position.checked_sub(1)?,
                    _ => position + 1,
                };
                cards.get(neighbour).copied().map(DragItem::Card)
            }
            Direction::Left | Direction::Right => {
                let index = self.store.board_position(board)?;
                self.neighbour_board(index, direction)
            }
        }
    }

    fn board_neighbour(
        &self,
        id: BoardId,
        over: Option<DragItem>,
        direction: Direction,
    ) -> Option<DragItem> {
        let hover = match over {
            Some(DragItem::Board(over)) => over,
            _ => id,
        };
        let index = self.store.board_position(hover)?;
        self.neighbour_board(index, direction)
    }

    fn neighbour_board(&self, index: usize, direction: Direction) -> Option<DragItem> {
        let neighbour = match direction {
            Direction::Left => index.checked_sub(1)?,
            Direction::Right => index + 1,
            Direction::Up | Direction::Down => return None,
        };
        self.store
            .boards()
            .get(neighbour)
            .map(|board| DragItem::Board(board.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardwall_protocol::dummy::{dummy_store, store_with_boards};

    /// Three boards; the first holds cards "1", "2", "3".
    fn sample_state() -> AppState {
        let mut store = store_with_boards(["A", "B", "C"]);
        let a = store.boards()[0].id;
        for title in ["1", "2", "3"] {
            store.create_card(a, title, "description").expect("valid card");
        }
        AppState::new(store)
    }

    fn titles_on(state: &AppState, board_index: usize) -> Vec<String> {
        let board = state.store.boards()[board_index].id;
        state
            .store
            .cards_on(board)
            .map(|card| card.title.clone())
            .collect()
    }

    fn board_titles(state: &AppState) -> Vec<String> {
        state
            .store
            .boards()
            .iter()
            .map(|board| board.title.clone())
            .collect()
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(dummy_store());
        assert_eq!(state.focus, Focus::Board);
        assert_eq!(state.selected_board, 0);
        assert_eq!(state.selected_card, None);
        assert!(!state.help_visible);
        assert!(state.form.is_none());
        assert!(state.carry.is_none());
    }

    #[test]
    fn navigate_left_and_right_wrap_around() {
        let mut state = sample_state();
        state.navigate_left();
        assert_eq!(state.selected_board, 2);
        state.navigate_right();
        assert_eq!(state.selected_board, 0);
        state.navigate_right();
        assert_eq!(state.selected_board, 1);
    }

    #[test]
    fn navigation_on_empty_wall_is_noop() {
        let mut state = AppState::new(Store::new());
        state.navigate_left();
        state.navigate_right();
        state.navigate_down();
        assert_eq!(state.selected_board, 0);
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn navigate_up_down_with_cards() {
        let mut state = sample_state();

        state.navigate_down();
        assert_eq!(state.selected_card, Some(0));
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_card, Some(2));
        state.navigate_down();
        assert_eq!(state.selected_card, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_card, Some(2));
        assert_eq!(state.selected_card().map(|c| c.title.as_str()), Some("3"));
    }

    #[test]
    fn moving_to_empty_board_clears_card_selection() {
        let mut state = sample_state();
        state.navigate_down();
        state.navigate_right();
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn toggle_help_visibility() {
        let mut state = sample_state();
        state.toggle_help();
        assert!(state.help_visible);
        assert!(state.dismiss_help());
        assert!(!state.dismiss_help());
    }

    #[test]
    fn select_item_finds_card_position() {
        let mut state = sample_state();
        let b = state.store.boards()[1].id;
        let card = state.store.create_card(b, "x", "y").expect("valid card");

        state.select_item(DragItem::Card(card));
        assert_eq!(state.selected_board, 1);
        assert_eq!(state.selected_card, Some(0));

        state.select_item(DragItem::Board(state.store.boards()[2].id));
        assert_eq!(state.selected_board, 2);
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn new_board_form_adds_and_selects_board() {
        let mut state = sample_state();
        state.open_new_board_form();
        assert_eq!(state.focus, Focus::Form);

        for ch in "  Review ".chars() {
            state.form.as_mut().expect("form open").input_char(ch);
        }
        state.submit_form();

        assert!(state.form.is_none());
        assert_eq!(state.focus, Focus::Board);
        assert_eq!(board_titles(&state), ["A", "B", "C", "Review"]);
        assert_eq!(state.selected_board, 3);
    }

    #[test]
    fn invalid_form_stays_open_with_error() {
        let mut state = sample_state();
        state.open_new_card_form();
        state.form.as_mut().expect("form open").input_char('T');
        state.submit_form();

        let form = state.form.as_ref().expect("form still open");
        assert!(form.error().is_some_and(|e| e.contains("description")));
        assert_eq!(state.focus, Focus::Form);
        assert!(state.status.is_some());
        assert_eq!(titles_on(&state, 0), ["1", "2", "3"]);
    }

    #[test]
    fn new_card_form_appends_to_selected_board() {
        let mut state = sample_state();
        state.navigate_right();
        state.open_new_card_form();
        {
            let form = state.form.as_mut().expect("form open");
            form.input_char('N');
            form.next_field();
            form.input_char('D');
        }
        state.submit_form();

        assert_eq!(titles_on(&state, 1), ["N"]);
        assert_eq!(state.selected_board, 1);
        assert_eq!(state.selected_card, Some(0));
    }

    #[test]
    fn new_card_without_boards_reports_status() {
        let mut state = AppState::new(Store::new());
        state.open_new_card_form();
        assert!(state.form.is_none());
        assert!(state.status.is_some());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = sample_state();
        state.request_delete();
        assert_eq!(state.focus, Focus::Confirm);
        state.cancel_delete();
        assert_eq!(board_titles(&state), ["A", "B", "C"]);

        state.request_delete();
        state.confirm_delete();
        assert_eq!(board_titles(&state), ["B", "C"]);
        assert!(state.store.cards().is_empty());
        assert_eq!(state.focus, Focus::Board);
    }

    #[test]
    fn deleting_last_board_clamps_selection() {
        let mut state = sample_state();
        state.navigate_left();
        state.request_delete();
        state.confirm_delete();
        assert_eq!(state.selected_board, 1);
    }

    #[test]
    fn keyboard_carry_moves_card_down_and_across() {
        let mut state = sample_state();
        state.navigate_down();
        state.pick_up();
        assert!(state.store.is_dragging());

        state.carry_move(Direction::Down);
        assert_eq!(titles_on(&state, 0), ["2", "1", "3"]);
        state.carry_move(Direction::Down);
        assert_eq!(titles_on(&state, 0), ["2", "3", "1"]);
        // Already last: nothing below.
        state.carry_move(Direction::Down);
        assert_eq!(titles_on(&state, 0), ["2", "3", "1"]);
        state.carry_move(Direction::Up);
        assert_eq!(titles_on(&state, 0), ["2", "1", "3"]);

        state.carry_move(Direction::Right);
        assert_eq!(titles_on(&state, 0), ["2", "3"]);
        assert_eq!(titles_on(&state, 1), ["1"]);
        assert_eq!(state.selected_board, 1);

        state.pick_up();
        assert!(state.carry.is_none());
        assert!(!state.store.is_dragging());
        assert_eq!(state.selected_card().map(|c| c.title.as_str()), Some("1"));
    }

    #[test]
    fn keyboard_carry_moves_board_on_drop_only() {
        let mut state = sample_state();
        state.pick_up();
        assert_eq!(
            state.carry.map(|c| c.active),
            Some(DragItem::Board(state.store.boards()[0].id))
        );

        state.carry_move(Direction::Right);
        state.carry_move(Direction::Right);
        assert_eq!(board_titles(&state), ["A", "B", "C"]);
        assert_eq!(state.focus_column(), 2);

        state.pick_up();
        assert_eq!(board_titles(&state), ["B", "C", "A"]);
        assert_eq!(state.selected_board, 2);
    }

    #[test]
    fn cancelled_board_carry_changes_nothing() {
        let mut state = sample_state();
        state.pick_up();
        state.carry_move(Direction::Right);
        state.cancel_carry();

        assert_eq!(board_titles(&state), ["A", "B", "C"]);
        assert!(state.carry.is_none());
        assert!(!state.store.is_dragging());
    }

    #[test]
    fn pick_up_on_empty_wall_reports_status() {
        let mut state = AppState::new(Store::new());
        state.pick_up();
        assert!(state.carry.is_none());
        assert!(state.status.is_some());
    }
}
