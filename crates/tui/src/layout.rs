//! Centralized layout measurements and geometry for the TUI.
//!
//! Rendering and mouse hit-testing both go through [`WallLayout`], so a click
//! always lands on what was drawn under it.

use cardwall_protocol::{BoardId, CardId, DragItem, Store};
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of each card in rows: border (2 rows), title and description.
pub const CARD_HEIGHT: u16 = 4;

/// Narrowest a board column may get before columns start scrolling.
pub const MIN_COLUMN_WIDTH: u16 = 24;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. A column
/// needs its two borders and one card, plus the status bar.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum terminal height for rendering with header.
///
/// Between `MIN_HEIGHT` and this value the header is hidden to reclaim its
/// rows for the wall.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;

/// What a wall column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The board at this index in board order.
    Board(usize),
    /// The trailing "add board" placeholder.
    AddBoard,
}

/// Position of a column among the visible columns.
///
/// Adjacent columns share a border, so each position draws a different
/// border set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost visible column.
    First,
    /// Any column between the first and the last.
    Middle,
    /// Rightmost visible column.
    Last,
    /// The only visible column.
    Only,
}

/// One visible column and where it sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    /// What the column shows.
    pub kind: ColumnKind,
    /// Screen area, borders included.
    pub area: Rect,
    /// Border position among the visible columns.
    pub position: ColumnPosition,
}

/// Which board and card are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Index of the selected board in board order.
    pub board: usize,
    /// Index of the selected card among that board's cards.
    pub card: Option<usize>,
}

/// What lies under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A card, with its board and its index among that board's cards.
    Card {
        /// The card.
        id: CardId,
        /// Index of its board in board order.
        board_index: usize,
        /// Index among the cards of its board.
        card_index: usize,
    },
    /// The title row of a board column.
    BoardHeader {
        /// The board.
        id: BoardId,
        /// Index in board order.
        board_index: usize,
    },
    /// Anywhere else inside a board column.
    BoardBody {
        /// The board.
        id: BoardId,
        /// Index in board order.
        board_index: usize,
    },
    /// The "add board" placeholder column.
    AddBoard,
}

impl Hit {
    /// Returns the droppable item under the pointer, if any.
    #[must_use]
    pub fn drop_target(self) -> Option<DragItem> {
        match self {
            Self::Card { id, .. } => Some(DragItem::Card(id)),
            Self::BoardHeader { id, .. } | Self::BoardBody { id, .. } => Some(DragItem::Board(id)),
            Self::AddBoard => None,
        }
    }

    /// Returns the item a press on this spot picks up, if any.
    ///
    /// Cards are picked up anywhere on the card, boards only by their title
    /// row.
    #[must_use]
    pub fn drag_handle(self) -> Option<DragItem> {
        match self {
            Self::Card { id, .. } => Some(DragItem::Card(id)),
            Self::BoardHeader { id, .. } => Some(DragItem::Board(id)),
            Self::BoardBody { .. } | Self::AddBoard => None,
        }
    }
}

/// Column geometry of the wall for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallLayout {
    /// Visible columns, left to right.
    pub columns: Vec<ColumnSlot>,
    /// Index of the first visible column.
    pub first_column: usize,
    /// Total number of columns, visible or not.
    pub total_columns: usize,
}

impl WallLayout {
    /// Lays out `board_count` board columns plus the "add board" column.
    ///
    /// Columns share the width equally and never get narrower than
    /// [`MIN_COLUMN_WIDTH`]; when they do not all fit, the window scrolls so
    /// that `focus_column` is visible.
    #[must_use]
    pub fn new(area: Rect, board_count: usize, focus_column: usize) -> Self {
        let total_columns = board_count + 1;
        let fits = usize::from(area.width / MIN_COLUMN_WIDTH).max(1);
        let visible = fits.min(total_columns);

        let first_column = if focus_column < visible {
            0
        } else {
            (focus_column + 1 - visible).min(total_columns - visible)
        };

        // `visible` is bounded by `area.width`, so it fits in a u32.
        let ratio = u32::try_from(visible).unwrap_or(u32::MAX);
        let areas = Layout::horizontal((0..visible).map(|_| Constraint::Ratio(1, ratio)))
            .split(area);

        let columns = areas
            .iter()
            .enumerate()
            .map(|(i, rect)| {
                let index = first_column + i;
                let kind = if index < board_count {
                    ColumnKind::Board(index)
                } else {
                    ColumnKind::AddBoard
                };
                let position = if visible == 1 {
                    ColumnPosition::Only
                } else if i + 1 == visible {
                    ColumnPosition::Last
                } else if i == 0 {
                    ColumnPosition::First
                } else {
                    ColumnPosition::Middle
                };
                ColumnSlot {
                    kind,
                    area: *rect,
                    position,
                }
            })
            .collect();

        Self {
            columns,
            first_column,
            total_columns,
        }
    }

    /// Returns `true` if columns are hidden to the left.
    #[must_use]
    pub fn has_hidden_left(&self) -> bool {
        self.first_column > 0
    }

    /// Returns `true` if columns are hidden to the right.
    #[must_use]
    pub fn has_hidden_right(&self) -> bool {
        self.first_column + self.columns.len() < self.total_columns
    }

    /// Returns the visible slot of a board, if it is on screen.
    #[must_use]
    pub fn board_slot(&self, board_index: usize) -> Option<&ColumnSlot> {
        self.columns
            .iter()
            .find(|slot| slot.kind == ColumnKind::Board(board_index))
    }

    /// Finds what lies at (`column`, `row`).
    ///
    /// `selection` must be the one the frame was rendered with, since the
    /// selected column scrolls its cards to keep the selected one visible.
    #[must_use]
    pub fn hit_test(&self, store: &Store, selection: Selection, column: u16, row: u16) -> Option<Hit> {
        let position = (column, row).into();
        let slot = self.columns.iter().find(|slot| slot.area.contains(position))?;

        let board_index = match slot.kind {
            ColumnKind::AddBoard => return Some(Hit::AddBoard),
            ColumnKind::Board(index) => index,
        };
        let board = store.boards().get(board_index)?;

        if row == slot.area.y {
            return Some(Hit::BoardHeader {
                id: board.id,
                board_index,
            });
        }

        let body = Hit::BoardBody {
            id: board.id,
            board_index,
        };
        let inner = column_inner(slot.area);
        if !inner.contains(position) {
            return Some(body);
        }

        let cards: Vec<CardId> = store.cards_on(board.id).map(|card| card.id).collect();
        let selected = (selection.board == board_index)
            .then_some(selection.card)
            .flatten();
        let offset = card_scroll_offset(selected, cards.len(), visible_card_count(inner));

        let slot_index = usize::from((row - inner.y) / CARD_HEIGHT);
        let card_index = offset + slot_index;
        match cards.get(card_index) {
            Some(&id) if slot_index < visible_card_count(inner) => Some(Hit::Card {
                id,
                board_index,
                card_index,
            }),
            _ => Some(body),
        }
    }
}

/// Returns the area inside a column's borders.
#[must_use]
pub fn column_inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Number of whole cards that fit in a column's inner area.
#[must_use]
pub fn visible_card_count(inner: Rect) -> usize {
    usize::from(inner.height / CARD_HEIGHT)
}

/// Returns the area of the card drawn in `slot` (0 = topmost visible).
#[must_use]
pub fn card_rect(inner: Rect, slot: usize) -> Rect {
    let offset = u16::try_from(slot)
        .unwrap_or(u16::MAX)
        .saturating_mul(CARD_HEIGHT);
    Rect {
        x: inner.x,
        y: inner.y.saturating_add(offset),
        width: inner.width,
        height: CARD_HEIGHT,
    }
    .intersection(inner)
}

/// Calculates the index of the first visible card so the selected card stays
/// in view.
#[must_use]
pub fn card_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible || visible == 0 {
        return 0;
    }

    let max_offset = total - visible;
    if selected < visible / 2 {
        0
    } else {
        (selected - visible / 2).min(max_offset)
    }
}

/// Creates a centered rectangle within a given area, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
