//! Wall rendering: every visible column side by side.

use cardwall_protocol::{Card, DragItem};
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
};

use super::column::{ColumnView, render_add_board_column, render_column};
use crate::layout::{ColumnKind, WallLayout};
use crate::state::AppState;

/// Marker drawn on the edge of the wall when columns are scrolled out.
const HIDDEN_LEFT: &str = "◀";
const HIDDEN_RIGHT: &str = "▶";

/// Renders the wall described by `layout`.
///
/// `over` is the current hover target of a drag, if one is in progress.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::dummy::dummy_store;
/// use cardwall_tui::AppState;
/// use cardwall_tui::layout::WallLayout;
/// use cardwall_tui::widgets::render_wall;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let state = AppState::new(dummy_store());
/// let area = Rect::new(0, 0, 100, 20);
/// let layout = WallLayout::new(area, state.store.boards().len(), state.focus_column());
/// let mut buf = Buffer::empty(area);
///
/// render_wall(&state, &layout, None, &mut buf);
/// ```
pub fn render_wall(
    state: &AppState,
    layout: &WallLayout,
    over: Option<DragItem>,
    buf: &mut Buffer,
) {
    let active = state.store.active_item();
    let focus = state.focus_column();

    for (i, slot) in layout.columns.iter().enumerate() {
        let index = match slot.kind {
            ColumnKind::Board(index) => index,
            ColumnKind::AddBoard => {
                render_add_board_column(slot, buf);
                continue;
            }
        };
        let Some(board) = state.store.boards().get(index) else {
            continue;
        };
        let cards: Vec<&Card> = state.store.cards_on(board.id).collect();
        let view = ColumnView {
            focused: index == focus,
            prev_focused: i > 0 && index == focus + 1,
            selected_card: (index == state.selected_board)
                .then_some(state.selected_card)
                .flatten(),
            active,
            over,
        };
        render_column(board, &cards, view, slot, buf);
    }

    render_scroll_markers(layout, buf);
}

fn render_scroll_markers(layout: &WallLayout, buf: &mut Buffer) {
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    if layout.has_hidden_left()
        && let Some(first) = layout.columns.first()
    {
        let area = first.area;
        buf.set_string(area.x, area.y + area.height / 2, HIDDEN_LEFT, style);
    }
    if layout.has_hidden_right()
        && let Some(last) = layout.columns.last()
    {
        let area = last.area;
        let x = (area.x + area.width).saturating_sub(1);
        buf.set_string(x, area.y + area.height / 2, HIDDEN_RIGHT, style);
    }
}
