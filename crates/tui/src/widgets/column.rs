//! Board column rendering widget.
//!
//! Columns sit side by side and share their vertical borders: each column
//! draws its left border only, and the last one also draws the right border.

use cardwall_protocol::{Board, Card, DragItem};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::card::{CardLook, render_card, truncate_string};
use crate::layout::{
    ColumnPosition, ColumnSlot, card_rect, card_scroll_offset, visible_card_count,
};

/// Border set for the first column: rounded corners on the left, no right
/// border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on the left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last column: T-connectors on the left, rounded on the
/// right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Per-column rendering flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnView {
    /// The column holds the selected board.
    pub focused: bool,
    /// The column to the left is focused; the shared border is highlighted.
    pub prev_focused: bool,
    /// Index of the selected card, meaningful when `focused`.
    pub selected_card: Option<usize>,
    /// The item being dragged, if any.
    pub active: Option<DragItem>,
    /// The item under the dragged item, if any.
    pub over: Option<DragItem>,
}

fn border_set(position: ColumnPosition) -> border::Set<'static> {
    match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
        ColumnPosition::Only => border::ROUNDED,
    }
}

fn borders(position: ColumnPosition) -> Borders {
    match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last | ColumnPosition::Only => Borders::ALL,
    }
}

/// Paints the left border of `area` with `style`.
fn restyle_left_border(area: Rect, style: Style, buf: &mut Buffer) {
    if area.width == 0 {
        return;
    }
    for y in area.y..area.y.saturating_add(area.height) {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_style(style);
        }
    }
}

/// Renders one board column with its cards.
///
/// The title row shows the board title and its card count. Cards are drawn
/// top to bottom in display order; the focused column scrolls to keep the
/// selected card visible. Empty boards show a "No cards" placeholder.
///
/// ```text
/// ╭ To Do (2) ─────────┬ Done (0) ──────────╮
/// │┌─────────────────┐ │No cards            │
/// ││ Write docs      │ │                    │
/// ││ README first    │ │                    │
/// │└─────────────────┘ │                    │
/// ╰────────────────────┴────────────────────╯
/// ```
pub fn render_column(
    board: &Board,
    cards: &[&Card],
    view: ColumnView,
    slot: &ColumnSlot,
    buf: &mut Buffer,
) {
    let area = slot.area;
    let is_drop_target = view.over == Some(DragItem::Board(board.id));
    let is_lifted = view.active == Some(DragItem::Board(board.id));

    let border_color = if is_drop_target {
        Color::Yellow
    } else if view.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title_style = if is_lifted {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if view.focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let title_width = usize::from(area.width.saturating_sub(4));
    let title = truncate_string(&format!("{} ({})", board.title, cards.len()), title_width);

    let block = Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .borders(borders(slot.position))
        .border_set(border_set(slot.position))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    if view.prev_focused && !view.focused && !is_drop_target {
        restyle_left_border(area, Style::default().fg(Color::Cyan), buf);
    }

    if cards.is_empty() {
        render_placeholder("No cards", inner, buf);
        return;
    }

    let visible = visible_card_count(inner);
    let selected = view.selected_card.filter(|_| view.focused);
    let offset = card_scroll_offset(selected, cards.len(), visible);

    for (slot_index, card) in cards.iter().skip(offset).take(visible.max(1)).enumerate() {
        let item = DragItem::Card(card.id);
        let look = if view.active == Some(item) {
            CardLook::Lifted
        } else if view.over == Some(item) {
            CardLook::DropTarget
        } else if selected == Some(offset + slot_index) {
            CardLook::Selected
        } else {
            CardLook::Normal
        };
        render_card(card, look, card_rect(inner, slot_index), buf);
    }
}

/// Renders the trailing column that invites creating a board.
pub fn render_add_board_column(slot: &ColumnSlot, buf: &mut Buffer) {
    let block = Block::default()
        .borders(borders(slot.position))
        .border_set(border_set(slot.position))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(slot.area);
    block.render(slot.area, buf);

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    Paragraph::new(vec![
        Line::from(Span::styled("+ Add board", Style::default().fg(Color::White))),
        Line::from(vec![
            Span::styled("press ", text_style),
            Span::styled("b", key_style),
        ]),
    ])
    .render(inner, buf);
}

fn render_placeholder(text: &'static str, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}
