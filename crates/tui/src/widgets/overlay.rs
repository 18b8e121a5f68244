//! Drag overlay: the dragged item floating under the pointer.

use cardwall_protocol::{DragItem, Store};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::card::truncate_string;
use crate::drag::Position;
use crate::layout::CARD_HEIGHT;

/// Width of the floating box.
const OVERLAY_WIDTH: u16 = 26;

/// Places the overlay just right of and below the pointer, shifted back
/// inside `area` when it would overflow.
fn overlay_rect(position: Position, area: Rect) -> Rect {
    let width = OVERLAY_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let max_x = (area.x + area.width).saturating_sub(width);
    let max_y = (area.y + area.height).saturating_sub(height);
    Rect {
        x: position.0.saturating_add(1).clamp(area.x, max_x.max(area.x)),
        y: position.1.saturating_add(1).clamp(area.y, max_y.max(area.y)),
        width,
        height,
    }
}

/// Renders the item being dragged in a highlighted box near `position`.
///
/// Does nothing if `item` no longer exists.
pub fn render_drag_overlay(
    store: &Store,
    item: DragItem,
    position: Position,
    area: Rect,
    buf: &mut Buffer,
) {
    let (title, detail) = match item {
        DragItem::Card(id) => {
            let Some(card) = store.card(id) else {
                return;
            };
            (card.title.as_str(), card.description.clone())
        }
        DragItem::Board(id) => {
            let Some(board) = store.board(id) else {
                return;
            };
            let count = store.card_count_on(id);
            (board.title.as_str(), format!("board, {count} cards"))
        }
    };

    let rect = overlay_rect(position, area);
    if rect.width < 4 || rect.height < 3 {
        return;
    }
    Clear.render(rect, buf);

    let inner_width = usize::from(rect.width.saturating_sub(2));
    Paragraph::new(vec![
        Line::from(Span::styled(
            truncate_string(title, inner_width),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_string(&detail, inner_width),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .render(rect, buf);
}
