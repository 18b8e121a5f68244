//! Card tile rendering widget.

use cardwall_protocol::Card;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// How a card tile is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLook {
    /// Plain tile.
    #[default]
    Normal,
    /// The selected card of the focused board.
    Selected,
    /// The card being dragged; drawn dimmed where it will land.
    Lifted,
    /// The card under the dragged item.
    DropTarget,
}

impl CardLook {
    fn border_color(self) -> Color {
        match self {
            Self::Normal => Color::DarkGray,
            Self::Selected => Color::Cyan,
            Self::Lifted => Color::Gray,
            Self::DropTarget => Color::Yellow,
        }
    }
}

/// Renders a card tile: title on the first row, description below.
///
/// ```text
/// ┌────────────────┐
/// │ Title          │
/// │ description... │
/// └────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use cardwall_protocol::{BoardId, Card, CardId};
/// use cardwall_tui::widgets::{CardLook, render_card};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let card = Card::new(CardId::new(2), BoardId::new(1), "Write docs", "README first");
/// let area = Rect::new(0, 0, 20, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&card, CardLook::Selected, area, &mut buf);
/// ```
pub fn render_card(card: &Card, look: CardLook, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (title_style, desc_style) = match look {
        CardLook::Selected => (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        CardLook::Lifted => (
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            Style::default().fg(Color::DarkGray),
        ),
        CardLook::Normal | CardLook::DropTarget => (
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let border_type = if look == CardLook::Lifted {
        BorderType::Rounded
    } else {
        BorderType::Plain
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let content = vec![
        Line::from(Span::styled(
            truncate_string(&card.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(&card.description, inner_width),
            desc_style,
        )),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(look.border_color())),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use cardwall_protocol::{BoardId, CardId};

    fn card(title: &str, description: &str) -> Card {
        Card::new(CardId::new(1), BoardId::new(1), title, description)
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
    }

    #[test]
    fn truncate_string_very_short_max() {
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }

    #[test]
    fn truncate_string_counts_chars_not_bytes() {
        assert_eq!(truncate_string("Ünïcödé!", 8), "Ünïcödé!");
        assert_eq!(truncate_string("Ünïcödé!", 6), "Ünï...");
    }

    #[test]
    fn render_card_shows_title_and_description() {
        let area = Rect::new(0, 0, 24, 4);
        let mut buf = Buffer::empty(area);

        render_card(&card("Fix login", "Users can't log in"), CardLook::Normal, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Fix login"));
        assert!(content.contains("Users can't log in"));
    }

    #[test]
    fn render_card_truncates_long_description() {
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);

        render_card(
            &card("T", "A very long description indeed"),
            CardLook::Normal,
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("A very ..."));
    }

    #[test]
    fn selected_card_uses_highlight_border() {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);

        render_card(&card("Title", "Desc"), CardLook::Selected, area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
    }

    #[test]
    fn render_card_skips_tiny_area() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        render_card(&card("Title", "Desc"), CardLook::Normal, area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "\n\n");
    }
}
