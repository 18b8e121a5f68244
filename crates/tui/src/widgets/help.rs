//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 24;

/// Renders a centered help overlay displaying all keybindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use cardwall_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(text, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        binding("← →", "Previous / next board"),
        binding("↑ ↓", "Previous / next card"),
        binding("Esc", "Clear card selection"),
        Line::from(""),
        Line::from(Span::styled("  Moving", header_style)),
        binding("Space", "Pick up / drop"),
        binding("← → ↑ ↓", "Move carried item"),
        binding("Esc", "Cancel move"),
        binding("Mouse", "Drag a card or title"),
        Line::from(""),
        Line::from(Span::styled("  Editing", header_style)),
        binding("b", "New board"),
        binding("n", "New card"),
        binding("d", "Delete board"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        binding("?", "Toggle help"),
        binding("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}
