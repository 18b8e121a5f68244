//! Modal dialogs: the "new board" / "new card" form and the delete
//! confirmation.

use cardwall_protocol::Board;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::card::truncate_string;
use crate::form::FormState;
use crate::layout::centered_rect;

/// Width of both modals.
const MODAL_WIDTH: u16 = 50;

/// Rows per form field: label and input.
const FIELD_HEIGHT: u16 = 2;

/// Height of the delete confirmation.
const CONFIRM_HEIGHT: u16 = 7;

fn modal_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Renders the open form centered in `area`.
///
/// ```text
/// ╭ New card ──────────────────────────────╮
/// │ Title                                  │
/// │ > Write docs_                          │
/// │ Description                            │
/// │   README first                         │
/// │                                        │
/// │ Enter Save  Tab Next field  Esc Cancel │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use cardwall_tui::form::FormState;
/// use cardwall_tui::widgets::render_form_modal;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let form = FormState::new_board();
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_form_modal(&form, area, &mut buf);
/// ```
pub fn render_form_modal(form: &FormState, area: Rect, buf: &mut Buffer) {
    let field_count = u16::try_from(form.fields().len()).unwrap_or(u16::MAX);
    // Borders, fields, error line, hint line.
    let height = field_count
        .saturating_mul(FIELD_HEIGHT)
        .saturating_add(4);
    let popup = centered_rect(MODAL_WIDTH, height, area);
    Clear.render(popup, buf);

    let block = modal_block(form.heading(), Color::Cyan);
    let inner = block.inner(popup);
    block.render(popup, buf);

    let input_width = usize::from(inner.width.saturating_sub(4));
    let label_style = Style::default().fg(Color::Yellow);
    let mut lines = Vec::with_capacity(form.fields().len() * 2 + 2);
    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == form.focused();
        lines.push(Line::from(Span::styled(format!(" {}", field.label), label_style)));

        let (prefix, cursor, style) = if focused {
            (
                " > ",
                "_",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("   ", "", Style::default().fg(Color::Gray))
        };
        let value = tail(&field.value, input_width);
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Cyan)),
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(match form.error() {
        Some(error) => Line::from(Span::styled(
            format!(" {}", truncate_string(error, usize::from(inner.width).saturating_sub(1))),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    });
    lines.push(hint_line(&[
        ("Enter", "Save"),
        ("Tab", "Next field"),
        ("Esc", "Cancel"),
    ]));

    Paragraph::new(lines).render(inner, buf);
}

/// Renders the delete confirmation for `board`.
pub fn render_confirm_modal(board: &Board, card_count: usize, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(MODAL_WIDTH, CONFIRM_HEIGHT, area);
    Clear.render(popup, buf);

    let block = modal_block("Delete board", Color::Red);
    let inner = block.inner(popup);
    block.render(popup, buf);

    let title_width = usize::from(inner.width.saturating_sub(4));
    let cards = match card_count {
        1 => "its card".to_string(),
        n => format!("its {n} cards"),
    };
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);

    Paragraph::new(Line::from(Span::styled(
        format!("\"{}\"", truncate_string(&board.title, title_width)),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .render(rows[0], buf);

    Paragraph::new(Line::from(Span::styled(
        format!("will be deleted with {cards}."),
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
    .render(rows[1], buf);

    Paragraph::new(hint_line(&[("y", "Delete"), ("n", "Keep")]))
        .alignment(Alignment::Center)
        .render(rows[4], buf);
}

/// Returns the last `width` characters of `value`, so the cursor end of a
/// long input stays visible.
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    value.chars().skip(count.saturating_sub(width)).collect()
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, text)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}"), text_style));
    }
    Line::from(spans)
}
