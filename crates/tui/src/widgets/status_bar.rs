//! Status bar rendering widget.
//!
//! A single row at the bottom of the screen with the last status message
//! followed by the keybindings of the current mode.

use cardwall_protocol::{DragItem, Store};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::card::truncate_string;
use crate::state::{AppState, Focus};

/// Longest item title quoted in the status bar.
const MAX_TITLE_WIDTH: usize = 24;

fn hints_for(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match state.focus {
        Focus::Form => &[("Enter", "Save"), ("Tab", "Next field"), ("Esc", "Cancel")],
        Focus::Confirm => &[("y", "Delete"), ("n", "Keep")],
        Focus::Board if state.carry.is_some() => {
            &[("←→↑↓", "Move"), ("Space", "Drop"), ("Esc", "Cancel")]
        }
        Focus::Board if state.store.is_dragging() => &[("Release", "Drop")],
        Focus::Board => &[
            ("Ctrl+C", "Quit"),
            ("←→↑↓", "Navigate"),
            ("Space", "Pick up"),
            ("b", "Board"),
            ("n", "Card"),
            ("d", "Delete"),
            ("?", "Help"),
        ],
    }
}

/// Describes the dragged item, e.g. `Moving card "Write docs"`.
fn moving_label(store: &Store) -> Option<String> {
    let item = store.active_item()?;
    let title = match item {
        DragItem::Card(_) => &store.active_card()?.title,
        DragItem::Board(_) => &store.active_board()?.title,
    };
    let kind = item.kind();
    Some(format!(
        "Moving {kind} \"{}\"",
        truncate_string(title, MAX_TITLE_WIDTH)
    ))
}

/// Renders the status bar.
///
/// # Layout
///
/// ```text
/// Moving card "Write docs" | ←→↑↓ Move  Space Drop  Esc Cancel
/// ```
///
/// # Examples
///
/// ```
/// use cardwall_protocol::dummy::dummy_store;
/// use cardwall_tui::AppState;
/// use cardwall_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let state = AppState::new(dummy_store());
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&state, area, &mut buf);
/// ```
pub fn render_status_bar(state: &AppState, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let separator_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    let message = moving_label(&state.store)
        .map(|label| {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .or_else(|| {
            state
                .status
                .as_deref()
                .map(|status| Span::styled(status.to_string(), Style::default().fg(Color::Cyan)))
        });
    if let Some(message) = message {
        spans.push(Span::raw(" "));
        spans.push(message);
        spans.push(Span::styled(" | ", separator_style));
    } else {
        spans.push(Span::raw(" "));
    }

    for (i, (key, text)) in hints_for(state).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {text}"), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use cardwall_protocol::dummy::dummy_store;

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(state, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn board_focus_shows_navigation_hints() {
        let content = render(&AppState::new(dummy_store()));
        assert!(content.contains("Quit"));
        assert!(content.contains("Navigate"));
        assert!(content.contains("? Help"));
    }

    #[test]
    fn status_message_precedes_hints() {
        let mut state = AppState::new(dummy_store());
        state.status = Some("Nothing to pick up".to_string());

        let content = render(&state);
        let message = content.find("Nothing to pick up").expect("message shown");
        let hints = content.find("Quit").expect("hints shown");
        assert!(message < hints);
    }

    #[test]
    fn keyboard_carry_names_the_item() {
        let mut state = AppState::new(dummy_store());
        state.navigate_down();
        let title = state.selected_card().map(|c| c.title.clone()).expect("card");
        state.pick_up();

        let content = render(&state);
        assert!(content.contains(&format!("Moving card \"{title}\"")));
        assert!(content.contains("Space Drop"));
    }

    #[test]
    fn keyboard_board_carry_names_the_board() {
        let mut state = AppState::new(dummy_store());
        state.pick_up();

        let content = render(&state);
        assert!(content.contains("Moving board \"To Do\""));
    }

    #[test]
    fn form_focus_shows_form_hints() {
        let mut state = AppState::new(dummy_store());
        state.open_new_board_form();

        let content = render(&state);
        assert!(content.contains("Tab Next field"));
        assert!(!content.contains("Navigate"));
    }

    #[test]
    fn confirm_focus_shows_confirm_hints() {
        let mut state = AppState::new(dummy_store());
        state.request_delete();

        let content = render(&state);
        assert!(content.contains("y Delete"));
        assert!(content.contains("n Keep"));
    }
}
