//! Test utilities for the TUI crate.
//!
//! Rendering tests draw into a [`Buffer`] and assert on its text.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes one line; trailing spaces are trimmed so
/// `contains` checks and row lookups stay independent of the width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn rows_become_trimmed_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        buf.set_string(2, 1, "Hi", Style::default());

        assert_eq!(buffer_to_string(&buf), "\n  Hi\n");
    }
}
