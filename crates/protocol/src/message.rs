//! TUI message types for event handling.
//!
//! Input handlers turn terminal events into [`Message`]s, and the application
//! state consumes them.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::Message;
///
/// let msg = Message::PointerDown { column: 4, row: 7 };
/// assert!(msg.is_pointer());
/// assert!(!msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection (or the keyboard drag target) one board to the left.
    NavigateLeft,
    /// Move selection (or the keyboard drag target) one board to the right.
    NavigateRight,
    /// Move selection (or the keyboard drag target) up within a board.
    NavigateUp,
    /// Move selection (or the keyboard drag target) down within a board.
    NavigateDown,
    /// Close the open overlay, cancel a keyboard drag, or clear selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Pick up the selected item, or drop the item being carried.
    PickUp,
    /// Open the form for a new board.
    NewBoard,
    /// Open the form for a new card on the selected board.
    NewCard,
    /// Ask to delete the selected board.
    DeleteBoard,
    /// Accept a pending confirmation prompt.
    Confirm,

    // --- Form messages ---
    /// Input a character into the focused form field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused form field.
    FormBackspace,
    /// Focus the next form field.
    FormNextField,
    /// Submit the open form.
    FormSubmit,

    // --- Pointer messages ---
    /// Left button pressed at (column, row).
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved with the left button held.
    PointerDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released at (column, row).
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// The terminal lost focus; a release may never arrive.
    PointerLost,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::PickUp.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message comes from the mouse.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerDrag { .. }
                | Self::PointerUp { .. }
                | Self::PointerLost
        )
    }

    /// Returns `true` if this message edits an open form.
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInput { .. } | Self::FormBackspace | Self::FormNextField | Self::FormSubmit
        )
    }
}
