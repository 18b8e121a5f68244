//! Modal form state for creating boards and cards.

use cardwall_protocol::BoardId;

/// What the open form creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// A new board appended to the wall.
    NewBoard,
    /// A new card appended to a board.
    NewCard {
        /// The board receiving the card.
        board: BoardId,
    },
}

/// One labelled text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Label shown above the input.
    pub label: &'static str,
    /// Current text.
    pub value: String,
}

impl FormField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }
}

/// State of the open modal form.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::BoardId;
/// use cardwall_tui::form::FormState;
///
/// let mut form = FormState::new_card(BoardId::new(1));
/// form.input_char('H');
/// form.input_char('i');
/// form.next_field();
/// form.input_char('!');
///
/// assert_eq!(form.value(0), "Hi");
/// assert_eq!(form.value(1), "!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: Vec<FormField>,
    focused: usize,
    error: Option<String>,
}

impl FormState {
    /// Opens the "New board" form.
    #[must_use]
    pub fn new_board() -> Self {
        Self {
            kind: FormKind::NewBoard,
            fields: vec![FormField::new("Title")],
            focused: 0,
            error: None,
        }
    }

    /// Opens the "New card" form for `board`.
    #[must_use]
    pub fn new_card(board: BoardId) -> Self {
        Self {
            kind: FormKind::NewCard { board },
            fields: vec![FormField::new("Title"), FormField::new("Description")],
            focused: 0,
            error: None,
        }
    }

    /// Returns what the form creates.
    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Returns the title shown on the modal border.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self.kind {
            FormKind::NewBoard => "New board",
            FormKind::NewCard { .. } => "New card",
        }
    }

    /// Returns the fields in display order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Returns the index of the focused field.
    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Returns the text of a field, or `""` if there is no such field.
    #[must_use]
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map_or("", |field| field.value.as_str())
    }

    /// Returns the last validation error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shows a validation error; the form stays open.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.push(ch);
        }
        self.error = None;
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len().max(1);
    }
}
