//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use cardwall_config::Config;
use cardwall_protocol::{DragItem, Message, Store};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::{
    AppState, Focus,
    drag::{PointerMotion, PointerTracker},
    event::{event_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, Hit, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        WallLayout,
    },
    state::Direction,
    terminal::AppTerminal,
    widgets::{
        render_confirm_modal, render_drag_overlay, render_form_modal, render_help_overlay,
        render_status_bar, render_wall,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects hit-testing).
    header_visible: bool,
    /// The mouse drag gesture in progress.
    pointer: PointerTracker,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application around `store` with the default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_protocol::Store;
    /// use cardwall_tui::App;
    ///
    /// let app = App::new(Store::new());
    /// ```
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a new application around `store` with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardwall_config::Config;
    /// use cardwall_protocol::dummy::dummy_store;
    /// use cardwall_tui::App;
    ///
    /// let app = App::with_config(dummy_store(), Config::default());
    /// assert_eq!(app.state().store.boards().len(), 3);
    /// ```
    #[must_use]
    pub fn with_config(store: Store, config: Config) -> Self {
        Self {
            state: AppState::new(store),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            pointer: PointerTracker::new(config.drag.activation_distance),
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit`,
    /// `PointerLost` and `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::PointerLost => {
                self.cancel_pointer_drag();
                return;
            }
            _ => {}
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                // Motion and release of a gesture that started under the help
                // overlay are not key presses.
                Message::PointerDrag { .. } | Message::PointerUp { .. } => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match self.state.focus {
            Focus::Form => self.update_form(msg),
            Focus::Confirm => match msg {
                Message::Confirm => self.state.confirm_delete(),
                Message::Escape => self.state.cancel_delete(),
                _ => {}
            },
            Focus::Board => self.update_board(msg),
        }
    }

    fn update_form(&mut self, msg: Message) {
        match msg {
            Message::Escape => self.state.close_form(),
            Message::FormSubmit => self.state.submit_form(),
            Message::FormInput { ch } => {
                if let Some(form) = self.state.form.as_mut() {
                    form.input_char(ch);
                }
            }
            Message::FormBackspace => {
                if let Some(form) = self.state.form.as_mut() {
                    form.backspace();
                }
            }
            Message::FormNextField => {
                if let Some(form) = self.state.form.as_mut() {
                    form.next_field();
                }
            }
            _ => {}
        }
    }

    fn update_board(&mut self, msg: Message) {
        let busy = self.state.carry.is_some() || self.pointer.is_pressed();
        match msg {
            Message::Escape => {
                if self.state.carry.is_some() {
                    self.state.cancel_carry();
                } else if self.pointer.is_dragging() {
                    self.cancel_pointer_drag();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => self.navigate(Direction::Left),
            Message::NavigateRight => self.navigate(Direction::Right),
            Message::NavigateUp => self.navigate(Direction::Up),
            Message::NavigateDown => self.navigate(Direction::Down),
            Message::PickUp if !self.pointer.is_pressed() => self.state.pick_up(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NewBoard | Message::NewCard | Message::DeleteBoard if busy => {
                self.state.status = Some("Drop the item first".to_string());
            }
            Message::NewBoard => self.state.open_new_board_form(),
            Message::NewCard => self.state.open_new_card_form(),
            Message::DeleteBoard => self.state.request_delete(),
            Message::PointerDown { column, row } => self.pointer_down(column, row),
            Message::PointerDrag { column, row } => self.pointer_drag(column, row),
            Message::PointerUp { column, row } => self.pointer_up(column, row),
            _ => {}
        }
    }

    fn navigate(&mut self, direction: Direction) {
        if self.state.carry.is_some() {
            self.state.carry_move(direction);
            return;
        }
        match direction {
            Direction::Left => self.state.navigate_left(),
            Direction::Right => self.state.navigate_right(),
            Direction::Up => self.state.navigate_up(),
            Direction::Down => self.state.navigate_down(),
        }
    }

    /// Computes the wall area of the last render: the full area minus the
    /// header (if it was shown) and the status bar.
    fn wall_area(&self) -> Rect {
        let header_offset = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    fn wall_layout(&self, area: Rect) -> WallLayout {
        WallLayout::new(
            area,
            self.state.store.boards().len(),
            self.state.focus_column(),
        )
    }

    fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        self.wall_layout(self.wall_area())
            .hit_test(&self.state.store, self.state.selection(), column, row)
    }

    /// Resolves what `active` would be dropped on at (`column`, `row`).
    ///
    /// A board hovering anywhere over a column, its cards included, targets
    /// that column's board.
    fn drop_target(&self, active: DragItem, column: u16, row: u16) -> Option<DragItem> {
        let hit = self.hit_test(column, row)?;
        match (active, hit) {
            (DragItem::Board(_), Hit::Card { board_index, .. }) => self
                .state
                .store
                .boards()
                .get(board_index)
                .map(|board| DragItem::Board(board.id)),
            _ => hit.drop_target(),
        }
    }

    /// Handles a left-button press: selects what was hit and arms a drag if
    /// the press landed on a drag handle.
    fn pointer_down(&mut self, column: u16, row: u16) {
        if self.state.carry.is_some() {
            return;
        }
        let hit = self.hit_test(column, row);
        match hit {
            Some(Hit::AddBoard) => self.state.open_new_board_form(),
            Some(Hit::Card { id, .. }) => self.state.select_item(DragItem::Card(id)),
            Some(Hit::BoardHeader { id, .. } | Hit::BoardBody { id, .. }) => {
                self.state.select_item(DragItem::Board(id));
            }
            None => {}
        }
        self.pointer
            .press(hit.and_then(Hit::drag_handle), (column, row));
    }

    fn pointer_drag(&mut self, column: u16, row: u16) {
        let active = match self.pointer.motion((column, row)) {
            None => return,
            Some(PointerMotion::Started(item)) => {
                self.state.store.on_drag_start(item);
                debug!(?item, column, row, "pointer drag started");
                item
            }
            Some(PointerMotion::Moved(item)) => item,
        };

        let over = self.drop_target(active, column, row);
        self.state.store.on_drag_over(active, over);
        self.pointer.set_over(over);
        self.state.clamp_selection();
    }

    fn pointer_up(&mut self, column: u16, row: u16) {
        let Some(active) = self.pointer.release() else {
            return;
        };
        let over = self.drop_target(active, column, row);
        let outcome = self.state.store.on_drag_end(active, over);
        self.state.select_item(active);
        debug!(?active, ?over, ?outcome, "pointer drag ended");
    }

    fn cancel_pointer_drag(&mut self) {
        if let Some((active, _)) = self.pointer.dragging() {
            self.state.store.on_drag_end(active, None);
            self.state.select_item(active);
            debug!(?active, "pointer drag cancelled");
        }
        self.pointer.reset();
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let [header_area, wall_area, status_area] = Layout::vertical([
            Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if show_header {
            self.render_header(frame, header_area);
        }

        let layout = self.wall_layout(wall_area);
        let over = self
            .state
            .carry
            .and_then(|carry| carry.over)
            .or_else(|| self.pointer.over());
        let buf = frame.buffer_mut();
        render_wall(&self.state, &layout, over, buf);
        render_status_bar(&self.state, status_area, buf);

        if let Some((item, position)) = self.pointer.dragging() {
            render_drag_overlay(&self.state.store, item, position, wall_area, buf);
        }

        match self.state.focus {
            Focus::Form => {
                if let Some(form) = &self.state.form {
                    render_form_modal(form, area, buf);
                }
            }
            Focus::Confirm => {
                if let Some(board) = self
                    .state
                    .pending_delete
                    .and_then(|id| self.state.store.board(id))
                {
                    let cards = self.state.store.card_count_on(board.id);
                    render_confirm_modal(board, cards, area, buf);
                }
            }
            Focus::Board => {}
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cardwall_protocol::Store;
    /// use cardwall_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Store::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(
            boards = self.state.store.boards().len(),
            cards = self.state.store.cards().len(),
            "starting event loop"
        );

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.focus)
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        info!("quit requested");
        Ok(())
    }

    /// Renders the header bar with title, counts and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let counts = format!(
            "  {} boards, {} cards",
            self.state.store.boards().len(),
            self.state.store.cards().len()
        );
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "cardwall",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
            Span::styled(counts, Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + vertical_offset,
        width: area.width,
        height: area.height.saturating_sub(vertical_offset),
    };

    frame.render_widget(paragraph, centered_area);
}
