//! Terminal modes for the wall.
//!
//! cardwall needs four things from the terminal: raw mode for key handling,
//! the alternate screen, mouse capture for pointer drags, and focus reports
//! so a drag whose button release happens outside the window can be dropped
//! (see [`Message::PointerLost`]). Entering and leaving those modes goes
//! through one pair of functions, shared by normal shutdown, a failed setup,
//! and the panic hook.
//!
//! [`Message::PointerLost`]: cardwall_protocol::Message::PointerLost

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

fn enter_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)
}

/// Undoes [`enter_screen`] in reverse order and shows the cursor ratatui hid.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(
        out,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )
}

/// Best effort; the original error is what gets reported.
fn roll_back(out: &mut impl Write) {
    let _ = leave_screen(out);
    let _ = disable_raw_mode();
}

/// Puts the terminal in the modes the wall runs in.
///
/// If any step fails, the steps already taken are undone before the error
/// is returned, so the shell is never left in raw mode.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if a mode cannot be entered.
///
/// # Examples
///
/// ```no_run
/// use cardwall_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    if let Err(err) = enter_screen(&mut stdout) {
        roll_back(&mut stdout);
        return Err(TerminalError::Setup(err));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|err| {
        roll_back(&mut io::stdout());
        TerminalError::Setup(err)
    })
}

/// Leaves every mode entered by [`setup_terminal`].
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if a mode cannot be left.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    leave_screen(terminal.backend_mut()).map_err(TerminalError::Restore)
}

/// Installs a panic hook that leaves the wall's terminal modes before the
/// previous hook prints the panic.
///
/// Call it once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        roll_back(&mut io::stdout());
        original_hook(panic_info);
    }));
}
