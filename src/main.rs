//! cardwall - a drag-and-drop Kanban board for the terminal.

use anyhow::Context;
use cardwall_config::Config;
use cardwall_protocol::Store;
use cardwall_protocol::dummy::{dummy_store, store_with_boards};
use cardwall_tui::{App, terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs a file subscriber. The terminal is owned by the TUI, so nothing
/// is ever written to stdout or stderr.
fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    let path = config.logging.file_path()?;
    let dir = path
        .parent()
        .context("log file path has no parent directory")?;
    let file_name = path
        .file_name()
        .context("log file path has no file name")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));
    let filter = EnvFilter::try_new(config.logging.filter_directive())
        .unwrap_or_else(|_| EnvFilter::new(cardwall_config::logging::DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(guard)
}

fn initial_store(config: &Config) -> Store {
    if config.demo {
        dummy_store()
    } else {
        store_with_boards(config.initial_boards.iter().cloned())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("loading configuration")?;
    let _guard = init_logging(&config)?;
    tracing::info!(
        boards = config.initial_boards.len(),
        demo = config.demo,
        "configuration loaded"
    );

    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(initial_store(&config), config);
    let result = app.run(&mut terminal).await;

    terminal::restore_terminal(&mut terminal)?;
    if let Err(err) = &result {
        tracing::error!(error = %err, "cardwall exited with an error");
    }
    result
}
