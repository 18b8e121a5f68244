//! Sample walls for demonstration and tests.
//!
//! # Examples
//!
//! ```
//! use cardwall_protocol::dummy::dummy_store;
//!
//! let store = dummy_store();
//! assert_eq!(store.boards().len(), 3);
//! assert_eq!(store.cards().len(), 8);
//! ```

use crate::error::Result;
use crate::id::BoardId;
use crate::store::Store;

/// A builder for one board and the cards on it.
struct BoardBuilder {
    title: String,
    cards: Vec<(String, String)>,
}

impl BoardBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cards: Vec::new(),
        }
    }

    /// Queues a card for this board.
    fn card(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.cards.push((title.into(), description.into()));
        self
    }

    /// Adds the board and its cards to the store.
    fn build(self, store: &mut Store) -> Result<BoardId> {
        let board = store.add_board(self.title)?;
        for (title, description) in self.cards {
            store.create_card(board, title, description)?;
        }
        Ok(board)
    }
}

fn populate(store: &mut Store) -> Result<()> {
    BoardBuilder::new("To Do")
        .card(
            "Set up CI pipeline",
            "Run tests and clippy on every push",
        )
        .card(
            "Write API documentation",
            "Every public item gets an example",
        )
        .card(
            "Add configuration file support",
            "Load JSON5 from the local directory or the user config dir",
        )
        .build(store)?;

    BoardBuilder::new("In Progress")
        .card(
            "Implement board view",
            "Equal-width columns with horizontal scrolling",
        )
        .card(
            "Pointer drag support",
            "Press, travel past the activation distance, release",
        )
        .build(store)?;

    BoardBuilder::new("Done")
        .card("Project scaffolding", "Workspace with protocol, config and tui crates")
        .card("Identifier generator", "Monotonic ids shared by boards and cards")
        .card("Ordering engine", "Live card preview and board commit on drop")
        .build(store)?;

    Ok(())
}

/// Builds a store with three boards and eight cards spread across them.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::dummy::dummy_store;
///
/// let store = dummy_store();
/// let titles: Vec<_> = store.boards().iter().map(|b| b.title.as_str()).collect();
/// assert_eq!(titles, ["To Do", "In Progress", "Done"]);
/// ```
#[must_use]
pub fn dummy_store() -> Store {
    let mut store = Store::new();
    // Every sample title and description is non-empty.
    if let Err(err) = populate(&mut store) {
        tracing::warn!(%err, "failed to build sample wall");
    }
    store
}

/// Builds a store with one empty board per title, skipping blank titles.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::dummy::store_with_boards;
///
/// let store = store_with_boards(["Backlog", "", "Shipped"]);
/// assert_eq!(store.boards().len(), 2);
/// assert!(store.cards().is_empty());
/// ```
#[must_use]
pub fn store_with_boards<I, S>(titles: I) -> Store
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut store = Store::new();
    for title in titles {
        // Blank titles are rejected and logged by the store.
        let _ = store.add_board(title);
    }
    store
}
