//! Identifiers for boards and cards.
//!
//! Boards and cards are keyed by integer identifiers. Both kinds are drawn
//! from the same [`IdGenerator`], so a board id never collides with a card id
//! produced by the same generator.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Unique identifier for a board.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::BoardId;
///
/// let id = BoardId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(u64);

impl BoardId {
    /// Wraps a raw integer identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for BoardId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a card.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::CardId;
///
/// let id = CardId::from(42);
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    /// Wraps a raw integer identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CardId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of identifiers.
///
/// Every call to [`IdGenerator::next`] returns a value that was never
/// returned before by the same generator. Identifiers supplied from outside
/// can be [reserved](IdGenerator::reserve) so the generator skips past them.
///
/// # Examples
///
/// ```
/// use cardwall_protocol::IdGenerator;
///
/// let ids = IdGenerator::new();
/// let a = ids.next();
/// let b = ids.next();
/// assert_ne!(a, b);
///
/// assert!(ids.reserve(100));
/// assert!(ids.next() > Some(100));
///
/// // The counter never wraps around.
/// assert!(!ids.reserve(u64::MAX));
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first identifier is `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns a fresh identifier, or `None` once every value up to
    /// `u64::MAX` has been handed out or reserved.
    pub fn next(&self) -> Option<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                next.checked_add(1)
            })
            .ok()
    }

    /// Returns a fresh board identifier.
    pub fn next_board_id(&self) -> Option<BoardId> {
        self.next().map(BoardId)
    }

    /// Returns a fresh card identifier.
    pub fn next_card_id(&self) -> Option<CardId> {
        self.next().map(CardId)
    }

    /// Ensures no future identifier equals `taken` or anything below it.
    ///
    /// Returns `false`, leaving the generator untouched, if `taken` is
    /// `u64::MAX`: nothing could be issued after it.
    #[must_use]
    pub fn reserve(&self, taken: u64) -> bool {
        match taken.checked_add(1) {
            Some(floor) => {
                self.next.fetch_max(floor, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    /// Returns the counter value the next call to [`IdGenerator::next`]
    /// hands out, if it is not exhausted.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IdGenerator {
    fn clone(&self) -> Self {
        Self::starting_at(self.peek())
    }
}
