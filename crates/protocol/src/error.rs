//! Error types for the cardwall-protocol crate.
//!
//! Drag events never fail; lookups that miss turn into no-ops. Errors are only
//! raised when creating boards and cards from user input.

use thiserror::Error;

use crate::id::{BoardId, CardId};

/// Errors that can occur when adding entities to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// A board title was empty.
    #[error("invalid board title: title cannot be empty")]
    EmptyBoardTitle,

    /// A card title was empty.
    #[error("invalid card title: title cannot be empty")]
    EmptyCardTitle,

    /// A card description was empty.
    #[error("invalid card description: description cannot be empty")]
    EmptyCardDescription,

    /// A card referenced a board that does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// A card with the same identifier is already on the wall.
    #[error("duplicate card id: {0}")]
    DuplicateCardId(CardId),

    /// A card id was too large to leave room for later identifiers.
    #[error("card id out of range: {0}")]
    CardIdOutOfRange(CardId),

    /// Every identifier has been handed out.
    #[error("no identifiers left")]
    IdsExhausted,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
