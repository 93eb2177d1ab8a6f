//! Error types for arcade operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The code is not exactly two characters long.
    #[error("invalid card: expected 2 characters, got {0}")]
    InvalidLength(usize),
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid card rank {0:?}")]
    InvalidRank(char),
    /// The suit character is not one of `cdhs`.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(char),
}

/// Errors that can occur during hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The board does not hold 3 to 5 cards.
    #[error("board must hold 3 to 5 cards, got {0}")]
    BoardSize(usize),
    /// The same card appears twice across hole cards and board.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The game id is not in the catalog.
    #[error("unknown game")]
    UnknownGame,
}

/// Errors that can occur during question generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// The game id is not in the catalog.
    #[error("unknown game")]
    UnknownGame,
    /// Every deal within the attempt cap produced a tie.
    #[error("no decisive deal after {attempts} attempts")]
    RetriesExhausted {
        /// Number of deals tried.
        attempts: u32,
    },
}

impl From<CatalogError> for QuestionError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownGame => Self::UnknownGame,
        }
    }
}
