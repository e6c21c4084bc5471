//! Error types for the Tic-Tac-Toe crate
//!
//! The evaluator and the search are total and never fail. These errors come
//! from the collaborator side: applying moves and parsing boards.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("cell index {index} is out of range (expected 0-8)")]
    OutOfRange { index: usize },

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,

    #[error("board text has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
