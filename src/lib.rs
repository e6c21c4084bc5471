//! Tic-Tac-Toe with a perfect-play minimax opponent
//!
//! A 3x3 game where a human plays against an automated player that never
//! loses. The core is small:
//! - [`rules::evaluate`] classifies a board as in play, won, or drawn
//! - [`search::Searcher`] runs a full-depth minimax to pick the automated move
//!
//! # Architecture
//!
//! - [`board`]: Board representation with value semantics
//! - [`rules`]: Outcome evaluation and move application
//! - [`search`]: Exhaustive minimax search
//! - [`engine`]: AI engine facade with timing
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{apply_move, evaluate, AIEngine, Board, Mark, Outcome, Pos};
//!
//! let mut engine = AIEngine::new(Mark::O);
//!
//! // Human plays the center
//! let board = apply_move(&Board::new(), Pos::new(1, 1), Mark::X).unwrap();
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_move(&board) {
//!     let board = apply_move(&board, pos, Mark::O).unwrap();
//!     assert_eq!(evaluate(&board), Outcome::Continue);
//! }
//! ```
//!
//! # Scoring
//!
//! Scores are from the automated player's point of view: +10 for a win,
//! -10 for a loss, 0 for a draw. By default they do not depend on how many
//! moves remain; see [`search::ScoringMode`].

pub mod board;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Mark, Pos, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use rules::{apply_move, evaluate, Outcome};
pub use search::{ScoringMode, SearchResult, Searcher};
