//! Search module for the Tic-Tac-Toe AI
//!
//! Contains a full-depth minimax search over every legal continuation.

pub mod minimax;

pub use minimax::{ScoringMode, SearchResult, Searcher, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
