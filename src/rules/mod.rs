//! Game rules for Tic-Tac-Toe
//!
//! This module implements:
//! - Outcome evaluation (three in a row, full board draw)
//! - Move legality and application

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply_move, is_valid_move, side_to_move};
pub use win::{check_winner, evaluate, find_winning_line, Outcome, WINNING_LINES};
