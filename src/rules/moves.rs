//! Move legality and application
//!
//! These are the state transitions the presentation layer drives between
//! turns. The search itself only uses `Board::with_mark`.

use crate::board::{Board, Mark, Pos};
use crate::error::{Error, Result};

use super::win::evaluate;

/// Check if a mark may be placed at `pos`
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    in_bounds(pos) && board.is_empty(pos) && !evaluate(board).is_terminal()
}

/// Apply a move and return the resulting board.
///
/// Rejects occupied cells and boards that are already won or drawn.
pub fn apply_move(board: &Board, pos: Pos, mark: Mark) -> Result<Board> {
    let index = pos.to_index();
    if !in_bounds(pos) {
        return Err(Error::OutOfRange { index });
    }
    if evaluate(board).is_terminal() {
        return Err(Error::GameOver);
    }
    if !board.is_empty(pos) {
        return Err(Error::CellOccupied { index });
    }
    Ok(board.with_mark(pos, mark))
}

#[inline]
fn in_bounds(pos: Pos) -> bool {
    Pos::is_valid(pos.row as i32, pos.col as i32)
}

/// Mark due to play next, assuming X moves first
#[inline]
pub fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}
