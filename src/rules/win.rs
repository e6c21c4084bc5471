//! Outcome evaluation for Tic-Tac-Toe
//!
//! A board is won when one of the eight fixed lines holds three identical
//! marks, drawn when it is full without such a line, and still in play
//! otherwise.

use crate::board::{Board, Mark, Pos};

/// The eight winning lines as cell indices, in scan order:
/// rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// At least one empty cell and no completed line
    Continue,
    /// `Mark` owns a completed line
    Win(Mark),
    /// Full board with no completed line
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }

    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Evaluate the board.
///
/// The first completed line in `WINNING_LINES` order decides the winner.
/// Boards with two winners cannot arise from legal play.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Continue
    }
}

/// Winner of the board, if any line is complete
#[inline]
pub fn check_winner(board: &Board) -> Option<Mark> {
    completed_line(board).map(|(_, mark)| mark)
}

/// Positions of the first completed line, for highlighting
pub fn find_winning_line(board: &Board) -> Option<[Pos; 3]> {
    completed_line(board).map(|(line, _)| line.map(Pos::from_index))
}

fn completed_line(board: &Board) -> Option<([usize; 3], Mark)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then_some(([a, b, c], mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_continues() {
        assert_eq!(evaluate(&Board::new()), Outcome::Continue);
    }

    #[test]
    fn test_win_row() {
        assert_eq!(evaluate(&board("... OOO X.X")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_win_column() {
        assert_eq!(evaluate(&board("X.O X.O X..")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_win_diagonal() {
        assert_eq!(evaluate(&board("X.O .XO ..X")), Outcome::Win(Mark::X));
        assert_eq!(evaluate(&board("X.O XO. O..")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board("XXX OOX XOO")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX OXO OXO")), Outcome::Draw);
    }

    #[test]
    fn test_two_in_a_row_not_win() {
        assert_eq!(evaluate(&board("XX. OO. ...")), Outcome::Continue);
    }

    #[test]
    fn test_find_winning_line() {
        let line = find_winning_line(&board("..O .O. OXX")).unwrap();
        assert_eq!(line, [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Continue.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::array::uniform9(prop_oneof![
            Just(crate::board::Cell::Empty),
            Just(crate::board::Cell::X),
            Just(crate::board::Cell::O),
        ])
        .prop_map(Board::from_cells)
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_idempotent(b in arb_board()) {
            prop_assert_eq!(evaluate(&b), evaluate(&b));
        }

        #[test]
        fn prop_completed_line_wins_for_its_mark(
            line in 0usize..8,
            mark in prop_oneof![Just(Mark::X), Just(Mark::O)],
            b in arb_board(),
        ) {
            // Clear the opponent's lines so the board has a single winner
            let mut cells = *b.cells();
            for cell in cells.iter_mut() {
                if cell.mark() == Some(mark.opponent()) {
                    *cell = crate::board::Cell::Empty;
                }
            }
            for &idx in &WINNING_LINES[line] {
                cells[idx] = mark.into();
            }
            prop_assert_eq!(evaluate(&Board::from_cells(cells)), Outcome::Win(mark));
        }

        #[test]
        fn prop_no_line_classified_by_fullness(b in arb_board()) {
            prop_assume!(check_winner(&b).is_none());
            let expected = if b.is_full() { Outcome::Draw } else { Outcome::Continue };
            prop_assert_eq!(evaluate(&b), expected);
        }
    }
}
