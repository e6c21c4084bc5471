use super::*;
use crate::error::Error;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}

#[test]
fn test_cell_mark() {
    assert_eq!(Cell::Empty.mark(), None);
    assert_eq!(Cell::X.mark(), Some(Mark::X));
    assert_eq!(Cell::from(Mark::O), Cell::O);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_try_from_index() {
    assert_eq!(Pos::try_from_index(8), Some(Pos::new(2, 2)));
    assert_eq!(Pos::try_from_index(9), None);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_mark(Pos::new(1, 1), Mark::X);

    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(1, 1)), Cell::X);
    assert_eq!(next.mark_count(), 1);
}

#[test]
fn test_empty_cells_in_index_order() {
    let board: Board = "XO. .X. O..".parse().unwrap();
    let empty: Vec<usize> = board.empty_cells().map(Pos::to_index).collect();
    assert_eq!(empty, vec![2, 3, 5, 7, 8]);
}

#[test]
fn test_is_full() {
    assert!(!Board::new().is_full());
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.count(Mark::X), 4);
    assert_eq!(board.count(Mark::O), 5);
}

#[test]
fn test_parse_and_display() {
    let board: Board = "x_o\n-X-\n..O".parse().unwrap();
    assert_eq!(board.to_string(), "X.O\n.X.\n..O");
}

#[test]
fn test_parse_wrong_length() {
    let err = "XO".parse::<Board>().unwrap_err();
    assert!(matches!(err, Error::InvalidBoardLength { expected: 9, got: 2 }));
}

#[test]
fn test_parse_bad_character() {
    let err = "XO?......".parse::<Board>().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidCellCharacter { character: '?', position: 2 }
    ));
}
