//! Board structure with value semantics

use std::fmt;
use std::str::FromStr;

use super::{Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::Error;

/// Game board snapshot.
///
/// `Board` is `Copy`: placing a mark returns a new board and leaves the
/// original untouched, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from row-major cells
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check occupancy; use `rules::apply_move` for game moves.
    #[inline]
    #[must_use]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::from(mark);
        next
    }

    /// Empty positions in index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Pos::from_index(idx))
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `mark`
    #[inline]
    pub fn count(&self, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cells from `X`, `O` and `.`/`_`/`-` (empty). Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got: symbols.len(),
            });
        }

        let mut cells = [Cell::Empty; TOTAL_CELLS];
        for (position, (&character, cell)) in symbols.iter().zip(cells.iter_mut()).enumerate() {
            *cell = match character {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '_' | '-' => Cell::Empty,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        position,
                    })
                }
            };
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col].mark() {
                    Some(mark) => mark.symbol(),
                    None => '.',
                };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
