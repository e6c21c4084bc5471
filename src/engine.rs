//! Main AI Engine wrapping the minimax search
//!
//! The engine is what the presentation layer talks to: it checks whether the
//! game is already decided, runs the search for its own mark, and reports
//! timing alongside the result.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Mark, Pos};
//!
//! let mut engine = AIEngine::new(Mark::O);
//! let board = Board::new().with_mark(Pos::new(1, 1), Mark::X);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::rules::evaluate;
use crate::search::{ScoringMode, SearchResult, Searcher};

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score from the engine's point of view
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result from a minimax search
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Perfect-play AI engine for one mark.
///
/// # Example
///
/// ```
/// use tictactoe::{AIEngine, Board, Mark};
///
/// let mut engine = AIEngine::new(Mark::X);
/// let board: Board = "XX. OO. ...".parse().unwrap();
/// assert_eq!(engine.get_move(&board).map(|p| p.to_index()), Some(2));
/// ```
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine playing `mark` with flat scoring.
    #[must_use]
    pub fn new(mark: Mark) -> Self {
        Self::with_scoring(mark, ScoringMode::Flat)
    }

    /// Create an engine with an explicit scoring mode.
    #[must_use]
    pub fn with_scoring(mark: Mark, scoring: ScoringMode) -> Self {
        Self {
            searcher: Searcher::with_scoring(mark, scoring),
        }
    }

    /// The mark this engine plays
    #[inline]
    pub fn mark(&self) -> Mark {
        self.searcher.ai_mark()
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if the game is already won or drawn.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// A finished board is reported without searching: no move, the terminal
    /// score, and zero nodes.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let mark = self.mark();

        if evaluate(board).is_terminal() {
            let result = self.searcher.best_move(board, mark);
            debug!(%mark, score = result.score, "board already decided, no move");
            return MoveResult {
                best_move: None,
                score: result.score,
                time_ms: 0,
                nodes: 0,
            };
        }

        let result = self.searcher.best_move(board, mark);
        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            %mark,
            best_move = ?result.best_move.map(Pos::to_index),
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search complete"
        );
        MoveResult::from_search(result, time_ms)
    }
}
