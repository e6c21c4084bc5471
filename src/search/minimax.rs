//! Exhaustive minimax search
//!
//! The full game tree from an empty board has fewer than 550,000 nodes, so
//! the search visits every continuation without pruning or caching.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let board: Board = "XX. OO. ...".parse().unwrap();
//! let mut searcher = Searcher::new(Mark::X);
//!
//! let result = searcher.best_move(&board, Mark::X);
//! assert_eq!(result.best_move.map(|p| p.to_index()), Some(2));
//! assert_eq!(result.score, 10);
//! ```

use crate::board::{Board, Mark, Pos};
use crate::rules::{evaluate, Outcome};

/// Score of a position won by the automated player
pub const WIN_SCORE: i32 = 10;
/// Score of a position won by the human
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// How terminal positions are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Wins and losses score ±10 no matter how many plies they take.
    /// Among equal scores the lowest-index move is kept, so a slower win
    /// may be chosen over a faster one.
    #[default]
    Flat,
    /// Wins score `10 - plies` and losses `plies - 10`, so the engine
    /// prefers the quickest win and the slowest loss.
    DepthAdjusted,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only on terminal boards
    pub best_move: Option<Pos>,
    /// Minimax value from the automated player's point of view
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// Minimax searcher for a fixed automated mark
#[derive(Debug, Clone)]
pub struct Searcher {
    ai_mark: Mark,
    scoring: ScoringMode,
    nodes: u64,
}

impl Searcher {
    pub fn new(ai_mark: Mark) -> Self {
        Self::with_scoring(ai_mark, ScoringMode::Flat)
    }

    pub fn with_scoring(ai_mark: Mark, scoring: ScoringMode) -> Self {
        Self {
            ai_mark,
            scoring,
            nodes: 0,
        }
    }

    #[inline]
    pub fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    /// Best move for `mark` on `board`.
    ///
    /// The automated mark maximises the score and the other mark minimises
    /// it. On a terminal board the result carries the terminal score and
    /// no move. The board is never modified.
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.minimax(board, mark, 0);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn minimax(&mut self, board: &Board, mark: Mark, ply: i32) -> (Option<Pos>, i32) {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(evaluate(board), ply) {
            return (None, score);
        }

        let maximizing = mark == self.ai_mark;
        let mut best: Option<(Pos, i32)> = None;

        for pos in board.empty_cells() {
            let child = board.with_mark(pos, mark);
            let (_, score) = self.minimax(&child, mark.opponent(), ply + 1);

            // Strict comparison keeps the first-seen move on ties
            let better = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if better {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => (Some(pos), score),
            // Unreachable: a non-terminal board always has an empty cell
            None => (None, DRAW_SCORE),
        }
    }

    fn terminal_score(&self, outcome: Outcome, ply: i32) -> Option<i32> {
        let decay = match self.scoring {
            ScoringMode::Flat => 0,
            ScoringMode::DepthAdjusted => ply,
        };
        match outcome {
            Outcome::Continue => None,
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Win(mark) if mark == self.ai_mark => Some(WIN_SCORE - decay),
            Outcome::Win(_) => Some(LOSS_SCORE + decay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, check_winner};
    use proptest::prelude::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn play_perfect_game(mut board: Board, mut to_move: Mark) -> Board {
        let mut x = Searcher::new(Mark::X);
        let mut o = Searcher::new(Mark::O);
        while !evaluate(&board).is_terminal() {
            let searcher = if to_move == Mark::X { &mut x } else { &mut o };
            let pos = searcher
                .best_move(&board, to_move)
                .best_move
                .expect("non-terminal board has a move");
            board = apply_move(&board, pos, to_move).unwrap();
            to_move = to_move.opponent();
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut searcher = Searcher::new(Mark::X);
        let result = searcher.best_move(&board("XX. OO. ..."), Mark::X);

        assert_eq!(result.best_move, Some(Pos::from_index(2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_pair() {
        let b = board(".OO .X. ...");
        let mut searcher = Searcher::new(Mark::X);
        let result = searcher.best_move(&b, Mark::X);

        // Index 0 is the only cell that stops O completing the top row
        assert_eq!(result.best_move, Some(Pos::from_index(0)));

        // The reported score is what X actually secures after the block
        let blocked = b.with_mark(Pos::from_index(0), Mark::X);
        let reply = searcher.best_move(&blocked, Mark::O);
        assert_eq!(result.score, reply.score);
        assert!(result.score > LOSS_SCORE);
    }

    #[test]
    fn test_human_side_minimizes() {
        // O to move: index 2 only blocks, index 5 wins
        let mut searcher = Searcher::new(Mark::X);
        let result = searcher.best_move(&board("XX. OO. X.."), Mark::O);

        assert_eq!(result.best_move, Some(Pos::from_index(5)));
        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut searcher = Searcher::new(Mark::X);

        let draw = searcher.best_move(&board("XOX OXO OXO"), Mark::X);
        assert_eq!(draw.best_move, None);
        assert_eq!(draw.score, DRAW_SCORE);
        assert_eq!(draw.nodes, 1);

        let won = searcher.best_move(&board("XXX OO. ..."), Mark::O);
        assert_eq!(won.best_move, None);
        assert_eq!(won.score, WIN_SCORE);

        let lost = searcher.best_move(&board("OOO XX. X.."), Mark::X);
        assert_eq!(lost.best_move, None);
        assert_eq!(lost.score, LOSS_SCORE);
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let b = board("X.. .O. ...");
        let copy = b;
        let mut searcher = Searcher::new(Mark::X);
        let _ = searcher.best_move(&b, Mark::X);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_empty_board_is_not_lost() {
        let mut searcher = Searcher::new(Mark::X);
        let result = searcher.best_move(&Board::new(), Mark::X);

        assert_eq!(result.score, DRAW_SCORE);
        // Every move draws under perfect play, so the first cell is kept
        assert_eq!(result.best_move, Some(Pos::from_index(0)));
        assert!(result.nodes > 500_000);
    }

    #[test]
    fn test_perfect_play_draws() {
        let end = play_perfect_game(Board::new(), Mark::X);
        assert_eq!(evaluate(&end), Outcome::Draw);
        assert!(end.is_full());
    }

    #[test]
    fn test_flat_scoring_may_pick_slower_win() {
        // X wins now at 6, or two plies later after a fork at 1
        let b = board("X.. XOO .O.");
        let mut flat = Searcher::new(Mark::X);
        let result = flat.best_move(&b, Mark::X);
        assert_eq!(result.best_move, Some(Pos::from_index(1)));
        assert_eq!(result.score, WIN_SCORE);

        let mut quick = Searcher::with_scoring(Mark::X, ScoringMode::DepthAdjusted);
        let quick_result = quick.best_move(&b, Mark::X);
        assert_eq!(quick_result.best_move, Some(Pos::from_index(6)));
        assert_eq!(quick_result.score, WIN_SCORE - 1);
    }

    #[test]
    fn test_depth_adjusted_prefers_slower_loss() {
        let mut searcher = Searcher::with_scoring(Mark::O, ScoringMode::DepthAdjusted);
        // X threatens two lines; O cannot stop both
        let result = searcher.best_move(&board("X.X .O. X.O"), Mark::O);
        // Best O can do is lose on X's reply, two plies down
        assert_eq!(result.score, LOSS_SCORE + 2);
    }

    #[test]
    fn test_winning_move_ends_game_for_mover() {
        // O completes the right column at 5; X also has a line pending
        let b = board("XXO X.. ..O");
        let mut searcher = Searcher::new(Mark::O);
        let result = searcher.best_move(&b, Mark::O);

        assert_eq!(result.best_move, Some(Pos::from_index(5)));
        assert_eq!(result.score, WIN_SCORE);
        let after = b.with_mark(Pos::from_index(5), Mark::O);
        assert_eq!(evaluate(&after), Outcome::Win(Mark::O));
    }

    /// Random legal, non-terminal positions reached by playing `moves` in order
    fn arb_position() -> impl Strategy<Value = (Board, Mark)> {
        prop::collection::vec(0usize..9, 3..9).prop_map(|picks| {
            let mut board = Board::new();
            let mut to_move = Mark::X;
            for pick in picks {
                let empty: Vec<Pos> = board.empty_cells().collect();
                let pos = empty[pick % empty.len()];
                let next = board.with_mark(pos, to_move);
                if evaluate(&next).is_terminal() {
                    break;
                }
                board = next;
                to_move = to_move.opponent();
            }
            (board, to_move)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_best_move_targets_empty_cell((b, to_move) in arb_position()) {
            let mut searcher = Searcher::new(to_move);
            let result = searcher.best_move(&b, to_move);
            let pos = result.best_move.expect("non-terminal board has a move");
            prop_assert!(b.is_empty(pos));
        }

        #[test]
        fn prop_score_matches_optimal_child((b, to_move) in arb_position()) {
            let mut searcher = Searcher::new(to_move);
            let result = searcher.best_move(&b, to_move);
            let best_child = b
                .empty_cells()
                .map(|pos| searcher.best_move(&b.with_mark(pos, to_move), to_move.opponent()).score)
                .max()
                .unwrap();
            prop_assert_eq!(result.score, best_child);
        }

        #[test]
        fn prop_non_losing_move_leaves_no_winning_reply((b, to_move) in arb_position()) {
            let mut searcher = Searcher::new(to_move);
            let result = searcher.best_move(&b, to_move);
            prop_assume!(result.score >= DRAW_SCORE);
            let after = b.with_mark(result.best_move.unwrap(), to_move);
            let outcome = evaluate(&after);
            if outcome.is_terminal() {
                // No replies on a finished board; a decided game must not be a loss
                prop_assert_ne!(outcome, Outcome::Win(to_move.opponent()));
                return Ok(());
            }
            let opponent = to_move.opponent();
            for reply in after.empty_cells() {
                prop_assert_ne!(check_winner(&after.with_mark(reply, opponent)), Some(opponent));
            }
        }
    }
}
