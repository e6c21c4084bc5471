//! Game state management for the Tic-Tac-Toe GUI

use crate::error::{Error, Result};
use crate::rules::{apply_move, evaluate, find_winning_line, is_valid_move, Outcome};
use crate::{AIEngine, Board, Mark, MoveResult, Pos, ScoringMode};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI. X always moves first.
    PvE { human_mark: Mark },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_mark: Mark::X }
    }
}

impl GameMode {
    #[inline]
    pub fn human_mark(self) -> Mark {
        match self {
            GameMode::PvE { human_mark } => human_mark,
        }
    }

    #[inline]
    pub fn ai_mark(self) -> Mark {
        self.human_mark().opponent()
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `Outcome::Win` or `Outcome::Draw`
    pub outcome: Outcome,
    pub winning_line: Option<[Pos; 3]>,
}

impl GameResult {
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,

    scoring: ScoringMode,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_scoring(mode, ScoringMode::Flat)
    }

    pub fn with_scoring(mode: GameMode, scoring: ScoringMode) -> Self {
        info!(human = %mode.human_mark(), ?scoring, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Mark::X,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
            scoring,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_scoring(self.mode, self.scoring);
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_turn == self.mode.human_mark()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == self.mode.ai_mark()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given position
    pub fn try_place(&mut self, pos: Pos) -> Result<()> {
        if self.game_over.is_some() {
            return Err(Error::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(Error::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(Error::NotYourTurn);
        }

        let board = apply_move(&self.board, pos, self.current_turn)?;
        self.commit_move(board, pos);
        Ok(())
    }

    /// Record a validated move and hand the turn over
    fn commit_move(&mut self, board: Board, pos: Pos) {
        let mark = self.current_turn;
        info!(%mark, index = pos.to_index(), "move");

        self.board = board;
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;
        self.current_turn = mark.opponent();

        let outcome = evaluate(&self.board);
        if outcome.is_terminal() {
            info!(?outcome, "game over");
            self.game_over = Some(GameResult {
                outcome,
                winning_line: find_winning_line(&self.board),
            });
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let mark = self.current_turn;
        let scoring = self.scoring;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_scoring(mark, scoring);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_thinking_time = Some(elapsed);
            self.last_ai_result = Some(move_result.clone());

            let Some(pos) = move_result.best_move else {
                warn!("AI returned no move");
                self.message = Some("AI could not find a move".to_string());
                return;
            };

            if !is_valid_move(&self.board, pos) {
                warn!(index = pos.to_index(), "AI chose an illegal move");
                self.message = Some("AI chose an illegal move".to_string());
                return;
            }
            let board = self.board.with_mark(pos, self.current_turn);
            self.commit_move(board, pos);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo back to the human's previous turn
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // The AI's opening move stays until the human has played
        let human = self.mode.human_mark();
        let Some(keep) = self.move_history.iter().rposition(|&(_, mark)| mark == human) else {
            return;
        };
        self.move_history.truncate(keep);

        // Replay from an empty board
        self.board = self
            .move_history
            .iter()
            .fold(Board::new(), |board, &(pos, mark)| board.with_mark(pos, mark));
        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.current_turn = self
            .move_history
            .last()
            .map_or(Mark::X, |&(_, mark)| mark.opponent());
        self.game_over = None;
        self.message = None;
    }
}
