//! One SOS match: board, scores, turn order and history
//!
//! Sides alternate after every move, scoring or not. The match is over once
//! the board is full.
//!
//! ```
//! use sos::game::Game;
//! use sos::{Side, Symbol};
//!
//! let mut game = Game::new(5, "Alice", "Bob");
//! game.play(2, 0, Symbol::S).unwrap();
//! let points = game.play(1, 0, Symbol::O).unwrap();
//! assert_eq!(points, 1);
//! assert_eq!(game.scores().score(Side::Second), 1);
//! ```

use tracing::info;

use crate::board::{Board, Pos, Symbol};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{check_outcome, GameOutcome, PlayError, Scoreboard, Side};

/// A move as it was played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub pos: Pos,
    pub symbol: Symbol,
    pub side: Side,
    /// Points the move earned
    pub points: u32,
}

/// Match state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    scores: Scoreboard,
    to_move: Side,
    history: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// New match on a `size` board. Falls back to the default size if `size` is unusable.
    pub fn new(size: usize, first: impl Into<String>, second: impl Into<String>) -> Self {
        let board = Board::with_size(size).unwrap_or_default();
        let scores = Scoreboard::new(first, second);
        // A 1x1 board starts full
        let outcome = check_outcome(&board, &scores);
        let history = Vec::with_capacity(board.size().pow(2));
        Self {
            board,
            scores,
            to_move: Side::First,
            history,
            outcome,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play `symbol` at (row, col) for the side to move. Returns the points earned.
    pub fn play(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<u32, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if row >= self.board.size() || col >= self.board.size() {
            return Err(PlayError::OutOfBounds { row, col });
        }
        if !self.board.make_move(row, col, symbol) {
            return Err(PlayError::Occupied { row, col });
        }
        Ok(self.finish_move(Pos::new(row as u8, col as u8), symbol))
    }

    /// Let `engine` move for the side to move. `None` when the match is already over.
    pub fn play_engine(&mut self, engine: &mut AIEngine) -> Option<MoveResult> {
        if self.is_over() {
            return None;
        }
        let result = engine.choose_move_with_stats(&mut self.board);
        let (pos, symbol) = (result.best_move?, result.symbol?);
        self.finish_move(pos, symbol);
        Some(result)
    }

    /// Apply a move computed elsewhere (e.g. on a worker thread)
    pub fn apply_result(&mut self, result: &MoveResult) -> Result<u32, PlayError> {
        match (result.best_move, result.symbol) {
            (Some(pos), Some(symbol)) => self.play(pos.row(), pos.col(), symbol),
            _ => Err(PlayError::GameOver),
        }
    }

    fn finish_move(&mut self, pos: Pos, symbol: Symbol) -> u32 {
        let side = self.to_move;
        let points = self.scores.record_move(side, &self.board);
        self.history.push(PlayedMove { pos, symbol, side, points });
        self.outcome = check_outcome(&self.board, &self.scores);
        if let Some(outcome) = self.outcome {
            info!(
                ?outcome,
                first = self.scores.score(Side::First),
                second = self.scores.score(Side::Second),
                "game over"
            );
        }
        self.to_move = side.other();
        points
    }

    /// Take back the last `count` moves by replaying the rest on a fresh board
    pub fn undo(&mut self, count: usize) {
        let keep = self.history.len().saturating_sub(count);
        let moves: Vec<PlayedMove> = self.history.drain(..keep).collect();
        let [first, second] = self.scores.players().clone();

        *self = Game::new(self.board.size(), first.name, second.name);
        for played in moves {
            // Replayed moves were legal when first played
            let _ = self.play(played.pos.row(), played.pos.col(), played.symbol);
        }
    }
}
