//! Delta scoring
//!
//! After each move the board's total sequence count is recomputed and the
//! increase since the previous move is credited to the side that just moved.
//! Sequences are never destroyed, so the increase is never negative.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::info;

use crate::board::Board;
use crate::eval::count_sequences;

/// Seat at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// A named participant and their running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Both players plus the sequence total already handed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    players: [Player; 2],
    recorded: u32,
}

impl Scoreboard {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [Player::new(first), Player::new(second)],
            recorded: 0,
        }
    }

    /// Credit `side` with the sequences formed since the last recorded move.
    /// Returns the points awarded.
    pub fn record_move(&mut self, side: Side, board: &Board) -> u32 {
        let total = count_sequences(board);
        let delta = total.saturating_sub(self.recorded);
        if delta > 0 {
            self[side].score += delta;
            self.recorded = total;
            info!(side = %side, player = %self[side].name, delta, total, "sequence scored");
        }
        delta
    }

    /// Sequences credited so far
    #[inline]
    pub fn recorded(&self) -> u32 {
        self.recorded
    }

    #[inline]
    pub fn score(&self, side: Side) -> u32 {
        self[side].score
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
}

impl Index<Side> for Scoreboard {
    type Output = Player;

    fn index(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }
}

impl IndexMut<Side> for Scoreboard {
    fn index_mut(&mut self, side: Side) -> &mut Player {
        &mut self.players[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Symbol;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_delta_goes_to_mover() {
        let mut board = Board::new();
        let mut scores = Scoreboard::new("Alice", "Bob");

        assert!(board.make_move(2, 0, Symbol::S));
        assert_eq!(scores.record_move(Side::First, &board), 0);

        assert!(board.make_move(1, 0, Symbol::O));
        assert_eq!(scores.record_move(Side::Second, &board), 1);
        assert_eq!(scores.score(Side::Second), 1);
        assert_eq!(scores.score(Side::First), 0);

        // (3,0) closes (2,0)-(3,0)-(4,0)
        assert!(board.make_move(3, 0, Symbol::O));
        assert_eq!(scores.record_move(Side::First, &board), 1);
        assert_eq!(scores.score(Side::First), 1);
        assert_eq!(scores.recorded(), 2);
    }

    #[test]
    fn test_one_move_can_score_several() {
        let mut board = Board::new();
        let mut scores = Scoreboard::new("A", "B");
        for (r, c) in [(1, 1), (3, 3), (3, 1), (1, 3), (2, 1), (2, 3), (1, 2), (3, 2)] {
            assert!(board.make_move(r, c, Symbol::S));
        }
        assert_eq!(scores.record_move(Side::First, &board), 0);

        assert!(board.make_move(2, 2, Symbol::O));
        assert_eq!(scores.record_move(Side::Second, &board), 4);
        assert_eq!(scores[Side::Second].score, 4);
    }

    #[test]
    fn test_scores_sum_to_board_total() {
        let mut board = Board::new();
        let mut scores = Scoreboard::new("A", "B");
        let mut side = Side::First;
        let empties: Vec<_> = board.empty_cells().collect();
        for (i, pos) in empties.into_iter().enumerate() {
            let symbol = if i % 2 == 0 { Symbol::O } else { Symbol::S };
            board.make_move(pos.row(), pos.col(), symbol);
            scores.record_move(side, &board);
            side = side.other();
        }
        assert_eq!(
            scores.score(Side::First) + scores.score(Side::Second),
            count_sequences(&board)
        );
    }

    #[test]
    fn test_player_names() {
        let scores = Scoreboard::new("AI1", "AI2");
        assert_eq!(scores[Side::First].name, "AI1");
        assert_eq!(scores.players()[1].name, "AI2");
    }
}
