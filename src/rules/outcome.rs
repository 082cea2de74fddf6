//! End-of-game detection
//!
//! The game ends when the board is full. The higher score wins; equal
//! scores are a draw.

use crate::board::Board;

use super::scoring::{Scoreboard, Side};

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// `None` while the board still has empty cells
pub fn check_outcome(board: &Board, scores: &Scoreboard) -> Option<GameOutcome> {
    if !board.is_full() {
        return None;
    }
    let first = scores.score(Side::First);
    let second = scores.score(Side::Second);
    Some(match first.cmp(&second) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Side::First),
        std::cmp::Ordering::Less => GameOutcome::Winner(Side::Second),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Symbol;

    fn fill(board: &mut Board, symbol: Symbol) {
        let empties: Vec<_> = board.empty_cells().collect();
        for pos in empties {
            board.make_move(pos.row(), pos.col(), symbol);
        }
    }

    #[test]
    fn test_no_outcome_before_full() {
        let board = Board::new();
        let scores = Scoreboard::new("A", "B");
        assert_eq!(check_outcome(&board, &scores), None);
    }

    #[test]
    fn test_draw_on_equal_scores() {
        let mut board = Board::new();
        fill(&mut board, Symbol::S);
        let scores = Scoreboard::new("A", "B");
        assert_eq!(check_outcome(&board, &scores), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_higher_score_wins() {
        let mut board = Board::new();
        let mut scores = Scoreboard::new("A", "B");
        assert!(board.make_move(1, 0, Symbol::O));
        assert!(board.make_move(2, 0, Symbol::S));
        scores.record_move(Side::Second, &board);
        fill(&mut board, Symbol::S);
        assert_eq!(
            check_outcome(&board, &scores),
            Some(GameOutcome::Winner(Side::Second))
        );
    }
}
