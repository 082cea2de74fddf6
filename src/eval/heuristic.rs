//! Static evaluation for the SOS search
//!
//! Two strategies, both built on the sequence count:
//! - `SequenceCount` (h1): completed sequences on the board
//! - `OPenalty` (h2): sequences minus the number of `O` cells, which pushes
//!   the search toward `S` when the sequence value is otherwise tied

use crate::board::{Board, Cell};

use super::patterns::count_sequences;

/// Evaluation strategy used at search leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// h1: raw sequence count
    #[default]
    SequenceCount,
    /// h2: sequence count minus placed `O` symbols
    OPenalty,
}

impl Heuristic {
    /// Evaluate the board. Pure, never mutates `board`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, board: &Board) -> i32 {
        match self {
            Heuristic::SequenceCount => h1(board),
            Heuristic::OPenalty => h2(board),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::SequenceCount => "h1 (sequences)",
            Heuristic::OPenalty => "h2 (sequences - O)",
        }
    }
}

/// Completed sequence count
#[must_use]
pub fn h1(board: &Board) -> i32 {
    count_sequences(board) as i32
}

/// Sequence count penalized by every `O` on the board
#[must_use]
pub fn h2(board: &Board) -> i32 {
    h1(board) - board.count(Cell::O) as i32
}
