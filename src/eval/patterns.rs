//! S-O-S pattern detection
//!
//! A sequence is anchored at its first `S` and read in one of four
//! directions. Each (anchor, direction) pair counts once, so two sequences
//! sharing cells are both counted.

use crate::board::{Board, Cell, Pos};

/// Reading directions (row delta, col delta)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (-1, 1), // Anti-diagonal ↗
];

/// Cells of the triple starting at (row, col) in direction `dir`, if it fits on the board
#[inline]
fn triple(board: &Board, row: usize, col: usize, (dr, dc): (i32, i32)) -> Option<[Pos; 3]> {
    let size = board.size() as i32;
    let end_r = row as i32 + 2 * dr;
    let end_c = col as i32 + 2 * dc;
    if end_r < 0 || end_r >= size || end_c < 0 || end_c >= size {
        return None;
    }
    let at = |k: i32| Pos::new((row as i32 + k * dr) as u8, (col as i32 + k * dc) as u8);
    Some([at(0), at(1), at(2)])
}

#[inline]
fn is_sos(board: &Board, line: &[Pos; 3]) -> bool {
    board.get(line[0]) == Cell::S && board.get(line[1]) == Cell::O && board.get(line[2]) == Cell::S
}

fn for_each_sequence(board: &Board, mut f: impl FnMut([Pos; 3])) {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if board.cell(row, col) != Cell::S {
                continue;
            }
            for dir in DIRECTIONS {
                if let Some(line) = triple(board, row, col, dir) {
                    if is_sos(board, &line) {
                        f(line);
                    }
                }
            }
        }
    }
}

/// Count completed S-O-S sequences on the board.
///
/// The total never decreases as cells fill.
#[must_use]
pub fn count_sequences(board: &Board) -> u32 {
    let mut count = 0;
    for_each_sequence(board, |_| count += 1);
    count
}

/// All completed sequences, in the same order `count_sequences` counts them
#[must_use]
pub fn find_sequences(board: &Board) -> Vec<[Pos; 3]> {
    let mut lines = Vec::new();
    for_each_sequence(board, |line| lines.push(line));
    lines
}
