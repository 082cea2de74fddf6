//! Board representation for SOS

pub mod board;


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Re-exports
pub use board::Board;

/// Default board size (5x5)
pub const BOARD_SIZE: usize = 5;
/// Largest side accepted by `Board::with_size`
pub const MAX_BOARD_SIZE: usize = 19;

/// Symbol a player writes into a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    S,
    O,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::S, Symbol::O];

    /// The other symbol
    #[inline]
    pub fn complement(self) -> Symbol {
        match self {
            Symbol::S => Symbol::O,
            Symbol::O => Symbol::S,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Symbol::S => 'S',
            Symbol::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid symbol '{0}' (expected 'S' or 'O')")]
pub struct ParseSymbolError(pub String);

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Symbol::S),
            "O" => Ok(Symbol::O),
            _ => Err(ParseSymbolError(s.to_string())),
        }
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    S,
    O,
}

impl Cell {
    /// Symbol held by this cell, `None` when empty
    #[inline]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::S => Some(Symbol::S),
            Cell::O => Some(Symbol::O),
        }
    }
}

impl From<Symbol> for Cell {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::S => Cell::S,
            Symbol::O => Cell::O,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
