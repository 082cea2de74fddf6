//! Match rules for SOS
//!
//! This module implements the rules that sit above the board:
//! - Delta scoring (points go to the side that completed the sequences)
//! - End of game and winner
//! - Errors for rejected human moves

pub mod outcome;
pub mod scoring;

use thiserror::Error;

// Re-exports for convenient access
pub use outcome::{check_outcome, GameOutcome};
pub use scoring::{Player, Scoreboard, Side};

/// Why a move request was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("game is over")]
    GameOver,

    #[error("AI is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}
