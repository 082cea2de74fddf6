//! SOS game engine with a minimax AI
//!
//! Players take turns writing `S` or `O` into empty cells of a square grid
//! (5x5 by default, corners pre-filled with `S`). Completing S-O-S in a
//! row, column or diagonal scores a point for the player who completed it.
//! The game ends when the grid is full; the higher score wins.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid, cells and move validation
//! - [`eval`]: Sequence counting and the two search heuristics
//! - [`search`]: Minimax with alpha-beta pruning, seedable tie-break RNG
//! - [`engine`]: AI player choosing a cell and a symbol
//! - [`rules`]: Delta scoring and end of game
//! - [`game`]: A full match (turns, history, undo)
//! - [`config`]: Game modes and match settings
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use sos::{AIEngine, Board, SearchConfig, Symbol, count_sequences};
//!
//! let mut board = Board::new();
//! board.make_move(2, 0, Symbol::S);
//!
//! // AI answers, writing its symbol on the board
//! let mut engine = AIEngine::with_config(SearchConfig::default().with_depth(2).with_seed(1));
//! if let Some(pos) = engine.choose_move(&mut board) {
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(count_sequences(&board), 1);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Symbol, BOARD_SIZE};
pub use config::{GameMode, MatchSettings};
pub use engine::{AIEngine, Difficulty, MoveResult, SearchConfig};
pub use eval::{count_sequences, find_sequences, Heuristic};
pub use game::Game;
pub use rules::{GameOutcome, PlayError, Player, Scoreboard, Side};
pub use search::{SearchResult, Searcher};
