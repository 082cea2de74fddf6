//! Search module for the SOS AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning and per-cell symbol selection
//! - Seedable RNG used to break ties between equal root moves

pub mod alphabeta;
pub mod rng;

pub use alphabeta::{RootCandidate, SearchResult, SearchStats, Searcher, INF};
pub use rng::GameRng;
