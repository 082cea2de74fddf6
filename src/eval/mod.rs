//! Board evaluation: sequence detection and search heuristics

pub mod heuristic;
pub mod patterns;

pub use heuristic::{h1, h2, Heuristic};
pub use patterns::{count_sequences, find_sequences, DIRECTIONS};
