//! AI engine: picks a cell and a symbol for the side to move
//!
//! Every empty cell is tried with both `S` and `O`. Each trial is scored by
//! a minimax search (see [`crate::search::alphabeta`]) and the cell keeps its
//! better symbol. The engine then picks uniformly at random among the cells
//! sharing the top score, so equal options are not played in a fixed order.
//!
//! # Example
//!
//! ```
//! use sos::{AIEngine, Board, Heuristic, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_depth(2)
//!     .with_heuristic(Heuristic::OPenalty)
//!     .with_seed(7);
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&mut board);
//! let pos = result.best_move.expect("board has empty cells");
//! assert!(!board.is_valid_move(pos.row(), pos.col()));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Symbol};
use crate::eval::Heuristic;
use crate::search::{GameRng, Searcher};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 4;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched, counting the root placement
    pub depth: u8,
    /// Leaf evaluation
    pub heuristic: Heuristic,
    /// Tie-break seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            heuristic: Heuristic::SequenceCount,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// AI strength as offered to players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Plain sequence count (h1)
    #[default]
    Easy,
    /// Sequence count with the `O` penalty (h2)
    Hard,
}

impl Difficulty {
    pub fn heuristic(self) -> Heuristic {
        match self {
            Difficulty::Easy => Heuristic::SequenceCount,
            Difficulty::Hard => Heuristic::OPenalty,
        }
    }

    pub fn config(self) -> SearchConfig {
        SearchConfig::default().with_heuristic(self.heuristic())
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Outcome of one engine decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell, `None` when the board had no empty cell
    pub best_move: Option<Pos>,
    /// Symbol written (or suggested) at `best_move`
    pub symbol: Option<Symbol>,
    /// Search score of the chosen move
    pub score: i32,
    /// Number of cells that shared the top score
    pub tied: usize,
    /// Nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn no_move() -> Self {
        Self {
            best_move: None,
            symbol: None,
            score: 0,
            tied: 0,
            nodes: 0,
            time_ms: 0,
        }
    }
}

/// Minimax player for SOS
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    depth: u8,
    rng: GameRng,
}

impl AIEngine {
    /// Engine with the default configuration (depth 4, h1, random seed)
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Engine drawing its tie-breaks from `rng`
    pub fn with_rng(config: SearchConfig, rng: GameRng) -> Self {
        Self {
            searcher: Searcher::new(config.heuristic),
            depth: config.depth,
            rng,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.searcher.heuristic()
    }

    /// Choose a move, write it on `board` and return its position.
    ///
    /// Returns `None` and leaves the board alone when it is already full.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.choose_move_with_stats(board).best_move
    }

    /// Like [`choose_move`](Self::choose_move), with the symbol, score and search statistics.
    pub fn choose_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let result = self.decide(board);
        if let (Some(pos), Some(symbol)) = (result.best_move, result.symbol) {
            let placed = board.make_move(pos.row(), pos.col(), symbol);
            debug_assert!(placed, "engine picked an occupied cell {:?}", pos);
        }
        result
    }

    /// Best move for `board` without playing it
    pub fn suggest_move(&mut self, board: &Board) -> MoveResult {
        let mut scratch = board.clone();
        self.decide(&mut scratch)
    }

    fn decide(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        self.searcher.reset_stats();

        let candidates = self.searcher.evaluate_root(board, self.depth);
        let Some(top) = candidates.iter().map(|c| c.score).max() else {
            return MoveResult::no_move();
        };
        let tied: Vec<_> = candidates.iter().filter(|c| c.score == top).collect();
        let Some(chosen) = self.rng.choose(&tied) else {
            return MoveResult::no_move();
        };

        let result = MoveResult {
            best_move: Some(chosen.pos),
            symbol: Some(chosen.symbol),
            score: chosen.score,
            tied: tied.len(),
            nodes: self.searcher.stats().nodes,
            time_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            row = chosen.pos.row,
            col = chosen.pos.col,
            symbol = %chosen.symbol,
            score = result.score,
            tied = result.tied,
            nodes = result.nodes,
            time_ms = result.time_ms,
            heuristic = self.heuristic().name(),
            "engine move"
        );

        result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn seeded(depth: u8, heuristic: Heuristic, seed: u64) -> AIEngine {
        AIEngine::with_config(
            SearchConfig::default()
                .with_depth(depth)
                .with_heuristic(heuristic)
                .with_seed(seed),
        )
    }

    /// Fill every cell except `hole` without forming any sequence
    fn board_with_one_hole(hole: (usize, usize)) -> Board {
        let mut board = Board::new();
        let empties: Vec<Pos> = board.empty_cells().collect();
        for pos in empties {
            if (pos.row(), pos.col()) != hole {
                assert!(board.make_move(pos.row(), pos.col(), Symbol::S));
            }
        }
        board
    }

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 4);
        assert_eq!(config.heuristic, Heuristic::SequenceCount);
        assert_eq!(config.seed, None);
        assert_eq!(Difficulty::Hard.config().heuristic, Heuristic::OPenalty);
        assert_eq!(Difficulty::Easy.config().depth, DEFAULT_DEPTH);
    }

    #[test]
    fn test_last_cell_is_chosen() {
        for seed in 0..20 {
            let mut board = board_with_one_hole((2, 3));
            let mut engine = seeded(4, Heuristic::SequenceCount, seed);
            assert_eq!(engine.choose_move(&mut board), Some(Pos::new(2, 3)));
            assert!(board.is_full());
        }
    }

    #[test]
    fn test_last_cell_symbol_follows_heuristic() {
        // Surrounded by S, an O at (2,2) scores in all four directions.
        let mut board = board_with_one_hole((2, 2));
        let mut engine = seeded(4, Heuristic::SequenceCount, 1);
        let result = engine.choose_move_with_stats(&mut board);
        assert_eq!(result.symbol, Some(Symbol::O));
        assert_eq!(result.score, 4);
        assert_eq!(board.cell(2, 2), Cell::O);

        // h2: four sequences minus one O still beats zero
        let mut board = board_with_one_hole((2, 2));
        let mut engine = seeded(4, Heuristic::OPenalty, 1);
        let result = engine.choose_move_with_stats(&mut board);
        assert_eq!(result.symbol, Some(Symbol::O));
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = board_with_one_hole((1, 1));
        assert!(board.make_move(1, 1, Symbol::S));
        let before = board.clone();
        let mut engine = seeded(4, Heuristic::SequenceCount, 3);
        assert_eq!(engine.choose_move(&mut board), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_takes_immediate_sequence() {
        let mut board = Board::new();
        assert!(board.make_move(2, 0, Symbol::S));
        let mut engine = seeded(1, Heuristic::SequenceCount, 5);
        let result = engine.choose_move_with_stats(&mut board);
        // (1,0) and (3,0) both complete a column sequence with an O
        assert!(matches!(
            result.best_move,
            Some(p) if p == Pos::new(1, 0) || p == Pos::new(3, 0)
        ));
        assert_eq!(result.symbol, Some(Symbol::O));
        assert_eq!(result.tied, 2);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let first = {
            let mut board = Board::new();
            seeded(2, Heuristic::SequenceCount, 99).choose_move_with_stats(&mut board)
        };
        for _ in 0..5 {
            let mut board = Board::new();
            let again = seeded(2, Heuristic::SequenceCount, 99).choose_move_with_stats(&mut board);
            assert_eq!(again.best_move, first.best_move);
            assert_eq!(again.symbol, first.symbol);
        }
    }

    #[test]
    fn test_ties_are_spread() {
        // Fresh board at depth 1: every cell ties, so different seeds should differ
        let picks: std::collections::HashSet<_> = (0..40)
            .filter_map(|seed| {
                let mut board = Board::new();
                seeded(1, Heuristic::SequenceCount, seed).choose_move(&mut board)
            })
            .collect();
        assert!(picks.len() > 1);
    }

    #[test]
    fn test_suggest_does_not_play() {
        let board = Board::new();
        let mut engine = seeded(2, Heuristic::OPenalty, 11);
        let result = engine.suggest_move(&board);
        assert!(result.best_move.is_some());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_choose_applies_symbol() {
        let mut board = Board::new();
        let mut engine = seeded(2, Heuristic::OPenalty, 4);
        let result = engine.choose_move_with_stats(&mut board);
        let pos = result.best_move.unwrap();
        assert_eq!(board.get(pos).symbol(), result.symbol);
        assert_eq!(board.empty_count(), Board::new().empty_count() - 1);
        assert!(result.nodes > 0);
    }
}
