//! Minimax search with alpha-beta pruning
//!
//! The search explores hypothetical moves on the caller's board in place:
//! every branch applies a move, recurses, then undoes it, so the board is
//! back in its original state whenever a call returns.
//!
//! The symbol is fixed per branch. The maximizing side always writes the
//! symbol chosen at the root and the minimizing side always writes its
//! complement. In the real game either player may write either symbol.
//!
//! # Example
//!
//! ```
//! use sos::board::{Board, Symbol};
//! use sos::eval::Heuristic;
//! use sos::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new(Heuristic::SequenceCount);
//!
//! let result = searcher.minimax(&mut board, 2, -INF, INF, true, Symbol::S);
//! assert!(result.best_move.is_some());
//! assert_eq!(board, Board::new());
//! ```

use crate::board::{Board, Pos, Symbol};
use crate::eval::Heuristic;

/// Bound for alpha-beta windows, outside any reachable evaluation
pub const INF: i32 = 1_000_000;

/// Search diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (including leaves)
    pub nodes: u64,
    /// Leaves evaluated by the heuristic
    pub leaves: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

/// Score and move returned by every search call. `best_move` is `None` at terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Pos>,
}

impl SearchResult {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Root move evaluated with both symbols; keeps the better one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCandidate {
    pub pos: Pos,
    pub symbol: Symbol,
    pub score: i32,
}

/// Alpha-beta searcher bound to one heuristic
#[derive(Debug, Clone)]
pub struct Searcher {
    heuristic: Heuristic,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Statistics accumulated since the last `reset_stats`
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    #[inline]
    fn evaluate_leaf(&mut self, board: &Board) -> SearchResult {
        self.stats.leaves += 1;
        SearchResult::leaf(self.heuristic.evaluate(board))
    }

    /// Score every empty cell with both symbols.
    ///
    /// Each trial places the symbol, searches `depth - 1` plies with the
    /// opponent to move, and undoes the placement. Per cell the symbol with
    /// the strictly higher score wins; on a tie `O` is kept. Candidates come
    /// back in row-major order.
    pub fn evaluate_root(&mut self, board: &mut Board, depth: u8) -> Vec<RootCandidate> {
        let moves: Vec<Pos> = board.empty_cells().collect();
        let child_depth = depth.saturating_sub(1);

        moves
            .into_iter()
            .map(|pos| {
                let score_s = self.try_root_symbol(board, pos, Symbol::S, child_depth);
                let score_o = self.try_root_symbol(board, pos, Symbol::O, child_depth);
                if score_s > score_o {
                    RootCandidate { pos, symbol: Symbol::S, score: score_s }
                } else {
                    RootCandidate { pos, symbol: Symbol::O, score: score_o }
                }
            })
            .collect()
    }

    fn try_root_symbol(&mut self, board: &mut Board, pos: Pos, symbol: Symbol, depth: u8) -> i32 {
        let placed = board.make_move(pos.row(), pos.col(), symbol);
        debug_assert!(placed, "root candidate {:?} must be empty", pos);
        let score = self.minimax(board, depth, -INF, INF, false, symbol).score;
        board.undo(pos.row(), pos.col());
        score
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `symbol` is the root player's symbol for the whole branch: the
    /// maximizing side places it, the minimizing side places its complement.
    /// The returned move is the first candidate reaching the best score.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        symbol: Symbol,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || board.is_full() {
            return self.evaluate_leaf(board);
        }

        let moves: Vec<Pos> = board.empty_cells().collect();
        if moves.is_empty() {
            return self.evaluate_leaf(board);
        }

        let placed = if maximizing { symbol } else { symbol.complement() };
        let mut best = SearchResult {
            score: if maximizing { -INF } else { INF },
            best_move: None,
        };

        for pos in moves {
            board.make_move(pos.row(), pos.col(), placed);
            let score = self
                .minimax(board, depth - 1, alpha, beta, !maximizing, symbol)
                .score;
            board.undo(pos.row(), pos.col());

            if maximizing {
                if score > best.score {
                    best = SearchResult { score, best_move: Some(pos) };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult { score, best_move: Some(pos) };
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::count_sequences;
    use proptest::prelude::*;

    /// Plain minimax with the same opponent model and no pruning
    fn exhaustive(
        board: &mut Board,
        heuristic: Heuristic,
        depth: u8,
        maximizing: bool,
        symbol: Symbol,
    ) -> i32 {
        if depth == 0 || board.is_full() {
            return heuristic.evaluate(board);
        }
        let placed = if maximizing { symbol } else { symbol.complement() };
        let moves: Vec<Pos> = board.empty_cells().collect();
        let scores = moves.into_iter().map(|pos| {
            board.make_move(pos.row(), pos.col(), placed);
            let s = exhaustive(board, heuristic, depth - 1, !maximizing, symbol);
            board.undo(pos.row(), pos.col());
            s
        });
        if maximizing {
            scores.max().unwrap_or(-INF)
        } else {
            scores.min().unwrap_or(INF)
        }
    }

    /// Mid-game 5x5 position with nine empty cells and a few sequences already formed
    fn mid_game() -> Board {
        let mut board = Board::new();
        for (r, c, s) in [
            (0, 1, Symbol::O),
            (0, 2, Symbol::S),
            (1, 1, Symbol::O),
            (2, 0, Symbol::S),
            (2, 2, Symbol::O),
            (3, 3, Symbol::S),
            (1, 3, Symbol::S),
            (3, 1, Symbol::O),
            (4, 2, Symbol::S),
            (2, 4, Symbol::O),
            (1, 0, Symbol::S),
            (3, 0, Symbol::O),
        ] {
            assert!(board.make_move(r, c, s));
        }
        board
    }

    #[test]
    fn test_alphabeta_matches_exhaustive() {
        for heuristic in [Heuristic::SequenceCount, Heuristic::OPenalty] {
            for depth in 2..=3u8 {
                for symbol in Symbol::ALL {
                    for maximizing in [true, false] {
                        let mut board = mid_game();
                        let mut searcher = Searcher::new(heuristic);
                        let pruned = searcher
                            .minimax(&mut board, depth, -INF, INF, maximizing, symbol)
                            .score;
                        let full = exhaustive(&mut board, heuristic, depth, maximizing, symbol);
                        assert_eq!(
                            pruned, full,
                            "{:?} depth {} symbol {} maximizing {}",
                            heuristic, depth, symbol, maximizing
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = mid_game();
        let before = board.clone();
        let mut searcher = Searcher::new(Heuristic::OPenalty);

        searcher.minimax(&mut board, 3, -INF, INF, true, Symbol::S);
        assert_eq!(board, before);

        searcher.evaluate_root(&mut board, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let mut board = mid_game();
        let mut searcher = Searcher::new(Heuristic::SequenceCount);
        let result = searcher.minimax(&mut board, 0, -INF, INF, true, Symbol::S);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, count_sequences(&board) as i32);
        assert_eq!(searcher.stats().leaves, 1);
    }

    #[test]
    fn test_full_board_is_leaf() {
        let mut board = Board::with_size(1).unwrap();
        let mut searcher = Searcher::new(Heuristic::SequenceCount);
        let result = searcher.minimax(&mut board, 4, -INF, INF, false, Symbol::O);
        assert_eq!(result, SearchResult { score: 0, best_move: None });
    }

    #[test]
    fn test_maximizer_completes_sequence() {
        let mut board = Board::new();
        // Column 0 needs an O at (1,0)
        assert!(board.make_move(2, 0, Symbol::S));
        let mut searcher = Searcher::new(Heuristic::SequenceCount);

        let result = searcher.minimax(&mut board, 1, -INF, INF, true, Symbol::O);
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_minimizer_plays_complement() {
        let mut board = Board::new();
        assert!(board.make_move(2, 0, Symbol::S));
        let mut searcher = Searcher::new(Heuristic::SequenceCount);

        // Root symbol S: the minimizer writes O, and any O it writes at
        // (1,0) would score, so it avoids it
        let result = searcher.minimax(&mut board, 1, -INF, INF, false, Symbol::S);
        assert_eq!(result.score, 0);
        assert_ne!(result.best_move, Some(Pos::new(1, 0)));
    }

    #[test]
    fn test_root_prefers_scoring_symbol() {
        let mut board = Board::new();
        assert!(board.make_move(2, 0, Symbol::S));
        let mut searcher = Searcher::new(Heuristic::SequenceCount);

        let candidates = searcher.evaluate_root(&mut board, 1);
        assert_eq!(candidates.len(), board.empty_count());
        let scoring = candidates
            .iter()
            .find(|c| c.pos == Pos::new(1, 0))
            .copied()
            .unwrap();
        assert_eq!(scoring.symbol, Symbol::O);
        assert_eq!(scoring.score, 1);
        assert!(candidates.iter().all(|c| c.score <= 1));
    }

    #[test]
    fn test_root_tie_keeps_o() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(Heuristic::SequenceCount);
        // Depth 1: nothing can score anywhere, S and O tie at 0
        let candidates = searcher.evaluate_root(&mut board, 1);
        assert!(candidates.iter().all(|c| c.symbol == Symbol::O && c.score == 0));
    }

    #[test]
    fn test_h2_root_prefers_s_on_tie() {
        let mut board = Board::new();
        let mut searcher = Searcher::new(Heuristic::OPenalty);
        let candidates = searcher.evaluate_root(&mut board, 1);
        assert!(candidates.iter().all(|c| c.symbol == Symbol::S));
    }

    #[test]
    fn test_pruning_happens() {
        let mut board = mid_game();
        let mut searcher = Searcher::new(Heuristic::SequenceCount);
        searcher.minimax(&mut board, 3, -INF, INF, true, Symbol::S);
        assert!(searcher.stats().cutoffs > 0);
        searcher.reset_stats();
        assert_eq!(searcher.stats(), SearchStats::default());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_search_restores_board(
            moves in prop::collection::vec((0usize..5, 0usize..5, any::<bool>()), 8..20),
            depth in 1u8..3,
            maximizing in any::<bool>(),
        ) {
            let mut board = Board::new();
            for (r, c, s) in moves {
                board.make_move(r, c, if s { Symbol::S } else { Symbol::O });
            }
            let before = board.clone();
            let mut searcher = Searcher::new(Heuristic::OPenalty);
            searcher.minimax(&mut board, depth, -INF, INF, maximizing, Symbol::S);
            prop_assert_eq!(&board, &before);
        }
    }
}
