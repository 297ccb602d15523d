//! Minimax Checkers Engine
//!
//! Depth-bounded minimax with alpha-beta pruning over immutable successor
//! positions, scored by a five-term heuristic evaluation.

mod eval;
mod search;

use checkers_core::{Engine, Position, SearchResult, Side};

/// Checkers engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, first-best move on ties
/// - Material, advancement, king, mobility and center-control evaluation
/// - Fixed +/-1000 scores for won and lost positions, 0 for the all-kings draw
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Statistics of the most recent search
    last_stats: SearchStats,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            last_stats: SearchStats::default(),
        }
    }

    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, side: Side, depth: u8) -> SearchResult {
        let outcome = get_best_move(pos, side, depth);
        self.last_stats = outcome.stats;

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: outcome.stats.nodes,
            cutoffs: outcome.stats.cutoffs,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.last_stats = SearchStats::default();
    }
}

// Re-export for direct use
pub use eval::{evaluate, evaluate_breakdown, EvalBreakdown};
pub use search::{get_best_move, SearchOutcome, SearchStats, DRAW_SCORE, WIN_SCORE};

#[cfg(test)]
mod lib_tests;
