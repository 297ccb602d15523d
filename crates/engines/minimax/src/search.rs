//! Minimax search with alpha-beta pruning

use checkers_core::{legal_moves_into, status, GameStatus, Move, Position, Side};
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Score of a won position for the root side. Dominates any evaluation.
pub const WIN_SCORE: f64 = 1000.0;

pub const DRAW_SCORE: f64 = 0.0;

/// Counters collected during one search. They never influence the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes below the root that were visited
    pub nodes: u64,
    /// Times a node stopped expanding because `beta <= alpha`
    pub cutoffs: u64,
}

/// Result from get_best_move.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's perspective
    pub score: f64,
    pub stats: SearchStats,
}

/// Searches the position and returns the best move for `side` with its score.
///
/// # Arguments
/// * `pos` - The position to search
/// * `side` - The side to move, which is also the maximizing side
/// * `max_depth` - Search depth in plies, counting the root move
///
/// When several moves share the best score the first one in move-generation
/// order wins. With no legal move the outcome carries no move and the loss
/// score `-WIN_SCORE`. The root move is always expanded, so a `max_depth` of
/// 0 searches like a depth of 1.
pub fn get_best_move(pos: &Position, side: Side, max_depth: u8) -> SearchOutcome {
    let mut search = Search::new(side);

    let mut moves = Vec::with_capacity(32);
    legal_moves_into(pos, side, &mut moves);

    if moves.is_empty() {
        debug!(%side, "no legal moves at root");
        return SearchOutcome {
            best_move: None,
            score: -WIN_SCORE,
            stats: search.stats,
        };
    }

    let mut best = moves[0];
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    for mv in moves {
        let next = pos.successor(mv);
        let score = search.minimax(
            &next,
            max_depth.saturating_sub(1),
            side.opponent(),
            false,
            alpha,
            beta,
        );
        trace!(%mv, score, "root move scored");

        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(score);
    }

    debug!(
        %side,
        depth = max_depth,
        best = %best,
        score = best_score,
        nodes = search.stats.nodes,
        cutoffs = search.stats.cutoffs,
        "search finished"
    );

    SearchOutcome {
        best_move: Some(best),
        score: best_score,
        stats: search.stats,
    }
}

struct Search {
    /// Side the whole search maximizes for
    root: Side,
    stats: SearchStats,
}

impl Search {
    fn new(root: Side) -> Self {
        Self {
            root,
            stats: SearchStats::default(),
        }
    }

    /// Fixed score of a finished game, from the root side's perspective.
    fn terminal_score(&self, status: GameStatus) -> Option<f64> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } if winner == self.root => Some(WIN_SCORE),
            GameStatus::Won { .. } => Some(-WIN_SCORE),
            GameStatus::Drawn => Some(DRAW_SCORE),
        }
    }

    fn minimax(
        &mut self,
        pos: &Position,
        depth: u8,
        to_move: Side,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes += 1;

        if let Some(score) = self.terminal_score(status(pos, to_move)) {
            return score;
        }
        if depth == 0 {
            return evaluate(pos, self.root);
        }

        let mut moves = Vec::with_capacity(32);
        legal_moves_into(pos, to_move, &mut moves);

        // Unreachable after the terminal check
        if moves.is_empty() {
            return if maximizing { -WIN_SCORE } else { WIN_SCORE };
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in moves {
                let next = pos.successor(mv);
                let score = self.minimax(&next, depth - 1, to_move.opponent(), false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break; // Beta cutoff
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in moves {
                let next = pos.successor(mv);
                let score = self.minimax(&next, depth - 1, to_move.opponent(), true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break; // Alpha cutoff
                }
            }
            best
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
