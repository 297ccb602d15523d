pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every checkers engine
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from the searching side's perspective
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (optional, for stats)
    pub nodes: u64,
    /// Number of alpha-beta cutoffs (optional, for stats)
    pub cutoffs: u64,
}

/// Trait that all checkers engines must implement.
///
/// The driver owns the authoritative position; an engine only proposes a
/// move for the side it is asked about.
pub trait Engine: Send {
    /// Search `pos` for `side` to a depth of `depth` plies.
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, side: Side, depth: u8) -> SearchResult;

    /// Returns the engine's name for match reports
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "checkers-minimax"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
