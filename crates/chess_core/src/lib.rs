pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::evaluate;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use search::{MATE_SCORE, mate_score, minimax, minimax_counted, order_moves};
pub use types::*;

// =============================================================================
// Engine trait: implemented by every automated player (random, classical)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Score of the chosen line, white-positive
    pub score: i32,
    /// Plies searched below the candidate move
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all automated players implement.
///
/// The turn controller only knows this trait, so difficulty levels are just
/// different engines behind it.
pub trait Engine: Send {
    /// Choose a move for `side` on `board`.
    ///
    /// # Arguments
    /// * `board` - The current position; never mutated
    /// * `side` - The color the engine plays
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, board: &Board, side: Color) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
