//! Classical Chess Engine
//!
//! Scores every legal move by the minimax value of the position it leads to.
//! With no lookahead this is the greedy one-ply player; with three plies of
//! lookahead it is the strongest level.

mod search;

use chess_core::{Board, Color, Engine, SearchResult};

/// Plies searched below each candidate move at the hardest level.
pub const HARD_LOOKAHEAD: u8 = 3;

/// Evaluation-driven engine.
///
/// `lookahead` is the number of plies searched after the candidate move:
/// 0 compares static evaluations, anything higher runs alpha-beta minimax.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    lookahead: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new(lookahead: u8) -> Self {
        Self {
            lookahead,
            nodes: 0,
        }
    }

    /// Picks the move whose resulting position evaluates best.
    pub fn greedy() -> Self {
        Self::new(0)
    }

    pub fn hard() -> Self {
        Self::new(HARD_LOOKAHEAD)
    }

    pub fn lookahead(&self) -> u8 {
        self.lookahead
    }
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::hard()
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(board, side, self.lookahead, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth: self.lookahead,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        if self.lookahead == 0 {
            "Greedy"
        } else {
            "Minimax"
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::pick_best_move;
