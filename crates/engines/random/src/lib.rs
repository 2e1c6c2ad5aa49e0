//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. This is the easy
//! level, and a handy opponent for stress testing the turn controller.

use chess_core::{all_safe_moves, Board, Color, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A chess engine that plays random legal moves.
///
/// No evaluation happens; every legal move is equally likely.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible choices, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        let moves = all_safe_moves(board, side);
        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 0,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
