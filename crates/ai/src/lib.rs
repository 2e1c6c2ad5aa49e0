//! Difficulty policy.
//!
//! Maps the three difficulty levels onto concrete engines:
//! - Easy: a uniformly random legal move
//! - Medium: the legal move whose resulting board evaluates best
//! - Hard: minimax with alpha-beta, three plies below each candidate move

use std::fmt;
use std::str::FromStr;

use chess_core::{Board, ChessError, ChessResult, Color, Engine, Move};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Builds the engine that plays at `difficulty`.
pub fn engine_for(difficulty: Difficulty) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomEngine::new()),
        Difficulty::Medium => Box::new(ClassicalEngine::greedy()),
        Difficulty::Hard => Box::new(ClassicalEngine::hard()),
    }
}

/// Picks a move for `color` at the given difficulty.
///
/// Fails with [`ChessError::NoLegalMoves`] when `color` is checkmated or
/// stalemated.
pub fn choose_move(board: &Board, color: Color, difficulty: Difficulty) -> ChessResult<Move> {
    let mut engine = engine_for(difficulty);
    let result = engine.search(board, color);
    let mv = result.best_move.ok_or(ChessError::NoLegalMoves)?;
    debug!(%difficulty, %color, %mv, score = result.score, nodes = result.nodes, "chose move");
    Ok(mv)
}
