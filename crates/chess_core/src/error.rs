//! Error types for the rules engine and turn controller.
//!
//! Every variant is a recoverable, local condition. A rejected move never
//! mutates the game.

use thiserror::Error;

use crate::types::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not among the legal moves of the side to move
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// Checkmate or stalemate was reached; only a reset is accepted
    #[error("the game is over")]
    GameOver,

    /// The automated side has to play before a human move is accepted
    #[error("waiting for the engine to move")]
    EngineToMove,

    /// The side to move is played by a human
    #[error("the side to move is not played by the engine")]
    NotEngineTurn,

    /// Asked an engine to move in a terminal position
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// Result type alias for rules-engine operations
pub type ChessResult<T> = Result<T, ChessError>;
