//! Turn controller: selection, move commitment and terminal-state detection.

use tracing::{debug, info};

use crate::{
    Engine,
    board::Board,
    error::{ChessError, ChessResult},
    movegen::{all_safe_moves, is_king_in_check, legal_moves_from},
    types::*,
};

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Classifies the position: no legal moves means mate when in check,
/// stalemate otherwise.
pub fn game_status(board: &Board, side_to_move: Color) -> GameStatus {
    if !all_safe_moves(board, side_to_move).is_empty() {
        return GameStatus::Ongoing;
    }
    if is_king_in_check(board, side_to_move) {
        GameStatus::Checkmate {
            winner: side_to_move.other(),
        }
    } else {
        GameStatus::Stalemate
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected { from: Square, moves: Vec<Move> },
    /// The automated side is on move; the host calls
    /// [`GameState::play_engine_move`] when it is ready.
    EngineToMove,
    /// Absorbing until [`GameState::reset`].
    Over(GameStatus),
}

/// What a click did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected { from: Square, targets: Vec<Square> },
    Moved { mv: Move, status: GameStatus },
    Cleared,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    phase: Phase,
    engine_side: Option<Color>,
    /// Committed moves, for display
    history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GameState {
    /// Fresh game, white to move. `engine_side` is the color played by an
    /// automated opponent, if any.
    pub fn new(engine_side: Option<Color>) -> Self {
        let mut game = Self {
            board: Board::initial(),
            side_to_move: Color::White,
            phase: Phase::AwaitingSelection,
            engine_side,
            history: Vec::new(),
        };
        game.phase = game.phase_for_turn();
        game
    }

    /// Placement and side-to-move fields of a FEN string. Any further fields
    /// are ignored.
    pub fn from_fen(fen: &str, engine_side: Option<Color>) -> ChessResult<Self> {
        let mut parts = fen.split_whitespace();
        let placement = parts
            .next()
            .ok_or_else(|| ChessError::InvalidFen("empty FEN".to_string()))?;
        let board = Board::from_placement(placement)?;
        let side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(ChessError::InvalidFen(format!(
                    "invalid side to move '{other}'"
                )));
            }
        };

        let mut game = Self {
            board,
            side_to_move,
            phase: Phase::AwaitingSelection,
            engine_side,
            history: Vec::new(),
        };
        let status = game.status();
        game.phase = if status.is_terminal() {
            Phase::Over(status)
        } else {
            game.phase_for_turn()
        };
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn engine_side(&self) -> Option<Color> {
        self.engine_side
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over(_))
    }

    pub fn selected(&self) -> Option<Square> {
        match &self.phase {
            Phase::PieceSelected { from, .. } => Some(*from),
            _ => None,
        }
    }

    /// Destinations highlighted for the current selection.
    pub fn legal_destinations(&self) -> Vec<Square> {
        match &self.phase {
            Phase::PieceSelected { moves, .. } => moves.iter().map(|m| m.to).collect(),
            _ => Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::Over(status) => status,
            _ => game_status(&self.board, self.side_to_move),
        }
    }

    pub fn in_check(&self) -> bool {
        is_king_in_check(&self.board, self.side_to_move)
    }

    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Checkmate { winner } => format!("Checkmate: {winner} wins"),
            GameStatus::Stalemate => "Stalemate".to_string(),
            GameStatus::Ongoing if self.in_check() => {
                format!("{} to move (check)", self.side_to_move)
            }
            GameStatus::Ongoing => format!("{} to move", self.side_to_move),
        }
    }

    /// Applies a click on `at` to the selection state machine.
    pub fn click(&mut self, at: Square) -> ClickOutcome {
        match &self.phase {
            Phase::Over(_) | Phase::EngineToMove => return ClickOutcome::Ignored,
            Phase::PieceSelected { from, moves } => {
                let from = *from;
                if let Some(&mv) = moves.iter().find(|m| m.to == at) {
                    let status = self.commit(mv);
                    return ClickOutcome::Moved { mv, status };
                }
                if at == from {
                    self.phase = Phase::AwaitingSelection;
                    return ClickOutcome::Cleared;
                }
            }
            Phase::AwaitingSelection => {}
        }

        match self.board.piece_at(at) {
            Some(pc) if pc.color == self.side_to_move => {
                let moves = legal_moves_from(&self.board, self.side_to_move, at);
                let targets = moves.iter().map(|m| m.to).collect();
                self.phase = Phase::PieceSelected { from: at, moves };
                ClickOutcome::Selected { from: at, targets }
            }
            _ => {
                let had_selection = self.selected().is_some();
                self.phase = Phase::AwaitingSelection;
                if had_selection {
                    ClickOutcome::Cleared
                } else {
                    ClickOutcome::Ignored
                }
            }
        }
    }

    /// Plays a human move given as a from/to pair. The board is untouched
    /// unless the move is legal for the side to move.
    pub fn submit_move(&mut self, mv: Move) -> ChessResult<GameStatus> {
        match self.phase {
            Phase::Over(_) => return Err(ChessError::GameOver),
            Phase::EngineToMove => return Err(ChessError::EngineToMove),
            _ => {}
        }
        if !legal_moves_from(&self.board, self.side_to_move, mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        Ok(self.commit(mv))
    }

    /// Lets `engine` pick and play a move for the automated side.
    pub fn play_engine_move(&mut self, engine: &mut dyn Engine) -> ChessResult<Move> {
        match self.phase {
            Phase::EngineToMove => {}
            Phase::Over(_) => return Err(ChessError::GameOver),
            _ => return Err(ChessError::NotEngineTurn),
        }

        let result = engine.search(&self.board, self.side_to_move);
        let mv = result.best_move.ok_or(ChessError::NoLegalMoves)?;
        if !legal_moves_from(&self.board, self.side_to_move, mv.from).contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        debug!(
            engine = engine.name(),
            %mv,
            score = result.score,
            nodes = result.nodes,
            "engine move"
        );
        self.commit(mv);
        Ok(mv)
    }

    /// Back to the initial position, white to move, keeping the engine side.
    pub fn reset(&mut self) {
        *self = Self::new(self.engine_side);
    }

    /// Applies an already validated move, flips the turn and classifies the
    /// new position.
    fn commit(&mut self, mv: Move) -> GameStatus {
        self.board.make_move(mv);
        self.history.push(mv);
        self.side_to_move = self.side_to_move.other();

        let status = game_status(&self.board, self.side_to_move);
        self.phase = if status.is_terminal() {
            info!(?status, moves = self.history.len(), "game over");
            Phase::Over(status)
        } else {
            self.phase_for_turn()
        };
        status
    }

    fn phase_for_turn(&self) -> Phase {
        if self.engine_side == Some(self.side_to_move) {
            Phase::EngineToMove
        } else {
            Phase::AwaitingSelection
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
