//! Command interpreter between the terminal and the turn controller.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chess_ai::{engine_for, Difficulty};
use chess_core::{
    all_safe_moves, legal_moves_from, ChessError, ClickOutcome, Engine, GameState, Move, Phase,
    Square,
};
use crate::config::ConsoleConfig;

/// Whether the input loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub const HELP: &str = "\
Commands:
  show                 print the board
  click <square>       select a piece, or move the selected piece there
  move <from><to>      play a move, e.g. move e2e4
  moves [square]       list legal moves for the side to move
  status               whose turn it is, check, mate or stalemate
  difficulty [level]   show or set the engine level (easy, medium, hard)
  new                  start a new game
  help                 this text
  quit                 leave";

pub struct Session {
    game: GameState,
    difficulty: Difficulty,
    engine: Box<dyn Engine>,
    delay: Duration,
}

impl Session {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            game: GameState::new(config.engine_side()),
            difficulty: config.difficulty,
            engine: engine_for(config.difficulty),
            delay: config.engine_delay(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Prints the opening position and lets the engine open if it plays white.
    pub fn start(&mut self, out: &mut impl Write) -> Result<()> {
        self.print_board(out)?;
        self.engine_reply(out)
    }

    /// Runs one input line. Command errors are reported on `out`; only I/O
    /// failures surface as `Err`.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<Control> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(Control::Continue);
        };

        match command {
            "show" | "board" => self.print_board(out)?,
            "click" => match args.first() {
                Some(sq) => self.click(sq, out)?,
                None => writeln!(out, "usage: click <square>")?,
            },
            "move" | "m" => match args.first() {
                Some(mv) => self.submit(mv, out)?,
                None => writeln!(out, "usage: move <from><to>")?,
            },
            "moves" => self.list_moves(args.first().copied(), out)?,
            "status" => writeln!(out, "{}", self.game.status_line())?,
            "difficulty" => match args.first() {
                Some(level) => match level.parse::<Difficulty>() {
                    Ok(level) => {
                        self.difficulty = level;
                        self.engine = engine_for(level);
                        writeln!(out, "Difficulty set to {level}")?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                },
                None => writeln!(out, "Difficulty: {}", self.difficulty)?,
            },
            "new" => {
                self.game.reset();
                self.engine.new_game();
                self.print_board(out)?;
                self.engine_reply(out)?;
            }
            "help" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Control::Quit),
            other => writeln!(out, "unknown command '{other}', try 'help'")?,
        }
        Ok(Control::Continue)
    }

    fn click(&mut self, raw: &str, out: &mut impl Write) -> Result<()> {
        let sq = match raw.parse::<Square>() {
            Ok(sq) => sq,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(());
            }
        };

        match self.game.click(sq) {
            ClickOutcome::Selected { from, targets } => {
                let names: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
                if names.is_empty() {
                    writeln!(out, "Selected {from}: no legal moves")?;
                } else {
                    writeln!(out, "Selected {from}: {}", names.join(" "))?;
                }
            }
            ClickOutcome::Moved { mv, .. } => {
                writeln!(out, "Played {mv}")?;
                self.after_human_move(out)?;
            }
            ClickOutcome::Cleared => writeln!(out, "Selection cleared")?,
            ClickOutcome::Ignored => writeln!(out, "Nothing to select on {sq}")?,
        }
        Ok(())
    }

    fn submit(&mut self, raw: &str, out: &mut impl Write) -> Result<()> {
        let result = raw
            .parse::<Move>()
            .and_then(|mv| self.game.submit_move(mv).map(|_| mv));
        match result {
            Ok(mv) => {
                writeln!(out, "Played {mv}")?;
                self.after_human_move(out)
            }
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(())
            }
        }
    }

    fn list_moves(&self, square: Option<&str>, out: &mut impl Write) -> Result<()> {
        let board = self.game.board();
        let side = self.game.side_to_move();
        let moves = match square.map(str::parse::<Square>) {
            None => all_safe_moves(board, side),
            Some(Ok(sq)) => legal_moves_from(board, side, sq),
            Some(Err(e)) => {
                writeln!(out, "error: {e}")?;
                return Ok(());
            }
        };

        if moves.is_empty() {
            writeln!(out, "No legal moves")?;
        } else {
            let names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
            writeln!(out, "{}", names.join(" "))?;
        }
        Ok(())
    }

    fn after_human_move(&mut self, out: &mut impl Write) -> Result<()> {
        self.print_board(out)?;
        self.engine_reply(out)
    }

    /// Plays the engine's move if it is on turn, after the configured delay.
    fn engine_reply(&mut self, out: &mut impl Write) -> Result<()> {
        if self.game.phase() != &Phase::EngineToMove {
            return Ok(());
        }
        out.flush()?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        match self.game.play_engine_move(self.engine.as_mut()) {
            Ok(mv) => {
                writeln!(out, "Engine plays {mv}")?;
                self.print_board(out)
            }
            Err(ChessError::GameOver) => Ok(()),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(())
            }
        }
    }

    fn print_board(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.game.board())?;
        writeln!(out, "{}", self.game.status_line())?;
        Ok(())
    }
}

/// Feeds `input` line by line into `session` until `quit` or end of input.
/// A failed read is returned as an error rather than treated as a quit.
pub fn run(session: &mut Session, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if session.handle(&line, out)? == Control::Quit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
