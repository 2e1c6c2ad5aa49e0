//! Root move selection on top of the shared minimax.

use chess_core::{all_safe_moves, minimax_counted, Board, Color, Move};
use tracing::trace;

/// Scores every legal move for `side` and returns the best with its score.
///
/// Each candidate is played on a copy of the board and the copy is searched
/// `lookahead` plies deep with a full window. White keeps the highest score,
/// black the lowest; on ties the earliest move in generation order wins.
///
/// # Arguments
/// * `board` - The position to search; never mutated
/// * `side` - The color to move
/// * `lookahead` - Plies searched below each candidate move
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` if `side` has no legal moves
pub fn pick_best_move(
    board: &Board,
    side: Color,
    lookahead: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let moves = all_safe_moves(board, side);
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let child = board.with_move(mv);
        let score = minimax_counted(
            &child,
            lookahead,
            i32::MIN,
            i32::MAX,
            side.other() == Color::White,
            nodes,
        );
        trace!(%mv, score, "root move");

        let improves = match best {
            None => true,
            Some((_, best_score)) => match side {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            },
        };
        if improves {
            best = Some((mv, score));
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
