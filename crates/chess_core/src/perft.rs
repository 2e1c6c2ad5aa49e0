use crate::{board::Board, movegen::all_safe_moves, types::Color};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_safe_moves(board, side_to_move);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.with_move(mv), side_to_move.other(), depth - 1))
        .sum()
}
