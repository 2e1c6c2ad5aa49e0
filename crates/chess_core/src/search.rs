//! Minimax search with alpha-beta pruning over cloned boards.

use crate::{
    board::Board,
    eval::evaluate,
    movegen::{all_safe_moves, is_king_in_check},
    types::{Color, Move},
};

/// Score of a mated side. Far outside any material total so a forced mate
/// always beats ordinary evaluation.
pub const MATE_SCORE: i32 = 10_000;

/// Terminal score for `mover` being mated with `depth` plies still to search.
/// Remaining depth is added so a nearer mate outscores a farther one.
pub fn mate_score(mover: Color, depth: u8) -> i32 {
    -mover.sign() * (MATE_SCORE + i32::from(depth))
}

/// Full-window minimax value of `board` searched `depth` plies deep.
///
/// White maximizes, black minimizes. Alpha-beta cutoffs only skip work; the
/// returned value equals plain minimax at the same depth.
pub fn minimax(board: &Board, depth: u8, alpha: i32, beta: i32, maximizing_white: bool) -> i32 {
    let mut nodes = 0;
    minimax_counted(board, depth, alpha, beta, maximizing_white, &mut nodes)
}

/// Same as [`minimax`], counting every visited node into `nodes`.
pub fn minimax_counted(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing_white: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let mover = if maximizing_white {
        Color::White
    } else {
        Color::Black
    };
    let moves = all_safe_moves(board, mover);

    if moves.is_empty() {
        if is_king_in_check(board, mover) {
            return mate_score(mover, depth); // Checkmate
        }
        return 0; // Stalemate
    }

    let children = ordered_children(board, moves, mover);

    if maximizing_white {
        let mut best = i32::MIN;
        for (_, child) in &children {
            let score = minimax_counted(child, depth - 1, alpha, beta, false, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for (_, child) in &children {
            let score = minimax_counted(child, depth - 1, alpha, beta, true, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

/// Sorts `moves` in place: captures first, then moves that give check, then
/// the rest. Relative order inside each group is kept.
pub fn order_moves(board: &Board, moves: &mut Vec<Move>, mover: Color) {
    let children = ordered_children(board, std::mem::take(moves), mover);
    moves.extend(children.into_iter().map(|(mv, _)| mv));
}

/// Plays each move on a clone and returns the pairs in search order.
fn ordered_children(board: &Board, moves: Vec<Move>, mover: Color) -> Vec<(Move, Board)> {
    let mut keyed: Vec<(u8, Move, Board)> = moves
        .into_iter()
        .map(|mv| {
            let capture = board.piece_at(mv.to).is_some();
            let child = board.with_move(mv);
            let rank = if capture {
                0
            } else if is_king_in_check(&child, mover.other()) {
                1
            } else {
                2
            };
            (rank, mv, child)
        })
        .collect();
    keyed.sort_by_key(|(rank, _, _)| *rank);
    keyed.into_iter().map(|(_, mv, child)| (mv, child)).collect()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
