//! Static evaluation. Scores are white-positive regardless of whose turn it is.

use crate::{board::Board, movegen::pseudo_move_count, types::*};

pub const CENTER_BONUS: i32 = 5;
pub const ISOLATED_PAWN_PENALTY: i32 = 5;
pub const DOUBLED_PAWN_PENALTY: i32 = 5;
pub const KING_EXPOSURE_PENALTY: i32 = 10;

const CENTER: [Square; 4] = [
    Square { row: 3, col: 3 },
    Square { row: 3, col: 4 },
    Square { row: 4, col: 3 },
    Square { row: 4, col: 4 },
];

/// Material + central control + mobility + pawn structure + king safety.
pub fn evaluate(board: &Board) -> i32 {
    material(board) + central_control(board) + mobility(board) + pawn_structure(board) + king_safety(board)
}

fn material(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, pc)| pc.color.sign() * pc.kind.value())
        .sum()
}

fn central_control(board: &Board) -> i32 {
    CENTER
        .iter()
        .filter_map(|&sq| board.piece_at(sq))
        .map(|pc| pc.color.sign() * CENTER_BONUS)
        .sum()
}

/// Half the difference in pseudo-legal move counts. Pseudo moves keep this
/// cheap; pinned pieces still count.
fn mobility(board: &Board) -> i32 {
    let white = pseudo_move_count(board, Color::White) as i32;
    let black = pseudo_move_count(board, Color::Black) as i32;
    (white - black) / 2
}

fn pawn_structure(board: &Board) -> i32 {
    // pawns per file, per color
    let mut files = [[0i32; 8]; 2];
    for (sq, pc) in board.pieces() {
        if pc.kind == PieceKind::Pawn {
            files[pc.color.idx()][sq.col as usize] += 1;
        }
    }

    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let counts = &files[color.idx()];
        let mut penalty = 0;
        for file in 0..8 {
            let n = counts[file];
            if n == 0 {
                continue;
            }
            let left = if file > 0 { counts[file - 1] } else { 0 };
            let right = if file < 7 { counts[file + 1] } else { 0 };
            if left == 0 && right == 0 {
                penalty += n * ISOLATED_PAWN_PENALTY;
            }
            if n > 1 {
                penalty += n * DOUBLED_PAWN_PENALTY;
            }
        }
        score -= color.sign() * penalty;
    }
    score
}

fn king_safety(board: &Board) -> i32 {
    let mut score = 0;
    for color in [Color::White, Color::Black] {
        let Some(ksq) = board.king_sq(color) else {
            continue;
        };
        let exposed = (-1..=1i8)
            .flat_map(|dr| (-1..=1i8).map(move |dc| (dr, dc)))
            .filter(|&d| d != (0, 0))
            .any(|(dr, dc)| {
                board.is_occupied_by_opponent(ksq.row as i8 + dr, ksq.col as i8 + dc, color)
            });
        if exposed {
            score -= color.sign() * KING_EXPOSURE_PENALTY;
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
