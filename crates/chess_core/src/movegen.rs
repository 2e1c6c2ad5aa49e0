use tracing::warn;

use crate::{board::Board, types::*};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal moves of the piece on `from`, ignoring whether they leave the
/// mover's king attacked. Empty for an empty square.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(28);
    pseudo_moves_into(board, from, &mut out);
    out
}

/// Appends pseudo-legal moves of the piece on `from` to `out`.
pub fn pseudo_moves_into(board: &Board, from: Square, out: &mut Vec<Move>) {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_leaper(board, from, pc.color, out, &KNIGHT_JUMPS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONAL),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONAL),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, out, &ORTHOGONAL);
            gen_slider(board, from, pc.color, out, &DIAGONAL);
        }
        PieceKind::King => gen_leaper(board, from, pc.color, out, &KING_STEPS),
    }
}

/// Total pseudo-legal move count of every piece of `color`.
pub fn pseudo_move_count(board: &Board, color: Color) -> usize {
    let mut buf = Vec::with_capacity(64);
    for (sq, pc) in board.pieces() {
        if pc.color == color {
            pseudo_moves_into(board, sq, &mut buf);
        }
    }
    buf.len()
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let r = from.row as i8;
    let f = from.col as i8;
    let dir = c.forward();

    // forward 1, then forward 2 from the start row through an empty square
    if board.is_empty(r + dir, f) {
        push(out, from, r + dir, f);
        if from.row == c.pawn_start_row() && board.is_empty(r + 2 * dir, f) {
            push(out, from, r + 2 * dir, f);
        }
    }

    for df in [-1, 1] {
        if board.is_occupied_by_opponent(r + dir, f + df, c) {
            push(out, from, r + dir, f + df);
        }
    }
}

fn gen_leaper(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, df) in deltas {
        if let Some(to) = from.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, df) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, df) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn push(out: &mut Vec<Move>, from: Square, row: i8, col: i8) {
    if let Some(to) = Square::new(row, col) {
        out.push(Move::new(from, to));
    }
}

/// True if any opposing piece has a pseudo-legal move onto `color`'s king.
///
/// A board without that king reports `true`: the position is treated as lost
/// rather than trusted, and the anomaly is logged.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let ksq = match board.king_sq(color) {
        Some(s) => s,
        None => {
            warn!(%color, placement = %board.to_placement(), "king missing from board");
            return true;
        }
    };

    let mut buf = Vec::with_capacity(28);
    board.pieces().any(|(sq, pc)| {
        if pc.color == color {
            return false;
        }
        buf.clear();
        pseudo_moves_into(board, sq, &mut buf);
        buf.iter().any(|mv| mv.to == ksq)
    })
}

/// Pseudo-legal moves of the piece on `from` that do not leave `mover`'s own
/// king in check. Each candidate is tried on a fresh clone.
pub fn safe_moves(board: &Board, from: Square, mover: Color) -> Vec<Move> {
    let mut out = Vec::new();
    safe_moves_into(board, from, mover, &mut out);
    out
}

fn safe_moves_into(board: &Board, from: Square, mover: Color, out: &mut Vec<Move>) {
    let start = out.len();
    pseudo_moves_into(board, from, out);

    let mut kept = start;
    for i in start..out.len() {
        let mv = out[i];
        if !is_king_in_check(&board.with_move(mv), mover) {
            out[kept] = mv;
            kept += 1;
        }
    }
    out.truncate(kept);
}

/// Every legal move of `color`, square by square in row-major order.
pub fn all_safe_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (sq, pc) in board.pieces() {
        if pc.color == color {
            safe_moves_into(board, sq, color, &mut out);
        }
    }
    out
}

/// Legal moves for the piece on `from`, or nothing when that square does not
/// hold a piece of the side to move.
pub fn legal_moves_from(board: &Board, side_to_move: Color, from: Square) -> Vec<Move> {
    match board.piece_at(from) {
        Some(pc) if pc.color == side_to_move => safe_moves(board, from, side_to_move),
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
