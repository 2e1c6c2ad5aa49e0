use std::fmt;

use crate::error::{ChessError, ChessResult};
use crate::types::*;

/// The 8x8 grid. It is the only source of truth for piece placement; search
/// explores hypotheticals on clones of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position, black on rows 0-1 and white on rows 6-7.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(Color::Black, kind));
            b.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.cells[7][col] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    /// Parses the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_fen_char(ch).ok_or_else(|| {
                        ChessError::InvalidFen(format!("invalid piece char '{ch}'"))
                    })?;
                    if col >= 8 {
                        return Err(ChessError::InvalidFen(format!(
                            "too many files in rank '{rank_str}'"
                        )));
                    }
                    board.cells[row][col] = Some(pc);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank '{rank_str}' does not cover 8 files"
                )));
            }
        }
        Ok(board)
    }

    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Raw probe; anything off the board reads as empty.
    pub fn get(&self, row: i8, col: i8) -> Option<Piece> {
        if on_board(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Empty for a square off the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() {
            self.cells[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    /// Writes to an off-board square are dropped.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.is_on_board() {
            self.cells[sq.row as usize][sq.col as usize] = pc;
        }
    }

    /// False for off-board coordinates.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        on_board(row, col) && self.cells[row as usize][col as usize].is_none()
    }

    /// False for off-board coordinates.
    pub fn is_occupied_by_opponent(&self, row: i8, col: i8, color: Color) -> bool {
        matches!(self.get(row, col), Some(pc) if pc.color != color)
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Moves the piece on `mv.from` to `mv.to`, overwriting whatever stood
    /// there, and turns a pawn that reaches its last row into a queen.
    /// Returns the overwritten piece. No legality check is made; a move
    /// touching an off-board square leaves the board unchanged.
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        if !mv.to.is_on_board() {
            return None;
        }
        let Some(mut moved) = self.piece_at(mv.from) else {
            return None;
        };
        let captured = self.piece_at(mv.to);

        if moved.kind == PieceKind::Pawn && mv.to.row == moved.color.promotion_row() {
            moved.kind = PieceKind::Queen;
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));
        captured
    }

    /// Copy of the board with `mv` played on it.
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                match cell {
                    Some(pc) => write!(f, " {}", pc.glyph())?,
                    None => write!(f, " ·")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
