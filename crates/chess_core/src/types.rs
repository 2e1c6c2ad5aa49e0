use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn step. White starts on row 6 and walks toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    /// +1 for white, -1 for black. Scores are always white-positive.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used by the evaluator.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }

    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { color, kind })
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

/// A board coordinate. Row 0 is black's back rank, row 7 is white's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

// Helpers
pub fn on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = ChessError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        let sq = Square {
            row: raw.row,
            col: raw.col,
        };
        if sq.is_on_board() {
            Ok(sq)
        } else {
            Err(ChessError::InvalidSquare(format!(
                "row {} col {}",
                raw.row, raw.col
            )))
        }
    }
}

impl Square {
    /// False for a hand-built square outside the 8x8 grid.
    pub fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    pub fn new(row: i8, col: i8) -> Option<Square> {
        if on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        if !self.is_on_board() {
            return None;
        }
        Square::new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Every square, row by row from black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn from_algebraic(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            row: b'8' - r,
            col: f - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}

/// A bare from/to pair. Captures, checks and promotion are read off the
/// board, never stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ChessError;

    /// Coordinate notation, e.g. `e2e4`. A trailing `q` is tolerated because
    /// promotion always yields a queen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let txt = s.trim();
        if !txt.is_ascii() || (txt.len() != 4 && txt.len() != 5) {
            return Err(ChessError::InvalidMove(s.to_string()));
        }
        if txt.len() == 5 && !txt[4..].eq_ignore_ascii_case("q") {
            return Err(ChessError::InvalidMove(s.to_string()));
        }
        let from = txt[0..2].parse::<Square>()?;
        let to = txt[2..4].parse::<Square>()?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_names_map_to_rows_from_black_side() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!(e2, Square { row: 6, col: 4 });
        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!(a8, Square { row: 0, col: 0 });
        assert_eq!(Square { row: 7, col: 7 }.to_string(), "h1");
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
    }

    #[test]
    fn offsets_never_leave_the_board() {
        let h1 = Square { row: 7, col: 7 };
        assert!(h1.offset(1, 0).is_none());
        assert!(h1.offset(0, 1).is_none());
        assert_eq!(h1.offset(-1, -1), Some(Square { row: 6, col: 6 }));
        assert!(Square::new(-1, 3).is_none());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn off_board_squares_are_rejected_when_deserialized() {
        #[derive(Debug, Deserialize)]
        struct Holder {
            sq: Square,
        }
        let ok: Holder = toml::from_str("sq = { row = 6, col = 4 }").unwrap();
        assert_eq!(ok.sq.to_string(), "e2");
        assert!(toml::from_str::<Holder>("sq = { row = 8, col = 0 }").is_err());
        assert!(toml::from_str::<Holder>("sq = { row = 0, col = 200 }").is_err());
    }

    #[test]
    fn hand_built_off_board_square_is_harmless() {
        let sq = Square { row: 127, col: 0 };
        assert!(!sq.is_on_board());
        assert!(sq.offset(1, 0).is_none());
        assert_eq!(sq.to_string(), "(127,0)");
    }

    #[test]
    fn coordinate_moves_parse() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from, Square { row: 6, col: 4 });
        assert_eq!(mv.to, Square { row: 4, col: 4 });
        assert_eq!(mv.to_string(), "e2e4");

        assert!("a7a8q".parse::<Move>().is_ok());
        assert!(matches!(
            "a7a8n".parse::<Move>(),
            Err(ChessError::InvalidMove(_))
        ));
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(ChessError::InvalidSquare(_))
        ));
        assert!("e2".parse::<Move>().is_err());
    }
}
