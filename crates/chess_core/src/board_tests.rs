use super::*;

const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

#[test]
fn test_initial_board_layout() {
    let b = Board::initial();
    assert_eq!(b.to_placement(), START_PLACEMENT);
    assert_eq!(
        b.piece_at(sq("e1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.piece_at(sq("d8")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(b.pieces().count(), 32);
    assert_eq!(b.king_sq(Color::Black), Some(Square { row: 0, col: 4 }));
}

#[test]
fn test_from_placement_matches_initial() {
    let b = Board::from_placement(START_PLACEMENT).unwrap();
    assert_eq!(b, Board::initial());
}

#[test]
fn test_from_placement_rejects_garbage() {
    assert!(matches!(
        Board::from_placement("8/8/8"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Board::from_placement("9/8/8/8/8/8/8/8"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Board::from_placement("7x/8/8/8/8/8/8/8"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Board::from_placement("ppppppppp/8/8/8/8/8/8/8"),
        Err(ChessError::InvalidFen(_))
    ));
}

#[test]
fn test_probes_tolerate_off_board_coordinates() {
    let b = Board::initial();
    assert!(!b.is_empty(-1, 0));
    assert!(!b.is_empty(3, 8));
    assert!(!b.is_occupied_by_opponent(8, 8, Color::White));
    assert!(b.get(-3, 2).is_none());

    assert!(b.is_empty(4, 4));
    assert!(b.is_occupied_by_opponent(1, 0, Color::White));
    assert!(!b.is_occupied_by_opponent(6, 0, Color::White));
}

#[test]
fn test_clone_is_independent() {
    let original = Board::initial();
    let mut copy = original.clone();
    copy.make_move(Move::new(sq("e2"), sq("e4")));
    assert_ne!(copy, original);
    assert!(original.piece_at(sq("e4")).is_none());
}

#[test]
fn test_make_move_overwrites_capture() {
    let mut b = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
    let captured = b.make_move(Move::new(sq("e4"), sq("d5")));
    assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(
        b.piece_at(sq("d5")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert!(b.piece_at(sq("e4")).is_none());
}

#[test]
fn test_pawn_promotes_to_queen_on_last_row() {
    let mut b = Board::from_placement("4k3/P7/8/8/8/8/7p/4K3").unwrap();
    b.make_move(Move::new(sq("a7"), sq("a8")));
    assert_eq!(
        b.piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    b.make_move(Move::new(sq("h2"), sq("h1")));
    assert_eq!(
        b.piece_at(sq("h1")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
}

#[test]
fn test_move_then_inverse_restores_board() {
    let start = Board::from_placement("r3k3/8/8/8/8/8/8/R3K3").unwrap();
    let mv = Move::new(sq("a1"), sq("a8"));

    let mut b = start.clone();
    let captured = b.make_move(mv);
    assert!(captured.is_some());

    b.make_move(Move::new(mv.to, mv.from));
    b.set_piece(mv.to, captured);
    assert_eq!(b, start);
}

#[test]
fn test_moving_from_empty_square_changes_nothing() {
    let mut b = Board::initial();
    assert!(b.make_move(Move::new(sq("e4"), sq("e5"))).is_none());
    assert_eq!(b, Board::initial());
}

#[test]
fn test_off_board_squares_read_empty_and_ignore_writes() {
    let mut b = Board::initial();
    let outside = Square { row: 8, col: 0 };
    assert!(b.piece_at(outside).is_none());

    b.set_piece(outside, Some(Piece::new(Color::White, PieceKind::Queen)));
    assert_eq!(b, Board::initial());

    assert!(b.make_move(Move::new(sq("e2"), outside)).is_none());
    assert_eq!(b, Board::initial());
}
