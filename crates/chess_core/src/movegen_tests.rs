use super::*;

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn targets(moves: &[Move]) -> Vec<String> {
    let mut t: Vec<String> = moves.iter().map(|m| m.to.to_string()).collect();
    t.sort();
    t
}

#[test]
fn test_startpos_moves() {
    let board = Board::initial();
    // 16 pawn moves + 4 knight moves
    assert_eq!(all_safe_moves(&board, Color::White).len(), 20);
    assert_eq!(all_safe_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_pawn_single_and_double_push() {
    let board = Board::initial();
    assert_eq!(targets(&pseudo_moves(&board, sq("e2"))), ["e3", "e4"]);
    assert_eq!(targets(&pseudo_moves(&board, sq("d7"))), ["d5", "d6"]);
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    // Blocked on the intermediate square: no moves at all.
    let board = Board::from_placement("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
    assert!(pseudo_moves(&board, sq("e2")).is_empty());

    // Blocked on the destination only: single push survives.
    let board = Board::from_placement("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
    assert_eq!(targets(&pseudo_moves(&board, sq("e2"))), ["e3"]);
}

#[test]
fn test_pawn_double_push_only_from_start_row() {
    let board = Board::from_placement("4k3/8/8/8/8/4P3/8/4K3").unwrap();
    assert_eq!(targets(&pseudo_moves(&board, sq("e3"))), ["e4"]);
}

#[test]
fn test_pawn_captures_diagonally_forward_only() {
    // Black pieces on d5 and f5, a black pawn directly ahead on e5, a white
    // knight on d3 behind.
    let board = Board::from_placement("4k3/8/8/3ppp2/4P3/3N4/8/4K3").unwrap();
    assert_eq!(targets(&pseudo_moves(&board, sq("e4"))), ["d5", "f5"]);
}

#[test]
fn test_pawn_on_edge_file_has_one_capture_diagonal() {
    let board = Board::from_placement("4k3/8/8/1p6/P7/8/8/4K3").unwrap();
    assert_eq!(targets(&pseudo_moves(&board, sq("a4"))), ["a5", "b5"]);
}

#[test]
fn test_knight_moves_skip_own_pieces() {
    let board = Board::initial();
    assert_eq!(targets(&pseudo_moves(&board, sq("b1"))), ["a3", "c3"]);

    let board = Board::from_placement("4k3/8/8/8/3N4/8/8/4K3").unwrap();
    assert_eq!(pseudo_moves(&board, sq("d4")).len(), 8);
}

#[test]
fn test_sliders_stop_at_first_piece() {
    // Rook on a1, own pawn on a4, enemy knight on d1.
    let board = Board::from_placement("4k3/8/8/8/P7/8/8/R2n3K").unwrap();
    assert_eq!(
        targets(&pseudo_moves(&board, sq("a1"))),
        ["a2", "a3", "b1", "c1", "d1"]
    );

    let board = Board::from_placement("4k3/8/8/8/3B4/8/8/4K3").unwrap();
    assert_eq!(pseudo_moves(&board, sq("d4")).len(), 13);

    let board = Board::from_placement("4k3/8/8/8/3Q4/8/8/7K").unwrap();
    assert_eq!(pseudo_moves(&board, sq("d4")).len(), 27);
}

#[test]
fn test_king_has_no_castling() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
    assert_eq!(
        targets(&pseudo_moves(&board, sq("e1"))),
        ["d1", "d2", "e2", "f1", "f2"]
    );
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::initial();
    assert!(pseudo_moves(&board, sq("e4")).is_empty());
    assert!(legal_moves_from(&board, Color::White, sq("e4")).is_empty());
}

#[test]
fn test_legal_moves_from_requires_side_to_move() {
    let board = Board::initial();
    assert!(legal_moves_from(&board, Color::White, sq("e7")).is_empty());
    assert_eq!(legal_moves_from(&board, Color::Black, sq("e7")).len(), 2);
}

#[test]
fn test_check_detection() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/4R1K1").unwrap();
    assert!(is_king_in_check(&board, Color::Black));
    assert!(!is_king_in_check(&board, Color::White));

    let blocked = Board::from_placement("4k3/4p3/8/8/8/8/8/4R1K1").unwrap();
    assert!(!is_king_in_check(&blocked, Color::Black));

    // Pawn checks diagonally, not straight ahead.
    let pawn = Board::from_placement("8/8/8/3k4/4P3/8/8/6K1").unwrap();
    assert!(is_king_in_check(&pawn, Color::Black));
    let pawn_ahead = Board::from_placement("8/8/8/4k3/4P3/8/8/6K1").unwrap();
    assert!(!is_king_in_check(&pawn_ahead, Color::Black));
}

#[test]
fn test_missing_king_counts_as_check() {
    let board = Board::from_placement("8/8/8/8/8/8/8/4K3").unwrap();
    assert!(is_king_in_check(&board, Color::Black));
    assert!(!is_king_in_check(&board, Color::White));
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    // White bishop on e2 pinned by the rook on e8 against the king on e1.
    let board = Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
    assert!(!pseudo_moves(&board, sq("e2")).is_empty());
    assert!(safe_moves(&board, sq("e2"), Color::White).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    // Black rook controls the d-file.
    let board = Board::from_placement("3rk3/8/8/8/8/8/8/4K3").unwrap();
    assert_eq!(
        targets(&safe_moves(&board, sq("e1"), Color::White)),
        ["e2", "f1", "f2"]
    );
}

#[test]
fn test_in_check_only_evasions_are_legal() {
    // Rook checks along the first rank.
    let board = Board::from_placement("4k3/8/8/8/8/8/5N2/r3K3").unwrap();
    assert!(is_king_in_check(&board, Color::White));
    let moves = all_safe_moves(&board, Color::White);
    for mv in &moves {
        assert!(!is_king_in_check(&board.with_move(*mv), Color::White));
    }
    // Nf2-d1 interposes, Nf2-h3 ignores the check.
    assert!(moves.contains(&Move::new(sq("f2"), sq("d1"))));
    assert!(!moves.contains(&Move::new(sq("f2"), sq("h3"))));
}

#[test]
fn test_legal_moves_are_subset_of_pseudo_moves() {
    let boards = [
        Board::initial(),
        Board::from_placement("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR").unwrap(),
        Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap(),
    ];
    for board in &boards {
        for (from, pc) in board.pieces() {
            let pseudo = pseudo_moves(board, from);
            for mv in safe_moves(board, from, pc.color) {
                assert!(pseudo.contains(&mv), "{mv} not pseudo-legal");
            }
        }
    }
}

#[test]
fn test_pseudo_move_count_ignores_pins() {
    let board = Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
    let legal = all_safe_moves(&board, Color::White).len();
    assert!(pseudo_move_count(&board, Color::White) > legal);
}

#[test]
fn test_off_board_origin_has_no_legal_moves() {
    let board = Board::initial();
    for outside in [Square { row: 8, col: 0 }, Square { row: 200, col: 200 }] {
        assert!(legal_moves_from(&board, Color::White, outside).is_empty());
        assert!(pseudo_moves(&board, outside).is_empty());
        assert!(safe_moves(&board, outside, Color::White).is_empty());
    }
}
