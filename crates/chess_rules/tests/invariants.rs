//! Properties that must hold for every position reached by legal play.

use chess_rules::{
    Board, Color, Square, all_legal_moves, legal_moves, pseudo_legal_moves,
};

const POSITIONS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR",
];

fn assert_positions_consistent(board: &Board) {
    for s in Square::all() {
        if let Some(p) = board.piece_at(s) {
            assert_eq!(p.square(), s);
        }
    }
}

fn check_node(board: &mut Board, to_move: Color) {
    assert_positions_consistent(board);
    let before = board.clone();

    for piece in before.pieces(to_move) {
        let from = piece.square();
        let pseudo = pseudo_legal_moves(&piece, &before);
        let legal = legal_moves(&before, from);

        for to in &legal {
            assert!(pseudo.contains(to), "{from}{to} is legal but not pseudo-legal");

            let undo = board.execute(from, *to).unwrap();
            assert!(!board.in_check(to_move), "{from}{to} leaves the king in check");
            assert_positions_consistent(board);
            board.reverse(undo);
            assert_eq!(*board, before, "{from}{to} did not round-trip");
        }

        // Every rejected pseudo-legal move really does leave the king attacked.
        for to in pseudo.iter().filter(|t| !legal.contains(*t)) {
            let after = board.speculate(from, *to).unwrap();
            assert!(after.in_check(to_move));
        }
        assert_eq!(*board, before);
    }
}

fn walk(board: &mut Board, to_move: Color, depth: u8) {
    check_node(board, to_move);
    if depth == 0 {
        return;
    }
    for mv in all_legal_moves(board, to_move) {
        let undo = board.execute(mv.from, mv.to).unwrap();
        walk(board, to_move.other(), depth - 1);
        board.reverse(undo);
    }
}

#[test]
fn invariants_hold_two_plies_deep() {
    for fen in POSITIONS {
        let mut board = Board::from_fen(fen).unwrap();
        let start = board.clone();
        walk(&mut board, Color::White, 1);
        walk(&mut board, Color::Black, 1);
        assert_eq!(board, start, "{fen}");
    }
}
