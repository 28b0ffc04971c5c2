use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::seeded(0);
    let board = Board::startpos();

    let mv = engine.choose_move(&board, Color::White);

    assert!(mv.is_some());
    assert!(all_legal_moves(&board, Color::White).contains(&mv.unwrap()));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::seeded(0);
    let board =
        Board::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1").unwrap();

    assert!(engine.choose_move(&board, Color::Black).is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::seeded(0);
    let board = Board::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    assert!(engine.choose_move(&board, Color::Black).is_none());
}

#[test]
fn random_engine_covers_many_moves() {
    let mut engine = RandomEngine::seeded(9);
    let board = Board::startpos();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(engine.choose_move(&board, Color::White).unwrap());
    }
    assert!(seen.len() > 10);
}

#[test]
fn random_engine_reseed_matches_seeded() {
    let board = Board::startpos();
    let mut seeded = RandomEngine::seeded(5);
    let mut reseeded = RandomEngine::seeded(6);
    reseeded.reseed(5);

    for _ in 0..8 {
        assert_eq!(
            seeded.choose_move(&board, Color::White),
            reseeded.choose_move(&board, Color::White)
        );
    }
}
