use super::*;
use crate::types::PieceKind;

fn sq(c: &str) -> Square {
    Square::from_coord(c).unwrap()
}

fn play(game: &mut GameState, mv: &str) -> GameStatus {
    game.play(sq(&mv[..2]), sq(&mv[2..])).unwrap()
}

/// Plays the first legal move it is given, or nothing.
struct FirstMove;

impl Engine for FirstMove {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        all_legal_moves(board, color).into_iter().next()
    }
    fn name(&self) -> &str {
        "first-move"
    }
}

#[test]
fn test_new_game() {
    let game = GameState::new();
    assert_eq!(game.status(), GameStatus::ToMove(Color::White));
    assert_eq!(game.legal_moves().len(), 20);
    assert_eq!(game.last_move(), None);
    assert_eq!(game.board(), &Board::startpos());
}

#[test]
fn test_selection() {
    let game = GameState::new();
    assert!(game.selectable_moves(sq("e4")).is_empty());
    assert!(game.selectable_moves(sq("e7")).is_empty());
    assert_eq!(game.selectable_moves(sq("e2")).len(), 2);
    assert_eq!(game.selectable_moves(sq("g1")).len(), 2);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameState::new();
    assert_eq!(play(&mut game, "e2e4"), GameStatus::ToMove(Color::Black));
    assert_eq!(game.last_move(), Some(Move::new(sq("e2"), sq("e4"))));
    assert!(game.selectable_moves(sq("d2")).is_empty());
    assert_eq!(game.selectable_moves(sq("e7")).len(), 2);
    assert_eq!(play(&mut game, "e7e5"), GameStatus::ToMove(Color::White));
}

#[test]
fn test_illegal_move_is_rejected_without_mutation() {
    let mut game = GameState::new();
    let before = game.board().clone();

    assert_eq!(
        game.play(sq("e2"), sq("e5")),
        Err(RulesError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert_eq!(
        game.play(sq("e7"), sq("e5")),
        Err(RulesError::IllegalMove {
            from: sq("e7"),
            to: sq("e5")
        })
    );
    assert_eq!(
        game.play(sq("e4"), sq("e5")),
        Err(RulesError::EmptySquare(sq("e4")))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.status(), GameStatus::ToMove(Color::White));
}

#[test]
fn test_fools_mate() {
    let mut game = GameState::new();
    play(&mut game, "f2f3");
    play(&mut game, "e7e5");
    play(&mut game, "g2g4");
    let status = play(&mut game, "d8h4");

    let mate = Outcome::Checkmate {
        winner: Color::Black,
    };
    assert_eq!(status, GameStatus::Over(mate));
    assert!(game.board().in_check(Color::White));
    assert!(game.legal_moves().is_empty());
    assert!(game.selectable_moves(sq("e1")).is_empty());
    assert_eq!(
        game.play(sq("a2"), sq("a3")),
        Err(RulesError::GameOver(mate))
    );
}

#[test]
fn test_stalemate_from_setup() {
    // Black king a8, White king c7, White queen b6
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8").unwrap();
    let game = GameState::from_board(board, Color::Black);
    assert_eq!(game.status(), GameStatus::Over(Outcome::Stalemate));
    assert_eq!(Outcome::Stalemate.winner(), None);
}

#[test]
fn test_stalemate_by_move() {
    // Qb6 takes the last square from the Black king
    let board = Board::from_fen("k7/2K5/8/1Q6/8/8/8/8").unwrap();
    let mut game = GameState::from_board(board, Color::White);
    assert_eq!(play(&mut game, "b5b6"), GameStatus::Over(Outcome::Stalemate));
}

#[test]
fn test_king_capture_ends_game() {
    // Black king left en prise with White to move
    let board = Board::from_fen("4k3/8/8/8/8/8/8/4R2K").unwrap();
    let mut game = GameState::from_board(board, Color::White);
    assert_eq!(game.status(), GameStatus::ToMove(Color::White));

    let status = play(&mut game, "e1e8");
    assert_eq!(
        status,
        GameStatus::Over(Outcome::KingCaptured {
            winner: Color::White
        })
    );
    assert_eq!(game.board().king_sq(Color::Black), None);
    assert!(game.is_over());
    assert_eq!(game.side_to_move(), None);
}

#[test]
fn test_reset_after_game_over() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8").unwrap();
    let mut game = GameState::from_board(board, Color::Black);
    assert!(game.is_over());

    game.reset();
    assert_eq!(game.status(), GameStatus::ToMove(Color::White));
    assert_eq!(game.board(), &Board::startpos());
    assert_eq!(game.last_move(), None);
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut game = GameState::new();
    assert_eq!(
        game.evaluate_terminal_state(),
        GameStatus::ToMove(Color::White)
    );
    assert_eq!(game.board(), &Board::startpos());
}

#[test]
fn test_play_engine() {
    let mut game = GameState::new();
    let mut engine = FirstMove;
    let status = game.play_engine(&mut engine).unwrap();
    assert_eq!(status, GameStatus::ToMove(Color::Black));
    let mv = game.last_move().unwrap();
    assert_eq!(
        game.board().piece_at(mv.to).map(|p| p.color),
        Some(Color::White)
    );
}

#[test]
fn test_play_engine_when_over() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8").unwrap();
    let mut game = GameState::from_board(board, Color::Black);
    assert_eq!(
        game.play_engine(&mut FirstMove),
        Err(RulesError::GameOver(Outcome::Stalemate))
    );
}

#[test]
fn test_pawn_double_step_survives_speculation() {
    // Filtering Black's replies must not mark Black's pawns as moved.
    let mut game = GameState::new();
    play(&mut game, "e2e4");
    let pawn = game.board().piece_at(sq("d7")).unwrap();
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert!(!pawn.has_moved());
    assert!(game.selectable_moves(sq("d7")).contains(&sq("d5")));
}
