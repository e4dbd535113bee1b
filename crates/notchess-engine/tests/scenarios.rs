//! End-to-end games through the public `Game` API.

use notchess_core::{Color, PieceKind, Square};
use notchess_engine::{
    legal_moves, Game, GameResult, MoveError, NotChess, Position, RandomPlayer, Termination,
};
use proptest::prelude::*;

fn game_from(placement: &str, side: Color, moves_remaining: u32) -> Game {
    let position = Position::from_placement(placement, side, moves_remaining)
        .expect("test placement is valid");
    Game::from_position(NotChess::default(), position)
}

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

/// Plays up to `plies` automated moves, stopping early at the end of the game.
fn advance(game: &mut Game, seed: u64, plies: usize) {
    let mut player = RandomPlayer::seeded(seed);
    for _ in 0..plies {
        if game.is_game_over() {
            return;
        }
        let side = game.side_to_move();
        let Ok(mov) = game.propose_move(side, &mut player) else {
            return;
        };
        game.submit_move(&mov.to_string())
            .expect("automated moves are accepted");
    }
}

#[test]
fn opening_pawn_push() {
    let mut game = Game::new();
    let outcome = game.submit_move("PE2E4").unwrap();

    assert_eq!(outcome.mover, Color::White);
    assert_eq!(outcome.result, None);
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.position().piece_at(sq("E2")), None);
    let pawn = game.position().piece_at(sq("E4")).unwrap();
    assert_eq!(pawn.kind, PieceKind::Pawn);
    assert_eq!(pawn.color, Color::White);
}

#[test]
fn non_capture_refused_while_capture_available() {
    let mut game = game_from("k7/8/8/4p3/3P4/8/8/K7", Color::White, 10);
    let before = game.position().clone();

    for text in ["KA1A2", "PD4D5", "nonsense"] {
        assert_eq!(
            game.submit_move(text),
            Err(MoveError::NeedToCapture(text.to_string()))
        );
        assert_eq!(game.position(), &before);
    }

    let outcome = game.submit_move("PD4E5").unwrap();
    assert_eq!(outcome.captured.map(|p| p.square), Some(sq("E5")));
}

#[test]
fn pawn_cannot_advance_three() {
    let mut game = Game::new();
    assert_eq!(
        game.submit_move("PA2A5"),
        Err(MoveError::InvalidMove("PA2A5".to_string()))
    );
    assert_eq!(game.history().len(), 0);
}

#[test]
fn blocked_pawn_cannot_double_step() {
    let mut game = game_from("k7/8/8/8/8/p7/P7/7K", Color::White, 10);
    assert!(matches!(game.submit_move("PA2A4"), Err(MoveError::InvalidMove(_))));
    assert!(matches!(game.submit_move("PA2A3"), Err(MoveError::InvalidMove(_))));
}

#[test]
fn last_piece_captured_ends_game() {
    let mut game = game_from("8/8/8/8/8/8/8/K6r", Color::Black, 10);
    let outcome = game.submit_move("RH1A1").unwrap();

    assert_eq!(outcome.result, Some(GameResult::BlackWins));
    assert_eq!(outcome.termination, Some(Termination::Elimination));
    assert!(game.position().roster(Color::White).is_empty());
    assert_eq!(game.submit_move("RA1A2"), Err(MoveError::GameOver));
    let mut player = RandomPlayer::seeded(0);
    assert_eq!(
        game.propose_move(Color::Black, &mut player),
        Err(MoveError::GameOver)
    );
}

#[test]
fn move_limit_scores_by_material() {
    // White: king and seven pawns. Black: king, rook and four pawns.
    let mut game = game_from("k6r/pppp4/8/8/8/8/PPPPPPP1/K7", Color::Black, 1);
    let outcome = game.submit_move("PA7A6").unwrap();

    assert_eq!(outcome.moves_remaining, 0);
    assert_eq!(outcome.result, Some(GameResult::WhiteWins));
    assert_eq!(outcome.termination, Some(Termination::MoveLimit));
}

#[test]
fn white_move_does_not_spend_the_counter() {
    let mut game = game_from("k6r/pppp4/8/8/8/8/PPPPPPP1/K7", Color::White, 1);
    let outcome = game.submit_move("PA2A3").unwrap();
    assert_eq!(outcome.moves_remaining, 1);
    assert_eq!(outcome.result, None);
}

#[test]
fn pawn_promotes_to_queen() {
    let mut game = game_from("7k/P7/8/8/8/8/8/K7", Color::White, 10);
    let outcome = game.submit_move("PA7A8").unwrap();

    let queen = outcome.promoted.unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(game.position().piece_at(sq("A8")), Some(queen));

    // The queen moves as a queen on the next turn.
    game.submit_move("KH8H7").unwrap();
    game.submit_move("QA8A1").unwrap_err();
    game.submit_move("QA8D5").unwrap();
}

#[test]
fn self_play_finishes_within_the_limit() {
    for seed in 0..16 {
        let mut game = Game::new();
        let mut player = RandomPlayer::seeded(seed);
        let mut plies = 0;

        while !game.is_game_over() {
            let side = game.side_to_move();
            match game.propose_move(side, &mut player) {
                Ok(mov) => {
                    game.submit_move(&mov.to_string()).unwrap();
                    plies += 1;
                }
                Err(MoveError::NoMoveFound { .. }) => {
                    assert!(legal_moves(game.position(), side).is_empty());
                    break;
                }
                Err(err) => panic!("unexpected error: {err}"),
            }
        }

        assert!(plies <= 2 * NotChess::DEFAULT_MOVE_LIMIT as usize);
        assert!(game.position().is_consistent());
        assert_eq!(game.history().len(), plies);
    }
}

proptest! {
    #[test]
    fn rejected_moves_leave_state_unchanged(
        seed in any::<u64>(),
        plies in 0usize..40,
        text in "[PRNBQKX][A-I][0-9][A-I][0-9]|.{0,7}",
    ) {
        let mut game = Game::new();
        advance(&mut game, seed, plies);

        let before = game.position().clone();
        let history = game.history().len();
        let forced: Vec<String> = game.forced_captures().iter().map(|m| m.to_string()).collect();

        match game.submit_move(&text) {
            Ok(outcome) => {
                prop_assert!(forced.is_empty() || forced.contains(&outcome.mov.to_string()));
                prop_assert_eq!(game.history().len(), history + 1);
            }
            Err(_) => {
                prop_assert_eq!(game.position(), &before);
                prop_assert_eq!(game.history().len(), history);
            }
        }
    }

    #[test]
    fn automated_player_respects_forced_captures(seed in any::<u64>(), plies in 0usize..60) {
        let mut game = Game::new();
        advance(&mut game, seed, plies);
        prop_assume!(!game.is_game_over());

        let forced = game.forced_captures();
        let side = game.side_to_move();
        let mut player = RandomPlayer::seeded(seed.wrapping_add(1));
        if let Ok(mov) = game.propose_move(side, &mut player) {
            prop_assert!(forced.is_empty() || forced.contains(&mov));
            prop_assert!(game.validate(&mov.to_string()).is_ok());
        }
    }
}
