//! Tests for the tic-tac-toe game engine lifecycle.

use tabletop_tictactoe::{CELL_COUNT, Game, GameStatus, Mark, MoveError, MoveOutcome, Square};

fn play(game: &mut Game, moves: &[i64]) {
    for &index in moves {
        assert_eq!(
            game.attempt_move(index),
            Ok(MoveOutcome::Continue),
            "move {index} should keep the game going"
        );
    }
}

#[test]
fn test_fresh_game() {
    let game = Game::new();
    for pos in 0..CELL_COUNT {
        assert_eq!(game.board().get(pos), Some(Square::Empty));
    }
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.winner(), None);
    assert!(!game.is_over());
    assert!(game.history().is_empty());
}

#[test]
fn test_out_of_bounds_leaves_state_unchanged() {
    let mut game = Game::new();
    play(&mut game, &[4]);
    let before = game.clone();

    for index in [-1, 9, 100, i64::MIN, i64::MAX] {
        assert_eq!(
            game.attempt_move(index),
            Err(MoveError::OutOfBounds { index })
        );
        assert_eq!(game, before);
    }
    assert_eq!(game.current_player(), Mark::O);
}

#[test]
fn test_position_filled_leaves_state_unchanged() {
    let mut game = Game::new();
    play(&mut game, &[0, 8]);
    let before = game.clone();

    for index in [0, 8] {
        assert_eq!(
            game.attempt_move(index as i64),
            Err(MoveError::PositionFilled { index })
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_players_alternate() {
    let mut game = Game::new();
    let mut expected = Mark::X;
    for index in [4, 0, 8, 2] {
        assert_eq!(game.current_player(), expected);
        game.attempt_move(index).unwrap();
        assert_ne!(game.current_player(), expected);
        expected = expected.opponent();
    }
}

#[test]
fn test_top_row_win_for_player_one() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4]);
    assert_eq!(game.attempt_move(2), Ok(MoveOutcome::Win(Mark::X)));
    assert_eq!(game.winner(), Some(Mark::X));
    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_diagonal_win_for_player_two() {
    let mut game = Game::new();
    play(&mut game, &[0, 2, 1, 4, 8]);
    assert_eq!(game.attempt_move(6), Ok(MoveOutcome::Win(Mark::O)));
    assert_eq!(game.winner(), Some(Mark::O));
}

#[test]
fn test_draw_on_ninth_move() {
    let mut game = Game::new();
    // X O X / X X O / O X O
    play(&mut game, &[0, 1, 2, 5, 3, 6, 4, 8]);
    assert_eq!(game.attempt_move(7), Ok(MoveOutcome::Draw));
    assert_eq!(game.winner(), None);
    assert!(game.is_over());
    assert!(game.has_drawn());
    assert_eq!(game.status(), GameStatus::Drawn);
}

#[test]
fn test_win_on_last_cell_is_a_win() {
    let mut game = Game::new();
    // X O X / X X O / O O _, then X completes the 0-4-8 diagonal.
    play(&mut game, &[0, 1, 2, 5, 3, 6, 4, 7]);
    assert_eq!(game.attempt_move(8), Ok(MoveOutcome::Win(Mark::X)));
    assert!(game.has_drawn());
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_terminal_game_rejects_moves() {
    let mut game = Game::replay([0, 3, 1, 4, 2]).unwrap();
    let before = game.clone();

    for index in [5, 8, -1, 0] {
        assert_eq!(game.attempt_move(index), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }
}

#[test]
fn test_reset_from_any_state() {
    let fresh = Game::new();

    let mut won = Game::replay([0, 3, 1, 4, 2]).unwrap();
    won.reset();
    assert_eq!(won, fresh);

    let mut mid = Game::replay([4, 0]).unwrap();
    mid.reset();
    assert_eq!(mid, fresh);

    let mut already_fresh = Game::new();
    already_fresh.reset();
    already_fresh.reset();
    assert_eq!(already_fresh, fresh);
}

#[test]
fn test_replay_stops_at_rejection() {
    assert_eq!(
        Game::replay([4, 4]),
        Err(MoveError::PositionFilled { index: 4 })
    );
}

#[test]
fn test_game_serializes() {
    let game = Game::replay([4]).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["history"], serde_json::json!([4]));

    let restored: Game = serde_json::from_value(json).unwrap();
    assert_eq!(restored, game);
}
