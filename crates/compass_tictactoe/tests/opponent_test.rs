//! Tests for the opponent's move-selection policy.

use compass_tictactoe::Location::*;
use compass_tictactoe::{
    Board, Choice, Decision, FirstAvailable, Game, GameState, Location, OpponentEngine, Side, Turn,
};

fn engine() -> OpponentEngine<FirstAvailable> {
    OpponentEngine::new(FirstAvailable)
}

fn choose(player1: &[Location], player2: &[Location]) -> Choice {
    let board = Board::from_marks(player1, player2).expect("valid board");
    engine().choose_move(&board).expect("a move is available")
}

#[test]
fn test_takes_winning_cell() {
    // Opponent holds n and s: c completes the middle column.
    let choice = choose(&[Nw], &[N, S]);
    assert_eq!(choice.location, C);
    assert_eq!(choice.decision, Decision::Win);
}

#[test]
fn test_corner_opening_takes_center() {
    for corner in Location::CORNERS {
        let choice = choose(&[corner], &[]);
        assert_eq!(choice.location, C, "after {corner}");
        assert_eq!(choice.decision, Decision::Opening);
    }
}

#[test]
fn test_edge_opening_takes_center() {
    for edge in [N, E, S, W] {
        let choice = choose(&[edge], &[]);
        assert_eq!(choice.location, C, "after {edge}");
        assert_eq!(choice.decision, Decision::Opening);
    }
}

#[test]
fn test_center_opening_takes_a_corner() {
    let board = Board::from_marks(&[C], &[]).unwrap();
    for seed in 0..32 {
        let choice = OpponentEngine::seeded(seed).choose_move(&board).unwrap();
        assert!(Location::CORNERS.contains(&choice.location), "seed {seed}");
        assert_eq!(choice.decision, Decision::Opening);
    }
}

#[test]
fn test_center_opening_reaches_every_corner() {
    let board = Board::from_marks(&[C], &[]).unwrap();
    let mut engine = OpponentEngine::seeded(2024);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(engine.choose_move(&board).unwrap().location);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_blocks_human_line() {
    // Human threatens the top row; opponent's lone mark threatens nothing.
    let choice = choose(&[Nw, Ne], &[S]);
    assert_eq!(choice.location, N);
    assert_eq!(choice.decision, Decision::Block);
}

#[test]
fn test_random_fallback_only_picks_available() {
    let board = Board::from_marks(&[Nw, Se], &[C]).unwrap();
    let available = board.available_positions();
    let mut engine = OpponentEngine::seeded(9);
    for _ in 0..50 {
        let choice = engine.choose_move(&board).unwrap();
        assert_eq!(choice.decision, Decision::Random);
        assert!(available.contains(&choice.location));
    }
}

#[test]
fn test_full_game_branch_selection() {
    let mut engine = engine();

    let game = Game::new().play(Nw).unwrap();
    let (game, choice) = game.play_opponent(&mut engine).unwrap();
    assert_eq!(choice, Choice { location: C, decision: Decision::Opening });

    // Human takes the opposite corner: no line has two marks of either side.
    let game = game.play(Se).unwrap();
    let (game, choice) = game.play_opponent(&mut engine).unwrap();
    assert_eq!(choice, Choice { location: N, decision: Decision::Random });

    // Opponent now threatens the middle column; human must block at s.
    let game = game.play(S).unwrap();
    let (game, choice) = game.play_opponent(&mut engine).unwrap();
    assert_eq!(choice, Choice { location: Sw, decision: Decision::Block });

    // Opponent threatens the anti-diagonal at ne; human ignores it.
    let game = game.play(W).unwrap();
    let (game, choice) = game.play_opponent(&mut engine).unwrap();
    assert_eq!(choice, Choice { location: Ne, decision: Decision::Win });
    assert_eq!(game.state(), GameState::Ended(compass_tictactoe::Outcome::Winner(Side::Player2)));
    assert_eq!(game.turn(), Turn::Opponent);
}

#[test]
fn test_play_places_one_mark_per_call() {
    let mut board = Board::new();
    let mut engine = OpponentEngine::seeded(1);
    let mut expected_marks = 0;
    while !board.available_positions().is_empty() {
        engine.play(&mut board).unwrap();
        expected_marks += 1;
        assert_eq!(board.marks_of(Side::Player2).len(), expected_marks);
    }
    assert_eq!(expected_marks, 9);
}
