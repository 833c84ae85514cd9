//! Distribution tests for the random computer player.

use std::collections::HashMap;

use tictactoe_duel::{Board, Mark, Player, Position, RandomPlayer};

const DRAWS: usize = 10_000;

/// Picks `DRAWS` moves and checks every empty square shows up about 1/k of the time.
fn assert_uniform(board: &Board, seed: u64) {
    let open = Position::valid_moves(board);
    let k = open.len();
    let mut computer = RandomPlayer::seeded("Computer", seed);
    let mut counts: HashMap<Position, usize> = HashMap::new();

    for _ in 0..DRAWS {
        let pos = computer.produce_move(board).expect("open squares remain");
        *counts.entry(pos).or_default() += 1;
    }

    assert_eq!(counts.len(), k, "every empty square chosen at least once");
    let expected = 1.0 / k as f64;
    for pos in &open {
        let freq = counts[pos] as f64 / DRAWS as f64;
        assert!(
            (freq - expected).abs() < 0.02,
            "{pos}: frequency {freq:.4}, expected {expected:.4}"
        );
    }
    assert!(counts.keys().all(|pos| board.is_empty(*pos)));
}

#[test]
fn test_uniform_on_empty_board() {
    assert_uniform(&Board::new(), 11);
}

#[test]
fn test_uniform_on_partial_board() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Mark::X).unwrap();
    board.set(Position::Center, Mark::O).unwrap();
    board.set(Position::BottomRight, Mark::X).unwrap();
    board.set(Position::TopRight, Mark::O).unwrap();
    assert_uniform(&board, 23);
}

#[test]
fn test_uniform_with_two_open_squares() {
    let mut board = Board::new();
    for pos in Position::ALL
        .into_iter()
        .filter(|p| !matches!(p, Position::MiddleLeft | Position::BottomCenter))
    {
        board.set(pos, Mark::X).unwrap();
    }
    assert_uniform(&board, 5);
}
