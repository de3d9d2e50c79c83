//! Shared helpers for integration tests.

#![allow(dead_code)]

use rust_mill::board::Board;
use rust_mill::core::{GameState, Player, Position, StateSnapshot};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once. Set `RUST_LOG=debug` to see the trace.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn p(index: u8) -> Position {
    Position::new(index).expect("position on board")
}

pub fn positions(indices: &[u8]) -> Vec<Position> {
    indices.iter().map(|&i| p(i)).collect()
}

/// State with the given pieces, reserves and side to move, nothing pending.
pub fn state_with(a: &[u8], b: &[u8], unplaced: [u8; 2], turn: Player) -> GameState {
    let board = Board::with_pieces(&positions(a), &positions(b));
    let snapshot = StateSnapshot::position(board, unplaced, turn);
    GameState::from_snapshot(&snapshot).expect("valid test position")
}

/// Moving-phase state with the given pieces.
pub fn moving(a: &[u8], b: &[u8], turn: Player) -> GameState {
    state_with(a, b, [0, 0], turn)
}
