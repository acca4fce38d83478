//! Shared helpers for the integration tests

#![allow(dead_code)]

use chess_rules::{BoardEngine, MoveOutcome, Square};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output; filter with `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Apply a move in "e2e4" form
pub fn attempt(engine: &mut BoardEngine, mv: &str) -> MoveOutcome {
    engine.apply_move(sq(&mv[0..2]), sq(&mv[2..4]), None)
}

/// Apply each move in order, panicking on the first rejection
pub fn play_all(engine: &mut BoardEngine, moves: &[&str]) {
    for mv in moves {
        let outcome = attempt(engine, mv);
        assert!(outcome.is_accepted(), "{} rejected: {:?}", mv, outcome);
    }
}
