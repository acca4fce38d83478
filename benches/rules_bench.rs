//! Rules Engine Benchmarks
//!
//! Performance benchmarks for the hot paths using Criterion: legal-move
//! enumeration, classification and move application with undo.

use chess_rules::{BoardEngine, PieceColor, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Open middlegame reached from the Italian opening
fn middlegame() -> BoardEngine {
    let mut engine = BoardEngine::new_game();
    for mv in [
        "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5", "c2c3", "g8f6", "d2d4", "e5d4",
    ] {
        let outcome = engine.apply_move(sq(&mv[0..2]), sq(&mv[2..4]), None);
        assert!(outcome.is_accepted());
    }
    engine
}

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(BoardEngine::new_game())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let engine = BoardEngine::new_game();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(engine.legal_moves(PieceColor::White)))
    });
}

fn bench_legal_moves_middlegame(c: &mut Criterion) {
    let engine = middlegame();

    c.bench_function("legal_moves_middlegame", |b| {
        b.iter(|| {
            let white = engine.legal_moves(PieceColor::White);
            let black = engine.legal_moves(PieceColor::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_outcome(c: &mut Criterion) {
    let engine = middlegame();

    c.bench_function("outcome_middlegame", |b| {
        b.iter(|| black_box(engine.outcome()))
    });
}

fn bench_apply_and_undo(c: &mut Criterion) {
    let mut engine = middlegame();
    let (from, to) = (sq("e4"), sq("e5"));

    c.bench_function("apply_move_then_undo", |b| {
        b.iter(|| {
            let outcome = engine.apply_move(black_box(from), black_box(to), None);
            engine.undo();
            black_box(outcome)
        })
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_legal_moves_starting,
    bench_legal_moves_middlegame,
    bench_outcome,
    bench_apply_and_undo,
);
criterion_main!(benches);
