//! Random-play property tests
//!
//! Drive the engine with random legal moves and check the properties that
//! must hold for any game: undo restores every intermediate position, and a
//! rejected move changes nothing.

mod common;

use chess_rules::{BoardEngine, BoardState, PieceColor, PieceType, Square};
use common::init_tracing;
use proptest::prelude::*;

const PROMOTIONS: [Option<PieceType>; 5] = [
    None,
    Some(PieceType::Queen),
    Some(PieceType::Rook),
    Some(PieceType::Bishop),
    Some(PieceType::Knight),
];

/// Play `choices.len()` random legal moves (fewer if the game ends), returning
/// the position and clock before each one.
fn random_game(engine: &mut BoardEngine, choices: &[(usize, usize)]) -> Vec<(BoardState, u32)> {
    let mut snapshots = Vec::new();

    for &(pick, promotion) in choices {
        let moves = engine.legal_moves(engine.turn());
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[pick % moves.len()];

        snapshots.push((engine.state().clone(), engine.halfmove_clock()));
        let outcome = engine.apply_move(from, to, PROMOTIONS[promotion % PROMOTIONS.len()]);
        assert!(outcome.is_accepted(), "{}{} was enumerated as legal", from, to);
    }

    snapshots
}

fn square() -> impl Strategy<Value = Square> {
    (0usize..64).prop_map(|i| Square::from_index(i).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn undo_restores_every_position(
        choices in prop::collection::vec((any::<usize>(), any::<usize>()), 0..80)
    ) {
        init_tracing();
        let mut engine = BoardEngine::new_game();

        let snapshots = random_game(&mut engine, &choices);
        prop_assert_eq!(engine.history().len(), snapshots.len());

        for (state, clock) in snapshots.into_iter().rev() {
            prop_assert!(engine.undo().is_some());
            prop_assert_eq!(engine.state(), &state);
            prop_assert_eq!(engine.halfmove_clock(), clock);
        }
        prop_assert_eq!(engine.state(), &BoardState::starting());
        prop_assert!(engine.undo().is_none());
    }

    #[test]
    fn rejected_moves_change_nothing(
        choices in prop::collection::vec((any::<usize>(), any::<usize>()), 0..40),
        from in square(),
        to in square(),
    ) {
        init_tracing();
        let mut engine = BoardEngine::new_game();
        random_game(&mut engine, &choices);

        let legal = engine.legal_moves(engine.turn());
        let before = engine.state().clone();
        let plies = engine.history().len();
        let outcome = engine.apply_move(from, to, None);

        prop_assert_eq!(outcome.is_accepted(), legal.contains(&(from, to)));
        if outcome.is_rejected() {
            prop_assert_eq!(engine.state(), &before);
            prop_assert_eq!(engine.history().len(), plies);
        }
    }

    #[test]
    fn kings_never_left_in_check(
        choices in prop::collection::vec((any::<usize>(), any::<usize>()), 0..80)
    ) {
        init_tracing();
        let mut engine = BoardEngine::new_game();

        for &(pick, _) in &choices {
            let mover = engine.turn();
            let moves = engine.legal_moves(mover);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[pick % moves.len()];
            prop_assert!(engine.apply_move(from, to, None).is_accepted());
            prop_assert!(!engine.is_in_check(mover));
            prop_assert!(engine.board().find_king(PieceColor::White).is_some());
            prop_assert!(engine.board().find_king(PieceColor::Black).is_some());
        }
    }
}
