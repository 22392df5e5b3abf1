// Tests for the static evaluators

use super::{place, random_playout};
use crate::agent::ai::evaluation::*;
use crate::game_repr::{Board, Color};

#[test]
fn test_evaluators_are_antisymmetric() {
    for seed in 0..5 {
        for board in random_playout(seed) {
            assert_eq!(
                AdvancedEvaluator.score(&board, Color::Black),
                -AdvancedEvaluator.score(&board, Color::White),
                "\n{}",
                board
            );
            assert_eq!(
                SimpleEvaluator.score(&board, Color::Black),
                -SimpleEvaluator.score(&board, Color::White)
            );
        }
    }
}

#[test]
fn test_simple_is_disc_differential() {
    let board = place(Board::empty(), Color::Black, &[(0, 0), (3, 3), (4, 4)]);
    let board = place(board, Color::White, &[(5, 5)]);
    assert_eq!(SimpleEvaluator.score(&board, Color::Black), 2);
    assert_eq!(SimpleEvaluator.score(&board, Color::White), -2);
}

#[test]
fn test_lone_corner_terms() {
    let board = place(Board::empty(), Color::Black, &[(0, 0)]);
    let terms = evaluate_terms(&board, Color::Black);
    assert_eq!(
        terms,
        EvalTerms {
            piece_diff: 1,
            mobility_diff: 0,
            corner_control: 25,
            stability: 2,
            danger: 0,
        }
    );
    // One disc on the board: early weights
    assert_eq!(evaluate(&board, Color::Black), 1 + 25 * 30 + 2);
}

#[test]
fn test_stability_needs_anchoring_corner() {
    let board = place(Board::empty(), Color::Black, &[(0, 0), (0, 1), (0, 2)]);
    let board = place(board, Color::White, &[(0, 5)]);
    assert_eq!(evaluate_terms(&board, Color::Black).stability, 6);
    assert_eq!(evaluate_terms(&board, Color::White).stability, -6);

    let unanchored = place(Board::empty(), Color::Black, &[(0, 3), (4, 7)]);
    assert_eq!(evaluate_terms(&unanchored, Color::Black).stability, 0);
}

#[test]
fn test_stability_along_column_edge() {
    let board = place(Board::empty(), Color::White, &[(7, 0), (5, 0)]);
    // Both discs anchored by the (7,0) corner
    assert_eq!(evaluate_terms(&board, Color::White).stability, 4);
}

#[test]
fn test_danger_square_next_to_empty_corner() {
    let board = place(Board::empty(), Color::Black, &[(1, 1), (6, 7)]);
    assert_eq!(evaluate_terms(&board, Color::Black).danger, -20);
    assert_eq!(evaluate_terms(&board, Color::White).danger, 20);
}

#[test]
fn test_corner_outweighs_discs_early() {
    let corner = place(Board::empty(), Color::Black, &[(0, 0)]);
    let discs = place(Board::empty(), Color::Black, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
    assert!(evaluate(&corner, Color::Black) > evaluate(&discs, Color::Black));
}

#[test]
fn test_late_phase_weights_discs_more() {
    let terms = EvalTerms {
        piece_diff: 10,
        ..EvalTerms::default()
    };
    assert_eq!(terms.weighted(&EARLY_WEIGHTS), 10);
    assert_eq!(terms.weighted(&LATE_WEIGHTS), 100);
}

#[test]
fn test_evaluator_names() {
    assert_eq!(SimpleEvaluator.name(), "Simple");
    assert_eq!(AdvancedEvaluator.name(), "Advanced");
}
