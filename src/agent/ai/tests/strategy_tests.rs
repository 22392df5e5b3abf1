// Tests shared by every strategy tier

use super::{place, pos, random_playout};
use crate::agent::ai::evaluation::{AdvancedEvaluator, SimpleEvaluator};
use crate::agent::ai::minimax::minimax_exhaustive;
use crate::agent::ai::move_ordering::generate_ordered_moves;
use crate::agent::ai::search::search;
use crate::agent::ai::Difficulty;
use crate::game_repr::{Board, Color};

fn single_move_board() -> Board {
    // Black's only placement is (3,5)
    let board = place(Board::empty(), Color::Black, &[(3, 3)]);
    place(board, Color::White, &[(3, 4)])
}

#[test]
fn test_every_tier_plays_forced_move() {
    let board = single_move_board();
    assert_eq!(board.legal_moves(Color::Black).as_slice(), &[pos(3, 5)]);
    for &difficulty in Difficulty::all() {
        let mut strategy = difficulty.create_strategy(Some(9));
        assert_eq!(strategy.select_move(&board, Color::Black), Some(pos(3, 5)));
    }
}

#[test]
fn test_every_tier_passes_without_moves() {
    let board = single_move_board().apply_move(pos(3, 5), Color::Black);
    assert!(board.is_terminal());
    for &difficulty in Difficulty::all() {
        let mut strategy = difficulty.create_strategy(Some(9));
        assert_eq!(strategy.select_move(&board, Color::White), None);
    }
}

#[test]
fn test_every_tier_returns_legal_moves() {
    for board in random_playout(21).into_iter().step_by(6) {
        for &difficulty in &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut strategy = difficulty.create_strategy(Some(4));
            for player in [Color::Black, Color::White] {
                match strategy.select_move(&board, player) {
                    Some(mv) => assert!(board.is_legal_move(mv, player)),
                    None => assert!(!board.has_legal_moves(player)),
                }
            }
        }
    }
}

#[test]
fn test_search_score_equals_exhaustive() {
    let boards: Vec<Board> = random_playout(5).into_iter().step_by(10).collect();
    for board in boards {
        for depth in 1..=3 {
            let result = search(&board, Color::Black, depth, &AdvancedEvaluator);
            if result.best_move.is_none() {
                continue;
            }
            assert_eq!(
                result.score,
                minimax_exhaustive(&board, depth, Color::Black, Color::Black, &AdvancedEvaluator),
                "depth {}\n{}",
                depth,
                board
            );
        }
    }
}

#[test]
fn test_search_best_move_achieves_score() {
    let board = Board::new().apply_move(pos(2, 3), Color::Black);
    let result = search(&board, Color::White, 3, &SimpleEvaluator);
    let best = result.best_move.unwrap();
    let child = board.apply_move(best, Color::White);
    assert_eq!(
        minimax_exhaustive(&child, 2, Color::Black, Color::White, &SimpleEvaluator),
        result.score
    );
}

#[test]
fn test_ties_keep_first_ranked_candidate() {
    for seed in 0..4 {
        for board in random_playout(seed).into_iter().step_by(7) {
            for depth in 1..=3 {
                let mut expected: Option<(i32, _)> = None;
                for candidate in generate_ordered_moves(&board, Color::Black, &AdvancedEvaluator) {
                    let value = minimax_exhaustive(
                        &candidate.child,
                        depth - 1,
                        Color::White,
                        Color::Black,
                        &AdvancedEvaluator,
                    );
                    if expected.map_or(true, |(best, _)| value > best) {
                        expected = Some((value, candidate.position));
                    }
                }

                let result = search(&board, Color::Black, depth, &AdvancedEvaluator);
                assert_eq!(
                    result.best_move,
                    expected.map(|(_, position)| position),
                    "depth {}\n{}",
                    depth,
                    board
                );
            }
        }
    }
}

#[test]
fn test_search_prefers_corner_over_rival() {
    // (0,0) takes the corner and the top row; (3,2) only flips one centre disc
    let board = place(Board::empty(), Color::Black, &[(0, 1), (0, 2), (0, 3), (3, 3)]);
    let board = place(board, Color::White, &[(0, 4), (3, 4)]);
    assert_eq!(
        board.legal_moves(Color::White).as_slice(),
        &[pos(0, 0), pos(3, 2)]
    );
    for depth in 1..=2 {
        let result = search(&board, Color::White, depth, &AdvancedEvaluator);
        assert_eq!(result.best_move, Some(pos(0, 0)), "depth {}", depth);
    }
}
