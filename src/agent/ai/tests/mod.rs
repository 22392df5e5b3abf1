// AI test suite
//
// Evaluation properties, root ordering, and tier behaviour on hand-built boards.

use crate::game_repr::{Board, Cell, Color, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Helper function to build a validated position
pub fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col).unwrap()
}

/// Helper function to place discs of one color without applying any rule
pub fn place(board: Board, color: Color, squares: &[(i32, i32)]) -> Board {
    squares
        .iter()
        .fold(board, |b, &(row, col)| b.with(pos(row, col), Cell::from(color)))
}

/// Boards reached by a seeded random playout, start position included
pub fn random_playout(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut to_move = Color::Black;
    let mut seen = vec![board];

    while !board.is_terminal() {
        if let Some(&mv) = board.legal_moves(to_move).choose(&mut rng) {
            board = board.apply_move(mv, to_move);
            seen.push(board);
        }
        to_move = to_move.opposite();
    }
    seen
}

mod evaluation_tests;
mod strategy_tests;
