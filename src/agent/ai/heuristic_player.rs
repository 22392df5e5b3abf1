// Positional tier: corners first, then edges, otherwise anything

use crate::agent::player::Strategy;
use crate::game_repr::{legal_moves, Board, Color, MoveList, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Chooses uniformly inside the best non-empty class of squares:
/// corners, then edges, then every legal placement.
pub struct HeuristicPlayer<R: Rng + Send = StdRng> {
    rng: R,
}

impl HeuristicPlayer<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HeuristicPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> HeuristicPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

/// Moves of the highest-priority class present
pub fn preferred_moves(moves: &[Position]) -> MoveList {
    let corners: MoveList = moves.iter().copied().filter(Position::is_corner).collect();
    if !corners.is_empty() {
        return corners;
    }

    let edges: MoveList = moves.iter().copied().filter(Position::is_edge).collect();
    if !edges.is_empty() {
        return edges;
    }

    moves.iter().copied().collect()
}

impl<R: Rng + Send> Strategy for HeuristicPlayer<R> {
    fn select_move(&mut self, board: &Board, player: Color) -> Option<Position> {
        let moves = legal_moves(board, player);
        preferred_moves(&moves).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Positional"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_corner_beats_edge() {
        let moves = [pos(0, 3), pos(2, 2), pos(7, 7)];
        assert_eq!(preferred_moves(&moves).as_slice(), &[pos(7, 7)]);
    }

    #[test]
    fn test_edges_when_no_corner() {
        let moves = [pos(0, 3), pos(2, 2), pos(5, 7)];
        assert_eq!(preferred_moves(&moves).as_slice(), &[pos(0, 3), pos(5, 7)]);
    }

    #[test]
    fn test_falls_back_to_all_moves() {
        let moves = [pos(2, 3), pos(3, 2)];
        assert_eq!(preferred_moves(&moves).as_slice(), &moves);
    }

    #[test]
    fn test_takes_available_corner() {
        // White reaches the (0,0) corner along the top row and the diagonal
        let board = Board::from_text(
            ".BBW....
             .B......
             ..W.....
             ........
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        assert!(board.is_legal_move(pos(0, 0), Color::White));
        let mut player = HeuristicPlayer::seeded(11);
        for _ in 0..10 {
            assert_eq!(player.select_move(&board, Color::White), Some(pos(0, 0)));
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut player = HeuristicPlayer::seeded(0);
        assert_eq!(player.select_move(&Board::empty(), Color::White), None);
    }
}
