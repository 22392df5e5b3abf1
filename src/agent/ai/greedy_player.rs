// One-ply greedy tier

use crate::agent::player::Strategy;
use crate::game_repr::{legal_moves, Board, Color, Position};

const CORNER_BONUS: i32 = 100;
const EDGE_BONUS: i32 = 10;

/// Own disc count after the move, plus a bonus for corners and edges
pub fn greedy_score(board: &Board, pos: Position, player: Color) -> i32 {
    let after = board.apply_move(pos, player);
    let mut score = after.counts().of(player) as i32;
    if pos.is_corner() {
        score += CORNER_BONUS;
    } else if pos.is_edge() {
        score += EDGE_BONUS;
    }
    score
}

/// Maximizes [`greedy_score`]; the first move in generation order wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for GreedyPlayer {
    fn select_move(&mut self, board: &Board, player: Color) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for pos in legal_moves(board, player) {
            let score = greedy_score(board, pos, player);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
