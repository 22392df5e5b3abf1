use super::*;
use smallvec::SmallVec;

/// Legal placements in row-major order. Reversi rarely exceeds ~20 options.
pub type MoveList = SmallVec<[Position; 32]>;

/// All legal placements for `player`, scanned row by row.
///
/// The order is part of the contract: tie-breaks downstream keep the first
/// candidate encountered here.
pub fn legal_moves(board: &Board, player: Color) -> MoveList {
    Position::all()
        .filter(|&pos| board.is_legal_move(pos, player))
        .collect()
}

pub fn has_legal_moves(board: &Board, player: Color) -> bool {
    Position::all().any(|pos| board.is_legal_move(pos, player))
}

/// Count leaf nodes of the move tree to `depth` plies.
///
/// A forced pass is one ply; a finished game is a single leaf.
pub fn perft(board: &Board, player: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, player);
    if moves.is_empty() {
        if !has_legal_moves(board, player.opposite()) {
            return 1;
        }
        return perft(board, player.opposite(), depth - 1);
    }

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&pos| perft(&board.apply_move(pos, player), player.opposite(), depth - 1))
        .sum()
}

impl Board {
    pub fn legal_moves(&self, player: Color) -> MoveList {
        legal_moves(self, player)
    }

    pub fn has_legal_moves(&self, player: Color) -> bool {
        has_legal_moves(self, player)
    }
}
