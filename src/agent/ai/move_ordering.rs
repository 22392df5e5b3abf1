// Root move ordering for the minimax tier
//
// Candidates are ranked by the static evaluation of the board they lead to.
// Ordering only changes how much the search prunes, never the value it returns.

use super::evaluation::Evaluator;
use crate::game_repr::{legal_moves, Board, Color, Position};
use smallvec::SmallVec;

/// A candidate placement with its one-ply static score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub child: Board,
    pub score: i32,
}

/// Legal moves for `player`, best static score first.
///
/// The sort is stable, so equal scores keep row-major generation order.
pub fn generate_ordered_moves<E: Evaluator + ?Sized>(
    board: &Board,
    player: Color,
    evaluator: &E,
) -> SmallVec<[ScoredMove; 32]> {
    let mut scored: SmallVec<[ScoredMove; 32]> = legal_moves(board, player)
        .into_iter()
        .map(|position| {
            let child = board.apply_move(position, player);
            ScoredMove {
                position,
                child,
                score: evaluator.score(&child, player),
            }
        })
        .collect();

    // Sort by score (descending - higher score first)
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
