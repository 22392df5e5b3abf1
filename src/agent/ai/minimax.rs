// Minimax Search with Alpha-Beta Pruning
//
// Scores are always taken from one fixed perspective, the AI's color. On the
// AI's ply the search maximizes that score; on the opponent's ply it minimizes
// the same score. There is no sign flipping between plies.
//
// A side without a legal placement passes: the search recurses one ply shallower
// for the opponent on the same board. Depth 0 or a finished game returns the
// static evaluation.
//
// Every ply holds its own Board snapshot, so there is no make/unmake bookkeeping.

use super::evaluation::Evaluator;
use crate::game_repr::{legal_moves, Board, Color};

/// Lower bound of any evaluation, used as the initial alpha
pub const MIN_SCORE: i32 = i32::MIN + 1;

/// Upper bound of any evaluation, used as the initial beta
pub const MAX_SCORE: i32 = i32::MAX;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included
    pub nodes: u64,
    /// Branches skipped because `beta <= alpha`
    pub cutoffs: u64,
}

/// Alpha-beta search
///
/// # Arguments
///
/// * `board` - Position to search
/// * `depth` - Remaining plies; a pass consumes one
/// * `alpha` - Best value the maximizer (the AI) can already force
/// * `beta` - Best value the minimizer (the opponent) can already force
/// * `to_move` - Side to play at this node
/// * `ai` - Fixed perspective for every evaluation
///
/// # Returns
///
/// Minimax value of `board` from `ai`'s perspective
#[allow(clippy::too_many_arguments)]
pub fn minimax<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    to_move: Color,
    ai: Color,
    evaluator: &E,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 || board.is_terminal() {
        return evaluator.score(board, ai);
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        // Pass: same board, other side, one ply spent
        return minimax(
            board,
            depth - 1,
            alpha,
            beta,
            to_move.opposite(),
            ai,
            evaluator,
            stats,
        );
    }

    if to_move == ai {
        let mut best = MIN_SCORE;
        for &pos in moves.iter() {
            let child = board.apply_move(pos, to_move);
            let score = minimax(&child, depth - 1, alpha, beta, to_move.opposite(), ai, evaluator, stats);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for &pos in moves.iter() {
            let child = board.apply_move(pos, to_move);
            let score = minimax(&child, depth - 1, alpha, beta, to_move.opposite(), ai, evaluator, stats);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Plain minimax without pruning.
///
/// Same semantics as [`minimax`] with an infinite window; used as the
/// reference the pruned search must agree with.
pub fn minimax_exhaustive<E: Evaluator + ?Sized>(
    board: &Board,
    depth: u8,
    to_move: Color,
    ai: Color,
    evaluator: &E,
) -> i32 {
    if depth == 0 || board.is_terminal() {
        return evaluator.score(board, ai);
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        return minimax_exhaustive(board, depth - 1, to_move.opposite(), ai, evaluator);
    }

    let scores = moves.iter().map(|&pos| {
        let child = board.apply_move(pos, to_move);
        minimax_exhaustive(&child, depth - 1, to_move.opposite(), ai, evaluator)
    });

    if to_move == ai {
        scores.max().unwrap_or(MIN_SCORE)
    } else {
        scores.min().unwrap_or(MAX_SCORE)
    }
}
