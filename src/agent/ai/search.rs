// Root search driver
//
// Ranks the root candidates by static score, then runs a full alpha-beta
// search below each one in that order. The first candidate reaching the best
// value wins, so ties favour the higher static rank.

use super::evaluation::Evaluator;
use super::minimax::{minimax, SearchStats, MAX_SCORE, MIN_SCORE};
use super::move_ordering::generate_ordered_moves;
use crate::game_repr::{Board, Color, Position};
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Position>,
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
            time_ms: 0,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Search depth used by the strongest tier, keyed by discs on the board
pub fn depth_for_phase(total_pieces: u32) -> u8 {
    match total_pieces {
        0..=19 => 4,
        20..=44 => 5,
        _ => 6,
    }
}

/// Find the best placement for `ai` searching `depth` plies.
///
/// # Returns
/// SearchResult containing the best move and search statistics.
/// `best_move` is `None` only when `ai` has no legal placement.
pub fn search<E: Evaluator + ?Sized>(
    board: &Board,
    ai: Color,
    depth: u8,
    evaluator: &E,
) -> SearchResult {
    let start_time = Instant::now();
    let depth = depth.max(1);
    let mut stats = SearchStats::default();
    let mut result = SearchResult {
        depth,
        ..SearchResult::new()
    };

    let candidates = generate_ordered_moves(board, ai, evaluator);
    if candidates.is_empty() {
        result.score = evaluator.score(board, ai);
        result.time_ms = start_time.elapsed().as_millis() as u64;
        log::debug!("{:?} has no legal move, passing", ai);
        return result;
    }

    let mut alpha = MIN_SCORE;
    for candidate in candidates.iter() {
        let score = minimax(
            &candidate.child,
            depth - 1,
            alpha,
            MAX_SCORE,
            ai.opposite(),
            ai,
            evaluator,
            &mut stats,
        );
        log::trace!(
            "candidate {} static {} searched {}",
            candidate.position,
            candidate.score,
            score
        );

        if result.best_move.is_none() || score > result.score {
            result.score = score;
            result.best_move = Some(candidate.position);
        }
        alpha = alpha.max(score);
    }

    result.nodes_searched = stats.nodes;
    result.time_ms = start_time.elapsed().as_millis() as u64;
    print_search_info(&result, stats.cutoffs);
    result
}

fn print_search_info(result: &SearchResult, cutoffs: u64) {
    log::debug!(
        "depth {} score {} nodes {} cutoffs {} time {}ms best {:?}",
        result.depth,
        result.score,
        result.nodes_searched,
        cutoffs,
        result.time_ms,
        result.best_move
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::evaluation::AdvancedEvaluator;

    #[test]
    fn test_depth_for_phase() {
        assert_eq!(depth_for_phase(4), 4);
        assert_eq!(depth_for_phase(19), 4);
        assert_eq!(depth_for_phase(20), 5);
        assert_eq!(depth_for_phase(44), 5);
        assert_eq!(depth_for_phase(45), 6);
        assert_eq!(depth_for_phase(64), 6);
    }

    #[test]
    fn test_search_from_start_finds_move() {
        let board = Board::new();
        let result = search(&board, Color::Black, 3, &AdvancedEvaluator);
        let best = result.best_move.unwrap();
        assert!(board.is_legal_move(best, Color::Black));
        assert_eq!(result.depth, 3);
        assert!(result.nodes_searched > 0);
    }

    #[test]
    fn test_search_without_moves_returns_none() {
        let result = search(&Board::empty(), Color::White, 4, &AdvancedEvaluator);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes_searched, 0);
    }

    #[test]
    fn test_depth_zero_is_raised_to_one() {
        let result = search(&Board::new(), Color::Black, 0, &AdvancedEvaluator);
        assert_eq!(result.depth, 1);
        assert!(result.best_move.is_some());
    }
}
