//! MinimaxPlayer - strongest tier, minimax with alpha-beta pruning
//!
//! The player delegates to [`search`](super::search::search) and scores every
//! leaf with the phase-weighted [`AdvancedEvaluator`], always from its own color's
//! point of view.
//!
//! # Search depth
//!
//! Unless overridden with [`MinimaxPlayer::with_depth`], the depth follows the
//! disc count on the board:
//!
//! - fewer than 20 discs: depth 4
//! - 20 to 44 discs: depth 5
//! - 45 discs or more: depth 6
//!
//! # Examples
//!
//! ```rust
//! use reversi_engine::agent::ai::MinimaxPlayer;
//! use reversi_engine::agent::player::Strategy;
//! use reversi_engine::game_repr::{Board, Color};
//!
//! let mut ai = MinimaxPlayer::new().with_depth(2);
//! let mv = ai.select_move(&Board::new(), Color::White);
//! assert!(mv.is_some());
//! ```

use super::evaluation::{AdvancedEvaluator, Evaluator};
use super::search::{depth_for_phase, search, SearchResult};
use crate::agent::player::Strategy;
use crate::game_repr::{Board, Color, Position};

/// AI player that searches the game tree with alpha-beta pruning.
///
/// The search is deterministic: the same board and color always give the same
/// move. It blocks the calling thread for the duration of the search.
pub struct MinimaxPlayer<E: Evaluator = AdvancedEvaluator> {
    evaluator: E,

    /// Fixed depth; `None` picks the depth from the game phase
    fixed_depth: Option<u8>,

    /// Statistics of the most recent search
    last_result: Option<SearchResult>,
}

impl MinimaxPlayer<AdvancedEvaluator> {
    pub fn new() -> Self {
        Self::with_evaluator(AdvancedEvaluator)
    }
}

impl Default for MinimaxPlayer<AdvancedEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> MinimaxPlayer<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self {
            evaluator,
            fixed_depth: None,
            last_result: None,
        }
    }

    /// Search a fixed number of plies regardless of the phase
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.fixed_depth = Some(depth);
        self
    }

    /// Depth the next search on `board` will use
    pub fn depth_for(&self, board: &Board) -> u8 {
        self.fixed_depth
            .unwrap_or_else(|| depth_for_phase(board.total_pieces()))
    }

    /// Run a search and keep its statistics
    pub fn analyse(&mut self, board: &Board, player: Color) -> SearchResult {
        let result = search(board, player, self.depth_for(board), &self.evaluator);
        self.last_result = Some(result.clone());
        result
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl<E: Evaluator> Strategy for MinimaxPlayer<E> {
    fn select_move(&mut self, board: &Board, player: Color) -> Option<Position> {
        self.analyse(board, player).best_move
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
