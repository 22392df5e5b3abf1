//! Strategy trait shared by every computer opponent.
//!
//! A strategy is asked for a placement given a board snapshot and the color it
//! plays. All four difficulty tiers (random, positional, greedy, minimax) implement
//! the same trait so a [`Session`](crate::orchestrator::Session) can hold any of them
//! behind a `Box<dyn Strategy>`.
//!
//! # Examples
//!
//! ```rust
//! use reversi_engine::agent::player::Strategy;
//! use reversi_engine::agent::ai::GreedyPlayer;
//! use reversi_engine::game_repr::{Board, Color};
//!
//! let mut ai = GreedyPlayer::new();
//! let board = Board::new();
//! let choice = ai.select_move(&board, Color::Black);
//! assert!(choice.is_some());
//! ```
//!
//! # Synchronous Design
//!
//! `select_move()` blocks until a decision is made. The minimax tier can take a
//! noticeable amount of time at depth 6; callers that need a responsive thread
//! should run it elsewhere and apply their own deadline.

use crate::game_repr::{Board, Color, GameResult, Position};

/// Trait for entities that pick a placement for one side.
///
/// Only `select_move()` must be implemented.
///
/// ## `select_move()`
/// - **Returns `None`**: the side has no legal placement and must pass. This is not
///   an error.
/// - **Returns `Some(Position)`**: a placement that is legal on `board` for `player`.
///
/// ## `game_ended()`
/// - Default: Does nothing
///
/// ## `name()`
/// - Default: Returns "Player"
pub trait Strategy: Send {
    /// Choose a placement for `player` on `board`.
    fn select_move(&mut self, board: &Board, player: Color) -> Option<Position>;

    /// Notify this strategy that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this strategy.
    fn name(&self) -> &str {
        "Player"
    }
}
