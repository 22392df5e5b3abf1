// Easiest tier: uniform choice among legal placements

use crate::agent::player::Strategy;
use crate::game_repr::{legal_moves, Board, Color, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Picks any legal placement with equal probability.
///
/// The entropy source is injected so games can be replayed under test.
pub struct RandomPlayer<R: Rng + Send = StdRng> {
    rng: R,
}

impl RandomPlayer<StdRng> {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPlayer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> RandomPlayer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Strategy for RandomPlayer<R> {
    fn select_move(&mut self, board: &Board, player: Color) -> Option<Position> {
        legal_moves(board, player).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
