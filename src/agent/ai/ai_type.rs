//! Difficulty registry - maps the four strength tiers to strategies
//!
//! | Difficulty | Strategy |
//! |---|---|
//! | Easy | [`RandomPlayer`] |
//! | Medium | [`HeuristicPlayer`] |
//! | Hard | [`GreedyPlayer`] |
//! | Expert | [`MinimaxPlayer`] |

use super::{GreedyPlayer, HeuristicPlayer, MinimaxPlayer, RandomPlayer};
use crate::agent::player::Strategy;
use crate::game_repr::{Board, Color, Position};

/// AI strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random legal move
    Easy,
    /// Corners, then edges, then anything
    #[default]
    Medium,
    /// Best one-ply disc count with corner/edge bonus
    Hard,
    /// Minimax with alpha-beta pruning over the positional evaluator
    Expert,
}

impl Difficulty {
    /// Get all difficulty levels for UI enumeration
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// Get a short description of the strategy behind this level
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Random legal move",
            Difficulty::Medium => "Prefers corners, then edges",
            Difficulty::Hard => "Greedy one-ply disc count",
            Difficulty::Expert => "Minimax with alpha-beta pruning",
        }
    }

    /// Create a strategy for this tier.
    ///
    /// `seed` makes the randomized tiers reproducible; `None` seeds from OS entropy.
    /// Deterministic tiers ignore it.
    pub fn create_strategy(&self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(match seed {
                Some(seed) => RandomPlayer::seeded(seed),
                None => RandomPlayer::new(),
            }),
            Difficulty::Medium => Box::new(match seed {
                Some(seed) => HeuristicPlayer::seeded(seed),
                None => HeuristicPlayer::new(),
            }),
            Difficulty::Hard => Box::new(GreedyPlayer::new()),
            Difficulty::Expert => Box::new(MinimaxPlayer::new()),
        }
    }
}

/// Configuration for a single AI player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AIConfig {
    /// The difficulty/strength level
    pub difficulty: Difficulty,
    /// Seed for the randomized tiers
    pub seed: Option<u64>,
}

impl AIConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn create_strategy(&self) -> Box<dyn Strategy> {
        self.difficulty.create_strategy(self.seed)
    }

    /// Get a display string for this configuration
    pub fn display_string(&self) -> String {
        format!("AI ({})", self.difficulty.name())
    }
}

/// One-shot move selection for `player` at the given tier.
///
/// Randomized tiers draw from OS entropy; hold a strategy from
/// [`Difficulty::create_strategy`] for reproducible play.
pub fn select_move(board: &Board, player: Color, difficulty: Difficulty) -> Option<Position> {
    difficulty.create_strategy(None).select_move(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_all() {
        let all = Difficulty::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&Difficulty::Expert));
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Easy.name(), "Easy");
        assert_eq!(Difficulty::Medium.name(), "Medium");
        assert_eq!(Difficulty::Hard.name(), "Hard");
        assert_eq!(Difficulty::Expert.name(), "Expert");
    }

    #[test]
    fn test_strategy_names_match_tiers() {
        assert_eq!(Difficulty::Easy.create_strategy(Some(1)).name(), "Random");
        assert_eq!(Difficulty::Medium.create_strategy(Some(1)).name(), "Positional");
        assert_eq!(Difficulty::Hard.create_strategy(None).name(), "Greedy");
        assert_eq!(Difficulty::Expert.create_strategy(None).name(), "Minimax");
    }

    #[test]
    fn test_ai_config_default() {
        let config = AIConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, None);
        assert_eq!(config.display_string(), "AI (Medium)");
    }

    #[test]
    fn test_select_move_every_tier_is_legal() {
        let board = Board::new();
        for &difficulty in Difficulty::all() {
            let mv = select_move(&board, Color::Black, difficulty).unwrap();
            assert!(board.is_legal_move(mv, Color::Black), "{:?}", difficulty);
        }
    }

    #[test]
    fn test_select_move_without_moves() {
        for &difficulty in Difficulty::all() {
            assert_eq!(select_move(&Board::empty(), Color::White, difficulty), None);
        }
    }
}
