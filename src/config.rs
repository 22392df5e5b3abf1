//! Game configuration types.
//!
//! A [`GameConfig`] says who controls each color and how the randomized
//! AI tiers are seeded. A [`Session`](crate::orchestrator::Session) is
//! built from one.

use crate::agent::ai::{AIConfig, Difficulty};
use crate::agent::player::Strategy;
use crate::game_repr::Color;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Moves supplied by the caller through `Session::play`/`Session::pass`
    Human,
    /// AI player with specified difficulty
    AI { difficulty: Difficulty },
}

impl PlayerConfig {
    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerConfig::AI { .. })
    }

    pub fn display_string(&self) -> String {
        match self {
            PlayerConfig::Human => "Human".to_string(),
            PlayerConfig::AI { difficulty } => AIConfig::new(*difficulty).display_string(),
        }
    }
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// The selected game mode
    pub mode: GameMode,
    /// Configuration for the Black player, who moves first
    pub black_player: PlayerConfig,
    /// Configuration for the White player
    pub white_player: PlayerConfig,
    /// Seed for the randomized tiers; `None` draws from OS entropy
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans
    PvP,
    /// Player vs AI - one human, one AI
    PvAI,
    /// AI vs AI - two AIs (for watching/testing)
    AIvAI,
}

impl Default for GameConfig {
    /// Human plays Black against a Medium AI
    fn default() -> Self {
        Self::pvai(Color::Black, Difficulty::Medium)
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PvP,
            black_player: PlayerConfig::Human,
            white_player: PlayerConfig::Human,
            seed: None,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `user_color` - The color the human player will play as
    /// * `ai_difficulty` - The difficulty level for the AI opponent
    pub fn pvai(user_color: Color, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::AI {
            difficulty: ai_difficulty,
        };
        let (black_player, white_player) = match user_color {
            Color::Black => (PlayerConfig::Human, ai),
            Color::White => (ai, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::PvAI,
            black_player,
            white_player,
            seed: None,
        }
    }

    /// Create an AIvAI game configuration.
    ///
    /// # Arguments
    /// * `black_difficulty` - Difficulty for the Black AI
    /// * `white_difficulty` - Difficulty for the White AI
    pub fn aivai(black_difficulty: Difficulty, white_difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::AIvAI,
            black_player: PlayerConfig::AI {
                difficulty: black_difficulty,
            },
            white_player: PlayerConfig::AI {
                difficulty: white_difficulty,
            },
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn player(&self, color: Color) -> PlayerConfig {
        match color {
            Color::Black => self.black_player,
            Color::White => self.white_player,
        }
    }

    /// Get the human player's color in a PvAI game.
    /// Returns None for PvP or AIvAI games.
    pub fn human_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::PvAI => {
                if matches!(self.black_player, PlayerConfig::Human) {
                    Some(Color::Black)
                } else {
                    Some(Color::White)
                }
            }
            _ => None,
        }
    }

    /// Strategy for `color`, or `None` for a human seat.
    ///
    /// The two seats get distinct seeds so two identical random tiers do not
    /// mirror each other.
    pub fn create_strategy(&self, color: Color) -> Option<Box<dyn Strategy>> {
        match self.player(color) {
            PlayerConfig::Human => None,
            PlayerConfig::AI { difficulty } => {
                let seed = self.seed.map(|seed| match color {
                    Color::Black => seed,
                    Color::White => seed.wrapping_add(1 << 32),
                });
                Some(difficulty.create_strategy(seed))
            }
        }
    }
}
