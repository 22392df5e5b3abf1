//! Error types for the reversi engine
//!
//! The rules engine itself never fails once it holds a validated [`Position`];
//! these errors cover input validation, board parsing and session-level misuse.
//!
//! [`Position`]: crate::game_repr::Position

use crate::game_repr::Color;
use thiserror::Error;

/// Errors that can occur in the engine or a game session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinates outside the 8x8 grid
    #[error("Invalid position: ({row}, {col}) (row and column must be 0-7)")]
    InvalidPosition { row: i32, col: i32 },

    /// Textual board could not be parsed
    #[error("Board parse error on line {line}: {reason}")]
    BoardParse { line: usize, reason: String },

    /// Placement rejected by a session because it flips nothing or the cell is taken
    #[error("Illegal move for {player:?} at ({row}, {col})")]
    IllegalMove { row: u8, col: u8, player: Color },

    /// Pass requested while the player still has a legal placement
    #[error("{player:?} cannot pass while a legal move exists")]
    CannotPass { player: Color },

    /// Turn requested after both sides ran out of moves
    #[error("Game is already over")]
    GameOver,

    /// AI move requested for a side controlled by a human
    #[error("{player:?} is not controlled by the computer")]
    NotAiTurn { player: Color },

    /// Human placement requested for a side controlled by the computer
    #[error("{player:?} is controlled by the computer")]
    NotHumanTurn { player: Color },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
