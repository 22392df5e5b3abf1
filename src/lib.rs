pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{EngineError, EngineResult};
pub use game_repr::{Board, Cell, Color, GameResult, Position};
pub use orchestrator::{Session, TurnOutcome};
