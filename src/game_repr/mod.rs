mod board;
mod game_state;
mod movegen;
mod moves;
mod piece;
mod rules;

#[cfg(test)]
mod tests;

pub use board::*;
pub use game_state::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use rules::*;
