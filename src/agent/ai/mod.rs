// AI Agents - four strength tiers
//
// Easy picks a random legal placement, Medium prefers corners then edges,
// Hard maximizes a one-ply greedy score, Expert runs minimax with alpha-beta
// pruning over a phase-weighted positional evaluation.
//
// Key features:
// - Seedable randomness for the two randomized tiers
// - Deterministic greedy and minimax tiers
// - Static move ordering at the minimax root for earlier cutoffs

mod ai_type;
pub mod evaluation;
mod greedy_player;
mod heuristic_player;
pub mod minimax;
mod minimax_player;
pub mod move_ordering;
mod random_player;
pub mod search;

#[cfg(test)]
mod tests;

pub use ai_type::{select_move, AIConfig, Difficulty};
pub use evaluation::{evaluate, AdvancedEvaluator, Evaluator, SimpleEvaluator};
pub use greedy_player::{greedy_score, GreedyPlayer};
pub use heuristic_player::{preferred_moves, HeuristicPlayer};
pub use minimax::minimax_exhaustive;
pub use minimax_player::MinimaxPlayer;
pub use random_player::RandomPlayer;

// Re-export useful types
pub use search::{search, SearchResult};
