// Board evaluation
//
// Both evaluators score a board from a fixed player's point of view: positive is
// good for `player`. Every term is antisymmetric under a color swap, so
// `score(b, Black) == -score(b, White)` always holds.

use crate::game_repr::{legal_moves, Board, Cell, Color, Position, CORNERS};

// Raw term values before phase weighting
const CORNER_VALUE: i32 = 25;
const STABLE_EDGE_VALUE: i32 = 2;
const DANGER_VALUE: i32 = 10;

/// Squares next to a corner, paired with the corner they give away
const DANGER_SQUARES: [(Position, Position); 12] = [
    (Position::at(0, 1), CORNERS[0]),
    (Position::at(1, 0), CORNERS[0]),
    (Position::at(1, 1), CORNERS[0]),
    (Position::at(0, 6), CORNERS[1]),
    (Position::at(1, 7), CORNERS[1]),
    (Position::at(1, 6), CORNERS[1]),
    (Position::at(6, 0), CORNERS[2]),
    (Position::at(7, 1), CORNERS[2]),
    (Position::at(6, 1), CORNERS[2]),
    (Position::at(7, 6), CORNERS[3]),
    (Position::at(6, 7), CORNERS[3]),
    (Position::at(6, 6), CORNERS[3]),
];

/// Common interface for static board evaluation
pub trait Evaluator: Send + Sync {
    /// Score `board` from `player`'s perspective
    fn score(&self, board: &Board, player: Color) -> i32;

    fn name(&self) -> &'static str;
}

/// Disc differential only
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleEvaluator;

impl Evaluator for SimpleEvaluator {
    fn score(&self, board: &Board, player: Color) -> i32 {
        let counts = board.counts();
        counts.of(player) as i32 - counts.of(player.opposite()) as i32
    }

    fn name(&self) -> &'static str {
        "Simple"
    }
}

/// Weight applied to each evaluation term for one game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseWeights {
    pub piece: i32,
    pub mobility: i32,
    pub corner: i32,
    pub stability: i32,
    pub danger: i32,
}

pub const EARLY_WEIGHTS: PhaseWeights = PhaseWeights {
    piece: 1,
    mobility: 5,
    corner: 30,
    stability: 1,
    danger: 15,
};

pub const MID_WEIGHTS: PhaseWeights = PhaseWeights {
    piece: 1,
    mobility: 3,
    corner: 25,
    stability: 10,
    danger: 10,
};

pub const LATE_WEIGHTS: PhaseWeights = PhaseWeights {
    piece: 10,
    mobility: 1,
    corner: 15,
    stability: 15,
    danger: 5,
};

/// Minimum total disc count at which each weight set takes over, ascending
pub const PHASE_TABLE: [(u32, PhaseWeights); 3] =
    [(0, EARLY_WEIGHTS), (20, MID_WEIGHTS), (40, LATE_WEIGHTS)];

/// Weights for a board holding `total_pieces` discs
pub fn phase_weights(total_pieces: u32) -> PhaseWeights {
    PHASE_TABLE
        .iter()
        .rev()
        .find(|(threshold, _)| total_pieces >= *threshold)
        .map(|(_, weights)| *weights)
        .unwrap_or(EARLY_WEIGHTS)
}

/// Unweighted values of the five positional terms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub piece_diff: i32,
    pub mobility_diff: i32,
    pub corner_control: i32,
    pub stability: i32,
    pub danger: i32,
}

impl EvalTerms {
    /// Dot product with a weight set
    pub fn weighted(&self, weights: &PhaseWeights) -> i32 {
        self.piece_diff * weights.piece
            + self.mobility_diff * weights.mobility
            + self.corner_control * weights.corner
            + self.stability * weights.stability
            + self.danger * weights.danger
    }
}

fn cell_sign(cell: Cell, player: Color) -> i32 {
    match cell.color() {
        Some(owner) if owner == player => 1,
        Some(_) => -1,
        None => 0,
    }
}

fn corner_control(board: &Board, player: Color) -> i32 {
    CORNERS
        .iter()
        .map(|&corner| cell_sign(board.get(corner), player) * CORNER_VALUE)
        .sum()
}

/// An edge disc counts as stable when a corner on its own edge line holds a
/// disc of the same color. Corners anchor themselves.
fn is_anchored_edge(board: &Board, pos: Position, owner: Color) -> bool {
    CORNERS.iter().any(|corner| {
        let same_row_edge = pos.row() == corner.row() && (pos.row() == 0 || pos.row() == 7);
        let same_col_edge = pos.col() == corner.col() && (pos.col() == 0 || pos.col() == 7);
        (same_row_edge || same_col_edge) && board.get(*corner).is(owner)
    })
}

fn stability(board: &Board, player: Color) -> i32 {
    Position::all()
        .filter(|pos| pos.is_edge())
        .map(|pos| match board.get(pos).color() {
            Some(owner) if is_anchored_edge(board, pos, owner) => {
                cell_sign(board.get(pos), player) * STABLE_EDGE_VALUE
            }
            _ => 0,
        })
        .sum()
}

fn danger(board: &Board, player: Color) -> i32 {
    DANGER_SQUARES
        .iter()
        .filter(|(_, corner)| board.get(*corner).is_empty())
        .map(|(square, _)| -cell_sign(board.get(*square), player) * DANGER_VALUE)
        .sum()
}

/// Compute every term for `player`
pub fn evaluate_terms(board: &Board, player: Color) -> EvalTerms {
    let opponent = player.opposite();
    let counts = board.counts();

    EvalTerms {
        piece_diff: counts.of(player) as i32 - counts.of(opponent) as i32,
        mobility_diff: legal_moves(board, player).len() as i32
            - legal_moves(board, opponent).len() as i32,
        corner_control: corner_control(board, player),
        stability: stability(board, player),
        danger: danger(board, player),
    }
}

/// Five-term positional evaluator with phase-dependent weights
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedEvaluator;

impl Evaluator for AdvancedEvaluator {
    fn score(&self, board: &Board, player: Color) -> i32 {
        let weights = phase_weights(board.total_pieces());
        evaluate_terms(board, player).weighted(&weights)
    }

    fn name(&self) -> &'static str {
        "Advanced"
    }
}

/// Convenience wrapper around [`AdvancedEvaluator`]
pub fn evaluate(board: &Board, player: Color) -> i32 {
    AdvancedEvaluator.score(board, player)
}
