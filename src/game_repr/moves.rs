use crate::error::{EngineError, EngineResult};
use std::fmt;

pub const BOARD_SIZE: usize = 8;

/*-------ARCHITECTURE--------*/

// | row 0..8 | col 0..8 |  ->  index = row * 8 + col
// row 0 is the top line of the printed board

/// A validated square on the 8x8 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Build a position from untrusted coordinates
    pub fn new(row: i32, col: i32) -> EngineResult<Position> {
        if Self::in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(EngineError::InvalidPosition { row, col })
        }
    }

    /// Position from a row-major square index
    pub fn from_index(index: usize) -> EngineResult<Position> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Ok(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            Err(EngineError::InvalidPosition {
                row: i32::try_from(index / BOARD_SIZE).unwrap_or(i32::MAX),
                col: (index % BOARD_SIZE) as i32,
            })
        }
    }

    /// Unchecked constructor for loops that already iterate inside the grid
    pub(crate) const fn at(row: u8, col: u8) -> Position {
        Self { row, col }
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Neighbouring square in `dir`, `None` when it falls off the board
    pub fn step(&self, dir: Direction) -> Option<Position> {
        let row = self.row as i32 + dir.d_row as i32;
        let col = self.col as i32 + dir.d_col as i32;
        if Self::in_bounds(row, col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_corner(&self) -> bool {
        is_edge_line(self.row) && is_edge_line(self.col)
    }

    /// Any square on row or column 0 or 7, corners included
    pub fn is_edge(&self) -> bool {
        is_edge_line(self.row) || is_edge_line(self.col)
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Self::at(row, col)))
    }
}

fn is_edge_line(line: u8) -> bool {
    line == 0 || line == (BOARD_SIZE - 1) as u8
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step towards one of the 8 neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

// up, up-right, right, down-right, down, down-left, left, up-left
pub const DIRECTIONS: [Direction; 8] = [
    Direction { d_row: -1, d_col: 0 },
    Direction { d_row: -1, d_col: 1 },
    Direction { d_row: 0, d_col: 1 },
    Direction { d_row: 1, d_col: 1 },
    Direction { d_row: 1, d_col: 0 },
    Direction { d_row: 1, d_col: -1 },
    Direction { d_row: 0, d_col: -1 },
    Direction { d_row: -1, d_col: -1 },
];

pub const CORNERS: [Position; 4] = [
    Position::at(0, 0),
    Position::at(0, 7),
    Position::at(7, 0),
    Position::at(7, 7),
];

/// A placement request submitted to the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub position: Position,
    pub player: super::Color,
}

impl Move {
    pub fn new(position: Position, player: super::Color) -> Move {
        Self { position, player }
    }
}
