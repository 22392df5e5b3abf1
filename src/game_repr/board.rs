use super::*;
use crate::error::{EngineError, EngineResult};
use std::fmt;
use std::str::FromStr;

/*
 * MODULE IS RESPONSIBLE FOR
 * THE BOARD VALUE AND PIECE COUNTING
 */

/// Disc totals for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounts {
    pub black: u32,
    pub white: u32,
}

impl PieceCounts {
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}

/// Immutable 8x8 grid. Every transformation returns a fresh copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting layout: white on the main diagonal of the centre block, black on the other
    pub fn new() -> Board {
        let mid = (BOARD_SIZE / 2) as u8;
        Self::empty()
            .with(Position::at(mid - 1, mid - 1), Cell::White)
            .with(Position::at(mid - 1, mid), Cell::Black)
            .with(Position::at(mid, mid - 1), Cell::Black)
            .with(Position::at(mid, mid), Cell::White)
    }

    /// Board without any disc, for puzzles and tests
    pub fn empty() -> Board {
        Self {
            cells: [Cell::Empty; 64],
        }
    }

    /// Copy of this board with one square overwritten, no rules applied
    pub fn with(mut self, pos: Position, cell: Cell) -> Board {
        self.cells[pos.index()] = cell;
        self
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Cell lookup from untrusted coordinates
    pub fn cell_at(&self, row: i32, col: i32) -> EngineResult<Cell> {
        Position::new(row, col).map(|pos| self.get(pos))
    }

    pub fn count(&self, cell: Cell) -> u32 {
        self.cells.iter().filter(|&&c| c == cell).count() as u32
    }

    pub fn counts(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for cell in self.cells.iter() {
            match cell {
                Cell::Black => counts.black += 1,
                Cell::White => counts.white += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    pub fn total_pieces(&self) -> u32 {
        self.counts().total()
    }

    /// Parse the text format produced by `Display`
    ///
    /// Eight non-blank lines of eight cells each; whitespace inside a line is
    /// ignored so both `B W . .` and `BW..` are accepted.
    pub fn from_text(text: &str) -> EngineResult<Board> {
        let mut board = Board::empty();
        let mut row = 0usize;

        for (line_no, line) in text.lines().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.is_empty() {
                continue;
            }
            if row == BOARD_SIZE {
                return Err(EngineError::BoardParse {
                    line: line_no + 1,
                    reason: "more than 8 rows".to_string(),
                });
            }
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::BoardParse {
                    line: line_no + 1,
                    reason: format!("expected 8 cells, found {}", cells.len()),
                });
            }
            for (col, c) in cells.into_iter().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| EngineError::BoardParse {
                    line: line_no + 1,
                    reason: format!("unknown cell character '{}'", c),
                })?;
                board.cells[row * BOARD_SIZE + col] = cell;
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(EngineError::BoardParse {
                line: text.lines().count(),
                reason: format!("expected 8 rows, found {}", row),
            });
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row.iter().map(Cell::to_char).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{}", self)?;
        write!(f, "}}")
    }
}
