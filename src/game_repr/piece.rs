/// Side of a disc. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }
}

/// Content of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// Owner of the disc, `None` for an empty square
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color() == Some(color)
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Accepts `.`/`-` for empty, `B`/`X` for black and `W`/`O` for white
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Cell::Black),
            'W' | 'w' | 'O' | 'o' => Some(Cell::White),
            _ => None,
        }
    }
}
