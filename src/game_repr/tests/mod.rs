use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a validated position
pub fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col).unwrap()
}

/// Helper function to place a disc without applying any rule
pub fn place(board: Board, row: i32, col: i32, color: Color) -> Board {
    board.with(pos(row, col), Cell::from(color))
}

/// Helper function to parse a board diagram
pub fn parse(text: &str) -> Board {
    Board::from_text(text).unwrap()
}

/// Helper function to check if a position is in the move list
pub fn has_move(moves: &[Position], row: i32, col: i32) -> bool {
    moves.contains(&pos(row, col))
}

// ==================== TEST MODULES ====================
