use super::*;

/// Final outcome, decided purely by the discs on the board.
///
/// Empty squares left at the end are not awarded to anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    BlackWins,
    WhiteWins,
    Tie,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::Black => GameResult::BlackWins,
            Color::White => GameResult::WhiteWins,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::BlackWins => Some(Color::Black),
            GameResult::WhiteWins => Some(Color::White),
            GameResult::Tie => None,
        }
    }
}

/// Neither side has a legal placement
pub fn is_terminal(board: &Board) -> bool {
    !board.has_legal_moves(Color::Black) && !board.has_legal_moves(Color::White)
}

/// `player` is stuck but the opponent can still move
pub fn must_pass(board: &Board, player: Color) -> bool {
    !board.has_legal_moves(player) && board.has_legal_moves(player.opposite())
}

pub fn result(board: &Board) -> GameResult {
    let counts = board.counts();
    if counts.black > counts.white {
        GameResult::BlackWins
    } else if counts.white > counts.black {
        GameResult::WhiteWins
    } else {
        GameResult::Tie
    }
}

impl Board {
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }

    pub fn must_pass(&self, player: Color) -> bool {
        must_pass(self, player)
    }

    pub fn result(&self) -> GameResult {
        result(self)
    }
}
