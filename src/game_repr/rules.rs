// Placement legality and disc flipping
//
// A placement is legal when the square is empty and at least one of the 8
// directions holds a contiguous run of opponent discs closed off by a disc of
// the mover's color. Applying a move flips every such closed run; runs that end
// on an empty square or the board edge stay untouched.

use super::*;

/// Length of the opponent run starting next to `pos` in `dir`, or 0 when the
/// run is not closed by one of `player`'s discs.
fn bracketed_run(board: &Board, pos: Position, dir: Direction, player: Color) -> u32 {
    let opponent = player.opposite();
    let mut run = 0;
    let mut cursor = pos.step(dir);

    while let Some(square) = cursor {
        let cell = board.get(square);
        if cell.is(opponent) {
            run += 1;
            cursor = square.step(dir);
        } else if cell.is(player) {
            return run;
        } else {
            return 0;
        }
    }

    // ran off the board
    0
}

impl Board {
    pub fn is_legal_move(&self, pos: Position, player: Color) -> bool {
        if !self.get(pos).is_empty() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| bracketed_run(self, pos, dir, player) > 0)
    }

    /// Number of discs a placement would flip, 0 for an illegal placement
    pub fn flips_for(&self, pos: Position, player: Color) -> u32 {
        if !self.get(pos).is_empty() {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&dir| bracketed_run(self, pos, dir, player))
            .sum()
    }

    /// Place a disc and flip every bracketed run.
    ///
    /// An illegal placement returns an identical copy of `self`; callers detect
    /// rejection by comparing or by checking `is_legal_move` first.
    pub fn apply_move(&self, pos: Position, player: Color) -> Board {
        if !self.is_legal_move(pos, player) {
            return *self;
        }

        let mut next = self.with(pos, Cell::from(player));
        for &dir in DIRECTIONS.iter() {
            let run = bracketed_run(self, pos, dir, player);
            let mut cursor = pos;
            for _ in 0..run {
                // run > 0 guarantees every step stays on the board
                if let Some(square) = cursor.step(dir) {
                    next = next.with(square, Cell::from(player));
                    cursor = square;
                }
            }
        }
        next
    }

    pub fn make_move(&self, mv: Move) -> Board {
        self.apply_move(mv.position, mv.player)
    }
}

pub fn is_legal_move(board: &Board, pos: Position, player: Color) -> bool {
    board.is_legal_move(pos, player)
}

pub fn apply_move(board: &Board, pos: Position, player: Color) -> Board {
    board.apply_move(pos, player)
}
