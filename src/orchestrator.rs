//! Game lifecycle management and turn coordination.
//!
//! This module contains the [`Session`] component, which owns one game from
//! the initial position to its result. It manages:
//! - Board state and the side to move
//! - Strategy instantiation for AI-controlled seats
//! - Turn flow (placement, forced pass, end detection)
//!
//! # Example Flow
//!
//! ```text
//! [new] -> [advance] -> AI seat? play_ai_turn : human seat? wait for play/pass
//!   -> [apply placement] -> [check end] -> [switch turn] -> [advance] ...
//! ```
//!
//! A session is a plain value: nothing is shared between sessions, so any number
//! of games can run on separate threads.
//!
//! # Examples
//!
//! ```rust
//! use reversi_engine::agent::ai::Difficulty;
//! use reversi_engine::config::GameConfig;
//! use reversi_engine::orchestrator::Session;
//!
//! let config = GameConfig::aivai(Difficulty::Easy, Difficulty::Hard).with_seed(7);
//! let mut session = Session::new(config);
//! let result = session.play_out().unwrap();
//! assert_eq!(session.result(), Some(result));
//! ```

use crate::agent::player::Strategy;
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::game_repr::{Board, Color, GameResult, MoveList, PieceCounts, Position};

/// What a single turn did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// `player` placed a disc at `at`, flipping `flipped` opposing discs
    Placed {
        player: Color,
        at: Position,
        flipped: u32,
    },
    /// `player` had no legal placement and handed the turn over
    Passed { player: Color },
    /// Neither side can move; the game is decided
    GameOver(GameResult),
}

/// One game between two seats, each either human or AI.
///
/// # Game Flow
///
/// Human seats move through [`play`](Session::play) and [`pass`](Session::pass).
/// AI seats move through [`play_ai_turn`](Session::play_ai_turn). [`advance`](Session::advance)
/// does whichever applies and returns `Ok(None)` when it must wait for a human.
pub struct Session {
    config: GameConfig,
    board: Board,
    current_turn: Color,

    /// Strategies indexed by seat, `None` for human seats
    strategies: [Option<Box<dyn Strategy>>; 2],

    result: Option<GameResult>,
}

fn seat(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let strategies = [
            config.create_strategy(Color::Black),
            config.create_strategy(Color::White),
        ];
        log::info!(
            "New game: {} (Black) vs {} (White)",
            config.black_player.display_string(),
            config.white_player.display_string()
        );

        Self {
            config,
            board: Board::new(),
            current_turn: Color::Black,
            strategies,
            result: None,
        }
    }

    /// Start over from the initial position with fresh strategies
    pub fn restart(&mut self) {
        *self = Session::new(self.config.clone());
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Legal placements for the side to move
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.current_turn)
    }

    pub fn counts(&self) -> PieceCounts {
        self.board.counts()
    }

    /// Final result, `None` while the game is running
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.strategies[seat(self.current_turn)].is_some()
    }

    /// The side to move has no placement but its opponent does
    pub fn must_pass(&self) -> bool {
        !self.is_over() && self.board.must_pass(self.current_turn)
    }

    /// Place a disc for the human side to move.
    ///
    /// # Returns
    /// `TurnOutcome::Placed` on success. `IllegalMove` if the placement flips
    /// nothing or the square is taken, `NotHumanTurn` while an AI seat is to
    /// move, `GameOver` once the game is decided.
    pub fn play(&mut self, pos: Position) -> EngineResult<TurnOutcome> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(EngineError::NotHumanTurn {
                player: self.current_turn,
            });
        }
        self.place(pos)
    }

    fn place(&mut self, pos: Position) -> EngineResult<TurnOutcome> {
        let player = self.current_turn;
        let flipped = self.board.flips_for(pos, player);
        if flipped == 0 {
            return Err(EngineError::IllegalMove {
                row: pos.row(),
                col: pos.col(),
                player,
            });
        }

        self.board = self.board.apply_move(pos, player);
        log::debug!("{:?} plays {} flipping {}", player, pos, flipped);
        self.finish_turn();

        Ok(TurnOutcome::Placed {
            player,
            at: pos,
            flipped,
        })
    }

    /// [`play`](Session::play) from raw coordinates
    pub fn play_at(&mut self, row: i32, col: i32) -> EngineResult<TurnOutcome> {
        self.play(Position::new(row, col)?)
    }

    /// Hand the turn over; only allowed when the side to move is stuck
    pub fn pass(&mut self) -> EngineResult<TurnOutcome> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let player = self.current_turn;
        if !self.board.must_pass(player) {
            return Err(EngineError::CannotPass { player });
        }

        log::info!("{:?} has no legal move and passes", player);
        self.finish_turn();
        Ok(TurnOutcome::Passed { player })
    }

    /// Let the strategy of the side to move take its turn
    pub fn play_ai_turn(&mut self) -> EngineResult<TurnOutcome> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let player = self.current_turn;
        let board = self.board;
        let strategy = self.strategies[seat(player)]
            .as_mut()
            .ok_or(EngineError::NotAiTurn { player })?;

        match strategy.select_move(&board, player) {
            Some(pos) => self.place(pos),
            None => self.pass(),
        }
    }

    /// Advance the game by one step.
    ///
    /// # Returns
    /// - `Some(TurnOutcome::GameOver)` once the game is decided
    /// - `Some(TurnOutcome::Passed)` when the side to move is stuck
    /// - `Some(TurnOutcome::Placed)` after an AI placement
    /// - `None` when a human seat must choose a placement
    pub fn advance(&mut self) -> EngineResult<Option<TurnOutcome>> {
        if let Some(result) = self.result {
            return Ok(Some(TurnOutcome::GameOver(result)));
        }
        if self.must_pass() {
            return self.pass().map(Some);
        }
        if self.is_ai_turn() {
            return self.play_ai_turn().map(Some);
        }
        Ok(None)
    }

    /// Run [`advance`](Session::advance) until the game ends.
    ///
    /// Fails with `NotAiTurn` if a human seat has to move.
    pub fn play_out(&mut self) -> EngineResult<GameResult> {
        loop {
            match self.advance()? {
                Some(TurnOutcome::GameOver(result)) => return Ok(result),
                Some(_) => {}
                None => {
                    return Err(EngineError::NotAiTurn {
                        player: self.current_turn,
                    })
                }
            }
        }
    }

    fn finish_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();

        if self.board.is_terminal() {
            let result = self.board.result();
            let counts = self.board.counts();
            log::info!(
                "Game over: {:?} (Black {} - White {})",
                result,
                counts.black,
                counts.white
            );
            for strategy in self.strategies.iter_mut().flatten() {
                strategy.game_ended(result);
            }
            self.result = Some(result);
        }
    }
}
