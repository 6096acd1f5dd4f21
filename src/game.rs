use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    common::GridError,
    grid::{Grid, Move},
    player::Player,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The named vehicle reached the exit.
    Won(char),
}

/// Why a call to [`Game::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Won(char),
    /// The player stopped supplying moves.
    Quit,
    /// The move limit was reached first.
    MoveLimit,
}

/// Totals reported at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub outcome: Outcome,
    pub moves: usize,
    pub rejected: usize,
}

/// A single play session over one grid.
pub struct Game {
    grid: Grid,
    moves: usize,
    status: GameStatus,
}

impl Game {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            moves: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of committed moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply `mv` and re-evaluate the win condition. A rejected move leaves
    /// the grid and the counter untouched.
    pub fn play_move(&mut self, mv: Move) -> Result<GameStatus, GridError> {
        if let GameStatus::Won(_) = self.status {
            return Ok(self.status);
        }
        self.grid.attempt_move(mv.id, mv.direction)?;
        self.moves += 1;
        if self.grid.has_won(mv.id, mv.direction) {
            info!("{} reached the exit after {} moves", mv.id, self.moves);
            self.status = GameStatus::Won(mv.id);
        }
        Ok(self.status)
    }

    /// Drive `player` until a win, a quit, or `max_moves` committed moves.
    pub fn run<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        rng: &mut SmallRng,
        max_moves: Option<usize>,
    ) -> GameSummary {
        let mut rejected = 0;
        let outcome = loop {
            if let GameStatus::Won(id) = self.status {
                break Outcome::Won(id);
            }
            if max_moves.is_some_and(|limit| self.moves >= limit) {
                break Outcome::MoveLimit;
            }
            let Some(mv) = player.select_move(rng, &self.grid) else {
                break Outcome::Quit;
            };
            let result = self.play_move(mv);
            if let Err(e) = &result {
                debug!("rejected {}: {}", mv, e);
                rejected += 1;
            }
            player.handle_move_result(mv, &result, &self.grid);
        };
        info!("session ended: {:?} after {} moves", outcome, self.moves);
        GameSummary {
            outcome,
            moves: self.moves,
            rejected,
        }
    }
}
