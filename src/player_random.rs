use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::{
    grid::{Grid, Move},
    player::Player,
};

/// Player that slides a uniformly chosen legal move each turn.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Move> {
        // a board with no legal move ends the session
        grid.enumerate_legal_moves().choose(rng).copied()
    }
}
