use rand::rngs::SmallRng;

use crate::{
    common::GridError,
    game::GameStatus,
    grid::{Grid, Move},
};

/// Interface implemented by the things that drive a session.
pub trait Player {
    /// Choose the next move, or `None` to end the session.
    fn select_move(&mut self, rng: &mut SmallRng, grid: &Grid) -> Option<Move>;

    /// Inform the player of the outcome of its last move.
    fn handle_move_result(
        &mut self,
        _mv: Move,
        _result: &Result<GameStatus, GridError>,
        _grid: &Grid,
    ) {
    }
}
