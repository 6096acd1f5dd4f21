#![cfg_attr(not(feature = "std"), no_std)]

//! Rush Hour: vehicles slide along their own axis on a 7×7 grid until one
//! of them leaves through the exit cell.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod player_random;
#[cfg(feature = "std")]
pub mod scenario;
mod vehicle;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_random::*;
#[cfg(feature = "std")]
pub use scenario::Scenario;
pub use vehicle::*;
