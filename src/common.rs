//! Common types for Rush Hour: coordinates and the error taxonomy.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::vehicle::{Axis, Direction};

/// A (row, col) position. Signed so that the cell beyond a border edge is
/// representable and can be rejected rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors raised by vehicle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleError {
    /// Direction is not along the vehicle's axis.
    InvalidDirection { axis: Axis, direction: Direction },
    /// Vehicles span at least two cells and at most a full board row.
    InvalidLength(usize),
}

impl fmt::Display for VehicleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleError::InvalidDirection { axis, direction } => {
                write!(f, "a {} vehicle cannot move {}", axis, direction)
            }
            VehicleError::InvalidLength(len) => {
                write!(f, "vehicle length {} does not fit the board", len)
            }
        }
    }
}

impl core::error::Error for VehicleError {}

/// Why a vehicle could not be registered on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A cell of the vehicle falls outside the matrix.
    OutOfBounds(Coord),
    /// A cell is already taken by the named vehicle.
    Overlaps { at: Coord, by: char },
    /// A vehicle with the same identity is already registered.
    Duplicate,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds(at) => write!(f, "cell {} is outside the board", at),
            PlacementError::Overlaps { at, by } => {
                write!(f, "cell {} is already occupied by {}", at, by)
            }
            PlacementError::Duplicate => write!(f, "identity is already on the board"),
        }
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
    /// Vehicle geometry error other than a wrong-axis direction.
    Vehicle(VehicleError),
    /// The required cell lies outside the matrix and is not the target cell.
    OutOfBounds(Coord),
    /// The required cell is occupied by another vehicle.
    Blocked { at: Coord, by: char },
    /// Direction does not match the vehicle's axis.
    WrongAxis { axis: Axis, direction: Direction },
    /// No vehicle registered under this identity.
    UnknownVehicle(char),
    /// Vehicle registration rejected.
    InvalidPlacement { id: char, reason: PlacementError },
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoard(err)
    }
}

impl From<VehicleError> for GridError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::InvalidDirection { axis, direction } => {
                GridError::WrongAxis { axis, direction }
            }
            other => GridError::Vehicle(other),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GridError::Vehicle(e) => write!(f, "vehicle error: {}", e),
            GridError::OutOfBounds(at) => {
                write!(f, "cell {} is outside the board border", at)
            }
            GridError::Blocked { at, by } => {
                write!(f, "cell {} is already taken by {}", at, by)
            }
            GridError::WrongAxis { axis, direction } => {
                write!(f, "a {} vehicle cannot move {}", axis, direction)
            }
            GridError::UnknownVehicle(id) => write!(f, "no vehicle named {}", id),
            GridError::InvalidPlacement { id, reason } => {
                write!(f, "cannot place {}: {}", id, reason)
            }
        }
    }
}

impl core::error::Error for GridError {}
