//! Vehicle geometry: orientation, occupied cells and one-cell slides.

use core::fmt;
use core::str::FromStr;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{Coord, VehicleError};
use crate::config::{BOARD_SIZE, MIN_VEHICLE_LENGTH};

/// Axis a vehicle lies along. Fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Directions a vehicle on this axis may slide, in canonical order.
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::Up, Direction::Down],
            Axis::Horizontal => [Direction::Right, Direction::Left],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        })
    }
}

/// A one-cell slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Single-letter key used by the text driver.
    pub const fn key(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Whether the vehicle moves toward its own anchor, leaving its last cell.
    const fn toward_anchor(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// Error for a direction key that is none of `u`, `d`, `l`, `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("direction must be one of u, d, l, r")
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Direction::from_key(c.to_ascii_lowercase()).ok_or(ParseDirectionError)
            }
            _ => Err(ParseDirectionError),
        }
    }
}

/// A vehicle on the grid. Shape is immutable; only the anchor moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vehicle {
    id: char,
    length: usize,
    anchor: Coord,
    axis: Axis,
}

impl Vehicle {
    /// Create a vehicle whose first cell is `anchor`. Bounds are the grid's
    /// concern; only the shape is validated here. A vehicle never spans more
    /// cells than a board row.
    pub fn new(id: char, length: usize, anchor: Coord, axis: Axis) -> Result<Self, VehicleError> {
        if !(MIN_VEHICLE_LENGTH..=BOARD_SIZE as usize).contains(&length) {
            return Err(VehicleError::InvalidLength(length));
        }
        Ok(Vehicle {
            id,
            length,
            anchor,
            axis,
        })
    }

    pub fn id(&self) -> char {
        self.id
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Lexicographically first occupied cell.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Cells covered by the vehicle, from the anchor outward.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + Clone {
        let Coord { row, col } = self.anchor;
        let axis = self.axis;
        (0..self.length as i32).map(move |i| match axis {
            Axis::Vertical => Coord::new(row + i, col),
            Axis::Horizontal => Coord::new(row, col + i),
        })
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.occupied_cells().any(|c| c == at)
    }

    fn last_cell(&self) -> Coord {
        let offset = self.length as i32 - 1;
        match self.axis {
            Axis::Vertical => Coord::new(self.anchor.row + offset, self.anchor.col),
            Axis::Horizontal => Coord::new(self.anchor.row, self.anchor.col + offset),
        }
    }

    pub fn possible_directions(&self) -> [Direction; 2] {
        self.axis.directions()
    }

    fn check_direction(&self, direction: Direction) -> Result<(), VehicleError> {
        if direction.axis() == self.axis {
            Ok(())
        } else {
            Err(VehicleError::InvalidDirection {
                axis: self.axis,
                direction,
            })
        }
    }

    /// The cell just beyond the leading edge that must be free for the move.
    pub fn required_empty_cell(&self, direction: Direction) -> Result<Coord, VehicleError> {
        self.check_direction(direction)?;
        let edge = if direction.toward_anchor() {
            self.anchor
        } else {
            self.last_cell()
        };
        Ok(edge.step(direction))
    }

    /// The trailing-edge cell freed by the move.
    pub fn vacated_cell(&self, direction: Direction) -> Result<Coord, VehicleError> {
        self.check_direction(direction)?;
        if direction.toward_anchor() {
            Ok(self.last_cell())
        } else {
            Ok(self.anchor)
        }
    }

    /// Slide one cell. The caller has already checked bounds and occupancy.
    pub fn commit_move(&mut self, direction: Direction) -> Result<(), VehicleError> {
        self.check_direction(direction)?;
        self.anchor = self.anchor.step(direction);
        Ok(())
    }

    /// Occupancy mask of the vehicle on an N×N board.
    pub fn mask<T, const N: usize>(&self) -> Result<BitBoard<T, N>, BitBoardError>
    where
        T: PrimInt + Unsigned + Zero,
    {
        BitBoard::from_cells(self.occupied_cells())
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} length {} at {})",
            self.id, self.axis, self.length, self.anchor
        )
    }
}
