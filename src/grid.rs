//! Grid state: the label matrix, the occupancy mask and the registered vehicles.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use log::debug;

use crate::bitboard::BitBoard;
use crate::common::{Coord, GridError, PlacementError};
use crate::config::{approach_cells, exit_direction, BOARD_SIZE, EMPTY_CELL, TARGET_CELL};
use crate::vehicle::{Direction, Vehicle};

const N: usize = BOARD_SIZE as usize;

/// Occupancy mask sized for the board.
pub type BB = BitBoard<u64, N>;

/// A (vehicle, direction) request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub id: char,
    pub direction: Direction,
}

impl Move {
    pub const fn new(id: char, direction: Direction) -> Self {
        Self { id, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.id, self.direction.key())
    }
}

/// Error for text that is not of the form `<label>,<direction key>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// Expected exactly two comma-separated tokens.
    Shape,
    /// Identity must be a single character.
    Label,
    /// Direction key must be one of `u`, `d`, `l`, `r`.
    Direction,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoveError::Shape => f.write_str("expected <label>,<direction>, e.g. R,r"),
            ParseMoveError::Label => f.write_str("label must be a single letter"),
            ParseMoveError::Direction => f.write_str("direction must be one of u, d, l, r"),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, key) = s.trim().split_once(',').ok_or(ParseMoveError::Shape)?;
        let mut chars = label.trim().chars();
        let id = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(ParseMoveError::Label),
        };
        let direction = key.trim().parse().map_err(|_| ParseMoveError::Direction)?;
        Ok(Move { id, direction })
    }
}

/// The playing field. Clones are deep: matrix, mask and vehicles travel together.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<char>; N]; N],
    occupancy: BB,
    vehicles: BTreeMap<char, Vehicle>,
}

impl Grid {
    /// An empty grid with no vehicles.
    pub fn new() -> Self {
        Grid {
            cells: [[None; N]; N],
            occupancy: BB::new(),
            vehicles: BTreeMap::new(),
        }
    }

    /// Registered vehicles in identity order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn vehicle(&self, id: char) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Mask of all covered matrix cells.
    pub fn occupancy(&self) -> BB {
        self.occupancy
    }

    pub fn target(&self) -> Coord {
        TARGET_CELL
    }

    /// Register `vehicle`. Rejects, without mutating, a vehicle reaching past
    /// the matrix or overlapping one already placed.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), GridError> {
        let id = vehicle.id();
        let reject = |reason| GridError::InvalidPlacement { id, reason };
        if self.vehicles.contains_key(&id) {
            return Err(reject(PlacementError::Duplicate));
        }
        if let Some(at) = vehicle.occupied_cells().find(|&c| !BB::contains(c)) {
            return Err(reject(PlacementError::OutOfBounds(at)));
        }
        let mask: BB = vehicle.mask()?;
        let overlap = self.occupancy & mask;
        if let Some(at) = overlap.iter_set_bits().next() {
            let by = self.cell_content(at).unwrap_or(EMPTY_CELL);
            return Err(reject(PlacementError::Overlaps { at, by }));
        }
        self.occupancy = self.occupancy | mask;
        for at in vehicle.occupied_cells() {
            self.put(at, Some(id));
        }
        debug!("placed {}", vehicle);
        self.vehicles.insert(id, vehicle);
        Ok(())
    }

    /// Identity covering `at`, or `None`. The target cell always reads empty
    /// so the exit maneuver is never blocked; off-board cells also read empty.
    pub fn cell_content(&self, at: Coord) -> Option<char> {
        if self.is_target(at) {
            return None;
        }
        self.slot(at).flatten()
    }

    /// Inside the N×N matrix, or the target cell.
    pub fn cell_is_playable(&self, at: Coord) -> bool {
        BB::contains(at) || self.is_target(at)
    }

    pub fn is_target(&self, at: Coord) -> bool {
        at == TARGET_CELL
    }

    /// Every legal move on the board: vehicles in identity order, each axis'
    /// directions in canonical order.
    pub fn enumerate_legal_moves(&self) -> Vec<Move> {
        self.vehicles
            .values()
            .flat_map(|v| v.possible_directions().map(|d| (v, d)))
            .filter(|&(v, d)| self.plan_move(v, d).is_ok())
            .map(|(v, d)| Move::new(v.id(), d))
            .collect()
    }

    /// Validate and apply a one-cell slide. Either the matrix, the mask and
    /// the vehicle all change, or nothing does.
    pub fn attempt_move(&mut self, id: char, direction: Direction) -> Result<(), GridError> {
        let vehicle = self
            .vehicles
            .get(&id)
            .ok_or(GridError::UnknownVehicle(id))?;
        let (enter, leave) = self.plan_move(vehicle, direction)?;

        let mut moved = *vehicle;
        moved.commit_move(direction)?;
        let mut occupancy = self.occupancy;
        if BB::contains(leave) {
            occupancy.clear(leave)?;
        }
        if BB::contains(enter) {
            occupancy.set(enter)?;
        }

        self.occupancy = occupancy;
        self.put(leave, None);
        self.put(enter, Some(id));
        self.vehicles.insert(id, moved);
        debug!("moved {} {} into {}", id, direction, enter);
        Ok(())
    }

    /// Whether the move just made on `id` in `direction` is the winning exit.
    pub fn has_won(&self, id: char, direction: Direction) -> bool {
        if exit_direction() != Some(direction) {
            return false;
        }
        let Some(vehicle) = self.vehicles.get(&id) else {
            return false;
        };
        if vehicle.contains(TARGET_CELL) {
            return true;
        }
        approach_cells().is_some_and(|cells| {
            cells.iter().all(|&at| self.cell_content(at) == Some(id))
        })
    }

    /// Cells entered and vacated by a slide, if it is legal right now.
    fn plan_move(
        &self,
        vehicle: &Vehicle,
        direction: Direction,
    ) -> Result<(Coord, Coord), GridError> {
        let enter = vehicle.required_empty_cell(direction)?;
        if !self.cell_is_playable(enter) {
            return Err(GridError::OutOfBounds(enter));
        }
        if let Some(by) = self.cell_content(enter) {
            return Err(GridError::Blocked { at: enter, by });
        }
        let leave = vehicle.vacated_cell(direction)?;
        Ok((enter, leave))
    }

    fn slot(&self, at: Coord) -> Option<Option<char>> {
        if BB::contains(at) {
            Some(self.cells[at.row as usize][at.col as usize])
        } else {
            None
        }
    }

    /// Write a label into the matrix. The target cell is never stored.
    fn put(&mut self, at: Coord, label: Option<char>) {
        if BB::contains(at) {
            self.cells[at.row as usize][at.col as usize] = label;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per line, cells separated by a space, `_` for empty.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  occupancy: {:?},\n  vehicles: {:?}\n}}",
            self.occupancy,
            self.vehicles.values().collect::<Vec<_>>()
        )
    }
}
