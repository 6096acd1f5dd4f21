#![cfg(feature = "std")]

//! Scenario files: a JSON object mapping each label to
//! `[length, [row, col], orientation]`, orientation `0` vertical, `1` horizontal.
//!
//! Entries whose raw fields are out of range or of the wrong shape are
//! skipped, never constructed. Placement (bounds and overlap) is still checked
//! again by the grid, in file order, so the earlier of two overlapping entries
//! wins.

use std::fmt;
use std::fs;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    common::{Coord, GridError},
    config::{ALLOWED_LABELS, MAX_ROW_COL, MAX_VEHICLE_LENGTH, MIN_ROW_COL, MIN_VEHICLE_LENGTH},
    grid::Grid,
    vehicle::{Axis, Vehicle},
};

const VERTICAL: i64 = 0;
const HORIZONTAL: i64 = 1;

/// One vehicle definition exactly as written in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawVehicle(pub i64, pub [i64; 2], pub i64);

/// Why a raw entry was not turned into a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownLabel,
    /// The value is not `[length, [row, col], orientation]` of integers.
    Malformed(String),
    Length(i64),
    Anchor([i64; 2]),
    Orientation(i64),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownLabel => write!(f, "label is not one of {:?}", ALLOWED_LABELS),
            SkipReason::Malformed(e) => {
                write!(f, "entry is not [length, [row, col], orientation]: {}", e)
            }
            SkipReason::Length(len) => write!(
                f,
                "length {} outside {}..={}",
                len, MIN_VEHICLE_LENGTH, MAX_VEHICLE_LENGTH
            ),
            SkipReason::Anchor([r, c]) => write!(
                f,
                "anchor [{}, {}] outside {}..={}",
                r, c, MIN_ROW_COL, MAX_ROW_COL
            ),
            SkipReason::Orientation(o) => {
                write!(f, "orientation {} is neither {} nor {}", o, VERTICAL, HORIZONTAL)
            }
        }
    }
}

/// A parsed scenario file. Entries keep the order they appear in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    entries: Vec<(String, Value)>,
}

impl Scenario {
    /// Only text that is not a JSON object is an error; bad entries are
    /// skipped later.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)
            .context("scenario is not a JSON object of vehicle entries")?;
        Ok(Scenario {
            entries: map.into_iter().collect(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Raw entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Vehicles built from every entry that passes validation, in file order.
    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.entries()
            .filter_map(|(label, value)| check(label, value).ok())
            .collect()
    }

    /// Entries rejected by shape or range validation, in file order.
    pub fn skipped(&self) -> Vec<(String, SkipReason)> {
        self.entries()
            .filter_map(|(label, value)| {
                check(label, value).err().map(|r| (label.to_owned(), r))
            })
            .collect()
    }

    /// Place every valid vehicle on a fresh grid. Entries the grid refuses are
    /// returned alongside it rather than failing the load.
    pub fn build_grid(&self) -> (Grid, Vec<(char, GridError)>) {
        let mut grid = Grid::new();
        let mut rejected = Vec::new();
        for (label, value) in self.entries() {
            let vehicle = match check(label, value) {
                Ok(v) => v,
                Err(reason) => {
                    warn!("skipping {:?}: {}", label, reason);
                    continue;
                }
            };
            if let Err(e) = grid.add_vehicle(vehicle) {
                warn!("rejected {}: {}", vehicle.id(), e);
                rejected.push((vehicle.id(), e));
            }
        }
        (grid, rejected)
    }
}

fn check(label: &str, value: &Value) -> Result<Vehicle, SkipReason> {
    let raw = RawVehicle::deserialize(value).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    validate(label, &raw)
}

/// Range-check a raw entry and construct its vehicle.
pub fn validate(label: &str, raw: &RawVehicle) -> Result<Vehicle, SkipReason> {
    let mut chars = label.chars();
    let id = match (chars.next(), chars.next()) {
        (Some(c), None) if ALLOWED_LABELS.contains(&c) => c,
        _ => return Err(SkipReason::UnknownLabel),
    };
    let RawVehicle(length, [row, col], orientation) = *raw;
    if length < MIN_VEHICLE_LENGTH as i64 || length > MAX_VEHICLE_LENGTH as i64 {
        return Err(SkipReason::Length(length));
    }
    let in_range = |v: i64| (MIN_ROW_COL as i64..=MAX_ROW_COL as i64).contains(&v);
    if !in_range(row) || !in_range(col) {
        return Err(SkipReason::Anchor([row, col]));
    }
    let axis = match orientation {
        VERTICAL => Axis::Vertical,
        HORIZONTAL => Axis::Horizontal,
        other => return Err(SkipReason::Orientation(other)),
    };
    // ranges above guarantee both conversions and the minimum length
    Vehicle::new(
        id,
        length as usize,
        Coord::new(row as i32, col as i32),
        axis,
    )
    .map_err(|_| SkipReason::Length(length))
}
