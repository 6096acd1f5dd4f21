use std::io::Write;

use rush_hour::scenario::{validate, RawVehicle, SkipReason};
use rush_hour::{Axis, Coord, GridError, PlacementError, Scenario};

const MIXED: &str = r#"{
    "R": [2, [3, 0], 1],
    "O": [3, [0, 3], 0],
    "Y": [2, [5, 5], 1],
    "X": [2, [0, 0], 1],
    "G": [5, [6, 0], 1],
    "W": [2, [1, 1], 2],
    "B": [2, [6, 6], 1]
}"#;

#[test]
fn test_skips_entries_failing_range_checks() {
    let scenario = Scenario::from_json(MIXED).unwrap();
    let ids: Vec<char> = scenario.vehicles().iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!['R', 'O', 'Y', 'B']);
    assert_eq!(
        scenario.skipped(),
        vec![
            ("X".to_string(), SkipReason::UnknownLabel),
            ("G".to_string(), SkipReason::Length(5)),
            ("W".to_string(), SkipReason::Orientation(2)),
        ]
    );
}

#[test]
fn test_grid_revalidates_placement() {
    let scenario = Scenario::from_json(MIXED).unwrap();
    let (grid, rejected) = scenario.build_grid();
    assert_eq!(
        rejected,
        vec![(
            'B',
            GridError::InvalidPlacement {
                id: 'B',
                reason: PlacementError::OutOfBounds(Coord::new(6, 7))
            }
        )]
    );
    let ids: Vec<char> = grid.vehicles().map(|v| v.id()).collect();
    assert_eq!(ids, vec!['O', 'R', 'Y']);
    assert_eq!(grid.cell_content(Coord::new(2, 3)), Some('O'));
    assert_eq!(grid.cell_content(Coord::new(3, 1)), Some('R'));
}

#[test]
fn test_overlapping_entry_is_rejected() {
    let json = r#"{ "B": [3, [0, 0], 0], "R": [2, [1, 0], 1] }"#;
    let (grid, rejected) = Scenario::from_json(json).unwrap().build_grid();
    assert_eq!(
        rejected,
        vec![(
            'R',
            GridError::InvalidPlacement {
                id: 'R',
                reason: PlacementError::Overlaps {
                    at: Coord::new(1, 0),
                    by: 'B'
                }
            }
        )]
    );
    assert!(grid.vehicle('R').is_none());
}

#[test]
fn test_earlier_entry_wins_an_overlap() {
    let json = r#"{ "R": [2, [1, 0], 1], "B": [3, [0, 0], 0] }"#;
    let (grid, rejected) = Scenario::from_json(json).unwrap().build_grid();
    assert_eq!(
        rejected,
        vec![(
            'B',
            GridError::InvalidPlacement {
                id: 'B',
                reason: PlacementError::Overlaps {
                    at: Coord::new(1, 0),
                    by: 'R'
                }
            }
        )]
    );
    assert_eq!(grid.cell_content(Coord::new(1, 0)), Some('R'));
    assert!(grid.vehicle('B').is_none());
}

#[test]
fn test_wrong_typed_entry_is_skipped() {
    let json = r#"{
        "R": [2, [3, 0], 1],
        "B": [2, [0, 0], "vertical"],
        "O": [2, 3, 1],
        "Y": [2.5, [0, 0], 1]
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    let skipped = scenario.skipped();
    let labels: Vec<&str> = skipped.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["B", "O", "Y"]);
    for (label, reason) in &skipped {
        assert!(matches!(reason, SkipReason::Malformed(_)), "{}: {}", label, reason);
    }

    let (grid, rejected) = scenario.build_grid();
    assert!(rejected.is_empty());
    let ids: Vec<char> = grid.vehicles().map(|v| v.id()).collect();
    assert_eq!(ids, vec!['R']);
}

#[test]
fn test_validate_ranges() {
    let ok = validate("R", &RawVehicle(2, [3, 4], 1)).unwrap();
    assert_eq!(ok.anchor(), Coord::new(3, 4));
    assert_eq!(ok.axis(), Axis::Horizontal);
    assert_eq!(ok.length(), 2);

    let v = validate("B", &RawVehicle(4, [0, 6], 0)).unwrap();
    assert_eq!(v.axis(), Axis::Vertical);

    assert_eq!(
        validate("R", &RawVehicle(1, [0, 0], 1)),
        Err(SkipReason::Length(1))
    );
    assert_eq!(
        validate("R", &RawVehicle(2, [7, 0], 1)),
        Err(SkipReason::Anchor([7, 0]))
    );
    assert_eq!(
        validate("R", &RawVehicle(2, [0, -1], 1)),
        Err(SkipReason::Anchor([0, -1]))
    );
    assert_eq!(
        validate("RR", &RawVehicle(2, [0, 0], 1)),
        Err(SkipReason::UnknownLabel)
    );
    assert_eq!(
        validate("r", &RawVehicle(2, [0, 0], 1)),
        Err(SkipReason::UnknownLabel)
    );
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(Scenario::from_json("[1, 2]").is_err());
    assert!(Scenario::from_json(r#""R""#).is_err());
    assert!(Scenario::from_json("{").is_err());
    let empty = Scenario::from_json("{}").unwrap();
    assert!(empty.vehicles().is_empty());
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "R": [2, [3, 4], 1] }}"#).unwrap();
    let scenario = Scenario::from_path(file.path()).unwrap();
    let (grid, rejected) = scenario.build_grid();
    assert!(rejected.is_empty());
    assert_eq!(grid.vehicle('R').map(|v| v.anchor()), Some(Coord::new(3, 4)));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = Scenario::from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
