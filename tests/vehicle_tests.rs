use rush_hour::{Axis, Coord, Direction, Vehicle, VehicleError};

fn vehicle(id: char, length: usize, (row, col): (i32, i32), axis: Axis) -> Vehicle {
    Vehicle::new(id, length, Coord::new(row, col), axis).unwrap()
}

#[test]
fn test_occupied_cells_run_from_anchor() {
    let b = vehicle('B', 3, (0, 2), Axis::Vertical);
    let cells: Vec<_> = b.occupied_cells().collect();
    assert_eq!(cells, vec![Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)]);

    let r = vehicle('R', 2, (3, 4), Axis::Horizontal);
    let cells: Vec<_> = r.occupied_cells().collect();
    assert_eq!(cells, vec![Coord::new(3, 4), Coord::new(3, 5)]);
    assert!(r.contains(Coord::new(3, 5)));
    assert!(!r.contains(Coord::new(3, 6)));
}

#[test]
fn test_possible_directions_follow_axis() {
    let v = vehicle('O', 2, (0, 0), Axis::Vertical);
    assert_eq!(v.possible_directions(), [Direction::Up, Direction::Down]);
    let h = vehicle('Y', 2, (0, 0), Axis::Horizontal);
    assert_eq!(h.possible_directions(), [Direction::Right, Direction::Left]);
}

#[test]
fn test_required_empty_cell_is_beyond_leading_edge() {
    let v = vehicle('B', 3, (1, 2), Axis::Vertical);
    assert_eq!(v.required_empty_cell(Direction::Up), Ok(Coord::new(0, 2)));
    assert_eq!(v.required_empty_cell(Direction::Down), Ok(Coord::new(4, 2)));

    let h = vehicle('R', 2, (3, 4), Axis::Horizontal);
    assert_eq!(h.required_empty_cell(Direction::Right), Ok(Coord::new(3, 6)));
    assert_eq!(h.required_empty_cell(Direction::Left), Ok(Coord::new(3, 3)));
}

#[test]
fn test_vacated_cell_is_trailing_edge() {
    let v = vehicle('B', 3, (1, 2), Axis::Vertical);
    assert_eq!(v.vacated_cell(Direction::Down), Ok(Coord::new(1, 2)));
    assert_eq!(v.vacated_cell(Direction::Up), Ok(Coord::new(3, 2)));

    let h = vehicle('R', 2, (3, 4), Axis::Horizontal);
    assert_eq!(h.vacated_cell(Direction::Right), Ok(Coord::new(3, 4)));
    assert_eq!(h.vacated_cell(Direction::Left), Ok(Coord::new(3, 5)));
}

#[test]
fn test_off_axis_direction_is_rejected() {
    let mut h = vehicle('R', 2, (3, 4), Axis::Horizontal);
    let expected = VehicleError::InvalidDirection {
        axis: Axis::Horizontal,
        direction: Direction::Up,
    };
    assert_eq!(h.required_empty_cell(Direction::Up), Err(expected));
    assert_eq!(h.commit_move(Direction::Up), Err(expected));
    assert_eq!(h.anchor(), Coord::new(3, 4));
}

#[test]
fn test_commit_move_shifts_anchor_without_bounds_check() {
    let mut v = vehicle('B', 3, (0, 2), Axis::Vertical);
    v.commit_move(Direction::Down).unwrap();
    assert_eq!(v.anchor(), Coord::new(1, 2));
    v.commit_move(Direction::Up).unwrap();
    v.commit_move(Direction::Up).unwrap();
    // the grid is responsible for refusing this; the vehicle just follows orders
    assert_eq!(v.anchor(), Coord::new(-1, 2));
    assert_eq!(v.length(), 3);
    assert_eq!(v.axis(), Axis::Vertical);
}

#[test]
fn test_new_rejects_short_vehicle() {
    let err = Vehicle::new('W', 1, Coord::new(0, 0), Axis::Horizontal).unwrap_err();
    assert_eq!(err, VehicleError::InvalidLength(1));
}

#[test]
fn test_new_rejects_vehicle_longer_than_board() {
    let longest = Vehicle::new('G', 7, Coord::new(0, 0), Axis::Horizontal).unwrap();
    assert_eq!(longest.occupied_cells().count(), 7);

    for length in [8, i32::MAX as usize + 3, usize::MAX] {
        let err = Vehicle::new('B', length, Coord::new(0, 0), Axis::Vertical).unwrap_err();
        assert_eq!(err, VehicleError::InvalidLength(length));
    }
}

#[test]
fn test_direction_keys() {
    assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
    assert_eq!("U".parse::<Direction>(), Ok(Direction::Up));
    assert!("x".parse::<Direction>().is_err());
    assert!("rl".parse::<Direction>().is_err());
    assert!("".parse::<Direction>().is_err());
    for d in Direction::ALL {
        assert_eq!(Direction::from_key(d.key()), Some(d));
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.opposite().axis(), d.axis());
    }
}
