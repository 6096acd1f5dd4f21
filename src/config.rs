use crate::common::Coord;
use crate::vehicle::Direction;

pub const BOARD_SIZE: u8 = 7;
/// The exit, one column past the right border on the middle row.
pub const TARGET_CELL: Coord = Coord::new(3, 7);
pub const EMPTY_CELL: char = '_';

/// Identities a scenario may use.
pub const ALLOWED_LABELS: [char; 6] = ['Y', 'B', 'O', 'G', 'W', 'R'];
pub const MIN_VEHICLE_LENGTH: usize = 2;
pub const MAX_VEHICLE_LENGTH: usize = 4;
pub const MIN_ROW_COL: i32 = 0;
pub const MAX_ROW_COL: i32 = BOARD_SIZE as i32 - 1;

/// Direction a vehicle travels to leave through the target cell, derived from
/// which border the target sits beyond. `None` if the target is not adjacent
/// to exactly one edge of the board.
pub const fn exit_direction() -> Option<Direction> {
    let n = BOARD_SIZE as i32;
    let t = TARGET_CELL;
    let row_inside = t.row >= 0 && t.row < n;
    let col_inside = t.col >= 0 && t.col < n;
    if row_inside && t.col == n {
        Some(Direction::Right)
    } else if row_inside && t.col == -1 {
        Some(Direction::Left)
    } else if col_inside && t.row == n {
        Some(Direction::Down)
    } else if col_inside && t.row == -1 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// The two cells just inside the border leading up to the target, nearest
/// first. A vehicle filling both after an exit-direction move has won.
pub const fn approach_cells() -> Option<[Coord; 2]> {
    match exit_direction() {
        Some(dir) => {
            let back = dir.opposite();
            let first = TARGET_CELL.step(back);
            Some([first, first.step(back)])
        }
        None => None,
    }
}
