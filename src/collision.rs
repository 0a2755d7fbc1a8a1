//! Collision predicates over absolute board-cell coordinates.
//!
//! The playfield spans columns 7..=16 and rows 3..=22. None of these
//! predicates mutate anything.

use crate::components::Board;
use crate::game::{PLAYFIELD_FLOOR, PLAYFIELD_LEFT, PLAYFIELD_RIGHT};

/// True when column `x` lies outside the side walls.
#[must_use]
pub fn left_right_blocked(x: i32) -> bool {
    rotate_left_blocked(x) || rotate_right_blocked(x)
}

/// True when column `x` is left of the playfield. Used by the rotation kick.
#[must_use]
pub fn rotate_left_blocked(x: i32) -> bool {
    x < PLAYFIELD_LEFT
}

/// True when column `x` is right of the playfield. Used by the rotation kick.
#[must_use]
pub fn rotate_right_blocked(x: i32) -> bool {
    x > PLAYFIELD_RIGHT
}

/// True when `(x, y)` is below the floor or holds a locked cell.
///
/// Cells above the visible board or beyond the side walls read as empty.
#[must_use]
pub fn bottom_blocked(x: i32, y: i32, board: &Board) -> bool {
    y > PLAYFIELD_FLOOR || board.cell_at(x, y).is_filled()
}
