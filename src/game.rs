#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Playfield placement in absolute cell coordinates.
// Columns 7..=16 and rows 3..=22 are the visible board.
pub const PLAYFIELD_LEFT: i32 = 7;
pub const PLAYFIELD_RIGHT: i32 = PLAYFIELD_LEFT + BOARD_WIDTH as i32 - 1;
pub const PLAYFIELD_TOP: i32 = 3;
pub const PLAYFIELD_FLOOR: i32 = PLAYFIELD_TOP + BOARD_HEIGHT as i32 - 1;

// Every new piece appears here
pub const SPAWN_X: i32 = 12;
pub const SPAWN_Y: i32 = 4;

// A contact at or above this row ends the game
pub const GAME_OVER_ROW: i32 = 5;

// Gravity
pub const STEP_RATE: Duration = Duration::from_millis(500);

// Line clear scoring
pub const POINTS_PER_ROW: u32 = 100;
pub const POINTS_TETRIS: u32 = 800;

/// Points awarded for clearing `rows` rows in a single lock.
#[must_use]
pub fn points_for_rows(rows: u32) -> u32 {
    if rows == 4 {
        POINTS_TETRIS
    } else {
        rows * POINTS_PER_ROW
    }
}
