#![warn(clippy::all, clippy::pedantic)]

pub mod board_tests;
pub mod ui_tests;

#[cfg(test)]
pub mod test_utils {
    use crate::app::App;
    use crate::components::{Board, Cell, Rgb};
    use crate::config::Config;
    use crate::game::BOARD_WIDTH;
    use std::time::Instant;

    pub const STACK: Rgb = Rgb(90, 90, 90);

    // Helper function to create a test app with a known clock origin
    #[must_use]
    pub fn create_test_app(start: Instant) -> App {
        App::with_start(Config::default(), start)
    }

    // Fills whole grid rows
    pub fn fill_rows(board: &mut Board, rows: impl IntoIterator<Item = usize>) {
        for y in rows {
            for x in 0..BOARD_WIDTH {
                board.cells[x][y] = Cell::Filled(STACK);
            }
        }
    }

    // Helper to fill single grid cells
    pub fn fill_cells(board: &mut Board, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            board.cells[x][y] = Cell::Filled(STACK);
        }
    }
}
