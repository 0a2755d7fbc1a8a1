#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::Resource;

use crate::collision::{
    bottom_blocked, left_right_blocked, rotate_left_blocked, rotate_right_blocked,
};
use crate::game::{
    BOARD_HEIGHT, BOARD_WIDTH, PLAYFIELD_LEFT, PLAYFIELD_TOP, SPAWN_X, SPAWN_Y, points_for_rows,
};

/// An opaque RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fill used for every empty board cell.
pub const BACKGROUND: Rgb = Rgb(40, 40, 40);

impl From<Rgb> for ratatui::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ratatui::style::Color::Rgb(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::J,
        TetrominoType::L,
        TetrominoType::O,
        TetrominoType::S,
        TetrominoType::T,
        TetrominoType::Z,
    ];

    /// Uniform draw over the seven kinds. There is no bag.
    #[must_use]
    pub fn random() -> Self {
        Self::ALL[fastrand::usize(..Self::ALL.len())]
    }

    /// Cell offsets in spawn orientation, y grows downward.
    #[must_use]
    pub const fn offsets(self) -> [(i32, i32); 4] {
        match self {
            TetrominoType::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
            TetrominoType::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
            TetrominoType::L => [(1, -1), (-1, 0), (0, 0), (1, 0)],
            TetrominoType::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            TetrominoType::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
            TetrominoType::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
            TetrominoType::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
        }
    }

    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            TetrominoType::I => Rgb(0, 240, 240),
            TetrominoType::J => Rgb(0, 0, 240),
            TetrominoType::L => Rgb(240, 160, 0),
            TetrominoType::O => Rgb(240, 240, 0),
            TetrominoType::S => Rgb(0, 240, 0),
            TetrominoType::T => Rgb(160, 0, 240),
            TetrominoType::Z => Rgb(240, 0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A single board cell. An empty cell always renders as [`BACKGROUND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Rgb),
}

impl Cell {
    #[must_use]
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    #[must_use]
    pub fn color(self) -> Rgb {
        match self {
            Cell::Empty => BACKGROUND,
            Cell::Filled(color) => color,
        }
    }
}

/// The falling piece.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: TetrominoType,
    pub cells: [(i32, i32); 4],
    pub origin: Position,
    pub color: Rgb,
}

impl ActivePiece {
    /// A fresh piece of `kind` at the spawn cell, in spawn orientation.
    #[must_use]
    pub fn spawn(kind: TetrominoType) -> Self {
        Self {
            kind,
            cells: kind.offsets(),
            origin: Position {
                x: SPAWN_X,
                y: SPAWN_Y,
            },
            color: kind.color(),
        }
    }

    #[must_use]
    pub fn random() -> Self {
        Self::spawn(TetrominoType::random())
    }

    /// Absolute board-cell coordinates of the four cells.
    pub fn blocks(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|&(dx, dy)| Position {
            x: self.origin.x + dx,
            y: self.origin.y + dy,
        })
    }

    pub fn step(&mut self) {
        self.origin.y += 1;
    }

    /// Shifts one column left unless a cell would leave the playfield.
    /// Locked cells are not consulted.
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Shifts one column right unless a cell would leave the playfield.
    /// Locked cells are not consulted.
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> bool {
        if self.blocks().any(|block| left_right_blocked(block.x + dx)) {
            return false;
        }
        self.origin.x += dx;
        true
    }

    /// Quarter turn, `(dx, dy) -> (-dy, dx)`, followed by a horizontal-only wall kick.
    pub fn rotate(&mut self) {
        let rotated = self.cells.map(|(dx, dy)| (-dy, dx));

        while rotated
            .iter()
            .any(|&(dx, _)| rotate_left_blocked(self.origin.x + dx))
        {
            self.origin.x += 1;
        }
        while rotated
            .iter()
            .any(|&(dx, _)| rotate_right_blocked(self.origin.x + dx))
        {
            self.origin.x -= 1;
        }

        self.cells = rotated;
    }

    /// Row probed by the first cell whose next row is blocked, if any.
    #[must_use]
    pub fn resting_contact(&self, board: &Board) -> Option<i32> {
        self.blocks()
            .map(|block| (block.x, block.y + 1))
            .find(|&(x, y)| bottom_blocked(x, y, board))
            .map(|(_, y)| y)
    }

    #[must_use]
    pub fn is_resting(&self, board: &Board) -> bool {
        self.resting_contact(board).is_some()
    }

    /// Steps until the next step would collide. Returns the number of rows dropped.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while !self.is_resting(board) {
            self.step();
            rows += 1;
        }
        rows
    }

    /// Banks this piece in the hold slot and takes the previously held one,
    /// or a random piece when the slot was empty.
    pub fn hold(&mut self, board: &mut Board) {
        let next = match board.held.replace(self.kind) {
            Some(kind) => ActivePiece::spawn(kind),
            None => ActivePiece::random(),
        };
        *self = next;
    }
}

impl Default for ActivePiece {
    fn default() -> Self {
        Self::random()
    }
}

/// Settled session state: locked cells, score, hold slot and the game-over flag.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Indexed `cells[x][y]` in grid-local coordinates, row 0 at the top.
    pub cells: [[Cell; BOARD_HEIGHT]; BOARD_WIDTH],
    pub score: u32,
    pub held: Option<TetrominoType>,
    pub game_over: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_HEIGHT]; BOARD_WIDTH],
            score: 0,
            held: None,
            game_over: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Grid-local index for an absolute cell, `None` outside the visible board.
    #[must_use]
    pub fn grid_index(x: i32, y: i32) -> Option<(usize, usize)> {
        let gx = usize::try_from(x - PLAYFIELD_LEFT).ok()?;
        let gy = usize::try_from(y - PLAYFIELD_TOP).ok()?;
        (gx < BOARD_WIDTH && gy < BOARD_HEIGHT).then_some((gx, gy))
    }

    #[must_use]
    pub fn absolute(gx: usize, gy: usize) -> Position {
        Position {
            x: PLAYFIELD_LEFT + gx as i32,
            y: PLAYFIELD_TOP + gy as i32,
        }
    }

    /// Cell at absolute coordinates. Anything outside the grid reads as empty.
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Cell {
        Self::grid_index(x, y).map_or(Cell::Empty, |(gx, gy)| self.cells[gx][gy])
    }

    /// Copies the piece's cells into the grid. Cells outside the visible board are dropped.
    pub fn lock_piece(&mut self, piece: &ActivePiece) {
        for block in piece.blocks() {
            if let Some((gx, gy)) = Self::grid_index(block.x, block.y) {
                self.cells[gx][gy] = Cell::Filled(piece.color);
            }
        }
    }

    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells.iter().all(|column| column[row].is_filled())
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_filled())
            .count()
    }

    /// Removes full rows scanning bottom-up, scores them and returns how many went.
    ///
    /// Rows above a cleared row slide down by one and the same index is examined
    /// again. Row 0 keeps its content after a shift; only a full row 0 is emptied,
    /// since nothing above it can slide in.
    pub fn clear_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT;

        while row > 0 {
            let y = row - 1;
            if !self.is_row_full(y) {
                row -= 1;
                continue;
            }

            cleared += 1;
            for column in &mut self.cells {
                column.copy_within(0..y, 1);
            }
            if self.is_row_full(0) {
                for column in &mut self.cells {
                    column[0] = Cell::Empty;
                }
            }
        }

        self.score = self.score.saturating_add(points_for_rows(cleared));
        cleared
    }
}

/// Semantic key commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Hold,
}
