#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::info;
use std::time::Instant;

use crate::GravityClock;
use crate::components::{ActivePiece, Board, Command, Position, Rgb};
use crate::config::Config;
use crate::game::STEP_RATE;
use crate::systems::{
    gravity_system, hard_drop_system, hold_system, move_left_system, move_right_system,
    restart_system, rotate_system, settle_system, soft_drop_system, spawn_piece,
};

pub type AppResult<T> = anyhow::Result<T>;

/// One play session: the world holding the board, the active piece and the gravity clock.
pub struct App {
    pub world: World,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Session whose gravity clock starts at `start`.
    #[must_use]
    pub fn with_start(config: Config, start: Instant) -> Self {
        let mut world = World::new();
        world.insert_resource(Board::new());
        world.insert_resource(GravityClock::new(start, STEP_RATE));

        let mut app = Self {
            world,
            config,
            should_quit: false,
        };

        // Spawn initial piece
        spawn_piece(&mut app.world, None);

        app
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.world.resource::<Board>()
    }

    #[must_use]
    pub fn piece(&self) -> &ActivePiece {
        self.world.resource::<ActivePiece>()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board().game_over
    }

    /// Runs exactly one transition for `command`.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Command::Restart => restart_system(&mut self.world),
            Command::MoveLeft => move_left_system(&mut self.world),
            Command::MoveRight => move_right_system(&mut self.world),
            Command::Rotate => rotate_system(&mut self.world),
            Command::SoftDrop => soft_drop_system(&mut self.world),
            Command::HardDrop => hard_drop_system(&mut self.world),
            Command::Hold => hold_system(&mut self.world),
        }
    }

    /// Per-frame update: settle a resting piece, then catch gravity up to `now`.
    pub fn frame(&mut self, now: Instant) {
        settle_system(&mut self.world);
        gravity_system(&mut self.world, now);
    }

    /// Locked cells plus the active piece, in absolute coordinates.
    #[must_use]
    pub fn get_render_blocks(&self) -> Vec<(Position, Rgb)> {
        let board = self.board();
        let mut blocks: Vec<_> = board
            .cells
            .iter()
            .enumerate()
            .flat_map(|(gx, column)| {
                column.iter().enumerate().filter_map(move |(gy, cell)| {
                    cell.is_filled().then(|| (Board::absolute(gx, gy), cell.color()))
                })
            })
            .collect();

        if !board.game_over {
            let piece = self.piece();
            blocks.extend(piece.blocks().map(|block| (block, piece.color)));
        }
        blocks
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
