use bevy_ecs::prelude::*;
use log::{debug, info, trace};
use std::time::Instant;

use crate::GravityClock;
use crate::components::{ActivePiece, Board, TetrominoType};
use crate::game::GAME_OVER_ROW;

/// Replaces the active piece with a fresh one of `kind`, or a random kind.
pub fn spawn_piece(world: &mut World, kind: Option<TetrominoType>) {
    let piece = kind.map_or_else(ActivePiece::random, ActivePiece::spawn);
    debug!("Spawning {:?}", piece.kind);
    world.insert_resource(piece);
}

fn is_game_over(world: &World) -> bool {
    world.resource::<Board>().game_over
}

fn is_resting(world: &World) -> bool {
    let board = world.resource::<Board>();
    world.resource::<ActivePiece>().is_resting(board)
}

pub fn move_left_system(world: &mut World) {
    if is_game_over(world) {
        return;
    }
    let moved = world.resource_mut::<ActivePiece>().move_left();
    trace!("Move left (moved: {moved})");
}

pub fn move_right_system(world: &mut World) {
    if is_game_over(world) {
        return;
    }
    let moved = world.resource_mut::<ActivePiece>().move_right();
    trace!("Move right (moved: {moved})");
}

pub fn rotate_system(world: &mut World) {
    if is_game_over(world) {
        return;
    }
    world.resource_mut::<ActivePiece>().rotate();
    trace!("Rotate");
}

/// Single-row nudge. A piece already resting stays put and is locked by the next settle.
pub fn soft_drop_system(world: &mut World) {
    if is_game_over(world) || is_resting(world) {
        return;
    }
    world.resource_mut::<ActivePiece>().step();
}

pub fn hard_drop_system(world: &mut World) {
    if is_game_over(world) {
        return;
    }
    let rows = world.resource_scope(|world, mut piece: Mut<ActivePiece>| {
        let board = world.resource::<Board>();
        piece.hard_drop(board)
    });
    debug!("Hard drop fell {rows} rows");
}

pub fn hold_system(world: &mut World) {
    if is_game_over(world) {
        return;
    }
    world.resource_scope(|world, mut piece: Mut<ActivePiece>| {
        let previous = piece.kind;
        let mut board = world.resource_mut::<Board>();
        piece.hold(&mut board);
        debug!("Held {previous:?}, now playing {:?}", piece.kind);
    });
}

/// Locks a resting piece, clears rows, spawns the next piece and checks for game over.
///
/// Returns `true` when a piece was locked.
pub fn settle_system(world: &mut World) -> bool {
    if is_game_over(world) {
        return false;
    }

    let contact = {
        let board = world.resource::<Board>();
        world.resource::<ActivePiece>().resting_contact(board)
    };
    let Some(contact_row) = contact else {
        return false;
    };

    let piece = world.resource::<ActivePiece>().clone();
    let cleared = {
        let mut board = world.resource_mut::<Board>();
        board.lock_piece(&piece);
        board.clear_rows()
    };
    debug!(
        "Locked {:?} at ({}, {})",
        piece.kind, piece.origin.x, piece.origin.y
    );
    if cleared > 0 {
        info!(
            "Cleared {cleared} rows, score {}",
            world.resource::<Board>().score
        );
    }

    spawn_piece(world, None);

    let fresh_contact = {
        let board = world.resource::<Board>();
        world.resource::<ActivePiece>().resting_contact(board)
    };
    let topped_out = contact_row <= GAME_OVER_ROW
        || fresh_contact.is_some_and(|row| row <= GAME_OVER_ROW);
    if topped_out {
        let mut board = world.resource_mut::<Board>();
        board.game_over = true;
        info!("Game over, final score {}", board.score);
    }

    true
}

/// Applies every whole gravity interval elapsed by `now`. Returns the rows fallen.
///
/// While the game is over the intervals are consumed without moving anything.
pub fn gravity_system(world: &mut World, now: Instant) -> u32 {
    let mut fallen = 0;
    while world.resource_mut::<GravityClock>().take_step(now) {
        if is_game_over(world) {
            continue;
        }
        if !is_resting(world) {
            world.resource_mut::<ActivePiece>().step();
            fallen += 1;
        }
        settle_system(world);
    }
    fallen
}

/// New active piece always; the board is only wiped once the game is over.
pub fn restart_system(world: &mut World) {
    spawn_piece(world, None);
    let mut board = world.resource_mut::<Board>();
    if board.game_over {
        board.reset();
        info!("Board reset after game over");
    } else {
        debug!("Restarted the active piece");
    }
}
