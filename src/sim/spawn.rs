//! Obstacle spawning
//!
//! Each tick rolls once against a level-scaled probability; a successful roll
//! creates one obstacle above the visible top with a uniformly random word,
//! color and horizontal position.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle};
use crate::consts::*;
use crate::words::{PALETTE, WORDS};

/// Per-tick spawn probability for the given level.
///
/// The raw curve `BASE + level * PER_LEVEL` grows without bound and would
/// pass 1.0 near level 495, so it is clamped to [`SPAWN_CHANCE_MAX`].
#[inline]
pub fn spawn_chance(level: u32) -> f32 {
    (SPAWN_CHANCE_BASE + level as f32 * SPAWN_CHANCE_PER_LEVEL).min(SPAWN_CHANCE_MAX)
}

/// Create one obstacle with uniformly random word, color and x position.
/// Speed snapshots the current climb speed.
pub fn spawn_obstacle<R: Rng>(rng: &mut R, climb_speed: f32) -> Obstacle {
    let word = WORDS[rng.random_range(0..WORDS.len())];
    let color = PALETTE[rng.random_range(0..PALETTE.len())];
    let x = rng.random_range(0.0..SURFACE_WIDTH - OBSTACLE_WIDTH);
    Obstacle {
        pos: Vec2::new(x, OBSTACLE_SPAWN_Y),
        width: OBSTACLE_WIDTH,
        height: OBSTACLE_HEIGHT,
        word,
        color,
        speed: climb_speed,
    }
}

/// Roll the per-tick spawn check and append a new obstacle on success
pub fn maybe_spawn(state: &mut GameState) {
    let chance = spawn_chance(state.level);
    if state.rng.random_range(0.0..1.0) < chance {
        let obstacle = spawn_obstacle(&mut state.rng, state.climb_speed);
        state.obstacles.push(obstacle);
    }
}
