//! Typomancer - a falling-word typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring)
//! - `render`: 2D canvas rendering (wasm only)
//! - `settings`: User preferences persisted in LocalStorage
//! - `words`: Fixed vocabulary and obstacle palette

#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod sim;
pub mod words;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Reference timestep: one tick at 60 Hz moves an obstacle exactly its
    /// stored speed in surface units.
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Drawing surface dimensions (logical units)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Obstacle dimensions
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    /// Obstacles spawn above the visible top
    pub const OBSTACLE_SPAWN_Y: f32 = -50.0;

    /// Player dimensions and placement (centered, near the bottom)
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 100.0;

    /// Spawn probability per tick: BASE + level * PER_LEVEL, capped.
    /// The uncapped curve would exceed 1.0 around level 495.
    pub const SPAWN_CHANCE_BASE: f32 = 0.01;
    pub const SPAWN_CHANCE_PER_LEVEL: f32 = 0.002;
    pub const SPAWN_CHANCE_MAX: f32 = 0.25;

    /// Scoring
    pub const MATCH_REWARD: u32 = 10;
    pub const MISS_PENALTY: u32 = 1;
    pub const POINTS_PER_LEVEL: u32 = 50;

    /// Difficulty curve
    pub const BASE_CLIMB_SPEED: f32 = 1.0;
    pub const CLIMB_SPEED_INCREMENT: f32 = 0.2;
}
