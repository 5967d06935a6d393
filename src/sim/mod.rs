//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit elapsed-time parameter per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use spawn::{spawn_chance, spawn_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player, level_for_score};
pub use tick::{submit_word, tick};
