//! Per-tick simulation advance and word submission
//!
//! `tick` runs once per animation frame with the elapsed time the host
//! scheduler granted; `submit_word` runs from the input callback. Both are
//! no-ops outside the Playing phase, which is also the only cancellation
//! mechanism: a tick scheduled before a stop fires once more and does
//! nothing.

use super::collision::rects_overlap;
use super::spawn::maybe_spawn;
use super::state::{GamePhase, GameState, Player};
use crate::consts::*;

/// Advance the game by one tick covering `dt` seconds of elapsed time.
///
/// Distance semantics match a 60 Hz frame: a tick of exactly [`SIM_DT`]
/// moves each obstacle by its stored speed.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    maybe_spawn(state);

    // Advance every obstacle by its own snapshotted speed
    let scale = dt / SIM_DT;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * scale;
    }

    // Partition into survivors and side effects instead of removing during
    // a reverse scan. Outcomes per obstacle, in order: fell past the bottom
    // (penalty), hit the player (game over, remaining obstacles untouched),
    // or kept.
    let player = Player::rect();
    let mut survivors = Vec::with_capacity(state.obstacles.len());
    let mut misses = 0u32;
    let mut collided = false;

    for obstacle in std::mem::take(&mut state.obstacles) {
        if collided {
            // Processing aborted; keep the rest frozen for display
            survivors.push(obstacle);
        } else if obstacle.past_bottom() {
            misses += 1;
        } else if rects_overlap(&obstacle.rect(), &player) {
            collided = true;
            survivors.push(obstacle);
        } else {
            survivors.push(obstacle);
        }
    }
    state.obstacles = survivors;

    for _ in 0..misses {
        state.penalize();
    }

    if collided {
        state.phase = GamePhase::GameOver;
        log::info!("game over at score {}", state.score);
    }
}

/// Handle one line submission from the input field.
///
/// Typed text is uppercased and trimmed; empty input and submissions outside
/// the Playing phase are ignored. The first obstacle whose word matches
/// exactly is removed and scored; at most one removal per submission even
/// when duplicates share the word. Returns whether a match was consumed.
/// Clearing the input field is the caller's job, match or not.
pub fn submit_word(state: &mut GameState, typed: &str) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }

    let word = typed.trim().to_uppercase();
    if word.is_empty() {
        return false;
    }

    match state.obstacles.iter().position(|o| o.word == word) {
        Some(index) => {
            state.obstacles.remove(index);
            state.award(MATCH_REWARD);
            true
        }
        None => false,
    }
}
