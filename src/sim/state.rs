//! Game state and core simulation types
//!
//! All mutable session state lives in [`GameState`]; nothing in the sim is a
//! free-floating module-level variable.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Main menu, nothing simulated
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended by a collision; final score frozen for display
    GameOver,
}

/// A falling obstacle bearing a word
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Word that clears this obstacle (always uppercase)
    pub word: &'static str,
    /// CSS fill color
    pub color: &'static str,
    /// Vertical speed, snapshotted from `climb_speed` at spawn time and
    /// never updated retroactively
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the obstacle has fallen past the bottom boundary
    pub fn past_bottom(&self) -> bool {
        self.pos.y > SURFACE_HEIGHT
    }
}

/// The stationary player: a fixed-size rectangle near the bottom of the
/// surface. Immutable during play.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

impl Player {
    pub fn rect() -> Rect {
        Rect::new(
            SURFACE_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            SURFACE_HEIGHT - PLAYER_BOTTOM_MARGIN,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }
}

/// Difficulty tier derived purely from cumulative score
#[inline]
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG (spawn rolls only)
    pub rng: Pcg32,
    /// Never goes negative: penalties use a saturating decrement
    pub score: u32,
    /// Kept in sync with `level_for_score(score)`
    pub level: u32,
    /// Shared vertical velocity handed to obstacles at spawn time.
    /// Monotonically non-decreasing within a session.
    pub climb_speed: f32,
    /// Insertion-order list; duplicate words allowed
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
}

impl GameState {
    /// Create a fresh session at the menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            level: 1,
            climb_speed: BASE_CLIMB_SPEED,
            obstacles: Vec::new(),
            time_ticks: 0,
            phase: GamePhase::Menu,
        }
    }

    /// Whether ticks and submissions are processed
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// `menu --start--> playing` and `gameOver --retry--> playing` are the
    /// same transition: an identical full reset.
    pub fn start(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.score = 0;
        self.level = 1;
        self.climb_speed = BASE_CLIMB_SPEED;
        self.obstacles.clear();
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Any state `--showMenu--> menu`; stops the run if one is active
    pub fn show_menu(&mut self) {
        self.phase = GamePhase::Menu;
    }

    /// Award points for a matched word
    pub fn award(&mut self, points: u32) {
        self.score += points;
        self.sync_level();
    }

    /// Apply the miss penalty, floored at zero
    pub fn penalize(&mut self) {
        self.score = self.score.saturating_sub(MISS_PENALTY);
        self.sync_level();
    }

    /// Recompute the level from the score. Any change, up or down, bumps
    /// `climb_speed` by the fixed increment; the increment only ever adds,
    /// so speed stays non-decreasing even when the level drops.
    fn sync_level(&mut self) {
        let new_level = level_for_score(self.score);
        if new_level != self.level {
            self.level = new_level;
            self.climb_speed += CLIMB_SPEED_INCREMENT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_formula() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(49), 1);
        assert_eq!(level_for_score(50), 2);
        assert_eq!(level_for_score(55), 2);
        assert_eq!(level_for_score(100), 3);
    }

    #[test]
    fn test_new_session_starts_at_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_resets_session() {
        let mut state = GameState::new(42);
        state.start();
        state.award(120);
        state.obstacles.push(Obstacle {
            pos: Vec2::new(10.0, 10.0),
            width: 150.0,
            height: 50.0,
            word: "FIRE",
            color: "#FF4500",
            speed: state.climb_speed,
        });
        state.phase = GamePhase::GameOver;

        state.start();
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.climb_speed, BASE_CLIMB_SPEED);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut state = GameState::new(1);
        state.start();
        state.penalize();
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_level_up_bumps_climb_speed() {
        let mut state = GameState::new(1);
        state.start();
        state.award(45);
        assert_eq!(state.level, 1);
        let before = state.climb_speed;

        state.award(10); // 55 -> level 2
        assert_eq!(state.score, 55);
        assert_eq!(state.level, 2);
        assert!((state.climb_speed - (before + CLIMB_SPEED_INCREMENT)).abs() < 1e-6);
    }

    #[test]
    fn test_level_drop_also_bumps_climb_speed() {
        let mut state = GameState::new(1);
        state.start();
        state.award(50); // level 2, speed 1.2
        state.score = 49; // force a score just under the band
        state.penalize(); // 48, level recomputes to 1
        assert_eq!(state.level, 1);
        // Speed only ever adds
        assert!(state.climb_speed > BASE_CLIMB_SPEED + CLIMB_SPEED_INCREMENT);
    }

    proptest! {
        #[test]
        fn prop_level_matches_formula(score in 0u32..100_000) {
            prop_assert_eq!(level_for_score(score), score / POINTS_PER_LEVEL + 1);
        }

        #[test]
        fn prop_level_non_decreasing(score in 0u32..100_000) {
            prop_assert!(level_for_score(score + 1) >= level_for_score(score));
        }

        #[test]
        fn prop_score_is_clamped_running_total(rewards in prop::collection::vec(0u32..20, 0..50)) {
            let mut state = GameState::new(0);
            state.start();
            let mut expected: i64 = 0;
            for r in rewards {
                if r == 0 {
                    state.penalize();
                    expected = (expected - MISS_PENALTY as i64).max(0);
                } else {
                    state.award(r);
                    expected += r as i64;
                }
                prop_assert_eq!(state.score as i64, expected);
            }
        }

        #[test]
        fn prop_climb_speed_monotone(events in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut state = GameState::new(0);
            state.start();
            let mut last = state.climb_speed;
            for matched in events {
                if matched {
                    state.award(MATCH_REWARD);
                } else {
                    state.penalize();
                }
                prop_assert!(state.climb_speed >= last);
                last = state.climb_speed;
            }
        }
    }
}
