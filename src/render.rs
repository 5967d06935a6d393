//! 2D canvas rendering
//!
//! Purely derived from state: no game logic happens here and drawing the same
//! state twice produces the same frame. The scrolling background is
//! parameterized by wall-clock time, not by anything the sim persists.

use web_sys::CanvasRenderingContext2d;

use crate::Settings;
use crate::consts::*;
use crate::sim::{GameState, Player, Rect};

const SKY_COLOR: &str = "#87CEEB";
const WALL_COLOR: &str = "#555555";
const PLAYER_COLOR: &str = "#6a0dad";
const WORD_COLOR: &str = "#FFFFFF";
const WORD_FONT: &str = "20px \"IM Fell English SC\"";

/// Draws the scene onto a 2D canvas context
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_text_align("center");
        Self { ctx }
    }

    /// Draw one frame: background, obstacles, player
    pub fn render(&self, state: &GameState, time_ms: f64, settings: &Settings) {
        self.draw_background(state, time_ms, settings);
        for obstacle in &state.obstacles {
            self.draw_obstacle(obstacle.rect(), obstacle.word, obstacle.color);
        }
        self.draw_player();
    }

    /// Sky fill plus tower-wall blocks scrolling downward with the climb
    fn draw_background(&self, state: &GameState, time_ms: f64, settings: &Settings) {
        self.ctx.set_fill_style_str(SKY_COLOR);
        self.ctx
            .fill_rect(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64);

        let offset = if settings.reduced_motion {
            0.0
        } else {
            (time_ms * state.climb_speed as f64 * 0.1) % 40.0
        };
        self.ctx.set_fill_style_str(WALL_COLOR);
        let mut y = 0.0;
        while y < SURFACE_HEIGHT as f64 {
            self.ctx.fill_rect(0.0, y + offset, 20.0, 20.0);
            self.ctx
                .fill_rect(SURFACE_WIDTH as f64 - 20.0, y + offset, 20.0, 20.0);
            y += 40.0;
        }
    }

    fn draw_obstacle(&self, rect: Rect, word: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.width as f64,
            rect.height as f64,
        );

        self.ctx.set_fill_style_str(WORD_COLOR);
        self.ctx.set_font(WORD_FONT);
        let _ = self.ctx.fill_text(
            word,
            (rect.pos.x + rect.width / 2.0) as f64,
            (rect.pos.y + 30.0) as f64,
        );
    }

    /// Body rectangle plus a hat triangle
    fn draw_player(&self) {
        let rect = Player::rect();
        let (x, y) = (rect.pos.x as f64, rect.pos.y as f64);
        let (w, h) = (rect.width as f64, rect.height as f64);

        self.ctx.set_fill_style_str(PLAYER_COLOR);
        self.ctx.fill_rect(x, y, w, h);

        self.ctx.begin_path();
        self.ctx.move_to(x + w / 2.0, y - 10.0);
        self.ctx.line_to(x + 10.0, y + 20.0);
        self.ctx.line_to(x + w - 10.0, y + 20.0);
        self.ctx.close_path();
        self.ctx.fill();
    }
}
