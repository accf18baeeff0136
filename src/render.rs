//! Canvas 2D rendering
//!
//! Drawing is a pure function of the current game state: clear, HUD text,
//! the three filled squares, and an overlay message in any non-playing
//! phase. Nothing here mutates the simulation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const PLAYER_COLOR: &str = "#4caf50";
const ENEMY_COLOR: &str = "#e53935";
const COIN_COLOR: &str = "#f4c542";
const HUD_COLOR: &str = "#111";
const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.45)";
const MESSAGE_COLOR: &str = "#fff";

const HUD_FONT: &str = "16px Arial";
const MESSAGE_FONT: &str = "26px Arial";
const MESSAGE_LINE_SPACING: f64 = 34.0;

const HINT_TEXT: &str = "Avoid the red enemy. Collect the gold coin. Press R to restart.";

/// Renders game state onto a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        self.draw_hud(state);

        self.fill_square(state.coin.pos.x, state.coin.pos.y, COIN_SIZE, COIN_COLOR);
        self.fill_square(state.enemy.pos.x, state.enemy.pos.y, ENEMY_SIZE, ENEMY_COLOR);
        self.fill_square(
            state.player.pos.x,
            state.player.pos.y,
            PLAYER_SIZE,
            PLAYER_COLOR,
        );

        match state.phase {
            GamePhase::Playing => {}
            GamePhase::Start => self.draw_overlay("COIN DASH\nPress Enter to start"),
            GamePhase::Won => self.draw_overlay("YOU WIN!\nPress R to play again"),
            GamePhase::Lost => self.draw_overlay("GAME OVER\nPress R to try again"),
        }
    }

    fn fill_square(&self, x: f32, y: f32, edge: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, edge as f64, edge as f64);
    }

    fn draw_hud(&self, state: &GameState) {
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_fill_style_str(HUD_COLOR);
        let score = format!("Score: {} / {}", state.score, WIN_SCORE);
        let _ = self.ctx.fill_text(&score, 10.0, 22.0);
        if state.config.show_hint {
            let _ = self.ctx.fill_text(HINT_TEXT, 10.0, 42.0);
        }
    }

    /// Dim the whole surface and stack a centered multi-line message
    fn draw_overlay(&self, message: &str) {
        self.ctx.set_fill_style_str(OVERLAY_COLOR);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);

        self.ctx.set_fill_style_str(MESSAGE_COLOR);
        self.ctx.set_font(MESSAGE_FONT);
        self.ctx.set_text_align("center");

        let lines: Vec<&str> = message.split('\n').collect();
        let block_height = (lines.len() as f64 - 1.0) * MESSAGE_LINE_SPACING;
        let top = self.height / 2.0 - block_height / 2.0;
        for (i, line) in lines.iter().enumerate() {
            let y = top + i as f64 * MESSAGE_LINE_SPACING;
            let _ = self.ctx.fill_text(line, self.width / 2.0, y);
        }

        self.ctx.set_text_align("left");
    }
}
