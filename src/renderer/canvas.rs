//! Canvas 2D presenter
//!
//! Draws the ground band, the runner (mirrored so it faces right), the
//! obstacle and the score. Glyphs are plain emoji text, no assets.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::platform::{Frame, Presenter};
use crate::tuning::Playfield;

const RUNNER_GLYPH: &str = "\u{1F3C3}\u{200D}\u{2640}\u{FE0F}";
const OBSTACLE_GLYPH: &str = "\u{1F6A7}";
const GROUND_COLOR: &str = "#999";
const TEXT_COLOR: &str = "#000";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    fn draw(&self, frame: &Frame<'_>) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        let field = frame.playfield;
        let floor_y = field.floor_y() as f64;

        ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

        // Ground
        ctx.set_fill_style_str(GROUND_COLOR);
        ctx.fill_rect(0.0, floor_y, field.width as f64, field.ground as f64);

        // Runner, flipped around its own center
        let actor = frame.actor;
        let size = actor.size as f64;
        ctx.save();
        ctx.set_font(&format!("{}px Arial", actor.size));
        ctx.set_text_baseline("bottom");
        ctx.translate(actor.pos.x as f64 + size / 2.0, 0.0)?;
        ctx.scale(-1.0, 1.0)?;
        ctx.fill_text(RUNNER_GLYPH, -size / 2.0, actor.pos.y as f64 + size)?;
        ctx.restore();

        // Obstacle
        let obstacle = frame.obstacle;
        ctx.set_font(&format!("{}px Arial", obstacle.size));
        ctx.set_text_baseline("bottom");
        ctx.fill_text(
            OBSTACLE_GLYPH,
            obstacle.pos.x as f64,
            (obstacle.pos.y + obstacle.size) as f64,
        )?;

        // Score
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("16px Arial");
        ctx.set_text_baseline("top");
        ctx.fill_text(&format!("Score: {}", frame.score), 10.0, 10.0)?;

        Ok(())
    }
}

impl Presenter for CanvasRenderer {
    fn present(&mut self, frame: &Frame<'_>) {
        if let Err(e) = self.draw(frame) {
            log::warn!("Render error: {:?}", e);
        }
    }

    fn resize(&mut self, playfield: &Playfield) {
        self.canvas.set_width(playfield.width as u32);
        self.canvas.set_height(playfield.height as u32);
    }
}
