//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, Scene};
use crate::error::{ArcadeError, ArcadeResult};

/// Owns a canvas' 2D context and replays scenes onto it
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> ArcadeResult<Self> {
        let no_context = || ArcadeError::NoContext2d { id: canvas.id() };
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(no_context)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| no_context())?;
        Ok(Self { canvas, ctx })
    }

    /// Canvas backing-store size in pixels
    pub fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn draw(&self, scene: &Scene) {
        for cmd in &scene.commands {
            match cmd {
                DrawCmd::FillRect { x, y, w, h, color } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx
                        .fill_rect(*x as f64, *y as f64, *w as f64, *h as f64);
                }
                DrawCmd::Text {
                    text,
                    x,
                    y,
                    size,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.set_font(&format!("{}px Arial", size));
                    if let Err(e) = self.ctx.fill_text(text, *x as f64, *y as f64) {
                        log::warn!("fill_text failed: {:?}", e);
                    }
                }
            }
        }
    }
}
