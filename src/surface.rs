//! Drawing surface used by the particle systems.
//! The browser implementation wraps a 2D canvas; tests record calls instead.

use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    fn size(&self) -> (f64, f64);

    fn resize(&mut self, width: f64, height: f64);

    fn clear(&mut self);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);

    /// Rhombus centred on (x, y): `size` tall, half as wide, rotated by `rotation` radians.
    fn fill_diamond(&mut self, x: f64, y: f64, size: f64, rotation: f64, color: Rgba);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        self.ctx
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0)
            .ok();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill();
    }

    fn fill_diamond(&mut self, x: f64, y: f64, size: f64, rotation: f64, color: Rgba) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(x, y).ok();
        ctx.rotate(rotation).ok();
        ctx.set_fill_style_str(&color.to_string());
        ctx.begin_path();
        ctx.move_to(0.0, -size);
        ctx.line_to(size * 0.5, 0.0);
        ctx.line_to(0.0, size);
        ctx.line_to(-size * 0.5, 0.0);
        ctx.close_path();
        ctx.fill();
        ctx.restore();
    }
}
