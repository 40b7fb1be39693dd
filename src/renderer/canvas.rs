//! Browser canvas backend

use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Surface};

/// `Surface` over a 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        true
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_gradient_rect(&mut self, x: f32, y: f32, w: f32, h: f32, top: Color, bottom: Color) {
        let gradient =
            self.ctx
                .create_linear_gradient(x as f64, y as f64, x as f64, (y + h) as f64);
        let _ = gradient.add_color_stop(0.0, &top.css());
        let _ = gradient.add_color_stop(1.0, &bottom.css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circle(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.circle(center, radius);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        if !self.trace(points) {
            return;
        }
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if !self.trace(points) {
            return;
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&format!("bold {}px Arial", size));
        self.ctx.set_text_align("center");
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
