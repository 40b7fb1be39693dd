//! Recorded draw commands
//!
//! `DrawList` is a `Surface` that keeps every primitive instead of
//! rasterizing it. Headless runs use it to count what was drawn; tests use it
//! to check what a frame contains.

use glam::Vec2;

use super::{Color, Surface};

/// A single recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { width: f32, height: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32 },
    GradientRect { x: f32, y: f32, w: f32, h: f32, top: Color, bottom: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, color: Color, line_width: f32 },
    StrokePath { points: Vec<Vec2>, color: Color, line_width: f32 },
    FillPolygon { points: Vec<Vec2>, color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
}

/// Surface that records commands in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCmd::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCmd::FillRect { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCmd::StrokeRect {
            x,
            y,
            w,
            h,
            color,
            line_width,
        });
    }

    fn fill_gradient_rect(&mut self, x: f32, y: f32, w: f32, h: f32, top: Color, bottom: Color) {
        self.commands.push(DrawCmd::GradientRect {
            x,
            y,
            w,
            h,
            top,
            bottom,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_path(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCmd::StrokePath {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.commands.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
