//! 2D rendering
//!
//! The game draws onto any `Surface`: a browser canvas on wasm32, or a
//! `DrawList` that records commands (headless runs and tests). Everything is
//! drawn procedurally from primitives; there are no sprites.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw;
pub use shapes::{DrawCmd, DrawList};

use glam::Vec2;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#87CEEB`
    pub fn css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fixed game palette
pub mod palette {
    use super::Color;

    pub const SKY_BLUE: Color = Color::rgb(0x87, 0xCE, 0xEB);
    pub const SKY_HORIZON: Color = Color::rgb(0xE0, 0xF6, 0xFF);
    pub const CLOUD_WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const PLATFORM_GREEN: Color = Color::rgb(0x22, 0x8B, 0x22);
    pub const PLATFORM_DARK: Color = Color::rgb(0x00, 0x64, 0x00);
    pub const PLATFORM_GRASS: Color = Color::rgb(0x3C, 0xB3, 0x71);
    pub const PLATFORM_SPECIAL: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const PLATFORM_MOVING: Color = Color::rgb(0x64, 0x64, 0xFF);
    pub const PLAYER_BLUE: Color = Color::rgb(0x1E, 0x90, 0xFF);
    pub const PLAYER_RED: Color = Color::rgb(0xDC, 0x14, 0x3C);
    pub const PLAYER_YELLOW: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const PLAYER_BROWN: Color = Color::rgb(0x8B, 0x45, 0x13);
    pub const PLAYER_SKIN: Color = Color::rgb(0xFF, 0xE4, 0xB5);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const SHADOW_GRAY: Color = Color::rgb(0xC8, 0xC8, 0xC8);
    pub const COIN_GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
    pub const POWER_UP_PURPLE: Color = Color::rgb(0x93, 0x00, 0xD3);
}

/// Drawing target with canvas-style primitives. Coordinates are logical
/// viewport units, origin top-left, y down.
pub trait Surface {
    /// Erase everything
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color, line_width: f32);
    /// Rect filled with a top-to-bottom two-stop gradient
    fn fill_gradient_rect(&mut self, x: f32, y: f32, w: f32, h: f32, top: Color, bottom: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);
    /// Open polyline through `points`
    fn stroke_path(&mut self, points: &[Vec2], color: Color, line_width: f32);
    /// Closed filled polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    /// Bold text centered horizontally on `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}
