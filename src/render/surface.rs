//! Drawing surface contract
//!
//! The renderer produces no state, only draw calls; a `Surface` turns them
//! into pixels. The wasm bootstrap backs this with a `CanvasRenderingContext2d`;
//! tests and the native headless run use [`Recording`].

use glam::Vec2;

/// The sprites the scene needs, decoded before the loop starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ball,
    Basket,
    Background,
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Solid fill/stroke color
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Red/green/blue plus alpha in 0.0..=1.0
    Rgba(u8, u8, u8, f32),
    /// Hue in degrees, saturation and lightness in percent
    Hsl(f32, f32, f32),
}

impl Color {
    pub const WHITE: Color = Color::Rgba(255, 255, 255, 1.0);
    pub const GOLD: Color = Color::Rgba(255, 215, 0, 1.0);
    pub const BLUE: Color = Color::Rgba(0, 0, 255, 1.0);

    /// CSS color string for canvas backends
    pub fn to_css(self) -> String {
        match self {
            Color::Rgba(r, g, b, a) => format!("rgba({r}, {g}, {b}, {a})"),
            Color::Hsl(h, s, l) => format!("hsl({h:.0}, {s:.0}%, {l:.0}%)"),
        }
    }
}

/// Primitive drawing operations over a fixed-size logical surface
pub trait Surface {
    fn clear(&mut self);
    /// Draw a sprite scaled into the given rectangle at the given alpha
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Vec2, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Outline circle; `dashed` uses a tight [1, 1] dash pattern
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32, dashed: bool);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color, align: TextAlign);
}

/// One recorded surface call, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Sprite {
        sprite: Sprite,
        pos: Vec2,
        size: Vec2,
        alpha: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        width: f32,
        dashed: bool,
    },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    FillText {
        text: String,
        pos: Vec2,
        size_px: f32,
        color: Color,
        align: TextAlign,
    },
}

/// A surface that records commands instead of rasterizing them
#[derive(Debug, Default)]
pub struct Recording {
    pub commands: Vec<DrawCommand>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for Recording {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Vec2, alpha: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            pos,
            size,
            alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32, dashed: bool) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
            dashed,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            pos,
            size_px,
            color,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css_strings() {
        assert_eq!(Color::Rgba(248, 61, 61, 0.8).to_css(), "rgba(248, 61, 61, 0.8)");
        assert_eq!(Color::Hsl(210.4, 70.0, 60.0).to_css(), "hsl(210, 70%, 60%)");
        assert_eq!(Color::GOLD.to_css(), "rgba(255, 215, 0, 1)");
    }

    #[test]
    fn test_recording_clear_starts_fresh() {
        let mut surface = Recording::new();
        surface.fill_rect(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        surface.clear();
        assert_eq!(surface.commands, vec![DrawCommand::Clear]);
    }
}
