use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const RED: Color = Color(255, 0, 0, 255);
    pub const BLUE: Color = Color(0, 0, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, default: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(default)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => Color(0, 0, 0, 255),
        }
    }
    /// Channel-wise linear blend in sRGB space; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
            mix(self.3, other.3),
        )
    }
}

/// Brush for filling a segment.
///
/// Either a flat color or a two-stop linear gradient. Gradient endpoints are
/// normalized to the local rect of the node being drawn: (0,0) is its
/// top-left corner, (1,1) its bottom-right, so any backend that can paint a
/// "two-stop linear gradient over a rectangle" can consume it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// Solid color fill
    Solid(Color),

    /// Linear gradient from `start` to `end` in normalized local coordinates.
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        end_color: Color,
    },
}

impl Brush {
    /// Color at the leading edge of the brush.
    pub fn start_color(&self) -> Color {
        match *self {
            Brush::Solid(c) => c,
            Brush::Linear { start_color, .. } => start_color,
        }
    }

    /// Color at the trailing edge of the brush.
    pub fn end_color(&self) -> Color {
        match *self {
            Brush::Solid(c) => c,
            Brush::Linear { end_color, .. } => end_color,
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Brush::Linear { .. })
    }
}
