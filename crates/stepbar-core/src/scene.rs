use bitflags::bitflags;

use crate::{Brush, Color, Rect};

bitflags! {
    /// Logical corners of a segment. "Leading" is the end facing the start of
    /// the primary axis, "trailing" the opposite end; "start"/"end" name the
    /// two sides across the axis.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const LEADING_START = 1 << 0;
        const LEADING_END = 1 << 1;
        const TRAILING_START = 1 << 2;
        const TRAILING_END = 1 << 3;

        const LEADING = Self::LEADING_START.bits() | Self::LEADING_END.bits();
        const TRAILING = Self::TRAILING_START.bits() | Self::TRAILING_END.bits();
    }
}

/// Per-corner radii in screen terms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Leading/trailing map to left/right on a horizontal bar and to
    /// top/bottom on a vertical one.
    pub fn from_corners(corners: Corners, radius: f32, vertical: bool) -> Self {
        let pick = |c: Corners| if corners.contains(c) { radius } else { 0.0 };
        if vertical {
            Self {
                top_left: pick(Corners::LEADING_START),
                top_right: pick(Corners::LEADING_END),
                bottom_right: pick(Corners::TRAILING_END),
                bottom_left: pick(Corners::TRAILING_START),
            }
        } else {
            Self {
                top_left: pick(Corners::LEADING_START),
                bottom_left: pick(Corners::LEADING_END),
                top_right: pick(Corners::TRAILING_START),
                bottom_right: pick(Corners::TRAILING_END),
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    /// Slot the host fills with the caller-supplied content for `step`.
    Content { rect: Rect, step: usize },
    PushClip {
        rect: Rect,
        radii: CornerRadii,
    },
    PopClip,
}
