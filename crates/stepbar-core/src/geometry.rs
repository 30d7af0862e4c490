#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.w,
            height: self.h,
        }
    }
}

/// Main axis of the indicator. Segments are laid out along it; their
/// thickness is measured across it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Builds a rect from primary/cross coordinates.
    pub fn rect(self, primary: f32, cross: f32, length: f32, thickness: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect {
                x: primary,
                y: cross,
                w: length,
                h: thickness,
            },
            Axis::Vertical => Rect {
                x: cross,
                y: primary,
                w: thickness,
                h: length,
            },
        }
    }

    /// Unit vector along the axis.
    pub fn unit(self) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2 { x: 1.0, y: 0.0 },
            Axis::Vertical => Vec2 { x: 0.0, y: 1.0 },
        }
    }
}

/// One dimension of the space a host offers. Unbounded is a distinct state,
/// never an infinite float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Extent {
    Bounded(f32),
    Unbounded,
}

impl Extent {
    pub fn bounded_or(self, fallback: f32) -> f32 {
        match self {
            Extent::Bounded(v) => v.max(0.0),
            Extent::Unbounded => fallback,
        }
    }
}

/// Box offered by the host along both screen axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxExtent {
    pub width: Extent,
    pub height: Extent,
}

impl BoxExtent {
    pub fn bounded(width: f32, height: f32) -> Self {
        Self {
            width: Extent::Bounded(width),
            height: Extent::Bounded(height),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            width: Extent::Unbounded,
            height: Extent::Unbounded,
        }
    }

    /// Extent along `axis`.
    pub fn along(&self, axis: Axis) -> Extent {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent across `axis`.
    pub fn across(&self, axis: Axis) -> Extent {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }
}
