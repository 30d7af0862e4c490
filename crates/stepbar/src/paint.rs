//! Turns a planned frame into a paint list and tap targets.

use stepbar_core::{Axis, CornerRadii, Rect, Scene, SceneNode};

use crate::config::{Callback, Direction, IndicatorConfig};
use crate::segment::{SegmentDescriptor, StepFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The whole segment rect takes the tap.
    Segment,
    /// Only the content the host placed in the segment takes the tap.
    Content,
}

#[derive(Clone)]
pub struct HitRegion {
    pub step: usize,
    pub rect: Rect,
    pub target: HitTarget,
    pub on_activate: Callback,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("step", &self.step)
            .field("rect", &self.rect)
            .field("target", &self.target)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Painted {
    pub scene: Scene,
    pub hits: Vec<HitRegion>,
}

/// Screen rect of `seg` inside `bounds`, centered across the axis.
pub fn segment_rect(seg: &SegmentDescriptor, bounds: Rect, axis: Axis) -> Rect {
    let (primary0, cross0, cross_len) = match axis {
        Axis::Horizontal => (bounds.x, bounds.y, bounds.h),
        Axis::Vertical => (bounds.y, bounds.x, bounds.w),
    };
    let cross = cross0 + (cross_len - seg.size) * 0.5;
    axis.rect(primary0 + seg.offset, cross, seg.length, seg.size)
}

/// Splits `rect` at `fraction` along the axis into (filled, unfilled),
/// filled on the side traversal starts from.
fn split(rect: Rect, fraction: f32, axis: Axis, direction: Direction) -> (Rect, Rect) {
    let (start, len) = match axis {
        Axis::Horizontal => (rect.x, rect.w),
        Axis::Vertical => (rect.y, rect.h),
    };
    let (cross, thickness) = match axis {
        Axis::Horizontal => (rect.y, rect.h),
        Axis::Vertical => (rect.x, rect.w),
    };
    let filled = len * fraction.clamp(0.0, 1.0);
    let rest = len - filled;
    match direction {
        Direction::Forward => (
            axis.rect(start, cross, filled, thickness),
            axis.rect(start + filled, cross, rest, thickness),
        ),
        Direction::Reverse => (
            axis.rect(start + rest, cross, filled, thickness),
            axis.rect(start, cross, rest, thickness),
        ),
    }
}

pub fn paint(frame: &StepFrame, bounds: Rect, config: &IndicatorConfig) -> Painted {
    let mut out = Painted::default();
    let radius = config.corner_radius.unwrap_or(0.0);
    let vertical = config.axis == Axis::Vertical;

    for seg in &frame.segments {
        let rect = segment_rect(seg, bounds, config.axis);
        let radii = CornerRadii::from_corners(seg.corners, radius, vertical);

        if let Some(on_activate) = &seg.on_activate {
            out.hits.push(HitRegion {
                step: seg.index,
                rect,
                target: if seg.content.is_some() {
                    HitTarget::Content
                } else {
                    HitTarget::Segment
                },
                on_activate: on_activate.clone(),
            });
        }

        if seg.content.is_some() {
            out.scene.nodes.push(SceneNode::Content {
                rect,
                step: seg.index,
            });
            continue;
        }
        if seg.length <= 0.0 {
            continue;
        }

        match seg.remainder {
            Some(remainder) => {
                let (filled, rest) = split(rect, seg.fill_fraction, config.axis, config.direction);
                // Both brushes span the full rect so a gradient stays
                // continuous across the boundary.
                for (clip, brush) in [(rest, remainder), (filled, seg.brush)] {
                    out.scene.nodes.push(SceneNode::PushClip {
                        rect: clip,
                        radii: CornerRadii::default(),
                    });
                    out.scene.nodes.push(SceneNode::Rect { rect, brush, radii });
                    out.scene.nodes.push(SceneNode::PopClip);
                }
            }
            None => out.scene.nodes.push(SceneNode::Rect {
                rect,
                brush: seg.brush,
                radii,
            }),
        }
    }
    out
}
