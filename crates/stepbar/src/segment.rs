use smallvec::SmallVec;
use stepbar_core::{Brush, Corners};

use crate::config::{Callback, StepContent};
use crate::strategy::Strategy;

/// Paint parameters for one segment of one frame.
#[derive(Clone)]
pub struct SegmentDescriptor {
    /// Step index on the per-step path; position (0 or 1) on the merged path.
    pub index: usize,
    /// Distance from the start of the axis to the segment's leading edge.
    pub offset: f32,
    pub length: f32,
    /// Thickness across the axis.
    pub size: f32,
    pub fill_fraction: f32,
    pub brush: Brush,
    /// Unfilled part of a partially filled step; `None` otherwise.
    pub remainder: Option<Brush>,
    pub is_first: bool,
    pub is_last: bool,
    pub is_only_step: bool,
    pub corners: Corners,
    pub content: Option<StepContent>,
    pub on_activate: Option<Callback>,
}

impl SegmentDescriptor {
    pub fn is_partial(&self) -> bool {
        self.fill_fraction > 0.0 && self.fill_fraction < 1.0
    }
}

impl std::fmt::Debug for SegmentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentDescriptor")
            .field("index", &self.index)
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("size", &self.size)
            .field("fill_fraction", &self.fill_fraction)
            .field("brush", &self.brush)
            .field("remainder", &self.remainder)
            .field("is_first", &self.is_first)
            .field("is_last", &self.is_last)
            .field("is_only_step", &self.is_only_step)
            .field("corners", &self.corners)
            .field("content", &self.content.as_ref().map(|_| "..."))
            .field("on_activate", &self.on_activate.as_ref().map(|_| "..."))
            .finish()
    }
}

pub type Segments = SmallVec<[SegmentDescriptor; 8]>;

/// Everything the host needs to paint one frame, in physical order along
/// the axis.
#[derive(Clone, Debug)]
pub struct StepFrame {
    pub strategy: Strategy,
    pub animated_value: f32,
    pub available_length: f32,
    pub cross_extent: f32,
    pub segments: Segments,
}

impl StepFrame {
    /// Sum of segment lengths, gaps excluded.
    pub fn segments_length(&self) -> f32 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// The partially filled step, if the value sits between two steps.
    pub fn current_step(&self) -> Option<&SegmentDescriptor> {
        self.segments.iter().find(|s| s.is_partial())
    }
}
