//! Segment lengths and positions for the two rendering paths.

use stepbar_core::{Axis, BoxExtent, Extent, Size};

use crate::config::{Direction, IndicatorConfig};
use crate::fill::{fill_fraction, is_selected, traversal_index};
use crate::segment::{SegmentDescriptor, Segments};
use crate::style::{Span, corner_mask, is_only_step, remainder_brush, resolve_brush};

/// Inputs shared by both planners for one frame.
#[derive(Clone, Copy, Debug)]
pub struct PlanContext<'a> {
    pub config: &'a IndicatorConfig,
    pub value: f32,
    pub available_length: f32,
}

pub trait SegmentPlanner {
    fn plan(&self, ctx: &PlanContext<'_>) -> Segments;
}

/// Length along the axis, substituting the fallback when unbounded.
pub fn available_length(config: &IndicatorConfig, extent: BoxExtent) -> f32 {
    extent.along(config.axis).bounded_or(config.fallback_length)
}

/// Thickness across the axis, substituting the largest requestable size when
/// unbounded.
pub fn cross_extent(config: &IndicatorConfig, extent: BoxExtent) -> f32 {
    match extent.across(config.axis) {
        Extent::Bounded(v) => v.max(0.0),
        Extent::Unbounded => config.max_size(),
    }
}

/// Length of every segment on the per-step path. Each segment owns
/// `padding` on both sides; leftover space below zero collapses to zero.
pub fn step_length(available_length: f32, padding: f32, total_steps: usize) -> f32 {
    if total_steps == 0 {
        return 0.0;
    }
    let n = total_steps as f32;
    let len = (available_length - padding * 2.0 * n) / n;
    if len < 0.0 {
        log::trace!("padding {padding} overflows {available_length}; collapsing segments");
        return 0.0;
    }
    len
}

/// Whether the gaps alone need more room than `available_length`.
pub fn padding_overflows(available_length: f32, padding: f32, total_steps: usize) -> bool {
    padding * 2.0 * total_steps as f32 > available_length
}

fn screen_size(axis: Axis, length: f32, thickness: f32) -> Size {
    axis.rect(0.0, 0.0, length, thickness).size()
}

/// One segment per step, all the same length.
pub struct PerStepPlanner;

impl SegmentPlanner for PerStepPlanner {
    fn plan(&self, ctx: &PlanContext<'_>) -> Segments {
        let cfg = ctx.config;
        let total = cfg.total_steps;
        let length = step_length(ctx.available_length, cfg.padding, total);
        let only = is_only_step(total, cfg.padding, ctx.value);
        let has_radius = cfg.corner_radius.is_some();

        (0..total)
            .map(|step| {
                let fraction = fill_fraction(step, total, ctx.value, cfg.direction);
                let selected = is_selected(fraction);
                let span = Span::of_step(traversal_index(step, total, cfg.direction), total);
                let size = cfg.step_size(step, selected);
                let brush = resolve_brush(cfg, step, selected, span);
                let remainder =
                    (fraction > 0.0 && fraction < 1.0).then(|| remainder_brush(cfg, step, span));
                let is_first = step == 0;
                let is_last = step + 1 == total;
                let content = cfg
                    .step_content
                    .as_ref()
                    .and_then(|f| f(step, brush, screen_size(cfg.axis, length, size)));
                let on_activate = cfg.on_step_activated.as_ref().and_then(|f| f(step));

                SegmentDescriptor {
                    index: step,
                    offset: cfg.padding + step as f32 * (length + 2.0 * cfg.padding),
                    length,
                    size,
                    fill_fraction: fraction,
                    brush,
                    remainder,
                    is_first,
                    is_last,
                    is_only_step: only,
                    corners: corner_mask(has_radius, is_first, is_last, only),
                    content,
                    on_activate,
                }
            })
            .collect()
    }
}

/// Whole indicator as one filled and one unfilled segment meeting at the
/// progress boundary.
pub struct OptimizedPlanner;

impl SegmentPlanner for OptimizedPlanner {
    fn plan(&self, ctx: &PlanContext<'_>) -> Segments {
        let cfg = ctx.config;
        let total = cfg.total_steps.max(1);
        let ratio = if ctx.value.is_nan() {
            0.0
        } else {
            (ctx.value / total as f32).clamp(0.0, 1.0)
        };
        let available = ctx.available_length.max(0.0);
        let filled_len = available * ratio;
        let unfilled_len = available - filled_len;
        let only = is_only_step(cfg.total_steps, cfg.padding, ctx.value);
        let has_radius = cfg.corner_radius.is_some();

        let filled = (
            filled_len,
            1.0,
            cfg.step_size(0, true),
            resolve_brush(cfg, 0, true, Span::new(0.0, ratio)),
        );
        let unfilled = (
            unfilled_len,
            0.0,
            cfg.step_size(0, false),
            resolve_brush(cfg, 0, false, Span::new(ratio, 1.0)),
        );
        let ordered = match cfg.direction {
            Direction::Forward => [filled, unfilled],
            Direction::Reverse => [unfilled, filled],
        };

        // End caps go to the outermost segments that are actually drawn.
        let lead = ordered.iter().position(|s| s.0 > 0.0).unwrap_or(0);
        let trail = ordered.iter().rposition(|s| s.0 > 0.0).unwrap_or(1);

        let mut offset = 0.0;
        ordered
            .into_iter()
            .enumerate()
            .map(|(pos, (length, fill_fraction, size, brush))| {
                let is_first = pos == lead;
                let is_last = pos == trail;
                let seg = SegmentDescriptor {
                    index: pos,
                    offset,
                    length,
                    size,
                    fill_fraction,
                    brush,
                    remainder: None,
                    is_first,
                    is_last,
                    is_only_step: only,
                    corners: corner_mask(has_radius, is_first, is_last, only),
                    content: None,
                    on_activate: None,
                };
                offset += length;
                seg
            })
            .collect()
    }
}
