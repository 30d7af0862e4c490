use stepbar_core::BoxExtent;

use crate::config::IndicatorConfig;
use crate::layout::{
    OptimizedPlanner, PerStepPlanner, PlanContext, SegmentPlanner, available_length, cross_extent,
};
use crate::segment::StepFrame;

/// Which planner renders a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    PerStep,
    /// Two merged segments; only for gap-less configs without per-step hooks.
    Optimized,
}

/// No gaps and nothing that needs to see individual steps.
pub fn is_optimizable(config: &IndicatorConfig) -> bool {
    config.padding == 0.0
        && config.color_resolver.is_none()
        && config.size_resolver.is_none()
        && config.step_content.is_none()
        && config.on_step_activated.is_none()
}

impl Strategy {
    pub fn select(config: &IndicatorConfig) -> Self {
        if is_optimizable(config) {
            Strategy::Optimized
        } else {
            Strategy::PerStep
        }
    }

    pub fn planner(self) -> &'static dyn SegmentPlanner {
        match self {
            Strategy::PerStep => &PerStepPlanner,
            Strategy::Optimized => &OptimizedPlanner,
        }
    }
}

/// Lays out one frame. Pure in its inputs.
pub fn plan_frame(
    config: &IndicatorConfig,
    strategy: Strategy,
    value: f32,
    extent: BoxExtent,
) -> StepFrame {
    let available_length = available_length(config, extent);
    let ctx = PlanContext {
        config,
        value,
        available_length,
    };
    let segments = strategy.planner().plan(&ctx);
    log::trace!(
        "planned {} segments ({strategy:?}) at value {value} over {available_length}",
        segments.len()
    );
    StepFrame {
        strategy,
        animated_value: value,
        available_length,
        cross_extent: cross_extent(config, extent),
        segments,
    }
}
