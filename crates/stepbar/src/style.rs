//! Colors, brushes and corner rounding for individual segments.

use stepbar_core::{Axis, Brush, Corners, Gradient, Vec2};

use crate::config::{Direction, IndicatorConfig};

/// Stretch of the whole indicator a segment covers, in traversal order:
/// 0 is where filling starts, 1 where it ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Span of the step at traversal position `i`.
    pub fn of_step(i: usize, total_steps: usize) -> Self {
        let n = total_steps.max(1) as f32;
        Self {
            start: i as f32 / n,
            end: (i + 1) as f32 / n,
        }
    }
}

/// Gradient governing a step in the given bucket, if any.
pub fn gradient_for(config: &IndicatorConfig, selected: bool) -> Option<&Gradient> {
    config.gradient.as_ref().or(if selected {
        config.selected_gradient.as_ref()
    } else {
        config.unselected_gradient.as_ref()
    })
}

/// Two-stop brush showing `span` of `gradient`, oriented so its start color
/// sits on the side where traversal begins.
pub fn gradient_brush(gradient: &Gradient, span: Span, axis: Axis, direction: Direction) -> Brush {
    let slice = gradient.sub_gradient(span.start, span.end);
    let unit = axis.unit();
    let (start, end) = match direction {
        Direction::Forward => (Vec2::default(), unit),
        Direction::Reverse => (unit, Vec2::default()),
    };
    Brush::Linear {
        start,
        end,
        start_color: slice.first_color(),
        end_color: slice.last_color(),
    }
}

/// Brush for `step`. Gradients beat the color resolver, which beats the flat
/// selected/unselected colors.
pub fn resolve_brush(config: &IndicatorConfig, step: usize, selected: bool, span: Span) -> Brush {
    if let Some(g) = gradient_for(config, selected) {
        return gradient_brush(g, span, config.axis, config.direction);
    }
    if let Some(resolver) = &config.color_resolver
        && let Some(color) = resolver(step)
    {
        return Brush::Solid(color);
    }
    Brush::Solid(if selected {
        config.selected_color
    } else {
        config.unselected_color
    })
}

/// Brush for the unfilled part of a partially filled step. Same precedence
/// as [`resolve_brush`] in the unselected bucket, so a resolver color covers
/// the whole step.
pub fn remainder_brush(config: &IndicatorConfig, step: usize, span: Span) -> Brush {
    resolve_brush(config, step, false, span)
}

/// True for a lone step, and for two gap-less steps whose progress rounds to
/// nothing, which read as a single shape.
pub fn is_only_step(total_steps: usize, padding: f32, value: f32) -> bool {
    total_steps == 1 || (total_steps == 2 && padding == 0.0 && value.round() == 0.0)
}

/// Corners that take the configured radius. Only the outer ends of the bar
/// are rounded; a lone step is rounded all round.
pub fn corner_mask(has_radius: bool, is_first: bool, is_last: bool, only_step: bool) -> Corners {
    if !has_radius {
        return Corners::empty();
    }
    if only_step {
        return Corners::all();
    }
    let mut corners = Corners::empty();
    if is_first {
        corners |= Corners::LEADING;
    }
    if is_last {
        corners |= Corners::TRAILING;
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepbar_core::{Color, GradientStop};

    fn red_blue() -> Gradient {
        Gradient::new([
            GradientStop::new(Color::RED, 0.0),
            GradientStop::new(Color::BLUE, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn flat_colors_follow_selection() {
        let cfg = IndicatorConfig::new(3)
            .selected_color(Color::RED)
            .unselected_color(Color::WHITE);
        let span = Span::of_step(0, 3);
        assert_eq!(resolve_brush(&cfg, 0, true, span), Brush::Solid(Color::RED));
        assert_eq!(resolve_brush(&cfg, 0, false, span), Brush::Solid(Color::WHITE));
    }

    #[test]
    fn color_resolver_beats_flat_colors() {
        let cfg = IndicatorConfig::new(3)
            .selected_color(Color::RED)
            .color_resolver(|step| (step == 1).then_some(Color::BLACK));
        let span = Span::of_step(1, 3);
        assert_eq!(resolve_brush(&cfg, 1, true, span), Brush::Solid(Color::BLACK));
        assert_eq!(resolve_brush(&cfg, 0, true, span), Brush::Solid(Color::RED));
    }

    #[test]
    fn remainder_uses_the_resolver() {
        let cfg = IndicatorConfig::new(3)
            .unselected_color(Color::WHITE)
            .color_resolver(|step| (step == 1).then_some(Color::BLACK));
        let span = Span::of_step(1, 3);
        assert_eq!(remainder_brush(&cfg, 1, span), Brush::Solid(Color::BLACK));
        assert_eq!(remainder_brush(&cfg, 2, span), Brush::Solid(Color::WHITE));

        let cfg = cfg.unselected_gradient(red_blue());
        assert!(remainder_brush(&cfg, 1, span).is_gradient());
    }

    #[test]
    fn gradient_beats_resolver() {
        let cfg = IndicatorConfig::new(4)
            .color_resolver(|_| Some(Color::BLACK))
            .selected_gradient(red_blue());
        let brush = resolve_brush(&cfg, 0, true, Span::of_step(0, 4));
        assert!(brush.is_gradient());
        assert_eq!(brush.start_color(), Color::RED);
        // Unselected steps have no gradient of their own here.
        assert_eq!(
            resolve_brush(&cfg, 3, false, Span::of_step(3, 4)),
            Brush::Solid(Color::BLACK)
        );
    }

    #[test]
    fn global_gradient_covers_both_buckets() {
        let g = red_blue();
        let cfg = IndicatorConfig::new(2)
            .gradient(g.clone())
            .unselected_gradient(Gradient::evenly_spaced(&[Color::WHITE, Color::BLACK]).unwrap());
        let brush = resolve_brush(&cfg, 1, false, Span::of_step(1, 2));
        assert_eq!(brush.start_color(), g.sample_at(0.5));
        assert_eq!(brush.end_color(), Color::BLUE);
    }

    #[test]
    fn reverse_gradient_points_back() {
        let brush = gradient_brush(&red_blue(), Span::new(0.0, 0.5), Axis::Vertical, Direction::Reverse);
        let Brush::Linear { start, end, .. } = brush else {
            panic!("expected a gradient brush");
        };
        assert_eq!(start, Vec2 { x: 0.0, y: 1.0 });
        assert_eq!(end, Vec2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn only_step_rule() {
        assert!(is_only_step(1, 0.0, 0.0));
        assert!(is_only_step(1, 5.0, 0.7));
        assert!(is_only_step(2, 0.0, 0.4));
        assert!(!is_only_step(2, 0.0, 0.5));
        assert!(!is_only_step(2, 1.0, 0.0));
        assert!(!is_only_step(3, 0.0, 0.0));
    }

    #[test]
    fn corner_masks() {
        assert_eq!(corner_mask(false, true, true, true), Corners::empty());
        assert_eq!(corner_mask(true, false, false, true), Corners::all());
        assert_eq!(corner_mask(true, true, false, false), Corners::LEADING);
        assert_eq!(corner_mask(true, false, true, false), Corners::TRAILING);
        assert_eq!(corner_mask(true, false, false, false), Corners::empty());
    }
}
