use smallvec::SmallVec;

use crate::config::Direction;

/// Position of `step` in fill order.
pub fn traversal_index(step: usize, total_steps: usize, direction: Direction) -> usize {
    match direction {
        Direction::Forward => step,
        Direction::Reverse => total_steps.saturating_sub(1).saturating_sub(step),
    }
}

/// How much of `step` is filled at `value`: 1 for steps already passed in
/// traversal order, the fractional part of `value` for the step it lands on,
/// 0 for the rest.
pub fn fill_fraction(step: usize, total_steps: usize, value: f32, direction: Direction) -> f32 {
    let value = if value.is_nan() { 0.0 } else { value.max(0.0) };
    let whole = value.floor();
    let i = traversal_index(step, total_steps, direction) as f32;
    if i < whole {
        1.0
    } else if i == whole {
        value - whole
    } else {
        0.0
    }
}

/// Fractions for every step in physical order.
pub fn fill_fractions(total_steps: usize, value: f32, direction: Direction) -> SmallVec<[f32; 8]> {
    (0..total_steps)
        .map(|step| fill_fraction(step, total_steps, value, direction))
        .collect()
}

/// A step is in the "selected" bucket as soon as any of it is filled.
pub fn is_selected(fraction: f32) -> bool {
    fraction > 0.0
}
