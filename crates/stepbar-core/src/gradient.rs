//! Multi-stop gradients and the sampling used to slice one gradient across
//! several segments.

use smallvec::SmallVec;

use crate::{Color, error::GradientError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub position: f32,
}

impl GradientStop {
    pub fn new(color: Color, position: f32) -> Self {
        Self { color, position }
    }
}

/// An ordered ramp of at least two stops, strictly increasing from 0 to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    stops: SmallVec<[GradientStop; 4]>,
}

impl Gradient {
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Result<Self, GradientError> {
        let stops: SmallVec<[GradientStop; 4]> = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops(stops.len()));
        }
        for (index, stop) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.position) {
                return Err(GradientError::StopOutOfRange {
                    index,
                    position: stop.position,
                });
            }
            if index > 0 && stop.position <= stops[index - 1].position {
                return Err(GradientError::NotIncreasing { index });
            }
        }
        let first = stops[0].position;
        let last = stops[stops.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(GradientError::BadEndpoints { first, last });
        }
        Ok(Self { stops })
    }

    /// Evenly spaced stops over the given colors.
    pub fn evenly_spaced(colors: &[Color]) -> Result<Self, GradientError> {
        if colors.len() < 2 {
            return Err(GradientError::TooFewStops(colors.len()));
        }
        let last = (colors.len() - 1) as f32;
        Self::new(colors.iter().enumerate().map(|(i, &c)| {
            // Pin the final stop so rounding can't push it off 1.0.
            let position = if i == colors.len() - 1 { 1.0 } else { i as f32 / last };
            GradientStop::new(c, position)
        }))
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn first_color(&self) -> Color {
        self.stops[0].color
    }

    pub fn last_color(&self) -> Color {
        self.stops[self.stops.len() - 1].color
    }

    /// Color at `position`, clamped to the end colors outside the stop range.
    pub fn sample_at(&self, position: f32) -> Color {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if position.is_nan() || position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if position <= b.position {
                let t = (position - a.position) / (b.position - a.position);
                return a.color.lerp(b.color, t);
            }
        }
        last.color
    }

    /// Two-stop gradient covering `[start, end]` of this one. Both ends are
    /// clamped to [0, 1] first.
    pub fn sub_gradient(&self, start: f32, end: f32) -> Gradient {
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        let mut stops = SmallVec::new();
        stops.push(GradientStop::new(self.sample_at(start), 0.0));
        stops.push(GradientStop::new(self.sample_at(end), 1.0));
        Gradient { stops }
    }
}
