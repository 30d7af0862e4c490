use std::any::Any;
use std::rc::Rc;

use stepbar_core::{
    AnimationSpec, Axis, Brush, Color, ConfigError, Gradient, RestartPolicy, Size,
};

pub type Callback = Rc<dyn Fn()>;
/// Host-defined renderable placed inside a segment. Stepbar never looks
/// inside it.
pub type StepContent = Rc<dyn Any>;
pub type SizeResolver = Rc<dyn Fn(usize, bool) -> Option<f32>>;
pub type ColorResolver = Rc<dyn Fn(usize) -> Option<Color>>;
pub type ContentFactory = Rc<dyn Fn(usize, Brush, Size) -> Option<StepContent>>;
pub type ActivationFactory = Rc<dyn Fn(usize) -> Option<Callback>>;

/// Order in which steps fill as progress grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// First step at the start of the axis fills first.
    #[default]
    Forward,
    /// Last step fills first.
    Reverse,
}

#[derive(Clone)]
pub struct IndicatorConfig {
    pub total_steps: usize,
    /// Steps filled from the start of the traversal; the fractional part
    /// partially fills the next one.
    pub current_progress: f32,
    pub axis: Axis,
    pub direction: Direction,
    /// Gap on each side of every segment, along the axis.
    pub padding: f32,
    /// Thickness across the axis.
    pub size: f32,
    pub selected_size: Option<f32>,
    pub unselected_size: Option<f32>,
    pub size_resolver: Option<SizeResolver>,
    pub color_resolver: Option<ColorResolver>,
    pub selected_color: Color,
    pub unselected_color: Color,
    /// Applies to every step; wins over the selected/unselected gradients.
    pub gradient: Option<Gradient>,
    pub selected_gradient: Option<Gradient>,
    pub unselected_gradient: Option<Gradient>,
    pub corner_radius: Option<f32>,
    /// Length along the axis when the host leaves it unbounded.
    pub fallback_length: f32,
    pub step_content: Option<ContentFactory>,
    pub on_step_activated: Option<ActivationFactory>,
    pub animation: AnimationSpec,
    pub restart_policy: RestartPolicy,
}

impl std::fmt::Debug for IndicatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorConfig")
            .field("total_steps", &self.total_steps)
            .field("current_progress", &self.current_progress)
            .field("axis", &self.axis)
            .field("direction", &self.direction)
            .field("padding", &self.padding)
            .field("size", &self.size)
            .field("selected_size", &self.selected_size)
            .field("unselected_size", &self.unselected_size)
            .field("size_resolver", &self.size_resolver.as_ref().map(|_| "..."))
            .field("color_resolver", &self.color_resolver.as_ref().map(|_| "..."))
            .field("selected_color", &self.selected_color)
            .field("unselected_color", &self.unselected_color)
            .field("gradient", &self.gradient)
            .field("selected_gradient", &self.selected_gradient)
            .field("unselected_gradient", &self.unselected_gradient)
            .field("corner_radius", &self.corner_radius)
            .field("fallback_length", &self.fallback_length)
            .field("step_content", &self.step_content.as_ref().map(|_| "..."))
            .field(
                "on_step_activated",
                &self.on_step_activated.as_ref().map(|_| "..."),
            )
            .field("animation", &self.animation)
            .field("restart_policy", &self.restart_policy)
            .finish()
    }
}

impl IndicatorConfig {
    pub fn new(total_steps: usize) -> Self {
        Self {
            total_steps,
            current_progress: 0.0,
            axis: Axis::Horizontal,
            direction: Direction::Forward,
            padding: 2.0,
            size: 4.0,
            selected_size: None,
            unselected_size: None,
            size_resolver: None,
            color_resolver: None,
            selected_color: Color::from_hex("#2196F3"),
            unselected_color: Color::from_hex("#E0E0E0"),
            gradient: None,
            selected_gradient: None,
            unselected_gradient: None,
            corner_radius: None,
            fallback_length: 100.0,
            step_content: None,
            on_step_activated: None,
            animation: AnimationSpec::none(),
            restart_policy: RestartPolicy::FromPreviousTarget,
        }
    }

    pub fn progress(mut self, progress: f32) -> Self {
        self.current_progress = progress;
        self
    }
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
    pub fn selected_size(mut self, size: f32) -> Self {
        self.selected_size = Some(size);
        self
    }
    pub fn unselected_size(mut self, size: f32) -> Self {
        self.unselected_size = Some(size);
        self
    }
    pub fn size_resolver(mut self, f: impl Fn(usize, bool) -> Option<f32> + 'static) -> Self {
        self.size_resolver = Some(Rc::new(f));
        self
    }
    pub fn color_resolver(mut self, f: impl Fn(usize) -> Option<Color> + 'static) -> Self {
        self.color_resolver = Some(Rc::new(f));
        self
    }
    pub fn selected_color(mut self, c: Color) -> Self {
        self.selected_color = c;
        self
    }
    pub fn unselected_color(mut self, c: Color) -> Self {
        self.unselected_color = c;
        self
    }
    pub fn gradient(mut self, g: Gradient) -> Self {
        self.gradient = Some(g);
        self
    }
    pub fn selected_gradient(mut self, g: Gradient) -> Self {
        self.selected_gradient = Some(g);
        self
    }
    pub fn unselected_gradient(mut self, g: Gradient) -> Self {
        self.unselected_gradient = Some(g);
        self
    }
    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = Some(r);
        self
    }
    pub fn fallback_length(mut self, len: f32) -> Self {
        self.fallback_length = len;
        self
    }
    pub fn step_content(
        mut self,
        f: impl Fn(usize, Brush, Size) -> Option<StepContent> + 'static,
    ) -> Self {
        self.step_content = Some(Rc::new(f));
        self
    }
    pub fn on_step_activated(mut self, f: impl Fn(usize) -> Option<Callback> + 'static) -> Self {
        self.on_step_activated = Some(Rc::new(f));
        self
    }
    pub fn animation(mut self, spec: AnimationSpec) -> Self {
        self.animation = spec;
        self
    }
    pub fn restart_policy(mut self, policy: RestartPolicy) -> Self {
        self.restart_policy = policy;
        self
    }

    /// Checks everything that can be checked without a host. Gradients are
    /// validated when they are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        let finite = [
            ("current_progress", Some(self.current_progress)),
            ("padding", Some(self.padding)),
            ("size", Some(self.size)),
            ("selected_size", self.selected_size),
            ("unselected_size", self.unselected_size),
            ("corner_radius", self.corner_radius),
            ("fallback_length", Some(self.fallback_length)),
        ];
        for (name, value) in finite {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.current_progress < 0.0 {
            return Err(ConfigError::NegativeProgress(self.current_progress));
        }
        if self.padding < 0.0 {
            return Err(ConfigError::NegativePadding(self.padding));
        }
        if let Some(r) = self.corner_radius.filter(|r| *r < 0.0) {
            return Err(ConfigError::NegativeCornerRadius(r));
        }
        if self.fallback_length < 0.0 {
            return Err(ConfigError::NegativeFallbackLength(self.fallback_length));
        }
        Ok(())
    }

    /// Thickness of `step`. The resolver, when set, wins outright.
    pub fn step_size(&self, step: usize, selected: bool) -> f32 {
        if let Some(resolver) = &self.size_resolver
            && let Some(size) = resolver(step, selected)
        {
            return size;
        }
        let bucket = if selected {
            self.selected_size
        } else {
            self.unselected_size
        };
        bucket.unwrap_or(self.size)
    }

    /// Largest thickness any step could ask for.
    pub fn max_size(&self) -> f32 {
        let mut max = self
            .size
            .max(self.selected_size.unwrap_or(0.0))
            .max(self.unselected_size.unwrap_or(0.0));
        if let Some(resolver) = &self.size_resolver {
            for step in 0..self.total_steps {
                for selected in [true, false] {
                    if let Some(size) = resolver(step, selected) {
                        max = max.max(size);
                    }
                }
            }
        }
        max
    }
}
