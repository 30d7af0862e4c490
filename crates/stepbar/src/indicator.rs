use std::cell::Cell;
use std::rc::Rc;

use stepbar_core::{AnimatedValue, BoxExtent, Clock, ConfigError, SystemClock};

use crate::config::IndicatorConfig;
use crate::layout::padding_overflows;
use crate::segment::StepFrame;
use crate::strategy::{Strategy, plan_frame};

/// A live indicator: its configuration, the strategy chosen for it, and the
/// animated progress value it owns.
///
/// ```rust
/// use stepbar::*;
///
/// let mut bar = StepIndicator::new(IndicatorConfig::new(4).progress(2.5)).unwrap();
/// let frame = bar.frame(BoxExtent::bounded(200.0, 8.0));
/// assert_eq!(frame.segments.len(), 4);
/// assert_eq!(frame.current_step().map(|s| s.index), Some(2));
/// ```
pub struct StepIndicator {
    config: IndicatorConfig,
    strategy: Strategy,
    progress: AnimatedValue<f32>,
    clock: Rc<dyn Clock>,
    // Set once the overflow warning for the current config has been logged.
    overflow_warned: Cell<bool>,
}

impl StepIndicator {
    pub fn new(config: IndicatorConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    pub fn with_clock(config: IndicatorConfig, clock: Rc<dyn Clock>) -> Result<Self, ConfigError> {
        config.validate()?;
        let strategy = Strategy::select(&config);
        log::debug!(
            "step indicator: {} steps, {strategy:?} path",
            config.total_steps
        );
        let progress = AnimatedValue::new(config.current_progress, config.animation)
            .with_policy(config.restart_policy);
        Ok(Self {
            config,
            strategy,
            progress,
            clock,
            overflow_warned: Cell::new(false),
        })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Replaces the configuration. A changed progress target starts a new
    /// transition, abandoning any in flight; changed timing carries on from
    /// the value on screen. On error nothing changes.
    pub fn set_config(&mut self, config: IndicatorConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let strategy = Strategy::select(&config);
        if strategy != self.strategy {
            log::debug!("step indicator: {:?} -> {strategy:?} path", self.strategy);
        }
        self.strategy = strategy;

        let now = self.clock.now();
        if config.animation != self.config.animation && self.progress.is_animating() {
            log::debug!(
                "animation timing changed mid-flight; restarting from {}",
                self.progress.get()
            );
        }
        self.progress.set_spec(config.animation, now);
        self.progress.set_policy(config.restart_policy);
        if config.current_progress != self.config.current_progress {
            if self.progress.is_animating() {
                log::debug!(
                    "progress retarget {} -> {} mid-flight (at {})",
                    self.progress.target(),
                    config.current_progress,
                    self.progress.get()
                );
            } else {
                log::debug!(
                    "progress {} -> {} over {:?}",
                    self.progress.target(),
                    config.current_progress,
                    config.animation.duration
                );
            }
            self.progress.set_target(config.current_progress, now);
        }
        self.config = config;
        self.overflow_warned.set(false);
        Ok(())
    }

    /// Shorthand for a config update that only moves the target.
    pub fn set_progress(&mut self, progress: f32) -> Result<(), ConfigError> {
        let config = self.config.clone().progress(progress);
        self.set_config(config)
    }

    /// Advances the animation. Returns whether another frame is needed.
    pub fn tick(&mut self) -> bool {
        let was_running = self.progress.is_animating();
        let running = self.progress.update(self.clock.now());
        if was_running && !running {
            log::debug!("progress settled at {}", self.progress.get());
        }
        running
    }

    /// Value currently on screen.
    pub fn value(&self) -> f32 {
        *self.progress.get()
    }

    pub fn target(&self) -> f32 {
        *self.progress.target()
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Lays out the current value without advancing time.
    pub fn layout(&self, extent: BoxExtent) -> StepFrame {
        let frame = plan_frame(&self.config, self.strategy, self.value(), extent);
        let cfg = &self.config;
        if padding_overflows(frame.available_length, cfg.padding, cfg.total_steps)
            && !self.overflow_warned.replace(true)
        {
            log::warn!(
                "padding {} leaves no room for {} steps in {}; segments collapse to zero",
                cfg.padding,
                cfg.total_steps,
                frame.available_length
            );
        }
        frame
    }

    /// Whether the overflow warning has fired for the current config.
    pub fn overflow_warned(&self) -> bool {
        self.overflow_warned.get()
    }

    /// One host frame: advance, then lay out.
    pub fn frame(&mut self, extent: BoxExtent) -> StepFrame {
        self.tick();
        self.layout(extent)
    }
}

impl Drop for StepIndicator {
    fn drop(&mut self) {
        if self.progress.is_animating() {
            log::debug!(
                "step indicator dropped mid-animation at {}; cancelling",
                self.progress.get()
            );
            self.progress.cancel();
        }
    }
}
