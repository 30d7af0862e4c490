//! # Stepbar
//!
//! Layout and paint parameters for a linear, step-based progress indicator:
//! `N` segments along one axis, filled according to a continuous progress
//! value.
//!
//! Each frame flows one way:
//!
//! - the `StepIndicator` advances its animated progress value,
//! - `fill` turns that value into a per-step fill fraction,
//! - `style` picks each step's brush, thickness and rounded corners,
//! - a `SegmentPlanner` lays the segments out: `PerStepPlanner` for one
//!   segment per step, `OptimizedPlanner` for a single filled/unfilled pair
//!   when nothing needs per-step treatment,
//! - `paint` turns the resulting `StepFrame` into a `Scene` plus tap targets.
//!
//! Everything after the animation is a pure function of the configuration
//! and the animated value, so frames can be recomputed and thrown away
//! freely.
//!
//! ```rust
//! use stepbar::*;
//! use std::rc::Rc;
//! use web_time::{Duration, Instant};
//!
//! let clock = ManualClock::new(Instant::now());
//! let config = IndicatorConfig::new(10)
//!     .padding(0.0)
//!     .animation(AnimationSpec::tween(Duration::from_millis(200), Easing::Linear));
//! let mut bar = StepIndicator::with_clock(config, Rc::new(clock.clone())).unwrap();
//!
//! bar.set_progress(4.0).unwrap();
//! clock.advance(Duration::from_millis(100));
//! let frame = bar.frame(BoxExtent::bounded(100.0, 4.0));
//!
//! assert_eq!(frame.strategy, Strategy::Optimized);
//! assert!((frame.segments[0].length - 20.0).abs() < 1e-3);
//! ```

pub mod config;
pub mod fill;
pub mod indicator;
pub mod layout;
pub mod paint;
pub mod segment;
pub mod strategy;
pub mod style;

pub use config::*;
pub use fill::*;
pub use indicator::*;
pub use layout::*;
pub use paint::*;
pub use segment::*;
pub use strategy::*;
pub use style::*;

pub use stepbar_core::*;
