//! # Stepbar core
//!
//! Renderer-agnostic building blocks shared by the step indicator and any
//! paint backend that consumes it:
//!
//! - `Color` / `Brush` — flat colors and two-stop linear gradients.
//! - `Gradient` — a validated multi-stop ramp that can be sampled anywhere in
//!   `[0, 1]` and sliced into sub-gradients.
//! - `AnimatedValue` — an eased transition between targets, advanced by the
//!   host once per frame.
//! - `Scene` — the flat paint list handed to a `RenderBackend`.
//!
//! ## Slicing a gradient
//!
//! ```rust
//! use stepbar_core::*;
//!
//! let ramp = Gradient::new([
//!     GradientStop::new(Color::RED, 0.0),
//!     GradientStop::new(Color::BLUE, 1.0),
//! ])
//! .unwrap();
//!
//! // The second quarter of the ramp, as its own two-stop gradient.
//! let slice = ramp.sub_gradient(0.25, 0.5);
//! assert_eq!(slice.first_color(), ramp.sample_at(0.25));
//! assert_eq!(slice.last_color(), ramp.sample_at(0.5));
//! ```
//!
//! ## Driving an animation
//!
//! Time is always passed in. Hosts use `SystemClock`; tests use
//! `ManualClock` so frames are deterministic:
//!
//! ```rust
//! use stepbar_core::*;
//! use web_time::{Duration, Instant};
//!
//! let clock = ManualClock::new(Instant::now());
//! let mut v = AnimatedValue::new(
//!     0.0f32,
//!     AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
//! );
//! v.set_target(4.0, clock.now());
//! clock.advance(Duration::from_millis(50));
//! assert!(v.update(clock.now()));
//! assert!((*v.get() - 2.0).abs() < 1e-3);
//! ```

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod render_api;
pub mod scene;
pub mod tests;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use gradient::*;
pub use render_api::*;
pub use scene::*;
