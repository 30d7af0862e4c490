use thiserror::Error;

/// A gradient stop list that cannot be sampled.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GradientError {
    #[error("a gradient needs at least 2 stops, got {0}")]
    TooFewStops(usize),
    #[error("stop {index} at {position} lies outside [0, 1]")]
    StopOutOfRange { index: usize, position: f32 },
    #[error("stop {index} does not strictly increase over its predecessor")]
    NotIncreasing { index: usize },
    #[error("gradient must start at 0 and end at 1, got {first}..{last}")]
    BadEndpoints { first: f32, last: f32 },
}

/// Construction-time configuration errors. These are fatal: the indicator is
/// never built (or reconfigured) from a config that produces one.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("total_steps must be greater than zero")]
    ZeroSteps,
    #[error("current progress must be >= 0, got {0}")]
    NegativeProgress(f32),
    #[error("padding must be >= 0, got {0}")]
    NegativePadding(f32),
    #[error("corner radius must be >= 0, got {0}")]
    NegativeCornerRadius(f32),
    #[error("fallback length must be >= 0, got {0}")]
    NegativeFallbackLength(f32),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("invalid gradient: {0}")]
    Gradient(#[from] GradientError),
}
