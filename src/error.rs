//! Error types for slider initialization and configuration.

/// Reasons a slider could not be mounted on its host.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    /// The host has no slide track to translate.
    #[error("slider track element is missing")]
    MissingTrack,

    /// The track exists but holds no slides.
    #[error("slider track contains no slides")]
    NoSlides,

    /// The supplied configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Invalid slider configuration values.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// Autoplay would fire continuously.
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    /// Swipe threshold is negative or not a finite number.
    #[error("invalid swipe threshold: {value}")]
    InvalidThreshold { value: f32 },
}
