use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{AUTOPLAY_INTERVAL, SWIPE_THRESHOLD};
use crate::error::ConfigError;

/// Tunables for one slider instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub autoplay_interval: Duration,
    pub swipe_threshold: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: AUTOPLAY_INTERVAL,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl SliderConfig {
    pub fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold { value: self.swipe_threshold });
        }
        Ok(())
    }
}

/// Command line of the desktop viewer.
#[derive(Parser, Debug)]
#[command(name = "hero-slider", version, about = "Hero image carousel over a directory of images")]
pub struct CliArgs {
    /// Directory holding the slide images
    pub image_directory: PathBuf,

    /// Milliseconds between automatic advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL.as_millis() as u64)]
    pub interval_ms: u64,

    /// Horizontal travel in pixels a swipe must exceed
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl CliArgs {
    pub fn slider_config(&self) -> SliderConfig {
        SliderConfig::default()
            .with_autoplay_interval(Duration::from_millis(self.interval_ms))
            .with_swipe_threshold(self.swipe_threshold)
    }
}
