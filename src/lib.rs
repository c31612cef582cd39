//! Hero image carousel: controller, host seam and a raylib stage.

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod gesture;
pub mod host;
pub mod input;
pub mod logging;
pub mod slider;
pub mod stage;
pub mod state;
pub mod texture_loader;
pub mod timer;

pub use config::SliderConfig;
pub use error::{ConfigError, SliderError};
pub use event::{Handled, Key, SliderEvent};
pub use host::{Markup, MarkupHost, SliderHost};
pub use slider::{Carousel, Slider, normalize};
pub use state::{SliderState, Swipe};
