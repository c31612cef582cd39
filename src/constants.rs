use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Horizontal travel (px) a swipe must exceed

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TRACK_TRANSITION: f32 = 0.6;        // Duration of the track slide animation (seconds)

// Slider rectangle inside the render texture
pub const SLIDER_X: f32 = 160.0;
pub const SLIDER_Y: f32 = 90.0;
pub const SLIDER_WIDTH: f32 = 1600.0;
pub const SLIDER_HEIGHT: f32 = 900.0;

pub const CONTROL_SIZE: f32 = 72.0;           // Prev/next button square
pub const DOT_RADIUS: f32 = 9.0;
pub const DOT_SPACING: f32 = 32.0;
pub const DOT_BOTTOM_MARGIN: f32 = 40.0;
