use crate::state::Swipe;

/// Horizontal touch tracking for one gesture at a time.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    active: bool,
    start_x: f32,
    delta_x: f32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, x: f32) {
        self.active = true;
        self.start_x = x;
        self.delta_x = 0.0;
    }

    pub fn track(&mut self, x: f32) {
        if !self.active {
            return;
        }
        self.delta_x = x - self.start_x;
    }

    /// End the gesture. `None` when no gesture was in progress.
    pub fn finish(&mut self, threshold: f32) -> Option<Swipe> {
        if !self.active {
            return None;
        }
        self.active = false;

        // strict: travel equal to the threshold does not navigate
        let swipe = if self.delta_x.abs() > threshold {
            if self.delta_x < 0.0 { Swipe::Next } else { Swipe::Prev }
        } else {
            Swipe::Settled
        };
        Some(swipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture(start: f32, end: f32) -> Option<Swipe> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(start);
        tracker.track(end);
        tracker.finish(50.0)
    }

    #[test]
    fn leftward_swipe_goes_next() {
        assert_eq!(gesture(100.0, 40.0), Some(Swipe::Next));
    }

    #[test]
    fn rightward_swipe_goes_prev() {
        assert_eq!(gesture(100.0, 151.0), Some(Swipe::Prev));
    }

    #[test]
    fn short_travel_settles() {
        assert_eq!(gesture(100.0, 70.0), Some(Swipe::Settled));
        assert_eq!(gesture(100.0, 50.0), Some(Swipe::Settled));
        assert_eq!(gesture(100.0, 150.0), Some(Swipe::Settled));
    }

    #[test]
    fn begin_resets_previous_delta() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(0.0);
        tracker.begin(10.0);
        assert_eq!(tracker.delta_x, 0.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.finish(50.0), Some(Swipe::Settled));
        assert!(!tracker.is_active());
    }

    #[test]
    fn moves_and_ends_without_a_gesture_are_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.track(500.0);
        assert_eq!(tracker.delta_x, 0.0);
        assert_eq!(tracker.finish(50.0), None);
    }
}
