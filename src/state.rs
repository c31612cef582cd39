/// Snapshot of the controller's mutable state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SliderState {
    pub index: usize,          // Active slide, always in [0, total)
    pub autoplay_active: bool, // A live autoplay timer exists
}

/// Outcome of a finished touch gesture.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Swipe {
    Next,    // Leftward swipe past the threshold
    Prev,    // Rightward swipe past the threshold
    Settled, // Travel too short, no navigation
}
