/// Keys the slider reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Input delivered by the host to a mounted slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    PointerEnter,
    PointerLeave,
    FocusIn,
    /// `within` is set when focus moved to another element inside the widget.
    FocusOut { within: bool },
    KeyDown(Key),
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    PrevControl,
    NextControl,
    Indicator(usize),
}

/// What the host should do with the event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Handled {
    pub default_prevented: bool,
}

impl Handled {
    pub const PASS: Handled = Handled { default_prevented: false };
    pub const PREVENTED: Handled = Handled { default_prevented: true };
}
