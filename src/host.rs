//! The element tree a slider renders onto.
//!
//! A host owns the slide track, the optional prev/next controls and the
//! optional indicator container. The controller never reads visual state
//! back from it; it only pushes mutations.

/// Structure the host exposes at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    pub track: bool,
    pub slides: usize,
    pub prev_control: bool,
    pub next_control: bool,
    pub indicator_host: bool,
}

pub trait SliderHost {
    fn markup(&self) -> Markup;

    /// Create the indicator for slide `index` inside the indicator host.
    fn append_indicator(&mut self, index: usize, label: &str);

    /// Translate the track horizontally, in percent of one slide width.
    fn set_track_offset(&mut self, percent: f32);

    /// Toggle the active class; an inactive slide is hidden from assistive tech.
    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_indicator_selected(&mut self, index: usize, selected: bool);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideNode {
    pub active: bool,
    pub aria_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorNode {
    pub label: String,
    pub selected: bool,
}

/// In-memory host, mirroring the attributes a DOM host would carry.
#[derive(Debug, Clone, Default)]
pub struct MarkupHost {
    track: bool,
    prev_control: bool,
    next_control: bool,
    pub slides: Vec<SlideNode>,
    pub indicators: Option<Vec<IndicatorNode>>,
    pub track_offset: f32,
}

impl MarkupHost {
    /// A complete widget: track with `slides` panels, both controls and a dot container.
    pub fn new(slides: usize) -> Self {
        Self {
            track: true,
            prev_control: true,
            next_control: true,
            slides: vec![SlideNode::default(); slides],
            indicators: Some(Vec::new()),
            track_offset: 0.0,
        }
    }

    /// Markup without a track wrapper.
    pub fn without_track() -> Self {
        Self {
            track: false,
            ..Self::default()
        }
    }

    pub fn without_indicators(mut self) -> Self {
        self.indicators = None;
        self
    }

    pub fn without_controls(mut self) -> Self {
        self.prev_control = false;
        self.next_control = false;
        self
    }

    /// Indices of slides currently carrying the active class.
    pub fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.active)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn selected_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, dot)| dot.selected)
            .map(|(i, _)| i)
            .collect()
    }
}

impl SliderHost for MarkupHost {
    fn markup(&self) -> Markup {
        Markup {
            track: self.track,
            slides: self.slides.len(),
            prev_control: self.prev_control,
            next_control: self.next_control,
            indicator_host: self.indicators.is_some(),
        }
    }

    fn append_indicator(&mut self, _index: usize, label: &str) {
        if let Some(indicators) = self.indicators.as_mut() {
            indicators.push(IndicatorNode {
                label: label.to_string(),
                selected: false,
            });
        }
    }

    fn set_track_offset(&mut self, percent: f32) {
        self.track_offset = percent;
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = active;
            slide.aria_hidden = !active;
        }
    }

    fn set_indicator_selected(&mut self, index: usize, selected: bool) {
        if let Some(dot) = self.indicators.as_mut().and_then(|dots| dots.get_mut(index)) {
            dot.selected = selected;
        }
    }
}
