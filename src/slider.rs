//! Hero slider controller.
//!
//! Owns the active index, the autoplay timer and the swipe tracker, and
//! pushes the resulting track offset and ARIA state onto its host.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::event::{Handled, Key, SliderEvent};
use crate::gesture::SwipeTracker;
use crate::host::{Markup, SliderHost};
use crate::state::{SliderState, Swipe};
use crate::timer::{IntervalClock, TimerHandle};

/// Navigation surface shared by every input adapter.
pub trait Carousel {
    fn go_to(&mut self, target: i64);
    fn next(&mut self);
    fn prev(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Wrap `target` into `[0, total)` in both directions. `total` must be non-zero.
pub fn normalize(target: i64, total: usize) -> usize {
    target.rem_euclid(total as i64) as usize
}

pub struct Slider<H: SliderHost> {
    host: H,
    markup: Markup,
    config: SliderConfig,
    index: usize,
    clock: IntervalClock,
    autoplay: Option<TimerHandle>,
    swipe: SwipeTracker,
    focused: bool,
}

impl<H: SliderHost> Slider<H> {
    /// Build indicators, render slide 0 and start autoplay.
    ///
    /// Fails without touching the host when the configuration is invalid,
    /// the track is missing or it holds no slides.
    pub fn mount(mut host: H, config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;

        let markup = host.markup();
        if !markup.track {
            return Err(SliderError::MissingTrack);
        }
        if markup.slides == 0 {
            return Err(SliderError::NoSlides);
        }

        if markup.indicator_host {
            for i in 0..markup.slides {
                host.append_indicator(i, &format!("Slide {}", i + 1));
            }
        }

        let mut slider = Self {
            host,
            markup,
            config,
            index: 0,
            clock: IntervalClock::new(),
            autoplay: None,
            swipe: SwipeTracker::new(),
            focused: false,
        };
        slider.render();
        slider.start_autoplay();

        info!(
            slides = markup.slides,
            indicators = markup.indicator_host,
            interval_ms = slider.config.autoplay_interval.as_millis() as u64,
            "hero slider mounted"
        );
        Ok(slider)
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            index: self.index,
            autoplay_active: self.autoplay.is_some(),
        }
    }

    pub fn total(&self) -> usize {
        self.markup.slides
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_swiping(&self) -> bool {
        self.swipe.is_active()
    }

    /// Timers currently scheduled on this slider's clock.
    pub fn live_timers(&self) -> usize {
        self.clock.live_count()
    }

    /// Advance the autoplay clock by `dt`.
    ///
    /// At most one autoplay advance lands per call: the fresh schedule it
    /// starts counts from the end of `dt`, however long the stall was.
    pub fn advance(&mut self, dt: Duration) {
        let deadline = self.clock.now().saturating_add(dt);
        while let Some(handle) = self.clock.poll(deadline) {
            if self.autoplay == Some(handle) {
                trace!(?handle, "autoplay tick");
                self.clock.settle(deadline);
                self.next();
            } else {
                self.clock.clear_interval(handle);
            }
        }
        self.clock.settle(deadline);
    }

    /// Translate one host event into carousel operations.
    pub fn handle(&mut self, event: SliderEvent) -> Handled {
        match event {
            SliderEvent::PointerEnter => self.pause(),
            SliderEvent::PointerLeave => self.resume(),
            SliderEvent::FocusIn => {
                self.focused = true;
                self.pause();
            }
            SliderEvent::FocusOut { within } => {
                if !within {
                    self.focused = false;
                    self.resume();
                }
            }
            SliderEvent::KeyDown(key) => {
                if !self.focused {
                    return Handled::PASS;
                }
                match key {
                    Key::ArrowRight => self.next(),
                    Key::ArrowLeft => self.prev(),
                    Key::Other => return Handled::PASS,
                }
                return Handled::PREVENTED;
            }
            SliderEvent::TouchStart { x } => {
                self.swipe.begin(x);
                self.pause();
            }
            SliderEvent::TouchMove { x } => self.swipe.track(x),
            SliderEvent::TouchEnd => match self.swipe.finish(self.config.swipe_threshold) {
                Some(Swipe::Next) => self.next(),
                Some(Swipe::Prev) => self.prev(),
                Some(Swipe::Settled) => self.resume(),
                None => {}
            },
            SliderEvent::PrevControl => {
                if self.markup.prev_control {
                    self.prev();
                }
            }
            SliderEvent::NextControl => {
                if self.markup.next_control {
                    self.next();
                }
            }
            SliderEvent::Indicator(i) => {
                if self.markup.indicator_host && i < self.total() {
                    self.go_to(i as i64);
                }
            }
        }
        Handled::PASS
    }

    fn render(&mut self) {
        let index = self.index;
        self.host.set_track_offset(-(index as f32) * 100.0);
        for i in 0..self.markup.slides {
            self.host.set_slide_active(i, i == index);
        }
        if self.markup.indicator_host {
            for i in 0..self.markup.slides {
                self.host.set_indicator_selected(i, i == index);
            }
        }
    }

    fn start_autoplay(&mut self) {
        if self.autoplay.is_some() || self.markup.slides <= 1 {
            return;
        }
        self.autoplay = Some(self.clock.set_interval(self.config.autoplay_interval));
    }

    fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.clock.clear_interval(handle);
        }
    }
}

impl<H: SliderHost> Carousel for Slider<H> {
    fn go_to(&mut self, target: i64) {
        self.index = normalize(target, self.markup.slides);
        debug!(target, index = self.index, "slide change");
        self.render();
        // a manual change always starts a fresh schedule
        self.stop_autoplay();
        self.start_autoplay();
    }

    fn next(&mut self) {
        self.go_to(self.index as i64 + 1);
    }

    fn prev(&mut self) {
        self.go_to(self.index as i64 - 1);
    }

    fn pause(&mut self) {
        self.stop_autoplay();
    }

    fn resume(&mut self) {
        self.start_autoplay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MarkupHost;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn mounted(slides: usize) -> Slider<MarkupHost> {
        match Slider::mount(MarkupHost::new(slides), SliderConfig::default()) {
            Ok(slider) => slider,
            Err(e) => panic!("mount failed: {e}"),
        }
    }

    #[test]
    fn mount_renders_first_slide_and_starts_autoplay() {
        let slider = mounted(3);
        let host = slider.host();

        assert_eq!(slider.state(), SliderState { index: 0, autoplay_active: true });
        assert_eq!(host.active_slides(), vec![0]);
        assert_eq!(host.selected_indicators(), vec![0]);
        assert_eq!(host.track_offset, 0.0);
        assert!(host.slides[1].aria_hidden && host.slides[2].aria_hidden);

        let labels: Vec<_> = host.indicators.iter().flatten().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Slide 1", "Slide 2", "Slide 3"]);
    }

    #[test]
    fn mount_aborts_on_missing_elements() {
        assert!(matches!(
            Slider::mount(MarkupHost::without_track(), SliderConfig::default()),
            Err(SliderError::MissingTrack)
        ));
        assert!(matches!(
            Slider::mount(MarkupHost::new(0), SliderConfig::default()),
            Err(SliderError::NoSlides)
        ));
        let config = SliderConfig::default().with_autoplay_interval(Duration::ZERO);
        assert!(matches!(
            Slider::mount(MarkupHost::new(2), config),
            Err(SliderError::Config(_))
        ));
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut slider = mounted(3);
        slider.prev();
        assert_eq!(slider.state().index, 2);
        slider.prev();
        assert_eq!(slider.state().index, 1);
        slider.next();
        assert_eq!(slider.state().index, 2);
        slider.go_to(10);
        assert_eq!(slider.state().index, 1);
        assert_eq!(slider.host().track_offset, -100.0);
    }

    #[test]
    fn single_slide_is_inert() {
        let mut slider = mounted(1);
        assert!(!slider.state().autoplay_active);

        for _ in 0..3 {
            slider.next();
            slider.prev();
            slider.go_to(-7);
            slider.resume();
        }
        slider.advance(INTERVAL * 4);

        assert_eq!(slider.state(), SliderState { index: 0, autoplay_active: false });
        assert_eq!(slider.live_timers(), 0);
        assert_eq!(slider.host().active_slides(), vec![0]);
    }

    #[test]
    fn autoplay_advances_once_per_interval() {
        let mut slider = mounted(4);
        slider.advance(INTERVAL - Duration::from_millis(1));
        assert_eq!(slider.state().index, 0);
        slider.advance(Duration::from_millis(1));
        assert_eq!(slider.state().index, 1);
        slider.advance(INTERVAL);
        slider.advance(INTERVAL);
        assert_eq!(slider.state().index, 3);
        assert_eq!(slider.live_timers(), 1);
    }

    #[test]
    fn long_stall_advances_a_single_slide() {
        let mut slider = mounted(5);
        slider.advance(Duration::from_secs(12));
        assert_eq!(slider.state().index, 1);

        // the fresh schedule counts from the end of the stall
        slider.advance(INTERVAL - Duration::from_millis(1));
        assert_eq!(slider.state().index, 1);
        slider.advance(Duration::from_millis(1));
        assert_eq!(slider.state().index, 2);
    }

    #[test]
    fn advancing_to_the_end_of_time_does_not_panic() {
        let mut slider = mounted(3);
        slider.advance(Duration::from_secs(1));
        slider.advance(Duration::MAX);
        assert_eq!(slider.state(), SliderState { index: 1, autoplay_active: true });

        slider.advance(INTERVAL);
        slider.advance(Duration::MAX);
        assert_eq!(slider.state().index, 1);
        slider.next();
        assert_eq!(slider.state().index, 2);
    }

    #[test]
    fn resume_twice_keeps_one_timer() {
        let mut slider = mounted(3);
        slider.resume();
        slider.resume();
        assert_eq!(slider.live_timers(), 1);
        slider.pause();
        slider.pause();
        assert_eq!(slider.live_timers(), 0);
        assert!(!slider.state().autoplay_active);
    }

    #[test]
    fn manual_change_resets_schedule() {
        let mut slider = mounted(5);
        slider.advance(Duration::from_millis(4900));
        slider.next();
        assert_eq!(slider.state().index, 1);

        // the old schedule would have fired 100ms later
        slider.advance(Duration::from_millis(200));
        assert_eq!(slider.state().index, 1);
        slider.advance(Duration::from_millis(4800));
        assert_eq!(slider.state().index, 2);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut slider = mounted(3);
        slider.handle(SliderEvent::PointerEnter);
        slider.advance(INTERVAL * 3);
        assert_eq!(slider.state(), SliderState { index: 0, autoplay_active: false });

        slider.handle(SliderEvent::PointerLeave);
        slider.advance(INTERVAL);
        assert_eq!(slider.state().index, 1);
    }

    #[test]
    fn keyboard_requires_focus() {
        let mut slider = mounted(3);
        assert_eq!(slider.handle(SliderEvent::KeyDown(Key::ArrowRight)), Handled::PASS);
        assert_eq!(slider.state().index, 0);

        slider.handle(SliderEvent::FocusIn);
        assert!(slider.is_focused());
        assert_eq!(slider.handle(SliderEvent::KeyDown(Key::ArrowRight)), Handled::PREVENTED);
        assert_eq!(slider.handle(SliderEvent::KeyDown(Key::ArrowLeft)), Handled::PREVENTED);
        assert_eq!(slider.handle(SliderEvent::KeyDown(Key::ArrowLeft)), Handled::PREVENTED);
        assert_eq!(slider.handle(SliderEvent::KeyDown(Key::Other)), Handled::PASS);
        assert_eq!(slider.state().index, 2);
    }

    #[test]
    fn focus_moving_inside_keeps_autoplay_paused() {
        let mut slider = mounted(3);
        slider.handle(SliderEvent::FocusIn);
        slider.handle(SliderEvent::FocusOut { within: true });
        slider.handle(SliderEvent::FocusIn);
        assert!(slider.is_focused());
        assert!(!slider.state().autoplay_active);

        slider.handle(SliderEvent::FocusOut { within: false });
        assert!(!slider.is_focused());
        assert!(slider.state().autoplay_active);
    }

    #[test]
    fn controls_and_indicators_navigate() {
        let mut slider = mounted(4);
        slider.handle(SliderEvent::NextControl);
        slider.handle(SliderEvent::NextControl);
        slider.handle(SliderEvent::PrevControl);
        assert_eq!(slider.state().index, 1);

        slider.handle(SliderEvent::Indicator(3));
        assert_eq!(slider.state().index, 3);
        assert_eq!(slider.host().selected_indicators(), vec![3]);

        slider.handle(SliderEvent::Indicator(9));
        assert_eq!(slider.state().index, 3);
    }

    #[test]
    fn absent_controls_ignore_clicks() {
        let host = MarkupHost::new(3).without_controls().without_indicators();
        let mut slider = match Slider::mount(host, SliderConfig::default()) {
            Ok(slider) => slider,
            Err(e) => panic!("mount failed: {e}"),
        };
        slider.handle(SliderEvent::NextControl);
        slider.handle(SliderEvent::PrevControl);
        slider.handle(SliderEvent::Indicator(2));
        assert_eq!(slider.state().index, 0);
        assert!(slider.host().indicators.is_none());
    }

    #[test]
    fn swipe_past_threshold_navigates_once() {
        let mut slider = mounted(3);
        slider.handle(SliderEvent::TouchStart { x: 100.0 });
        assert!(slider.is_swiping());
        assert!(!slider.state().autoplay_active);
        slider.handle(SliderEvent::TouchMove { x: 40.0 });
        slider.handle(SliderEvent::TouchEnd);

        assert!(!slider.is_swiping());
        assert_eq!(slider.state(), SliderState { index: 1, autoplay_active: true });

        // a stray end after the gesture does nothing
        slider.handle(SliderEvent::TouchEnd);
        assert_eq!(slider.state().index, 1);
    }

    #[test]
    fn short_swipe_resumes_autoplay() {
        let mut slider = mounted(3);
        slider.handle(SliderEvent::TouchStart { x: 100.0 });
        slider.handle(SliderEvent::TouchMove { x: 70.0 });
        slider.handle(SliderEvent::TouchEnd);
        assert_eq!(slider.state(), SliderState { index: 0, autoplay_active: true });
    }

    #[test]
    fn rightward_swipe_goes_back() {
        let mut slider = mounted(3);
        slider.handle(SliderEvent::TouchStart { x: 0.0 });
        slider.handle(SliderEvent::TouchMove { x: 80.0 });
        slider.handle(SliderEvent::TouchEnd);
        assert_eq!(slider.state().index, 2);
    }

    #[test]
    fn normalize_matches_double_modulo() {
        assert_eq!(normalize(-1, 3), 2);
        assert_eq!(normalize(-4, 3), 2);
        assert_eq!(normalize(3, 3), 0);
        assert_eq!(normalize(i64::MIN, 7), ((i64::MIN % 7 + 7) % 7) as usize);
    }
}
