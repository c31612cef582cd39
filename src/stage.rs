//! Raylib rendition of the hero slider markup.
//!
//! The stage plays the role of the page: it holds one texture per slide,
//! receives the controller's mutations and draws the track, the prev/next
//! controls and the indicator dots into the render texture.

use raylib::prelude::*;

use crate::constants::*;
use crate::host::{Markup, SliderHost};

/// What lies under a point of the render texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PrevControl,
    NextControl,
    Indicator(usize),
    Body,
    Outside,
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Geometry of the widget for a given slide count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageLayout {
    pub slides: usize,
}

impl StageLayout {
    pub fn new(slides: usize) -> Self {
        Self { slides }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(SLIDER_X, SLIDER_Y, SLIDER_WIDTH, SLIDER_HEIGHT)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(&self.bounds(), point)
    }

    pub fn prev_control(&self) -> Rectangle {
        Rectangle::new(
            SLIDER_X + 24.0,
            SLIDER_Y + (SLIDER_HEIGHT - CONTROL_SIZE) * 0.5,
            CONTROL_SIZE,
            CONTROL_SIZE,
        )
    }

    pub fn next_control(&self) -> Rectangle {
        Rectangle::new(
            SLIDER_X + SLIDER_WIDTH - 24.0 - CONTROL_SIZE,
            SLIDER_Y + (SLIDER_HEIGHT - CONTROL_SIZE) * 0.5,
            CONTROL_SIZE,
            CONTROL_SIZE,
        )
    }

    /// Centre of the dot for slide `index`; the row is centred under the track.
    pub fn dot_center(&self, index: usize) -> Vector2 {
        let row_width = self.slides.saturating_sub(1) as f32 * DOT_SPACING;
        Vector2::new(
            SLIDER_X + (SLIDER_WIDTH - row_width) * 0.5 + index as f32 * DOT_SPACING,
            SLIDER_Y + SLIDER_HEIGHT - DOT_BOTTOM_MARGIN,
        )
    }

    pub fn hit(&self, point: Vector2) -> Hit {
        if !self.contains(point) {
            return Hit::Outside;
        }
        if contains(&self.prev_control(), point) {
            return Hit::PrevControl;
        }
        if contains(&self.next_control(), point) {
            return Hit::NextControl;
        }
        // generous hit radius, dots are small
        let reach = DOT_RADIUS * 1.6;
        for i in 0..self.slides {
            let center = self.dot_center(i);
            let (dx, dy) = (point.x - center.x, point.y - center.y);
            if dx * dx + dy * dy <= reach * reach {
                return Hit::Indicator(i);
            }
        }
        Hit::Body
    }

    /// Horizontal span of slide `index` visible through the widget at `offset`
    /// percent, as fractions of the slide width. `None` when off-screen.
    pub fn visible_span(&self, index: usize, offset: f32) -> Option<(f32, f32)> {
        let start = (index as f32 * 100.0 + offset) / 100.0;
        let from = (-start).max(0.0);
        let to = (1.0 - start).min(1.0);
        if to - from <= f32::EPSILON {
            None
        } else {
            Some((from, to))
        }
    }
}

/// Source rectangle centre-cropping a `width` x `height` texture to the widget aspect.
fn cover_source(width: f32, height: f32) -> Rectangle {
    let aspect = SLIDER_WIDTH / SLIDER_HEIGHT;
    if width / height > aspect {
        let w = height * aspect;
        Rectangle::new((width - w) * 0.5, 0.0, w, height)
    } else {
        let h = width / aspect;
        Rectangle::new(0.0, (height - h) * 0.5, width, h)
    }
}

pub struct HeroSlide {
    texture: Texture2D,
    pub active: bool, // Outgoing slides are dimmed while the track moves
}

pub struct Dot {
    pub label: String,
    pub selected: bool,
}

pub struct RaylibStage {
    layout: StageLayout,
    slides: Vec<HeroSlide>,
    dots: Vec<Dot>,

    offset: f32,       // Drawn track offset (percent)
    target_offset: f32,
    tween: Option<ease::Tween>,
    tween_timer: f32,

    focused: bool,
}

impl RaylibStage {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        let slides: Vec<HeroSlide> = textures
            .into_iter()
            .map(|texture| HeroSlide { texture, active: false })
            .collect();

        Self {
            layout: StageLayout::new(slides.len()),
            slides,
            dots: Vec::new(),
            offset: 0.0,
            target_offset: 0.0,
            tween: None,
            tween_timer: 0.0,
            focused: false,
        }
    }

    pub fn layout(&self) -> StageLayout {
        self.layout
    }

    /// Step the track animation and mirror the controller's focus state.
    pub fn update(&mut self, dt: f32, focused: bool) {
        self.focused = focused;

        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.offset = tween.apply(dt);
        self.tween_timer += dt;
        if self.tween_timer >= TRACK_TRANSITION {
            self.offset = self.target_offset;
            self.tween = None;
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D) {
        let bounds = self.layout.bounds();
        d.draw_rectangle_rec(bounds, Color::new(16, 16, 20, 255));

        for (i, slide) in self.slides.iter().enumerate() {
            let Some((from, to)) = self.layout.visible_span(i, self.offset) else {
                continue;
            };
            let tex_width = slide.texture.width() as f32;
            let tex_height = slide.texture.height() as f32;
            let crop = cover_source(tex_width, tex_height);

            let source = Rectangle::new(
                crop.x + crop.width * from,
                crop.y,
                crop.width * (to - from),
                crop.height,
            );
            let left = bounds.x + (i as f32 * 100.0 + self.offset) / 100.0 * bounds.width;
            let dest = Rectangle::new(
                left + bounds.width * from,
                bounds.y,
                bounds.width * (to - from),
                bounds.height,
            );
            let tint = if slide.active { Color::WHITE } else { Color::LIGHTGRAY };
            d.draw_texture_pro(&slide.texture, source, dest, Vector2::zero(), 0.0, tint);
        }

        for (rect, glyph) in [(self.layout.prev_control(), "<"), (self.layout.next_control(), ">")] {
            d.draw_rectangle_rec(rect, Color::new(0, 0, 0, 140));
            d.draw_text(
                glyph,
                (rect.x + rect.width * 0.5 - 12.0) as i32,
                (rect.y + rect.height * 0.5 - 24.0) as i32,
                48,
                Color::WHITE,
            );
        }

        for (i, dot) in self.dots.iter().enumerate() {
            let color = if dot.selected { Color::WHITE } else { Color::new(255, 255, 255, 110) };
            d.draw_circle_v(self.layout.dot_center(i), DOT_RADIUS, color);
        }

        if let Some(dot) = self.dots.iter().find(|dot| dot.selected) {
            let caption = format!("{} / {}", dot.label, self.slides.len());
            d.draw_text(&caption, (bounds.x + 24.0) as i32, (bounds.y + 24.0) as i32, 28, Color::WHITE);
        }

        if self.focused {
            d.draw_rectangle_lines_ex(bounds, 4.0, Color::SKYBLUE);
        }
    }
}

impl SliderHost for RaylibStage {
    fn markup(&self) -> Markup {
        Markup {
            track: true,
            slides: self.slides.len(),
            prev_control: true,
            next_control: true,
            indicator_host: true,
        }
    }

    fn append_indicator(&mut self, _index: usize, label: &str) {
        self.dots.push(Dot {
            label: label.to_string(),
            selected: false,
        });
    }

    fn set_track_offset(&mut self, percent: f32) {
        if percent == self.target_offset {
            return;
        }
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.offset, percent, TRACK_TRANSITION));
        self.tween_timer = 0.0;
        self.target_offset = percent;
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = active;
        }
    }

    fn set_indicator_selected(&mut self, index: usize, selected: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            dot.selected = selected;
        }
    }
}
