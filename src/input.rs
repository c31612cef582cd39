//! Translate raylib input into slider events.
//!
//! Raylib reports state per frame, the slider expects DOM-style
//! transitions. `InputMapper` remembers the previous frame and emits only
//! the changes.

use raylib::prelude::*;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::event::{Key, SliderEvent};
use crate::stage::{Hit, StageLayout};

/// Raw input for one frame, in render-texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub pointer: Option<Vector2>,
    pub clicked: bool,
    pub tab: bool,
    pub left: bool,
    pub right: bool,
    pub touch: Option<Vector2>,
}

impl FrameInput {
    pub fn capture(rl: &RaylibHandle) -> Self {
        let sx = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
        let sy = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;
        let to_render = |p: Vector2| Vector2::new(p.x * sx, p.y * sy);

        let pointer = if rl.is_cursor_on_screen() {
            Some(to_render(rl.get_mouse_position()))
        } else {
            None
        };
        let touch = if rl.get_touch_point_count() > 0 {
            Some(to_render(rl.get_touch_position(0)))
        } else {
            None
        };

        Self {
            pointer,
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            tab: rl.is_key_pressed(KeyboardKey::KEY_TAB),
            left: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            right: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
            touch,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputMapper {
    hovered: bool,
    focused: bool,
    touching: bool,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&mut self, input: &FrameInput, layout: &StageLayout) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        let inside = input.pointer.is_some_and(|p| layout.contains(p));
        if inside != self.hovered {
            self.hovered = inside;
            events.push(if inside { SliderEvent::PointerEnter } else { SliderEvent::PointerLeave });
        }

        if input.clicked {
            let hit = input.pointer.map_or(Hit::Outside, |p| layout.hit(p));
            if hit == Hit::Outside {
                self.blur(&mut events);
            } else {
                self.focus(&mut events);
                match hit {
                    Hit::PrevControl => events.push(SliderEvent::PrevControl),
                    Hit::NextControl => events.push(SliderEvent::NextControl),
                    Hit::Indicator(i) => events.push(SliderEvent::Indicator(i)),
                    Hit::Body | Hit::Outside => {}
                }
            }
        }

        if input.tab {
            if self.focused {
                self.blur(&mut events);
            } else {
                self.focus(&mut events);
            }
        }

        if input.left {
            events.push(SliderEvent::KeyDown(Key::ArrowLeft));
        }
        if input.right {
            events.push(SliderEvent::KeyDown(Key::ArrowRight));
        }

        match (self.touching, input.touch) {
            (false, Some(p)) if layout.contains(p) => {
                self.touching = true;
                events.push(SliderEvent::TouchStart { x: p.x });
            }
            (true, Some(p)) => events.push(SliderEvent::TouchMove { x: p.x }),
            (true, None) => {
                self.touching = false;
                events.push(SliderEvent::TouchEnd);
            }
            _ => {}
        }

        events
    }

    fn focus(&mut self, events: &mut Vec<SliderEvent>) {
        if !self.focused {
            self.focused = true;
            events.push(SliderEvent::FocusIn);
        }
    }

    fn blur(&mut self, events: &mut Vec<SliderEvent>) {
        if self.focused {
            self.focused = false;
            events.push(SliderEvent::FocusOut { within: false });
        }
    }
}
