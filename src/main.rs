use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

use hero_slider::config::CliArgs;
use hero_slider::constants::*;
use hero_slider::input::{FrameInput, InputMapper};
use hero_slider::logging::init_tracing;
use hero_slider::stage::RaylibStage;
use hero_slider::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use hero_slider::Slider;

// --- Load every readable slide; unreadable images only shrink the carousel ---
fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Vec<Texture2D>> {
    let paths = load_sorted_image_paths(dir)?;

    let mut textures = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!(error = %e, "skipping slide"),
        }
    }
    Ok(textures)
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_level)?;
    info!(directory = %args.image_directory.display(), "starting hero slider");

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // The window keeps running without the widget when mounting fails
    let mounted = load_slides(&mut rl, &thread, &args.image_directory).and_then(|textures| {
        Slider::mount(RaylibStage::new(textures), args.slider_config()).map_err(Into::into)
    });
    let mut slider = match mounted {
        Ok(slider) => Some(slider),
        Err(e) => {
            warn!(error = %e, "hero slider disabled");
            None
        }
    };

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("failed to create render texture: {}", e))?;
    let mut input = InputMapper::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let frame = FrameInput::capture(&rl);

        // Input first, then timers: a manual change always resets the schedule
        if let Some(slider) = slider.as_mut() {
            let layout = slider.host().layout();
            for event in input.map(&frame, &layout) {
                slider.handle(event);
            }
            slider.advance(Duration::from_secs_f32(dt));

            let focused = slider.is_focused();
            slider.host_mut().update(dt, focused);
        }

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);

            match slider.as_ref() {
                Some(slider) => slider.host().draw(&mut d),
                None => d.draw_text(
                    "No slides to show.",
                    (SLIDER_X + 24.0) as i32,
                    (SLIDER_Y + 24.0) as i32,
                    32,
                    Color::GRAY,
                ),
            }
        });

        // Scaled, flipped copy of the framebuffer to the window
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
