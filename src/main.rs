use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;

mod bubble;
mod constants;
mod controller;
mod hue_shift;
mod payload;
mod renderer;
mod scene;
mod state;
mod texture_loader;

use crate::bubble::BubbleSet;
use crate::constants::*;
use crate::controller::PresentationController;
use crate::hue_shift::HueShiftAnimator;
use crate::payload::build_overlay_payload;
use crate::renderer::SceneRenderer;
use crate::scene::SceneCatalog;
use crate::texture_loader::load_scene_textures;

#[derive(Parser)]
#[command(name = "storyshow", about = "Multi-scene story presentation")]
struct Args {
    /// Directory containing the scene textures and the shaders/ subdirectory
    assets_dir: PathBuf,

    /// Scene to open on (0-based)
    #[arg(long, default_value_t = 0)]
    scene: usize,

    /// Seed for the hue-shift variation draw (reproducible animation)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Story Scenes")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // ESC tears the presentation down instead of closing the window outright.
    rl.set_exit_key(None);

    let catalog = SceneCatalog::reference();
    let bubbles = BubbleSet::reference(rl.get_screen_width() as f32 / 2.0);

    if args.scene >= catalog.len() {
        bail!(
            "start scene {} out of range ({} scenes)",
            args.scene,
            catalog.len()
        );
    }

    // All scene textures load before any surface is registered.
    let textures = load_scene_textures(&mut rl, &thread, &args.assets_dir, &catalog)?;

    let animator = match args.seed {
        Some(seed) => HueShiftAnimator::with_seed(seed),
        None => HueShiftAnimator::new(),
    };
    let mut controller = PresentationController::new(catalog, bubbles, animator);

    let mut renderer = {
        let render_width = rl.get_screen_width() as f32;
        let pixel_density = rl.get_window_scale_dpi().x;
        let payloads: Vec<_> = (0..controller.scene_count())
            .map(|index| {
                build_overlay_payload(
                    controller.catalog(),
                    controller.bubbles(),
                    index,
                    render_width,
                    pixel_density,
                )
            })
            .collect();
        SceneRenderer::new(
            &mut rl,
            &thread,
            &args.assets_dir.join("shaders/scenes.fs"),
            textures,
            &payloads,
        )?
    };

    controller.set_scene(args.scene);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt_ms = rl.get_frame_time() * 1000.0;

        // Scene switching: arrows step, number keys jump, ESC leaves.
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            let current = controller.active_scene().unwrap_or(0);
            if current + 1 < controller.scene_count() {
                controller.set_scene(current + 1);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            let current = controller.active_scene().unwrap_or(0);
            if current > 0 {
                controller.set_scene(current - 1);
            }
        }
        for (key, index) in [
            (KeyboardKey::KEY_ONE, 0),
            (KeyboardKey::KEY_TWO, 1),
            (KeyboardKey::KEY_THREE, 2),
            (KeyboardKey::KEY_FOUR, 3),
        ] {
            if rl.is_key_pressed(key) && index < controller.scene_count() {
                controller.set_scene(index);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            controller.leave();
        }

        controller.update(dt_ms);

        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let mut d = rl.begin_drawing(&thread);
        renderer.draw(&mut d, &controller, screen_width, screen_height);
        drop(d);

        // Continuation is checked after the frame is drawn, so leaving the
        // presentation still renders one final frame.
        if !controller.is_presenting() {
            break;
        }
    }

    Ok(())
}
