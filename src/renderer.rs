use std::path::Path;

use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::constants::*;
use crate::controller::PresentationController;
use crate::payload::OverlayPayload;

// Must match MAX_BUBBLES in the fragment shader.
const MAX_BUBBLES: usize = 4;

const CLEAR_COLOR: Color = Color {
    r: 0x5f,
    g: 0x45,
    b: 0x8c,
    a: 0xff,
};

// Thin raylib boundary: one shared overlay shader, one texture per scene
// slot. Registered once from the per-scene payloads; afterwards it only
// consumes the hue values the controller wrote this frame.
pub struct SceneRenderer {
    shader: Shader,
    textures: Vec<Texture2D>,
    hue_loc: i32,
    magnifier_loc: i32,
}

impl SceneRenderer {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        shader_path: &Path,
        textures: Vec<Texture2D>,
        payloads: &[OverlayPayload],
    ) -> Result<Self> {
        let shader_str = shader_path
            .to_str()
            .ok_or_else(|| anyhow!("non UTF-8 shader path {:?}", shader_path))?;
        let mut shader = rl
            .load_shader(thread, None, Some(shader_str))
            .map_err(|e| anyhow!("failed to load overlay shader {:?}: {}", shader_path, e))?;

        let hue_loc = shader.get_shader_location("hue");
        let magnifier_loc = shader.get_shader_location("isMagnifier");

        // The magnification block is static: upload it once, from whichever
        // payload carries one.
        if let Some(magnification) = payloads
            .iter()
            .find_map(|payload| payload.options.magnification.as_ref())
        {
            let bubbles = magnification.bubbles;
            assert!(
                bubbles.len() <= MAX_BUBBLES,
                "bubble set exceeds the shader's capacity of {}",
                MAX_BUBBLES
            );

            let centers: Vec<Vector2> = bubbles
                .iter()
                .map(|b| Vector2::new(b.position.0, b.position.1))
                .collect();
            let radii: Vec<f32> = bubbles.iter().map(|b| b.radius).collect();
            let glare_offsets: Vec<f32> = bubbles.iter().map(|b| b.glare_offset).collect();
            let glare_starts: Vec<f32> = bubbles.iter().map(|b| b.glare_angle_start).collect();
            let glare_ends: Vec<f32> = bubbles.iter().map(|b| b.glare_angle_end).collect();

            let count_loc = shader.get_shader_location("bubbleCount");
            shader.set_shader_value(count_loc, bubbles.len() as i32);
            let centers_loc = shader.get_shader_location("bubbleCenters");
            shader.set_shader_value_v(centers_loc, &centers);
            let radii_loc = shader.get_shader_location("bubbleRadii");
            shader.set_shader_value_v(radii_loc, &radii);
            let glare_offsets_loc = shader.get_shader_location("glareOffsets");
            shader.set_shader_value_v(glare_offsets_loc, &glare_offsets);
            let glare_starts_loc = shader.get_shader_location("glareAngleStarts");
            shader.set_shader_value_v(glare_starts_loc, &glare_starts);
            let glare_ends_loc = shader.get_shader_location("glareAngleEnds");
            shader.set_shader_value_v(glare_ends_loc, &glare_ends);
            let resolution_loc = shader.get_shader_location("resolution");
            shader.set_shader_value(
                resolution_loc,
                Vector2::new(magnification.resolution.0, magnification.resolution.1),
            );
        }

        Ok(Self {
            shader,
            textures,
            hue_loc,
            magnifier_loc,
        })
    }

    // Draws all scenes side by side under the panning camera, feeding each
    // scene's current hue to the shader on the way.
    pub fn draw(
        &mut self,
        d: &mut RaylibDrawHandle,
        controller: &PresentationController,
        screen_width: f32,
        screen_height: f32,
    ) {
        d.clear_background(CLEAR_COLOR);

        let camera = Camera2D {
            target: Vector2::new(controller.camera_x(), 0.0),
            offset: Vector2::new(screen_width / 2.0, screen_height / 2.0),
            rotation: 0.0,
            zoom: screen_width / TEXTURE_WIDTH as f32,
        };
        let mut d2 = d.begin_mode2D(camera);

        for (index, scene) in controller.catalog().iter().enumerate() {
            self.shader.set_shader_value(self.hue_loc, scene.hue);
            self.shader
                .set_shader_value(self.magnifier_loc, scene.is_magnifier as i32);

            let texture = &self.textures[index];
            let world_x = (TEXTURE_WIDTH * index as i32) as f32;

            let mut ds = d2.begin_shader_mode(&mut self.shader);
            ds.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(
                    world_x,
                    0.0,
                    TEXTURE_WIDTH as f32,
                    TEXTURE_HEIGHT as f32,
                ),
                Vector2::new(TEXTURE_WIDTH as f32 / 2.0, TEXTURE_HEIGHT as f32 / 2.0),
                0.0,
                Color::WHITE,
            );
        }
    }
}
