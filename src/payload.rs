use crate::bubble::{Bubble, BubbleSet};
use crate::constants::TEXTURE_RATIO;
use crate::scene::SceneCatalog;

// Resolution-dependent magnifier geometry: the full bubble set plus the
// render-surface resolution the bubble radii are expressed against.
pub struct Magnification<'a> {
    pub bubbles: &'a [Bubble],
    pub resolution: (f32, f32),
}

pub struct OverlayOptions<'a> {
    pub hue: f32,
    pub is_magnifier: bool,
    pub magnification: Option<Magnification<'a>>,
}

// Shader-input payload for one scene. Ephemeral: derived on demand from the
// catalog, the bubble set, and the current surface size, never cached.
pub struct OverlayPayload<'a> {
    pub texture_ref: &'a str,
    pub options: OverlayOptions<'a>,
}

// Packages a scene's overlay parameters for the rendering engine. Pure
// function of its inputs plus the scene's hue read at call time. Scaling the
// resolution by the surface width keeps bubble radii at a consistent
// on-screen size regardless of viewport.
pub fn build_overlay_payload<'a>(
    catalog: &'a SceneCatalog,
    bubbles: &'a BubbleSet,
    scene_index: usize,
    render_surface_width: f32,
    pixel_density: f32,
) -> OverlayPayload<'a> {
    let scene = catalog.scene(scene_index);

    let magnification = scene.is_magnifier.then(|| Magnification {
        bubbles: bubbles.as_slice(),
        resolution: (
            render_surface_width * pixel_density,
            render_surface_width / TEXTURE_RATIO * pixel_density,
        ),
    });

    OverlayPayload {
        texture_ref: scene.asset_ref,
        options: OverlayOptions {
            hue: scene.hue,
            is_magnifier: scene.is_magnifier,
            magnification,
        },
    }
}
