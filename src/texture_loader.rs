use std::path::Path;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;

use crate::scene::SceneCatalog;

// --- Load Scene Textures ---
// Loads every texture the catalog references, in slot order, before any
// geometry or materials are built. A missing or unreadable asset is fatal to
// startup and propagated to the caller.
pub fn load_scene_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
    catalog: &SceneCatalog,
) -> Result<Vec<Texture2D>> {
    let mut textures = Vec::with_capacity(catalog.len());
    for scene in catalog.iter() {
        let path = assets_dir.join(scene.asset_ref);
        let path_str = path
            .to_str()
            .with_context(|| format!("non UTF-8 texture path {:?}", path))?;
        let texture = rl
            .load_texture(thread, path_str)
            .map_err(|e| anyhow!("failed to load scene texture {:?}: {}", path, e))?;
        textures.push(texture);
    }
    Ok(textures)
}
