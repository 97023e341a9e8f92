// Envelope for one hue-shift animation cycle. `variation` (in [0, 1])
// controls how much each cycle's randomized scaling may deviate from 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueAnimationSpec {
    pub initial_hue: f32,
    pub final_hue: f32,
    pub duration_ms: f32,
    pub variation: f32,
}

pub struct Scene {
    pub asset_ref: &'static str,
    pub base_hue: f32,
    pub hue: f32,
    pub is_magnifier: bool,
    pub animation: Option<HueAnimationSpec>,
}

// Ordered, fixed-length sequence of scenes. A scene's identity is its index:
// scene i occupies horizontal slot i of the presentation. Read-only after
// construction except for `hue`, which has a single writer (the controller,
// applying animator samples).
pub struct SceneCatalog {
    scenes: Vec<Scene>,
}

impl SceneCatalog {
    pub fn reference() -> Self {
        let scenes = vec![
            Scene {
                asset_ref: "scene-1.png",
                base_hue: 0.0,
                hue: 0.0,
                is_magnifier: false,
                animation: None,
            },
            Scene {
                asset_ref: "scene-2.png",
                base_hue: 0.1,
                hue: 0.1,
                is_magnifier: true,
                animation: Some(HueAnimationSpec {
                    initial_hue: 0.1,
                    final_hue: -0.7,
                    duration_ms: 2000.0,
                    variation: 0.4,
                }),
            },
            Scene {
                asset_ref: "scene-3.png",
                base_hue: 0.0,
                hue: 0.0,
                is_magnifier: false,
                animation: None,
            },
            Scene {
                asset_ref: "scene-4.png",
                base_hue: 0.0,
                hue: 0.0,
                is_magnifier: false,
                animation: None,
            },
        ];
        Self { scenes }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    // Out-of-range indices are a caller contract violation.
    pub fn scene(&self, index: usize) -> &Scene {
        &self.scenes[index]
    }

    pub fn set_hue(&mut self, index: usize, hue: f32) {
        self.scenes[index].hue = hue;
    }

    // Index of the designated magnifier scene, if the catalog has one.
    pub fn magnifier_index(&self) -> Option<usize> {
        self.scenes.iter().position(|scene| scene.is_magnifier)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.scenes.iter()
    }
}
