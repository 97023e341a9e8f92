// Process-wide presentation state. Written by the controller, read by the
// animation guard and the render loop continuation check. Everything runs on
// the main thread, one callback at a time, so no synchronization is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PresentationState {
    pub active_scene: Option<usize>, // None until the first set_scene call
    pub hue_animation_running: bool,
}
