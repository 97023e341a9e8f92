use crate::bubble::BubbleSet;
use crate::constants::TEXTURE_WIDTH;
use crate::hue_shift::HueShiftAnimator;
use crate::scene::SceneCatalog;
use crate::state::PresentationState;

// Owns the active-scene selector and keeps the hue-shift chain and the
// render loop in lockstep with it. The camera offset is a plain world-space
// x so scene switching stays testable without a window.
pub struct PresentationController {
    catalog: SceneCatalog,
    bubbles: BubbleSet,
    state: PresentationState,
    animator: HueShiftAnimator,
    camera_x: f32,
}

impl PresentationController {
    pub fn new(catalog: SceneCatalog, bubbles: BubbleSet, animator: HueShiftAnimator) -> Self {
        Self {
            catalog,
            bubbles,
            state: PresentationState::default(),
            animator,
            camera_x: 0.0,
        }
    }

    // Pans the camera to slot `index` and makes it the active scene.
    // Entering the magnifier scene ensures exactly one animation chain is
    // running; entering any other scene lets the chain wind down at its next
    // cycle boundary. Out-of-range indices are a caller error.
    pub fn set_scene(&mut self, index: usize) {
        assert!(
            index < self.catalog.len(),
            "scene index {} out of range ({} scenes)",
            index,
            self.catalog.len()
        );

        self.camera_x = (TEXTURE_WIDTH * index as i32) as f32;
        self.state.active_scene = Some(index);

        if Some(index) == self.catalog.magnifier_index() {
            if !self.state.hue_animation_running {
                self.state.hue_animation_running = true;
                let scene = self.catalog.scene(index);
                let spec = scene
                    .animation
                    .expect("magnifier scene requires an animation spec");
                let base_hue = scene.base_hue;
                self.catalog.set_hue(index, base_hue);
                // No-op if the previous chain is still finishing its cycle.
                self.animator.start(spec);
            }
        } else {
            self.state.hue_animation_running = false;
        }
    }

    // Tears the presentation down: the animation chain halts at its next
    // boundary and the render loop stops rescheduling after one more frame.
    pub fn leave(&mut self) {
        self.state.active_scene = None;
        self.state.hue_animation_running = false;
        self.animator.stop();
    }

    // Per-frame drive. Applies animator samples to the magnifier scene's
    // hue; the guard re-checks the active scene at each cycle boundary.
    pub fn update(&mut self, dt_ms: f32) {
        let Some(magnifier) = self.catalog.magnifier_index() else {
            return;
        };
        let active = self.state.active_scene;
        if let Some(hue) = self.animator.advance(dt_ms, || active == Some(magnifier)) {
            self.catalog.set_hue(magnifier, hue);
        }
    }

    // The render loop keeps rescheduling while this holds.
    pub fn is_presenting(&self) -> bool {
        self.state.active_scene.is_some()
    }

    pub fn active_scene(&self) -> Option<usize> {
        self.state.active_scene
    }

    pub fn scene_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn bubbles(&self) -> &BubbleSet {
        &self.bubbles
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAGNIFIER: usize = 1;

    fn controller() -> PresentationController {
        PresentationController::new(
            SceneCatalog::reference(),
            BubbleSet::reference(512.0),
            HueShiftAnimator::with_seed(42),
        )
    }

    // Cycle lengths vary with the drawn offset; this comfortably outlasts
    // the longest possible cycle (duration_ms * 1.4).
    const PAST_ANY_CYCLE_MS: f32 = 4000.0;

    #[test]
    fn set_scene_pans_the_camera_to_the_slot() {
        let mut controller = controller();
        controller.set_scene(2);
        assert_eq!(controller.camera_x(), 4096.0);
        assert_eq!(controller.active_scene(), Some(2));
        controller.set_scene(0);
        assert_eq!(controller.camera_x(), 0.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_scene_rejects_an_out_of_range_index() {
        controller().set_scene(99);
    }

    #[test]
    fn presentation_starts_inactive_and_follows_scene_changes() {
        let mut controller = controller();
        assert!(!controller.is_presenting());
        assert_eq!(controller.active_scene(), None);
        controller.set_scene(0);
        assert!(controller.is_presenting());
        controller.leave();
        assert!(!controller.is_presenting());
    }

    #[test]
    fn entering_the_magnifier_scene_starts_the_animation() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        assert!(controller.state().hue_animation_running);
        assert!(controller.animator.is_running());

        controller.update(200.0);
        let hue = controller.catalog().scene(MAGNIFIER).hue;
        assert_ne!(hue, controller.catalog().scene(MAGNIFIER).base_hue);
    }

    #[test]
    fn entering_other_scenes_never_starts_the_animation() {
        let mut controller = controller();
        controller.set_scene(0);
        controller.set_scene(3);
        assert!(!controller.state().hue_animation_running);
        assert!(!controller.animator.is_running());
    }

    #[test]
    fn reentering_the_magnifier_scene_keeps_a_single_chain() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        controller.update(300.0);
        let hue_before = controller.catalog().scene(MAGNIFIER).hue;

        // A second set_scene must not reset the hue or restart the chain.
        controller.set_scene(MAGNIFIER);
        assert_eq!(controller.catalog().scene(MAGNIFIER).hue, hue_before);
        assert!(controller.state().hue_animation_running);
        assert!(controller.animator.is_running());
    }

    #[test]
    fn leaving_the_magnifier_scene_stops_after_the_inflight_cycle() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        controller.update(100.0);
        controller.set_scene(0);
        assert!(!controller.state().hue_animation_running);

        // The in-flight cycle is still completing.
        controller.update(100.0);
        assert!(controller.animator.is_running());

        // Past the boundary the chain is gone and the hue stays put.
        controller.update(PAST_ANY_CYCLE_MS);
        assert!(!controller.animator.is_running());
        let hue = controller.catalog().scene(MAGNIFIER).hue;
        controller.update(500.0);
        assert_eq!(controller.catalog().scene(MAGNIFIER).hue, hue);
    }

    #[test]
    fn quick_return_to_the_magnifier_scene_adopts_the_running_chain() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        controller.update(300.0);
        controller.set_scene(2);
        // Back before the cycle boundary: the old chain is adopted, and the
        // guard sees the magnifier scene active again, so it keeps cycling.
        controller.set_scene(MAGNIFIER);
        assert!(controller.state().hue_animation_running);
        controller.update(PAST_ANY_CYCLE_MS);
        assert!(controller.animator.is_running());
    }

    #[test]
    fn returning_after_the_chain_died_restarts_from_the_baseline() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        controller.update(100.0);
        controller.set_scene(0);
        controller.update(PAST_ANY_CYCLE_MS);
        assert!(!controller.animator.is_running());

        controller.set_scene(MAGNIFIER);
        assert!(controller.animator.is_running());
        let scene = controller.catalog().scene(MAGNIFIER);
        assert_eq!(scene.hue, scene.base_hue);
    }

    #[test]
    fn leave_halts_the_chain_at_its_boundary() {
        let mut controller = controller();
        controller.set_scene(MAGNIFIER);
        controller.update(100.0);
        controller.leave();
        controller.update(PAST_ANY_CYCLE_MS);
        assert!(!controller.animator.is_running());
    }
}
