use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::HUE_TICK_MS;
use crate::scene::HueAnimationSpec;

// One tween cycle. `offset` scales both the wall-clock duration and the
// target hue; the start hue stays un-scaled, biasing the sweep toward it.
struct Cycle {
    spec: HueAnimationSpec,
    offset: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    stopping: bool,
}

// Restartable, cancellable hue-shift tween. Idle while `cycle` is None,
// Running otherwise. Samples are produced at the fixed tick rate from
// accumulated frame time, in the same dt-driven style as the rest of the
// presentation. Cancellation is cooperative: the guard is polled only at
// cycle boundaries, so an in-flight cycle always runs to completion.
pub struct HueShiftAnimator {
    rng: StdRng,
    cycle: Option<Cycle>,
    tick_accum_ms: f32,
}

impl HueShiftAnimator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    // Seeded construction keeps the per-cycle variation reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            cycle: None,
            tick_accum_ms: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.cycle.is_some()
    }

    // Starts the animation chain. A no-op while a chain is already running:
    // the running chain keeps its elapsed time and its drawn offset.
    pub fn start(&mut self, spec: HueAnimationSpec) {
        if self.cycle.is_some() {
            return;
        }
        self.tick_accum_ms = 0.0;
        self.cycle = Some(self.new_cycle(spec));
    }

    // Halts the chain at its next cycle boundary. Does not preempt the
    // in-flight cycle.
    pub fn stop(&mut self) {
        if let Some(cycle) = &mut self.cycle {
            cycle.stopping = true;
        }
    }

    // Feeds frame time to the running chain and returns the newest hue
    // sample, if any tick fired. At each completed cycle the guard decides
    // whether a fresh cycle (with a fresh offset) begins or the animator
    // goes idle.
    pub fn advance(&mut self, dt_ms: f32, guard: impl Fn() -> bool) -> Option<f32> {
        if self.cycle.is_none() {
            return None;
        }
        self.tick_accum_ms += dt_ms;

        let mut sample = None;
        while self.tick_accum_ms >= HUE_TICK_MS {
            self.tick_accum_ms -= HUE_TICK_MS;
            let Some(cycle) = &mut self.cycle else {
                break;
            };

            cycle.elapsed_ms += HUE_TICK_MS;
            // A zero or negative effective duration completes on its first
            // tick instead of dividing by zero.
            let progress = if cycle.duration_ms <= 0.0 {
                1.0
            } else {
                (cycle.elapsed_ms / cycle.duration_ms).min(1.0)
            };
            let to = cycle.spec.final_hue * cycle.offset;
            sample = Some(triangular(cycle.spec.initial_hue, to, progress));

            if progress >= 1.0 {
                if cycle.stopping || !guard() {
                    self.cycle = None;
                } else {
                    let spec = cycle.spec;
                    self.cycle = Some(self.new_cycle(spec));
                }
            }
        }
        sample
    }

    fn new_cycle(&mut self, spec: HueAnimationSpec) -> Cycle {
        // Drawn per cycle, always within [1 - variation, 1 + variation].
        let offset = self.rng.random::<f32>() * spec.variation * 2.0 + (1.0 - spec.variation);
        Cycle {
            spec,
            offset,
            duration_ms: spec.duration_ms * offset,
            elapsed_ms: 0.0,
            stopping: false,
        }
    }
}

// Ping-pong profile: linear from `from` up to the midpoint, then linearly
// back. Both branches meet at progress 0.5.
fn triangular(from: f32, to: f32, progress: f32) -> f32 {
    if progress < 0.5 {
        from + progress * (to - from)
    } else {
        to + progress * (from - to)
    }
}
