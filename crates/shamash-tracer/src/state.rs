use glam::Vec3;

use shamash_engine::input::Key;

use crate::scene::INITIAL_SPHERE_OFFSET;

/// Distance the interactive sphere moves per key press.
pub const MOVE_STEP: f32 = 0.001;

/// Upper bound on samples per pixel.
///
/// Doubling is the only way samples grow, so this keeps the value a power of
/// two while preventing runaway render times from a held-down key.
pub const MAX_SAMPLES: u32 = 1 << 20;

/// Where the current frame stands relative to the latest edit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderPhase {
    /// Presented image matches the scene; nothing to do.
    Idle,
    /// Scene or trace parameters changed since the last present.
    Dirty,
    /// A frame consuming the pending changes is in flight.
    Rendering,
}

/// Mutable trace settings plus the interactive sphere's position, paired
/// with the phase that tracks whether the screen reflects them.
#[derive(Debug, Clone)]
pub struct RenderState {
    phase: RenderPhase,
    bounces: u32,
    samples: u32,
    sphere_offset: Vec3,
}

impl RenderState {
    /// Starts `Dirty` so the first frame is always traced.
    pub fn new() -> Self {
        Self {
            phase: RenderPhase::Dirty,
            bounces: 1,
            samples: 1,
            sphere_offset: INITIAL_SPHERE_OFFSET,
        }
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Maximum number of scatter events per traced path.
    pub fn bounces(&self) -> u32 {
        self.bounces
    }

    /// Paths traced per pixel. Always a power of two.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Interactive sphere position relative to the camera.
    pub fn sphere_offset(&self) -> Vec3 {
        self.sphere_offset
    }

    /// Flags the presented image as stale, from any phase.
    pub fn mark_dirty(&mut self) {
        self.phase = RenderPhase::Dirty;
    }

    /// Consumes the pending changes at the start of a frame.
    pub fn begin_render(&mut self) {
        debug_assert_eq!(self.phase, RenderPhase::Dirty, "no pending changes to render");
        self.phase = RenderPhase::Rendering;
    }

    /// Marks the in-flight frame complete.
    ///
    /// A `mark_dirty` that lands mid-render wins: the phase stays `Dirty`
    /// and the next loop turn renders again.
    pub fn finish_render(&mut self) {
        if self.phase == RenderPhase::Rendering {
            self.phase = RenderPhase::Idle;
        }
    }

    /// Applies one key press.
    ///
    /// Recognized keys mutate the sphere offset or the trace parameters and
    /// mark the image stale, even when a floor clamp leaves the value
    /// unchanged. Any other key instead returns the phase to `Idle`,
    /// discarding a pending un-rendered edit.
    pub fn apply_key(&mut self, key: Key) {
        self.mark_dirty();

        match key {
            Key::W => self.sphere_offset.y += MOVE_STEP,
            Key::S => self.sphere_offset.y -= MOVE_STEP,
            Key::A => self.sphere_offset.x += MOVE_STEP,
            Key::D => self.sphere_offset.x -= MOVE_STEP,
            Key::Z => self.sphere_offset.z += MOVE_STEP,
            Key::X => self.sphere_offset.z -= MOVE_STEP,

            Key::Digit1 => self.bounces = self.bounces.saturating_sub(1),
            Key::Digit2 => self.bounces = self.bounces.saturating_add(1),
            Key::Digit3 => self.samples = (self.samples / 2).max(1),
            Key::Digit4 => self.samples = self.samples.saturating_mul(2).min(MAX_SAMPLES),

            _ => self.phase = RenderPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── phase machine ─────────────────────────────────────────────────────

    #[test]
    fn starts_dirty() {
        assert_eq!(RenderState::new().phase(), RenderPhase::Dirty);
    }

    #[test]
    fn render_cycle_returns_to_idle() {
        let mut state = RenderState::new();
        state.begin_render();
        assert_eq!(state.phase(), RenderPhase::Rendering);
        state.finish_render();
        assert_eq!(state.phase(), RenderPhase::Idle);
    }

    #[test]
    fn edit_during_render_survives_the_finish() {
        let mut state = RenderState::new();
        state.begin_render();
        state.mark_dirty();
        state.finish_render();
        assert_eq!(state.phase(), RenderPhase::Dirty);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no pending changes")]
    fn begin_render_requires_a_pending_edit() {
        let mut state = RenderState::new();
        state.begin_render();
        state.finish_render();
        state.begin_render();
    }

    // ── key policy ────────────────────────────────────────────────────────

    fn settled() -> RenderState {
        let mut state = RenderState::new();
        state.begin_render();
        state.finish_render();
        state
    }

    #[test]
    fn movement_keys_step_the_offset() {
        let mut state = settled();
        let start = state.sphere_offset();

        state.apply_key(Key::W);
        state.apply_key(Key::A);
        state.apply_key(Key::Z);

        let offset = state.sphere_offset();
        assert_eq!(offset.x, start.x + MOVE_STEP);
        assert_eq!(offset.y, start.y + MOVE_STEP);
        assert_eq!(offset.z, start.z + MOVE_STEP);
        assert_eq!(state.phase(), RenderPhase::Dirty);
    }

    #[test]
    fn opposing_movement_keys_cancel() {
        let mut state = settled();
        let start = state.sphere_offset();

        state.apply_key(Key::S);
        state.apply_key(Key::W);
        state.apply_key(Key::D);
        state.apply_key(Key::A);
        state.apply_key(Key::X);
        state.apply_key(Key::Z);

        assert_eq!(state.sphere_offset(), start);
    }

    #[test]
    fn parameter_keys_adjust_bounces_and_samples() {
        let mut state = settled();

        state.apply_key(Key::Digit2);
        state.apply_key(Key::Digit4);
        state.apply_key(Key::Digit4);

        assert_eq!(state.bounces(), 2);
        assert_eq!(state.samples(), 4);
        assert_eq!(state.phase(), RenderPhase::Dirty);
    }

    #[test]
    fn each_bounce_press_buys_exactly_one_render() {
        let mut state = settled();

        for expected in [2, 3, 4] {
            state.apply_key(Key::Digit2);
            assert_eq!(state.phase(), RenderPhase::Dirty);

            // The frame consuming this press sees the new value.
            state.begin_render();
            assert_eq!(state.bounces(), expected);
            state.finish_render();
            assert_eq!(state.phase(), RenderPhase::Idle);
        }
    }

    #[test]
    fn bounce_floor_is_zero_and_still_marks_dirty() {
        let mut state = settled();

        state.apply_key(Key::Digit1);
        assert_eq!(state.bounces(), 0);

        // Clamped no-op edits still trigger a re-render.
        state.apply_key(Key::Digit1);
        assert_eq!(state.bounces(), 0);
        assert_eq!(state.phase(), RenderPhase::Dirty);
    }

    #[test]
    fn sample_floor_is_one_and_still_marks_dirty() {
        let mut state = settled();

        state.apply_key(Key::Digit3);
        assert_eq!(state.samples(), 1);
        assert_eq!(state.phase(), RenderPhase::Dirty);
    }

    #[test]
    fn samples_stay_powers_of_two() {
        let mut state = settled();
        let presses = [
            Key::Digit4,
            Key::Digit4,
            Key::Digit3,
            Key::Digit4,
            Key::Digit4,
            Key::Digit3,
            Key::Digit3,
            Key::Digit3,
        ];

        for key in presses {
            state.apply_key(key);
            assert!(state.samples().is_power_of_two());
            assert!(state.samples() >= 1);
        }
    }

    #[test]
    fn samples_cap_at_the_maximum() {
        let mut state = settled();
        for _ in 0..40 {
            state.apply_key(Key::Digit4);
        }
        assert_eq!(state.samples(), MAX_SAMPLES);
        assert!(state.samples().is_power_of_two());
    }

    #[test]
    fn unrecognized_key_cancels_a_pending_edit() {
        let mut state = settled();

        state.apply_key(Key::Digit2);
        assert_eq!(state.phase(), RenderPhase::Dirty);

        state.apply_key(Key::Q);
        assert_eq!(state.phase(), RenderPhase::Idle);
        // The parameter edit itself is kept; only the re-render is dropped.
        assert_eq!(state.bounces(), 2);
    }

    #[test]
    fn unknown_platform_keys_follow_the_unrecognized_policy() {
        let mut state = settled();
        state.apply_key(Key::Digit2);
        state.apply_key(Key::Unknown(333));
        assert_eq!(state.phase(), RenderPhase::Idle);
    }
}
