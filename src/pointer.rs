use crate::constants::{POINTER_START_X, POINTER_START_Y, SMOOTHING_RESIDUAL_PER_SEC};
use glam::Vec2;

/// Pointer target plus the per-frame smoothed motion derived from it.
///
/// Event handlers only ever call [`PointerState::set_target`]; everything else
/// is advanced once per frame by [`PointerState::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub last: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl PointerState {
    /// At rest at `pos`.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            last: pos,
            vel: Vec2::ZERO,
            speed: 0.0,
        }
    }

    /// Initial resting spot for a `width` x `height` viewport.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self::at(Vec2::new(width * POINTER_START_X, height * POINTER_START_Y))
    }

    #[inline]
    pub fn set_target(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pos = Vec2::new(x, y);
        }
    }

    /// Estimate instantaneous velocity from the positional delta and ease the
    /// smoothed velocity and speed toward it. `dt_sec` must already be clamped.
    ///
    /// Returns the unsmoothed speed of this step in px/s.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        let inst = (self.pos - self.last) / dt_sec;
        self.last = self.pos;

        let k = smoothing_factor(dt_sec);
        self.vel += (inst - self.vel) * k;
        let smoothed = self.vel.length();
        self.speed += (smoothed - self.speed) * k;
        inst.length()
    }
}

/// `1 - r^dt`: the same decay per second no matter how the second is sliced.
#[inline]
pub fn smoothing_factor(dt_sec: f32) -> f32 {
    1.0 - SMOOTHING_RESIDUAL_PER_SEC.powf(dt_sec)
}
