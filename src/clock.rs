use crate::constants::{DT_MAX_SEC, DT_MIN_SEC};

/// Elapsed animation time driven by host timestamps in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    pub elapsed_sec: f64,
    pub last_ms: f64,
}

impl AnimationClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            elapsed_sec: 0.0,
            last_ms: now_ms,
        }
    }

    /// Advance to `now_ms` and return the clamped delta in seconds.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let raw = ((now_ms - self.last_ms) / 1000.0) as f32;
        let dt = if raw.is_finite() {
            raw.clamp(DT_MIN_SEC, DT_MAX_SEC)
        } else {
            DT_MIN_SEC
        };
        self.last_ms = now_ms;
        self.elapsed_sec += dt as f64;
        dt
    }

    /// Drop the old baseline, e.g. after the page was hidden.
    #[inline]
    pub fn rebase(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }
}
