/// A timed interpolation task for the presentation layer: the engine-free
/// restatement of effect coroutines (post-process fades, particle ramps).
/// Advanced by the variable presentation tick, with explicit
/// cancel-and-restart semantics so a superseding effect never races the
/// completion logic of the one it replaced.
#[derive(Debug, Clone, Copy)]
pub struct TimedLerp {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
}

impl TimedLerp {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Restarts from the beginning with new endpoints, discarding any
    /// progress of the interpolation it replaces.
    pub fn restart(&mut self, start: f32, end: f32, duration: f32) {
        *self = Self::new(start, end, duration);
    }

    /// Advances by `dt` and returns the interpolated value. Once elapsed
    /// time reaches the duration the value stays pinned at `end`.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            return self.end;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start + (self.end - self.start) * t
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
