//! Time-based interpolation of presentation values
//!
//! Animations are plain values sampled with the current clock time, so the
//! state machine never runs per-frame callbacks.

/// Splash fade when play starts
pub const SPLASH_FADE: f64 = 0.4;

/// Outer letter fade and feedback fade duration
pub const FADE: f64 = 0.3;

/// Word list page scroll duration
pub const PAGE_SCROLL: f64 = 0.3;

/// A transition from `from` to `to` starting at `start` and lasting `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
    pub start: f64,
}

impl Animation {
    /// Value at time `now`, eased in and out
    #[must_use]
    pub fn value_at(&self, now: f64) -> f64 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * ease_in_out_cubic(t)
    }

    /// Linear progress through the animation in `[0, 1]`
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A value that is either at rest or animating toward a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    animation: Animation,
}

impl AnimatedValue {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            animation: Animation {
                from: value,
                to: value,
                duration: 0.0,
                start: 0.0,
            },
        }
    }

    /// Jump to `value` with no transition
    pub fn set(&mut self, value: f64) {
        *self = Self::new(value);
    }

    /// Animate from wherever the value is at `now` toward `target`
    pub fn animate_to(&mut self, target: f64, now: f64, duration: f64) {
        self.animation = Animation {
            from: self.value_at(now),
            to: target,
            duration,
            start: now,
        };
    }

    #[must_use]
    pub fn value_at(&self, now: f64) -> f64 {
        self.animation.value_at(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: f64) -> bool {
        !self.animation.is_finished(now)
    }
}
