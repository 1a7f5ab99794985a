//! Fixed-duration eased animation.

use std::time::Duration;

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease in and out.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (clamped to `0..=1`) through the curve.
    ///
    /// # Examples
    /// ```
    /// use monastery_tabbar::Easing;
    ///
    /// assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    /// assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    /// assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    /// assert!(Easing::EaseInOut.apply(0.25) < Easing::Linear.apply(0.25));
    /// ```
    #[expect(clippy::float_arithmetic, reason = "easing polynomial")]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let progress = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => progress,
            Self::EaseInOut if progress < 0.5 => 4.0 * progress.powi(3),
            Self::EaseInOut => 1.0 - (-2.0 * progress + 2.0).powi(3) / 2.0,
        }
    }
}

/// Animates a value from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl TimingAnimation {
    /// Start an animation.
    #[must_use]
    pub const fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// An already finished animation resting at `value`.
    #[must_use]
    pub const fn at_rest(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, Easing::Linear)
    }

    /// Start value.
    #[must_use]
    pub const fn start(&self) -> f32 {
        self.from
    }

    /// End value.
    #[must_use]
    pub const fn end(&self) -> f32 {
        self.to
    }

    /// Total running time.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Timing curve.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `0..=1`.
    #[expect(clippy::float_arithmetic, reason = "elapsed fraction")]
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Report whether the animation reached its end value.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current eased value.
    #[expect(clippy::float_arithmetic, reason = "interpolation")]
    #[must_use]
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Step by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}
