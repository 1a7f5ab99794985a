//! Damped spring motion for the tab indicator.
//!
//! The spring is stepped with the closed-form solution of the damped
//! harmonic oscillator, so results do not depend on frame size. A spring is
//! settled once it has stayed within [`SETTLE_DISTANCE`] of its target for
//! longer than [`SETTLE_DURATION`]; it then snaps to the target at rest.

use std::time::Duration;

use log::debug;

/// Distance from the target treated as "arrived", in pixels.
pub const SETTLE_DISTANCE: f32 = 1.0;
/// Time the spring must stay within [`SETTLE_DISTANCE`] before settling.
pub const SETTLE_DURATION: Duration = Duration::from_millis(100);

const CRITICAL_EPSILON: f32 = 1e-4;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1 is critical damping; below oscillates, above creeps.
    pub damping_ratio: f32,
    /// Spring constant.
    pub stiffness: f32,
    /// Moving mass.
    pub mass: f32,
}

impl Default for SpringSpec {
    /// Critically damped with stiffness 300.
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 300.0,
            mass: 1.0,
        }
    }
}

impl SpringSpec {
    /// Undamped angular frequency.
    #[expect(clippy::float_arithmetic, reason = "stiffness over mass")]
    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass.max(f32::EPSILON)).sqrt()
    }

    /// Displacement and velocity after `t` seconds, starting from
    /// displacement `x0` and velocity `v0` relative to the target.
    #[expect(clippy::float_arithmetic, reason = "oscillator solution")]
    #[must_use]
    pub fn solve(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio.max(0.0);
        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let decay = (-omega * t).exp();
            let b = v0 + omega * x0;
            ((x0 + b * t) * decay, (v0 - omega * b * t) * decay)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let a = zeta * omega;
            let decay = (-a * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (x0 * cos + (v0 + a * x0) / damped * sin);
            let v = decay * (v0 * cos - (a * v0 + omega * omega * x0) / damped * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        }
    }
}

/// A value moving towards a target under a [`SpringSpec`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use monastery_tabbar::{SpringAnimation, SpringSpec};
///
/// let mut spring = SpringAnimation::new(SpringSpec::default(), 0.0);
/// spring.retarget(200.0);
/// for _ in 0..60 {
///     spring.advance(Duration::from_micros(16_667));
/// }
/// assert!(spring.is_settled());
/// assert_eq!(spring.position(), 200.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    spec: SpringSpec,
    position: f32,
    velocity: f32,
    target: f32,
    near_for: Duration,
    settled: bool,
}

impl SpringAnimation {
    /// A spring resting at `position`.
    #[must_use]
    pub const fn new(spec: SpringSpec, position: f32) -> Self {
        Self {
            spec,
            position,
            velocity: 0.0,
            target: position,
            near_for: Duration::ZERO,
            settled: true,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity in units per second.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the spring is moving towards.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Parameters in use.
    #[must_use]
    pub const fn spec(&self) -> SpringSpec {
        self.spec
    }

    /// Report whether the spring is at rest on its target.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.settled
    }

    /// Move towards `target`, keeping the current position and velocity.
    pub fn retarget(&mut self, target: f32) {
        if self.settled && target.total_cmp(&self.target).is_eq() {
            return;
        }
        self.target = target;
        self.near_for = Duration::ZERO;
        self.settled = false;
    }

    /// Jump to `position` and rest there.
    pub const fn snap_to(&mut self, position: f32) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.near_for = Duration::ZERO;
        self.settled = true;
    }

    /// Step the spring by `dt` and return the new position.
    #[expect(clippy::float_arithmetic, reason = "displacement bookkeeping")]
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if self.settled || dt.is_zero() {
            return self.position;
        }
        let (displacement, velocity) =
            self.spec
                .solve(self.position - self.target, self.velocity, dt.as_secs_f32());
        self.position = self.target + displacement;
        self.velocity = velocity;
        if displacement.abs() < SETTLE_DISTANCE {
            self.near_for = self.near_for.saturating_add(dt);
        } else {
            self.near_for = Duration::ZERO;
        }
        if self.near_for > SETTLE_DURATION {
            debug!("indicator spring settled at {}", self.target);
            self.snap_to(self.target);
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[expect(clippy::float_arithmetic, reason = "tolerance check")]
    fn within(a: f32, b: f32, tolerance: f32) -> bool {
        (a - b).abs() < tolerance
    }

    #[rstest]
    #[case(1.0)]
    #[case(0.5)]
    #[case(2.0)]
    fn solution_starts_at_initial_conditions(#[case] damping_ratio: f32) {
        let spec = SpringSpec {
            damping_ratio,
            ..SpringSpec::default()
        };
        let (x, v) = spec.solve(50.0, -3.0, 0.0);
        assert!(within(x, 50.0, 1e-3));
        assert!(within(v, -3.0, 1e-3));
    }

    #[rstest]
    fn critical_spring_does_not_overshoot() {
        let mut spring = SpringAnimation::new(SpringSpec::default(), 0.0);
        spring.retarget(200.0);
        for _ in 0..120 {
            let position = spring.advance(FRAME);
            assert!(position <= 201.0);
        }
    }

    #[rstest]
    fn settles_within_a_second() {
        let mut spring = SpringAnimation::new(SpringSpec::default(), 0.0);
        spring.retarget(200.0);
        let mut frames = 0;
        while !spring.is_settled() && frames < 60 {
            spring.advance(FRAME);
            frames += 1;
        }
        assert!(spring.is_settled(), "still moving after {frames} frames");
        assert_eq!(spring.position(), 200.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[rstest]
    fn requires_sustained_proximity() {
        let mut spring = SpringAnimation::new(SpringSpec::default(), 199.5);
        spring.retarget(200.0);
        spring.advance(Duration::from_millis(50));
        assert!(!spring.is_settled());
        spring.advance(Duration::from_millis(60));
        assert!(spring.is_settled());
    }

    #[rstest]
    fn frame_size_does_not_change_the_path() {
        let mut coarse = SpringAnimation::new(SpringSpec::default(), 0.0);
        let mut fine = coarse.clone();
        coarse.retarget(100.0);
        fine.retarget(100.0);
        coarse.advance(Duration::from_millis(40));
        for _ in 0..4 {
            fine.advance(Duration::from_millis(10));
        }
        assert!(within(coarse.position(), fine.position(), 0.01));
    }

    #[rstest]
    fn snapping_rests_immediately() {
        let mut spring = SpringAnimation::new(SpringSpec::default(), 0.0);
        spring.retarget(80.0);
        spring.advance(FRAME);
        spring.snap_to(10.0);
        assert!(spring.is_settled());
        assert_eq!(spring.advance(FRAME), 10.0);
    }
}
