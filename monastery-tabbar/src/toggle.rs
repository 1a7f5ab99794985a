//! The AR toggle: a boolean with an animated pose.
//!
//! Engaging the toggle pushes both side groups down and rotates the center
//! button; disengaging returns to rest. The pose is derived from a single
//! progress value so a toggle flipped mid-flight reverses from where it is.

use std::time::Duration;

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::command::AnimationCommand;
use crate::timing::{Easing, TimingAnimation};

/// Length of a toggle transition.
pub const TOGGLE_DURATION: Duration = Duration::from_millis(300);

/// Visual state driven by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TogglePose {
    /// Vertical offset of both side groups, in pixels.
    pub side_offset: f32,
    /// Rotation of the center button, in degrees.
    pub center_rotation: f32,
}

impl TogglePose {
    /// Pose while the toggle is off.
    pub const REST: Self = Self {
        side_offset: 0.0,
        center_rotation: 0.0,
    };

    /// Pose while the toggle is on.
    pub const ENGAGED: Self = Self {
        side_offset: 100.0,
        center_rotation: 45.0,
    };

    /// Interpolate from [`TogglePose::REST`] to [`TogglePose::ENGAGED`].
    #[expect(clippy::float_arithmetic, reason = "pose interpolation")]
    #[must_use]
    pub fn at(progress: f32) -> Self {
        let t = progress.clamp(0.0, 1.0);
        Self {
            side_offset: Self::ENGAGED.side_offset * t,
            center_rotation: Self::ENGAGED.center_rotation * t,
        }
    }
}

/// Owned toggle state.
///
/// All reads and writes go through the accessor methods; callers never touch
/// the animation directly.
///
/// # Examples
/// ```
/// use monastery_tabbar::{AnimationCommand, ArToggle, TOGGLE_DURATION, TogglePose};
///
/// let mut toggle = ArToggle::new();
/// assert!(matches!(toggle.flip(), AnimationCommand::Toggle { engaged: true, .. }));
/// toggle.advance(TOGGLE_DURATION);
/// assert_eq!(toggle.pose(), TogglePose::ENGAGED);
///
/// assert_ne!(toggle.reset(), AnimationCommand::None);
/// assert_eq!(toggle.reset(), AnimationCommand::None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArToggle {
    engaged: bool,
    progress: TimingAnimation,
}

impl Default for ArToggle {
    fn default() -> Self {
        Self::new()
    }
}

impl ArToggle {
    /// A disengaged toggle at rest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engaged: false,
            progress: TimingAnimation::at_rest(0.0),
        }
    }

    /// Report whether the toggle is on.
    #[must_use]
    pub const fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> TogglePose {
        TogglePose::at(self.progress.value())
    }

    /// Report whether the pose is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.progress.is_finished()
    }

    /// Invert the toggle.
    pub fn flip(&mut self) -> AnimationCommand {
        self.set_engaged(!self.engaged)
    }

    /// Return to rest; a no-op when already disengaged.
    pub fn reset(&mut self) -> AnimationCommand {
        self.set_engaged(false)
    }

    /// Drive the toggle to `engaged`.
    ///
    /// Returns [`AnimationCommand::None`] when nothing changes.
    pub fn set_engaged(&mut self, engaged: bool) -> AnimationCommand {
        if self.engaged == engaged {
            return AnimationCommand::None;
        }
        let from = self.progress.value();
        let to = if engaged { 1.0 } else { 0.0 };
        debug!("AR toggle {}", if engaged { "engaged" } else { "reset" });
        self.engaged = engaged;
        self.progress = TimingAnimation::new(from, to, TOGGLE_DURATION, Easing::EaseInOut);
        AnimationCommand::Toggle {
            engaged,
            from: TogglePose::at(from),
            to: TogglePose::at(to),
            duration: TOGGLE_DURATION,
            easing: Easing::EaseInOut,
        }
    }

    /// Step the transition by `dt` and return the new pose.
    pub fn advance(&mut self, dt: Duration) -> TogglePose {
        TogglePose::at(self.progress.advance(dt))
    }
}
