//! Instructions handed to the presentation layer.

use std::time::Duration;

use crate::group::TabGroup;
use crate::spring::SpringSpec;
use crate::timing::Easing;
use crate::toggle::TogglePose;

/// An animation the presentation layer should start.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationCommand {
    /// Nothing to animate.
    None,
    /// Move the active-tab indicator.
    Indicator {
        /// Group the indicator is shown in.
        group: TabGroup,
        /// Position to jump to before animating, set when the group changed.
        snap_to: Option<f32>,
        /// Offset within the group to settle at.
        target: f32,
        /// Spring driving the motion.
        spring: SpringSpec,
    },
    /// Move the toggle pose.
    Toggle {
        /// State after the transition.
        engaged: bool,
        /// Starting pose.
        from: TogglePose,
        /// Final pose.
        to: TogglePose,
        /// Transition length.
        duration: Duration,
        /// Timing curve.
        easing: Easing,
    },
}

impl AnimationCommand {
    /// Report whether the command does nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
