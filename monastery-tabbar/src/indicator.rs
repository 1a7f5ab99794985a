//! The sliding highlight behind the active tab.

use std::time::Duration;

use log::debug;

use crate::command::AnimationCommand;
use crate::group::TabGroup;
use crate::layout::LayoutPlan;
use crate::spring::{SpringAnimation, SpringSpec};

/// Offset of the indicator within its group for the route at `index`.
///
/// The offset is `button_width × position_in_group`. Returns `None` when the
/// route is not part of the plan.
///
/// # Examples
/// ```
/// use monastery_tabbar::{TabBarMetrics, TabGroup, TabRoute, configure, indicator_offset};
///
/// let routes = vec![
///     TabRoute::new("home", TabGroup::Left),
///     TabRoute::new("explore", TabGroup::Left),
///     TabRoute::new("ar", TabGroup::Center),
/// ];
/// let plan = configure(&routes, 350.0, &TabBarMetrics::default());
/// assert_eq!(indicator_offset(&plan, 0), Some(0.0));
/// assert_eq!(indicator_offset(&plan, 1), Some(125.5));
/// ```
#[expect(clippy::float_arithmetic, reason = "button offset")]
#[must_use]
pub fn indicator_offset(plan: &LayoutPlan, index: usize) -> Option<f32> {
    let (group, position) = plan.locate(index)?;
    let layout = plan.group(group)?;
    let slot = f32::from(u16::try_from(position).unwrap_or(u16::MAX));
    Some(layout.button_width * slot)
}

/// Drives the indicator in response to focus and layout changes.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorAnimator {
    spring: SpringAnimation,
    group: Option<TabGroup>,
    focused: Option<usize>,
}

impl Default for IndicatorAnimator {
    fn default() -> Self {
        Self::new(SpringSpec::default())
    }
}

impl IndicatorAnimator {
    /// An idle indicator using `spec` for motion.
    #[must_use]
    pub const fn new(spec: SpringSpec) -> Self {
        Self {
            spring: SpringAnimation::new(spec, 0.0),
            group: None,
            focused: None,
        }
    }

    /// Group the indicator is currently shown in.
    #[must_use]
    pub const fn group(&self) -> Option<TabGroup> {
        self.group
    }

    /// Current offset within the group.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.spring.position()
    }

    /// Offset the indicator is moving towards.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.spring.target()
    }

    /// Report whether the indicator is at rest.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// React to the route at `index` gaining focus.
    ///
    /// Changing group snaps the indicator into the new group before any
    /// motion; staying in the group springs to the new slot. While `plan` is
    /// unmeasured the command is suppressed and the index is kept for
    /// [`IndicatorAnimator::on_layout`].
    pub fn on_active_route_changed(&mut self, plan: &LayoutPlan, index: usize) -> AnimationCommand {
        self.focused = Some(index);
        if !plan.is_measured() {
            debug!("layout not measured; deferring indicator for route {index}");
            return AnimationCommand::None;
        }
        let Some((group, _)) = plan.locate(index) else {
            return AnimationCommand::None;
        };
        let Some(target) = indicator_offset(plan, index) else {
            return AnimationCommand::None;
        };
        let spec = self.spring.spec();
        if self.group == Some(group) {
            self.spring.retarget(target);
            AnimationCommand::Indicator {
                group,
                snap_to: None,
                target,
                spring: spec,
            }
        } else {
            debug!("indicator moves to the {group} group");
            self.group = Some(group);
            self.spring.snap_to(target);
            AnimationCommand::Indicator {
                group,
                snap_to: Some(target),
                target,
                spring: spec,
            }
        }
    }

    /// Re-derive the indicator for a new plan, replaying any deferred focus.
    pub fn on_layout(&mut self, plan: &LayoutPlan) -> AnimationCommand {
        match self.focused {
            Some(index) => self.on_active_route_changed(plan, index),
            None => AnimationCommand::None,
        }
    }

    /// Step the spring by `dt` and return the new offset.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.spring.advance(dt)
    }
}
