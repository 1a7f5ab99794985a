//! Horizontal layout of the bottom bar.
//!
//! Routes are partitioned into left, center and right groups. The center
//! group has a fixed width and is separated from each neighbouring side group
//! by a gap; the side groups share what is left. A plan built before the bar
//! has been measured keeps every group at zero width.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::group::TabGroup;
use crate::route::TabRoute;

/// Padding between the screen edge and the bar, per side.
pub const DEFAULT_BAR_PADDING: f32 = 20.0;
/// Padding inside each group, per side.
pub const DEFAULT_GROUP_PADDING: f32 = 12.0;
/// Gap between the center group and each side group.
pub const DEFAULT_GROUP_GAP: f32 = 15.0;
/// Width of the center group.
pub const DEFAULT_CENTER_WIDTH: f32 = 60.0;

/// Errors returned by [`TabBarMetrics::new`].
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    /// A dimension is negative or not finite.
    #[error("{field} must be a finite, non-negative length (got {value})")]
    InvalidLength {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
}

/// Fixed dimensions of the bar, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabBarMetrics {
    /// Padding between the container edge and the bar, per side.
    pub bar_padding: f32,
    /// Padding inside each group, per side.
    pub group_padding: f32,
    /// Gap between the center group and each side group.
    pub group_gap: f32,
    /// Width of the center group.
    pub center_width: f32,
}

impl Default for TabBarMetrics {
    fn default() -> Self {
        Self {
            bar_padding: DEFAULT_BAR_PADDING,
            group_padding: DEFAULT_GROUP_PADDING,
            group_gap: DEFAULT_GROUP_GAP,
            center_width: DEFAULT_CENTER_WIDTH,
        }
    }
}

impl TabBarMetrics {
    /// Validate and build a metrics set.
    ///
    /// # Errors
    /// Returns [`MetricsError::InvalidLength`] for the first negative or
    /// non-finite dimension.
    ///
    /// # Examples
    /// ```
    /// use monastery_tabbar::{MetricsError, TabBarMetrics};
    ///
    /// assert!(TabBarMetrics::new(20.0, 12.0, 15.0, 60.0).is_ok());
    /// assert!(matches!(
    ///     TabBarMetrics::new(20.0, -1.0, 15.0, 60.0),
    ///     Err(MetricsError::InvalidLength { field: "group_padding", .. })
    /// ));
    /// ```
    pub fn new(
        bar_padding: f32,
        group_padding: f32,
        group_gap: f32,
        center_width: f32,
    ) -> Result<Self, MetricsError> {
        let metrics = Self {
            bar_padding,
            group_padding,
            group_gap,
            center_width,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check every dimension is finite and non-negative.
    ///
    /// # Errors
    /// See [`TabBarMetrics::new`].
    pub fn validate(&self) -> Result<(), MetricsError> {
        [
            ("bar_padding", self.bar_padding),
            ("group_padding", self.group_padding),
            ("group_gap", self.group_gap),
            ("center_width", self.center_width),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite() || *value < 0.0)
        .map_or(Ok(()), |(field, value)| {
            Err(MetricsError::InvalidLength { field, value })
        })
    }

    /// Width left for groups inside a container of `container_width`.
    #[expect(clippy::float_arithmetic, reason = "padding subtraction")]
    #[must_use]
    pub fn available_width(&self, container_width: f32) -> f32 {
        container_width - 2.0 * self.bar_padding
    }
}

/// Placement of one non-empty group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GroupLayout {
    /// The group.
    pub group: TabGroup,
    /// Left edge within the bar.
    pub x: f32,
    /// Group width.
    pub width: f32,
    /// Width of each button in the group.
    pub button_width: f32,
    /// Navigation indices of the group's routes, in route order.
    pub routes: Vec<usize>,
}

/// Result of [`configure`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LayoutPlan {
    /// Width the plan was computed for.
    pub available_width: f32,
    /// Width of each gap beside the center group.
    pub gap: f32,
    /// Non-empty groups in left-to-right order.
    pub groups: Vec<GroupLayout>,
    measured: bool,
}

impl LayoutPlan {
    /// Report whether the plan was built from a real measurement.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        self.measured
    }

    /// Placement of `group`, if it has routes.
    #[must_use]
    pub fn group(&self, group: TabGroup) -> Option<&GroupLayout> {
        self.groups.iter().find(|layout| layout.group == group)
    }

    /// Group and in-group position of the route at `route_index`.
    #[must_use]
    pub fn locate(&self, route_index: usize) -> Option<(TabGroup, usize)> {
        self.groups.iter().find_map(|layout| {
            layout
                .routes
                .iter()
                .position(|&index| index == route_index)
                .map(|position| (layout.group, position))
        })
    }

    /// Number of gaps in the plan.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.groups
            .windows(2)
            .filter(|pair| pair.iter().any(|layout| layout.group == TabGroup::Center))
            .count()
    }

    /// Sum of group widths and gaps.
    #[expect(clippy::float_arithmetic, reason = "width accumulation")]
    #[must_use]
    pub fn occupied_width(&self) -> f32 {
        let widths: f32 = self.groups.iter().map(|layout| layout.width).sum();
        widths + self.gap * as_f32(self.gap_count())
    }
}

/// Convert a small count to `f32`, saturating at `u16::MAX`.
fn as_f32(count: usize) -> f32 {
    f32::from(u16::try_from(count).unwrap_or(u16::MAX))
}

/// Partition `routes` into groups and size them for `available_width`.
///
/// # Examples
/// ```
/// use monastery_tabbar::{TabBarMetrics, TabGroup, TabRoute, configure};
///
/// let routes = vec![
///     TabRoute::new("home", TabGroup::Left),
///     TabRoute::new("explore", TabGroup::Left),
///     TabRoute::new("ar", TabGroup::Center),
///     TabRoute::new("alerts", TabGroup::Right),
/// ];
/// let plan = configure(&routes, 350.0, &TabBarMetrics::default());
///
/// let left = plan.group(TabGroup::Left).expect("left group");
/// assert_eq!(left.width, 130.0);
/// assert_eq!(left.button_width, 53.0);
/// assert_eq!(plan.group(TabGroup::Center).map(|g| g.x), Some(145.0));
/// ```
#[expect(clippy::float_arithmetic, reason = "layout geometry")]
#[must_use]
pub fn configure(routes: &[TabRoute], available_width: f32, metrics: &TabBarMetrics) -> LayoutPlan {
    let members: Vec<(TabGroup, Vec<usize>)> = TabGroup::ALL
        .into_iter()
        .map(|group| {
            let indices = routes
                .iter()
                .enumerate()
                .filter(|(_, route)| route.group == group)
                .map(|(index, _)| index)
                .collect::<Vec<_>>();
            (group, indices)
        })
        .filter(|(_, indices)| !indices.is_empty())
        .collect();

    let measured = available_width.is_finite() && available_width > 0.0;
    let available = if measured { available_width } else { 0.0 };
    let has_center = members.iter().any(|(group, _)| *group == TabGroup::Center);
    let sides = members.iter().filter(|(group, _)| group.is_side()).count();

    let center_width = match (has_center, sides) {
        (false, _) => 0.0,
        (true, 0) => available,
        (true, _) => metrics.center_width.min(available),
    };
    let (gap, side_width) = if sides == 0 {
        (0.0, 0.0)
    } else {
        let side_count = as_f32(sides);
        let gap_budget = if has_center {
            (metrics.group_gap * side_count).min(available - center_width)
        } else {
            0.0
        };
        let remaining = (available - center_width - gap_budget).max(0.0);
        (gap_budget / side_count, remaining / side_count)
    };

    let mut cursor = 0.0;
    let mut previous: Option<TabGroup> = None;
    let mut groups = Vec::with_capacity(members.len());
    for (group, indices) in members {
        if previous.is_some_and(|prev| prev == TabGroup::Center || group == TabGroup::Center) {
            cursor += gap;
        }
        let width = if group.is_side() {
            side_width
        } else {
            center_width
        };
        let inner = (width - 2.0 * metrics.group_padding).max(0.0);
        groups.push(GroupLayout {
            group,
            x: cursor,
            width,
            button_width: inner / as_f32(indices.len()),
            routes: indices,
        });
        cursor += width;
        previous = Some(group);
    }

    LayoutPlan {
        available_width: available,
        gap,
        groups,
        measured,
    }
}
