//! Routes and the navigation state supplied by the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::TabGroup;

/// A navigable screen shown as a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabRoute {
    /// Unique screen identifier.
    pub name: String,
    /// Cluster the tab is placed in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group: TabGroup,
}

impl TabRoute {
    /// Build a route in `group`.
    #[must_use]
    pub fn new(name: impl Into<String>, group: TabGroup) -> Self {
        Self {
            name: name.into(),
            group,
        }
    }

    /// Build a route from an optional, possibly unknown group tag.
    ///
    /// See [`TabGroup::parse_or_default`].
    #[must_use]
    pub fn tagged(name: impl Into<String>, tag: Option<&str>) -> Self {
        Self::new(name, TabGroup::parse_or_default(tag))
    }
}

/// A route as rendered in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor<'a> {
    /// The route.
    pub route: &'a TabRoute,
    /// Position in the navigation state's route list.
    pub index: usize,
    /// Whether this is the active route.
    pub is_focused: bool,
}

/// Ordered routes plus the focused index.
///
/// The focused index is clamped to the last route, so a non-empty state
/// always has exactly one focused route.
///
/// # Examples
/// ```
/// use monastery_tabbar::{NavigationState, TabGroup, TabRoute};
///
/// let state = NavigationState::new(
///     vec![
///         TabRoute::new("home", TabGroup::Left),
///         TabRoute::new("ar", TabGroup::Center),
///     ],
///     7,
/// );
/// assert_eq!(state.index(), 1);
/// assert_eq!(state.descriptors().filter(|d| d.is_focused).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    routes: Vec<TabRoute>,
    index: usize,
}

impl NavigationState {
    /// Build a state, clamping `index` into range.
    #[must_use]
    pub fn new(routes: Vec<TabRoute>, index: usize) -> Self {
        let focused = clamp_index(index, routes.len());
        Self {
            routes,
            index: focused,
        }
    }

    /// Every route in order.
    #[must_use]
    pub fn routes(&self) -> &[TabRoute] {
        &self.routes
    }

    /// Index of the focused route.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The focused route, if any routes exist.
    #[must_use]
    pub fn focused(&self) -> Option<&TabRoute> {
        self.routes.get(self.index)
    }

    /// Return this state focused on `index`, clamped into range.
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        Self::new(self.routes, index)
    }

    /// Derive one descriptor per route, exactly one of them focused.
    pub fn descriptors(&self) -> impl Iterator<Item = RouteDescriptor<'_>> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteDescriptor {
                route,
                index,
                is_focused: index == self.index,
            })
    }
}

const fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index >= len {
        len - 1
    } else {
        index
    }
}
