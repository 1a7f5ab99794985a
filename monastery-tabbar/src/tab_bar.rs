//! The coordinator tying layout, indicator and AR toggle together.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::bus::{ArSignal, EventBus, Subscription};
use crate::command::AnimationCommand;
use crate::group::TabGroup;
use crate::indicator::IndicatorAnimator;
use crate::layout::{LayoutPlan, TabBarMetrics, configure};
use crate::route::NavigationState;
use crate::spring::SpringSpec;
use crate::toggle::{ArToggle, TogglePose};

/// Route whose second press flips the AR toggle.
pub const DEFAULT_SPECIAL_ROUTE: &str = "ar";

/// Animated values for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TabBarFrame {
    /// Group showing the indicator.
    pub indicator_group: Option<TabGroup>,
    /// Indicator offset within that group.
    pub indicator_x: f32,
    /// Whether the indicator has come to rest.
    pub indicator_settled: bool,
    /// Current toggle pose.
    pub toggle: TogglePose,
}

/// Bottom tab bar state driven by navigation, layout and bus events.
///
/// # Examples
/// ```
/// use monastery_tabbar::{EventBus, NavigationState, TabBar, TabBarMetrics, TabGroup, TabRoute};
///
/// let bus = EventBus::new();
/// let mut bar = TabBar::new(TabBarMetrics::default(), &bus);
/// let routes = vec![
///     TabRoute::new("home", TabGroup::Left),
///     TabRoute::new("ar", TabGroup::Center),
/// ];
///
/// bar.on_navigation(NavigationState::new(routes.clone(), 1));
/// bar.on_layout(390.0);
/// assert!(!bar.on_special_toggle("ar").is_none());
/// assert!(bar.is_toggle_engaged());
///
/// bar.on_navigation(NavigationState::new(routes, 0));
/// assert!(!bar.is_toggle_engaged());
/// ```
#[derive(Debug)]
pub struct TabBar {
    metrics: TabBarMetrics,
    special_route: String,
    navigation: NavigationState,
    container_width: f32,
    plan: LayoutPlan,
    indicator: IndicatorAnimator,
    toggle: Rc<RefCell<ArToggle>>,
    bus: EventBus,
    subscription: Subscription,
}

impl TabBar {
    /// Build an unmeasured bar listening on `bus`.
    #[must_use]
    pub fn new(metrics: TabBarMetrics, bus: &EventBus) -> Self {
        Self::with_spring(metrics, bus, SpringSpec::default())
    }

    /// Build a bar whose indicator moves with `spring`.
    #[must_use]
    pub fn with_spring(metrics: TabBarMetrics, bus: &EventBus, spring: SpringSpec) -> Self {
        let toggle = Rc::new(RefCell::new(ArToggle::new()));
        let listener_toggle = Rc::downgrade(&toggle);
        let subscription = bus.subscribe(move |signal| {
            let Some(shared) = listener_toggle.upgrade() else {
                return;
            };
            match shared.try_borrow_mut() {
                Ok(mut state) => {
                    if state.reset().is_none() {
                        debug!("{signal:?} ignored; AR toggle already at rest");
                    }
                }
                Err(_) => warn!("AR toggle busy; dropping {signal:?}"),
            }
        });
        Self {
            metrics,
            special_route: DEFAULT_SPECIAL_ROUTE.to_owned(),
            navigation: NavigationState::default(),
            container_width: 0.0,
            plan: LayoutPlan::default(),
            indicator: IndicatorAnimator::new(spring),
            toggle,
            bus: bus.clone(),
            subscription,
        }
    }

    /// Use `name` as the special route instead of [`DEFAULT_SPECIAL_ROUTE`].
    #[must_use]
    pub fn with_special_route(mut self, name: impl Into<String>) -> Self {
        self.special_route = name.into();
        self
    }

    /// Current layout plan.
    #[must_use]
    pub const fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// Last navigation state received.
    #[must_use]
    pub const fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Metrics in use.
    #[must_use]
    pub const fn metrics(&self) -> &TabBarMetrics {
        &self.metrics
    }

    /// Report whether the bar's bus listener is still registered.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.subscription.is_active()
    }

    /// Report whether the AR toggle is on.
    #[must_use]
    pub fn is_toggle_engaged(&self) -> bool {
        self.toggle
            .try_borrow()
            .is_ok_and(|toggle| toggle.is_engaged())
    }

    /// Current toggle pose.
    #[must_use]
    pub fn toggle_pose(&self) -> TogglePose {
        self.toggle
            .try_borrow()
            .map_or(TogglePose::REST, |toggle| toggle.pose())
    }

    fn replan(&mut self) {
        let available = self.metrics.available_width(self.container_width);
        self.plan = configure(self.navigation.routes(), available, &self.metrics);
    }

    fn focused_is_special(&self) -> bool {
        self.navigation
            .focused()
            .is_some_and(|route| route.name == self.special_route)
    }

    /// Apply a new container measurement.
    pub fn on_layout(&mut self, container_width: f32) -> AnimationCommand {
        self.container_width = container_width;
        self.replan();
        debug!(
            "tab bar laid out at {container_width}px ({} groups)",
            self.plan.groups.len()
        );
        self.indicator.on_layout(&self.plan)
    }

    /// Apply a new navigation state from the host.
    ///
    /// The plan is rebuilt when the route list changes; the indicator is
    /// re-derived when the route list or focused index changes. Leaving the
    /// special route while the toggle is on broadcasts
    /// [`ArSignal::ToggleReset`].
    pub fn on_navigation(&mut self, state: NavigationState) -> AnimationCommand {
        let routes_changed = state.routes() != self.navigation.routes();
        let index_changed = state.index() != self.navigation.index();
        let was_special = self.focused_is_special();
        self.navigation = state;
        if routes_changed {
            self.replan();
        }
        if was_special && !self.focused_is_special() && self.is_toggle_engaged() {
            debug!("left the {} tab with the toggle engaged", self.special_route);
            self.bus.emit(ArSignal::ToggleReset);
        }
        if routes_changed || index_changed {
            self.indicator
                .on_active_route_changed(&self.plan, self.navigation.index())
        } else {
            AnimationCommand::None
        }
    }

    /// Handle a press on `route_name`.
    ///
    /// Only a press on the special route while it is already focused flips
    /// the toggle.
    pub fn on_special_toggle(&mut self, route_name: &str) -> AnimationCommand {
        if route_name != self.special_route || !self.focused_is_special() {
            return AnimationCommand::None;
        }
        self.toggle
            .try_borrow_mut()
            .map_or(AnimationCommand::None, |mut toggle| toggle.flip())
    }

    /// Step every running animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> TabBarFrame {
        let indicator_x = self.indicator.advance(dt);
        let toggle = self
            .toggle
            .try_borrow_mut()
            .map_or(TogglePose::REST, |mut toggle| toggle.advance(dt));
        TabBarFrame {
            indicator_group: self.indicator.group(),
            indicator_x,
            indicator_settled: self.indicator.is_settled(),
            toggle,
        }
    }
}
