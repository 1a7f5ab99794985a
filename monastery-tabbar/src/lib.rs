//! Bottom tab bar logic for the Monastery360 app.
//!
//! Routes are split into left, center and right groups ([`configure`]); a
//! spring-driven indicator tracks the focused route ([`IndicatorAnimator`]);
//! and an AR toggle ([`ArToggle`]) animates the bar between two poses and is
//! kept in sync with other screens through an [`EventBus`]. [`TabBar`] ties
//! these together behind navigation, layout and press handlers that return
//! [`AnimationCommand`]s for the presentation layer.

#![forbid(unsafe_code)]

pub mod bus;
mod command;
mod group;
pub mod indicator;
pub mod layout;
mod route;
pub mod spring;
mod tab_bar;
pub mod timing;
pub mod toggle;

pub use bus::{ArSignal, EventBus, Subscription};
pub use command::AnimationCommand;
pub use group::TabGroup;
pub use indicator::{IndicatorAnimator, indicator_offset};
pub use layout::{GroupLayout, LayoutPlan, MetricsError, TabBarMetrics, configure};
pub use route::{NavigationState, RouteDescriptor, TabRoute};
pub use spring::{SpringAnimation, SpringSpec};
pub use tab_bar::{DEFAULT_SPECIAL_ROUTE, TabBar, TabBarFrame};
pub use timing::{Easing, TimingAnimation};
pub use toggle::{ArToggle, TOGGLE_DURATION, TogglePose};
