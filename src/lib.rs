//! Facade crate for the Monastery360 engine.
//!
//! This crate re-exports the catalogue types and exposes the travel planner
//! and tab bar animator behind feature flags.

#![forbid(unsafe_code)]

pub use monastery_core::{
    Catalog, CatalogError, Coordinates, Event, Monastery, RecordKind, Review, SearchQuery,
    SearchResults, TravelPackage,
};

#[cfg(feature = "serde")]
pub use monastery_core::{DatasetError, load_catalog, read_catalog};

#[cfg(feature = "planner")]
pub use monastery_planner::{
    OpenOutcome, PlannerView, Priority, RankedPoi, Ranker, Recommendation, TravelPlanner,
    ViewState,
};

#[cfg(feature = "tabbar")]
pub use monastery_tabbar::{
    AnimationCommand, ArSignal, EventBus, LayoutPlan, NavigationState, TabBar, TabBarMetrics,
    TabGroup, TabRoute,
};
