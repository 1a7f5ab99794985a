//! Travel recommendations for the Monastery360 engine.
//!
//! [`Ranker`] orders monasteries by rating, review count and a keyword
//! [`FeatureScorer`], keeping the top five. [`TravelPlanner`] attaches reason
//! lines and randomly chosen travel advice, and [`PlannerView`] models the
//! recommendation view that loads for a moment before showing results and
//! drops them if it is closed first.
//!
//! # Examples
//! ```
//! use monastery_core::Monastery;
//! use monastery_planner::{Priority, Ranker};
//!
//! let pois = vec![
//!     Monastery::new(1, "Rumtek", "Gangtok", 4.94, ""),
//!     Monastery::new(2, "Tashiding", "Gyalshing", 4.98, ""),
//! ];
//! let ranked = Ranker::standard().rank(&pois);
//! assert_eq!(ranked.first().map(|r| r.poi.id), Some(2));
//! assert!(ranked.iter().all(|r| r.priority == Priority::High));
//! ```

#![forbid(unsafe_code)]

pub mod features;
pub mod narrative;
mod planner;
pub mod ranking;
mod session;

pub use features::{DEFAULT_MARKERS, FeatureMarker, FeatureScorer, MarkerField, MarkerScorer};
pub use narrative::{BEST_TIMES, Recommendation, TRAVEL_TIPS, VISIT_DURATIONS, reason_for};
pub use planner::{DEFAULT_LOADING_DELAY, TravelPlanner};
pub use ranking::{
    DEFAULT_RECOMMENDATION_LIMIT, Priority, RankedPoi, Ranker, compare_candidates,
};
pub use session::{OpenOutcome, PlannerView, ViewState};
