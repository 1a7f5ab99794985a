//! Ranking plus decoration in one call.

use std::time::Duration;

use log::debug;
use monastery_core::Monastery;
use rand::Rng;

use crate::features::{FeatureScorer, MarkerScorer};
use crate::narrative::Recommendation;
use crate::ranking::Ranker;

/// Loading time shown before recommendations appear.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(1500);

/// Produces decorated recommendations from a monastery list.
///
/// # Examples
/// ```
/// use monastery_core::Monastery;
/// use monastery_planner::{Priority, TravelPlanner};
///
/// let pois = vec![
///     Monastery::new(1, "A", "Sikkim", 4.1, "Quiet retreat"),
///     Monastery::new(2, "B", "Sikkim", 4.8, "Hilltop views"),
///     Monastery::new(3, "C", "Sikkim", 3.9, "Old murals"),
/// ];
/// let recs = TravelPlanner::standard().recommend(&pois, &mut rand::thread_rng());
///
/// let ids: Vec<u64> = recs.iter().map(|r| r.monastery.id).collect();
/// assert_eq!(ids, vec![2, 1, 3]);
/// let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
/// assert_eq!(priorities, vec![Priority::High, Priority::High, Priority::Medium]);
/// ```
#[derive(Debug, Clone)]
pub struct TravelPlanner<S = MarkerScorer> {
    ranker: Ranker<S>,
    delay: Duration,
}

impl TravelPlanner<MarkerScorer> {
    /// Planner using [`Ranker::standard`] and [`DEFAULT_LOADING_DELAY`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Ranker::standard(), DEFAULT_LOADING_DELAY)
    }
}

impl Default for TravelPlanner<MarkerScorer> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: FeatureScorer> TravelPlanner<S> {
    /// Build a planner from a ranker and a loading delay.
    #[must_use]
    pub const fn new(ranker: Ranker<S>, delay: Duration) -> Self {
        Self { ranker, delay }
    }

    /// Replace the loading delay.
    #[must_use]
    pub fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// The ranker used for ordering.
    #[must_use]
    pub const fn ranker(&self) -> &Ranker<S> {
        &self.ranker
    }

    /// Simulated loading time before results are applied.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Rank `pois` and decorate the survivors.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        pois: &[Monastery],
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let ranked = self.ranker.rank(pois);
        debug!(
            "recommending {} of {} monasteries",
            ranked.len(),
            pois.len()
        );
        ranked
            .iter()
            .map(|entry| Recommendation::from_ranked(entry, rng))
            .collect()
    }
}
