//! The recommendation view's open/close lifecycle.
//!
//! Opening the view shows a loading state, waits for the planner's delay and
//! then applies freshly ranked recommendations. Closing the view while the
//! delay is pending cancels the wait; any result that still resolves for an
//! earlier opening is dropped instead of being applied.
//!
//! The view is single-threaded: state lives in `Cell`/`RefCell` and no
//! borrow is held across an `.await`.

use std::cell::{Cell, RefCell};

use log::debug;
use monastery_core::Monastery;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::features::{FeatureScorer, MarkerScorer};
use crate::narrative::Recommendation;
use crate::planner::TravelPlanner;

/// What the view currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Not on screen.
    #[default]
    Closed,
    /// Open and waiting for results.
    Loading,
    /// Open with results applied.
    Ready(Vec<Recommendation>),
}

/// Result of one [`PlannerView::open`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The given number of recommendations was applied.
    Applied(usize),
    /// The view closed or reopened first; nothing was applied.
    Discarded,
}

/// Recommendation view bound to a read-only monastery list.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use monastery_core::Monastery;
/// use monastery_planner::{OpenOutcome, PlannerView, TravelPlanner, ViewState};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pois = vec![Monastery::new(1, "Rumtek", "Gangtok", 4.9, "")];
/// let planner = TravelPlanner::standard().with_delay(Duration::ZERO);
/// let view = PlannerView::new(planner, &pois);
///
/// assert_eq!(view.open().await, OpenOutcome::Applied(1));
/// view.close();
/// assert_eq!(view.state(), ViewState::Closed);
/// # }
/// ```
#[derive(Debug)]
pub struct PlannerView<'a, S = MarkerScorer> {
    planner: TravelPlanner<S>,
    pois: &'a [Monastery],
    state: RefCell<ViewState>,
    generation: Cell<u64>,
    pending: RefCell<Option<CancellationToken>>,
}

impl<'a, S: FeatureScorer> PlannerView<'a, S> {
    /// Build a closed view over `pois`.
    #[must_use]
    pub const fn new(planner: TravelPlanner<S>, pois: &'a [Monastery]) -> Self {
        Self {
            planner,
            pois,
            state: RefCell::new(ViewState::Closed),
            generation: Cell::new(0),
            pending: RefCell::new(None),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Report whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), ViewState::Loading)
    }

    /// Open the view, decorating results with the thread-local RNG.
    pub async fn open(&self) -> OpenOutcome {
        self.open_with_rng(&mut rand::thread_rng()).await
    }

    /// Open the view, decorating results with `rng`.
    ///
    /// Reopening while a previous load is pending supersedes it; the earlier
    /// call returns [`OpenOutcome::Discarded`].
    pub async fn open_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> OpenOutcome {
        let (generation, token) = self.begin_loading();
        tokio::select! {
            () = token.cancelled() => {
                debug!("recommendation load {generation} cancelled");
                return OpenOutcome::Discarded;
            }
            () = tokio::time::sleep(self.planner.delay()) => {}
        }
        if self.generation.get() != generation {
            debug!("recommendation load {generation} is stale");
            return OpenOutcome::Discarded;
        }
        let recommendations = self.planner.recommend(self.pois, rng);
        let applied = recommendations.len();
        self.pending.replace(None);
        self.state.replace(ViewState::Ready(recommendations));
        OpenOutcome::Applied(applied)
    }

    /// Close the view and drop any pending load.
    ///
    /// Closing an already closed view is a no-op.
    pub fn close(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(token) = self.pending.replace(None) {
            token.cancel();
        }
        self.state.replace(ViewState::Closed);
    }

    fn begin_loading(&self) -> (u64, CancellationToken) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.replace(Some(token.clone())) {
            previous.cancel();
        }
        self.state.replace(ViewState::Loading);
        (generation, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monastery_core::test_support::sikkim_catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    #[tokio::test(start_paused = true)]
    async fn results_arrive_after_delay() {
        let catalog = sikkim_catalog();
        let view = PlannerView::new(TravelPlanner::standard(), &catalog.monasteries);
        let started = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (outcome, ()) = tokio::join!(view.open_with_rng(&mut rng), async {
            sleep(Duration::from_millis(10)).await;
            assert!(view.is_loading());
        });
        assert_eq!(outcome, OpenOutcome::Applied(5));
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(matches!(view.state(), ViewState::Ready(ref recs) if recs.len() == 5));
    }

    #[tokio::test(start_paused = true)]
    async fn closing_mid_delay_discards_results() {
        let catalog = sikkim_catalog();
        let view = PlannerView::new(TravelPlanner::standard(), &catalog.monasteries);
        let (outcome, ()) = tokio::join!(view.open(), async {
            sleep(Duration::from_millis(500)).await;
            view.close();
        });
        assert_eq!(outcome, OpenOutcome::Discarded);
        sleep(Duration::from_secs(5)).await;
        assert_eq!(view.state(), ViewState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn reopening_supersedes_pending_load() {
        let catalog = sikkim_catalog();
        let view = PlannerView::new(TravelPlanner::standard(), &catalog.monasteries);
        let (first, second) = tokio::join!(view.open(), async {
            sleep(Duration::from_millis(200)).await;
            view.open().await
        });
        assert_eq!(first, OpenOutcome::Discarded);
        assert_eq!(second, OpenOutcome::Applied(5));
    }

    #[rstest]
    fn closing_twice_is_harmless() {
        let pois: Vec<Monastery> = Vec::new();
        let view = PlannerView::new(TravelPlanner::standard(), &pois);
        view.close();
        view.close();
        assert_eq!(view.state(), ViewState::Closed);
        assert!(!view.is_loading());
    }
}
