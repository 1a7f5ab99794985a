//! Behavioural coverage for ranking, bucketing and stale-result discard.

use std::cell::RefCell;
use std::time::Duration;

use monastery_core::Monastery;
use monastery_core::test_support::{monastery_with_reviews, sikkim_catalog};
use monastery_planner::{OpenOutcome, PlannerView, Priority, TravelPlanner, ViewState};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Input monasteries.
#[fixture]
fn pois() -> RefCell<Vec<Monastery>> {
    RefCell::new(Vec::new())
}

/// `(id, priority)` pairs from the last recommendation run.
#[fixture]
fn output() -> RefCell<Vec<(u64, Priority)>> {
    RefCell::new(Vec::new())
}

/// Outcome and final state of the last view session.
#[fixture]
fn session() -> RefCell<Option<(OpenOutcome, ViewState)>> {
    RefCell::new(None)
}

#[given("three monasteries with distinct ratings")]
fn three_monasteries(pois: &RefCell<Vec<Monastery>>) {
    *pois.borrow_mut() = vec![
        monastery_with_reviews(1, 4.2, 3),
        monastery_with_reviews(2, 4.9, 0),
        monastery_with_reviews(3, 3.1, 8),
    ];
}

#[given("the bundled Sikkim catalog")]
fn bundled_catalog(pois: &RefCell<Vec<Monastery>>) {
    *pois.borrow_mut() = sikkim_catalog().monasteries;
}

#[when("the planner recommends")]
fn planner_recommends(pois: &RefCell<Vec<Monastery>>, output: &RefCell<Vec<(u64, Priority)>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let recs = TravelPlanner::standard().recommend(&pois.borrow(), &mut rng);
    *output.borrow_mut() = recs
        .iter()
        .map(|rec| (rec.monastery.id, rec.priority))
        .collect();
}

#[when("the view is closed before loading finishes")]
fn close_early(
    pois: &RefCell<Vec<Monastery>>,
    session: &RefCell<Option<(OpenOutcome, ViewState)>>,
) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap_or_else(|err| panic!("runtime should build: {err}"));
    let records = pois.borrow();
    let view = PlannerView::new(TravelPlanner::standard(), &records);
    let outcome = runtime.block_on(async {
        let (outcome, ()) = tokio::join!(view.open(), async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            view.close();
        });
        tokio::time::sleep(Duration::from_secs(3)).await;
        outcome
    });
    *session.borrow_mut() = Some((outcome, view.state()));
}

#[then("three recommendations are returned best first")]
fn three_best_first(output: &RefCell<Vec<(u64, Priority)>>) {
    let ids: Vec<u64> = output.borrow().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[then("five recommendations are returned")]
fn five_returned(output: &RefCell<Vec<(u64, Priority)>>) {
    assert_eq!(output.borrow().len(), 5);
}

fn priorities(output: &RefCell<Vec<(u64, Priority)>>) -> Vec<Priority> {
    output.borrow().iter().map(|(_, p)| *p).collect()
}

#[then("their priorities are high high medium")]
fn short_buckets(output: &RefCell<Vec<(u64, Priority)>>) {
    assert_eq!(
        priorities(output),
        vec![Priority::High, Priority::High, Priority::Medium]
    );
}

#[then("their priorities are high high medium medium low")]
fn full_buckets(output: &RefCell<Vec<(u64, Priority)>>) {
    assert_eq!(
        priorities(output),
        vec![
            Priority::High,
            Priority::High,
            Priority::Medium,
            Priority::Medium,
            Priority::Low,
        ]
    );
}

#[then("no recommendations are applied")]
fn nothing_applied(session: &RefCell<Option<(OpenOutcome, ViewState)>>) {
    let recorded = session.borrow();
    let (outcome, state) = recorded
        .as_ref()
        .unwrap_or_else(|| panic!("session should have run"));
    assert_eq!(*outcome, OpenOutcome::Discarded);
    assert_eq!(*state, ViewState::Closed);
}

#[scenario(path = "tests/features/recommendations.feature", index = 0)]
fn short_lists_are_not_padded(pois: RefCell<Vec<Monastery>>, output: RefCell<Vec<(u64, Priority)>>) {
    let _ = (pois, output);
}

#[scenario(path = "tests/features/recommendations.feature", index = 1)]
fn bundled_catalog_fills_buckets(
    pois: RefCell<Vec<Monastery>>,
    output: RefCell<Vec<(u64, Priority)>>,
) {
    let _ = (pois, output);
}

#[scenario(path = "tests/features/recommendations.feature", index = 2)]
fn closing_discards_pending_results(
    pois: RefCell<Vec<Monastery>>,
    session: RefCell<Option<(OpenOutcome, ViewState)>>,
) {
    let _ = (pois, session);
}
