//! Property-based tests for the recommendation ranker.
//!
//! # Invariants tested
//!
//! - **Determinism:** ranking the same list twice yields the same order.
//! - **Ordering:** adjacent entries never violate the comparator.
//! - **Bucketing:** priorities depend on position alone.
//! - **Length:** output length is `min(len, limit)`.

use monastery_core::{Monastery, Review};
use monastery_planner::{FeatureScorer, MarkerScorer, Priority, Ranker, compare_candidates};
use proptest::prelude::*;
use std::cmp::Ordering;

const NAMES: &[&str] = &["Rumtek", "Dubdi", "Pemayangtse", "Enchey", "Lingdum"];
const DESCRIPTIONS: &[&str] = &[
    "",
    "Ancient murals",
    "Cham dance festival",
    "A view of the Himalayas",
    "Quiet retreat",
];
const LOCATIONS: &[&str] = &["Gangtok, Sikkim", "Pelling", "Yuksom"];

fn monastery_strategy() -> impl Strategy<Value = (u8, usize, usize, usize, usize)> {
    (0_u8..=10, 0_usize..4, 0..NAMES.len(), 0..DESCRIPTIONS.len(), 0..LOCATIONS.len())
}

#[expect(clippy::float_arithmetic, reason = "half-star ratings")]
fn build(id: u64, parts: (u8, usize, usize, usize, usize)) -> Monastery {
    let (half_stars, reviews, name, description, location) = parts;
    let rating = f32::from(half_stars) / 2.0;
    let pick = |pool: &[&'static str], idx: usize| pool.get(idx).copied().unwrap_or_default();
    Monastery::new(
        id,
        pick(NAMES, name),
        pick(LOCATIONS, location),
        rating,
        pick(DESCRIPTIONS, description),
    )
    .with_reviews(vec![Review::new("Visitor", "today", "Calm."); reviews])
}

fn pois_strategy() -> impl Strategy<Value = Vec<Monastery>> {
    prop::collection::vec(monastery_strategy(), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .zip(1_u64..)
            .map(|(part, id)| build(id, part))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: ranking is a pure function of its input.
    #[test]
    fn ranking_is_deterministic(pois in pois_strategy()) {
        let ranker = Ranker::standard();
        let first: Vec<u64> = ranker.rank(&pois).iter().map(|r| r.poi.id).collect();
        let second: Vec<u64> = ranker.rank(&pois).iter().map(|r| r.poi.id).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: no later entry beats an earlier one on the comparator.
    #[test]
    fn ranked_entries_respect_comparator(pois in pois_strategy()) {
        let scorer = MarkerScorer::default();
        let ranked = Ranker::standard().rank(&pois);
        for pair in ranked.windows(2) {
            if let [a, b] = pair {
                let order = compare_candidates(
                    a.poi,
                    scorer.feature_score(a.poi),
                    b.poi,
                    scorer.feature_score(b.poi),
                );
                prop_assert_ne!(order, Ordering::Greater);
            }
        }
    }

    /// Property: priority buckets follow position regardless of ratings.
    #[test]
    fn priorities_follow_rank(pois in pois_strategy()) {
        for entry in Ranker::standard().rank(&pois) {
            let expected = match entry.rank {
                0 | 1 => Priority::High,
                2 | 3 => Priority::Medium,
                _ => Priority::Low,
            };
            prop_assert_eq!(entry.priority, expected);
        }
    }

    /// Property: the ranker never pads and never exceeds its limit.
    #[test]
    fn output_length_is_bounded(pois in pois_strategy(), limit in 0_usize..8) {
        let ranked = Ranker::standard().with_limit(limit).rank(&pois);
        prop_assert_eq!(ranked.len(), pois.len().min(limit));
    }
}
