//! Deterministic ordering of monasteries for the travel planner.
//!
//! Candidates are ordered by rating, then review count, then feature score,
//! all descending. The sort is stable so full ties keep dataset order.
//! Priorities are assigned from the final position alone.

use std::cmp::Ordering;

use monastery_core::Monastery;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::features::{FeatureScorer, MarkerScorer};

/// Number of recommendations produced when no limit is configured.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Display bucket derived from a recommendation's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Ranks 0 and 1.
    High,
    /// Ranks 2 and 3.
    Medium,
    /// Every later rank.
    Low,
}

impl Priority {
    /// Bucket a zero-based rank.
    ///
    /// # Examples
    /// ```
    /// use monastery_planner::Priority;
    ///
    /// assert_eq!(Priority::for_rank(1), Priority::High);
    /// assert_eq!(Priority::for_rank(3), Priority::Medium);
    /// assert_eq!(Priority::for_rank(4), Priority::Low);
    /// ```
    #[must_use]
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            0 | 1 => Self::High,
            2 | 3 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Return the priority as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monastery with its position in the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPoi<'a> {
    /// The ranked record.
    pub poi: &'a Monastery,
    /// Zero-based position.
    pub rank: usize,
    /// Bucket derived from `rank`.
    pub priority: Priority,
    /// Tie-break score computed for the record.
    pub feature_score: u32,
}

/// Ratings that are not finite sort after every real rating.
fn sortable_rating(rating: f32) -> f32 {
    if rating.is_finite() {
        rating
    } else {
        f32::NEG_INFINITY
    }
}

/// Compare two candidates, best first.
///
/// `a_features` and `b_features` are the pre-computed feature scores of `a`
/// and `b`; they are only consulted when rating and review count tie.
#[must_use]
pub fn compare_candidates(
    a: &Monastery,
    a_features: u32,
    b: &Monastery,
    b_features: u32,
) -> Ordering {
    sortable_rating(b.rating)
        .total_cmp(&sortable_rating(a.rating))
        .then_with(|| b.review_count().cmp(&a.review_count()))
        .then_with(|| b_features.cmp(&a_features))
}

/// Orders monasteries and keeps the best `limit`.
///
/// # Examples
/// ```
/// use monastery_core::{Monastery, Review};
/// use monastery_planner::Ranker;
///
/// let review = || Review::new("Visitor", "today", "Lovely.");
/// let pois = vec![
///     Monastery::new(1, "A", "Sikkim", 4.9, "").with_reviews(vec![review(); 2]),
///     Monastery::new(2, "B", "Sikkim", 4.9, "").with_reviews(vec![review(); 5]),
///     Monastery::new(3, "C", "Sikkim", 4.95, ""),
/// ];
///
/// let order: Vec<u64> = Ranker::standard().rank(&pois).iter().map(|r| r.poi.id).collect();
/// assert_eq!(order, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = MarkerScorer> {
    scorer: S,
    limit: usize,
}

impl Ranker<MarkerScorer> {
    /// Ranker over [`DEFAULT_MARKERS`](crate::DEFAULT_MARKERS) keeping
    /// [`DEFAULT_RECOMMENDATION_LIMIT`] entries.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MarkerScorer::default(), DEFAULT_RECOMMENDATION_LIMIT)
    }
}

impl Default for Ranker<MarkerScorer> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: FeatureScorer> Ranker<S> {
    /// Build a ranker using `scorer` for tie-breaks, keeping `limit` entries.
    #[must_use]
    pub const fn new(scorer: S, limit: usize) -> Self {
        Self { scorer, limit }
    }

    /// Maximum number of ranked entries returned.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Return a copy of this ranker keeping `limit` entries.
    #[must_use]
    pub fn with_limit(self, limit: usize) -> Self {
        Self { limit, ..self }
    }

    /// Sort `pois` and return the leading `limit` entries.
    ///
    /// Fewer candidates than the limit yields all of them; an empty slice
    /// yields an empty ranking.
    #[must_use]
    pub fn rank<'a>(&self, pois: &'a [Monastery]) -> Vec<RankedPoi<'a>> {
        let mut scored: Vec<(&'a Monastery, u32)> = pois
            .iter()
            .map(|poi| (poi, self.scorer.feature_score(poi)))
            .collect();
        scored.sort_by(|(a, a_features), (b, b_features)| {
            compare_candidates(a, *a_features, b, *b_features)
        });
        scored
            .into_iter()
            .take(self.limit)
            .enumerate()
            .map(|(rank, (poi, feature_score))| RankedPoi {
                poi,
                rank,
                priority: Priority::for_rank(rank),
                feature_score,
            })
            .collect()
    }
}
