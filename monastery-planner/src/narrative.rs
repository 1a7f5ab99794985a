//! Display copy attached to ranked monasteries.
//!
//! The reason line is chosen by rank from a fixed set of templates. Travel
//! tip, best time and visit duration are drawn uniformly from fixed pools, so
//! repeated runs produce different copy unless the caller seeds the RNG.

use monastery_core::Monastery;
use rand::Rng;
use rand::seq::SliceRandom;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::ranking::{Priority, RankedPoi};

/// Practical advice shown under each recommendation.
pub const TRAVEL_TIPS: &[&str] = &[
    "Visit early morning for the best spiritual experience and fewer crowds",
    "Wear comfortable walking shoes as some areas require climbing",
    "Respect the monastery rules - remove shoes and maintain silence",
    "Bring a camera for stunning architectural photography",
    "Plan to spend at least 1-2 hours to fully appreciate the monastery",
    "Check for special ceremonies or festivals before visiting",
    "Dress modestly and cover your shoulders and knees",
    "Consider hiring a local guide for better cultural understanding",
];

/// Suggested visiting windows.
pub const BEST_TIMES: &[&str] = &[
    "Early morning (6-8 AM) for peaceful meditation",
    "Late afternoon (4-6 PM) for golden hour photography",
    "Morning hours (8-10 AM) for guided tours",
    "Evening (5-7 PM) for sunset views",
    "Weekday mornings for fewer crowds",
];

/// Suggested visit lengths.
pub const VISIT_DURATIONS: &[&str] = &[
    "1-2 hours for a complete visit",
    "2-3 hours including meditation time",
    "1 hour for a quick tour",
    "3-4 hours for photography and exploration",
    "2 hours for guided experience",
];

/// A ranked monastery with its display copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Recommendation {
    /// The recommended monastery.
    pub monastery: Monastery,
    /// Zero-based position in the ranking.
    pub rank: usize,
    /// Bucket derived from `rank`.
    pub priority: Priority,
    /// Why the monastery made the list.
    pub reason: String,
    /// Practical advice.
    pub travel_tip: &'static str,
    /// Suggested visiting window.
    pub best_time: &'static str,
    /// Suggested visit length.
    pub duration: &'static str,
}

impl Recommendation {
    /// Decorate a ranked entry, drawing the random copy from `rng`.
    pub fn from_ranked<R: Rng + ?Sized>(ranked: &RankedPoi<'_>, rng: &mut R) -> Self {
        Self {
            monastery: ranked.poi.clone(),
            rank: ranked.rank,
            priority: ranked.priority,
            reason: reason_for(ranked.poi, ranked.rank),
            travel_tip: pick(TRAVEL_TIPS, rng),
            best_time: pick(BEST_TIMES, rng),
            duration: pick(VISIT_DURATIONS, rng),
        }
    }
}

fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Build the reason line for the monastery at `rank`.
///
/// Ranks past the template set reuse the first template.
///
/// # Examples
/// ```
/// use monastery_core::Monastery;
/// use monastery_planner::reason_for;
///
/// let poi = Monastery::new(1, "Rumtek", "Gangtok", 4.94, "Seat of the Karmapa, Gangtok");
/// assert_eq!(
///     reason_for(&poi, 1),
///     "Highly recommended for its seat of the karmapa"
/// );
/// ```
#[must_use]
pub fn reason_for(poi: &Monastery, rank: usize) -> String {
    let words: Vec<&str> = poi.description.split(' ').collect();
    match rank {
        1 => {
            let clause = poi.description.split(',').next().unwrap_or_default();
            format!("Highly recommended for its {}", clause.to_lowercase())
        }
        2 => {
            let lead = words.iter().take(3).copied().collect::<Vec<_>>().join(" ");
            format!("Perfect blend of {}", lead.to_lowercase())
        }
        3 => {
            let tail_start = words.len().saturating_sub(3);
            let tail = words
                .iter()
                .skip(tail_start)
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            format!("Must-visit for {}", tail.to_lowercase())
        }
        4 => {
            let first = words.first().copied().unwrap_or_default();
            format!("Outstanding {} experience", first.to_lowercase())
        }
        _ => format!(
            "Top-rated monastery with {} stars and exceptional spiritual atmosphere",
            poi.rating
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ranker;
    use monastery_core::test_support::sikkim_catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn enchey() -> Monastery {
        Monastery::new(
            5,
            "Enchey Monastery",
            "Gangtok, Sikkim",
            4.7,
            "Known for the annual Cham dance festival",
        )
    }

    #[rstest]
    #[case(0, "Top-rated monastery with 4.7 stars and exceptional spiritual atmosphere")]
    #[case(1, "Highly recommended for its known for the annual cham dance festival")]
    #[case(2, "Perfect blend of known for the")]
    #[case(3, "Must-visit for cham dance festival")]
    #[case(4, "Outstanding known experience")]
    #[case(7, "Top-rated monastery with 4.7 stars and exceptional spiritual atmosphere")]
    fn reason_templates_follow_rank(#[case] rank: usize, #[case] expected: &str) {
        assert_eq!(reason_for(&enchey(), rank), expected);
    }

    #[rstest]
    fn short_descriptions_do_not_panic() {
        let poi = Monastery::new(1, "Bare", "Sikkim", 3.0, "");
        let reasons: Vec<String> = (0..6).map(|rank| reason_for(&poi, rank)).collect();
        assert!(reasons.iter().all(|reason| !reason.is_empty()));
        assert_eq!(reason_for(&poi, 3), "Must-visit for ");
    }

    #[rstest]
    fn decoration_draws_from_fixed_pools() {
        let catalog = sikkim_catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for ranked in Ranker::standard().rank(&catalog.monasteries) {
            let rec = Recommendation::from_ranked(&ranked, &mut rng);
            assert!(TRAVEL_TIPS.contains(&rec.travel_tip));
            assert!(BEST_TIMES.contains(&rec.best_time));
            assert!(VISIT_DURATIONS.contains(&rec.duration));
            assert_eq!(rec.priority, ranked.priority);
            assert_eq!(rec.monastery.id, ranked.poi.id);
        }
    }

    #[rstest]
    fn seeded_rngs_reproduce_copy() {
        let catalog = sikkim_catalog();
        let ranked = Ranker::standard().rank(&catalog.monasteries);
        let decorate = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            ranked
                .iter()
                .map(|r| Recommendation::from_ranked(r, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(decorate(42), decorate(42));
    }
}
