//! Keyword heuristics used as the final ranking tie-breaker.
//!
//! A [`FeatureScorer`] turns a monastery's text fields into a small integer.
//! The default [`MarkerScorer`] awards fixed points when marker substrings
//! appear; matching is case-sensitive so "Cham dance" and "cham dance" are
//! different markers.

use monastery_core::Monastery;

/// Text field inspected by a [`FeatureMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerField {
    /// [`Monastery::name`].
    Name,
    /// [`Monastery::description`].
    Description,
    /// [`Monastery::location`].
    Location,
}

impl MarkerField {
    fn text(self, poi: &Monastery) -> &str {
        match self {
            Self::Name => &poi.name,
            Self::Description => &poi.description,
            Self::Location => &poi.location,
        }
    }
}

/// Points awarded once when any of `needles` occurs in `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureMarker {
    /// Field searched for the needles.
    pub field: MarkerField,
    /// Substrings that trigger the marker.
    pub needles: &'static [&'static str],
    /// Points added when the marker fires.
    pub points: u32,
}

impl FeatureMarker {
    /// Report whether the marker fires for `poi`.
    #[must_use]
    pub fn fires(&self, poi: &Monastery) -> bool {
        let text = self.field.text(poi);
        self.needles.iter().any(|needle| text.contains(needle))
    }
}

/// Historic sites, notable art, festivals, scenery and easy access.
pub const DEFAULT_MARKERS: &[FeatureMarker] = &[
    FeatureMarker {
        field: MarkerField::Name,
        needles: &["Dubdi", "Pemayangtse"],
        points: 3,
    },
    FeatureMarker {
        field: MarkerField::Description,
        needles: &["murals", "frescoes"],
        points: 2,
    },
    FeatureMarker {
        field: MarkerField::Description,
        needles: &["festival", "Cham dance"],
        points: 2,
    },
    FeatureMarker {
        field: MarkerField::Description,
        needles: &["view", "Himalayas", "Kanchenjunga"],
        points: 2,
    },
    FeatureMarker {
        field: MarkerField::Location,
        needles: &["Gangtok"],
        points: 1,
    },
];

/// Derive a heuristic feature score for a monastery.
///
/// Implementations must be pure: the same record always yields the same
/// score.
///
/// # Examples
///
/// ```rust
/// use monastery_core::Monastery;
/// use monastery_planner::FeatureScorer;
///
/// struct LengthScorer;
///
/// impl FeatureScorer for LengthScorer {
///     fn feature_score(&self, poi: &Monastery) -> u32 {
///         u32::try_from(poi.description.len()).unwrap_or(u32::MAX)
///     }
/// }
///
/// let poi = Monastery::new(1, "Enchey", "Gangtok", 4.7, "abc");
/// assert_eq!(LengthScorer.feature_score(&poi), 3);
/// ```
pub trait FeatureScorer {
    /// Return the feature score for `poi`.
    fn feature_score(&self, poi: &Monastery) -> u32;
}

/// Sums the points of every firing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerScorer {
    markers: &'static [FeatureMarker],
}

impl MarkerScorer {
    /// Build a scorer over a custom marker table.
    #[must_use]
    pub const fn new(markers: &'static [FeatureMarker]) -> Self {
        Self { markers }
    }

    /// The markers this scorer evaluates.
    #[must_use]
    pub const fn markers(&self) -> &'static [FeatureMarker] {
        self.markers
    }
}

impl Default for MarkerScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS)
    }
}

impl FeatureScorer for MarkerScorer {
    fn feature_score(&self, poi: &Monastery) -> u32 {
        self.markers
            .iter()
            .filter(|marker| marker.fires(poi))
            .map(|marker| marker.points)
            .sum()
    }
}

impl<S: FeatureScorer + ?Sized> FeatureScorer for &S {
    fn feature_score(&self, poi: &Monastery) -> u32 {
        (**self).feature_score(poi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn poi(name: &str, location: &str, description: &str) -> Monastery {
        Monastery::new(1, name, location, 4.5, description)
    }

    #[rstest]
    #[case("Dubdi Monastery", "Yuksom", "Oldest monastery.", 3)]
    #[case("Pemayangtse", "Pelling", "A view of Kanchenjunga.", 5)]
    #[case("Enchey", "Gangtok, Sikkim", "Cham dance festival and murals.", 5)]
    #[case("Phodong", "North Sikkim", "Ancient frescoes.", 2)]
    #[case("Lingdum", "Ranka", "Quiet retreat.", 0)]
    // Each marker counts once, however many of its needles appear.
    #[case("Ralang", "Ravangla", "view of the Himalayas and Kanchenjunga", 2)]
    // Matching is case-sensitive.
    #[case("Ralang", "gangtok", "FESTIVAL", 0)]
    fn default_marker_scores(
        #[case] name: &str,
        #[case] location: &str,
        #[case] description: &str,
        #[case] expected: u32,
    ) {
        let record = poi(name, location, description);
        assert_eq!(MarkerScorer::default().feature_score(&record), expected);
    }

    #[rstest]
    fn scoring_is_repeatable() {
        let record = poi("Pemayangtse", "Gangtok", "murals with a view");
        let scorer = MarkerScorer::default();
        let first = scorer.feature_score(&record);
        assert_eq!(first, scorer.feature_score(&record));
        assert_eq!(first, 3 + 2 + 2 + 1);
    }

    #[rstest]
    fn custom_marker_tables_are_honoured() {
        const ONLY_LAKES: &[FeatureMarker] = &[FeatureMarker {
            field: MarkerField::Description,
            needles: &["lake"],
            points: 7,
        }];
        let scorer = MarkerScorer::new(ONLY_LAKES);
        assert_eq!(scorer.feature_score(&poi("Tsomgo", "East", "sacred lake")), 7);
        assert_eq!(scorer.feature_score(&poi("Dubdi", "Yuksom", "")), 0);
    }
}
