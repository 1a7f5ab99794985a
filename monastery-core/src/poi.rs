//! Monastery records shown on the map and ranked by the travel planner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A visitor review attached to a monastery.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Review {
    /// Display name of the reviewer.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub author: String,
    /// Free-form age of the review, e.g. "2 weeks ago".
    pub time: String,
    /// Review body.
    #[cfg_attr(feature = "serde", serde(rename = "review"))]
    pub text: String,
}

impl Review {
    /// Build a review from its parts.
    #[must_use]
    pub fn new(author: impl Into<String>, time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            time: time.into(),
            text: text.into(),
        }
    }
}

/// Map position of a monastery marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
}

/// A monastery point of interest.
///
/// The text fields feed the planner's keyword heuristics; `rating` is
/// conventionally within `0.0..=5.0`.
///
/// # Examples
/// ```
/// use monastery_core::{Monastery, Review};
///
/// let rumtek = Monastery::new(2, "Rumtek Monastery", "Gangtok, Sikkim", 4.94, "Seat of the Karmapa.")
///     .with_reviews(vec![Review::new("Priya", "3 weeks ago", "Grand architecture.")]);
///
/// assert_eq!(rumtek.review_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monastery {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Human-readable location, e.g. "Gangtok, Sikkim".
    pub location: String,
    /// Average visitor rating.
    pub rating: f32,
    /// Short description used for display and feature scoring.
    pub description: String,
    /// Optional cover image URL.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Optional map marker position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coordinates: Option<Coordinates>,
    /// Visitor reviews; absent lists deserialise as empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: Vec<Review>,
}

impl Monastery {
    /// Construct a monastery without reviews, image or coordinates.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: impl Into<String>,
        rating: f32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            rating,
            description: description.into(),
            image: None,
            coordinates: None,
            reviews: Vec::new(),
        }
    }

    /// Replace the review list, consuming `self` for chaining.
    #[must_use]
    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Attach a map position, consuming `self` for chaining.
    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Number of reviews attached to the record.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Report whether the rating is finite and within `0.0..=5.0`.
    #[must_use]
    pub fn has_valid_rating(&self) -> bool {
        self.rating.is_finite() && (0.0_f32..=5.0_f32).contains(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn review_count_tracks_reviews() {
        let poi = Monastery::new(1, "Dubdi Monastery", "Yuksom", 4.8, "Oldest monastery.")
            .with_reviews(vec![
                Review::new("A", "1 day ago", "Quiet."),
                Review::new("B", "2 days ago", "Steep climb."),
            ]);
        assert_eq!(poi.review_count(), 2);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(5.0, true)]
    #[case(4.98, true)]
    #[case(-0.1, false)]
    #[case(5.1, false)]
    #[case(f32::NAN, false)]
    #[case(f32::INFINITY, false)]
    fn rating_validity(#[case] rating: f32, #[case] expected: bool) {
        let poi = Monastery::new(1, "Enchey", "Gangtok", rating, "");
        assert_eq!(poi.has_valid_rating(), expected);
    }
}
