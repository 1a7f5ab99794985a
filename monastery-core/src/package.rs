//! Curated multi-destination travel packages.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bookable travel package covering several destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TravelPackage {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Destinations visited, in itinerary order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub destinations: Vec<String>,
    /// Longer description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Free-form categories such as "Spiritual" or "Trekking".
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Vec<String>,
    /// Itinerary length in days, when published.
    #[cfg_attr(feature = "serde", serde(default, rename = "duration"))]
    pub duration_days: Option<u32>,
    /// Price label as published.
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<String>,
}

impl TravelPackage {
    /// Construct a package with the given destinations and no categories.
    #[must_use]
    pub fn new<I, S>(id: u64, name: impl Into<String>, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            description: String::new(),
            category: Vec::new(),
            duration_days: None,
            price: None,
        }
    }

    /// Replace the category list, consuming `self` for chaining.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = categories.into_iter().map(Into::into).collect();
        self
    }
}
