//! The in-memory dataset of monasteries, events and travel packages.
//!
//! Search follows the explore screen's rules: the query is trimmed and
//! lowercased, an empty query matches everything, and every other query is a
//! case-insensitive substring test over each record's searchable text.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Event, Monastery, TravelPackage};

/// Static content shown by the application.
///
/// The catalog is read-only once loaded; rankers and search borrow from it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    /// Monastery points of interest.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monasteries: Vec<Monastery>,
    /// Festival and cultural events.
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
    /// Travel packages.
    #[cfg_attr(feature = "serde", serde(default))]
    pub packages: Vec<TravelPackage>,
}

/// Record kinds held by a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A [`Monastery`].
    Monastery,
    /// An [`Event`].
    Event,
    /// A [`TravelPackage`].
    Package,
}

impl RecordKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monastery => "monastery",
            Self::Event => "event",
            Self::Package => "package",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`Catalog::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Two records of the same kind share an identifier.
    #[error("duplicate {kind} id {id}")]
    DuplicateId {
        /// Kind of the clashing records.
        kind: RecordKind,
        /// Identifier seen more than once.
        id: u64,
    },
    /// A monastery rating is not finite or falls outside `0.0..=5.0`.
    #[error("monastery {id} has invalid rating {rating}")]
    InvalidRating {
        /// Identifier of the affected monastery.
        id: u64,
        /// Offending rating.
        rating: f32,
    },
}

/// Records matching a search query, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchResults<'a> {
    /// Matching monasteries.
    pub monasteries: Vec<&'a Monastery>,
    /// Matching events.
    pub events: Vec<&'a Event>,
    /// Matching packages.
    pub packages: Vec<&'a TravelPackage>,
}

impl SearchResults<'_> {
    /// Total number of matching records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monasteries.len() + self.events.len() + self.packages.len()
    }

    /// Report whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Normalised search text.
///
/// # Examples
/// ```
/// use monastery_core::SearchQuery;
///
/// let query = SearchQuery::new("  Rumtek ");
/// assert!(query.matches("Rumtek Monastery"));
/// assert!(query.matches("visit rumtek"));
/// assert!(SearchQuery::new("   ").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Trim and lowercase `raw`.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Report whether the query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test; an empty query matches any text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    fn matches_any<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        texts.iter().any(|text| self.matches(text.as_ref()))
    }

    fn matches_monastery(&self, poi: &Monastery) -> bool {
        self.matches(&poi.name) || self.matches(&poi.location) || self.matches(&poi.description)
    }

    fn matches_event(&self, event: &Event) -> bool {
        self.matches(&event.name)
            || self.matches(&event.location)
            || self.matches_any(&event.category)
            || self.matches_any(&event.highlights)
    }

    fn matches_package(&self, package: &TravelPackage) -> bool {
        self.matches(&package.name)
            || self.matches_any(&package.destinations)
            || self.matches(&package.description)
            || self.matches_any(&package.category)
    }
}

impl Catalog {
    /// Build a catalog from its three record lists.
    #[must_use]
    pub const fn new(
        monasteries: Vec<Monastery>,
        events: Vec<Event>,
        packages: Vec<TravelPackage>,
    ) -> Self {
        Self {
            monasteries,
            events,
            packages,
        }
    }

    /// Look up a monastery by identifier.
    #[must_use]
    pub fn monastery(&self, id: u64) -> Option<&Monastery> {
        self.monasteries.iter().find(|poi| poi.id == id)
    }

    /// Check identifier uniqueness per kind and monastery ratings.
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] encountered, checking monasteries
    /// before events and packages.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(poi) = self.monasteries.iter().find(|poi| !poi.has_valid_rating()) {
            return Err(CatalogError::InvalidRating {
                id: poi.id,
                rating: poi.rating,
            });
        }
        ensure_unique(RecordKind::Monastery, self.monasteries.iter().map(|m| m.id))?;
        ensure_unique(RecordKind::Event, self.events.iter().map(|e| e.id))?;
        ensure_unique(RecordKind::Package, self.packages.iter().map(|p| p.id))?;
        Ok(())
    }

    /// Return every record matching `query`.
    ///
    /// # Examples
    /// ```
    /// use monastery_core::{Catalog, Event, Monastery};
    ///
    /// let catalog = Catalog::new(
    ///     vec![Monastery::new(1, "Rumtek Monastery", "Gangtok, Sikkim", 4.9, "")],
    ///     vec![Event::new(1, "Losar Festival", "Gangtok").with_highlights(["Cham Dance"])],
    ///     Vec::new(),
    /// );
    ///
    /// assert_eq!(catalog.search("gangtok").len(), 2);
    /// assert_eq!(catalog.search("cham").events.len(), 1);
    /// ```
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let query = SearchQuery::new(query);
        SearchResults {
            monasteries: self
                .monasteries
                .iter()
                .filter(|poi| query.matches_monastery(poi))
                .collect(),
            events: self
                .events
                .iter()
                .filter(|event| query.matches_event(event))
                .collect(),
            packages: self
                .packages
                .iter()
                .filter(|package| query.matches_package(package))
                .collect(),
        }
    }
}

fn ensure_unique(kind: RecordKind, ids: impl Iterator<Item = u64>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}
