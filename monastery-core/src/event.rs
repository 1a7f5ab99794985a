//! Festival and cultural event listings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scheduled festival or cultural event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Event {
    /// Unique identifier.
    pub id: u64,
    /// Display name, e.g. "Losar Festival".
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Free-form categories such as "Festival" or "Religious".
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Vec<String>,
    /// Date label as published, e.g. "February 10-12, 2024".
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: String,
    /// Length of the event in days.
    #[cfg_attr(feature = "serde", serde(default, rename = "duration"))]
    pub duration_days: u32,
    /// Event type label, e.g. "Annual Festival".
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: String,
    /// Longer description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Programme highlights.
    #[cfg_attr(feature = "serde", serde(default))]
    pub highlights: Vec<String>,
    /// Ticket price label; `None` when unpublished.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ticket_price: Option<String>,
    /// Venue description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub venue: Option<String>,
}

impl Event {
    /// Construct an event with empty optional fields.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            category: Vec::new(),
            date: String::new(),
            duration_days: 0,
            kind: String::new(),
            description: String::new(),
            highlights: Vec::new(),
            ticket_price: None,
            venue: None,
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

    /// Replace the highlight list, consuming `self` for chaining.
    #[must_use]
    pub fn with_highlights<I, S>(mut self, highlights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.highlights = highlights.into_iter().map(Into::into).collect();
        self
    }
}
