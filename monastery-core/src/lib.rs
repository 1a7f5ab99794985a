//! Core domain types for the Monastery360 engine.
//!
//! The crate models the static content of the app (monasteries, festival
//! events and travel packages), offers the catalog search used by the
//! explore screen, and, behind the `serde` feature, loads the dataset from
//! JSON.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
#[cfg(feature = "serde")]
pub mod dataset;
mod event;
mod package;
pub mod poi;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError, RecordKind, SearchQuery, SearchResults};
#[cfg(feature = "serde")]
pub use dataset::{DatasetError, load_catalog, read_catalog};
pub use event::Event;
pub use package::TravelPackage;
pub use poi::{Coordinates, Monastery, Review};
