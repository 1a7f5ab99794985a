//! Load a [`Catalog`] from a JSON document.
//!
//! The document mirrors the mock data shipped with the mobile app:
//!
//! ```json
//! {
//!   "monasteries": [
//!     {
//!       "id": 2,
//!       "name": "Rumtek Monastery",
//!       "location": "Gangtok, Sikkim",
//!       "rating": 4.94,
//!       "description": "Seat of the Karmapa.",
//!       "reviews": [{ "name": "Priya", "time": "3 weeks ago", "review": "Grand." }]
//!     }
//!   ],
//!   "events": [],
//!   "packages": []
//! }
//! ```
//!
//! Every list is optional and defaults to empty.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use thiserror::Error;

use crate::{Catalog, CatalogError};

/// Errors raised while loading a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Opening the dataset file failed.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid dataset JSON.
    #[error("failed to parse dataset at {path}")]
    Parse {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but its records are inconsistent.
    #[error("dataset at {path} is invalid")]
    Invalid {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: CatalogError,
    },
}

/// Open, parse and validate the dataset at `path`.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened,
/// [`DatasetError::Parse`] for malformed JSON and [`DatasetError::Invalid`]
/// when [`Catalog::validate`] rejects the records.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, DatasetError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        DatasetError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let catalog = read_catalog(BufReader::new(file), path)?;
    debug!(
        "loaded {} monasteries, {} events and {} packages from {path}",
        catalog.monasteries.len(),
        catalog.events.len(),
        catalog.packages.len()
    );
    Ok(catalog)
}

/// Parse and validate a dataset from any reader.
///
/// `origin` is only used to label errors.
///
/// # Errors
/// Returns [`DatasetError::Parse`] or [`DatasetError::Invalid`].
pub fn read_catalog<R: Read>(reader: R, origin: &Utf8Path) -> Result<Catalog, DatasetError> {
    let catalog: Catalog =
        serde_json::from_reader(reader).map_err(|source| DatasetError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    catalog.validate().map_err(|source| DatasetError::Invalid {
        path: origin.to_path_buf(),
        source,
    })?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordKind;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "monasteries": [
            {
                "id": 1,
                "name": "Tashiding Monastery",
                "location": "Gyalshing, Sikkim",
                "rating": 4.98,
                "description": "Sacred monastery on a hilltop.",
                "coordinates": { "latitude": 27.3083, "longitude": 88.2981 },
                "reviews": [
                    { "name": "Anjali Sharma", "time": "2 weeks ago", "review": "Serene." }
                ]
            }
        ],
        "events": [
            {
                "id": 1,
                "name": "Losar Festival",
                "location": "Gangtok, Sikkim",
                "category": ["Festival"],
                "duration": 3,
                "type": "Annual Festival",
                "ticketPrice": "Free"
            }
        ]
    }"#;

    fn origin() -> &'static Utf8Path {
        Utf8Path::new("inline.json")
    }

    #[rstest]
    fn parses_camel_case_field_names() {
        let catalog = read_catalog(SAMPLE.as_bytes(), origin()).expect("parse sample");
        let poi = catalog.monastery(1).expect("monastery 1");
        assert_eq!(poi.review_count(), 1);
        assert_eq!(poi.reviews.first().map(|r| r.author.as_str()), Some("Anjali Sharma"));
        let event = catalog.events.first().expect("event");
        assert_eq!(event.duration_days, 3);
        assert_eq!(event.kind, "Annual Festival");
        assert_eq!(event.ticket_price.as_deref(), Some("Free"));
        assert!(catalog.packages.is_empty());
    }

    #[rstest]
    fn malformed_json_is_a_parse_error() {
        let err = read_catalog("{ not json".as_bytes(), origin()).expect_err("should fail");
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[rstest]
    fn duplicate_ids_are_rejected() {
        let doc = r#"{ "packages": [
            { "id": 4, "name": "A" },
            { "id": 4, "name": "B" }
        ] }"#;
        let err = read_catalog(doc.as_bytes(), origin()).expect_err("should fail");
        match err {
            DatasetError::Invalid { source, .. } => assert_eq!(
                source,
                CatalogError::DuplicateId {
                    kind: RecordKind::Package,
                    id: 4,
                }
            ),
            other => panic!("expected Invalid, found {other:?}"),
        }
    }

    #[rstest]
    fn loads_from_disk() {
        let tmp = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("catalog.json")).expect("utf8 path");
        fs::write(path.as_std_path(), SAMPLE).expect("write dataset");
        let catalog = load_catalog(&path).expect("load dataset");
        assert_eq!(catalog.monasteries.len(), 1);
    }

    #[rstest]
    fn missing_file_is_an_open_error() {
        let tmp = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("absent.json")).expect("utf8 path");
        let err = load_catalog(&path).expect_err("should fail");
        match err {
            DatasetError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Open, found {other:?}"),
        }
    }
}
