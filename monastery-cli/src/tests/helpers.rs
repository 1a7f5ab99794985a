//! Test helpers for writing datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Three monasteries, one event and one package. Ratings alone fix the
/// recommendation order: 2, 1, 3.
pub(super) const DATASET_JSON: &str = r#"{
  "monasteries": [
    {
      "id": 1,
      "name": "Enchey Monastery",
      "location": "Gangtok, Sikkim",
      "rating": 4.1,
      "description": "Quiet retreat above the town"
    },
    {
      "id": 2,
      "name": "Rumtek Monastery",
      "location": "Rumtek, Sikkim",
      "rating": 4.8,
      "description": "Seat of the Karmapa, hilltop views",
      "reviews": [
        { "name": "Priya", "time": "3 weeks ago", "review": "Grand architecture." }
      ]
    },
    {
      "id": 3,
      "name": "Lingdum Monastery",
      "location": "Ranka, Sikkim",
      "rating": 3.9,
      "description": "Old murals"
    }
  ],
  "events": [
    { "id": 1, "name": "Losar Festival", "location": "Gangtok, Sikkim", "category": ["Festival"] }
  ],
  "packages": [
    { "id": 1, "name": "Monastery Circuit", "destinations": ["Gangtok", "Pelling"] }
  ]
}
"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// Temporary directory holding `dataset.json`.
#[derive(Debug)]
pub(super) struct DatasetWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    dataset: Utf8PathBuf,
}

impl DatasetWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let dataset = root.join("dataset.json");
        write_utf8(&dataset, DATASET_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            dataset,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn dataset(&self) -> &Utf8Path {
        &self.dataset
    }
}

pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
