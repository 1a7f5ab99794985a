//! Input file checks shared by the dataset-driven commands.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use monastery_core::{Catalog, load_catalog};

use crate::CliError;

/// Report whether `path` names a regular file.
///
/// The parent directory is opened through cap-std so the lookup stays
/// confined to it.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Fail unless `path` is an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Check `path` and load the catalog it holds.
pub(crate) fn open_dataset(path: &Utf8Path, field: &'static str) -> Result<Catalog, CliError> {
    require_existing(path, field)?;
    Ok(load_catalog(path)?)
}
