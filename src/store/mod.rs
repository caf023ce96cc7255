//! Agency record store: flat JSON datasets on disk.
//!
//! A dataset is a JSON array of agency records, held in a single file or
//! split across several `*.json` files under one directory.

pub mod error;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::domain::{Agency, AgencyIndex};

pub use error::{StoreError, StoreResult};

/// Load records from a file or from a directory of files.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> StoreResult<Vec<Agency>> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Load records and reject datasets with colliding ids.
///
/// Classification and tree building tolerate duplicates on their own (first
/// record wins); this stricter entry point is for surfaces that should tell
/// the user their dataset is broken instead of silently picking a winner.
pub fn load_checked(path: &Path) -> StoreResult<Vec<Agency>> {
    let agencies = load(path)?;
    AgencyIndex::new(&agencies)?;
    Ok(agencies)
}

/// Load one JSON dataset file.
#[instrument(level = "debug")]
pub fn load_file(path: &Path) -> StoreResult<Vec<Agency>> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let agencies: Vec<Agency> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), count = agencies.len(), "loaded dataset");
    Ok(agencies)
}

/// Merge every `*.json` file under the directory.
///
/// Files merge in sorted path order so record order, and with it sibling
/// order in the built forest, is deterministic across platforms.
#[instrument(level = "debug")]
pub fn load_dir(dir: &Path) -> StoreResult<Vec<Agency>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| StoreError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && entry.path().extension() == Some(OsStr::new("json")) {
            files.push(entry.into_path());
        }
    }
    if files.is_empty() {
        return Err(StoreError::EmptyScan(dir.to_path_buf()));
    }
    files.sort();

    let mut agencies = Vec::new();
    for file in &files {
        agencies.extend(load_file(file)?);
    }
    Ok(agencies)
}
