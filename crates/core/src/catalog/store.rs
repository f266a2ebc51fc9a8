use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::warn;

use crate::models::GameRecord;

/// Errors raised while loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}")]
    Read {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a valid JSON array of records.
    #[error("failed to parse catalog {path}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Thread-safe store holding the catalog loaded from a static JSON file.
///
/// The file is read once on first use; the record list is read-only for
/// the rest of the process lifetime.
pub struct CatalogStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    source: PathBuf,
    cache: Option<Vec<GameRecord>>,
}

impl CatalogStore {
    /// Build a new store backed by the given JSON file.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                source: source.into(),
                cache: None,
            })),
        }
    }

    /// Path of the backing catalog file.
    pub fn source(&self) -> PathBuf {
        self.inner.read().source.clone()
    }

    /// Return all records in catalog order, reading the file on first use.
    pub fn records(&self) -> Result<Vec<GameRecord>, CatalogError> {
        let mut inner = self.inner.write();
        if inner.cache.is_none() {
            inner.cache = Some(load_records(&inner.source)?);
        }
        Ok(inner.cache.clone().unwrap_or_default())
    }
}

fn load_records(path: &Path) -> Result<Vec<GameRecord>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<GameRecord> =
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Name and description are mandatory; entries missing either are
    // skipped rather than failing the whole file.
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if record.name.trim().is_empty() || record.description.trim().is_empty() {
            warn!(year = record.year, "Skipping catalog entry without name or description");
            continue;
        }
        kept.push(record);
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_records_in_file_order() -> Result<(), CatalogError> {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("games.json");
        fs::write(
            &path,
            r#"[
  {"name": "RPG Quest", "year": 2020, "description": "A sweeping rpg epic.", "link": "https://example.com/rpg", "slug": "rpg-quest"},
  {"name": "Old Game", "year": 2010, "description": "A classic platformer.", "link": "https://example.com/old"},
  {"name": "New Hit", "year": 2024, "description": "Fresh action hit.", "link": "https://example.com/new", "slug": "new-hit"}
]"#,
        )
        .expect("write fixture");

        let store = CatalogStore::new(&path);
        let records = store.records()?;
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "RPG Quest");
        assert_eq!(records[1].slug, None);
        assert_eq!(records[2].year, 2024);

        // Second read is served from cache.
        fs::remove_file(&path).expect("remove fixture");
        let again = store.records()?;
        assert_eq!(again.len(), 3);
        Ok(())
    }

    #[test]
    fn skips_entries_missing_required_fields() -> Result<(), CatalogError> {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("games.json");
        fs::write(
            &path,
            r#"[
  {"name": "  ", "year": 2021, "description": "Nameless.", "link": ""},
  {"name": "Kept", "year": 2021, "description": "Still here.", "link": ""}
]"#,
        )
        .expect("write fixture");

        let records = CatalogStore::new(&path).records()?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Kept");
        Ok(())
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("games.json");
        fs::write(&path, "{ not json ]").expect("write fixture");

        let err = CatalogStore::new(&path).records().unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = tempdir().expect("tempdir");
        let err = CatalogStore::new(temp.path().join("absent.json"))
            .records()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
