use super::{CountryRecord, DatasetError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Process-scoped dataset cache keyed by file path.
///
/// Source files are treated as immutable for the lifetime of a session, so
/// entries are populated once and never invalidated. Every caller sees the
/// same shared, read-only snapshot.
#[derive(Default, Clone)]
pub struct DatasetCache {
    entries: Arc<Mutex<HashMap<PathBuf, Arc<Vec<CountryRecord>>>>>,
}

impl DatasetCache {
    /// Return the cached records for `path`, loading them on first access.
    pub fn get_or_load<P: AsRef<Path>>(
        &self,
        path: P,
        year: i32,
    ) -> Result<Arc<Vec<CountryRecord>>, DatasetError> {
        let path = path.as_ref();
        let mut guard = self.entries.lock().expect("dataset cache mutex poisoned");
        if let Some(records) = guard.get(path) {
            return Ok(Arc::clone(records));
        }

        let records = Arc::new(super::load(path, year)?);
        guard.insert(path.to_path_buf(), Arc::clone(&records));
        Ok(records)
    }
}
