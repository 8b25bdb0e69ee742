//! JSON file store
//!
//! The whole database is one JSON object keyed by user id. Saves only mark the
//! store dirty; [`SessionStore::flush`] writes the file.

use super::{SessionStore, UserRecord};
use crate::error::StoreError;
use crate::game::UserId;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct Contents {
    records: BTreeMap<String, UserRecord>,
    dirty: bool,
}

/// User records backed by a single JSON file
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    contents: Mutex<Contents>,
}

impl JsonStore {
    /// Open the database at `path`
    ///
    /// A missing or empty file opens as an empty database; it is created on
    /// the first flush that has something to write.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(users = records.len(), "Opened user database");

        Ok(Self {
            path,
            contents: Mutex::new(Contents {
                records,
                dirty: false,
            }),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if there are saved changes not yet flushed
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Contents> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for JsonStore {
    fn load(&self, user: UserId) -> Result<UserRecord, StoreError> {
        Ok(self
            .lock()
            .records
            .get(&user.to_string())
            .cloned()
            .unwrap_or_default())
    }

    fn save(&self, user: UserId, record: &UserRecord) -> Result<(), StoreError> {
        let mut contents = self.lock();
        contents.records.insert(user.to_string(), record.clone());
        contents.dirty = true;
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn flush(&self) -> Result<(), StoreError> {
        let mut contents = self.lock();
        if !contents.dirty {
            return Ok(());
        }

        // Serialize fully before touching the file
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        contents.records.serialize(&mut ser)?;

        fs::write(&self.path, buf)?;
        contents.dirty = false;
        debug!(users = contents.records.len(), "Wrote user database");
        Ok(())
    }
}
