//! In-process store

use super::{SessionStore, UserRecord};
use crate::error::StoreError;
use crate::game::UserId;
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Keeps records in a map for the life of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<FxHashMap<UserId, UserRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored record
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, user: UserId) -> Result<UserRecord, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(&user).cloned().unwrap_or_default())
    }

    fn save(&self, user: UserId, record: &UserRecord) -> Result<(), StoreError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.insert(user, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_gets_default_record() {
        let store = MemoryStore::new();
        assert_eq!(store.load(7).unwrap(), UserRecord::default());
        assert!(store.is_empty());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let mut record = UserRecord::default();
        record.colorblind = true;
        record.stats.wins = 2;

        store.save(7, &record).unwrap();
        assert_eq!(store.load(7).unwrap(), record);
        assert_eq!(store.load(8).unwrap(), UserRecord::default());
        assert_eq!(store.len(), 1);
    }
}
