//! User records and where they live
//!
//! The session manager reads and writes [`UserRecord`]s through
//! [`SessionStore`]; it never touches files itself.

mod json;
mod memory;
mod record;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use record::{UserRecord, UserStats};

use crate::error::StoreError;
use crate::game::UserId;

/// Persistence for user records
///
/// Implementations are internally synchronized and shared by reference.
pub trait SessionStore: Send + Sync {
    /// Fetch a user's record, or a default one if the user is unknown
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self, user: UserId) -> Result<UserRecord, StoreError>;

    /// Replace a user's record
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&self, user: UserId, record: &UserRecord) -> Result<(), StoreError>;

    /// Push buffered changes to durable storage
    ///
    /// # Errors
    /// Returns [`StoreError`] if writing fails.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
