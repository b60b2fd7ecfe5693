//! redb-based local key-value storage
//!
//! The menu keeps its state the way a browser page keeps it in per-origin
//! local storage: a flat map of string keys to JSON strings. Each collection
//! is read and written wholesale under its own key.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `local_storage` | storage key | JSON string | One entry per collection |
//!
//! # Keys
//!
//! | Key | Collection |
//! |-----|------------|
//! | [`CATALOG_KEY`] | dish catalog |
//! | [`CART_KEY`] | cart lines |

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use shared::AppError;

/// Table for all stored collections: key = storage key, value = JSON text
const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Storage key of the dish catalog
pub const CATALOG_KEY: &str = "hotel-dishes";
/// Storage key of the cart
pub const CART_KEY: &str = "cart";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Local storage failure");
        AppError::database(err.to_string())
    }
}

/// Per-origin style key-value storage
///
/// Values are whole JSON documents. There is no partial update: callers read
/// a collection, change it in memory and write it back.
pub trait LocalStorage {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the value stored under `key`; deleting a missing key is a no-op
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Local storage backed by redb
///
/// Cloning is cheap and every clone shares the same database, so the catalog
/// and the cart can each hold a handle.
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage").finish_non_exhaustive()
    }
}

impl RedbStorage {
    /// Open or create the database at the given path
    ///
    /// Commits are durable as soon as `commit()` returns.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, throwaway sessions)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Keys currently holding a value
    pub fn keys(&self) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

impl LocalStorage for RedbStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Decode a stored JSON collection
///
/// Absent and malformed values both come back as `None`; the caller decides
/// the fallback. A malformed value is logged, never surfaced as an error.
pub(crate) fn read_json<T, S>(storage: &S, key: &str) -> StorageResult<Option<T>>
where
    T: serde::de::DeserializeOwned,
    S: LocalStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Stored value is not valid JSON, using default");
            Ok(None)
        }
    }
}

/// Encode a collection and overwrite the stored value
pub(crate) fn write_json<T, S>(storage: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: serde::Serialize + ?Sized,
    S: LocalStorage + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = RedbStorage::open_in_memory().unwrap();
        assert_eq!(storage.get_item(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = RedbStorage::open_in_memory().unwrap();
        storage.set_item(CART_KEY, "[]").unwrap();
        storage.set_item(CART_KEY, "[1]").unwrap();
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_remove_item() {
        let storage = RedbStorage::open_in_memory().unwrap();
        storage.set_item(CATALOG_KEY, "[]").unwrap();
        storage.remove_item(CATALOG_KEY).unwrap();
        assert_eq!(storage.get_item(CATALOG_KEY).unwrap(), None);
        // Removing again is a no-op
        storage.remove_item(CATALOG_KEY).unwrap();
    }

    #[test]
    fn test_clones_share_database() {
        let storage = RedbStorage::open_in_memory().unwrap();
        let other = storage.clone();
        storage.set_item(CART_KEY, "[]").unwrap();
        assert_eq!(other.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let storage = RedbStorage::open_in_memory().unwrap();
        storage.set_item(CATALOG_KEY, "[]").unwrap();
        storage.set_item(CART_KEY, "[]").unwrap();
        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec![CART_KEY.to_string(), CATALOG_KEY.to_string()]);
    }

    #[test]
    fn test_read_json_malformed_is_none() {
        let storage = RedbStorage::open_in_memory().unwrap();
        storage.set_item(CART_KEY, "{not json").unwrap();
        let value: Option<Vec<u32>> = read_json(&storage, CART_KEY).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_file_backed_persists_across_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.redb");
        {
            let storage = RedbStorage::open(&path).unwrap();
            write_json(&storage, CART_KEY, &vec![1, 2, 3]).unwrap();
        }
        let storage = RedbStorage::open(&path).unwrap();
        let value: Option<Vec<u32>> = read_json(&storage, CART_KEY).unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }
}
