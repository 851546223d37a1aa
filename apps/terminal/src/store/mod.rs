//! Local key-value store backing the personal vocabulary.

pub mod error;
pub mod schema;
pub mod sqlite;

use std::future::Future;

pub use error::StoreError;
pub use sqlite::SqliteStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Opaque asynchronous get/set-by-key storage.
///
/// Values are whole documents; a `set` replaces whatever was stored under
/// the key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}
