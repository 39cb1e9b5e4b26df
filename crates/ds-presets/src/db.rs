//! Interfaces to the backing stores.
//!
//! The preset layer never talks to storage directly; it goes through two
//! narrow async traits so the host application can plug in whatever
//! persistence it uses. Both are read-only from this crate's point of
//! view: persisting downloaded rulesets and bumping the last-updated
//! marker belong to an external updater.

use async_trait::async_trait;
use thiserror::Error;

/// Key under which a downloaded replacement ruleset is persisted.
pub const DOMAINS_KEY: &str = "domains";

/// Settings key holding the timestamp of the last successful ruleset
/// download, or 0 if none ever happened.
pub const LAST_UPDATED_KEY: &str = "domains.lastUpdated";

/// Error type for backing-store reads and ruleset decoding.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the read.
    #[error("backing store read failed: {0}")]
    Read(String),
    /// The stored value did not decode as a ruleset.
    #[error("stored ruleset is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Async key-value store holding persisted ruleset updates.
#[async_trait]
pub trait Database: Send + Sync {
    /// Fetch the value stored under `key`. `Ok(None)` means nothing is
    /// stored there, which callers treat as "no update available".
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;
}

/// Async settings store, read once at startup.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Fetch a numeric setting, falling back to `default` when the key is
    /// absent or unreadable.
    async fn get_number(&self, key: &str, default: u64) -> u64;
}
