//! Domain-Status Preset Layer
//!
//! This crate owns the mutable half of the domain-status system: the
//! currently active [`Ruleset`](ds_core::Ruleset) snapshot, the reload path
//! that replaces it from a backing store, and the public facade callers use
//! to classify pages.
//!
//! The embedded default ruleset is compiled into the binary and installed
//! synchronously at construction, so the facade is usable from the first
//! call. A replacement ruleset downloaded in a previous run can be
//! re-applied over the default at startup, and on demand thereafter; the
//! swap is a single atomic pointer store, so concurrent readers always see
//! a complete ruleset, old or new, never a mix.
//!
//! # Modules
//!
//! - `store`: the swappable snapshot holder and the embedded default
//! - `db`: backing-store and settings-store interface traits
//! - `service`: the reload coordinator and public API facade

pub mod db;
pub mod service;
pub mod store;

pub use db::{Database, SettingsStore, StoreError, DOMAINS_KEY, LAST_UPDATED_KEY};
pub use service::PresetService;
pub use store::PresetStore;
