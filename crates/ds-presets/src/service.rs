//! Reload coordination and the public facade.
//!
//! [`PresetService`] is the entry point the rest of the application uses:
//! classification queries on the current snapshot, plus the refresh path
//! that pulls a replacement ruleset out of the backing store and swaps it
//! in. A failed or empty refresh never degrades the service; the previous
//! ruleset simply stays authoritative.

use std::sync::Arc;

use ds_core::{resolve, ParseError, Ruleset, RulesetData, Status, StatusQuery};

use crate::db::{Database, SettingsStore, StoreError, DOMAINS_KEY, LAST_UPDATED_KEY};
use crate::store::PresetStore;

/// Facade over the preset store and the reload coordinator.
pub struct PresetService {
    store: PresetStore,
    db: Arc<dyn Database>,
}

impl PresetService {
    /// Create a service seeded with the embedded default ruleset. Usable
    /// immediately; no I/O happens here.
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self {
            store: PresetStore::with_builtin(),
            db,
        }
    }

    /// One-time startup check: if a ruleset was downloaded in a previous
    /// run (last-updated marker > 0), re-apply it over the embedded
    /// default with a single refresh. Does not schedule anything periodic.
    pub async fn load_persisted(&self, settings: &dyn SettingsStore) {
        if settings.get_number(LAST_UPDATED_KEY, 0).await > 0 {
            self.refresh().await;
        }
    }

    // =========================================================================
    // Reload Coordinator
    // =========================================================================

    /// Fetch the stored ruleset and atomically install it.
    ///
    /// A missing stored value is a no-op; read and decode failures are
    /// logged and swallowed, leaving the active ruleset intact. A stale
    /// ruleset is always preferable to none. Concurrent refreshes are not
    /// deduplicated: the last one to complete wins.
    pub async fn refresh(&self) {
        match self.try_refresh().await {
            Ok(true) => log::info!("presets replaced from backing store"),
            Ok(false) => log::debug!("no stored presets; keeping current ruleset"),
            Err(err) => log::warn!("preset refresh failed, keeping current ruleset: {err}"),
        }
    }

    /// Fire-and-forget refresh. The returned handle may be dropped; the
    /// task runs to completion either way and cannot be cancelled through
    /// this API.
    pub fn refresh_detached(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.refresh().await })
    }

    async fn try_refresh(&self) -> Result<bool, StoreError> {
        let Some(value) = self.db.get(DOMAINS_KEY).await? else {
            return Ok(false);
        };
        let data: RulesetData = serde_json::from_value(value)?;
        self.store.replace(Arc::new(data.into()));
        Ok(true)
    }

    // =========================================================================
    // Public API
    // =========================================================================

    /// Resolve the monetization status for a domain or URL.
    pub fn status(&self, query: StatusQuery<'_>) -> Result<Status, ParseError> {
        resolve(&self.store.snapshot(), query)
    }

    /// Whether monetization is blocked for the page at `url`.
    pub fn is_blocked_url(&self, url: &str) -> Result<bool, ParseError> {
        Ok(self.status(StatusQuery::url(url))? == Status::Blocked)
    }

    /// Whether `domain` is author-owned. Exact match, no hierarchy.
    pub fn is_author_domain(&self, domain: &str) -> bool {
        self.store.snapshot().is_author_domain(domain)
    }

    /// Whether `domain` is known to host videos. Exact match, no hierarchy.
    pub fn has_videos(&self, domain: &str) -> bool {
        self.store.snapshot().has_videos(domain)
    }

    /// The current ruleset snapshot, for callers that need to run several
    /// queries against one consistent view.
    pub fn snapshot(&self) -> Arc<Ruleset> {
        self.store.snapshot()
    }
}
