//! The swappable ruleset snapshot.
//!
//! Readers far outnumber writers here: every classification query loads
//! the current ruleset, while a replacement only arrives when a refresh
//! completes. `ArcSwap` gives wait-free loads and makes the replacement a
//! single atomic pointer store, so a query that started before a swap
//! keeps its complete old snapshot and one that starts after sees the
//! complete new one.

use std::sync::Arc;

use arc_swap::ArcSwap;

use ds_core::{Ruleset, RulesetData};

/// Default ruleset shipped with the build.
const BUILTIN: &str = include_str!("../data/domains.json");

/// Parse the embedded default ruleset.
///
/// The asset is part of the build, so a parse failure is a packaging bug;
/// it is validated by a test below.
pub fn builtin_ruleset() -> Ruleset {
    serde_json::from_str::<RulesetData>(BUILTIN)
        .expect("embedded preset data is valid")
        .into()
}

/// Holds the currently active ruleset.
pub struct PresetStore {
    current: ArcSwap<Ruleset>,
}

impl PresetStore {
    /// Create a store holding the given ruleset.
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            current: ArcSwap::from_pointee(ruleset),
        }
    }

    /// Create a store holding the embedded default ruleset.
    pub fn with_builtin() -> Self {
        Self::new(builtin_ruleset())
    }

    /// Load the current ruleset. Wait-free; the returned snapshot stays
    /// valid and internally consistent even if a replacement lands while
    /// it is in use.
    #[inline]
    pub fn snapshot(&self) -> Arc<Ruleset> {
        self.current.load_full()
    }

    /// Atomically install a replacement ruleset. The tree and both domain
    /// sets are replaced together; there is no partial update.
    pub fn replace(&self, next: Arc<Ruleset>) {
        self.current.store(next);
    }
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::{resolve, Status, StatusQuery};

    #[test]
    fn test_builtin_ruleset_parses() {
        let rules = builtin_ruleset();
        assert!(rules.has_videos("youtube.com"));
        assert!(rules.is_author_domain("github.com"));
        assert_eq!(
            resolve(&rules, StatusQuery::domain("paypal.com")).unwrap(),
            Status::Blocked
        );
        assert_eq!(
            resolve(&rules, StatusQuery::domain("github.com")).unwrap(),
            Status::Eligible
        );
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = PresetStore::with_builtin();
        let before = store.snapshot();

        let empty: Ruleset = serde_json::from_str::<ds_core::RulesetData>(r#"{"status": {}}"#)
            .unwrap()
            .into();
        store.replace(Arc::new(empty));

        // The old snapshot is still complete and queryable
        assert!(before.has_videos("vimeo.com"));
        assert_eq!(
            resolve(&before, StatusQuery::domain("paypal.com")).unwrap(),
            Status::Blocked
        );

        // New readers see the replacement
        let after = store.snapshot();
        assert!(!after.has_videos("vimeo.com"));
        assert_eq!(
            resolve(&after, StatusQuery::domain("paypal.com")).unwrap(),
            Status::Undefined
        );
    }
}
