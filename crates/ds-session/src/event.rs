//! The tab event wire format.
//!
//! Events arrive as `{"tabId": n, "action": "...", "data": ...}` where the
//! payload shape depends on the action. The enum is adjacently tagged so
//! serde enforces the action/payload pairing instead of every consumer
//! re-checking it.

use serde::{Deserialize, Serialize};

/// One event for one tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    #[serde(rename = "tabId")]
    pub tab_id: i32,
    #[serde(flatten)]
    pub action: SessionAction,
}

/// System idle state reported with the `idle` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleState {
    Active,
    Idle,
    Locked,
}

/// The fixed action vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "kebab-case")]
pub enum SessionAction {
    /// The tab started or stopped producing sound.
    Audible(bool),
    /// The tab was muted or unmuted.
    Muted(bool),
    /// The tab has been audible for a while and still is.
    AudibleOngoing,
    /// The system idle state changed.
    Idle(IdleState),
    /// The page finished loading with the given HTTP status code.
    PageLoaded(u16),
    /// The tab was closed.
    Removed,
    /// The tab was selected.
    Selected,
    /// The tab was already selected when the session started.
    SelectedInitial,
    /// Full page state, emitted when a tab is (re)discovered.
    State {
        title: Option<String>,
        url: Option<String>,
    },
    /// The page title changed.
    Title(String),
    /// The tab navigated to a new URL.
    Url(String),
    Keypressed,
    Pointerclicked,
    Pointermoved,
    ScrolledEnd,
    ScrolledOngoing,
    ScrolledStart,
    Zoom,
    /// The user manually contributed to the current page.
    #[serde(rename = "user-tip-added")]
    TipAdded,
}

impl SessionAction {
    /// Whether this action is a direct user interaction with the page.
    pub fn is_interaction(&self) -> bool {
        matches!(
            self,
            Self::Keypressed
                | Self::Pointerclicked
                | Self::Pointermoved
                | Self::ScrolledEnd
                | Self::ScrolledOngoing
                | Self::ScrolledStart
                | Self::Zoom
        )
    }
}
