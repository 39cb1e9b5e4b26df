//! Domain-Status Session Boundary
//!
//! The browser side of the system emits a stream of per-tab events: audio
//! state changes, page loads, selection changes, user interactions. This
//! crate defines the typed vocabulary for that stream and a thin router
//! that turns each event into calls on the attention, audio and page
//! collaborators. It holds no state of its own and makes no classification
//! decisions; callers that need to know whether a page is even worth
//! tracking query the preset facade before feeding events in.
//!
//! # Modules
//!
//! - `event`: the wire-shaped `{tabId, action, data}` event type
//! - `router`: per-action dispatch onto the collaborator traits

pub mod event;
pub mod router;

pub use event::{IdleState, SessionAction, SessionEvent};
pub use router::{AttentionSink, AudioGauge, PageStore, SessionRouter};
