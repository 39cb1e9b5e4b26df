//! Per-action event dispatch.
//!
//! The router owns no session state; it translates each [`SessionEvent`]
//! into calls on three collaborators. Attention accounting, audio
//! bookkeeping and page persistence all live behind traits so the host
//! application supplies the real implementations.

use crate::event::{IdleState, SessionAction, SessionEvent};

/// Receives attention start/stop signals derived from events.
///
/// `background` marks transitions caused by audio playing in an unfocused
/// tab, as opposed to the user actively looking at the page.
pub trait AttentionSink {
    fn start(&mut self, tab_id: i32, background: bool);
    fn stop(&mut self, tab_id: i32, background: bool);
    /// The tab became the selected one.
    fn select(&mut self, tab_id: i32);
    /// Cut the current attention span short, keeping what was gathered.
    fn interrupt(&mut self, tab_id: i32);
}

/// Tracks per-tab audio state.
pub trait AudioGauge {
    /// Whether the tab is currently producing audible sound.
    fn is_audible(&self, tab_id: i32) -> bool;
    fn set_audible(&mut self, tab_id: i32, audible: bool);
    fn set_muted(&mut self, tab_id: i32, muted: bool);
    /// Forget everything known about the tab's audio.
    fn reset(&mut self, tab_id: i32);
}

/// Stores the page currently shown in each tab.
pub trait PageStore {
    fn has_page(&self, tab_id: i32) -> bool;
    fn set_state(&mut self, tab_id: i32, title: Option<String>, url: String);
    fn set_title(&mut self, tab_id: i32, title: String);
    fn set_url(&mut self, tab_id: i32, url: String);
    fn remove(&mut self, tab_id: i32);
    /// Immediately settle any pending contribution for the tab's page.
    fn fast_forward(&mut self, tab_id: i32);
}

/// Routes session events to the collaborators.
pub struct SessionRouter<A, G, P> {
    attention: A,
    audio: G,
    pages: P,
}

impl<A: AttentionSink, G: AudioGauge, P: PageStore> SessionRouter<A, G, P> {
    pub fn new(attention: A, audio: G, pages: P) -> Self {
        Self {
            attention,
            audio,
            pages,
        }
    }

    /// Dispatch one event.
    pub fn dispatch(&mut self, event: SessionEvent) {
        let tab_id = event.tab_id;
        log::trace!("session event for tab {tab_id}: {:?}", event.action);

        match event.action {
            SessionAction::Audible(audible) => {
                self.audio_changed(tab_id, |audio| audio.set_audible(tab_id, audible));
            }
            SessionAction::Muted(muted) => {
                self.audio_changed(tab_id, |audio| audio.set_muted(tab_id, muted));
            }
            SessionAction::AudibleOngoing => self.attention.start(tab_id, true),
            SessionAction::Idle(IdleState::Active) => self.attention.start(tab_id, false),
            SessionAction::Idle(IdleState::Idle) | SessionAction::Idle(IdleState::Locked) => {
                self.attention.stop(tab_id, false);
            }
            SessionAction::PageLoaded(code) if (200..300).contains(&code) => {
                self.attention.start(tab_id, false);
            }
            // Redirects are not errors; the next load settles the page
            SessionAction::PageLoaded(code) if (300..400).contains(&code) => {}
            SessionAction::PageLoaded(_) | SessionAction::Removed => {
                self.audio.reset(tab_id);
                self.attention.stop(tab_id, false);
                self.pages.remove(tab_id);
            }
            SessionAction::Selected => {
                self.attention.select(tab_id);
                self.attention.start(tab_id, false);
            }
            SessionAction::SelectedInitial => self.attention.select(tab_id),
            SessionAction::State { title, url } => match url {
                Some(url) => self.pages.set_state(tab_id, title, url),
                None => self.pages.remove(tab_id),
            },
            SessionAction::Title(title) => self.pages.set_title(tab_id, title),
            SessionAction::Url(url) => {
                self.audio.reset(tab_id);
                self.pages.set_url(tab_id, url);
            }
            SessionAction::TipAdded => {
                self.attention.interrupt(tab_id);
                self.pages.fast_forward(tab_id);
            }
            SessionAction::Keypressed
            | SessionAction::Pointerclicked
            | SessionAction::Pointermoved
            | SessionAction::ScrolledEnd
            | SessionAction::ScrolledOngoing
            | SessionAction::ScrolledStart
            | SessionAction::Zoom => self.attention.start(tab_id, false),
        }
    }

    /// Apply an audio state change and start or stop background attention
    /// when the tab's audibility flips. Tabs without a tracked page are
    /// ignored.
    fn audio_changed(&mut self, tab_id: i32, apply: impl FnOnce(&mut G)) {
        if !self.pages.has_page(tab_id) {
            return;
        }

        let was_audible = self.audio.is_audible(tab_id);
        apply(&mut self.audio);
        let is_audible = self.audio.is_audible(tab_id);

        if !was_audible && is_audible {
            self.attention.start(tab_id, true);
        } else if was_audible && !is_audible {
            self.attention.stop(tab_id, true);
        }
    }
}
