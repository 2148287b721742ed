use super::constants::MAX_TOASTS;
use crate::notify::Notification;
use crate::router::ChapterRow;
use crate::store::{LocalStore, Settings};
use std::time::{Duration, Instant};

pub struct SearchState {
    pub(in crate::app) query: String,
    pub(in crate::app) results: Vec<ChapterRow>,
}

/// Form contents that are only persisted on an explicit action.
pub struct Drafts {
    pub(in crate::app) settings: Settings,
    pub(in crate::app) radio_url: String,
    pub(in crate::app) favorite_name: String,
    pub(in crate::app) dhikr: String,
    pub(in crate::app) goal: String,
}

impl Drafts {
    pub(in crate::app) fn from_store(store: &LocalStore) -> Self {
        let settings = store.settings();
        let tasbeeh = store.tasbeeh();
        Self {
            radio_url: settings.radio_url.clone(),
            settings,
            favorite_name: String::new(),
            dhikr: tasbeeh.dhikr,
            goal: tasbeeh.goal.to_string(),
        }
    }
}

pub struct ReadingState {
    /// Scroll position not yet turned into a reading position.
    pub(in crate::app) pending_fraction: Option<f32>,
    pub(in crate::app) last_recorded_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub(in crate::app) id: u64,
    pub(in crate::app) notification: Notification,
    pub(in crate::app) expires_at: Instant,
}

pub struct ToastState {
    pub(in crate::app) items: Vec<Toast>,
    pub(in crate::app) next_id: u64,
    pub(in crate::app) lifetime: Duration,
}

impl ToastState {
    pub(in crate::app) fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    pub(in crate::app) fn push(&mut self, notification: Notification, now: Instant) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            notification,
            expires_at: now + self.lifetime,
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub(in crate::app) fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Drop expired toasts; true when anything was removed.
    pub(in crate::app) fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.expires_at > now);
        before != self.items.len()
    }

    pub(in crate::app) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
