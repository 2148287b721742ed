mod constants;
mod ui;

use crate::api::ContentClient;
use crate::config::AppConfig;
use crate::notify::Notification;
use crate::player::{AudioQueueController, RodioOutput};
use crate::router::{Router, View};
use crate::store::{LocalStore, Settings, ThemeMode};
use iced::{Task, Theme};
use std::time::Instant;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use ui::{Drafts, ReadingState, SearchState, ToastState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) store: LocalStore,
    pub(super) client: ContentClient,
    pub(super) router: Router,
    pub(super) player: AudioQueueController<RodioOutput>,
    /// Last saved settings; the form edits `drafts.settings`.
    pub(super) settings: Settings,
    /// Tally shown on the floating counter button.
    pub(super) counter: u32,
    pub(super) history: Vec<String>,
    pub(super) address_input: String,
    pub(super) search: SearchState,
    pub(super) drafts: Drafts,
    pub(super) toasts: ToastState,
    pub(super) reading: ReadingState,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        store: LocalStore,
        client: ContentClient,
        initial_address: Option<String>,
    ) -> (App, Task<Message>) {
        let settings = store.settings();
        let app = App {
            router: Router::new(config.arabic_edition.clone()),
            player: AudioQueueController::new(RodioOutput::new()),
            drafts: Drafts::from_store(&store),
            toasts: ToastState::new(config.notification_lifetime()),
            counter: store.tasbeeh().count,
            settings,
            history: Vec::new(),
            address_input: String::new(),
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
            },
            reading: ReadingState {
                pending_fraction: None,
                last_recorded_at: None,
            },
            config,
            store,
            client,
        };
        tracing::info!(
            data_dir = %app.config.data_dir,
            api = %app.config.api_base_url,
            "Application state ready"
        );
        (app, Task::done(Message::Started(initial_address)))
    }

    pub fn title(&self) -> String {
        match self.router.view() {
            View::ChapterDetail(detail) => format!("{} — {APP_TITLE}", detail.title),
            _ => APP_TITLE.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    pub(super) fn header_subtitle(&self) -> &'static str {
        match self.router.view() {
            View::Loading { .. } => LOADING_SUBTITLE,
            View::CatalogueUnavailable { .. } | View::ChapterUnavailable { .. } => FAILED_SUBTITLE,
            _ => APP_SUBTITLE,
        }
    }

    pub(super) fn recitation_edition(&self) -> String {
        self.settings.recitation_edition.clone()
    }

    pub(super) fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            title = %notification.title,
            "Showing notification"
        );
        self.toasts.push(notification, Instant::now());
    }

    /// Report a failed local write to the user.
    pub(super) fn notify_persist_failure(&mut self, what: &str, err: &anyhow::Error) {
        tracing::warn!("Failed to save {what}: {err:#}");
        self.notify(Notification::warn("تعذّر الحفظ", "لم يُحفظ التغيير على الجهاز."));
    }

    pub(super) fn reset_drafts(&mut self) {
        self.drafts = Drafts::from_store(&self.store);
    }

    pub(super) fn needs_tick(&self) -> bool {
        !self.toasts.is_empty() || self.player.is_active() || self.reading.pending_fraction.is_some()
    }
}
