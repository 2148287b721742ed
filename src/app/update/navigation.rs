use super::super::state::{App, HISTORY_LIMIT};
use super::Effect;
use crate::api::{ChapterSummary, EditionText};
use crate::notify::Notification;
use crate::router::{Route, quick_search};
use iced::widget::scrollable::RelativeOffset;
use tracing::{debug, info};

const HOME_ADDRESS: &str = "#/";

impl App {
    pub(super) fn handle_started(&mut self, address: Option<String>, effects: &mut Vec<Effect>) {
        let address = address.unwrap_or_else(|| HOME_ADDRESS.to_string());
        info!(%address, "Opening initial view");
        self.navigate(address, false, effects);
        if let Some(ticket) = self.router.prefetch_catalogue() {
            effects.push(Effect::Fetch(ticket));
        }
        let shortcut = self.config.key_quick_search.trim().to_string();
        self.notify(Notification::info(
            "اختصار",
            format!("افتح البحث السريع بـ {shortcut}"),
        ));
    }

    /// Dispatch `address`, optionally remembering the current one for "back".
    pub(super) fn navigate(&mut self, address: String, remember: bool, effects: &mut Vec<Effect>) {
        let address = match address.trim() {
            "" => HOME_ADDRESS.to_string(),
            trimmed => trimmed.to_string(),
        };
        if remember && self.router.nav_id() > 0 && self.router.address() != address {
            self.history.push(self.router.address().to_string());
            if self.history.len() > HISTORY_LIMIT {
                let overflow = self.history.len() - HISTORY_LIMIT;
                self.history.drain(..overflow);
            }
        }
        self.search.query.clear();
        self.search.results.clear();
        self.reading.pending_fraction = None;
        self.reading.last_recorded_at = None;

        let ticket = self.router.dispatch(&address, &self.store);
        self.address_input = self.router.address().to_string();
        self.reset_drafts();
        effects.push(Effect::ScrollTo(RelativeOffset::START));
        if let Some(ticket) = ticket {
            effects.push(Effect::Fetch(ticket));
        }
    }

    /// Re-render the current route after local data changed.
    pub(super) fn refresh_view(&mut self, effects: &mut Vec<Effect>) {
        if let Some(ticket) = self.router.refresh(&self.store) {
            effects.push(Effect::Fetch(ticket));
        }
    }

    pub(super) fn handle_back(&mut self, effects: &mut Vec<Effect>) {
        let target = self
            .history
            .pop()
            .unwrap_or_else(|| HOME_ADDRESS.to_string());
        debug!(%target, remaining = self.history.len(), "Going back");
        self.navigate(target, false, effects);
    }

    pub(super) fn handle_retry(&mut self, effects: &mut Vec<Effect>) {
        let address = self.router.address().to_string();
        self.navigate(address, false, effects);
    }

    pub(super) fn handle_address_submitted(&mut self, effects: &mut Vec<Effect>) {
        let address = self.address_input.clone();
        self.navigate(address, true, effects);
    }

    pub(super) fn handle_catalogue_loaded(
        &mut self,
        nav_id: u64,
        result: Result<Vec<ChapterSummary>, String>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(notice) = self.router.on_catalogue_loaded(nav_id, result, &self.store) {
            self.notify(notice);
        }
        self.update_quick_search(effects);
    }

    pub(super) fn handle_chapter_loaded(
        &mut self,
        nav_id: u64,
        number: u16,
        result: Result<Vec<EditionText>, String>,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(notice) = self
            .router
            .on_chapter_loaded(nav_id, number, result, &self.store)
        {
            self.notify(notice);
            return;
        }
        if nav_id != self.router.nav_id() {
            return;
        }
        if let Route::ChapterDetail {
            verse: Some(verse), ..
        } = self.router.route()
        {
            if let Some(y) = self.router.fraction_for_verse(verse) {
                debug!(chapter = number, verse, y, "Scrolling to requested verse");
                effects.push(Effect::ScrollTo(RelativeOffset { x: 0.0, y }));
            }
        }
    }

    pub(super) fn handle_quick_search_changed(&mut self, query: String, effects: &mut Vec<Effect>) {
        self.search.query = query;
        self.update_quick_search(effects);
    }

    pub(super) fn handle_quick_search_submitted(&mut self, effects: &mut Vec<Effect>) {
        if let Some(first) = self.search.results.first() {
            let address = first.address.clone();
            self.navigate(address, true, effects);
        }
    }

    pub(super) fn handle_filter_changed(&mut self, query: String, effects: &mut Vec<Effect>) {
        if let Some(ticket) = self.router.set_filter(&query, &self.store) {
            effects.push(Effect::Fetch(ticket));
        }
    }

    fn update_quick_search(&mut self, effects: &mut Vec<Effect>) {
        if self.search.query.trim().is_empty() {
            self.search.results.clear();
            return;
        }
        match self.router.catalogue() {
            Some(catalogue) => self.search.results = quick_search(catalogue, &self.search.query),
            None => {
                if let Some(ticket) = self.router.prefetch_catalogue() {
                    effects.push(Effect::Fetch(ticket));
                }
            }
        }
    }
}
