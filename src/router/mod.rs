//! Client-side router with lazy data loading.
//!
//! The router turns a navigation address into a [`View`]. When the data for
//! a route is not at hand it renders `Loading` and hands back a
//! [`FetchTicket`]; the caller performs the fetch and reports the outcome
//! through `on_catalogue_loaded` / `on_chapter_loaded`. Every ticket carries
//! the navigation id it was issued for, and outcomes for an older navigation
//! never replace the current view.
//!
//! The chapter catalogue is kept for the life of the process once fetched.
//! A failed fetch leaves nothing cached, so the next route that needs it asks
//! again.

mod chapter;
mod route;
#[cfg(test)]
pub(crate) mod test_support;
mod views;

pub use chapter::{LoadedChapter, chapter_editions};
pub use route::{CHAPTER_COUNT, Route, RouteState, chapter_address};
pub use views::{
    BookmarkRow, BookmarksView, ChapterDetailView, ChapterListView, ChapterRow, ContinueReading,
    CounterView, HistoryRow, HomeView, QUICK_SEARCH_LIMIT, RadioView, SettingsView, VerseCard,
    View, filter_chapters, quick_search,
};

use crate::api::{ChapterSummary, EditionText};
use crate::notify::Notification;
use crate::store::{LastReadPosition, LocalStore};
use crate::text_utils::now_millis;
use std::sync::Arc;
use tracing::{debug, info, warn};
use views::{
    render_bookmarks, render_chapter_detail, render_chapter_list, render_counter, render_home,
    render_radio, render_settings,
};

/// Data a route is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataRequest {
    Catalogue,
    Chapter { number: u16, editions: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub nav_id: u64,
    pub request: DataRequest,
}

pub struct Router {
    arabic_edition: String,
    catalogue: Option<Arc<Vec<ChapterSummary>>>,
    nav_id: u64,
    address: String,
    state: RouteState,
    route: Route,
    view: View,
    chapter: Option<Arc<LoadedChapter>>,
    outstanding: bool,
    prefetching: bool,
    filter: String,
}

impl Router {
    pub fn new(arabic_edition: impl Into<String>) -> Self {
        Self {
            arabic_edition: arabic_edition.into(),
            catalogue: None,
            nav_id: 0,
            address: Route::Home.address(),
            state: RouteState::default(),
            route: Route::Home,
            view: View::Loading {
                label: "تحميل البيانات…".to_string(),
            },
            chapter: None,
            outstanding: false,
            prefetching: false,
            filter: String::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn route_state(&self) -> &RouteState {
        &self.state
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn nav_id(&self) -> u64 {
        self.nav_id
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn catalogue(&self) -> Option<&[ChapterSummary]> {
        self.catalogue.as_deref().map(Vec::as_slice)
    }

    pub fn chapter(&self) -> Option<&LoadedChapter> {
        self.chapter.as_deref()
    }

    pub fn chapter_view(&self) -> Option<&ChapterDetailView> {
        match &self.view {
            View::ChapterDetail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, View::Loading { .. })
    }

    /// Navigate to `address`.
    pub fn dispatch(&mut self, address: &str, store: &LocalStore) -> Option<FetchTicket> {
        self.nav_id += 1;
        self.state = RouteState::parse(address);
        self.route = Route::decode(&self.state);
        self.address = address.trim().to_string();
        self.chapter = None;
        self.outstanding = false;
        self.filter.clear();
        info!(
            address = %self.address,
            nav_id = self.nav_id,
            route = ?self.route,
            "Navigating"
        );
        self.render(store)
    }

    /// Re-render the current route after local data changed.
    ///
    /// A failed fetch stays on its retry view; only a new dispatch asks again.
    pub fn refresh(&mut self, store: &LocalStore) -> Option<FetchTicket> {
        if self.outstanding || self.is_failed() {
            return None;
        }
        self.render(store)
    }

    fn is_failed(&self) -> bool {
        matches!(
            self.view,
            View::ChapterUnavailable { .. } | View::CatalogueUnavailable { .. }
        )
    }

    /// Ticket for loading the catalogue ahead of need (quick search).
    pub fn prefetch_catalogue(&mut self) -> Option<FetchTicket> {
        if self.catalogue.is_some()
            || self.prefetching
            || (self.outstanding && self.route.needs_catalogue())
        {
            return None;
        }
        self.prefetching = true;
        debug!(nav_id = self.nav_id, "Prefetching chapter catalogue");
        Some(FetchTicket {
            nav_id: self.nav_id,
            request: DataRequest::Catalogue,
        })
    }

    pub fn set_filter(&mut self, query: &str, store: &LocalStore) -> Option<FetchTicket> {
        self.filter = query.to_string();
        if !matches!(self.route, Route::ChapterList | Route::ChapterDetail { .. })
            || self.outstanding
            || self.is_failed()
        {
            return None;
        }
        self.render(store)
    }

    pub fn on_catalogue_loaded(
        &mut self,
        nav_id: u64,
        result: Result<Vec<ChapterSummary>, String>,
        store: &LocalStore,
    ) -> Option<Notification> {
        let current = nav_id == self.nav_id && self.route.needs_catalogue();
        self.prefetching = false;
        match result {
            Ok(chapters) => {
                info!(count = chapters.len(), nav_id, "Cached chapter catalogue");
                self.catalogue = Some(Arc::new(chapters));
                // An older fetch may land first; a route still waiting takes it.
                if current || (self.route.needs_catalogue() && self.is_loading()) {
                    self.outstanding = false;
                    self.render(store);
                }
                None
            }
            Err(err) => {
                warn!(nav_id, "Catalogue fetch failed: {err}");
                if !current {
                    return None;
                }
                self.outstanding = false;
                if self.catalogue.is_some() {
                    debug!(nav_id, "Serving cached catalogue after failed fetch");
                    self.render(store);
                    return None;
                }
                self.view = View::CatalogueUnavailable {
                    address: self.address.clone(),
                };
                Some(Notification::bad(
                    "تعذّر تحميل قائمة السور",
                    "تحقق من الاتصال ثم أعد المحاولة.",
                ))
            }
        }
    }

    pub fn on_chapter_loaded(
        &mut self,
        nav_id: u64,
        number: u16,
        result: Result<Vec<EditionText>, String>,
        store: &LocalStore,
    ) -> Option<Notification> {
        if nav_id != self.nav_id {
            debug!(nav_id, current = self.nav_id, number, "Discarding stale chapter result");
            return None;
        }
        let Route::ChapterDetail {
            number: current,
            verse,
        } = self.route
        else {
            return None;
        };
        if current != number {
            return None;
        }
        self.outstanding = false;

        let settings = store.settings();
        let loaded = result.and_then(|editions| {
            LoadedChapter::from_editions(number, editions, &self.arabic_edition, &settings)
                .ok_or_else(|| "response carried no editions".to_string())
        });
        match loaded {
            Ok(chapter) => {
                debug!(number, verses = chapter.verse_count(), "Chapter loaded");
                if let Some(verse) = verse {
                    write_last_read(&chapter, verse, store);
                }
                self.chapter = Some(Arc::new(chapter));
                self.render(store);
                None
            }
            Err(err) => {
                warn!(number, nav_id, "Chapter fetch failed: {err}");
                self.view = View::ChapterUnavailable { number };
                Some(Notification::bad(
                    "تعذّر تحميل السورة",
                    "قد يكون الاتصال ضعيفًا أو الإصدار غير متاح.",
                ))
            }
        }
    }

    /// Remember `verse` of the open chapter as the reading position.
    pub fn record_last_read(&mut self, verse: u32, store: &LocalStore) -> bool {
        let Some(chapter) = self.chapter.clone() else {
            return false;
        };
        if !matches!(self.route, Route::ChapterDetail { .. }) {
            return false;
        }
        let changed = write_last_read(&chapter, verse, store);
        if changed {
            self.render(store);
        }
        changed
    }

    /// Visible verse nearest to a relative scroll position in `[0, 1]`.
    pub fn verse_near(&self, fraction: f32) -> Option<u32> {
        let detail = self.chapter_view()?;
        let visible: Vec<u32> = detail
            .verses
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.index_in_chapter)
            .collect();
        let last = visible.len().checked_sub(1)?;
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let idx = (fraction * last as f32).round() as usize;
        visible.get(idx.min(last)).copied()
    }

    /// Relative scroll position of `verse` among the visible cards.
    pub fn fraction_for_verse(&self, verse: u32) -> Option<f32> {
        let detail = self.chapter_view()?;
        let mut visible = detail.verses.iter().filter(|card| card.visible);
        let count = visible.clone().count();
        let position = visible.position(|card| card.index_in_chapter == verse)?;
        if count <= 1 {
            return Some(0.0);
        }
        Some(position as f32 / (count - 1) as f32)
    }

    fn render(&mut self, store: &LocalStore) -> Option<FetchTicket> {
        match self.route {
            Route::Home | Route::ChapterList => {
                let Some(catalogue) = self.catalogue.clone() else {
                    self.view = View::Loading {
                        label: "تحميل قائمة السور…".to_string(),
                    };
                    return self.issue(DataRequest::Catalogue);
                };
                self.view = if self.route == Route::Home {
                    render_home(&catalogue, store.last_read().as_ref())
                } else {
                    render_chapter_list(&catalogue, &self.filter)
                };
                None
            }
            Route::ChapterDetail { number, verse } => {
                let Some(chapter) = self.chapter.clone() else {
                    self.view = View::Loading {
                        label: "تحميل السورة…".to_string(),
                    };
                    let editions = chapter_editions(&self.arabic_edition, &store.settings());
                    return self.issue(DataRequest::Chapter { number, editions });
                };
                self.view = render_chapter_detail(
                    &chapter,
                    verse,
                    &self.filter,
                    &store.bookmarks(),
                    store.last_read().as_ref(),
                );
                None
            }
            Route::Bookmarks => {
                self.view = render_bookmarks(&store.bookmarks(), store.last_read().as_ref());
                None
            }
            Route::Settings => {
                self.view = render_settings(&store.settings());
                None
            }
            Route::Radio => {
                self.view = render_radio(&store.settings());
                None
            }
            Route::Counter => {
                self.view = render_counter(&store.tasbeeh());
                None
            }
            Route::NotFound => {
                self.view = View::NotFound;
                None
            }
        }
    }

    fn issue(&mut self, request: DataRequest) -> Option<FetchTicket> {
        if self.outstanding {
            return None;
        }
        self.outstanding = true;
        debug!(nav_id = self.nav_id, ?request, "Requesting route data");
        Some(FetchTicket {
            nav_id: self.nav_id,
            request,
        })
    }
}

/// Persist the reading position unless it is already there.
fn write_last_read(chapter: &LoadedChapter, verse: u32, store: &LocalStore) -> bool {
    let Some(record) = chapter
        .arabic
        .verses
        .iter()
        .find(|record| record.index_in_chapter == verse)
    else {
        return false;
    };
    let position = LastReadPosition {
        chapter: chapter.number,
        verse,
        global_index: record.global_index,
        updated_at: now_millis(),
    };
    if store
        .last_read()
        .is_some_and(|existing| existing.same_place(&position))
    {
        return false;
    }
    match store.save_last_read(&position) {
        Ok(()) => {
            debug!(chapter = chapter.number, verse, "Saved reading position");
            true
        }
        Err(err) => {
            warn!("Failed to save reading position: {err:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{build_test_catalogue, build_test_editions};
    use super::*;
    use crate::store::test_support::temp_store;

    const SCRIPT: &str = "quran-uthmani";

    fn router() -> Router {
        Router::new(SCRIPT)
    }

    fn chapter_ticket(number: u16) -> DataRequest {
        DataRequest::Chapter {
            number,
            editions: vec![SCRIPT.to_string()],
        }
    }

    #[test]
    fn every_valid_chapter_renders_once_loaded() {
        let store = temp_store("router-all");
        let mut r = router();
        for n in 1..=CHAPTER_COUNT {
            let ticket = r
                .dispatch(&format!("#/chapter/{n}"), &store)
                .expect("ticket");
            assert_eq!(ticket.request, chapter_ticket(n));
            assert!(r.is_loading());
            let notice = r.on_chapter_loaded(
                ticket.nav_id,
                n,
                Ok(build_test_editions(n, 3, &[SCRIPT])),
                &store,
            );
            assert!(notice.is_none());
            match r.view() {
                View::ChapterDetail(detail) => {
                    assert_eq!(detail.number, n);
                    assert_eq!(detail.verses.len(), 3);
                    assert_eq!(detail.queue.len(), 3);
                }
                other => panic!("chapter {n}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_chapters_render_not_found_without_fetching() {
        let store = temp_store("router-invalid");
        let mut r = router();
        for address in ["#/chapter/0", "#/chapter/115", "#/chapter/abc", "#/chapter/", "#/nowhere"] {
            assert!(r.dispatch(address, &store).is_none(), "{address}");
            assert_eq!(r.view(), &View::NotFound);
        }
    }

    #[test]
    fn catalogue_is_fetched_once_and_reused() {
        let store = temp_store("router-catalogue");
        let mut r = router();
        let ticket = r.dispatch("#/chapters", &store).expect("ticket");
        assert_eq!(ticket.request, DataRequest::Catalogue);
        r.on_catalogue_loaded(ticket.nav_id, Ok(build_test_catalogue()), &store);
        assert!(matches!(r.view(), View::ChapterList(list) if list.rows.len() == 4));

        assert!(r.dispatch("#/", &store).is_none());
        assert!(matches!(r.view(), View::Home(home) if home.chapter_count == 4));
        assert!(r.prefetch_catalogue().is_none());
    }

    #[test]
    fn prefetch_is_issued_once_while_in_flight() {
        let store = temp_store("router-prefetch");
        let mut r = router();
        r.dispatch("#/counter", &store);
        let ticket = r.prefetch_catalogue().expect("prefetch");
        assert!(r.prefetch_catalogue().is_none());
        r.on_catalogue_loaded(ticket.nav_id, Err("offline".into()), &store);
        assert!(matches!(r.view(), View::Counter(_)));
        assert!(r.prefetch_catalogue().is_some());
    }

    #[test]
    fn failed_catalogue_is_not_cached() {
        let store = temp_store("router-catalogue-fail");
        let mut r = router();
        let ticket = r.dispatch("#/", &store).expect("ticket");
        let notice = r.on_catalogue_loaded(ticket.nav_id, Err("offline".into()), &store);
        assert!(notice.is_some());
        assert_eq!(
            r.view(),
            &View::CatalogueUnavailable {
                address: "#/".to_string()
            }
        );
        let retry = r.dispatch("#/", &store).expect("retry ticket");
        assert_eq!(retry.request, DataRequest::Catalogue);
    }

    #[test]
    fn stale_catalogue_success_still_fills_cache() {
        let store = temp_store("router-catalogue-stale");
        let mut r = router();
        let ticket = r.dispatch("#/chapters", &store).expect("ticket");
        r.dispatch("#/bookmarks", &store);
        assert!(r
            .on_catalogue_loaded(ticket.nav_id, Ok(build_test_catalogue()), &store)
            .is_none());
        assert!(matches!(r.view(), View::Bookmarks(_)));
        assert!(r.dispatch("#/chapters", &store).is_none());
        assert!(matches!(r.view(), View::ChapterList(_)));
    }

    #[test]
    fn late_chapter_result_does_not_replace_newer_view() {
        let store = temp_store("router-stale");
        let mut r = router();
        let a = r.dispatch("#/chapter/2", &store).expect("ticket a");
        assert!(r.dispatch("#/bookmarks", &store).is_none());
        let notice = r.on_chapter_loaded(a.nav_id, 2, Ok(build_test_editions(2, 5, &[SCRIPT])), &store);
        assert!(notice.is_none());
        assert!(matches!(r.view(), View::Bookmarks(_)));

        let b = r.dispatch("#/chapter/3", &store).expect("ticket b");
        let c = r.dispatch("#/chapter/4", &store).expect("ticket c");
        r.on_chapter_loaded(b.nav_id, 3, Ok(build_test_editions(3, 5, &[SCRIPT])), &store);
        assert!(r.is_loading());
        r.on_chapter_loaded(c.nav_id, 4, Ok(build_test_editions(4, 5, &[SCRIPT])), &store);
        assert!(matches!(r.view(), View::ChapterDetail(d) if d.number == 4));
    }

    #[test]
    fn chapter_failure_offers_retry_view() {
        let store = temp_store("router-chapter-fail");
        let mut r = router();
        let ticket = r.dispatch("#/chapter/9", &store).expect("ticket");
        let notice = r.on_chapter_loaded(ticket.nav_id, 9, Err("HTTP 500".into()), &store);
        assert!(notice.is_some());
        assert_eq!(r.view(), &View::ChapterUnavailable { number: 9 });
        let retry = r.dispatch("#/chapter/9", &store).expect("retry");
        assert_eq!(retry.request, chapter_ticket(9));
    }

    #[test]
    fn redispatching_same_address_renders_identically() {
        let store = temp_store("router-idempotent");
        let mut r = router();
        let ticket = r.dispatch("#/chapters", &store).expect("ticket");
        r.on_catalogue_loaded(ticket.nav_id, Ok(build_test_catalogue()), &store);
        let first = r.view().clone();
        r.dispatch("#/chapters", &store);
        assert_eq!(r.view(), &first);

        let first_counter = {
            r.dispatch("#/counter", &store);
            r.view().clone()
        };
        r.dispatch("#/counter", &store);
        assert_eq!(r.view(), &first_counter);
    }

    #[test]
    fn verse_parameter_highlights_and_records_position() {
        let store = temp_store("router-jump");
        let mut r = router();
        let ticket = r.dispatch("#/chapter/18?a=4", &store).expect("ticket");
        r.on_chapter_loaded(ticket.nav_id, 18, Ok(build_test_editions(18, 6, &[SCRIPT])), &store);
        let detail = r.chapter_view().expect("detail");
        assert_eq!(detail.jump_to, Some(4));
        assert!(detail.card(4).expect("card").highlighted);
        assert_eq!(detail.last_read_verse, Some(4));
        let saved = store.last_read().expect("saved");
        assert_eq!((saved.chapter, saved.verse, saved.global_index), (18, 4, 18004));
    }

    #[test]
    fn scroll_position_updates_last_read_once() {
        let store = temp_store("router-scroll");
        let mut r = router();
        let ticket = r.dispatch("#/chapter/5", &store).expect("ticket");
        r.on_chapter_loaded(ticket.nav_id, 5, Ok(build_test_editions(5, 11, &[SCRIPT])), &store);
        assert_eq!(r.verse_near(0.0), Some(1));
        assert_eq!(r.verse_near(1.0), Some(11));
        assert_eq!(r.verse_near(0.5), Some(6));
        assert!(r.record_last_read(6, &store));
        assert!(!r.record_last_read(6, &store));
        assert!(!r.record_last_read(99, &store));
        assert_eq!(r.chapter_view().and_then(|d| d.last_read_verse), Some(6));
        assert_eq!(r.fraction_for_verse(1), Some(0.0));
        assert_eq!(r.fraction_for_verse(6), Some(0.5));
        assert_eq!(r.fraction_for_verse(11), Some(1.0));
        assert_eq!(r.fraction_for_verse(12), None);
    }

    #[test]
    fn filters_rerender_without_fetching() {
        let store = temp_store("router-filter");
        let mut r = router();
        let ticket = r.dispatch("#/chapters", &store).expect("ticket");
        r.on_catalogue_loaded(ticket.nav_id, Ok(build_test_catalogue()), &store);
        assert!(r.set_filter("kahf", &store).is_none());
        match r.view() {
            View::ChapterList(list) => {
                assert_eq!(list.filter, "kahf");
                assert_eq!(list.rows.len(), 1);
                assert_eq!(list.rows[0].number, 18);
            }
            other => panic!("unexpected {other:?}"),
        }
        r.dispatch("#/chapters", &store);
        assert!(r.filter().is_empty());
    }

    #[test]
    fn enabled_overlays_are_requested_with_the_chapter() {
        let store = temp_store("router-overlays");
        let mut settings = store.settings();
        settings.show_translation = true;
        settings.translation_edition = "en.sahih".into();
        store.save_settings(&settings).expect("save");
        let mut r = router();
        let ticket = r.dispatch("#/surah/2", &store).expect("ticket");
        assert_eq!(
            ticket.request,
            DataRequest::Chapter {
                number: 2,
                editions: vec![SCRIPT.to_string(), "en.sahih".to_string()],
            }
        );
        r.on_chapter_loaded(
            ticket.nav_id,
            2,
            Ok(build_test_editions(2, 2, &[SCRIPT, "en.sahih"])),
            &store,
        );
        let detail = r.chapter_view().expect("detail");
        assert_eq!(detail.verses[0].translation.as_deref(), Some("en.sahih 2:1"));
    }

    #[test]
    fn refresh_reflects_bookmark_changes() {
        let store = temp_store("router-refresh");
        let mut r = router();
        let ticket = r.dispatch("#/chapter/1", &store).expect("ticket");
        r.on_chapter_loaded(ticket.nav_id, 1, Ok(build_test_editions(1, 3, &[SCRIPT])), &store);
        let mut bookmarks = store.bookmarks();
        bookmarks.toggle(1, 2, 1002, 0);
        store.save_bookmarks(&bookmarks).expect("save");
        assert!(r.refresh(&store).is_none());
        let detail = r.chapter_view().expect("detail");
        assert!(detail.card(2).expect("card").bookmarked);
    }

    #[test]
    fn refresh_keeps_chapter_retry_view_after_failure() {
        let store = temp_store("router-refresh-failed");
        let mut r = router();
        let ticket = r.dispatch("#/chapter/9", &store).expect("ticket");
        r.on_chapter_loaded(ticket.nav_id, 9, Err("HTTP 500".into()), &store);
        assert!(r.refresh(&store).is_none());
        assert_eq!(r.view(), &View::ChapterUnavailable { number: 9 });
        assert!(r.set_filter("x", &store).is_none());
        assert_eq!(r.view(), &View::ChapterUnavailable { number: 9 });
        assert!(r.dispatch("#/chapter/9", &store).is_some());
    }

    #[test]
    fn refresh_keeps_catalogue_retry_view_after_failure() {
        let store = temp_store("router-refresh-catalogue-failed");
        let mut r = router();
        let ticket = r.dispatch("#/chapters", &store).expect("ticket");
        r.on_catalogue_loaded(ticket.nav_id, Err("offline".into()), &store);
        assert!(r.refresh(&store).is_none());
        assert_eq!(
            r.view(),
            &View::CatalogueUnavailable {
                address: "#/chapters".to_string()
            }
        );
    }

    #[test]
    fn older_catalogue_success_serves_route_whose_fetch_failed() {
        let store = temp_store("router-catalogue-race");
        let mut r = router();
        let a = r.dispatch("#/chapters", &store).expect("ticket a");
        let b = r.dispatch("#/", &store).expect("ticket b");
        assert!(r
            .on_catalogue_loaded(a.nav_id, Ok(build_test_catalogue()), &store)
            .is_none());
        assert!(matches!(r.view(), View::Home(home) if home.chapter_count == 4));
        assert!(r
            .on_catalogue_loaded(b.nav_id, Err("offline".into()), &store)
            .is_none());
        assert!(matches!(r.view(), View::Home(_)));
        assert!(r.refresh(&store).is_none());
    }

    #[test]
    fn prefetch_landing_first_serves_waiting_route() {
        let store = temp_store("router-prefetch-race");
        let mut r = router();
        r.dispatch("#/counter", &store);
        let prefetch = r.prefetch_catalogue().expect("prefetch");
        let route_fetch = r.dispatch("#/chapters", &store).expect("route ticket");
        r.on_catalogue_loaded(prefetch.nav_id, Ok(build_test_catalogue()), &store);
        assert!(matches!(r.view(), View::ChapterList(list) if list.rows.len() == 4));
        let notice = r.on_catalogue_loaded(route_fetch.nav_id, Err("offline".into()), &store);
        assert!(notice.is_none());
        assert!(matches!(r.view(), View::ChapterList(_)));
    }

    #[test]
    fn refresh_while_loading_issues_nothing() {
        let store = temp_store("router-refresh-loading");
        let mut r = router();
        assert!(r.dispatch("#/chapter/1", &store).is_some());
        assert!(r.refresh(&store).is_none());
        assert!(r.is_loading());
    }
}
