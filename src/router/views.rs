//! Pure view renderer.
//!
//! Each function maps held data to a structured [`View`]; nothing here touches
//! the network, the disk or a widget toolkit. The same inputs always produce
//! an equal view, which is what makes re-dispatching idempotent.

use super::chapter::LoadedChapter;
use super::route::chapter_address;
use crate::api::{ChapterSummary, RevelationPlace};
use crate::player::{QueueItem, build_queue};
use crate::store::{BookmarkSet, LastReadPosition, RadioFavorite, Settings, TasbeehState};
use crate::text_utils::{format_timestamp, search_key};

pub const QUICK_SEARCH_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading { label: String },
    Home(HomeView),
    ChapterList(ChapterListView),
    ChapterDetail(ChapterDetailView),
    /// Chapter fetch failed; offers retry, settings and the chapter list.
    ChapterUnavailable { number: u16 },
    /// Catalogue fetch failed for a route that needs it.
    CatalogueUnavailable { address: String },
    Bookmarks(BookmarksView),
    Settings(SettingsView),
    Radio(RadioView),
    Counter(CounterView),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinueReading {
    pub chapter: u16,
    pub verse: u32,
    pub address: String,
}

impl ContinueReading {
    fn from_position(position: &LastReadPosition) -> Self {
        Self {
            chapter: position.chapter,
            verse: position.verse,
            address: chapter_address(position.chapter, Some(position.verse)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub chapter_count: usize,
    pub continue_reading: Option<ContinueReading>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRow {
    pub number: u16,
    pub native_name: String,
    pub transliterated_name: String,
    pub verse_count: u16,
    pub revelation_place: RevelationPlace,
    pub address: String,
}

impl ChapterRow {
    fn from_summary(summary: &ChapterSummary) -> Self {
        Self {
            number: summary.number,
            native_name: summary.native_name.clone(),
            transliterated_name: summary.transliterated_name.clone(),
            verse_count: summary.verse_count,
            revelation_place: summary.revelation_place,
            address: chapter_address(summary.number, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterListView {
    pub filter: String,
    pub rows: Vec<ChapterRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseCard {
    pub global_index: u32,
    pub index_in_chapter: u32,
    pub juz_number: u32,
    pub hizb_quarter_number: u32,
    pub text: String,
    pub translation: Option<String>,
    pub commentary: Option<String>,
    pub bookmarked: bool,
    pub highlighted: bool,
    /// False when the in-chapter filter hides this card.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDetailView {
    pub number: u16,
    pub title: String,
    pub meta: String,
    pub verses: Vec<VerseCard>,
    pub queue: Vec<QueueItem>,
    pub filter: String,
    pub jump_to: Option<u32>,
    /// Last-read verse when it lies in this chapter.
    pub last_read_verse: Option<u32>,
}

impl ChapterDetailView {
    pub fn card(&self, index_in_chapter: u32) -> Option<&VerseCard> {
        self.verses
            .iter()
            .find(|card| card.index_in_chapter == index_in_chapter)
    }

    pub fn card_by_global(&self, global_index: u32) -> Option<&VerseCard> {
        self.verses
            .iter()
            .find(|card| card.global_index == global_index)
    }

    pub fn visible_count(&self) -> usize {
        self.verses.iter().filter(|card| card.visible).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    pub chapter: u16,
    pub verse: u32,
    pub global_index: u32,
    pub added: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarksView {
    pub rows: Vec<BookmarkRow>,
    pub continue_reading: Option<ContinueReading>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsView {
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioView {
    pub url: String,
    pub favorites: Vec<RadioFavorite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub dhikr: String,
    pub count: u32,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub count: u32,
    pub dhikr: String,
    pub goal: u32,
    pub history: Vec<HistoryRow>,
}

pub fn render_home(catalogue: &[ChapterSummary], last_read: Option<&LastReadPosition>) -> View {
    View::Home(HomeView {
        chapter_count: catalogue.len(),
        continue_reading: last_read.map(ContinueReading::from_position),
    })
}

pub fn render_chapter_list(catalogue: &[ChapterSummary], filter: &str) -> View {
    View::ChapterList(ChapterListView {
        filter: filter.to_string(),
        rows: filter_chapters(catalogue, filter)
            .into_iter()
            .map(ChapterRow::from_summary)
            .collect(),
    })
}

pub fn render_chapter_detail(
    chapter: &LoadedChapter,
    jump_to: Option<u32>,
    filter: &str,
    bookmarks: &BookmarkSet,
    last_read: Option<&LastReadPosition>,
) -> View {
    let arabic = &chapter.arabic;
    let title = if arabic.native_name.trim().is_empty() {
        format!("سورة رقم {}", chapter.number)
    } else {
        arabic.native_name.clone()
    };
    let place = arabic
        .revelation_place
        .map(|p| p.to_string())
        .unwrap_or_default();
    let meta = format!(
        "{} — {} — عدد الآيات: {}",
        arabic.transliterated_name,
        place,
        chapter.verse_count()
    );
    let query = search_key(filter);

    let verses = arabic
        .verses
        .iter()
        .enumerate()
        .map(|(idx, verse)| {
            let overlay = |edition: &Option<crate::api::EditionText>| {
                edition
                    .as_ref()
                    .and_then(|e| e.verses.get(idx))
                    .map(|v| v.text.clone())
            };
            let translation = overlay(&chapter.translation);
            let commentary = overlay(&chapter.commentary);
            let visible = query.is_empty()
                || [Some(&verse.text), translation.as_ref(), commentary.as_ref()]
                    .into_iter()
                    .flatten()
                    .any(|text| search_key(text).contains(&query));
            VerseCard {
                global_index: verse.global_index,
                index_in_chapter: verse.index_in_chapter,
                juz_number: verse.juz_number,
                hizb_quarter_number: verse.hizb_quarter_number,
                text: verse.text.clone(),
                translation,
                commentary,
                bookmarked: bookmarks.contains(verse.global_index),
                highlighted: jump_to == Some(verse.index_in_chapter),
                visible,
            }
        })
        .collect();

    View::ChapterDetail(ChapterDetailView {
        number: chapter.number,
        title,
        meta,
        verses,
        queue: build_queue(chapter.number, &arabic.verses),
        filter: filter.to_string(),
        jump_to,
        last_read_verse: last_read
            .filter(|position| position.chapter == chapter.number)
            .map(|position| position.verse),
    })
}

pub fn render_bookmarks(bookmarks: &BookmarkSet, last_read: Option<&LastReadPosition>) -> View {
    View::Bookmarks(BookmarksView {
        rows: bookmarks
            .entries()
            .iter()
            .map(|bookmark| BookmarkRow {
                chapter: bookmark.chapter,
                verse: bookmark.verse,
                global_index: bookmark.global_index,
                added: format_timestamp(bookmark.created_at),
                address: chapter_address(bookmark.chapter, Some(bookmark.verse)),
            })
            .collect(),
        continue_reading: last_read.map(ContinueReading::from_position),
    })
}

pub fn render_settings(settings: &Settings) -> View {
    View::Settings(SettingsView {
        settings: settings.clone(),
    })
}

pub fn render_radio(settings: &Settings) -> View {
    View::Radio(RadioView {
        url: settings.radio_url.clone(),
        favorites: settings.radio_favorites.clone(),
    })
}

pub fn render_counter(tasbeeh: &TasbeehState) -> View {
    View::Counter(CounterView {
        count: tasbeeh.count,
        dhikr: tasbeeh.dhikr.clone(),
        goal: tasbeeh.goal,
        history: tasbeeh
            .history
            .iter()
            .map(|entry| HistoryRow {
                dhikr: entry.dhikr.clone(),
                count: entry.count,
                date: format_timestamp(entry.date),
            })
            .collect(),
    })
}

/// Chapters matching `query` by number, native name or transliteration.
pub fn filter_chapters<'a>(catalogue: &'a [ChapterSummary], query: &str) -> Vec<&'a ChapterSummary> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return catalogue.iter().collect();
    }
    let key = search_key(trimmed);
    catalogue
        .iter()
        .filter(|chapter| {
            chapter.number.to_string() == trimmed
                || search_key(&chapter.native_name).contains(&key)
                || search_key(&chapter.transliterated_name).contains(&key)
        })
        .collect()
}

/// Header search: the first few matches, nothing for a blank query.
pub fn quick_search(catalogue: &[ChapterSummary], query: &str) -> Vec<ChapterRow> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    filter_chapters(catalogue, query)
        .into_iter()
        .take(QUICK_SEARCH_LIMIT)
        .map(ChapterRow::from_summary)
        .collect()
}
