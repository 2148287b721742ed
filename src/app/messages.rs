use crate::api::{ChapterSummary, EditionText};
use crate::player::AudioSource;
use crate::store::{EditionChoice, ThemeMode};
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;

/// Messages emitted by the UI and by background work.
#[derive(Debug, Clone)]
pub enum Message {
    Started(Option<String>),
    Navigate(String),
    Back,
    Retry,
    AddressInputChanged(String),
    AddressSubmitted,
    CatalogueLoaded {
        nav_id: u64,
        result: Result<Vec<ChapterSummary>, String>,
    },
    ChapterLoaded {
        nav_id: u64,
        number: u16,
        result: Result<Vec<EditionText>, String>,
    },
    FocusQuickSearch,
    QuickSearchChanged(String),
    QuickSearchSubmitted,
    FilterChanged(String),
    ToggleTheme,
    PlayVerse(u32),
    PlayChapter,
    ToggleBookmark {
        chapter: u16,
        verse: u32,
        global_index: u32,
    },
    CopyVerse(u32),
    CopyVerseLink(u32),
    ScrollToTop,
    JumpToLastRead,
    Scrolled(RelativeOffset),
    TogglePlayPause,
    NextVerse,
    PreviousVerse,
    StopPlayback,
    AudioLoaded {
        request_id: u64,
        result: Result<AudioSource, String>,
    },
    RemoveBookmark(u32),
    ClearBookmarks,
    SettingEdited(SettingEdit),
    SaveSettings,
    ResetSettings,
    RadioUrlChanged(String),
    FavoriteNameChanged(String),
    PlayRadio,
    SaveDefaultRadio,
    AddRadioFavorite,
    PlayRadioFavorite(usize),
    UseRadioFavorite(usize),
    RemoveRadioFavorite(usize),
    CounterIncrement,
    CounterReset,
    CounterClearHistory,
    DhikrChanged(String),
    DhikrSubmitted,
    GoalChanged(String),
    DismissToast(u64),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}

/// One field of the settings form.
#[derive(Debug, Clone)]
pub enum SettingEdit {
    Theme(ThemeMode),
    FontSize(u32),
    LineHeight(f32),
    ShowTranslation(bool),
    Translation(EditionChoice),
    ShowCommentary(bool),
    Commentary(EditionChoice),
    Recitation(EditionChoice),
    RadioUrl(String),
}
