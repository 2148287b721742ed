//! Local persistence of reader state.
//!
//! Each record is a JSON file named `quran_pro_v1--{key}.json` under the data
//! directory. Reads never fail: a missing or corrupt record reads as absent
//! and the typed accessors substitute their defaults. Writes go through a temporary file and a rename so a
//! crash cannot leave half a record behind.

mod bookmarks;
mod settings;
mod tasbeeh;

pub use bookmarks::{Bookmark, BookmarkSet, LastReadPosition};
pub use settings::{
    COMMENTARY_CHOICES, EditionChoice, MAX_VERSE_FONT_SIZE, MAX_VERSE_LINE_HEIGHT,
    MIN_VERSE_FONT_SIZE, MIN_VERSE_LINE_HEIGHT, RECITATION_CHOICES, RadioFavorite, Settings,
    TRANSLATION_CHOICES, ThemeMode, choice_for,
};
pub use tasbeeh::{CounterEvent, TasbeehState};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const NAMESPACE: &str = "quran_pro_v1--";

const KEY_SETTINGS: &str = "settings";
const KEY_BOOKMARKS: &str = "bookmarks";
const KEY_LAST_READ: &str = "lastRead";
const KEY_TASBEEH: &str = "tasbeeh";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        debug!(dir = %dir.display(), "Opened local store");
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Stored value for `key`; `None` when absent or unreadable.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.record_path(key);
        let data = fs::read(&path).ok()?;
        match serde_json::from_slice(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(path = %path.display(), "Ignoring corrupt record: {err}");
                None
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.record_path(key);
        let tmp = path.with_extension("json.tmp");
        let contents = serde_json::to_vec_pretty(value).context("Failed to encode record")?;
        fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to replace {}", path.display()))
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to remove record {key}")),
        }
    }

    pub fn settings(&self) -> Settings {
        self.read::<Settings>(KEY_SETTINGS)
            .unwrap_or_default()
            .sanitized()
    }

    /// Persist `settings` after clamping; returns what was written.
    pub fn save_settings(&self, settings: &Settings) -> Result<Settings> {
        let clean = settings.clone().sanitized();
        self.write(KEY_SETTINGS, &clean)?;
        Ok(clean)
    }

    /// Drop the stored record so every field reads as its default.
    pub fn reset_settings(&self) -> Result<Settings> {
        self.remove(KEY_SETTINGS)?;
        Ok(Settings::default())
    }

    pub fn bookmarks(&self) -> BookmarkSet {
        self.read(KEY_BOOKMARKS).unwrap_or_default()
    }

    pub fn save_bookmarks(&self, bookmarks: &BookmarkSet) -> Result<()> {
        self.write(KEY_BOOKMARKS, bookmarks)
    }

    pub fn last_read(&self) -> Option<LastReadPosition> {
        self.read(KEY_LAST_READ)
    }

    pub fn save_last_read(&self, position: &LastReadPosition) -> Result<()> {
        self.write(KEY_LAST_READ, position)
    }

    pub fn tasbeeh(&self) -> TasbeehState {
        self.read(KEY_TASBEEH).unwrap_or_default()
    }

    pub fn save_tasbeeh(&self, state: &TasbeehState) -> Result<()> {
        self.write(KEY_TASBEEH, state)
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{NAMESPACE}{key}.json"))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LocalStore;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT: AtomicUsize = AtomicUsize::new(0);

    /// Fresh store in its own temp directory.
    pub(crate) fn temp_store(tag: &str) -> LocalStore {
        let dir: PathBuf = std::env::temp_dir().join(format!(
            "quran-companion-store-{tag}-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = std::fs::remove_dir_all(&dir);
        LocalStore::open(&dir).expect("temp store")
    }
}
