use serde::{Deserialize, Serialize};

/// A saved verse, newest first in its [`BookmarkSet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub chapter: u16,
    pub verse: u32,
    pub global_index: u32,
    /// Unix milliseconds.
    pub created_at: i64,
}

/// Bookmarks keyed by global verse index; at most one entry per verse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Bookmark>", into = "Vec<Bookmark>")]
pub struct BookmarkSet {
    entries: Vec<Bookmark>,
}

impl From<Vec<Bookmark>> for BookmarkSet {
    fn from(raw: Vec<Bookmark>) -> Self {
        let mut entries: Vec<Bookmark> = Vec::with_capacity(raw.len());
        for bookmark in raw {
            if !entries
                .iter()
                .any(|existing| existing.global_index == bookmark.global_index)
            {
                entries.push(bookmark);
            }
        }
        Self { entries }
    }
}

impl From<BookmarkSet> for Vec<Bookmark> {
    fn from(set: BookmarkSet) -> Self {
        set.entries
    }
}

impl BookmarkSet {
    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, global_index: u32) -> bool {
        self.entries.iter().any(|b| b.global_index == global_index)
    }

    /// Add the verse if absent, remove it if present. Returns true when added.
    pub fn toggle(&mut self, chapter: u16, verse: u32, global_index: u32, now_millis: i64) -> bool {
        if self.remove(global_index) {
            return false;
        }
        self.entries.insert(
            0,
            Bookmark {
                chapter,
                verse,
                global_index,
                created_at: now_millis,
            },
        );
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn remove(&mut self, global_index: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.global_index != global_index);
        self.entries.len() != before
    }
}

/// Where the reader last was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastReadPosition {
    pub chapter: u16,
    pub verse: u32,
    pub global_index: u32,
    pub updated_at: i64,
}

impl LastReadPosition {
    /// Same place, ignoring when it was recorded.
    pub fn same_place(&self, other: &LastReadPosition) -> bool {
        self.chapter == other.chapter && self.verse == other.verse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_set() {
        let mut set = BookmarkSet::default();
        set.toggle(1, 1, 1, 10);
        let before = set.clone();
        assert!(set.toggle(2, 255, 262, 20));
        assert_eq!(set.entries()[0].global_index, 262);
        assert!(!set.toggle(2, 255, 262, 30));
        assert_eq!(set, before);
    }

    #[test]
    fn deserializing_drops_duplicate_verses() {
        let raw = r#"[
            {"chapter":2,"verse":255,"global_index":262,"created_at":2},
            {"chapter":2,"verse":255,"global_index":262,"created_at":1},
            {"chapter":1,"verse":1,"global_index":1,"created_at":0}
        ]"#;
        let set: BookmarkSet = serde_json::from_str(raw).expect("parse");
        assert_eq!(set.len(), 2);
        assert_eq!(set.entries()[0].created_at, 2);
        assert!(set.contains(1));
    }
}
