use crate::api::VerseRecord;
use crate::text_utils::excerpt;

const SUBTITLE_CHARS: usize = 36;

/// One playable verse in the listening queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub global_index: u32,
    pub title: String,
    pub subtitle: String,
}

impl QueueItem {
    /// Item used when a verse is played without a surrounding chapter queue.
    pub fn standalone(global_index: u32) -> Self {
        Self {
            global_index,
            title: "آية".to_string(),
            subtitle: String::new(),
        }
    }
}

/// Queue covering every verse of a chapter, in reading order.
pub fn build_queue(chapter: u16, verses: &[VerseRecord]) -> Vec<QueueItem> {
    verses
        .iter()
        .map(|verse| QueueItem {
            global_index: verse.global_index,
            title: format!("سورة {chapter} — آية {}", verse.index_in_chapter),
            subtitle: excerpt(&verse.text, SUBTITLE_CHARS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(global_index: u32, index_in_chapter: u32, text: &str) -> VerseRecord {
        VerseRecord {
            global_index,
            index_in_chapter,
            text: text.to_string(),
            juz_number: 1,
            hizb_quarter_number: 1,
        }
    }

    #[test]
    fn queue_follows_reading_order_with_labels() {
        let verses = vec![
            verse(8, 1, "الم"),
            verse(9, 2, "ذَٰلِكَ   ٱلْكِتَٰبُ\nلَا رَيْبَ"),
        ];
        let queue = build_queue(2, &verses);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].global_index, 8);
        assert_eq!(queue[0].title, "سورة 2 — آية 1");
        assert_eq!(queue[1].title, "سورة 2 — آية 2");
        assert!(!queue[1].subtitle.contains('\n'));
        assert!(!queue[1].subtitle.contains("  "));
    }

    #[test]
    fn long_verse_subtitle_is_truncated() {
        let long = "و".repeat(50);
        let queue = build_queue(3, &[verse(300, 7, &long)]);
        assert_eq!(queue[0].subtitle.chars().count(), SUBTITLE_CHARS + 1);
        assert!(queue[0].subtitle.ends_with('…'));
    }
}
