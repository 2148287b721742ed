use crate::api::EditionText;
use crate::store::Settings;

/// Chapter data held for the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedChapter {
    pub number: u16,
    pub arabic: EditionText,
    pub translation: Option<EditionText>,
    pub commentary: Option<EditionText>,
}

impl LoadedChapter {
    /// Pick the script, translation and commentary out of a combined response.
    ///
    /// The script edition falls back to the first entry when its identifier is
    /// missing; overlays are only taken when enabled and present.
    pub fn from_editions(
        number: u16,
        editions: Vec<EditionText>,
        arabic_edition: &str,
        settings: &Settings,
    ) -> Option<Self> {
        let find = |code: &str| {
            editions
                .iter()
                .find(|edition| edition.identifier() == Some(code))
                .cloned()
        };
        let arabic = find(arabic_edition).or_else(|| editions.first().cloned())?;
        let translation = settings
            .show_translation
            .then(|| find(&settings.translation_edition))
            .flatten();
        let commentary = settings
            .show_commentary
            .then(|| find(&settings.commentary_edition))
            .flatten();
        Some(Self {
            number,
            arabic,
            translation,
            commentary,
        })
    }

    pub fn verse_count(&self) -> usize {
        self.arabic.verses.len()
    }
}

/// Editions to request for a chapter: script first, then enabled overlays.
pub fn chapter_editions(arabic_edition: &str, settings: &Settings) -> Vec<String> {
    let mut editions = vec![arabic_edition.to_string()];
    if settings.show_translation {
        editions.push(settings.translation_edition.clone());
    }
    if settings.show_commentary {
        editions.push(settings.commentary_edition.clone());
    }
    let mut seen = Vec::with_capacity(editions.len());
    editions.retain(|code| {
        if seen.contains(code) {
            false
        } else {
            seen.push(code.clone());
            true
        }
    });
    editions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EditionInfo, VerseRecord};

    fn edition(code: &str, text: &str) -> EditionText {
        EditionText {
            number: 1,
            native_name: "سُورَةُ ٱلْفَاتِحَةِ".into(),
            transliterated_name: "Al-Faatiha".into(),
            revelation_place: None,
            verse_count: 1,
            edition: Some(EditionInfo {
                identifier: code.into(),
                language: String::new(),
                english_name: String::new(),
            }),
            verses: vec![VerseRecord {
                global_index: 1,
                index_in_chapter: 1,
                text: text.into(),
                juz_number: 1,
                hizb_quarter_number: 1,
            }],
        }
    }

    #[test]
    fn editions_follow_settings_toggles() {
        let mut settings = Settings::default();
        assert_eq!(chapter_editions("quran-uthmani", &settings), vec!["quran-uthmani"]);
        settings.show_translation = true;
        settings.show_commentary = true;
        assert_eq!(
            chapter_editions("quran-uthmani", &settings),
            vec!["quran-uthmani", "en.asad", "ar.muyassar"]
        );
    }

    #[test]
    fn picks_editions_by_identifier_regardless_of_order() {
        let mut settings = Settings::default();
        settings.show_translation = true;
        let chapter = LoadedChapter::from_editions(
            1,
            vec![edition("en.asad", "In the name"), edition("quran-uthmani", "بِسْمِ")],
            "quran-uthmani",
            &settings,
        )
        .expect("chapter");
        assert_eq!(chapter.arabic.verses[0].text, "بِسْمِ");
        assert_eq!(
            chapter.translation.map(|t| t.verses[0].text.clone()),
            Some("In the name".to_string())
        );
        assert!(chapter.commentary.is_none());
    }

    #[test]
    fn unknown_script_identifier_falls_back_to_first() {
        let chapter = LoadedChapter::from_editions(
            1,
            vec![edition("quran-simple", "بسم")],
            "quran-uthmani",
            &Settings::default(),
        )
        .expect("chapter");
        assert_eq!(chapter.arabic.verses[0].text, "بسم");
        assert!(LoadedChapter::from_editions(1, Vec::new(), "x", &Settings::default()).is_none());
    }
}
