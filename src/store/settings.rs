use serde::{Deserialize, Serialize};

pub const MIN_VERSE_FONT_SIZE: u32 = 16;
pub const MAX_VERSE_FONT_SIZE: u32 = 40;
pub const MIN_VERSE_LINE_HEIGHT: f32 = 1.4;
pub const MAX_VERSE_LINE_HEIGHT: f32 = 3.2;
pub const MAX_RADIO_FAVORITES: usize = 20;
pub const DEFAULT_FAVORITE_NAME: &str = "محطة قرآن";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Dark => "ليلي",
            ThemeMode::Light => "نهاري",
        };
        f.write_str(label)
    }
}

/// A selectable edition code with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionChoice {
    pub code: &'static str,
    pub label: &'static str,
}

impl std::fmt::Display for EditionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

pub const TRANSLATION_CHOICES: [EditionChoice; 4] = [
    EditionChoice {
        code: "en.asad",
        label: "English — Muhammad Asad",
    },
    EditionChoice {
        code: "en.sahih",
        label: "English — Saheeh International",
    },
    EditionChoice {
        code: "fr.hamidullah",
        label: "Français — Hamidullah",
    },
    EditionChoice {
        code: "tr.diyanet",
        label: "Türkçe — Diyanet",
    },
];

pub const COMMENTARY_CHOICES: [EditionChoice; 2] = [
    EditionChoice {
        code: "ar.muyassar",
        label: "التفسير الميسر",
    },
    EditionChoice {
        code: "ar.jalalayn",
        label: "تفسير الجلالين",
    },
];

pub const RECITATION_CHOICES: [EditionChoice; 3] = [
    EditionChoice {
        code: "ar.alafasy",
        label: "مشاري العفاسي",
    },
    EditionChoice {
        code: "ar.abdurrahmaansudais",
        label: "عبدالرحمن السديس",
    },
    EditionChoice {
        code: "ar.husary",
        label: "محمود خليل الحصري",
    },
];

/// Find the listed choice for `code`, if it is one of ours.
pub fn choice_for(choices: &[EditionChoice], code: &str) -> Option<EditionChoice> {
    choices.iter().copied().find(|choice| choice.code == code)
}

/// Reader preferences persisted in the local store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeMode,
    pub verse_font_size: u32,
    pub verse_line_height: f32,
    pub show_translation: bool,
    pub translation_edition: String,
    pub show_commentary: bool,
    pub commentary_edition: String,
    pub recitation_edition: String,
    pub radio_url: String,
    pub radio_favorites: Vec<RadioFavorite>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            verse_font_size: 20,
            verse_line_height: 2.1,
            show_translation: false,
            translation_edition: "en.asad".to_string(),
            show_commentary: false,
            commentary_edition: "ar.muyassar".to_string(),
            recitation_edition: "ar.alafasy".to_string(),
            radio_url: String::new(),
            radio_favorites: Vec::new(),
        }
    }
}

impl Settings {
    /// Bring numeric fields back into range and drop blank edition codes.
    pub fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        self.verse_font_size = self
            .verse_font_size
            .clamp(MIN_VERSE_FONT_SIZE, MAX_VERSE_FONT_SIZE);
        self.verse_line_height = if self.verse_line_height.is_finite() {
            self.verse_line_height
                .clamp(MIN_VERSE_LINE_HEIGHT, MAX_VERSE_LINE_HEIGHT)
        } else {
            defaults.verse_line_height
        };
        for (field, fallback) in [
            (&mut self.translation_edition, defaults.translation_edition),
            (&mut self.commentary_edition, defaults.commentary_edition),
            (&mut self.recitation_edition, defaults.recitation_edition),
        ] {
            let trimmed = field.trim().to_string();
            *field = if trimmed.is_empty() { fallback } else { trimmed };
        }
        self.radio_url = self.radio_url.trim().to_string();
        self.radio_favorites.truncate(MAX_RADIO_FAVORITES);
        self
    }

    /// Prepend a favourite; the list keeps the newest entries only.
    pub fn add_radio_favorite(&mut self, name: &str, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        let name = name.trim();
        self.radio_favorites.insert(
            0,
            RadioFavorite {
                name: if name.is_empty() {
                    DEFAULT_FAVORITE_NAME.to_string()
                } else {
                    name.to_string()
                },
                url: url.to_string(),
            },
        );
        self.radio_favorites.truncate(MAX_RADIO_FAVORITES);
        true
    }

    pub fn remove_radio_favorite(&mut self, index: usize) -> Option<RadioFavorite> {
        (index < self.radio_favorites.len()).then(|| self.radio_favorites.remove(index))
    }

    /// Make a favourite the default station.
    pub fn use_radio_favorite(&mut self, index: usize) -> Option<&RadioFavorite> {
        let favorite = self.radio_favorites.get(index)?;
        self.radio_url = favorite.url.clone();
        Some(favorite)
    }

    pub fn set_default_radio_url(&mut self, url: &str) {
        self.radio_url = url.trim().to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioFavorite {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = Settings::default();
        assert_eq!(s.theme, ThemeMode::Dark);
        assert_eq!(s.verse_font_size, 20);
        assert_eq!(s.verse_line_height, 2.1);
        assert!(!s.show_translation);
        assert_eq!(s.translation_edition, "en.asad");
        assert!(!s.show_commentary);
        assert_eq!(s.commentary_edition, "ar.muyassar");
        assert_eq!(s.recitation_edition, "ar.alafasy");
        assert!(s.radio_url.is_empty());
        assert!(s.radio_favorites.is_empty());
    }

    #[test]
    fn sanitize_clamps_typography() {
        let mut s = Settings::default();
        s.verse_font_size = 90;
        s.verse_line_height = 0.5;
        s.recitation_edition = "  ".into();
        let s = s.sanitized();
        assert_eq!(s.verse_font_size, MAX_VERSE_FONT_SIZE);
        assert_eq!(s.verse_line_height, MIN_VERSE_LINE_HEIGHT);
        assert_eq!(s.recitation_edition, "ar.alafasy");
    }

    #[test]
    fn favorites_are_newest_first_and_capped() {
        let mut s = Settings::default();
        for i in 0..25 {
            assert!(s.add_radio_favorite("", &format!("https://radio.test/{i}")));
        }
        assert_eq!(s.radio_favorites.len(), MAX_RADIO_FAVORITES);
        assert_eq!(s.radio_favorites[0].url, "https://radio.test/24");
        assert_eq!(s.radio_favorites[0].name, DEFAULT_FAVORITE_NAME);
        assert!(!s.add_radio_favorite("x", "   "));
    }

    #[test]
    fn favorite_can_become_default_station() {
        let mut s = Settings::default();
        s.add_radio_favorite("a", " https://radio.test/a ");
        assert!(s.use_radio_favorite(4).is_none());
        assert_eq!(
            s.use_radio_favorite(0).map(|f| f.name.clone()),
            Some("a".to_string())
        );
        assert_eq!(s.radio_url, "https://radio.test/a");
    }

    #[test]
    fn removing_out_of_range_favorite_is_noop() {
        let mut s = Settings::default();
        s.add_radio_favorite("a", "https://radio.test/a");
        assert!(s.remove_radio_favorite(3).is_none());
        assert_eq!(
            s.remove_radio_favorite(0).map(|f| f.name),
            Some("a".to_string())
        );
    }

    #[test]
    fn partial_record_fills_missing_fields() {
        let s: Settings = serde_json::from_str(r#"{"theme":"light","show_translation":true}"#)
            .expect("parse");
        assert_eq!(s.theme, ThemeMode::Light);
        assert!(s.show_translation);
        assert_eq!(s.verse_font_size, 20);
    }
}
