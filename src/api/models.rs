//! Wire types of the content API.
//!
//! Every response is wrapped in `{ "code": .., "status": "OK", "data": .. }`.
//! Field names follow the remote JSON; the Rust names describe the meaning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationPlace {
    Meccan,
    Medinan,
}

impl std::fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RevelationPlace::Meccan => "Meccan",
            RevelationPlace::Medinan => "Medinan",
        };
        f.write_str(label)
    }
}

/// One entry of the chapter catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub number: u16,
    #[serde(rename = "name")]
    pub native_name: String,
    #[serde(rename = "englishName")]
    pub transliterated_name: String,
    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u16,
    #[serde(rename = "revelationType")]
    pub revelation_place: RevelationPlace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Position within the whole text (1..=6236); also the audio key.
    #[serde(rename = "number")]
    pub global_index: u32,
    #[serde(rename = "numberInSurah")]
    pub index_in_chapter: u32,
    pub text: String,
    #[serde(rename = "juz")]
    pub juz_number: u32,
    #[serde(rename = "hizbQuarter")]
    pub hizb_quarter_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionInfo {
    pub identifier: String,
    #[serde(default)]
    pub language: String,
    #[serde(default, rename = "englishName")]
    pub english_name: String,
}

/// A chapter as rendered by one edition (script, translation or commentary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionText {
    pub number: u16,
    #[serde(rename = "name")]
    pub native_name: String,
    #[serde(rename = "englishName")]
    pub transliterated_name: String,
    #[serde(rename = "revelationType")]
    pub revelation_place: Option<RevelationPlace>,
    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u16,
    #[serde(default)]
    pub edition: Option<EditionInfo>,
    #[serde(rename = "ayahs")]
    pub verses: Vec<VerseRecord>,
}

impl EditionText {
    pub fn identifier(&self) -> Option<&str> {
        self.edition.as_ref().map(|e| e.identifier.as_str())
    }
}

/// Audio lookup for one verse in one recitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseAudio {
    #[serde(rename = "number")]
    pub global_index: u32,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default, rename = "audioSecondary")]
    pub audio_secondary: Vec<String>,
}

impl VerseAudio {
    /// First usable clip location, primary before secondaries.
    pub fn clip_url(&self) -> Option<&str> {
        self.audio
            .iter()
            .chain(self.audio_secondary.iter())
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    #[serde(default)]
    pub code: Option<u16>,
    pub status: String,
    pub data: Option<T>,
}
