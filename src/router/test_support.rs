use crate::api::{ChapterSummary, EditionInfo, EditionText, RevelationPlace, VerseRecord};

pub(crate) fn build_test_catalogue() -> Vec<ChapterSummary> {
    let names = [
        (1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", 7),
        (2, "سُورَةُ البَقَرَةِ", "Al-Baqara", 286),
        (18, "سُورَةُ الكَهۡفِ", "Al-Kahf", 110),
        (112, "سُورَةُ الإِخۡلَاصِ", "Al-Ikhlaas", 4),
    ];
    names
        .into_iter()
        .map(|(number, native, latin, count)| ChapterSummary {
            number,
            native_name: native.to_string(),
            transliterated_name: latin.to_string(),
            verse_count: count,
            revelation_place: if number == 2 {
                RevelationPlace::Medinan
            } else {
                RevelationPlace::Meccan
            },
        })
        .collect()
}

/// A combined editions response for chapter `number` with `verses` verses.
pub(crate) fn build_test_editions(number: u16, verses: u32, codes: &[&str]) -> Vec<EditionText> {
    let first_global = u32::from(number) * 1000;
    codes
        .iter()
        .map(|code| EditionText {
            number,
            native_name: format!("سورة {number}"),
            transliterated_name: format!("Chapter {number}"),
            revelation_place: Some(RevelationPlace::Meccan),
            verse_count: verses as u16,
            edition: Some(EditionInfo {
                identifier: code.to_string(),
                language: String::new(),
                english_name: String::new(),
            }),
            verses: (1..=verses)
                .map(|i| VerseRecord {
                    global_index: first_global + i,
                    index_in_chapter: i,
                    text: format!("{code} {number}:{i}"),
                    juz_number: 1,
                    hizb_quarter_number: 1,
                })
                .collect(),
        })
        .collect()
}
