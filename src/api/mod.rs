//! Content API access: catalogue, chapter editions, recitation audio and live streams.

mod client;
mod models;

pub use client::{ContentClient, decode_envelope};
pub use models::{
    ChapterSummary, EditionInfo, EditionText, RevelationPlace, VerseAudio, VerseRecord,
};
