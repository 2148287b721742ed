use crate::player::AudioRequest;
use crate::router::FetchTicket;
use iced::widget::scrollable::RelativeOffset;

mod core;
mod library;
mod navigation;
mod playback;
mod preferences;
mod reading;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    Fetch(FetchTicket),
    LoadAudio(AudioRequest),
    ScrollTo(RelativeOffset),
    CopyToClipboard(String),
    FocusQuickSearch,
}
