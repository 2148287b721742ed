//! Audio playback: the verse queue, live radio and the output device.
//!
//! The controller is sans-IO. It decides what to load and returns an
//! [`AudioRequest`]; the caller fetches it off-thread with [`load_source`] and
//! hands the result back through `on_audio_loaded`, where stale results are
//! dropped by request id.

mod controller;
mod output;
mod queue;
mod source;

pub use controller::{
    AudioQueueController, AudioRequest, Direction, NowPlaying, PlayState, PlaybackMode,
    ToggleOutcome,
};
pub use output::{AudioOutput, RodioOutput};
pub use queue::{QueueItem, build_queue};
pub use source::{AudioSource, AudioTarget, StreamReader, load_source};
