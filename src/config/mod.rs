//! Configuration loading for the Quran companion.
//!
//! Process-level settings (where the content API lives, where local data and
//! the offline cache are kept, log verbosity, window size, key bindings) are
//! loaded from `conf/config.toml` if present. Missing or invalid entries fall
//! back to defaults so the UI can still launch. Reader preferences that the
//! user edits in the app live in the local store instead.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config};
pub use models::{AppConfig, LogLevel};
