use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "crate::config::defaults::default_arabic_edition")]
    pub arabic_edition: String,
    #[serde(default = "crate::config::defaults::default_data_dir")]
    pub data_dir: String,
    #[serde(default = "crate::config::defaults::default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "crate::config::defaults::default_offline_cache")]
    pub offline_cache: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_notification_secs")]
    pub notification_secs: f32,
    #[serde(default = "crate::config::defaults::default_key_toggle_play_pause")]
    pub key_toggle_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_next_verse")]
    pub key_next_verse: String,
    #[serde(default = "crate::config::defaults::default_key_prev_verse")]
    pub key_prev_verse: String,
    #[serde(default = "crate::config::defaults::default_key_stop_playback")]
    pub key_stop_playback: String,
    #[serde(default = "crate::config::defaults::default_key_quick_search")]
    pub key_quick_search: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: crate::config::defaults::default_api_base_url(),
            arabic_edition: crate::config::defaults::default_arabic_edition(),
            data_dir: crate::config::defaults::default_data_dir(),
            cache_dir: crate::config::defaults::default_cache_dir(),
            offline_cache: crate::config::defaults::default_offline_cache(),
            log_level: crate::config::defaults::default_log_level(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            notification_secs: crate::config::defaults::default_notification_secs(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_next_verse: crate::config::defaults::default_key_next_verse(),
            key_prev_verse: crate::config::defaults::default_key_prev_verse(),
            key_stop_playback: crate::config::defaults::default_key_stop_playback(),
            key_quick_search: crate::config::defaults::default_key_quick_search(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
        }
    }
}

impl AppConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn cache_path(&self) -> PathBuf {
        PathBuf::from(&self.cache_dir)
    }

    pub fn notification_lifetime(&self) -> Duration {
        let secs = if self.notification_secs.is_finite() {
            self.notification_secs.clamp(1.0, 30.0)
        } else {
            crate::config::defaults::default_notification_secs()
        };
        Duration::from_secs_f32(secs)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
