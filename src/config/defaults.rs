pub(crate) fn default_api_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

pub(crate) fn default_arabic_edition() -> String {
    "quran-uthmani".to_string()
}

pub(crate) fn default_data_dir() -> String {
    ".data".to_string()
}

pub(crate) fn default_cache_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_offline_cache() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_notification_secs() -> f32 {
    4.0
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_next_verse() -> String {
    "f".to_string()
}

pub(crate) fn default_key_prev_verse() -> String {
    "s".to_string()
}

pub(crate) fn default_key_stop_playback() -> String {
    "escape".to_string()
}

pub(crate) fn default_key_quick_search() -> String {
    "ctrl+k".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}
