use super::super::messages::SettingEdit;
use super::super::state::App;
use super::Effect;
use crate::notify::Notification;
use crate::store::Settings;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let mut settings = self.settings.clone();
        settings.theme = settings.theme.toggled();
        let theme = settings.theme;
        if self.persist_settings(settings) {
            self.drafts.settings.theme = theme;
            info!(%theme, "Theme changed");
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_setting_edited(&mut self, edit: SettingEdit) {
        let draft = &mut self.drafts.settings;
        match edit {
            SettingEdit::Theme(theme) => draft.theme = theme,
            SettingEdit::FontSize(size) => draft.verse_font_size = size,
            SettingEdit::LineHeight(height) => draft.verse_line_height = height,
            SettingEdit::ShowTranslation(show) => draft.show_translation = show,
            SettingEdit::Translation(choice) => draft.translation_edition = choice.code.to_string(),
            SettingEdit::ShowCommentary(show) => draft.show_commentary = show,
            SettingEdit::Commentary(choice) => draft.commentary_edition = choice.code.to_string(),
            SettingEdit::Recitation(choice) => draft.recitation_edition = choice.code.to_string(),
            SettingEdit::RadioUrl(url) => draft.radio_url = url,
        }
    }

    pub(super) fn handle_save_settings(&mut self, effects: &mut Vec<Effect>) {
        if self.persist_settings(self.drafts.settings.clone()) {
            self.drafts.settings = self.settings.clone();
            self.drafts.radio_url = self.settings.radio_url.clone();
            self.notify(Notification::good("تم الحفظ", "تم تطبيق الإعدادات."));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_reset_settings(&mut self, effects: &mut Vec<Effect>) {
        match self.store.reset_settings() {
            Ok(defaults) => {
                info!("Settings reset to defaults");
                self.settings = defaults.clone();
                self.drafts.radio_url = defaults.radio_url.clone();
                self.drafts.settings = defaults;
                self.notify(Notification::warn(
                    "تمت الإعادة",
                    "تمت إعادة ضبط الإعدادات للوضع الافتراضي.",
                ));
            }
            Err(err) => self.notify_persist_failure("settings", &err),
        }
        self.refresh_view(effects);
    }

    /// Save `settings` and adopt the stored (clamped) copy.
    pub(super) fn persist_settings(&mut self, settings: Settings) -> bool {
        match self.store.save_settings(&settings) {
            Ok(saved) => {
                self.settings = saved;
                true
            }
            Err(err) => {
                self.notify_persist_failure("settings", &err);
                false
            }
        }
    }
}
