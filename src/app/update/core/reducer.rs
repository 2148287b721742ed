use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Started(address) => self.handle_started(address, &mut effects),
            Message::Navigate(address) => self.navigate(address, true, &mut effects),
            Message::Back => self.handle_back(&mut effects),
            Message::Retry => self.handle_retry(&mut effects),
            Message::AddressInputChanged(value) => self.address_input = value,
            Message::AddressSubmitted => self.handle_address_submitted(&mut effects),
            Message::CatalogueLoaded { nav_id, result } => {
                self.handle_catalogue_loaded(nav_id, result, &mut effects)
            }
            Message::ChapterLoaded {
                nav_id,
                number,
                result,
            } => self.handle_chapter_loaded(nav_id, number, result, &mut effects),
            Message::FocusQuickSearch => effects.push(Effect::FocusQuickSearch),
            Message::QuickSearchChanged(query) => {
                self.handle_quick_search_changed(query, &mut effects)
            }
            Message::QuickSearchSubmitted => self.handle_quick_search_submitted(&mut effects),
            Message::FilterChanged(query) => self.handle_filter_changed(query, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::PlayVerse(global_index) => self.handle_play_verse(global_index, &mut effects),
            Message::PlayChapter => self.handle_play_chapter(&mut effects),
            Message::ToggleBookmark {
                chapter,
                verse,
                global_index,
            } => self.handle_toggle_bookmark(chapter, verse, global_index, &mut effects),
            Message::CopyVerse(global_index) => self.handle_copy_verse(global_index, &mut effects),
            Message::CopyVerseLink(verse) => self.handle_copy_verse_link(verse, &mut effects),
            Message::ScrollToTop => self.handle_scroll_to_top(&mut effects),
            Message::JumpToLastRead => self.handle_jump_to_last_read(&mut effects),
            Message::Scrolled(offset) => self.handle_scrolled(offset),
            Message::TogglePlayPause => self.handle_toggle_play_pause(),
            Message::NextVerse => self.handle_next_verse(&mut effects),
            Message::PreviousVerse => self.handle_previous_verse(&mut effects),
            Message::StopPlayback => self.handle_stop_playback(),
            Message::AudioLoaded { request_id, result } => {
                self.handle_audio_loaded(request_id, result)
            }
            Message::RemoveBookmark(global_index) => self.handle_remove_bookmark(global_index, &mut effects),
            Message::ClearBookmarks => self.handle_clear_bookmarks(&mut effects),
            Message::SettingEdited(edit) => self.handle_setting_edited(edit),
            Message::SaveSettings => self.handle_save_settings(&mut effects),
            Message::ResetSettings => self.handle_reset_settings(&mut effects),
            Message::RadioUrlChanged(url) => self.drafts.radio_url = url,
            Message::FavoriteNameChanged(name) => self.drafts.favorite_name = name,
            Message::PlayRadio => self.handle_play_radio(&mut effects),
            Message::SaveDefaultRadio => self.handle_save_default_radio(&mut effects),
            Message::AddRadioFavorite => self.handle_add_radio_favorite(&mut effects),
            Message::PlayRadioFavorite(idx) => self.handle_play_radio_favorite(idx, &mut effects),
            Message::UseRadioFavorite(idx) => self.handle_use_radio_favorite(idx, &mut effects),
            Message::RemoveRadioFavorite(idx) => self.handle_remove_radio_favorite(idx, &mut effects),
            Message::CounterIncrement => self.handle_counter_increment(&mut effects),
            Message::CounterReset => self.handle_counter_reset(&mut effects),
            Message::CounterClearHistory => self.handle_counter_clear_history(&mut effects),
            Message::DhikrChanged(value) => self.drafts.dhikr = value,
            Message::DhikrSubmitted => self.handle_dhikr_submitted(&mut effects),
            Message::GoalChanged(value) => self.handle_goal_changed(value, &mut effects),
            Message::DismissToast(id) => self.toasts.dismiss(id),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.toasts.expire(now);
        self.flush_last_read(now);
        let edition = self.recitation_edition();
        if let Some(request) = self.player.poll(&edition) {
            effects.push(Effect::LoadAudio(request));
        }
    }
}
