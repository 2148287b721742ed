use super::super::state::App;
use super::Effect;
use crate::notify::Notification;
use crate::player::{AudioRequest, AudioSource, Direction, ToggleOutcome};
use tracing::debug;

const RADIO_SUBTITLE: &str = "بث مباشر 24 ساعة";

impl App {
    pub(super) fn handle_play_verse(&mut self, global_index: u32, effects: &mut Vec<Effect>) {
        if self.player.is_loading() {
            debug!(global_index, "Ignoring play while audio is loading");
            return;
        }
        let queue = self
            .router
            .chapter_view()
            .map(|detail| detail.queue.clone());
        let edition = self.recitation_edition();
        let request = self
            .player
            .play_single_or_queue(global_index, queue, &edition);
        push_audio(request, effects);
    }

    pub(super) fn handle_play_chapter(&mut self, effects: &mut Vec<Effect>) {
        let first = self
            .router
            .chapter_view()
            .and_then(|detail| detail.queue.first())
            .map(|item| item.global_index);
        if let Some(global_index) = first {
            self.handle_play_verse(global_index, effects);
        }
    }

    pub(super) fn handle_toggle_play_pause(&mut self) {
        match self.player.toggle() {
            ToggleOutcome::Inactive => self.notify(Notification::info(
                "لا يوجد تشغيل",
                "اختر آية للاستماع أولاً.",
            )),
            outcome => debug!(?outcome, "Play/pause toggled"),
        }
    }

    pub(super) fn handle_next_verse(&mut self, effects: &mut Vec<Effect>) {
        self.step(Direction::Forward, effects);
    }

    pub(super) fn handle_previous_verse(&mut self, effects: &mut Vec<Effect>) {
        self.step(Direction::Backward, effects);
    }

    pub(super) fn handle_stop_playback(&mut self) {
        if self.player.is_active() {
            self.player.stop();
        }
    }

    pub(super) fn handle_audio_loaded(&mut self, request_id: u64, result: Result<AudioSource, String>) {
        if let Some(notice) = self.player.on_audio_loaded(request_id, result) {
            self.notify(notice);
        }
    }

    pub(super) fn handle_play_radio(&mut self, effects: &mut Vec<Effect>) {
        let url = self.drafts.radio_url.trim().to_string();
        if url.is_empty() {
            self.notify(Notification::info("ضع رابط بث أولاً", ""));
            return;
        }
        let request = self.player.play_radio(&url, "", RADIO_SUBTITLE);
        push_audio(request, effects);
    }

    pub(super) fn handle_play_radio_favorite(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(favorite) = self.settings.radio_favorites.get(index).cloned() else {
            return;
        };
        let request = self.player.play_radio(&favorite.url, &favorite.name, "");
        push_audio(request, effects);
    }

    fn step(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        if self.player.is_loading() {
            debug!(?direction, "Ignoring skip while audio is loading");
            return;
        }
        let edition = self.recitation_edition();
        let request = self.player.advance(direction, &edition);
        push_audio(request, effects);
    }
}

fn push_audio(request: Option<AudioRequest>, effects: &mut Vec<Effect>) {
    if let Some(request) = request {
        effects.push(Effect::LoadAudio(request));
    }
}
