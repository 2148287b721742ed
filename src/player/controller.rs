use super::output::AudioOutput;
use super::queue::QueueItem;
use super::source::{AudioSource, AudioTarget};
use crate::notify::Notification;
use tracing::{debug, info, warn};

pub const IDLE_TITLE: &str = "جاهز للاستماع";
pub const IDLE_SUBTITLE: &str = "اختر آية للاستماع";
pub const DEFAULT_RADIO_TITLE: &str = "راديو القرآن";
pub const DEFAULT_RADIO_SUBTITLE: &str = "بث مباشر";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Idle,
    Queue,
    Radio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Loading,
    Playing,
    Paused,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Result of the play/pause control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Nothing is active; the caller should tell the user to pick a verse.
    Inactive,
    Paused,
    Resumed,
    /// The output refused to resume; state is unchanged.
    ResumeSuppressed,
}

/// Work the caller must perform off-thread, tagged for staleness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    pub request_id: u64,
    pub target: AudioTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioStation {
    pub url: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    pub mode: PlaybackMode,
    pub queue: Vec<QueueItem>,
    pub current_index: Option<usize>,
    pub play_state: PlayState,
    /// Set when the requested verse was absent and the queue fell back to its start.
    pub target_missing: bool,
    pub radio: Option<RadioStation>,
    pub request_id: u64,
}

impl PlaybackSession {
    fn idle(request_id: u64) -> Self {
        Self {
            mode: PlaybackMode::Idle,
            queue: Vec::new(),
            current_index: None,
            play_state: PlayState::Paused,
            target_missing: false,
            radio: None,
            request_id,
        }
    }

    pub fn current_item(&self) -> Option<&QueueItem> {
        self.current_index.and_then(|idx| self.queue.get(idx))
    }
}

/// Mini-player labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub subtitle: String,
}

/// Single owner of playback: the verse queue, the radio stream and the output device.
pub struct AudioQueueController<O> {
    session: PlaybackSession,
    output: O,
}

impl<O: AudioOutput> AudioQueueController<O> {
    pub fn new(output: O) -> Self {
        Self {
            session: PlaybackSession::idle(0),
            output,
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.mode != PlaybackMode::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.is_active() && self.session.play_state == PlayState::Loading
    }

    pub fn is_playing(&self) -> bool {
        self.is_active() && self.session.play_state == PlayState::Playing
    }

    /// Global index of the verse being played, if in queue mode.
    pub fn current_verse(&self) -> Option<u32> {
        match self.session.mode {
            PlaybackMode::Queue => self.session.current_item().map(|item| item.global_index),
            _ => None,
        }
    }

    pub fn now_playing(&self) -> NowPlaying {
        match self.session.mode {
            PlaybackMode::Idle => NowPlaying {
                title: IDLE_TITLE.to_string(),
                subtitle: IDLE_SUBTITLE.to_string(),
            },
            PlaybackMode::Radio => {
                let station = self.session.radio.as_ref();
                NowPlaying {
                    title: station
                        .map(|s| s.title.clone())
                        .unwrap_or_else(|| DEFAULT_RADIO_TITLE.to_string()),
                    subtitle: station
                        .map(|s| s.subtitle.clone())
                        .unwrap_or_else(|| DEFAULT_RADIO_SUBTITLE.to_string()),
                }
            }
            PlaybackMode::Queue => match self.session.current_item() {
                Some(item) => NowPlaying {
                    title: item.title.clone(),
                    subtitle: item.subtitle.clone(),
                },
                None => NowPlaying {
                    title: IDLE_TITLE.to_string(),
                    subtitle: IDLE_SUBTITLE.to_string(),
                },
            },
        }
    }

    /// Start queue playback at `target`. Without a queue a one-item queue is built.
    pub fn play_single_or_queue(
        &mut self,
        target: u32,
        queue: Option<Vec<QueueItem>>,
        edition: &str,
    ) -> Option<AudioRequest> {
        let queue = match queue {
            Some(items) if !items.is_empty() => items,
            _ => vec![QueueItem::standalone(target)],
        };
        let position = queue.iter().position(|item| item.global_index == target);
        let target_missing = position.is_none();
        if target_missing {
            warn!(
                target,
                queue_len = queue.len(),
                "Requested verse not in queue; starting from the first item"
            );
        }
        self.session.mode = PlaybackMode::Queue;
        self.session.radio = None;
        self.session.queue = queue;
        self.session.current_index = Some(position.unwrap_or(0));
        self.session.target_missing = target_missing;
        self.load_current(edition)
    }

    /// Move to the neighbouring verse, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction, edition: &str) -> Option<AudioRequest> {
        if self.session.mode != PlaybackMode::Queue {
            return None;
        }
        let len = self.session.queue.len();
        if len <= 1 {
            return None;
        }
        let current = self.session.current_index.unwrap_or(0);
        let next = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
        };
        self.session.current_index = Some(next);
        self.session.target_missing = false;
        self.load_current(edition)
    }

    pub fn play_radio(&mut self, url: &str, title: &str, subtitle: &str) -> Option<AudioRequest> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }
        let title = title.trim();
        let subtitle = subtitle.trim();
        self.session.mode = PlaybackMode::Radio;
        self.session.queue.clear();
        self.session.current_index = None;
        self.session.target_missing = false;
        self.session.radio = Some(RadioStation {
            url: url.to_string(),
            title: if title.is_empty() {
                DEFAULT_RADIO_TITLE.to_string()
            } else {
                title.to_string()
            },
            subtitle: if subtitle.is_empty() {
                DEFAULT_RADIO_SUBTITLE.to_string()
            } else {
                subtitle.to_string()
            },
        });
        info!(url, "Starting radio stream");
        Some(self.begin_request(AudioTarget::Stream {
            url: url.to_string(),
        }))
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        if !self.is_active() {
            return ToggleOutcome::Inactive;
        }
        match self.session.play_state {
            PlayState::Playing => {
                self.output.pause();
                self.session.play_state = PlayState::Paused;
                ToggleOutcome::Paused
            }
            PlayState::Paused | PlayState::Errored => match self.output.resume() {
                Ok(()) => {
                    self.session.play_state = PlayState::Playing;
                    ToggleOutcome::Resumed
                }
                Err(err) => {
                    debug!("Resume suppressed: {err:#}");
                    ToggleOutcome::ResumeSuppressed
                }
            },
            PlayState::Loading => ToggleOutcome::ResumeSuppressed,
        }
    }

    /// Silence output and return to idle. In-flight loads become stale.
    pub fn stop(&mut self) {
        self.output.stop();
        self.session = PlaybackSession::idle(self.session.request_id + 1);
        info!("Playback stopped");
    }

    /// Deliver the outcome of an [`AudioRequest`]. Stale outcomes are dropped.
    pub fn on_audio_loaded(
        &mut self,
        request_id: u64,
        result: Result<AudioSource, String>,
    ) -> Option<Notification> {
        if request_id != self.session.request_id || !self.is_active() {
            debug!(
                request_id,
                current = self.session.request_id,
                "Discarding stale audio result"
            );
            return None;
        }
        let started = result.and_then(|source| {
            self.output
                .start(source)
                .map_err(|err| format!("{err:#}"))
        });
        match started {
            Ok(()) => {
                self.session.play_state = PlayState::Playing;
                None
            }
            Err(err) => {
                warn!(request_id, mode = ?self.session.mode, "Audio failed: {err}");
                self.session.play_state = PlayState::Errored;
                Some(self.failure_notice())
            }
        }
    }

    /// Current track reached its end.
    pub fn on_track_finished(&mut self, edition: &str) -> Option<AudioRequest> {
        if self.session.mode != PlaybackMode::Queue
            || self.session.play_state != PlayState::Playing
        {
            return None;
        }
        if self.session.queue.len() > 1 {
            self.advance(Direction::Forward, edition)
        } else {
            self.session.play_state = PlayState::Paused;
            None
        }
    }

    /// Periodic check of the output for end of track.
    pub fn poll(&mut self, edition: &str) -> Option<AudioRequest> {
        if self.is_playing() && self.output.is_finished() {
            self.on_track_finished(edition)
        } else {
            None
        }
    }

    fn load_current(&mut self, edition: &str) -> Option<AudioRequest> {
        let item = self.session.current_item()?;
        let target = AudioTarget::Verse {
            global_index: item.global_index,
            edition: edition.to_string(),
        };
        debug!(
            index = ?self.session.current_index,
            global_index = item.global_index,
            edition,
            "Loading verse audio"
        );
        Some(self.begin_request(target))
    }

    fn begin_request(&mut self, target: AudioTarget) -> AudioRequest {
        self.output.stop();
        self.session.request_id += 1;
        self.session.play_state = PlayState::Loading;
        AudioRequest {
            request_id: self.session.request_id,
            target,
        }
    }

    fn failure_notice(&self) -> Notification {
        match self.session.mode {
            PlaybackMode::Radio => Notification::warn(
                "تعذّر تشغيل الراديو",
                "قد يكون الرابط غير صالح أو البث متوقفًا.",
            ),
            _ => Notification::bad(
                "فشل تشغيل التلاوة",
                "قد يكون الاتصال ضعيفًا. جرّب مرة أخرى.",
            ),
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &O {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};

    #[derive(Default)]
    struct FakeOutput {
        started: usize,
        stops: usize,
        playing: bool,
        loaded: bool,
        finished: bool,
        fail_start: bool,
    }

    impl AudioOutput for FakeOutput {
        fn start(&mut self, _source: AudioSource) -> Result<()> {
            if self.fail_start {
                return Err(anyhow!("decoder refused"));
            }
            self.started += 1;
            self.loaded = true;
            self.playing = true;
            self.finished = false;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn resume(&mut self) -> Result<()> {
            if !self.loaded {
                return Err(anyhow!("nothing loaded"));
            }
            self.playing = true;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
            self.loaded = false;
            self.playing = false;
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }

    fn items(indices: &[u32]) -> Vec<QueueItem> {
        indices
            .iter()
            .map(|&global_index| QueueItem {
                global_index,
                title: format!("آية {global_index}"),
                subtitle: String::new(),
            })
            .collect()
    }

    fn clip() -> AudioSource {
        AudioSource::clip(vec![0, 1, 2])
    }

    fn controller() -> AudioQueueController<FakeOutput> {
        AudioQueueController::new(FakeOutput::default())
    }

    fn started(c: &mut AudioQueueController<FakeOutput>, request: Option<AudioRequest>) {
        let request = request.expect("request");
        assert!(c.on_audio_loaded(request.request_id, Ok(clip())).is_none());
    }

    #[test]
    fn starts_at_target_inside_queue() {
        let mut c = controller();
        let request = c
            .play_single_or_queue(20, Some(items(&[10, 20, 30])), "ar.alafasy")
            .expect("request");
        assert_eq!(c.session().current_index, Some(1));
        assert_eq!(c.session().play_state, PlayState::Loading);
        assert_eq!(
            request.target,
            AudioTarget::Verse {
                global_index: 20,
                edition: "ar.alafasy".into()
            }
        );
        assert!(!c.session().target_missing);
    }

    #[test]
    fn missing_target_falls_back_to_first_item() {
        let mut c = controller();
        let request = c
            .play_single_or_queue(99, Some(items(&[10, 20, 30])), "ar.alafasy")
            .expect("request");
        assert_eq!(c.session().current_index, Some(0));
        assert!(c.session().target_missing);
        assert!(matches!(
            request.target,
            AudioTarget::Verse { global_index: 10, .. }
        ));
    }

    #[test]
    fn no_queue_builds_single_item_queue() {
        let mut c = controller();
        c.play_single_or_queue(262, None, "ar.husary");
        assert_eq!(c.session().queue.len(), 1);
        assert_eq!(c.current_verse(), Some(262));
        assert_eq!(c.session().mode, PlaybackMode::Queue);
    }

    #[test]
    fn advancing_wraps_in_both_directions() {
        let mut c = controller();
        c.play_single_or_queue(30, Some(items(&[10, 20, 30])), "e");
        c.advance(Direction::Forward, "e");
        assert_eq!(c.session().current_index, Some(0));
        c.advance(Direction::Backward, "e");
        assert_eq!(c.session().current_index, Some(2));
        c.advance(Direction::Backward, "e");
        assert_eq!(c.session().current_index, Some(1));
    }

    #[test]
    fn index_stays_in_bounds_over_many_moves() {
        let mut c = controller();
        c.play_single_or_queue(10, Some(items(&[10, 20, 30, 40, 50])), "e");
        for step in 0..40 {
            let direction = if step % 3 == 0 {
                Direction::Backward
            } else {
                Direction::Forward
            };
            c.advance(direction, "e");
            let idx = c.session().current_index.expect("index");
            assert!(idx < c.session().queue.len());
        }
    }

    #[test]
    fn single_item_queue_does_not_advance() {
        let mut c = controller();
        c.play_single_or_queue(5, None, "e");
        assert!(c.advance(Direction::Forward, "e").is_none());
        assert_eq!(c.session().current_index, Some(0));
    }

    #[test]
    fn radio_mode_clears_queue_and_ignores_navigation() {
        let mut c = controller();
        c.play_single_or_queue(20, Some(items(&[10, 20])), "e");
        let request = c.play_radio(" https://radio.test/live ", "", "");
        started(&mut c, request);
        assert_eq!(c.session().mode, PlaybackMode::Radio);
        assert!(c.session().queue.is_empty());
        assert_eq!(c.session().current_index, None);
        assert!(c.advance(Direction::Forward, "e").is_none());
        assert!(c.advance(Direction::Backward, "e").is_none());
        assert_eq!(c.now_playing().title, DEFAULT_RADIO_TITLE);
        assert_eq!(c.now_playing().subtitle, DEFAULT_RADIO_SUBTITLE);
    }

    #[test]
    fn toggle_pauses_and_resumes_radio() {
        let mut c = controller();
        let request = c.play_radio("https://radio.test/live", "محطة", "بث");
        started(&mut c, request);
        assert_eq!(c.toggle(), ToggleOutcome::Paused);
        assert_eq!(c.session().play_state, PlayState::Paused);
        assert!(!c.output().playing);
        assert_eq!(c.toggle(), ToggleOutcome::Resumed);
        assert_eq!(c.session().play_state, PlayState::Playing);
        assert!(c.output().playing);
        assert_eq!(c.session().mode, PlaybackMode::Radio);
        assert!(c.session().queue.is_empty());
        assert_eq!(c.session().current_index, None);
    }

    #[test]
    fn blank_radio_url_is_rejected() {
        let mut c = controller();
        assert!(c.play_radio("   ", "x", "y").is_none());
        assert!(!c.is_active());
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let mut c = controller();
        assert_eq!(c.toggle(), ToggleOutcome::Inactive);
        let request = c.play_single_or_queue(10, Some(items(&[10, 20])), "e");
        started(&mut c, request);
        assert_eq!(c.toggle(), ToggleOutcome::Paused);
        assert!(!c.output().playing);
        assert_eq!(c.toggle(), ToggleOutcome::Resumed);
        assert_eq!(c.session().play_state, PlayState::Playing);
    }

    #[test]
    fn refused_resume_leaves_state_paused() {
        let mut c = controller();
        let request = c.play_single_or_queue(10, Some(items(&[10, 20])), "e");
        started(&mut c, request);
        c.toggle();
        c.output.loaded = false;
        assert_eq!(c.toggle(), ToggleOutcome::ResumeSuppressed);
        assert_eq!(c.session().play_state, PlayState::Paused);
    }

    #[test]
    fn stale_audio_results_are_ignored() {
        let mut c = controller();
        let first = c
            .play_single_or_queue(10, Some(items(&[10, 20, 30])), "e")
            .expect("first");
        let second = c.advance(Direction::Forward, "e").expect("second");
        assert!(c.on_audio_loaded(first.request_id, Ok(clip())).is_none());
        assert_eq!(c.output().started, 0);
        assert_eq!(c.session().play_state, PlayState::Loading);
        c.on_audio_loaded(second.request_id, Ok(clip()));
        assert_eq!(c.output().started, 1);
        assert_eq!(c.current_verse(), Some(20));
    }

    #[test]
    fn results_after_stop_are_ignored() {
        let mut c = controller();
        let request = c.play_single_or_queue(10, None, "e").expect("request");
        c.stop();
        assert!(c.on_audio_loaded(request.request_id, Ok(clip())).is_none());
        assert_eq!(c.output().started, 0);
        assert!(!c.is_active());
        assert_eq!(c.now_playing().title, IDLE_TITLE);
    }

    #[test]
    fn load_failure_keeps_position_and_notifies() {
        let mut c = controller();
        let request = c
            .play_single_or_queue(20, Some(items(&[10, 20, 30])), "e")
            .expect("request");
        let notice = c.on_audio_loaded(request.request_id, Err("404".into()));
        assert!(notice.is_some());
        assert_eq!(c.session().play_state, PlayState::Errored);
        assert_eq!(c.session().current_index, Some(1));
        assert!(c.advance(Direction::Forward, "e").is_some());
        assert_eq!(c.current_verse(), Some(30));
    }

    #[test]
    fn decoder_failure_marks_errored() {
        let mut c = controller();
        c.output.fail_start = true;
        let request = c.play_radio("https://radio.test/x", "", "").expect("request");
        let notice = c.on_audio_loaded(request.request_id, Ok(clip()));
        assert!(notice.is_some());
        assert_eq!(c.session().play_state, PlayState::Errored);
    }

    #[test]
    fn finished_track_advances_queue() {
        let mut c = controller();
        let request = c.play_single_or_queue(20, Some(items(&[10, 20, 30])), "e");
        started(&mut c, request);
        c.output.finished = true;
        let next = c.poll("e").expect("next request");
        assert!(matches!(
            next.target,
            AudioTarget::Verse { global_index: 30, .. }
        ));
    }

    #[test]
    fn finished_single_track_pauses() {
        let mut c = controller();
        let request = c.play_single_or_queue(7, None, "e");
        started(&mut c, request);
        assert!(c.on_track_finished("e").is_none());
        assert_eq!(c.session().play_state, PlayState::Paused);
    }

    #[test]
    fn finished_radio_does_not_advance() {
        let mut c = controller();
        let request = c.play_radio("https://radio.test/x", "محطة", "");
        started(&mut c, request);
        assert!(c.on_track_finished("e").is_none());
        assert_eq!(c.session().play_state, PlayState::Playing);
        assert_eq!(c.now_playing().title, "محطة");
    }
}
