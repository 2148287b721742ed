use super::super::state::{App, LAST_READ_THROTTLE};
use super::Effect;
use crate::notify::Notification;
use crate::router::chapter_address;
use iced::widget::scrollable::RelativeOffset;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(&mut self, offset: RelativeOffset) {
        if self.router.chapter_view().is_none() {
            return;
        }
        let y = if offset.y.is_finite() {
            offset.y.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.reading.pending_fraction = Some(y);
        self.flush_last_read(Instant::now());
    }

    /// Turn the latest scroll position into a reading position, at most once
    /// per throttle window. Anything held back is flushed by the tick.
    pub(super) fn flush_last_read(&mut self, now: Instant) {
        let Some(fraction) = self.reading.pending_fraction else {
            return;
        };
        if self
            .reading
            .last_recorded_at
            .is_some_and(|at| now.saturating_duration_since(at) < LAST_READ_THROTTLE)
        {
            return;
        }
        self.reading.pending_fraction = None;
        self.reading.last_recorded_at = Some(now);
        if let Some(verse) = self.router.verse_near(fraction) {
            if self.router.record_last_read(verse, &self.store) {
                debug!(verse, fraction, "Reading position updated from scroll");
            }
        }
    }

    pub(super) fn handle_scroll_to_top(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollTo(RelativeOffset::START));
    }

    pub(super) fn handle_jump_to_last_read(&mut self, effects: &mut Vec<Effect>) {
        let Some(number) = self.router.chapter_view().map(|detail| detail.number) else {
            return;
        };
        let target = self
            .store
            .last_read()
            .filter(|position| position.chapter == number)
            .and_then(|position| self.router.fraction_for_verse(position.verse));
        match target {
            Some(y) => effects.push(Effect::ScrollTo(RelativeOffset { x: 0.0, y })),
            None => self.notify(Notification::info("لا يوجد موضع داخل هذه السورة", "")),
        }
    }

    pub(super) fn handle_copy_verse(&mut self, global_index: u32, effects: &mut Vec<Effect>) {
        let Some(text) = self
            .router
            .chapter_view()
            .and_then(|detail| detail.card_by_global(global_index))
            .map(|card| card.text.clone())
        else {
            return;
        };
        effects.push(Effect::CopyToClipboard(text));
        self.notify(Notification::good("تم النسخ", "تم نسخ نص الآية إلى الحافظة."));
    }

    pub(super) fn handle_copy_verse_link(&mut self, verse: u32, effects: &mut Vec<Effect>) {
        let Some(number) = self.router.chapter_view().map(|detail| detail.number) else {
            return;
        };
        effects.push(Effect::CopyToClipboard(chapter_address(number, Some(verse))));
        self.notify(Notification::good("تم نسخ الرابط", "شارك الرابط الآن."));
    }
}
