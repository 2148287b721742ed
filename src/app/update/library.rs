use super::super::state::App;
use super::Effect;
use crate::notify::Notification;
use crate::store::{CounterEvent, TasbeehState};
use crate::text_utils::now_millis;

impl App {
    pub(super) fn handle_toggle_bookmark(
        &mut self,
        chapter: u16,
        verse: u32,
        global_index: u32,
        effects: &mut Vec<Effect>,
    ) {
        let mut bookmarks = self.store.bookmarks();
        let added = bookmarks.toggle(chapter, verse, global_index, now_millis());
        match self.store.save_bookmarks(&bookmarks) {
            Ok(()) => {
                let title = if added {
                    "تمت الإضافة للمفضلة"
                } else {
                    "تم الإزالة من المفضلة"
                };
                self.notify(Notification::good(
                    title,
                    format!("سورة {chapter} — آية {verse}"),
                ));
            }
            Err(err) => self.notify_persist_failure("bookmarks", &err),
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_remove_bookmark(&mut self, global_index: u32, effects: &mut Vec<Effect>) {
        let mut bookmarks = self.store.bookmarks();
        if !bookmarks.remove(global_index) {
            return;
        }
        match self.store.save_bookmarks(&bookmarks) {
            Ok(()) => self.notify(Notification::good(
                "تمت الإزالة",
                "تمت إزالة الآية من المفضلة.",
            )),
            Err(err) => self.notify_persist_failure("bookmarks", &err),
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_clear_bookmarks(&mut self, effects: &mut Vec<Effect>) {
        let mut bookmarks = self.store.bookmarks();
        bookmarks.clear();
        match self.store.save_bookmarks(&bookmarks) {
            Ok(()) => self.notify(Notification::warn("تم المسح", "تم مسح المفضلة.")),
            Err(err) => self.notify_persist_failure("bookmarks", &err),
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_counter_increment(&mut self, effects: &mut Vec<Effect>) {
        let mut tasbeeh = self.store.tasbeeh();
        let event = tasbeeh.increment();
        if self.save_tasbeeh(&tasbeeh) && event == CounterEvent::GoalReached {
            self.notify(Notification::good(
                "🎉 وصلت للهدف",
                format!("تم إكمال {} من: {}", tasbeeh.goal, tasbeeh.dhikr),
            ));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_counter_reset(&mut self, effects: &mut Vec<Effect>) {
        let mut tasbeeh = self.store.tasbeeh();
        tasbeeh.reset(now_millis());
        if self.save_tasbeeh(&tasbeeh) {
            self.notify(Notification::good(
                "تم التصفير",
                "تم حفظ العدد السابق في السجل.",
            ));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_counter_clear_history(&mut self, effects: &mut Vec<Effect>) {
        let mut tasbeeh = self.store.tasbeeh();
        tasbeeh.clear_history();
        if self.save_tasbeeh(&tasbeeh) {
            self.notify(Notification::warn("تم المسح", "تم مسح سجل السبحة."));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_dhikr_submitted(&mut self, effects: &mut Vec<Effect>) {
        let mut tasbeeh = self.store.tasbeeh();
        tasbeeh.set_dhikr(&self.drafts.dhikr);
        self.drafts.dhikr = tasbeeh.dhikr.clone();
        self.save_tasbeeh(&tasbeeh);
        self.refresh_view(effects);
    }

    pub(super) fn handle_goal_changed(&mut self, raw: String, effects: &mut Vec<Effect>) {
        let mut tasbeeh = self.store.tasbeeh();
        tasbeeh.set_goal(&raw);
        self.drafts.goal = raw;
        self.save_tasbeeh(&tasbeeh);
        self.refresh_view(effects);
    }

    pub(super) fn handle_save_default_radio(&mut self, effects: &mut Vec<Effect>) {
        let mut settings = self.settings.clone();
        settings.set_default_radio_url(&self.drafts.radio_url);
        if self.persist_settings(settings) {
            self.notify(Notification::good("تم الحفظ", "تم حفظ الرابط كرابط افتراضي."));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_add_radio_favorite(&mut self, effects: &mut Vec<Effect>) {
        let mut settings = self.settings.clone();
        if !settings.add_radio_favorite(&self.drafts.favorite_name, &self.drafts.radio_url) {
            self.notify(Notification::info("ضع رابط بث أولاً", ""));
            return;
        }
        if self.persist_settings(settings) {
            self.drafts.favorite_name.clear();
            self.notify(Notification::good("تمت الإضافة", "تم حفظ المحطة في المفضلة."));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_use_radio_favorite(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let mut settings = self.settings.clone();
        if settings.use_radio_favorite(index).is_none() {
            return;
        }
        let url = settings.radio_url.clone();
        if self.persist_settings(settings) {
            self.drafts.radio_url = url;
            self.notify(Notification::good("تم التعيين", "تم تعيينه كرابط افتراضي."));
        }
        self.refresh_view(effects);
    }

    pub(super) fn handle_remove_radio_favorite(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let mut settings = self.settings.clone();
        if settings.remove_radio_favorite(index).is_none() {
            return;
        }
        if self.persist_settings(settings) {
            self.notify(Notification::warn("تم الحذف", "تم حذف المحطة."));
        }
        self.refresh_view(effects);
    }

    fn save_tasbeeh(&mut self, tasbeeh: &TasbeehState) -> bool {
        match self.store.save_tasbeeh(tasbeeh) {
            Ok(()) => {
                self.counter = tasbeeh.count;
                true
            }
            Err(err) => {
                self.notify_persist_failure("counter", &err);
                false
            }
        }
    }
}
