use super::super::messages::{Message, SettingEdit};
use super::super::state::App;
use super::arabic;
use crate::router::{
    BookmarksView, ChapterDetailView, ChapterListView, ContinueReading, CounterView, HomeView,
    RadioView, VerseCard, View,
};
use crate::store::{
    COMMENTARY_CHOICES, MAX_VERSE_FONT_SIZE, MAX_VERSE_LINE_HEIGHT, MIN_VERSE_FONT_SIZE,
    MIN_VERSE_LINE_HEIGHT, RECITATION_CHOICES, TRANSLATION_CHOICES, ThemeMode, choice_for,
};
use iced::alignment::Vertical;
use iced::widget::text::{LineHeight, Shaping};
use iced::widget::{
    Column, button, checkbox, column, container, horizontal_space, pick_list, row, slider, text,
    text_input,
};
use iced::{Element, Length};

impl App {
    pub(super) fn page(&self) -> Element<'_, Message> {
        match self.router.view() {
            View::Loading { label } => arabic(label.clone(), 16.0).into(),
            View::Home(home) => self.home_page(home),
            View::ChapterList(list) => self.chapter_list_page(list),
            View::ChapterDetail(detail) => self.chapter_page(detail),
            View::ChapterUnavailable { number } => card(
                column![
                    arabic("تعذّر تحميل السورة", 18.0),
                    arabic(
                        format!("سورة رقم {number}: قد يكون الاتصال ضعيفًا أو الإصدار غير متاح."),
                        14.0
                    )
                    .style(text::secondary),
                    row![
                        button(arabic("إعادة المحاولة", 14.0)).on_press(Message::Retry),
                        nav_button("الإعدادات", "#/settings"),
                        nav_button("قائمة السور", "#/chapters"),
                    ]
                    .spacing(8),
                ]
                .spacing(10),
            ),
            View::CatalogueUnavailable { .. } => card(
                column![
                    arabic("تعذّر تحميل قائمة السور", 18.0),
                    arabic("تحقق من الإنترنت ثم أعد المحاولة.", 14.0).style(text::secondary),
                    button(arabic("إعادة المحاولة", 14.0)).on_press(Message::Retry),
                ]
                .spacing(10),
            ),
            View::Bookmarks(bookmarks) => self.bookmarks_page(bookmarks),
            View::Settings(_) => self.settings_page(),
            View::Radio(radio) => self.radio_page(radio),
            View::Counter(counter) => self.counter_page(counter),
            View::NotFound => card(
                column![
                    arabic("الصفحة غير موجودة", 18.0),
                    arabic("ارجع للرئيسية.", 14.0).style(text::secondary),
                    nav_button("الرئيسية", "#/"),
                ]
                .spacing(10),
            ),
        }
    }

    fn home_page(&self, home: &HomeView) -> Element<'_, Message> {
        let mut content = column![
            arabic("أهلًا بك", 20.0),
            arabic(
                format!("{} سورة جاهزة للقراءة والاستماع.", home.chapter_count),
                14.0
            )
            .style(text::secondary),
            row![
                nav_button("قائمة السور", "#/chapters"),
                nav_button("راديو القرآن", "#/radio"),
                nav_button("السبحة", "#/counter"),
            ]
            .spacing(8),
        ]
        .spacing(10);
        content = content.push(continue_reading(home.continue_reading.as_ref()));
        card(content)
    }

    fn chapter_list_page(&self, list: &ChapterListView) -> Element<'_, Message> {
        let filter = text_input("ابحث باسم السورة أو رقمها…", &list.filter)
            .on_input(Message::FilterChanged)
            .width(Length::Fill);
        let mut rows: Column<'_, Message> = Column::new().spacing(4);
        if list.rows.is_empty() {
            rows = rows.push(arabic("لا توجد نتائج.", 14.0).style(text::secondary));
        }
        for chapter in &list.rows {
            let label = row![
                text(chapter.number.to_string()).size(16).width(Length::Fixed(40.0)),
                column![
                    arabic(chapter.native_name.clone(), 18.0),
                    arabic(
                        format!(
                            "{} • {} • {} آية",
                            chapter.transliterated_name,
                            chapter.revelation_place,
                            chapter.verse_count
                        ),
                        13.0
                    )
                    .style(text::secondary),
                ]
                .spacing(2),
            ]
            .spacing(8)
            .align_y(Vertical::Center);
            rows = rows.push(
                button(label)
                    .style(button::secondary)
                    .width(Length::Fill)
                    .on_press(Message::Navigate(chapter.address.clone())),
            );
        }
        column![filter, rows].spacing(12).into()
    }

    fn chapter_page(&self, detail: &ChapterDetailView) -> Element<'_, Message> {
        let loading = self.player.is_loading();
        let tools = column![
            arabic(format!("📖 {}", detail.title), 22.0),
            arabic(detail.meta.clone(), 13.0).style(text::secondary),
            text_input("اكتب كلمة للبحث داخل السورة…", &detail.filter)
                .on_input(Message::FilterChanged),
            row![
                button(arabic("تشغيل آية بآية", 14.0))
                    .on_press_maybe((!loading).then_some(Message::PlayChapter)),
                button(arabic("أعلى الصفحة", 14.0))
                    .style(button::secondary)
                    .on_press(Message::ScrollToTop),
                button(arabic("آخر موضع", 14.0))
                    .style(button::secondary)
                    .on_press(Message::JumpToLastRead),
                nav_button("رجوع للسور", "#/chapters"),
            ]
            .spacing(8),
        ]
        .spacing(8);

        let playing = self.player.current_verse();
        let mut verses: Column<'_, Message> = Column::new().spacing(10);
        for verse in detail.verses.iter().filter(|verse| verse.visible) {
            let is_playing = playing == Some(verse.global_index);
            let is_last_read = detail.last_read_verse == Some(verse.index_in_chapter);
            verses = verses.push(self.verse_card(detail.number, verse, is_playing, is_last_read, loading));
        }
        if detail.visible_count() == 0 {
            verses = verses.push(arabic("لا توجد آيات مطابقة.", 14.0).style(text::secondary));
        }

        column![card(tools), verses].spacing(12).into()
    }

    fn verse_card(
        &self,
        chapter: u16,
        verse: &VerseCard,
        is_playing: bool,
        is_last_read: bool,
        loading: bool,
    ) -> Element<'_, Message> {
        let mut badges = format!(
            "آية {} • جزء {} • حزب {}",
            verse.index_in_chapter, verse.juz_number, verse.hizb_quarter_number
        );
        if is_playing {
            badges.push_str(" • يتم التشغيل");
        }
        if is_last_read {
            badges.push_str(" • آخر موضع");
        }
        let bookmark_label = if verse.bookmarked {
            "★ محفوظة"
        } else {
            "☆ حفظ"
        };
        let actions = row![
            button(arabic("▶ استماع", 13.0))
                .style(button::secondary)
                .on_press_maybe((!loading).then_some(Message::PlayVerse(verse.global_index))),
            button(arabic("⧉ نسخ", 13.0))
                .style(button::secondary)
                .on_press(Message::CopyVerse(verse.global_index)),
            button(arabic(bookmark_label, 13.0))
                .style(button::secondary)
                .on_press(Message::ToggleBookmark {
                    chapter,
                    verse: verse.index_in_chapter,
                    global_index: verse.global_index,
                }),
            button(arabic("↗ مشاركة", 13.0))
                .style(button::secondary)
                .on_press(Message::CopyVerseLink(verse.index_in_chapter)),
        ]
        .spacing(6);

        let badge = arabic(badges, 13.0);
        let badge = if verse.highlighted || is_playing {
            badge.style(text::primary)
        } else {
            badge.style(text::secondary)
        };

        let mut content = column![
            row![badge, horizontal_space(), actions].align_y(Vertical::Center),
            arabic(verse.text.clone(), self.settings.verse_font_size as f32)
                .line_height(LineHeight::Relative(self.settings.verse_line_height))
                .width(Length::Fill),
        ]
        .spacing(8);
        if let Some(translation) = &verse.translation {
            content = content.push(arabic(format!("الترجمة: {translation}"), 15.0));
        }
        if let Some(commentary) = &verse.commentary {
            content = content.push(arabic(format!("التفسير: {commentary}"), 15.0));
        }
        card(content)
    }

    fn bookmarks_page(&self, bookmarks: &BookmarksView) -> Element<'_, Message> {
        let mut header = row![arabic("المفضلة", 20.0), horizontal_space()].align_y(Vertical::Center);
        if !bookmarks.rows.is_empty() {
            header = header.push(
                button(arabic("مسح الكل", 14.0))
                    .style(button::danger)
                    .on_press(Message::ClearBookmarks),
            );
        }
        let mut content = column![header, continue_reading(bookmarks.continue_reading.as_ref())]
            .spacing(10);
        if bookmarks.rows.is_empty() {
            content = content.push(arabic("لا توجد آيات محفوظة بعد.", 14.0).style(text::secondary));
        }
        for bookmark in &bookmarks.rows {
            content = content.push(
                row![
                    column![
                        arabic(
                            format!("سورة {} — آية {}", bookmark.chapter, bookmark.verse),
                            16.0
                        ),
                        text(bookmark.added.clone()).size(12).style(text::secondary),
                    ]
                    .spacing(2),
                    horizontal_space(),
                    button(arabic("فتح", 13.0)).on_press(Message::Navigate(bookmark.address.clone())),
                    button(arabic("إزالة", 13.0))
                        .style(button::danger)
                        .on_press(Message::RemoveBookmark(bookmark.global_index)),
                ]
                .spacing(6)
                .align_y(Vertical::Center),
            );
        }
        card(content)
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let draft = &self.drafts.settings;
        let form = column![
            arabic("الإعدادات", 20.0),
            labelled(
                "المظهر",
                pick_list(ThemeMode::ALL, Some(draft.theme), |theme| {
                    Message::SettingEdited(SettingEdit::Theme(theme))
                })
                .into()
            ),
            labelled(
                &format!("حجم خط الآيات: {}", draft.verse_font_size),
                slider(
                    MIN_VERSE_FONT_SIZE as f32..=MAX_VERSE_FONT_SIZE as f32,
                    draft.verse_font_size as f32,
                    |value| Message::SettingEdited(SettingEdit::FontSize(value.round() as u32)),
                )
                .into()
            ),
            labelled(
                &format!("تباعد الأسطر: {:.1}", draft.verse_line_height),
                slider(
                    MIN_VERSE_LINE_HEIGHT..=MAX_VERSE_LINE_HEIGHT,
                    draft.verse_line_height,
                    |value| Message::SettingEdited(SettingEdit::LineHeight(value)),
                )
                .step(0.1)
                .into()
            ),
            checkbox("إظهار الترجمة", draft.show_translation)
                .text_shaping(Shaping::Advanced)
                .on_toggle(|show| Message::SettingEdited(SettingEdit::ShowTranslation(show))),
            labelled(
                "الترجمة",
                pick_list(
                    TRANSLATION_CHOICES,
                    choice_for(&TRANSLATION_CHOICES, &draft.translation_edition),
                    |choice| Message::SettingEdited(SettingEdit::Translation(choice)),
                )
                .into()
            ),
            checkbox("إظهار التفسير", draft.show_commentary)
                .text_shaping(Shaping::Advanced)
                .on_toggle(|show| Message::SettingEdited(SettingEdit::ShowCommentary(show))),
            labelled(
                "التفسير",
                pick_list(
                    COMMENTARY_CHOICES,
                    choice_for(&COMMENTARY_CHOICES, &draft.commentary_edition),
                    |choice| Message::SettingEdited(SettingEdit::Commentary(choice)),
                )
                .into()
            ),
            labelled(
                "القارئ",
                pick_list(
                    RECITATION_CHOICES,
                    choice_for(&RECITATION_CHOICES, &draft.recitation_edition),
                    |choice| Message::SettingEdited(SettingEdit::Recitation(choice)),
                )
                .into()
            ),
            labelled(
                "رابط الراديو الافتراضي",
                text_input("الصق رابط بث مباشر mp3/aac", &draft.radio_url)
                    .on_input(|url| Message::SettingEdited(SettingEdit::RadioUrl(url)))
                    .into()
            ),
            arabic("بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", draft.verse_font_size as f32)
                .line_height(LineHeight::Relative(draft.verse_line_height)),
            row![
                button(arabic("حفظ", 14.0)).on_press(Message::SaveSettings),
                button(arabic("إعادة الضبط", 14.0))
                    .style(button::danger)
                    .on_press(Message::ResetSettings),
            ]
            .spacing(8),
        ]
        .spacing(12);
        card(form)
    }

    fn radio_page(&self, radio: &RadioView) -> Element<'_, Message> {
        let mut favorites: Column<'_, Message> = Column::new().spacing(6);
        if radio.favorites.is_empty() {
            favorites = favorites.push(arabic("لا توجد محطات محفوظة بعد.", 14.0).style(text::secondary));
        }
        for (idx, favorite) in radio.favorites.iter().enumerate() {
            favorites = favorites.push(
                row![
                    column![
                        arabic(format!("📻 {}", favorite.name), 15.0),
                        text(favorite.url.clone()).size(12).style(text::secondary),
                    ]
                    .spacing(2),
                    horizontal_space(),
                    button(arabic("تشغيل", 13.0)).on_press(Message::PlayRadioFavorite(idx)),
                    button(arabic("تعيين كرابط افتراضي", 13.0))
                        .style(button::secondary)
                        .on_press(Message::UseRadioFavorite(idx)),
                    button(arabic("حذف", 13.0))
                        .style(button::danger)
                        .on_press(Message::RemoveRadioFavorite(idx)),
                ]
                .spacing(6)
                .align_y(Vertical::Center),
            );
        }

        let default_hint = if radio.url.is_empty() {
            "لا يوجد رابط افتراضي.".to_string()
        } else {
            format!("الرابط الافتراضي: {}", radio.url)
        };

        card(
            column![
                row![
                    arabic("📻 راديو القرآن 24 ساعة", 20.0),
                    horizontal_space(),
                    button(arabic("إيقاف", 14.0))
                        .style(button::secondary)
                        .on_press(Message::StopPlayback),
                ]
                .align_y(Vertical::Center),
                arabic("الصق رابط بث مباشر (mp3/ogg) لمحطة قرآن موثوقة.", 13.0)
                    .style(text::secondary),
                text_input("الصق رابط stream URL", &self.drafts.radio_url)
                    .on_input(Message::RadioUrlChanged)
                    .on_submit(Message::PlayRadio),
                arabic(default_hint, 12.0).style(text::secondary),
                row![
                    button(arabic("تشغيل", 14.0)).on_press(Message::PlayRadio),
                    button(arabic("حفظ كرابط افتراضي", 14.0))
                        .style(button::secondary)
                        .on_press(Message::SaveDefaultRadio),
                ]
                .spacing(8),
                arabic("المفضلة", 17.0),
                row![
                    text_input("اسم المحطة (اختياري)", &self.drafts.favorite_name)
                        .on_input(Message::FavoriteNameChanged)
                        .on_submit(Message::AddRadioFavorite),
                    button(arabic("إضافة للمفضلة", 14.0))
                        .style(button::secondary)
                        .on_press(Message::AddRadioFavorite),
                ]
                .spacing(8),
                favorites,
            ]
            .spacing(10),
        )
    }

    fn counter_page(&self, counter: &CounterView) -> Element<'_, Message> {
        let goal_label = if counter.goal == 0 {
            "بدون هدف".to_string()
        } else {
            format!("الهدف: {}", counter.goal)
        };
        let mut history: Column<'_, Message> = Column::new().spacing(4);
        if counter.history.is_empty() {
            history = history.push(arabic("لا يوجد سجل بعد.", 14.0).style(text::secondary));
        }
        for entry in &counter.history {
            history = history.push(
                row![
                    arabic(format!("{} × {}", entry.dhikr, entry.count), 15.0),
                    horizontal_space(),
                    text(entry.date.clone()).size(12).style(text::secondary),
                ]
                .align_y(Vertical::Center),
            );
        }

        card(
            column![
                arabic(counter.dhikr.clone(), 22.0),
                text(counter.count.to_string()).size(56),
                arabic(goal_label, 14.0).style(text::secondary),
                labelled(
                    "الذكر",
                    text_input("سبحان الله", &self.drafts.dhikr)
                        .on_input(Message::DhikrChanged)
                        .on_submit(Message::DhikrSubmitted)
                        .into()
                ),
                labelled(
                    "الهدف (تنبيه كل كم مرة؟)",
                    text_input("33", &self.drafts.goal)
                        .on_input(Message::GoalChanged)
                        .into()
                ),
                arabic("مثال: 33 أو 100. ضع 0 لإلغاء التنبيه.", 12.0).style(text::secondary),
                row![
                    button(arabic("+1", 18.0))
                        .style(button::success)
                        .on_press(Message::CounterIncrement),
                    button(arabic("تصفير + حفظ في السجل", 14.0))
                        .style(button::secondary)
                        .on_press(Message::CounterReset),
                    button(arabic("مسح السجل", 14.0))
                        .style(button::danger)
                        .on_press(Message::CounterClearHistory),
                ]
                .spacing(8),
                arabic("السجل", 17.0),
                history,
            ]
            .spacing(10),
        )
    }
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .style(container::rounded_box)
        .padding(14)
        .width(Length::Fill)
        .into()
}

fn nav_button<'a>(label: &'a str, address: &str) -> Element<'a, Message> {
    button(arabic(label, 14.0))
        .style(button::secondary)
        .on_press(Message::Navigate(address.to_string()))
        .into()
}

fn labelled<'a>(label: &str, control: Element<'a, Message>) -> Element<'a, Message> {
    row![
        arabic(label.to_string(), 14.0).width(Length::Fixed(200.0)),
        control
    ]
    .spacing(8)
    .align_y(Vertical::Center)
    .into()
}

fn continue_reading<'a>(position: Option<&ContinueReading>) -> Element<'a, Message> {
    match position {
        Some(position) => button(arabic(
            format!(
                "متابعة القراءة: سورة {} — آية {}",
                position.chapter, position.verse
            ),
            14.0,
        ))
        .on_press(Message::Navigate(position.address.clone()))
        .into(),
        None => arabic("لا يوجد موضع محفوظ بعد.", 13.0)
            .style(text::secondary)
            .into(),
    }
}
