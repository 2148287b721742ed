mod pages;

use super::messages::Message;
use super::state::{APP_TITLE, App, PAGE_SCROLL_ID, QUICK_SEARCH_ID};
use crate::notify::NotificationKind;
use crate::player::{PlayState, PlaybackMode};
use crate::router::Route;
use crate::store::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::text::Shaping;
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, row, scrollable, text, text_input,
};
use iced::{Element, Length, Theme};

const NAV_LINKS: [(&str, &str); 6] = [
    ("الرئيسية", "#/"),
    ("السور", "#/chapters"),
    ("المفضلة", "#/bookmarks"),
    ("الإعدادات", "#/settings"),
    ("الراديو", "#/radio"),
    ("السبحة", "#/counter"),
];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let body = scrollable(container(self.page()).width(Length::Fill).padding(16))
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled(viewport.relative_offset()))
            .height(Length::Fill);

        let mut layout: Column<'_, Message> = column![self.header(), self.nav_bar()]
            .spacing(8)
            .padding(12)
            .height(Length::Fill);
        if !self.search.results.is_empty() {
            layout = layout.push(self.quick_search_results());
        }
        layout = layout.push(body);
        if self.player.is_active() {
            layout = layout.push(self.mini_player());
        }
        if !self.toasts.is_empty() {
            layout = layout.push(self.toast_stack());
        }
        layout.push(self.status_bar()).into()
    }

    fn header(&self) -> Element<'_, Message> {
        let theme_label = match self.settings.theme {
            ThemeMode::Dark => "☀ نهاري",
            ThemeMode::Light => "☾ ليلي",
        };
        let search = text_input("بحث سريع عن سورة…", &self.search.query)
            .id(QUICK_SEARCH_ID.clone())
            .on_input(Message::QuickSearchChanged)
            .on_submit(Message::QuickSearchSubmitted)
            .width(Length::Fixed(260.0));

        row![
            button(arabic("رجوع", 14.0))
                .style(button::secondary)
                .on_press(Message::Back),
            column![
                arabic(APP_TITLE, 22.0),
                arabic(self.header_subtitle(), 13.0).style(text::secondary),
            ]
            .spacing(2),
            horizontal_space(),
            search,
            button(arabic(theme_label, 14.0))
                .style(button::secondary)
                .on_press(Message::ToggleTheme),
        ]
        .spacing(12)
        .align_y(Vertical::Center)
        .into()
    }

    fn nav_bar(&self) -> Element<'_, Message> {
        let current = self.router.route();
        let mut links: Row<'_, Message> = Row::new().spacing(6).align_y(Vertical::Center);
        for (label, address) in NAV_LINKS {
            let active = nav_matches(current, address);
            let style: fn(&Theme, button::Status) -> button::Style = if active {
                button::primary
            } else {
                button::secondary
            };
            let link = button(arabic(label, 14.0))
                .style(style)
                .on_press(Message::Navigate(address.to_string()));
            links = links.push(link);
        }
        let address = text_input("#/", &self.address_input)
            .on_input(Message::AddressInputChanged)
            .on_submit(Message::AddressSubmitted)
            .width(Length::Fixed(200.0));
        row![links, horizontal_space(), address]
            .spacing(8)
            .align_y(Vertical::Center)
            .into()
    }

    fn quick_search_results(&self) -> Element<'_, Message> {
        let rows = self.search.results.iter().map(|row| {
            button(arabic(
                format!(
                    "{}. {} — {}",
                    row.number, row.native_name, row.transliterated_name
                ),
                15.0,
            ))
            .style(button::text)
            .width(Length::Fill)
            .on_press(Message::Navigate(row.address.clone()))
            .into()
        });
        container(Column::with_children(rows).spacing(2))
            .style(container::rounded_box)
            .padding(8)
            .width(Length::Fill)
            .into()
    }

    fn mini_player(&self) -> Element<'_, Message> {
        let session = self.player.session();
        let now_playing = self.player.now_playing();
        let loading = session.play_state == PlayState::Loading;
        let can_skip =
            !loading && session.mode == PlaybackMode::Queue && session.queue.len() > 1;
        let toggle_label = match session.play_state {
            PlayState::Loading => "…",
            PlayState::Playing => "⏸",
            PlayState::Paused | PlayState::Errored => "▶",
        };
        let status = match session.play_state {
            PlayState::Loading => "جارٍ التحميل…",
            PlayState::Playing => "يتم التشغيل",
            PlayState::Paused => "متوقف مؤقتًا",
            PlayState::Errored => "تعذّر التشغيل",
        };

        let controls = row![
            button("⏮")
                .style(button::secondary)
                .on_press_maybe(can_skip.then_some(Message::PreviousVerse)),
            button(toggle_label).on_press_maybe((!loading).then_some(Message::TogglePlayPause)),
            button("⏭")
                .style(button::secondary)
                .on_press_maybe(can_skip.then_some(Message::NextVerse)),
            button("✕")
                .style(button::danger)
                .on_press(Message::StopPlayback),
        ]
        .spacing(6)
        .align_y(Vertical::Center);

        container(
            row![
                column![
                    arabic(now_playing.title, 16.0),
                    arabic(format!("{} • {status}", now_playing.subtitle), 13.0)
                        .style(text::secondary),
                ]
                .spacing(2),
                horizontal_space(),
                controls,
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .style(container::rounded_box)
        .padding(10)
        .width(Length::Fill)
        .into()
    }

    fn toast_stack(&self) -> Element<'_, Message> {
        let toasts = self.toasts.items.iter().map(|toast| {
            let title_style: fn(&Theme) -> text::Style = match toast.notification.kind {
                NotificationKind::Info => text::primary,
                NotificationKind::Good => text::success,
                NotificationKind::Warn => text::secondary,
                NotificationKind::Bad => text::danger,
            };
            let mut body = column![arabic(toast.notification.title.clone(), 15.0).style(title_style)];
            if !toast.notification.body.is_empty() {
                body = body.push(arabic(toast.notification.body.clone(), 13.0));
            }
            container(
                row![
                    body.spacing(2),
                    horizontal_space(),
                    button("✕")
                        .style(button::text)
                        .on_press(Message::DismissToast(toast.id)),
                ]
                .align_y(Vertical::Center),
            )
            .style(container::rounded_box)
            .padding(8)
            .width(Length::Fill)
            .into()
        });
        Column::with_children(toasts).spacing(4).into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        row![
            text(self.router.address().to_string()).size(12).style(text::secondary),
            horizontal_space(),
            button(arabic(format!("📿 {}", self.counter), 15.0))
                .style(button::success)
                .on_press(Message::CounterIncrement),
        ]
        .align_y(Vertical::Center)
        .into()
    }
}

fn nav_matches(route: Route, address: &str) -> bool {
    match route {
        Route::ChapterDetail { .. } => address == "#/chapters",
        other => other.address() == address,
    }
}

/// Text that may contain Arabic script; needs complex shaping.
pub(super) fn arabic<'a>(content: impl text::IntoFragment<'a>, size: f32) -> text::Text<'a> {
    text(content).size(size).shaping(Shaping::Advanced)
}
