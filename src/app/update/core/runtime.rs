use super::super::super::messages::Message;
use super::super::super::state::{App, QUICK_SEARCH_ID, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::player::load_source;
use crate::router::DataRequest;
use iced::Event;
use iced::Task;
use iced::event;
use iced::futures::channel::oneshot;
use iced::keyboard;
use iced::window;
use tracing::{debug, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Fetch(ticket) => {
                let client = self.client.clone();
                let nav_id = ticket.nav_id;
                match ticket.request {
                    DataRequest::Catalogue => {
                        debug!(nav_id, "Dispatching catalogue fetch");
                        Task::perform(
                            run_blocking(move || client.fetch_chapters()),
                            move |result| Message::CatalogueLoaded { nav_id, result },
                        )
                    }
                    DataRequest::Chapter { number, editions } => {
                        debug!(nav_id, chapter = number, ?editions, "Dispatching chapter fetch");
                        Task::perform(
                            run_blocking(move || client.fetch_chapter_editions(number, &editions)),
                            move |result| Message::ChapterLoaded {
                                nav_id,
                                number,
                                result,
                            },
                        )
                    }
                }
            }
            Effect::LoadAudio(request) => {
                let client = self.client.clone();
                let request_id = request.request_id;
                debug!(request_id, target = ?request.target, "Dispatching audio load");
                Task::perform(
                    run_blocking(move || load_source(&client, &request.target)),
                    move |result| Message::AudioLoaded { request_id, result },
                )
            }
            Effect::ScrollTo(offset) => {
                iced::widget::scrollable::snap_to(PAGE_SCROLL_ID.clone(), offset)
            }
            Effect::CopyToClipboard(contents) => iced::clipboard::write(contents),
            Effect::FocusQuickSearch => iced::widget::text_input::focus(QUICK_SEARCH_ID.clone()),
        }
    }
}

/// Run blocking network work on its own thread and await the outcome.
///
/// The blocking HTTP client must not run on the async executor's threads.
async fn run_blocking<T, F>(job: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let outcome = job().map_err(|err| format!("{err:#}"));
        if tx.send(outcome).is_err() {
            debug!("Background result dropped; receiver went away");
        }
    });
    match rx.await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!("Background worker exited without a result");
            Err("background worker exited".to_string())
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

