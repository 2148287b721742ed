mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::api::ContentClient;
use crate::config::AppConfig;
use crate::store::LocalStore;
use iced::{Size, window};

/// Launch the reader window, opening `initial_address` when given.
pub fn run_app(
    config: AppConfig,
    store: LocalStore,
    client: ContentClient,
    initial_address: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(App::theme)
        .run_with(move || App::bootstrap(config, store, client, initial_address))
}
