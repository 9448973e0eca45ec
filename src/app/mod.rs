mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::store::Snapshot;
use iced::{Size, Theme, window};

/// Launch the reader. A freshly loaded `text` wins over the saved session;
/// with neither the app starts on the open-a-document screen.
pub fn run_app(
    text: Option<String>,
    config: AppConfig,
    saved: Option<Snapshot>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("flashread", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, crate::config::ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || match (text, saved) {
            (Some(text), saved) => App::bootstrap_with_text(&text, config, saved),
            (None, Some(snapshot)) => App::bootstrap_restored(config, snapshot),
            (None, None) => App::bootstrap_starter(config),
        })
}
