mod constants;
mod reader;
mod speech;

use crate::config::AppConfig;
use crate::speech::SpeechEngine;
use crate::store::{ReadingMode, Snapshot};
use iced::Task;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use reader::ReaderState;
pub(crate) use speech::SpeechLifecycle;
pub(in crate::app) use speech::{SpeechState, build_chunks};
pub use speech::SpeechChunk;

fn speech_engine_from_config(config: &AppConfig) -> Option<SpeechEngine> {
    SpeechEngine::new(
        config.speech_model_path.clone().into(),
        config.speech_espeak_path.clone().into(),
    )
    .ok()
}

/// Core application state composed of sub-models.
pub struct App {
    pub(super) starter_mode: bool,
    pub(super) reader: ReaderState,
    pub(super) speech: SpeechState,
    pub(super) config: AppConfig,
    pub(super) mode: ReadingMode,
    pub(super) wpm: u32,
    pub(super) visual_running: bool,
    pub(super) steps_since_persist: u32,
    pub(super) show_help: bool,
    pub(super) open_path_input: String,
    pub(super) document_loading: bool,
    pub(super) load_error: Option<String>,
}

impl App {
    fn new_idle(config: AppConfig) -> Self {
        let wpm = config.default_wpm.clamp(MIN_WPM, MAX_WPM);
        App {
            starter_mode: true,
            reader: ReaderState::new(),
            speech: SpeechState::new(speech_engine_from_config(&config)),
            config,
            mode: ReadingMode::Visual,
            wpm,
            visual_running: false,
            steps_since_persist: 0,
            show_help: false,
            open_path_input: String::new(),
            document_loading: false,
            load_error: None,
        }
    }

    /// True while either scheduler drives the cursor.
    pub(super) fn is_running(&self) -> bool {
        self.visual_running || self.speech.is_active()
    }

    /// Stop whichever scheduler is active; safe to call at any time.
    pub(super) fn stop_playback(&mut self) {
        self.visual_running = false;
        self.speech.stop_narration();
    }

    pub(super) fn set_wpm_clamped(&mut self, wpm: u32) {
        self.wpm = wpm.clamp(MIN_WPM, MAX_WPM);
    }

    /// The session as it should be written to disk right now.
    pub(super) fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.reader.document.joined(),
            current_index: self.reader.position.min(self.reader.len().saturating_sub(1)) as i64,
            wpm: self.wpm,
            reading_mode: Some(self.mode),
        }
    }

    pub(super) fn apply_loaded_text(&mut self, text: &str) {
        self.stop_playback();
        self.starter_mode = false;
        self.document_loading = false;
        self.load_error = None;
        self.open_path_input.clear();
        self.steps_since_persist = 0;
        self.reader.load(text);
    }

    /// Launch with a freshly loaded document; WPM and mode carry over from
    /// the saved session when one exists.
    pub(super) fn bootstrap_with_text(
        text: &str,
        mut config: AppConfig,
        saved: Option<Snapshot>,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let mut app = App::new_idle(config);
        app.starter_mode = false;
        app.reader.load(text);
        if let Some(saved) = saved {
            app.set_wpm_clamped(saved.wpm);
            app.mode = saved.reading_mode.unwrap_or_default();
        }
        tracing::info!(
            words = app.reader.len(),
            wpm = app.wpm,
            mode = %app.mode,
            "Initialized app state from loaded document"
        );
        (app, Task::none())
    }

    /// Launch from the persisted session slot.
    pub(super) fn bootstrap_restored(
        mut config: AppConfig,
        snapshot: Snapshot,
    ) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let mut app = App::new_idle(config);
        app.starter_mode = false;
        app.reader.restore(&snapshot);
        app.set_wpm_clamped(snapshot.wpm);
        app.mode = snapshot.reading_mode.unwrap_or_default();
        tracing::info!(
            words = app.reader.len(),
            position = app.reader.position,
            wpm = app.wpm,
            mode = %app.mode,
            "Initialized app state from saved session"
        );
        (app, Task::none())
    }

    /// Launch with no document: show the open-path input and sample fetch.
    pub(super) fn bootstrap_starter(mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let app = App::new_idle(config);
        tracing::info!("Initialized app state in starter mode");
        (app, Task::none())
    }

    #[cfg(test)]
    pub(super) fn test_app(text: &str) -> App {
        let mut app = App::new_idle(AppConfig::default());
        app.speech = SpeechState::new(None);
        app.starter_mode = false;
        app.reader.load(text);
        app
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized.replace("spacebar", "space");
        }
    }

    config.default_wpm = config.default_wpm.clamp(MIN_WPM, MAX_WPM);
    config.wpm_step = config.wpm_step.clamp(1, MAX_WPM - MIN_WPM);
    config.speech_chunk_words = config.speech_chunk_words.max(1);
    config.speech_speed = config
        .speech_speed
        .clamp(MIN_SPEECH_SPEED, MAX_SPEECH_SPEED);
    config.speech_volume = config
        .speech_volume
        .clamp(MIN_SPEECH_VOLUME, MAX_SPEECH_VOLUME);
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    normalize_key_binding(&mut config.key_toggle_play_pause, "space");
    normalize_key_binding(&mut config.key_jump_back, "left");
    normalize_key_binding(&mut config.key_jump_forward, "right");
    normalize_key_binding(&mut config.key_jump_back_far, "shift+left");
    normalize_key_binding(&mut config.key_jump_forward_far, "shift+right");
    normalize_key_binding(&mut config.key_speed_up, "up");
    normalize_key_binding(&mut config.key_speed_down, "down");
    normalize_key_binding(&mut config.key_toggle_mode, "m");
    normalize_key_binding(&mut config.key_toggle_theme, "t");
    normalize_key_binding(&mut config.key_toggle_help, "h");
    normalize_key_binding(&mut config.key_safe_quit, "q");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_config_bounds_wpm_and_speech_settings() {
        let mut config = AppConfig::default();
        config.default_wpm = 5000;
        config.speech_speed = 99.0;
        config.speech_volume = -1.0;
        config.speech_chunk_words = 0;
        clamp_config(&mut config);
        assert_eq!(config.default_wpm, MAX_WPM);
        assert_eq!(config.speech_speed, MAX_SPEECH_SPEED);
        assert_eq!(config.speech_volume, MIN_SPEECH_VOLUME);
        assert_eq!(config.speech_chunk_words, 1);
    }

    #[test]
    fn clamp_config_normalizes_key_bindings() {
        let mut config = AppConfig::default();
        config.key_toggle_play_pause = "  SpaceBar ".to_string();
        config.key_safe_quit = String::new();
        clamp_config(&mut config);
        assert_eq!(config.key_toggle_play_pause, "space");
        assert_eq!(config.key_safe_quit, "q");
    }

    #[test]
    fn snapshot_reflects_cursor_wpm_and_mode() {
        let mut app = App::test_app("a b c d");
        app.reader.set_position_clamped(2);
        app.set_wpm_clamped(450);
        app.mode = ReadingMode::Speech;
        let snapshot = app.snapshot();
        assert_eq!(snapshot.text, "a b c d");
        assert_eq!(snapshot.current_index, 2);
        assert_eq!(snapshot.wpm, 450);
        assert_eq!(snapshot.reading_mode, Some(ReadingMode::Speech));
    }

    #[test]
    fn restored_bootstrap_clamps_saved_values() {
        let snapshot = Snapshot {
            text: "a b c".into(),
            current_index: 42,
            wpm: 9999,
            reading_mode: None,
        };
        let (app, _task) = App::bootstrap_restored(AppConfig::default(), snapshot);
        assert_eq!(app.reader.position, 2);
        assert_eq!(app.wpm, MAX_WPM);
        assert_eq!(app.mode, ReadingMode::Visual);
    }
}
