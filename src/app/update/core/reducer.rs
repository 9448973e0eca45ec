use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::ThemeMode;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::SetMode(mode) => self.handle_set_mode(mode, &mut effects),
            Message::SetWpm(wpm) => self.handle_set_wpm(wpm, &mut effects),
            Message::StepWpm(direction) => self.handle_step_wpm(direction, &mut effects),
            Message::JumpWords(delta) => self.handle_jump(delta, &mut effects),
            Message::VisualTick(_) => self.handle_visual_tick(&mut effects),
            Message::SpeechPoll(_) => self.handle_speech_poll(&mut effects),
            Message::ChunkPrepared {
                request_id,
                path,
                duration,
            } => self.handle_chunk_prepared(request_id, path, duration, &mut effects),
            Message::SpeechFailed { request_id, error } => {
                self.handle_speech_failed(request_id, error, &mut effects)
            }
            Message::SetSpeechSpeed(speed) => self.handle_set_speech_speed(speed, &mut effects),
            Message::SetSpeechVolume(volume) => {
                self.handle_set_speech_volume(volume, &mut effects)
            }
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleHelp => self.show_help = !self.show_help,
            Message::OpenPathInputChanged(path) => self.open_path_input = path,
            Message::OpenPathSubmitted => self.handle_open_path_submitted(&mut effects),
            Message::FetchSampleRequested => self.handle_fetch_sample_requested(&mut effects),
            Message::DocumentLoaded { text } => self.handle_document_loaded(text, &mut effects),
            Message::DocumentLoadFailed { error } => self.handle_document_load_failed(error),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals(_) => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = %self.config.theme, "Switched theme");
        effects.push(Effect::SaveConfig);
    }

    fn handle_open_path_submitted(&mut self, effects: &mut Vec<Effect>) {
        if self.document_loading {
            return;
        }
        let candidate = PathBuf::from(self.open_path_input.trim());
        if candidate.as_os_str().is_empty() {
            return;
        }
        info!(path = %candidate.display(), "Opening document from path input");
        effects.push(Effect::LoadDocument(candidate));
    }

    fn handle_fetch_sample_requested(&mut self, effects: &mut Vec<Effect>) {
        if self.document_loading {
            return;
        }
        let url = self.config.sample_text_url.clone();
        info!(url = %url, "Fetching sample text");
        effects.push(Effect::FetchSample(url));
    }

    fn handle_document_loaded(&mut self, text: String, effects: &mut Vec<Effect>) {
        self.apply_loaded_text(&text);
        info!(words = self.reader.len(), "Document loaded in-process");
        effects.push(Effect::PersistSnapshot);
    }

    fn handle_document_load_failed(&mut self, error: String) {
        self.document_loading = false;
        self.load_error = Some(error.clone());
        warn!("Failed to load document: {error}");
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            effects.push(Effect::QuitSafely);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReadingMode;

    #[test]
    fn toggle_theme_flips_and_saves() {
        let mut app = App::test_app("a b c");
        let initial = app.config.theme;
        let effects = app.reduce(Message::ToggleTheme);
        assert_ne!(app.config.theme, initial);
        assert!(matches!(effects.as_slice(), [Effect::SaveConfig]));
        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, initial);
    }

    #[test]
    fn toggle_help_has_no_effects() {
        let mut app = App::test_app("a b c");
        assert!(!app.show_help);
        let effects = app.reduce(Message::ToggleHelp);
        assert!(app.show_help);
        assert!(effects.is_empty());
    }

    #[test]
    fn blank_path_submission_is_ignored() {
        let mut app = App::test_app("a b c");
        app.open_path_input = "   ".into();
        let effects = app.reduce(Message::OpenPathSubmitted);
        assert!(effects.is_empty());
    }

    #[test]
    fn path_submission_requests_a_load() {
        let mut app = App::test_app("a b c");
        app.open_path_input = " notes.txt ".into();
        let effects = app.reduce(Message::OpenPathSubmitted);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadDocument(path)] if path == &PathBuf::from("notes.txt")
        ));
    }

    #[test]
    fn loaded_document_replaces_state_and_persists() {
        let mut app = App::test_app("old words");
        app.reader.set_position_clamped(1);
        app.load_error = Some("stale".into());
        let effects = app.reduce(Message::DocumentLoaded {
            text: "fresh text here".into(),
        });
        assert_eq!(app.reader.len(), 3);
        assert_eq!(app.reader.position, 0);
        assert!(app.load_error.is_none());
        assert!(matches!(effects.as_slice(), [Effect::PersistSnapshot]));
    }

    #[test]
    fn load_failure_surfaces_the_error() {
        let mut app = App::test_app("a b c");
        app.document_loading = true;
        let effects = app.reduce(Message::DocumentLoadFailed {
            error: "no such file".into(),
        });
        assert!(!app.document_loading);
        assert_eq!(app.load_error.as_deref(), Some("no such file"));
        assert!(effects.is_empty());
    }

    #[test]
    fn safe_quit_requests_the_quit_effect() {
        let mut app = App::test_app("a b c");
        let effects = app.reduce(Message::SafeQuit);
        assert!(matches!(effects.as_slice(), [Effect::QuitSafely]));
    }

    #[test]
    fn mode_messages_route_through_playback() {
        let mut app = App::test_app("a b c");
        app.reduce(Message::SetMode(ReadingMode::Speech));
        assert_eq!(app.mode, ReadingMode::Speech);
    }
}
