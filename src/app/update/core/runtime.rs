use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::save_config;
use crate::fetch::fetch_sample_text;
use crate::store::{save_snapshot, speech_cache_dir};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_PATH: &str = "conf/config.toml";

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::PersistSnapshot => {
                save_snapshot(&self.snapshot());
                Task::none()
            }
            Effect::SaveConfig => {
                save_config(Path::new(CONFIG_PATH), &self.config);
                Task::none()
            }
            Effect::SynthesizeChunk { request_id, chunk } => {
                let Some(engine) = self.speech.engine.clone() else {
                    warn!("No speech engine available, narration disabled");
                    self.speech.stop_narration();
                    self.load_error =
                        Some("Narration unavailable: speech engine failed to initialize".into());
                    return Task::none();
                };
                let cache_root = speech_cache_dir();
                let speed = self.config.speech_speed;
                Task::perform(
                    async move {
                        match engine.synthesize_chunk(&cache_root, &chunk.text, speed) {
                            Ok((path, duration)) => Message::ChunkPrepared {
                                request_id,
                                path,
                                duration,
                            },
                            Err(err) => Message::SpeechFailed {
                                request_id,
                                error: err.to_string(),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::PlayChunk { path, duration } => {
                let Some(engine) = self.speech.engine.clone() else {
                    self.speech.stop_narration();
                    return Task::none();
                };
                let request_id = self.speech.request_id;
                let volume = self.config.speech_volume;
                match engine.play(&path, duration, volume) {
                    Ok(playback) => {
                        self.speech.playback = Some(playback);
                        Task::none()
                    }
                    Err(err) => Task::perform(
                        async move {
                            Message::SpeechFailed {
                                request_id,
                                error: err.to_string(),
                            }
                        },
                        |message| message,
                    ),
                }
            }
            Effect::LoadDocument(path) => {
                self.document_loading = true;
                self.load_error = None;
                Task::perform(
                    async move {
                        match fs::read_to_string(&path) {
                            Ok(text) => Message::DocumentLoaded { text },
                            Err(err) => Message::DocumentLoadFailed {
                                error: format!("Failed to open {}: {err}", path.display()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchSample(url) => {
                self.document_loading = true;
                self.load_error = None;
                Task::perform(
                    async move {
                        match fetch_sample_text(&url) {
                            Ok(text) => Message::DocumentLoaded { text },
                            Err(err) => Message::DocumentLoadFailed {
                                error: format!("Failed to fetch sample: {err}"),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::QuitSafely => {
                save_snapshot(&self.snapshot());
                save_config(Path::new(CONFIG_PATH), &self.config);
                self.stop_playback();
                iced::exit()
            }
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
