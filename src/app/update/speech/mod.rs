mod transitions;

use super::Effect;
use crate::app::state::{App, MAX_SPEECH_SPEED, MAX_SPEECH_VOLUME, MIN_SPEECH_SPEED, MIN_SPEECH_VOLUME};
use crate::document::word_starts;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use transitions::{SpeechAction, SpeechEvent, transition};

impl App {
    pub(super) fn start_narration(&mut self, effects: &mut Vec<Effect>) {
        let actions = transition(self, SpeechEvent::StartRequested);
        self.apply_speech_actions(actions, effects);
    }

    pub(super) fn handle_chunk_prepared(
        &mut self,
        request_id: u64,
        path: PathBuf,
        duration: Duration,
        effects: &mut Vec<Effect>,
    ) {
        let actions = transition(
            self,
            SpeechEvent::ChunkPrepared {
                request_id,
                path,
                duration,
            },
        );
        self.apply_speech_actions(actions, effects);
    }

    pub(super) fn handle_speech_failed(
        &mut self,
        request_id: u64,
        error: String,
        effects: &mut Vec<Effect>,
    ) {
        let actions = transition(self, SpeechEvent::EngineFailed { request_id, error });
        self.apply_speech_actions(actions, effects);
    }

    /// Sample the playback clock and translate it into cursor movement. The
    /// engine reports no word boundaries, so progress is interpolated over
    /// the chunk's bytes and snapped to the nearest word start behind it.
    pub(super) fn handle_speech_poll(&mut self, effects: &mut Vec<Effect>) {
        let Some(request_id) = self.speech.active_request_id() else {
            return;
        };
        let Some(playback) = &self.speech.playback else {
            return;
        };
        let Some(chunk) = &self.speech.current_chunk else {
            return;
        };

        if playback.finished() {
            let actions = transition(self, SpeechEvent::ChunkFinished { request_id });
            self.apply_speech_actions(actions, effects);
            return;
        }

        let total = playback.total().as_secs_f64();
        if total <= 0.0 {
            return;
        }
        let fraction = (playback.elapsed().as_secs_f64() / total).clamp(0.0, 1.0);
        let raw = (chunk.text.len() as f64 * fraction) as usize;
        let char_offset = word_starts(&chunk.text)
            .into_iter()
            .take_while(|&start| start <= raw)
            .last()
            .unwrap_or(0);

        let actions = transition(
            self,
            SpeechEvent::Progress {
                request_id,
                char_offset,
            },
        );
        self.apply_speech_actions(actions, effects);
    }

    pub(super) fn handle_set_speech_speed(&mut self, speed: f32, effects: &mut Vec<Effect>) {
        let speed = speed.clamp(MIN_SPEECH_SPEED, MAX_SPEECH_SPEED);
        if (speed - self.config.speech_speed).abs() <= f32::EPSILON {
            return;
        }
        self.config.speech_speed = speed;
        debug!(speed, "Adjusted narration speed");
        effects.push(Effect::SaveConfig);

        // Speed is baked into the synthesized audio, so a running narration
        // restarts from the current position at the new rate.
        if self.speech.is_active() {
            info!("Restarting narration at new speed");
            self.start_narration(effects);
        }
    }

    pub(super) fn handle_set_speech_volume(&mut self, volume: f32, effects: &mut Vec<Effect>) {
        let volume = volume.clamp(MIN_SPEECH_VOLUME, MAX_SPEECH_VOLUME);
        if (volume - self.config.speech_volume).abs() <= f32::EPSILON {
            return;
        }
        self.config.speech_volume = volume;
        if let Some(playback) = &self.speech.playback {
            playback.set_volume(volume);
        }
        debug!(volume, "Adjusted narration volume");
        effects.push(Effect::SaveConfig);
    }

    fn apply_speech_actions(&mut self, actions: Vec<SpeechAction>, effects: &mut Vec<Effect>) {
        for action in actions {
            match action {
                SpeechAction::Synthesize { request_id, chunk } => {
                    effects.push(Effect::SynthesizeChunk { request_id, chunk });
                }
                SpeechAction::Play { path, duration } => {
                    effects.push(Effect::PlayChunk { path, duration });
                }
                SpeechAction::Persist => effects.push(Effect::PersistSnapshot),
            }
        }
    }
}
