use super::super::super::state::{App, SpeechChunk, SpeechLifecycle, build_chunks};
use crate::document::words_before_offset;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Everything that can happen to the narration scheduler. Progress offsets
/// are byte offsets into the current chunk's text.
#[derive(Debug)]
pub(in crate::app) enum SpeechEvent {
    StartRequested,
    ChunkPrepared {
        request_id: u64,
        path: PathBuf,
        duration: Duration,
    },
    Progress {
        request_id: u64,
        char_offset: usize,
    },
    ChunkFinished {
        request_id: u64,
    },
    EngineFailed {
        request_id: u64,
        error: String,
    },
}

#[derive(Debug)]
pub(in crate::app) enum SpeechAction {
    Synthesize {
        request_id: u64,
        chunk: SpeechChunk,
    },
    Play {
        path: PathBuf,
        duration: Duration,
    },
    Persist,
}

/// Advance the narration state machine. Pure with respect to IO: all side
/// effects are returned as actions for the runtime to execute.
pub(in crate::app) fn transition(app: &mut App, event: SpeechEvent) -> Vec<SpeechAction> {
    match event {
        SpeechEvent::StartRequested => on_start_requested(app),
        SpeechEvent::ChunkPrepared {
            request_id,
            path,
            duration,
        } => on_chunk_prepared(app, request_id, path, duration),
        SpeechEvent::Progress {
            request_id,
            char_offset,
        } => on_progress(app, request_id, char_offset),
        SpeechEvent::ChunkFinished { request_id } => on_chunk_finished(app, request_id),
        SpeechEvent::EngineFailed { request_id, error } => {
            on_engine_failed(app, request_id, error)
        }
    }
}

fn on_start_requested(app: &mut App) -> Vec<SpeechAction> {
    app.stop_playback();

    if app.reader.len() == 0 {
        return Vec::new();
    }
    if app.reader.at_end() {
        app.reader.set_position_clamped(0);
    }

    let request_id = app.speech.request_id;
    app.speech.queue = build_chunks(
        &app.reader.document,
        app.reader.position,
        app.config.speech_chunk_words,
    );
    let Some(chunk) = app.speech.queue.pop_front() else {
        return Vec::new();
    };

    info!(
        position = app.reader.position,
        chunks = app.speech.queue.len() + 1,
        request_id,
        "Starting narration"
    );
    app.speech.lifecycle = SpeechLifecycle::Preparing { request_id };
    app.speech.current_chunk = Some(chunk.clone());
    app.speech.spoken_words = 0;
    vec![SpeechAction::Synthesize { request_id, chunk }]
}

fn on_chunk_prepared(
    app: &mut App,
    request_id: u64,
    path: PathBuf,
    duration: Duration,
) -> Vec<SpeechAction> {
    if request_id != app.speech.request_id {
        debug!(
            request_id,
            current = app.speech.request_id,
            "Ignoring stale chunk preparation"
        );
        return Vec::new();
    }
    if !matches!(app.speech.lifecycle, SpeechLifecycle::Preparing { .. }) {
        return Vec::new();
    }
    let Some(chunk) = app.speech.current_chunk.clone() else {
        return Vec::new();
    };

    app.reader.set_position_clamped(chunk.start);
    app.speech.lifecycle = SpeechLifecycle::Speaking { request_id };
    app.speech.spoken_words = 0;
    debug!(
        start = chunk.start,
        words = chunk.word_count,
        duration_ms = duration.as_millis(),
        "Chunk ready, starting playback"
    );
    vec![SpeechAction::Play { path, duration }, SpeechAction::Persist]
}

fn on_progress(app: &mut App, request_id: u64, char_offset: usize) -> Vec<SpeechAction> {
    if request_id != app.speech.request_id {
        return Vec::new();
    }
    if !matches!(app.speech.lifecycle, SpeechLifecycle::Speaking { .. }) {
        return Vec::new();
    }
    let Some(chunk) = &app.speech.current_chunk else {
        return Vec::new();
    };

    let count = words_before_offset(&chunk.text, char_offset).min(chunk.word_count);
    // Progress only ever moves forward within a chunk; duplicate or
    // out-of-order offsets are no-ops.
    if count > app.speech.spoken_words {
        app.speech.spoken_words = count;
        app.reader.set_position_clamped(chunk.start + count);
    }
    Vec::new()
}

fn on_chunk_finished(app: &mut App, request_id: u64) -> Vec<SpeechAction> {
    if request_id != app.speech.request_id {
        return Vec::new();
    }
    if !matches!(app.speech.lifecycle, SpeechLifecycle::Speaking { .. }) {
        return Vec::new();
    }
    let Some(finished) = app.speech.current_chunk.take() else {
        return Vec::new();
    };

    if let Some(playback) = app.speech.playback.take() {
        playback.stop();
    }
    let end = finished.start + finished.word_count;

    match app.speech.queue.pop_front() {
        Some(next) => {
            app.reader.set_position_clamped(end);
            app.speech.lifecycle = SpeechLifecycle::Preparing { request_id };
            app.speech.current_chunk = Some(next.clone());
            app.speech.spoken_words = 0;
            debug!(next_start = next.start, "Advancing to next chunk");
            vec![
                SpeechAction::Synthesize {
                    request_id,
                    chunk: next,
                },
                SpeechAction::Persist,
            ]
        }
        None => {
            let len = app.reader.len();
            app.speech.stop_narration();
            app.reader.set_position_clamped(len.saturating_sub(1));
            info!("Narration reached end of document");
            vec![SpeechAction::Persist]
        }
    }
}

fn on_engine_failed(app: &mut App, request_id: u64, error: String) -> Vec<SpeechAction> {
    if request_id != app.speech.request_id {
        debug!(request_id, "Ignoring stale narration failure");
        return Vec::new();
    }
    if !app.speech.is_active() {
        return Vec::new();
    }
    warn!(%error, "Narration failed, stopping for this session");
    app.speech.stop_narration();
    app.load_error = Some(format!("Narration failed: {error}"));
    vec![SpeechAction::Persist]
}
