mod core;
mod playback;
mod speech;

use super::state::SpeechChunk;
use std::path::PathBuf;
use std::time::Duration;

/// Side effects produced by the reducer and executed by the runtime.
pub(super) enum Effect {
    PersistSnapshot,
    SaveConfig,
    SynthesizeChunk {
        request_id: u64,
        chunk: SpeechChunk,
    },
    PlayChunk {
        path: PathBuf,
        duration: Duration,
    },
    LoadDocument(PathBuf),
    FetchSample(String),
    QuitSafely,
}
