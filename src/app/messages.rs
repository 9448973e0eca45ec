use crate::store::ReadingMode;
use iced::keyboard::{Key, Modifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// All UI and runtime events feeding `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    TogglePlayPause,
    SetMode(ReadingMode),
    SetWpm(u32),
    StepWpm(i32),
    JumpWords(i64),
    VisualTick(Instant),
    SpeechPoll(Instant),
    ChunkPrepared {
        request_id: u64,
        path: PathBuf,
        duration: Duration,
    },
    SpeechFailed {
        request_id: u64,
        error: String,
    },
    SetSpeechSpeed(f32),
    SetSpeechVolume(f32),
    ToggleTheme,
    ToggleHelp,
    OpenPathInputChanged(String),
    OpenPathSubmitted,
    FetchSampleRequested,
    DocumentLoaded {
        text: String,
    },
    DocumentLoadFailed {
        error: String,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    PollSystemSignals(Instant),
    SafeQuit,
}
