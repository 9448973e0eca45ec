pub(crate) const MIN_WPM: u32 = 100;
pub(crate) const MAX_WPM: u32 = 1000;

pub(crate) const MIN_SPEECH_SPEED: f32 = 0.5;
pub(crate) const MAX_SPEECH_SPEED: f32 = 5.5;
pub(crate) const MIN_SPEECH_VOLUME: f32 = 0.0;
pub(crate) const MAX_SPEECH_VOLUME: f32 = 2.0;

/// Persist the session every this many advancing visual ticks.
pub(crate) const PERSIST_EVERY_STEPS: u32 = 10;

/// Poll interval for narration progress while a chunk is playing.
pub(crate) const SPEECH_POLL_MS: u64 = 100;

/// Poll interval for external signals (SIGINT).
pub(crate) const SIGNAL_POLL_MS: u64 = 500;
