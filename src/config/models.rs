use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_wpm")]
    pub default_wpm: u32,
    #[serde(default = "crate::config::defaults::default_wpm_step")]
    pub wpm_step: u32,
    #[serde(default = "crate::config::defaults::default_speech_chunk_words")]
    pub speech_chunk_words: usize,
    #[serde(default = "crate::config::defaults::default_speech_model")]
    pub speech_model_path: String,
    #[serde(default = "crate::config::defaults::default_speech_espeak_path")]
    pub speech_espeak_path: String,
    #[serde(default = "crate::config::defaults::default_speech_speed")]
    pub speech_speed: f32,
    #[serde(default = "crate::config::defaults::default_speech_volume")]
    pub speech_volume: f32,
    #[serde(default = "crate::config::defaults::default_sample_text_url")]
    pub sample_text_url: String,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_play_pause")]
    pub key_toggle_play_pause: String,
    #[serde(default = "crate::config::defaults::default_key_jump_back")]
    pub key_jump_back: String,
    #[serde(default = "crate::config::defaults::default_key_jump_forward")]
    pub key_jump_forward: String,
    #[serde(default = "crate::config::defaults::default_key_jump_back_far")]
    pub key_jump_back_far: String,
    #[serde(default = "crate::config::defaults::default_key_jump_forward_far")]
    pub key_jump_forward_far: String,
    #[serde(default = "crate::config::defaults::default_key_speed_up")]
    pub key_speed_up: String,
    #[serde(default = "crate::config::defaults::default_key_speed_down")]
    pub key_speed_down: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_mode")]
    pub key_toggle_mode: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_help")]
    pub key_toggle_help: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            default_wpm: crate::config::defaults::default_wpm(),
            wpm_step: crate::config::defaults::default_wpm_step(),
            speech_chunk_words: crate::config::defaults::default_speech_chunk_words(),
            speech_model_path: crate::config::defaults::default_speech_model(),
            speech_espeak_path: crate::config::defaults::default_speech_espeak_path(),
            speech_speed: crate::config::defaults::default_speech_speed(),
            speech_volume: crate::config::defaults::default_speech_volume(),
            sample_text_url: crate::config::defaults::default_sample_text_url(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_jump_back: crate::config::defaults::default_key_jump_back(),
            key_jump_forward: crate::config::defaults::default_key_jump_forward(),
            key_jump_back_far: crate::config::defaults::default_key_jump_back_far(),
            key_jump_forward_far: crate::config::defaults::default_key_jump_forward_far(),
            key_speed_up: crate::config::defaults::default_key_speed_up(),
            key_speed_down: crate::config::defaults::default_key_speed_down(),
            key_toggle_mode: crate::config::defaults::default_key_toggle_mode(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_toggle_help: crate::config::defaults::default_key_toggle_help(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", label)
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
