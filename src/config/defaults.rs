pub(crate) fn default_wpm() -> u32 {
    300
}

pub(crate) fn default_wpm_step() -> u32 {
    50
}

pub(crate) fn default_speech_chunk_words() -> usize {
    200
}

pub(crate) fn default_speech_model() -> String {
    "/usr/share/piper-voices/en/en_US/ryan/high/en_US-ryan-high.onnx".to_string()
}

pub(crate) fn default_speech_espeak_path() -> String {
    "/usr/share".to_string()
}

pub(crate) fn default_speech_speed() -> f32 {
    1.0
}

pub(crate) fn default_speech_volume() -> f32 {
    1.0
}

pub(crate) fn default_sample_text_url() -> String {
    "https://www.gutenberg.org/cache/epub/84/pg84.txt".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    560.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_jump_back() -> String {
    "left".to_string()
}

pub(crate) fn default_key_jump_forward() -> String {
    "right".to_string()
}

pub(crate) fn default_key_jump_back_far() -> String {
    "shift+left".to_string()
}

pub(crate) fn default_key_jump_forward_far() -> String {
    "shift+right".to_string()
}

pub(crate) fn default_key_speed_up() -> String {
    "up".to_string()
}

pub(crate) fn default_key_speed_down() -> String {
    "down".to_string()
}

pub(crate) fn default_key_toggle_mode() -> String {
    "m".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_toggle_help() -> String {
    "h".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
