//! Persisted reading session, one JSON slot under `.cache/`.
//!
//! The slot remembers the loaded text, the word cursor, the WPM setting and
//! the last reading mode. Anything missing or malformed is treated as "no
//! saved session"; write errors are logged and ignored to keep the UI
//! responsive.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CACHE_DIR: &str = ".cache";
const SESSION_FILE: &str = "session.json";

/// Which scheduler drives the word cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    Visual,
    Speech,
}

impl Default for ReadingMode {
    fn default() -> Self {
        ReadingMode::Visual
    }
}

impl std::fmt::Display for ReadingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReadingMode::Visual => "Visual",
            ReadingMode::Speech => "Speech",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub current_index: i64,
    #[serde(default = "default_snapshot_wpm")]
    pub wpm: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_mode: Option<ReadingMode>,
}

fn default_snapshot_wpm() -> u32 {
    300
}

/// Load the saved session, if any. Malformed data counts as absent.
pub fn load_snapshot() -> Option<Snapshot> {
    let path = session_path();
    let data = fs::read_to_string(&path).ok()?;
    match parse_snapshot(&data) {
        Some(snapshot) => Some(snapshot),
        None => {
            debug!(path = %path.display(), "Ignoring malformed session file");
            None
        }
    }
}

pub fn parse_snapshot(data: &str) -> Option<Snapshot> {
    serde_json::from_str(data).ok()
}

/// Persist the session. Errors are logged and swallowed so a full disk or a
/// read-only cache never interrupts reading.
pub fn save_snapshot(snapshot: &Snapshot) {
    let path = session_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let contents = match serde_json::to_string(snapshot) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("Failed to serialize session: {err}");
            return;
        }
    };
    match fs::File::create(&path) {
        Ok(mut file) => {
            if let Err(err) = file.write_all(contents.as_bytes()) {
                warn!(path = %path.display(), "Failed to write session: {err}");
            }
        }
        Err(err) => {
            warn!(path = %path.display(), "Failed to create session file: {err}");
        }
    }
}

fn session_path() -> PathBuf {
    Path::new(CACHE_DIR).join(SESSION_FILE)
}

/// Directory for synthesized narration audio.
pub fn speech_cache_dir() -> PathBuf {
    Path::new(CACHE_DIR).join("speech")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_snapshot() {
        let snapshot = parse_snapshot(
            r#"{"text":"a b c","currentIndex":2,"wpm":450,"readingMode":"speech"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.text, "a b c");
        assert_eq!(snapshot.current_index, 2);
        assert_eq!(snapshot.wpm, 450);
        assert_eq!(snapshot.reading_mode, Some(ReadingMode::Speech));
    }

    #[test]
    fn reading_mode_is_optional() {
        let snapshot = parse_snapshot(r#"{"text":"a","currentIndex":0,"wpm":300}"#).unwrap();
        assert_eq!(snapshot.reading_mode, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let snapshot = parse_snapshot(r#"{"text":"a b"}"#).unwrap();
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.wpm, 300);
    }

    #[test]
    fn malformed_json_is_absent() {
        assert!(parse_snapshot("not json").is_none());
        assert!(parse_snapshot(r#"{"wpm":"fast"}"#).is_none());
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_mode() {
        let json = serde_json::to_string(&Snapshot {
            text: "a".into(),
            current_index: 1,
            wpm: 300,
            reading_mode: None,
        })
        .unwrap();
        assert!(json.contains("currentIndex"));
        assert!(!json.contains("readingMode"));
    }
}
