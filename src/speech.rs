//! Narration support using `piper-rs` with WAV caching in `.cache`.
//! Audio is generated per chunk and reused across sessions.

use anyhow::{Context, Result};
use piper_rs::from_config_path;
use piper_rs::synth::{AudioOutputConfig, PiperSpeechSynthesizer};
use rodio::{Decoder, OutputStream, Sink};
use sha2::{Digest, Sha256};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Clone)]
pub struct SpeechEngine {
    model_path: PathBuf,
}

impl SpeechEngine {
    pub fn new(model_path: PathBuf, espeak_path: PathBuf) -> Result<Self> {
        let espeak_path = sanitize_espeak_root(espeak_path);
        if env::var_os("PIPER_ESPEAKNG_DATA_DIRECTORY").is_none() {
            // Safe because we set a deterministic value early in process startup.
            unsafe {
                env::set_var("PIPER_ESPEAKNG_DATA_DIRECTORY", &espeak_path);
            }
        }
        info!(
            model = %model_path.display(),
            espeak_root = %espeak_path.display(),
            "Initializing speech engine"
        );
        Ok(Self { model_path })
    }

    /// Synthesize one chunk of text, reusing the cached WAV when present.
    /// Returns the audio path and its total duration.
    pub fn synthesize_chunk(
        &self,
        cache_root: &Path,
        text: &str,
        speed: f32,
    ) -> Result<(PathBuf, Duration)> {
        let path = cache_path(cache_root, &self.model_path, text, speed);
        if path.exists() {
            debug!(path = %path.display(), "Reusing cached chunk audio");
            return Ok((path.clone(), chunk_duration(&path)));
        }

        let config_path = resolve_piper_config(&self.model_path);
        if !config_path.exists() {
            anyhow::bail!(
                "Piper config not found at {} (expected from {})",
                config_path.display(),
                self.model_path.display()
            );
        }
        let model = from_config_path(&config_path).context("Loading Piper model")?;
        let piper =
            PiperSpeechSynthesizer::new(model).context("Preparing Piper synthesizer")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Creating speech cache directory")?;
        }

        debug!(
            path = %path.display(),
            speed,
            chars = text.len(),
            "Synthesizing chunk with Piper"
        );
        let output_config = if (speed - 1.0).abs() <= f32::EPSILON {
            None
        } else {
            Some(AudioOutputConfig {
                rate: Some(speed_to_rate_percent(speed)),
                volume: None,
                pitch: None,
                appended_silence_ms: None,
            })
        };
        piper
            .synthesize_to_file(&path, text.to_string(), output_config)
            .context("Synthesizing audio")?;

        let duration = chunk_duration(&path);
        Ok((path, duration))
    }

    /// Start playing a synthesized chunk; returns a handle that tracks how far
    /// along playback is.
    pub fn play(&self, path: &Path, total: Duration, volume: f32) -> Result<SpeechPlayback> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;

        let reader = BufReader::new(
            File::open(path).with_context(|| format!("Opening {}", path.display()))?,
        );
        let source = Decoder::new(reader).context("Decoding chunk audio")?;
        sink.append(source);
        sink.set_volume(volume.clamp(0.0, 2.0));
        sink.play();

        info!(
            path = %path.display(),
            total_ms = total.as_millis(),
            "Starting chunk playback"
        );
        Ok(SpeechPlayback {
            _stream,
            sink,
            total,
            started_at: Instant::now(),
        })
    }
}

pub struct SpeechPlayback {
    _stream: OutputStream,
    sink: Sink,
    total: Duration,
    started_at: Instant,
}

impl SpeechPlayback {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed().min(self.total)
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn finished(&self) -> bool {
        self.sink.empty()
    }

    pub fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 2.0));
    }

    pub fn stop(self) {
        debug!("Stopping chunk playback");
        self.sink.stop();
        // stream dropped automatically
    }
}

fn cache_path(base: &Path, model_path: &Path, text: &str, speed: f32) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(model_path.as_os_str().to_string_lossy().as_bytes());
    hasher.update(text.as_bytes());
    hasher.update(speed.to_le_bytes());
    let hash = format!("{:x}", hasher.finalize());
    base.join(format!("chunk-{hash}.wav"))
}

/// Piper expects the parent directory that contains `espeak-ng-data/phonindex`.
/// Users often point directly at `.../espeak-ng-data`; trim that to avoid
/// duplicated segments like `/espeak-ng-data/espeak-ng-data/phonindex`.
fn sanitize_espeak_root(path: PathBuf) -> PathBuf {
    if path
        .file_name()
        .map(|n| n == "espeak-ng-data")
        .unwrap_or(false)
    {
        if let Some(parent) = path.parent() {
            debug!(
                original = %path.display(),
                sanitized = %parent.display(),
                "Trimming espeak-ng-data suffix"
            );
            return parent.to_path_buf();
        }
    }
    path
}

fn chunk_duration(path: &Path) -> Duration {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return Duration::from_secs(1),
    };
    let reader = BufReader::new(file);
    Decoder::new(reader)
        .ok()
        .and_then(|d| rodio::Source::total_duration(&d))
        .unwrap_or(Duration::from_secs(1))
}

fn resolve_piper_config(model_path: &Path) -> PathBuf {
    if model_path
        .extension()
        .map(|ext| ext == "onnx")
        .unwrap_or(false)
    {
        return model_path.with_extension("onnx.json");
    }
    model_path.to_path_buf()
}

fn speed_to_rate_percent(speed: f32) -> u8 {
    let clamped = speed.clamp(0.5, 5.5);
    let percent = ((clamped - 0.5) / 5.0) * 100.0;
    percent.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_depends_on_text_and_speed() {
        let base = Path::new(".cache/speech");
        let model = Path::new("/voices/en.onnx");
        let a = cache_path(base, model, "hello world", 1.0);
        let b = cache_path(base, model, "hello world", 1.5);
        let c = cache_path(base, model, "other text", 1.0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, cache_path(base, model, "hello world", 1.0));
    }

    #[test]
    fn sanitizes_espeak_data_suffix() {
        assert_eq!(
            sanitize_espeak_root(PathBuf::from("/usr/share/espeak-ng-data")),
            PathBuf::from("/usr/share")
        );
        assert_eq!(
            sanitize_espeak_root(PathBuf::from("/usr/share")),
            PathBuf::from("/usr/share")
        );
    }

    #[test]
    fn resolves_onnx_config_sibling() {
        assert_eq!(
            resolve_piper_config(Path::new("/voices/en.onnx")),
            PathBuf::from("/voices/en.onnx.json")
        );
        assert_eq!(
            resolve_piper_config(Path::new("/voices/config.json")),
            PathBuf::from("/voices/config.json")
        );
    }

    #[test]
    fn maps_speed_onto_rate_percent_range() {
        assert_eq!(speed_to_rate_percent(0.5), 0);
        assert_eq!(speed_to_rate_percent(5.5), 100);
        assert_eq!(speed_to_rate_percent(3.0), 50);
    }
}
