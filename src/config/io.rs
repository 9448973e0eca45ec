use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or unreadable.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => {
            let config = parse_config(&data);
            info!(path = %path.display(), "Loaded configuration");
            config
        }
        Err(err) => {
            debug!(path = %path.display(), "No config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

/// Parse a TOML document into an `AppConfig`; invalid documents fall back to
/// defaults so a typo never blocks startup.
pub fn parse_config(data: &str) -> AppConfig {
    match toml::from_str(data) {
        Ok(config) => config,
        Err(err) => {
            warn!("Invalid config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

pub fn serialize_config(config: &AppConfig) -> Option<String> {
    match toml::to_string(config) {
        Ok(contents) => Some(contents),
        Err(err) => {
            warn!("Failed to serialize config: {err}");
            None
        }
    }
}

/// Persist configuration back to `path`. Errors are ignored to keep the UI
/// responsive.
pub fn save_config(path: &Path, config: &AppConfig) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Some(contents) = serialize_config(config) {
        if let Err(err) = fs::write(path, contents) {
            warn!(path = %path.display(), "Failed to save config: {err}");
        }
    }
}
