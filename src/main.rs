//! Entry point for the flashread speed reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional command-line document path.
//! - Load user configuration from `conf/config.toml`.
//! - Restore the saved session from `.cache/session.json`.
//! - Launch the GUI application.

mod app;
mod config;
mod document;
mod fetch;
mod speech;
mod store;

use crate::app::run_app;
use crate::config::load_config;
use crate::store::load_snapshot;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// True once per delivered SIGINT; the signal poll turns it into a safe quit
/// so the session is persisted before exit.
pub fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::SeqCst)
}

fn main() {
    let reload_handle = init_tracing();
    install_sigint_handler();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let text = match parse_args()? {
        Some(path) => {
            info!(path = %path.display(), "Opening document from command line");
            Some(read_document(&path)?)
        }
        None => None,
    };
    let saved = load_snapshot();
    if text.is_none() {
        if let Some(snapshot) = &saved {
            info!(
                position = snapshot.current_index,
                wpm = snapshot.wpm,
                "Resuming saved session"
            );
        }
    }
    info!(level = %config.log_level, "Starting flashread");
    run_app(text, config, saved).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };
    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(Some(path))
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}

fn install_sigint_handler() {
    let result = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::SeqCst);
    });
    if let Err(err) = result {
        warn!("Failed to install Ctrl-C handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
