use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the picker outside of the color pipeline itself.
///
/// Color math never fails: out-of-range channels are clamped and degenerate
/// geometry is skipped, so everything here comes from the edges of the
/// program (settings files, the terminal, command-line arguments).
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown channel '{0}' (expected hue, saturation or light)")]
    InvalidChannel(String),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("settings file already exists: {0:?}")]
    AlreadyExists(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
