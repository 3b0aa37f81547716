use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::config::LogLevel;
use crate::error::Result;

/// Install the global logger writing to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_stderr(level: LogLevel) -> Result<()> {
    builder(level).try_init()?;
    Ok(())
}

/// Install the global logger appending to `path`.
///
/// Used while the TUI owns the terminal, where stderr output would tear the
/// screen.
pub fn init_file(level: LogLevel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    builder(level)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .try_init()?;
    Ok(())
}

fn builder(level: LogLevel) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.to_level_filter())
        .format_timestamp_millis()
        .parse_default_env();
    builder
}
