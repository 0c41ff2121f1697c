//! File sink for the `log` facade, backed by `env_logger`.
//!
//! The game owns the terminal, so records can never go to stdout/stderr.
//! With no `log_path` configured no logger is installed and every `log`
//! macro is a no-op.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target, WriteStyle};

use crate::config::GameConfig;

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Logger builder writing plain records at `config.log_level` into `file`.
fn file_builder(config: &GameConfig, file: File) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)));
    builder
}

/// Install the file logger when the config asks for one.
///
/// Returns whether a logger was installed.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    file_builder(config, open_append(path)?)
        .try_init()
        .context("installing logger")?;
    Ok(true)
}
