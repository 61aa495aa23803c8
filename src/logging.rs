// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File based diagnostics.
//!
//! The terminal is owned by the UI, so log output goes to `calcui.log` next
//! to the configuration file instead of stderr. Nothing is installed unless
//! logging is enabled in the configuration.

use std::{
    fs::{self, File},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::{self, AppConfig};

const LOG_FILE: &str = "calcui.log";

/// Installs the global `tracing` subscriber if file logging is enabled.
///
/// An invalid `log_level` directive falls back to `info`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub(crate) fn init_logging(config: &AppConfig) -> Result<()> {
    if !config.log_to_file {
        return Ok(());
    }

    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn log_path() -> Result<PathBuf> {
    let config_path = config::config_path().context("Failed to locate configuration directory")?;
    Ok(config_path.with_file_name(LOG_FILE))
}
