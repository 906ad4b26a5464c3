// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Paul <abonnementspaul (at) gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn env_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rdp_launcher={level},warn")))
}

/// Logs to stderr, plus `log_file` in debug builds.
pub fn init_logging(verbose: u8, log_file: &Path) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    if cfg!(debug_assertions) {
        if let Some(dir) = log_file.parent() {
            std::fs::create_dir_all(dir).context("Couldn't create log directory")?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .context("Couldn't open log file")?;

        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        registry.try_init().context("Failed to initialize logging")?;
    }

    Ok(())
}
