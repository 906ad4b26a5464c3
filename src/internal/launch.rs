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
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

pub const DEFAULT_CLEANUP_DELAY: Duration = Duration::from_secs(2);

/// Deletes a connection file once the client has had time to read it.
#[derive(Debug)]
pub struct CleanupTimer {
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl CleanupTimer {
    fn schedule(path: PathBuf, delay: Duration) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_for_thread = cancelled.clone();

        let handle = thread::spawn(move || {
            thread::sleep(delay);

            if cancelled_for_thread.load(Ordering::SeqCst) {
                tracing::debug!("Cleanup of {path:?} cancelled");
                return;
            }

            // The client may still hold the file open, nothing to do about it
            match std::fs::remove_file(&path) {
                Ok(_) => tracing::debug!("Removed connection file {path:?}"),
                Err(e) => tracing::debug!("Could not remove connection file {path:?}: {e}"),
            }
        });

        Self { cancelled, handle }
    }

    /// Keeps the file on disk. Has no effect once the delay has elapsed.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the cleanup thread is done.
    pub fn wait(self) {
        if self.handle.join().is_err() {
            tracing::warn!("Connection file cleanup thread panicked");
        }
    }
}

#[derive(Debug)]
pub enum LaunchOutcome {
    Launched {
        rdp_file: PathBuf,
        cleanup: CleanupTimer,
    },
    Failed {
        message: String,
    },
}

/// Hands connection files to an external RDP client.
#[derive(Debug, Clone)]
pub struct SessionLauncher {
    client: PathBuf,
    temp_dir: PathBuf,
    cleanup_delay: Duration,
}

impl SessionLauncher {
    pub fn new(client: impl Into<PathBuf>) -> Self {
        Self {
            client: client.into(),
            temp_dir: std::env::temp_dir(),
            cleanup_delay: DEFAULT_CLEANUP_DELAY,
        }
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn with_cleanup_delay(mut self, delay: Duration) -> Self {
        self.cleanup_delay = delay;
        self
    }

    pub fn client(&self) -> &Path {
        &self.client
    }

    /// Writes `document` to a temp file and opens it with the client, without waiting on it.
    pub fn launch(&self, document: &str) -> LaunchOutcome {
        let rdp_file = match self.write_connection_file(document) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("{e:#}");
                return LaunchOutcome::Failed {
                    message: format!("{e:#}"),
                };
            }
        };

        if let Err(e) = self.spawn_client(&rdp_file) {
            tracing::error!("{e:#}");
            return LaunchOutcome::Failed {
                message: format!("{e:#}"),
            };
        }

        let cleanup = CleanupTimer::schedule(rdp_file.clone(), self.cleanup_delay);

        LaunchOutcome::Launched { rdp_file, cleanup }
    }

    fn write_connection_file(&self, document: &str) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix("rdp-launcher-")
            .suffix(".rdp")
            .tempfile_in(&self.temp_dir)
            .context(format!(
                "Unable to create connection file in {}",
                self.temp_dir.display()
            ))?;

        file.write_all(document.as_bytes())
            .context("Unable to write connection file")?;
        file.flush().context("Unable to write connection file")?;

        let path = file
            .into_temp_path()
            .keep()
            .context("Unable to keep connection file")?;

        tracing::debug!("Wrote connection file {path:?}");
        Ok(path)
    }

    fn spawn_client(&self, rdp_file: &Path) -> Result<()> {
        tracing::info!("Launching {:?} with {rdp_file:?}", self.client);

        // Not waited on: the session outlives the launcher
        let _child = Command::new(&self.client)
            .arg(rdp_file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context(format!("Failed to launch {}", self.client.display()))?;

        Ok(())
    }
}
