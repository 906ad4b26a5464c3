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

use crate::internal::launch::{CleanupTimer, SessionLauncher};
use crate::types::WindowPosition;
use crate::types::launcher_config::LauncherConfig;
use crate::types::local_settings::LocalSettings;
use crate::utils::rdp_client_detector::get_rdp_client_executable;
use anyhow::Result;
use std::path::PathBuf;

/// State scoped to one run of the launcher.
#[derive(Debug)]
pub struct AppState {
    pub settings: LocalSettings,
    pub config: LauncherConfig,
    pub window_position: WindowPosition,
    pending_cleanups: Vec<CleanupTimer>,
}

impl AppState {
    pub fn load(settings: LocalSettings) -> Result<Self> {
        let config = LauncherConfig::load(&settings.config_file)?;
        let window_position = settings.load_window_position();
        tracing::debug!("Loaded window position {window_position:?}");

        Ok(Self {
            settings,
            config,
            window_position,
            pending_cleanups: Vec::new(),
        })
    }

    /// Client precedence: `client_override`, then the config file, then platform detection.
    pub fn launcher(&self, client_override: Option<PathBuf>) -> SessionLauncher {
        let client = client_override
            .or_else(|| self.config.client.clone())
            .unwrap_or_else(|| get_rdp_client_executable().into());

        SessionLauncher::new(client).with_cleanup_delay(self.config.cleanup_delay())
    }

    pub fn track_cleanup(&mut self, cleanup: CleanupTimer) {
        self.pending_cleanups.push(cleanup);
    }

    pub fn pending_cleanups(&self) -> usize {
        self.pending_cleanups.iter().filter(|c| !c.is_finished()).count()
    }

    /// Lets scheduled cleanups run before the process exits, then saves the window position.
    pub fn shutdown(self) {
        for cleanup in self.pending_cleanups {
            cleanup.wait();
        }

        self.settings.save_window_position(self.window_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_shutdown_persist_position() {
        let dir = TempDir::new().unwrap();
        let settings = LocalSettings::in_dir(dir.path().join("RdpLauncher"));

        let mut state = AppState::load(settings.clone()).unwrap();
        assert_eq!(state.window_position, WindowPosition::default());
        assert_eq!(state.pending_cleanups(), 0);

        state.window_position = WindowPosition { x: 640, y: 480 };
        state.shutdown();

        let state = AppState::load(settings).unwrap();
        assert_eq!(state.window_position, WindowPosition { x: 640, y: 480 });
    }

    #[test]
    fn test_configured_client_is_used() {
        let dir = TempDir::new().unwrap();
        let settings = LocalSettings::in_dir(dir.path().to_path_buf());
        std::fs::write(&settings.config_file, "client: my-rdp-client\ncleanup_delay_ms: 10\n")
            .unwrap();

        let state = AppState::load(settings).unwrap();
        assert_eq!(state.launcher(None).client(), std::path::Path::new("my-rdp-client"));
        assert_eq!(
            state.launcher(Some(PathBuf::from("other"))).client(),
            std::path::Path::new("other")
        );
    }

    #[test]
    fn test_broken_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let settings = LocalSettings::in_dir(dir.path().to_path_buf());
        std::fs::write(&settings.config_file, "default_monitor: [").unwrap();

        assert!(AppState::load(settings).is_err());
    }
}
