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

use crate::types::WindowPosition;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "RdpLauncher";
const SETTINGS_FILE_NAME: &str = "rdp-launcher-settings.txt";
const CONFIG_FILE_NAME: &str = "config.yaml";
const LOG_FILE_NAME: &str = "log.txt";

/// Per-user files of the launcher, all under the local application-data directory.
#[derive(Debug, Clone)]
pub struct LocalSettings {
    pub home_dir: PathBuf,
    pub settings_file: PathBuf,
    pub config_file: PathBuf,
    pub log_file: PathBuf,
}

impl LocalSettings {
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_local_dir()
            .context("Unable to find the local application data directory")?;
        Ok(Self::in_dir(data_dir.join(APP_DIR_NAME)))
    }

    pub fn in_dir(home_dir: PathBuf) -> Self {
        Self {
            settings_file: home_dir.join(SETTINGS_FILE_NAME),
            config_file: home_dir.join(CONFIG_FILE_NAME),
            log_file: home_dir.join(LOG_FILE_NAME),
            home_dir,
        }
    }

    /// Never fails: a missing file or a bad line leaves the coordinate at 0.
    pub fn load_window_position(&self) -> WindowPosition {
        match std::fs::read_to_string(&self.settings_file) {
            Ok(content) => parse_window_position(&content),
            Err(e) => {
                tracing::debug!(
                    "No window position loaded from {}: {e}",
                    self.settings_file.display()
                );
                WindowPosition::default()
            }
        }
    }

    /// Best effort, errors are only logged.
    pub fn save_window_position(&self, position: WindowPosition) {
        if let Err(e) = self.try_save_window_position(position) {
            tracing::warn!("Error saving window position: {e:#}");
        }
    }

    fn try_save_window_position(&self, position: WindowPosition) -> Result<()> {
        std::fs::create_dir_all(&self.home_dir).context(format!(
            "Failed to create settings directory {}",
            self.home_dir.display()
        ))?;

        write_window_position(&self.settings_file, position)
    }
}

fn write_window_position(path: &Path, position: WindowPosition) -> Result<()> {
    let content = format!("WindowX={}\nWindowY={}\n", position.x, position.y);
    std::fs::write(path, content)
        .context(format!("Failed to write settings file {}", path.display()))
}

fn parse_window_position(content: &str) -> WindowPosition {
    let mut position = WindowPosition::default();

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("WindowX=") {
            position.x = value.trim().parse().unwrap_or(0);
        } else if let Some(value) = line.strip_prefix("WindowY=") {
            position.y = value.trim().parse().unwrap_or(0);
        }
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings_in(dir: &TempDir) -> LocalSettings {
        LocalSettings::in_dir(dir.path().join(APP_DIR_NAME))
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        for position in [
            WindowPosition { x: 0, y: 0 },
            WindowPosition { x: 100, y: 250 },
            WindowPosition { x: -1920, y: -5 },
        ] {
            settings.save_window_position(position);
            assert_eq!(settings.load_window_position(), position);
        }
    }

    #[test]
    fn test_save_creates_directory_and_two_lines() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        settings.save_window_position(WindowPosition { x: 12, y: 34 });

        let content = std::fs::read_to_string(&settings.settings_file).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), ["WindowX=12", "WindowY=34"]);
    }

    #[test]
    fn test_missing_file_is_origin() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        assert_eq!(settings.load_window_position(), WindowPosition::default());
    }

    #[test]
    fn test_empty_file_is_origin() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);
        std::fs::create_dir_all(&settings.home_dir).unwrap();
        std::fs::write(&settings.settings_file, "").unwrap();
        assert_eq!(settings.load_window_position(), WindowPosition::default());
    }

    #[test]
    fn test_only_x_line() {
        assert_eq!(
            parse_window_position("WindowX=100"),
            WindowPosition { x: 100, y: 0 }
        );
    }

    #[test]
    fn test_malformed_and_unknown_lines() {
        let content = "Theme=dark\nWindowX=abc\nWindowY=42\n";
        assert_eq!(parse_window_position(content), WindowPosition { x: 0, y: 42 });
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A file where the settings directory should be
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();
        let settings = LocalSettings::in_dir(blocker.join("nested"));

        settings.save_window_position(WindowPosition { x: 1, y: 2 });
        assert_eq!(settings.load_window_position(), WindowPosition::default());
    }
}
