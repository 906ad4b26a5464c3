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

use crate::internal::launch::{CleanupTimer, LaunchOutcome, SessionLauncher};
use crate::internal::rdp_profile;
use crate::types::connection_request::{ConnectionRequest, MIN_HEIGHT, MIN_WIDTH};
use crate::types::launcher_config::LauncherConfig;
use crate::types::{MonitorPreset, ResolutionPreset};
use crate::utils::notifier::StatusMessage;
use anyhow::{Result, anyhow};

/// Current values of the launch form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub server_address: String,
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl FormState {
    pub fn from_config(config: &LauncherConfig) -> Self {
        let mut form = Self {
            server_address: String::new(),
            width: 0,
            height: 0,
            offset_x: 0,
            offset_y: 0,
        };
        form.apply_monitor_preset(config.default_monitor);

        if let Some(width) = config.default_width {
            form.width = width;
        }
        if let Some(height) = config.default_height {
            form.height = height;
        }

        form
    }

    /// Fills size and offset from the preset. The fields stay editable.
    pub fn apply_monitor_preset(&mut self, preset: MonitorPreset) {
        let rect = preset.rect();
        self.offset_x = rect.offset_x;
        self.offset_y = rect.offset_y;
        self.width = rect.width();
        self.height = rect.height();
    }

    pub fn apply_resolution_preset(&mut self, preset: ResolutionPreset) {
        (self.width, self.height) = preset.size();
    }

    pub fn can_launch(&self) -> bool {
        !self.server_address.trim().is_empty() && self.width >= MIN_WIDTH && self.height >= MIN_HEIGHT
    }

    pub fn to_request(&self) -> Result<ConnectionRequest> {
        ConnectionRequest::new(
            &self.server_address,
            self.width,
            self.height,
            self.offset_x,
            self.offset_y,
        )
    }

    /// Runs one launch attempt. Returns an error without launching when the form is incomplete.
    pub fn submit(&self, launcher: &SessionLauncher) -> Result<(StatusMessage, Option<CleanupTimer>)> {
        if !self.can_launch() {
            let reason = self
                .to_request()
                .err()
                .unwrap_or_else(|| anyhow!("Form is incomplete"));
            return Err(reason.context("Launch is not available"));
        }

        let request = self.to_request()?;
        let document = rdp_profile::render(&request);

        let result = match launcher.launch(&document) {
            LaunchOutcome::Launched { rdp_file, cleanup } => {
                tracing::info!("Session launched from {rdp_file:?}");
                (
                    StatusMessage::success(
                        "RDP Launched",
                        format!(
                            "Connection to {} at {}×{}",
                            request.server_address(),
                            request.width(),
                            request.height()
                        ),
                    ),
                    Some(cleanup),
                )
            }
            LaunchOutcome::Failed { message } => {
                (StatusMessage::error("Launch Failed", message), None)
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn form(address: &str, width: u32, height: u32) -> FormState {
        FormState {
            server_address: address.to_string(),
            width,
            height,
            offset_x: 0,
            offset_y: 25,
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let form = FormState::from_config(&LauncherConfig::default());
        assert_eq!((form.width, form.height), (2532, 2012));
        assert_eq!((form.offset_x, form.offset_y), (0, 25));
        assert!(form.server_address.is_empty());
    }

    #[test]
    fn test_config_size_overrides_preset() {
        let config = LauncherConfig {
            default_monitor: MonitorPreset::Right,
            default_width: Some(1920),
            default_height: Some(1080),
            ..LauncherConfig::default()
        };
        let form = FormState::from_config(&config);
        assert_eq!((form.width, form.height), (1920, 1080));
        assert_eq!(form.offset_x, 2588);
    }

    #[test]
    fn test_presets_overwrite_fields() {
        let mut form = form("host", 1000, 700);
        form.apply_monitor_preset(MonitorPreset::Center);
        assert_eq!(form.offset_x, 1294);
        assert_eq!((form.width, form.height), (2532, 2012));

        form.apply_resolution_preset(ResolutionPreset::Uhd);
        assert_eq!((form.width, form.height), (3840, 2160));
        assert_eq!(form.offset_x, 1294);
    }

    #[test]
    fn test_launch_gating() {
        assert!(form("10.0.0.5", 800, 600).can_launch());
        assert!(!form("  ", 1920, 1080).can_launch());
        assert!(!form("10.0.0.5", 799, 1080).can_launch());
        assert!(!form("10.0.0.5", 1920, 599).can_launch());
    }

    #[test]
    fn test_disabled_form_does_not_launch() {
        let dir = TempDir::new().unwrap();
        let launcher = SessionLauncher::new("true").with_temp_dir(dir.path());

        let err = form("", 1920, 1080).submit(&launcher).unwrap_err();
        assert!(format!("{err:#}").contains("Server address"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_launch_status() {
        let dir = TempDir::new().unwrap();
        let launcher = SessionLauncher::new("true").with_temp_dir(dir.path().join("missing"));

        let (status, cleanup) = form("10.0.0.5", 1920, 1080).submit(&launcher).unwrap();
        assert!(!status.is_success());
        assert_eq!(status.title, "Launch Failed");
        assert!(cleanup.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_launch_status() {
        let dir = TempDir::new().unwrap();
        let launcher = SessionLauncher::new("true")
            .with_temp_dir(dir.path())
            .with_cleanup_delay(std::time::Duration::from_millis(50));

        let (status, cleanup) = form(" 10.0.0.5 ", 1920, 1080).submit(&launcher).unwrap();
        assert!(status.is_success());
        assert_eq!(status.title, "RDP Launched");
        assert_eq!(status.body, "Connection to 10.0.0.5 at 1920×1080");

        cleanup.expect("cleanup scheduled").wait();
    }
}
