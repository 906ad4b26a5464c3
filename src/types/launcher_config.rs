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

use crate::types::MonitorPreset;
use anyhow::{Context, anyhow};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User defaults, read from `config.yaml` next to the settings file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// RDP client executable. Detected per platform when unset.
    #[serde(default)]
    pub client: Option<PathBuf>,
    #[serde(default = "default_cleanup_delay_ms")]
    pub cleanup_delay_ms: u64,
    #[serde(default = "default_monitor")]
    pub default_monitor: MonitorPreset,
    #[serde(default)]
    pub default_width: Option<u32>,
    #[serde(default)]
    pub default_height: Option<u32>,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            client: None,
            cleanup_delay_ms: default_cleanup_delay_ms(),
            default_monitor: default_monitor(),
            default_width: None,
            default_height: None,
            notifications: default_notifications(),
        }
    }
}

impl LauncherConfig {
    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let mut file = std::fs::File::open(path)
            .context(format!("Unable to open config file '{}'", path.display()))?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .context("Unable to read config file contents")?;

        Self::from_slice(&buffer).context(format!("Invalid config file '{}'", path.display()))
    }

    fn from_slice(buffer: &[u8]) -> anyhow::Result<Self> {
        // An empty YAML document deserializes as null
        if buffer.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self::default());
        }

        let cfg: Self = serde_yaml::from_slice(buffer).context("Invalid YAML format in file")?;

        if cfg.cleanup_delay_ms == 0 {
            return Err(anyhow!("cleanup_delay_ms must be greater than 0"));
        }

        Ok(cfg)
    }

    pub fn cleanup_delay(&self) -> Duration {
        Duration::from_millis(self.cleanup_delay_ms)
    }
}

fn default_cleanup_delay_ms() -> u64 {
    2000
}

fn default_monitor() -> MonitorPreset {
    MonitorPreset::Left
}

fn default_notifications() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = LauncherConfig::load(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(cfg.cleanup_delay(), Duration::from_secs(2));
        assert_eq!(cfg.default_monitor, MonitorPreset::Left);
        assert!(cfg.notifications);
        assert!(cfg.client.is_none());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg = LauncherConfig::from_slice(b"\n  \n").unwrap();
        assert_eq!(cfg.cleanup_delay_ms, 2000);
    }

    #[test]
    fn test_partial_file() {
        let yaml = b"default_monitor: right\ndefault_width: 1920\ndefault_height: 1080\nnotifications: false\n";
        let cfg = LauncherConfig::from_slice(yaml).unwrap();
        assert_eq!(cfg.default_monitor, MonitorPreset::Right);
        assert_eq!(cfg.default_width, Some(1920));
        assert_eq!(cfg.default_height, Some(1080));
        assert!(!cfg.notifications);
        assert_eq!(cfg.cleanup_delay_ms, 2000);
    }

    #[test]
    fn test_client_path() {
        let cfg = LauncherConfig::from_slice(b"client: /usr/bin/xfreerdp3\n").unwrap();
        assert_eq!(cfg.client, Some(PathBuf::from("/usr/bin/xfreerdp3")));
    }

    #[test]
    fn test_invalid_files_rejected() {
        assert!(LauncherConfig::from_slice(b"default_monitor: diagonal\n").is_err());
        assert!(LauncherConfig::from_slice(b"cleanup_delay_ms: 0\n").is_err());
        assert!(LauncherConfig::from_slice(b"unknown_key: 1\n").is_err());
    }
}
