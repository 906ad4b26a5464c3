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

use anyhow::Context;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Success,
    Error,
}

/// Transient message reported after a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: StatusSeverity,
    pub title: String,
    pub body: String,
}

impl StatusMessage {
    pub fn success(title: &str, body: String) -> Self {
        Self {
            severity: StatusSeverity::Success,
            title: title.to_string(),
            body,
        }
    }

    pub fn error(title: &str, body: String) -> Self {
        Self {
            severity: StatusSeverity::Error,
            title: title.to_string(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == StatusSeverity::Success
    }
}

impl Display for StatusMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.body)
    }
}

/// Prints the status and, when asked, shows it as a desktop notification.
pub fn show_status(status: &StatusMessage, desktop_notification: bool) {
    match status.severity {
        StatusSeverity::Success => println!("{status}"),
        StatusSeverity::Error => eprintln!("{status}"),
    }

    if !desktop_notification {
        return;
    }

    let result = notify_rust::Notification::new()
        .summary(&status.title)
        .body(&status.body)
        .show()
        .context("Failed to show desktop notification");

    if let Err(e) = result {
        tracing::warn!("{e:#}");
    }
}
