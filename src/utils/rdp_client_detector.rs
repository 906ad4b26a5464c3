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

use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Windows,
    Wayland,
    X11,
    Unknown,
}

pub fn get_display_server() -> DisplayServer {
    static DISPLAY_SERVER_CACHE: OnceLock<DisplayServer> = OnceLock::new();

    *DISPLAY_SERVER_CACHE.get_or_init(|| {
        if cfg!(windows) {
            return DisplayServer::Windows;
        }

        display_server_from_session_type(env::var("XDG_SESSION_TYPE").ok().as_deref())
    })
}

fn display_server_from_session_type(session_type: Option<&str>) -> DisplayServer {
    match session_type.map(str::to_lowercase).as_deref() {
        Some("wayland") => DisplayServer::Wayland,
        Some("x11") => DisplayServer::X11,
        _ => DisplayServer::Unknown,
    }
}

// Both clients take the .rdp file as their only argument.
// wlfreerdp3 is deprecated, Wayland sessions go through XWayland.
pub fn get_rdp_client_executable() -> &'static str {
    client_for(get_display_server())
}

fn client_for(display_server: DisplayServer) -> &'static str {
    match display_server {
        DisplayServer::Windows => "mstsc.exe",
        DisplayServer::Wayland => "xfreerdp3",
        _ => "xfreerdp3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_parsing() {
        assert_eq!(display_server_from_session_type(Some("wayland")), DisplayServer::Wayland);
        assert_eq!(display_server_from_session_type(Some("X11")), DisplayServer::X11);
        assert_eq!(display_server_from_session_type(Some("tty")), DisplayServer::Unknown);
        assert_eq!(display_server_from_session_type(None), DisplayServer::Unknown);
    }

    #[test]
    fn test_client_per_platform() {
        assert_eq!(client_for(DisplayServer::Windows), "mstsc.exe");
        assert_eq!(client_for(DisplayServer::X11), "xfreerdp3");
        assert_eq!(client_for(DisplayServer::Unknown), "xfreerdp3");
    }
}
