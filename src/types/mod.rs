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

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod connection_request;
pub mod launcher_config;
pub mod local_settings;

/// Last on-screen location of the launcher window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

/// Window placements laid out for a 5120x2160 ultrawide, leaving 25px at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorPreset {
    Left,
    Center,
    Right,
    Full,
}

/// Preset rectangle, as `(offset_x, offset_y, right, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRect {
    pub offset_x: i32,
    pub offset_y: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PresetRect {
    pub fn width(&self) -> u32 {
        (self.right - self.offset_x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.offset_y).max(0) as u32
    }
}

impl MonitorPreset {
    pub const ALL: [MonitorPreset; 4] = [
        MonitorPreset::Left,
        MonitorPreset::Center,
        MonitorPreset::Right,
        MonitorPreset::Full,
    ];

    pub fn rect(&self) -> PresetRect {
        let (offset_x, offset_y, right, bottom) = match self {
            MonitorPreset::Left => (0, 25, 2532, 2037),
            MonitorPreset::Center => (1294, 25, 3826, 2037),
            MonitorPreset::Right => (2588, 25, 5120, 2037),
            MonitorPreset::Full => (0, 25, 5120, 2160),
        };

        PresetRect {
            offset_x,
            offset_y,
            right,
            bottom,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonitorPreset::Left => "left",
            MonitorPreset::Center => "center",
            MonitorPreset::Right => "right",
            MonitorPreset::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolutionPreset {
    #[value(name = "2532x2012")]
    Ultrawide,
    #[value(name = "1920x1080")]
    FullHd,
    #[value(name = "2560x1440")]
    Qhd,
    #[value(name = "3840x2160")]
    Uhd,
}

impl ResolutionPreset {
    pub const ALL: [ResolutionPreset; 4] = [
        ResolutionPreset::Ultrawide,
        ResolutionPreset::FullHd,
        ResolutionPreset::Qhd,
        ResolutionPreset::Uhd,
    ];

    pub fn size(&self) -> (u32, u32) {
        match self {
            ResolutionPreset::Ultrawide => (2532, 2012),
            ResolutionPreset::FullHd => (1920, 1080),
            ResolutionPreset::Qhd => (2560, 1440),
            ResolutionPreset::Uhd => (3840, 2160),
        }
    }
}
