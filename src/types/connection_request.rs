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

use anyhow::{Result, anyhow};

pub const MIN_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 600;

/// Everything the connection file needs for one launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    server_address: String,
    width: u32,
    height: u32,
    offset_x: i32,
    offset_y: i32,
}

impl ConnectionRequest {
    pub fn new(
        server_address: &str,
        width: u32,
        height: u32,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<Self> {
        let server_address = server_address.trim();

        if server_address.is_empty() {
            return Err(anyhow!("Server address must not be empty"));
        }

        if width < MIN_WIDTH {
            return Err(anyhow!("Width must be at least {MIN_WIDTH} (got {width})"));
        }

        if height < MIN_HEIGHT {
            return Err(anyhow!(
                "Height must be at least {MIN_HEIGHT} (got {height})"
            ));
        }

        Ok(Self {
            server_address: server_address.to_string(),
            width,
            height,
            offset_x,
            offset_y,
        })
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> i64 {
        self.offset_x as i64
    }

    pub fn top(&self) -> i64 {
        self.offset_y as i64
    }

    pub fn right(&self) -> i64 {
        self.left() + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.top() + self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_trimmed() {
        let request = ConnectionRequest::new("  10.0.0.5\t", 1920, 1080, 0, 25).unwrap();
        assert_eq!(request.server_address(), "10.0.0.5");
    }

    #[test]
    fn test_blank_address_rejected() {
        assert!(ConnectionRequest::new("   ", 1920, 1080, 0, 0).is_err());
        assert!(ConnectionRequest::new("", 1920, 1080, 0, 0).is_err());
    }

    #[test]
    fn test_minimum_size() {
        assert!(ConnectionRequest::new("host", 799, 600, 0, 0).is_err());
        assert!(ConnectionRequest::new("host", 800, 599, 0, 0).is_err());
        assert!(ConnectionRequest::new("host", 800, 600, 0, 0).is_ok());
    }

    #[test]
    fn test_edges() {
        let request = ConnectionRequest::new("host", 1920, 1080, -1920, 25).unwrap();
        assert_eq!(request.left(), -1920);
        assert_eq!(request.top(), 25);
        assert_eq!(request.right(), 0);
        assert_eq!(request.bottom(), 1105);
    }
}
