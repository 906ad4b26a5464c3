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

use crate::types::connection_request::ConnectionRequest;
use std::fmt::Write;

const LINE_END: &str = "\r\n";

/// Settings passed through to the client untouched. Order matters for byte-identical output.
const FIXED_SESSION_FIELDS: &[&str] = &[
    "session bpp:i:32",
    "compression:i:1",
    "keyboardhook:i:2",
    "audiocapturemode:i:0",
    "videoplaybackmode:i:1",
    "connection type:i:7",
    "networkautodetect:i:1",
    "bandwidthautodetect:i:1",
    "displayconnectionbar:i:1",
    "enableworkspacereconnect:i:0",
    "remoteappmousemoveinject:i:1",
    "disable wallpaper:i:0",
    "allow font smoothing:i:0",
    "allow desktop composition:i:0",
    "disable full window drag:i:1",
    "disable menu anims:i:1",
    "disable themes:i:0",
    "disable cursor setting:i:0",
    "bitmapcachepersistenable:i:1",
    "audiomode:i:0",
    "redirectprinters:i:1",
    "redirectlocation:i:0",
    "redirectcomports:i:0",
    "redirectsmartcards:i:1",
    "redirectwebauthn:i:1",
    "redirectclipboard:i:1",
    "redirectposdevices:i:0",
    "autoreconnection enabled:i:1",
    "authentication level:i:2",
    "prompt for credentials:i:0",
    "negotiate security layer:i:1",
    "remoteapplicationmode:i:0",
    "alternate shell:s:",
    "shell working directory:s:",
    "gatewayhostname:s:",
    "gatewayusagemethod:i:4",
    "gatewaycredentialssource:i:4",
    "gatewayprofileusagemethod:i:0",
    "promptcredentialonce:i:0",
    "gatewaybrokeringtype:i:0",
    "use redirection server name:i:0",
    "rdgiskdcproxy:i:0",
    "kdcproxyname:s:",
    "enablerdsaadauth:i:0",
    "drivestoredirect:s:C:\\;",
];

/// `winposstr` value: flags, show command (1 = normal window), then the four edges.
pub fn placement_field(request: &ConnectionRequest) -> String {
    format!(
        "0,1,{},{},{},{}",
        request.left(),
        request.top(),
        request.right(),
        request.bottom()
    )
}

/// Renders the `.rdp` document for `request`.
pub fn render(request: &ConnectionRequest) -> String {
    let mut lines = vec![
        format!("full address:s:{}", request.server_address()),
        "screen mode id:i:1".to_string(),
        "use multimon:i:0".to_string(),
        format!("desktopwidth:i:{}", request.width()),
        format!("desktopheight:i:{}", request.height()),
        "smart sizing:i:1".to_string(),
        format!("winposstr:s:{}", placement_field(request)),
    ];
    lines.extend(FIXED_SESSION_FIELDS.iter().map(|l| l.to_string()));

    let mut document = String::new();
    for line in lines {
        // Writing into a String cannot fail
        let _ = write!(document, "{line}{LINE_END}");
    }
    document
}
