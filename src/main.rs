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

mod internal;
mod types;
mod utils;

use crate::internal::app_state::AppState;
use crate::internal::form::FormState;
use crate::types::local_settings::LocalSettings;
use crate::types::{MonitorPreset, ResolutionPreset, WindowPosition};
use crate::utils::logger::init_logging;
use crate::utils::notifier::show_status;
use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: CliAction,
}

#[derive(Debug, Subcommand)]
enum CliAction {
    /// Open a remote desktop session
    #[command(alias = "l")]
    Launch(LaunchArgs),
    /// List monitor and resolution presets
    Presets,
    /// Show or change the saved launcher window position
    Position {
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        set: Option<Vec<i32>>,
    },
}

#[derive(Debug, Args)]
struct LaunchArgs {
    /// Server address, optionally with a port
    server: String,

    #[arg(short, long, value_enum)]
    monitor: Option<MonitorPreset>,

    #[arg(short, long, value_enum)]
    resolution: Option<ResolutionPreset>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<i32>,

    /// RDP client executable, overrides the detected one
    #[arg(long)]
    client: Option<PathBuf>,

    /// Don't show a desktop notification
    #[arg(long)]
    no_notify: bool,
}

impl LaunchArgs {
    fn fill_form(&self, form: &mut FormState) {
        form.server_address = self.server.clone();

        if let Some(monitor) = self.monitor {
            form.apply_monitor_preset(monitor);
        }
        if let Some(resolution) = self.resolution {
            form.apply_resolution_preset(resolution);
        }
        if let Some(width) = self.width {
            form.width = width;
        }
        if let Some(height) = self.height {
            form.height = height;
        }
        if let Some(offset_x) = self.offset_x {
            form.offset_x = offset_x;
        }
        if let Some(offset_y) = self.offset_y {
            form.offset_y = offset_y;
        }
    }
}

fn launch(state: &mut AppState, args: &LaunchArgs) -> Result<bool> {
    let mut form = FormState::from_config(&state.config);
    args.fill_form(&mut form);
    tracing::debug!("Form: {form:?}");

    let launcher = state.launcher(args.client.clone());

    let (status, cleanup) = form.submit(&launcher)?;
    show_status(&status, state.config.notifications && !args.no_notify);

    if let Some(cleanup) = cleanup {
        state.track_cleanup(cleanup);
    }

    Ok(status.is_success())
}

fn print_presets() {
    println!("Monitor presets (x, y, right, bottom):");
    for preset in MonitorPreset::ALL {
        let rect = preset.rect();
        println!(
            "  {:<8} {},{},{},{}  ({}x{})",
            preset.name(),
            rect.offset_x,
            rect.offset_y,
            rect.right,
            rect.bottom,
            rect.width(),
            rect.height()
        );
    }

    println!("Resolution presets:");
    for preset in ResolutionPreset::ALL {
        let (width, height) = preset.size();
        println!("  {width}x{height}");
    }
}

fn position(state: &mut AppState, set: Option<&[i32]>) -> Result<()> {
    match set {
        Some([x, y]) => {
            state.window_position = WindowPosition { x: *x, y: *y };
            println!("Window position will be saved as {x},{y}");
        }
        Some(other) => return Err(anyhow!("Expected X and Y, got {other:?}")),
        None => {
            let WindowPosition { x, y } = state.window_position;
            println!("WindowX={x}");
            println!("WindowY={y}");
        }
    }

    Ok(())
}

fn run(args: Cli) -> Result<bool> {
    let settings = LocalSettings::new()?;
    init_logging(args.verbose, &settings.log_file)?;
    tracing::debug!("Args: {args:?}");

    let mut state = AppState::load(settings)?;

    let result = match &args.action {
        CliAction::Launch(launch_args) => launch(&mut state, launch_args),
        CliAction::Presets => {
            print_presets();
            Ok(true)
        }
        CliAction::Position { set } => position(&mut state, set.as_deref()).map(|_| true),
    };

    if state.pending_cleanups() > 0 {
        tracing::debug!("Waiting for {} connection file cleanup(s)", state.pending_cleanups());
    }
    state.shutdown();

    result
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
