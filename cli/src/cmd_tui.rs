// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use evdesk_core::Desk;

use crate::tui;

/// The interactive event list, also run when no subcommand is given.
#[derive(Debug, Clone, Copy)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ui")
            .about("Browse, edit, delete and sync events interactively")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!("starting the event list...");
        tui::run_list(desk).await
    }
}
