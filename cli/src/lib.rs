// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command line and terminal interface of evdesk.

mod arg;
mod cli;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_tui;
mod config;
mod event_formatter;
mod table;
#[cfg(test)]
mod testing;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
