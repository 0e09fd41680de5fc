// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evdesk_core::{APP_NAME, Desk};
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventCalendar, CmdEventDelete, CmdEventEdit, CmdEventList, CmdEventNew};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Run the evdesk command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Manage the events of a remote events API, and push them to Google Calendar.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to the event list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evdesk/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/evdesk/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdTui::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventNew::command())
            .subcommand(CmdEventEdit::command())
            .subcommand(CmdEventDelete::command())
            .subcommand(CmdEventCalendar::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
            Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
            Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)?),
            Some((CmdEventDelete::NAME, matches)) => EventDelete(CmdEventDelete::from(matches)?),
            Some((CmdEventCalendar::NAME, matches)) => {
                EventCalendar(CmdEventCalendar::from(matches)?)
            }
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            None => Tui(CmdTui),
            Some((name, _)) => return Err(format!("unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Browse events interactively
    Tui(CmdTui),

    /// List events
    EventList(CmdEventList),

    /// Create an event
    EventNew(CmdEventNew),

    /// Edit an event
    EventEdit(CmdEventEdit),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// Push an event to Google Calendar
    EventCalendar(CmdEventCalendar),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Tui(a)           => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventList(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventNew(a)      => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventEdit(a)     => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventDelete(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            EventCalendar(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Desk) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let desk = Desk::new(config)?;
        f(&desk).await
    }
}
