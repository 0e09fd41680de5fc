// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::sync::Arc;

use clap::{ArgMatches, Command};
use colored::Colorize;
use evdesk_core::{
    ActionStatus, Desk, Event, EventDraft, EventForm, EventId, Saved, SignInNotice,
};

use crate::arg::{CommonArgs, EventArgs, EventFields};
use crate::event_formatter::EventFormatter;
use crate::tui;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: EventFields,
    pub output_format: OutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an event, in a form unless any field is given")
            .args(EventArgs::all())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventArgs::get_fields(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        if self.fields.is_empty() {
            let form = tui::run_form(desk, EventForm::create()).await?;
            print_status(form.status());
            return Ok(());
        }

        let mut draft = EventDraft::default();
        self.fields.apply_to(&mut draft);
        let saved = desk.create(&draft).await?;
        print_saved(saved, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub fields: EventFields,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event, in a form unless any field is given")
            .arg(EventArgs::id("edit"))
            .args(EventArgs::all())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches).ok_or("event id is required")?,
            fields: EventArgs::get_fields(matches),
            output_format: CommonArgs::get_output_format(matches),
        })
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        if self.fields.is_empty() {
            let form = EventForm::load(desk.repository(), self.id).await?;
            let form = tui::run_form(desk, form).await?;
            print_status(form.status());
            return Ok(());
        }

        let event = desk.get(self.id).await?;
        let mut draft = EventDraft::from_event(&event);
        self.fields.apply_to(&mut draft);
        let saved = desk.update(self.id, &draft).await?;
        print_saved(saved, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events = desk.list().await?;
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
            return Ok(());
        }

        print_events(&events, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDelete {
    pub id: EventId,
    pub yes: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(EventArgs::id("delete"))
            .arg(CommonArgs::yes())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches).ok_or("event id is required")?,
            yes: CommonArgs::get_yes(matches),
        })
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        if !self.yes {
            return Err(format!(
                "Deleting event #{} cannot be undone, pass --yes to confirm",
                self.id
            )
            .into());
        }

        let message = desk.delete(self.id).await?;
        let message = message.unwrap_or_else(|| "Event deleted".to_string());
        println!("{}", message.green());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventCalendar {
    pub id: EventId,
}

impl CmdEventCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("gcal")
            .about("Add an event to Google Calendar, signing in through the browser")
            .arg(EventArgs::id("add to the calendar"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches).ok_or("event id is required")?,
        })
    }

    pub async fn run(self, desk: &Desk) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "pushing event to Google Calendar...");
        let notice: SignInNotice = Arc::new(|url: &str| {
            println!("Sign in to Google Calendar in your browser: {}", url.underline());
        });
        let message = desk.push_to_calendar(self.id, notice).await?;
        println!("{}", message.green());
        Ok(())
    }
}

fn print_events(events: &[Event], output_format: OutputFormat) {
    let formatter = EventFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(events));
}

fn print_saved(saved: Saved<Event>, output_format: OutputFormat) {
    if output_format == OutputFormat::Table {
        let message = saved.message.as_deref().unwrap_or("Event saved");
        println!("{}", format!("{message} Id: {}", saved.data.id).green());
    }
    print_events(&[saved.data], output_format);
}

/// Prints the outcome a form was left with.
fn print_status(status: &ActionStatus) {
    match status {
        ActionStatus::Success(message) => println!("{}", message.green()),
        ActionStatus::Failed(message) => println!("{} {}", "Error:".red(), message),
        ActionStatus::Idle | ActionStatus::Loading => tracing::info!("form closed without saving"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn parse(sub: Command, args: &[&str]) -> ArgMatches {
        let name = sub.get_name().to_string();
        let cmd = Command::new("test").subcommand_required(true).subcommand(sub);
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        let matches = cmd.try_get_matches_from(argv).unwrap();
        matches.subcommand_matches(&name).unwrap().clone()
    }

    #[test]
    fn test_parse_event_new() {
        let matches = parse(
            CmdEventNew::command(),
            &[
                "new",
                "--name",
                "Standup",
                "-d",
                "Daily sync",
                "--date",
                "19/10/2026",
                "--start",
                "09:00",
                "--end",
                "09:15",
                "--output-format",
                "json",
            ],
        );
        let parsed = CmdEventNew::from(&matches);

        assert_eq!(parsed.fields.name.as_deref(), Some("Standup"));
        assert_eq!(parsed.fields.description.as_deref(), Some("Daily sync"));
        assert_eq!(parsed.fields.date.as_deref(), Some("19/10/2026"));
        assert_eq!(parsed.fields.start.as_deref(), Some("09:00"));
        assert_eq!(parsed.fields.end.as_deref(), Some("09:15"));
        assert!(!parsed.fields.is_empty());
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_new_tui() {
        let matches = parse(CmdEventNew::command(), &["add"]);
        let parsed = CmdEventNew::from(&matches);
        assert!(parsed.fields.is_empty());
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_edit() {
        let matches = parse(CmdEventEdit::command(), &["edit", "12", "--end", "12:00"]);
        let parsed = CmdEventEdit::from(&matches).unwrap();
        assert_eq!(parsed.id, EventId(12));
        assert_eq!(parsed.fields.end.as_deref(), Some("12:00"));
        assert_eq!(parsed.fields.name, None);
    }

    #[test]
    fn test_parse_edit_rejects_non_numeric_id() {
        let cmd = Command::new("test").subcommand(CmdEventEdit::command());
        assert!(cmd.try_get_matches_from(["test", "edit", "abc"]).is_err());
    }

    #[test]
    fn test_parse_list() {
        let matches = parse(CmdEventList::command(), &["list", "--output-format", "json"]);
        let parsed = CmdEventList::from(&matches);
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_delete() {
        let matches = parse(CmdEventDelete::command(), &["delete", "5"]);
        let parsed = CmdEventDelete::from(&matches).unwrap();
        assert_eq!(parsed.id, EventId(5));
        assert!(!parsed.yes);

        let matches = parse(CmdEventDelete::command(), &["rm", "5", "-y"]);
        assert!(CmdEventDelete::from(&matches).unwrap().yes);
    }

    #[test]
    fn test_parse_calendar() {
        let matches = parse(CmdEventCalendar::command(), &["calendar", "8"]);
        let parsed = CmdEventCalendar::from(&matches).unwrap();
        assert_eq!(parsed.id, EventId(8));
    }

    #[tokio::test]
    async fn delete_refuses_without_confirmation() {
        // no request is sent, the address is never contacted
        let desk = Desk::new(evdesk_core::Config::new("http://127.0.0.1:9")).unwrap();
        let cmd = CmdEventDelete {
            id: EventId(5),
            yes: false,
        };
        let err = cmd.run(&desk).await.unwrap_err();
        assert!(err.to_string().contains("--yes"));
    }
}
