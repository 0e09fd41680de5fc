// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use evdesk_core::{EventDraft, EventId};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn yes() -> Arg {
        arg!(-y --yes "Confirm without asking")
    }

    pub fn get_yes(matches: &ArgMatches) -> bool {
        matches.get_flag("yes")
    }
}

/// Arguments describing an event's fields.
#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id(action: &str) -> Arg {
        arg!(id: <ID>)
            .help(format!("The id of the event to {action}"))
            .value_parser(value_parser!(u64))
    }

    pub fn get_id(matches: &ArgMatches) -> Option<EventId> {
        matches.get_one::<u64>("id").copied().map(EventId)
    }

    pub fn name() -> Arg {
        arg!(-n --name <NAME> "Name of the event")
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description of the event")
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Date of the event, DD/MM/YYYY or YYYY-MM-DD")
    }

    pub fn start() -> Arg {
        arg!(--start <HH_MM> "Start time of the event, 24-hour HH:MM")
    }

    pub fn end() -> Arg {
        arg!(--end <HH_MM> "End time of the event, 24-hour HH:MM")
    }

    pub fn all() -> [Arg; 5] {
        [
            Self::name(),
            Self::description(),
            Self::date(),
            Self::start(),
            Self::end(),
        ]
    }

    /// Field values given on the command line; absent flags stay `None`.
    pub fn get_fields(matches: &ArgMatches) -> EventFields {
        let get = |id: &str| matches.get_one::<String>(id).cloned();
        EventFields {
            name: get("name"),
            description: get("description"),
            date: get("date"),
            start: get("start"),
            end: get("end"),
        }
    }
}

/// Event fields given as flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl EventFields {
    /// Returns `true` when no flag was given, which opens the form instead.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Writes the given flags over `draft`, leaving the other fields as they are.
    pub fn apply_to(self, draft: &mut EventDraft) {
        let pairs = [
            (self.name, &mut draft.name),
            (self.description, &mut draft.description),
            (self.date, &mut draft.date),
            (self.start, &mut draft.init_hour),
            (self.end, &mut draft.end_hour),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}
