// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use evdesk_core::Event;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyle};
use crate::util::{OutputFormat, format_date};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: EventColumn::ALL.to_vec(),
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.formatter.format {
            OutputFormat::Json => TableStyle::Json,
            OutputFormat::Table => TableStyle::Basic,
        };
        write!(f, "{}", Table::new(style, &self.formatter.columns, self.events))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Name,
    Description,
    Date,
    Start,
    End,
}

impl EventColumn {
    pub const ALL: [EventColumn; 6] = [
        EventColumn::Id,
        EventColumn::Name,
        EventColumn::Description,
        EventColumn::Date,
        EventColumn::Start,
        EventColumn::End,
    ];
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::Name => "Name",
            EventColumn::Description => "Description",
            EventColumn::Date => "Date",
            EventColumn::Start => "Start",
            EventColumn::End => "End",
        }
        .into()
    }

    fn key(&self) -> &'static str {
        match self {
            EventColumn::Id => "id",
            EventColumn::Name => "name",
            EventColumn::Description => "description",
            EventColumn::Date => "date",
            EventColumn::Start => "initHour",
            EventColumn::End => "endHour",
        }
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => event.id.to_string().into(),
            EventColumn::Name => event.name.as_str().into(),
            EventColumn::Description => event.description.as_str().into(),
            EventColumn::Date => format_date(event.date).into(),
            EventColumn::Start => event.init_hour.as_str().into(),
            EventColumn::End => event.end_hour.as_str().into(),
        }
    }

    fn json(&self, event: &Event) -> serde_json::Value {
        match self {
            EventColumn::Id => event.id.0.into(),
            EventColumn::Date => event.date.to_string().into(),
            _ => self.format(event).into_owned().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
