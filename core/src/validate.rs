// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt;

use jiff::civil::Date;

use crate::{Event, EventDraft, EventId, HourMinute, NewEvent};

/// A field of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Event name.
    Name,
    /// Event description.
    Description,
    /// Event date.
    Date,
    /// Start time.
    InitHour,
    /// End time.
    EndHour,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::Date,
        Field::InitHour,
        Field::EndHour,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Date => "Date",
            Field::InitHour => "Start",
            Field::EndHour => "End",
        }
    }

    /// Reads this field from a draft.
    pub fn get(self, draft: &EventDraft) -> &str {
        match self {
            Field::Name => &draft.name,
            Field::Description => &draft.description,
            Field::Date => &draft.date,
            Field::InitHour => &draft.init_hour,
            Field::EndHour => &draft.end_hour,
        }
    }

    /// Mutable access to this field of a draft.
    pub fn get_mut(self, draft: &mut EventDraft) -> &mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Description => &mut draft.description,
            Field::Date => &mut draft.date,
            Field::InitHour => &mut draft.init_hour,
            Field::EndHour => &mut draft.end_hour,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One message per offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// The message attached to `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Attaches a message to `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears the message of `field`.
    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns `true` when no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with a message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates messages in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Parses a date typed as `DD/MM/YYYY` or `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<Date> {
    let s = s.trim();
    Date::strptime("%d/%m/%Y", s)
        .or_else(|_| Date::strptime("%Y-%m-%d", s))
        .ok()
}

/// Validates a draft for creation. The date may be today but not earlier.
pub fn validate_new(draft: &EventDraft, today: Date) -> Result<NewEvent, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = required(&draft.name, Field::Name, "Event name is required", &mut errors);
    let description = required(
        &draft.description,
        Field::Description,
        "Event description is required",
        &mut errors,
    );
    let date = match date(&draft.date, &mut errors) {
        Some(d) if d < today => {
            errors.insert(Field::Date, "Date cannot be earlier than today");
            None
        }
        d => d,
    };
    let init_hour = hour(&draft.init_hour, Field::InitHour, "Start time is required", &mut errors);
    let end_hour = hour(&draft.end_hour, Field::EndHour, "End time is required", &mut errors);

    match (name, description, date, init_hour, end_hour) {
        (Some(name), Some(description), Some(date), Some(init_hour), Some(end_hour))
            if errors.is_empty() =>
        {
            Ok(NewEvent {
                name,
                description,
                date,
                init_hour,
                end_hour,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a draft for replacing the saved event `id`. Past dates are kept as they are.
pub fn validate_existing(id: EventId, draft: &EventDraft) -> Result<Event, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = required(&draft.name, Field::Name, "Event name is required", &mut errors);
    let description = required(
        &draft.description,
        Field::Description,
        "Event description is required",
        &mut errors,
    );
    let date = date(&draft.date, &mut errors);
    let init_hour = hour(&draft.init_hour, Field::InitHour, "Start time is required", &mut errors);
    let end_hour = hour(&draft.end_hour, Field::EndHour, "End time is required", &mut errors);

    match (name, description, date, init_hour, end_hour) {
        (Some(name), Some(description), Some(date), Some(init_hour), Some(end_hour)) => Ok(Event {
            id,
            name,
            description,
            date,
            init_hour,
            end_hour,
        }),
        _ => Err(errors),
    }
}

fn required(value: &str, field: Field, message: &str, errors: &mut FieldErrors) -> Option<String> {
    if value.trim().is_empty() {
        errors.insert(field, message);
        None
    } else {
        Some(value.to_string())
    }
}

fn date(value: &str, errors: &mut FieldErrors) -> Option<Date> {
    if value.trim().is_empty() {
        errors.insert(Field::Date, "Event date is required");
        return None;
    }
    let parsed = parse_date(value);
    if parsed.is_none() {
        errors.insert(Field::Date, "Invalid date.");
    }
    parsed
}

fn hour(value: &str, field: Field, message: &str, errors: &mut FieldErrors) -> Option<HourMinute> {
    if value.trim().is_empty() {
        errors.insert(field, message);
        return None;
    }
    match value.parse() {
        Ok(hm) => Some(hm),
        Err(_) => {
            errors.insert(field, "Invalid time.");
            None
        }
    }
}
