// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use evdesk_api::RemoteEvent;
use jiff::civil::Date;
use regex::Regex;

use crate::Error;

/// Identifier assigned to an event by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

static HOUR_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").ok());

/// A 24-hour wall-clock time written as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourMinute(String);

impl HourMinute {
    /// Returns `true` if `s` is exactly `HH:MM` with hour `00`..`23` and minute `00`..`59`.
    pub fn is_valid(s: &str) -> bool {
        HOUR_RE.as_ref().is_some_and(|re| re.is_match(s))
    }

    /// The `HH:MM` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hour and minute as numbers.
    pub fn parts(&self) -> (i8, i8) {
        let (h, m) = self.0.split_at(2);
        let hour = h.parse().unwrap_or_default();
        let minute = m.trim_start_matches(':').parse().unwrap_or_default();
        (hour, minute)
    }
}

impl FromStr for HourMinute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid time: {s}"))
        }
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw form input, possibly incomplete. Every field is kept as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Date as typed, `DD/MM/YYYY` or `YYYY-MM-DD`.
    pub date: String,
    /// Start time as typed.
    pub init_hour: String,
    /// End time as typed.
    pub end_hour: String,
}

impl EventDraft {
    /// Fills a draft with the values of a persisted event, for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            date: event.date.strftime("%d/%m/%Y").to_string(),
            init_hour: event.init_hour.to_string(),
            end_hour: event.end_hour.to_string(),
        }
    }
}

/// A validated event that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Event name, non-empty.
    pub name: String,
    /// Event description, non-empty.
    pub description: String,
    /// Calendar date.
    pub date: Date,
    /// Start time.
    pub init_hour: HourMinute,
    /// End time.
    pub end_hour: HourMinute,
}

/// A persisted event: it has an id and every field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Event name, non-empty.
    pub name: String,
    /// Event description, non-empty.
    pub description: String,
    /// Calendar date.
    pub date: Date,
    /// Start time.
    pub init_hour: HourMinute,
    /// End time.
    pub end_hour: HourMinute,
}

impl Event {
    /// Attaches a server-assigned id to a validated event.
    pub fn with_id(id: EventId, event: NewEvent) -> Self {
        Self {
            id,
            name: event.name,
            description: event.description,
            date: event.date,
            init_hour: event.init_hour,
            end_hour: event.end_hour,
        }
    }
}

/// What a form is opened on: a fresh draft to create, or a saved event to edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRecord {
    /// Not saved yet; submitting creates it.
    Draft(EventDraft),
    /// Already saved; submitting replaces it.
    Persisted(Event),
}

impl From<&NewEvent> for RemoteEvent {
    fn from(event: &NewEvent) -> Self {
        RemoteEvent {
            id: None,
            name: event.name.clone(),
            description: event.description.clone(),
            date: event.date,
            init_hour: event.init_hour.to_string(),
            end_hour: event.end_hour.to_string(),
        }
    }
}

impl From<&Event> for RemoteEvent {
    fn from(event: &Event) -> Self {
        RemoteEvent {
            id: Some(event.id.0),
            name: event.name.clone(),
            description: event.description.clone(),
            date: event.date,
            init_hour: event.init_hour.to_string(),
            end_hour: event.end_hour.to_string(),
        }
    }
}

impl TryFrom<RemoteEvent> for Event {
    type Error = Error;

    fn try_from(remote: RemoteEvent) -> Result<Self, Self::Error> {
        let id = remote
            .id
            .ok_or_else(|| Error::Server("event record without id".to_string()))?;
        let hour = |s: String| {
            s.parse::<HourMinute>()
                .map_err(|e| Error::Server(format!("event {id}: {e}")))
        };
        Ok(Event {
            id: EventId(id),
            name: remote.name,
            description: remote.description,
            date: remote.date,
            init_hour: hour(remote.init_hour)?,
            end_hour: hour(remote.end_hour)?,
        })
    }
}
