// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// An event resource as accepted by `events.insert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Title.
    pub summary: String,
    /// Description.
    pub description: String,
    /// Start time.
    pub start: EventDateTime,
    /// End time.
    pub end: EventDateTime,
    /// RFC 5545 recurrence lines, e.g. `RRULE:FREQ=DAILY;COUNT=2`.
    pub recurrence: Vec<String>,
}

/// A wall-clock date-time paired with the IANA zone it is expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    /// `YYYY-MM-DDTHH:MM:SS` without offset.
    pub date_time: String,
    /// IANA time zone name.
    pub time_zone: String,
}

/// The subset of the inserted event resource we report back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertedEvent {
    /// Calendar-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Link to the event in the Calendar web UI.
    #[serde(default)]
    pub html_link: Option<String>,
}

/// A bearer token obtained from the OAuth token endpoint.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    /// The token value.
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
