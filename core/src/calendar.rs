// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use evdesk_gcal::{CalendarClient, CalendarEvent, EventDateTime, GoogleConfig};

use crate::{Error, Event, HourMinute};

/// Recurrence attached to every pushed event.
pub const RECURRENCE_RULE: &str = "RRULE:FREQ=DAILY;COUNT=2";

/// Receives the sign-in page URL so the caller can show it while the sign-in waits.
pub type SignInNotice = Arc<dyn Fn(&str) + Send + Sync>;

/// Pushes one event into an external calendar. Keeps no state between calls.
#[async_trait]
pub trait CalendarBridge: Send + Sync {
    /// Authenticates, then inserts `event`. Returns a message for the user.
    async fn push(&self, event: &Event) -> Result<String, Error>;
}

/// Builds the calendar resource for `event`, with its hours read as wall-clock
/// times in `time_zone`.
pub fn calendar_entry(event: &Event, time_zone: &str) -> CalendarEvent {
    let at = |hm: &HourMinute| {
        let (hour, minute) = hm.parts();
        EventDateTime {
            date_time: event
                .date
                .at(hour, minute, 0, 0)
                .strftime("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            time_zone: time_zone.to_string(),
        }
    };

    CalendarEvent {
        summary: event.name.clone(),
        description: event.description.clone(),
        start: at(&event.init_hour),
        end: at(&event.end_hour),
        recurrence: vec![RECURRENCE_RULE.to_string()],
    }
}

/// [`CalendarBridge`] backed by Google Calendar with an interactive browser sign-in.
#[derive(Clone)]
pub struct GoogleCalendarBridge {
    client: CalendarClient,
    notice: Option<SignInNotice>,
}

impl GoogleCalendarBridge {
    /// Creates a bridge from the `[google]` settings.
    pub fn new(config: GoogleConfig) -> Result<Self, Error> {
        let client = CalendarClient::new(config)?;
        Ok(Self {
            client,
            notice: None,
        })
    }

    /// Reports the sign-in page URL to `notice` on every push.
    pub fn with_sign_in_notice(mut self, notice: SignInNotice) -> Self {
        self.notice = Some(notice);
        self
    }
}

impl fmt::Debug for GoogleCalendarBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleCalendarBridge")
            .field("client", &self.client)
            .field("notice", &self.notice.is_some())
            .finish()
    }
}

#[async_trait]
impl CalendarBridge for GoogleCalendarBridge {
    async fn push(&self, event: &Event) -> Result<String, Error> {
        let token = self
            .client
            .sign_in(|url| {
                if let Some(notice) = &self.notice {
                    notice(url.as_str());
                }
            })
            .await?;
        let entry = calendar_entry(event, &self.client.config().time_zone);
        let inserted = self.client.insert_event(&token, &entry).await?;
        tracing::info!(id = %event.id, calendar_id = %inserted.id, "event pushed to Google Calendar");

        Ok(match inserted.html_link {
            Some(link) => format!("Event added to Google Calendar: {link}"),
            None => "Event added to Google Calendar".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::EventId;

    #[test]
    fn calendar_entry_uses_wall_clock_times_and_recurrence() {
        let event = Event {
            id: EventId(5),
            name: "Standup".to_string(),
            description: "Daily sync".to_string(),
            date: date(2026, 10, 19),
            init_hour: "09:00".parse().unwrap(),
            end_hour: "09:15".parse().unwrap(),
        };

        let entry = calendar_entry(&event, "America/Fortaleza");
        assert_eq!(entry.summary, "Standup");
        assert_eq!(entry.description, "Daily sync");
        assert_eq!(entry.start.date_time, "2026-10-19T09:00:00");
        assert_eq!(entry.end.date_time, "2026-10-19T09:15:00");
        assert_eq!(entry.start.time_zone, "America/Fortaleza");
        assert_eq!(entry.recurrence, vec!["RRULE:FREQ=DAILY;COUNT=2"]);
    }

    #[test]
    fn bridge_requires_credentials() {
        let config = GoogleConfig::new("", "client");
        assert!(matches!(
            GoogleCalendarBridge::new(config),
            Err(Error::Config(_))
        ));
    }
}
