// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use async_trait::async_trait;
use evdesk_api::{EventsClient, Saved};
use jiff::Zoned;
use jiff::civil::Date;

use crate::{
    CalendarBridge, Config, Error, Event, EventDraft, EventId, EventRepository,
    GoogleCalendarBridge, SignInNotice, validate_existing, validate_new,
};

/// evdesk application core: the events API client plus calendar settings.
#[derive(Debug, Clone)]
pub struct Desk {
    config: Config,
    events: EventsClient,
}

impl Desk {
    /// Creates a new instance with the given configuration.
    pub fn new(config: Config) -> Result<Self, Error> {
        let events = EventsClient::new(config.api.clone())?;
        Ok(Self { config, events })
    }

    /// The configuration this instance runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Today's date in the local time zone. Creation rejects earlier dates.
    pub fn today(&self) -> Date {
        Zoned::now().date()
    }

    /// The remote events repository.
    pub fn repository(&self) -> &EventsClient {
        &self.events
    }

    /// Lists all events.
    pub async fn list(&self) -> Result<Vec<Event>, Error> {
        EventRepository::list_events(&self.events).await
    }

    /// Fetches one event.
    pub async fn get(&self, id: EventId) -> Result<Event, Error> {
        EventRepository::get_event(&self.events, id).await
    }

    /// Validates `draft` and creates the event.
    pub async fn create(&self, draft: &EventDraft) -> Result<Saved<Event>, Error> {
        let event = validate_new(draft, self.today())?;
        EventRepository::create_event(&self.events, event).await
    }

    /// Validates `draft` and replaces event `id` with it.
    pub async fn update(&self, id: EventId, draft: &EventDraft) -> Result<Saved<Event>, Error> {
        let event = validate_existing(id, draft)?;
        EventRepository::update_event(&self.events, event).await
    }

    /// Deletes event `id`, returning the server's message.
    pub async fn delete(&self, id: EventId) -> Result<Option<String>, Error> {
        EventRepository::delete_event(&self.events, id).await
    }

    /// The Google Calendar bridge, reporting the sign-in page URL to `notice`.
    pub fn calendar(&self, notice: SignInNotice) -> DeskCalendar<'_> {
        DeskCalendar { desk: self, notice }
    }

    /// Fetches event `id` and pushes it to Google Calendar.
    pub async fn push_to_calendar(&self, id: EventId, notice: SignInNotice) -> Result<String, Error> {
        let event = self.get(id).await?;
        self.calendar(notice).push(&event).await
    }

    fn google_bridge(&self) -> Result<GoogleCalendarBridge, Error> {
        GoogleCalendarBridge::new(self.config.google()?.clone())
    }
}

#[async_trait]
impl CalendarBridge for Desk {
    async fn push(&self, event: &Event) -> Result<String, Error> {
        self.google_bridge()?.push(event).await
    }
}

/// [`CalendarBridge`] over a [`Desk`]'s Google settings that shows the sign-in URL.
#[derive(Clone)]
pub struct DeskCalendar<'a> {
    desk: &'a Desk,
    notice: SignInNotice,
}

impl fmt::Debug for DeskCalendar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeskCalendar")
            .field("desk", self.desk)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CalendarBridge for DeskCalendar<'_> {
    async fn push(&self, event: &Event) -> Result<String, Error> {
        let bridge = self.desk.google_bridge()?.with_sign_in_notice(self.notice.clone());
        bridge.push(event).await
    }
}
