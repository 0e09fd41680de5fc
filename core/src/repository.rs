// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use evdesk_api::{EventsClient, RemoteEvent, Saved};

use crate::{Error, Event, EventId, NewEvent};

/// Remote store of events. Every call is a single request, without retry or caching.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, in the order the server returns them.
    async fn list_events(&self) -> Result<Vec<Event>, Error>;

    /// One event by id.
    async fn get_event(&self, id: EventId) -> Result<Event, Error>;

    /// Saves a new event and returns it with its server-assigned id.
    async fn create_event(&self, event: NewEvent) -> Result<Saved<Event>, Error>;

    /// Replaces every field of the event keyed by `event.id`.
    async fn update_event(&self, event: Event) -> Result<Saved<Event>, Error>;

    /// Deletes an event and returns the server's confirmation message, if any.
    async fn delete_event(&self, id: EventId) -> Result<Option<String>, Error>;
}

#[async_trait]
impl EventRepository for EventsClient {
    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        let remote = EventsClient::list_events(self).await?;
        remote.into_iter().map(Event::try_from).collect()
    }

    async fn get_event(&self, id: EventId) -> Result<Event, Error> {
        let remote = EventsClient::get_event(self, id.0)
            .await
            .map_err(|e| not_found_as(e, id))?;
        Event::try_from(remote)
    }

    async fn create_event(&self, event: NewEvent) -> Result<Saved<Event>, Error> {
        let saved = EventsClient::create_event(self, &RemoteEvent::from(&event)).await?;
        into_saved(saved)
    }

    async fn update_event(&self, event: Event) -> Result<Saved<Event>, Error> {
        let id = event.id;
        let saved = EventsClient::update_event(self, &RemoteEvent::from(&event))
            .await
            .map_err(|e| not_found_as(e, id))?;
        into_saved(saved)
    }

    async fn delete_event(&self, id: EventId) -> Result<Option<String>, Error> {
        let confirmation = EventsClient::delete_event(self, id.0)
            .await
            .map_err(|e| not_found_as(e, id))?;
        Ok(confirmation.message)
    }
}

fn not_found_as(e: evdesk_api::ApiError, id: EventId) -> Error {
    match e {
        evdesk_api::ApiError::NotFound(_) => Error::NotFound(format!("#{id}")),
        e => e.into(),
    }
}

fn into_saved(saved: Saved<RemoteEvent>) -> Result<Saved<Event>, Error> {
    let event = Event::try_from(saved.data)?;
    Ok(Saved {
        message: saved.message,
        data: event,
    })
}
