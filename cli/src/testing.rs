// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for unit tests.

use evdesk_core::{Error, Event, EventId, EventRepository, HourMinute, NewEvent, Saved};
use jiff::civil::date;

/// An event on 20/10/2026 from 10:00 to 11:30.
pub fn event(id: u64, name: &str) -> Event {
    Event::with_id(
        EventId(id),
        NewEvent {
            name: name.to_string(),
            description: "Weekly sync".to_string(),
            date: date(2026, 10, 20),
            init_hour: "10:00".parse::<HourMinute>().unwrap(),
            end_hour: "11:30".parse::<HourMinute>().unwrap(),
        },
    )
}

/// A read-only repository serving a fixed list.
pub struct FixedRepository(pub Vec<Event>);

#[async_trait::async_trait]
impl EventRepository for FixedRepository {
    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        Ok(self.0.clone())
    }

    async fn get_event(&self, id: EventId) -> Result<Event, Error> {
        self.0
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("#{id}")))
    }

    async fn create_event(&self, _: NewEvent) -> Result<Saved<Event>, Error> {
        Err(Error::Validation("read-only".to_string()))
    }

    async fn update_event(&self, _: Event) -> Result<Saved<Event>, Error> {
        Err(Error::Validation("read-only".to_string()))
    }

    async fn delete_event(&self, _: EventId) -> Result<Option<String>, Error> {
        Err(Error::Validation("read-only".to_string()))
    }
}
