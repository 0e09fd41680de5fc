// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use evdesk_core::{
    CalendarBridge, Error, Event, EventId, EventRepository, NewEvent, Saved,
};

/// Repository operations, for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// A recorded repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(EventId),
    Create(NewEvent),
    Update(Event),
    Delete(EventId),
}

/// Repository keeping events in memory and recording every call.
#[derive(Debug)]
pub struct InMemoryRepository {
    events: Mutex<Vec<Event>>,
    next_id: Mutex<u64>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<Op>>,
}

impl InMemoryRepository {
    pub fn new(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        Self {
            events: Mutex::new(events),
            next_id: Mutex::new(next_id),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    /// Makes every later call of `op` fail with a server error.
    pub fn fail_on(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ids(&self) -> Vec<EventId> {
        self.events.lock().unwrap().iter().map(|e| e.id).collect()
    }

    fn record(&self, call: Call, op: Op) -> Result<(), Error> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(Error::Server("internal error (500 Internal Server Error)".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        self.record(Call::List, Op::List)?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn get_event(&self, id: EventId) -> Result<Event, Error> {
        self.record(Call::Get(id), Op::Get)?;
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("#{id}")))
    }

    async fn create_event(&self, event: NewEvent) -> Result<Saved<Event>, Error> {
        self.record(Call::Create(event.clone()), Op::Create)?;
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            EventId(id)
        };
        let event = Event::with_id(id, event);
        self.events.lock().unwrap().push(event.clone());
        Ok(Saved {
            message: Some("Event created successfully!".to_string()),
            data: event,
        })
    }

    async fn update_event(&self, event: Event) -> Result<Saved<Event>, Error> {
        self.record(Call::Update(event.clone()), Op::Update)?;
        let mut events = self.events.lock().unwrap();
        let slot = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| Error::NotFound(format!("#{}", event.id)))?;
        *slot = event.clone();
        Ok(Saved {
            message: Some("Event updated successfully!".to_string()),
            data: event,
        })
    }

    async fn delete_event(&self, id: EventId) -> Result<Option<String>, Error> {
        self.record(Call::Delete(id), Op::Delete)?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(Error::NotFound(format!("#{id}")));
        }
        Ok(Some("Event deleted successfully!".to_string()))
    }
}

/// Calendar bridge recording the events it was asked to push.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    pushed: Mutex<Vec<EventId>>,
    refuse: bool,
}

impl RecordingBridge {
    /// A bridge whose sign-in is always refused.
    pub fn refusing() -> Self {
        Self {
            pushed: Mutex::new(Vec::new()),
            refuse: true,
        }
    }

    pub fn pushed(&self) -> Vec<EventId> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalendarBridge for RecordingBridge {
    async fn push(&self, event: &Event) -> Result<String, Error> {
        if self.refuse {
            return Err(Error::Auth("access_denied".to_string()));
        }
        self.pushed.lock().unwrap().push(event.id);
        Ok("Event added to Google Calendar".to_string())
    }
}
