// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{ActionStatus, CalendarBridge, Event, EventRepository};

/// What the open confirmation dialog will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// Delete the event on the server.
    Delete,
    /// Push the event to the external calendar.
    CalendarSync,
}

/// The event selected for a confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    /// The action awaiting confirmation.
    pub kind: PendingKind,
    /// The event it applies to.
    pub event: Event,
}

impl PendingAction {
    /// Question shown in the dialog.
    pub fn prompt(&self) -> String {
        match self.kind {
            PendingKind::Delete => format!("Delete event \"{}\"?", self.event.name),
            PendingKind::CalendarSync => {
                format!("Add event \"{}\" to Google Calendar?", self.event.name)
            }
        }
    }
}

/// State of the event list screen.
///
/// At most one dialog is open at a time; a new request replaces the pending selection.
#[derive(Debug, Clone, Default)]
pub struct ListScreen {
    events: Vec<Event>,
    pending: Option<PendingAction>,
    status: ActionStatus,
}

impl ListScreen {
    /// An empty screen, before the first load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events from the last successful fetch.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The open dialog, if any.
    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Outcome of the last action.
    pub fn status(&self) -> &ActionStatus {
        &self.status
    }

    /// Replaces the banner, e.g. with the outcome of a form opened from this screen.
    pub fn set_status(&mut self, status: ActionStatus) {
        self.status = status;
    }

    /// Shows the loading indicator before a handler is awaited.
    pub fn mark_loading(&mut self) {
        self.status = ActionStatus::Loading;
    }

    /// Fetches the full list. On failure the previous list is kept.
    pub async fn load<R>(mut self, repo: &R) -> Self
    where
        R: EventRepository + ?Sized,
    {
        self.status = ActionStatus::Loading;
        match repo.list_events().await {
            Ok(events) => {
                tracing::debug!(count = events.len(), "events loaded");
                self.events = events;
                self.status = ActionStatus::Idle;
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to load events");
                self.status = ActionStatus::Failed(e.to_string());
            }
        }
        self
    }

    /// Opens the delete dialog for `event`.
    pub fn request_delete(&mut self, event: Event) {
        self.pending = Some(PendingAction {
            kind: PendingKind::Delete,
            event,
        });
    }

    /// Opens the calendar dialog for `event`.
    pub fn request_calendar_sync(&mut self, event: Event) {
        self.pending = Some(PendingAction {
            kind: PendingKind::CalendarSync,
            event,
        });
    }

    /// Closes the dialog without issuing any call.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Runs the pending action. The dialog is closed whatever the outcome.
    pub async fn confirm<R, B>(mut self, repo: &R, bridge: &B) -> Self
    where
        R: EventRepository + ?Sized,
        B: CalendarBridge + ?Sized,
    {
        let Some(pending) = self.pending.take() else {
            return self;
        };

        self.status = ActionStatus::Loading;
        self.status = match pending.kind {
            PendingKind::Delete => self.delete(repo, &pending.event).await,
            PendingKind::CalendarSync => match bridge.push(&pending.event).await {
                Ok(message) => ActionStatus::Success(message),
                Err(e) => {
                    tracing::debug!(id = %pending.event.id, error = %e, "calendar push failed");
                    ActionStatus::Failed(e.to_string())
                }
            },
        };
        self
    }

    async fn delete<R>(&mut self, repo: &R, event: &Event) -> ActionStatus
    where
        R: EventRepository + ?Sized,
    {
        let message = match repo.delete_event(event.id).await {
            Ok(message) => message.unwrap_or_else(|| "Event deleted".to_string()),
            Err(e) => {
                tracing::debug!(id = %event.id, error = %e, "delete failed");
                return ActionStatus::Failed(e.to_string());
            }
        };

        match repo.list_events().await {
            Ok(events) => {
                self.events = events;
                ActionStatus::Success(message)
            }
            Err(e) => {
                tracing::debug!(error = %e, "reload after delete failed");
                ActionStatus::Failed(e.to_string())
            }
        }
    }
}
