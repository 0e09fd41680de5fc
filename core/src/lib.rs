// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of evdesk: the event model, form validation, and the list and form screens
//! driven against a remote events API and Google Calendar.

mod calendar;
mod config;
mod desk;
mod error;
mod event;
mod repository;
mod screen;
mod status;
mod validate;

pub use crate::calendar::{
    CalendarBridge, GoogleCalendarBridge, RECURRENCE_RULE, SignInNotice, calendar_entry,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::desk::{Desk, DeskCalendar};
pub use crate::error::Error;
pub use crate::event::{Event, EventDraft, EventId, EventRecord, HourMinute, NewEvent};
pub use crate::repository::EventRepository;
pub use crate::screen::{
    EventForm, FormMode, ListScreen, PendingAction, PendingKind, Submission,
};
pub use crate::status::ActionStatus;
pub use crate::validate::{Field, FieldErrors, parse_date, validate_existing, validate_new};
pub use evdesk_api::Saved;
