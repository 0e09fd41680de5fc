// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evdesk_core::{Event, EventDraft, EventId};
use jiff::civil::{Date, date};

/// Fixed "today" so date rules do not depend on the clock.
pub fn today() -> Date {
    date(2026, 10, 18)
}

/// The draft a user types for a daily standup tomorrow.
pub fn standup_draft() -> EventDraft {
    EventDraft {
        name: "Standup".to_string(),
        description: "Daily sync".to_string(),
        date: "2026-10-19".to_string(),
        init_hour: "09:00".to_string(),
        end_hour: "09:15".to_string(),
    }
}

/// A persisted event with the given id and name.
pub fn test_event(id: u64, name: &str) -> Event {
    Event {
        id: EventId(id),
        name: name.to_string(),
        description: format!("{name} description"),
        date: date(2026, 11, 1),
        init_hour: "10:00".parse().unwrap(),
        end_hour: "11:00".parse().unwrap(),
    }
}
