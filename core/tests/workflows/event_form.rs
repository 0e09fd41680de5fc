// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Create and edit form workflows.

use evdesk_core::{
    ActionStatus, EventDraft, EventForm, EventId, EventRecord, EventRepository, Field, FormMode,
};
use jiff::civil::date;

use crate::common::{Call, InMemoryRepository, Op, standup_draft, test_event, today};

fn filled_create_form() -> EventForm {
    EventForm::open(EventRecord::Draft(standup_draft()))
}

#[tokio::test]
async fn create_standup_issues_one_create_without_id() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    let form = filled_create_form();

    // Act
    let form = form.submit(&repo, today()).await;

    // Assert
    let calls = repo.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::Create(new) => {
            assert_eq!(new.name, "Standup");
            assert_eq!(new.description, "Daily sync");
            assert_eq!(new.date, date(2026, 10, 19));
            assert_eq!(new.init_hour.as_str(), "09:00");
            assert_eq!(new.end_hour.as_str(), "09:15");
        }
        other => panic!("Expected a create call, got {other:?}"),
    }
    assert_eq!(
        form.status(),
        &ActionStatus::Success("Event created successfully! Id: 1".to_string())
    );
    assert_eq!(form.draft(), &EventDraft::default());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn created_event_reads_back_with_same_fields() {
    // Arrange
    let repo = InMemoryRepository::new(vec![test_event(7, "Existing")]);

    // Act
    let _ = filled_create_form().submit(&repo, today()).await;
    let created = repo.get_event(EventId(8)).await.unwrap();

    // Assert
    assert_eq!(created.name, "Standup");
    assert_eq!(created.description, "Daily sync");
    assert_eq!(created.date, date(2026, 10, 19));
    assert_eq!(created.init_hour.as_str(), "09:00");
    assert_eq!(created.end_hour.as_str(), "09:15");
}

#[tokio::test]
async fn invalid_start_hour_makes_no_call() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    let mut form = filled_create_form();
    form.set(Field::InitHour, "24:10");

    // Act
    let form = form.submit(&repo, today()).await;

    // Assert
    assert!(repo.calls().is_empty());
    assert_eq!(form.errors().get(Field::InitHour), Some("Invalid time."));
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.value(Field::InitHour), "24:10");
    assert_eq!(form.status(), &ActionStatus::Idle);
}

#[tokio::test]
async fn empty_fields_make_no_call_and_report_each() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    let mut form = filled_create_form();
    form.set(Field::Name, "");
    form.set(Field::Description, "  ");

    // Act
    let form = form.submit(&repo, today()).await;

    // Assert
    assert!(repo.calls().is_empty());
    assert_eq!(form.errors().get(Field::Name), Some("Event name is required"));
    assert_eq!(
        form.errors().get(Field::Description),
        Some("Event description is required")
    );
}

#[tokio::test]
async fn past_date_is_rejected_on_create() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    let mut form = filled_create_form();
    form.set(Field::Date, "17/10/2026");

    // Act
    let form = form.submit(&repo, today()).await;

    // Assert
    assert!(repo.calls().is_empty());
    assert_eq!(
        form.errors().get(Field::Date),
        Some("Date cannot be earlier than today")
    );
}

#[tokio::test]
async fn editing_a_field_clears_its_message() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    let mut form = filled_create_form();
    form.set(Field::Name, "");
    form.set(Field::EndHour, "");
    let mut form = form.submit(&repo, today()).await;
    assert_eq!(form.errors().len(), 2);

    // Act
    form.set(Field::Name, "Retro");

    // Assert
    assert_eq!(form.errors().get(Field::Name), None);
    assert_eq!(form.errors().get(Field::EndHour), Some("End time is required"));
}

#[tokio::test]
async fn failed_create_keeps_input() {
    // Arrange
    let repo = InMemoryRepository::new(Vec::new());
    repo.fail_on(Op::Create);

    // Act
    let form = filled_create_form().submit(&repo, today()).await;

    // Assert
    assert!(matches!(form.status(), ActionStatus::Failed(m) if m.starts_with("Server error")));
    assert_eq!(form.draft(), &standup_draft());
}

#[tokio::test]
async fn edit_form_loads_saves_and_keeps_values() {
    // Arrange
    let repo = InMemoryRepository::new(vec![test_event(5, "Planning")]);
    let mut form = EventForm::load(&repo, EventId(5)).await.unwrap();
    assert_eq!(form.mode(), FormMode::Edit(EventId(5)));
    assert_eq!(form.value(Field::Date), "01/11/2026");

    // Act
    form.set(Field::Name, "Sprint planning");
    form.set(Field::EndHour, "12:30");
    let form = form.submit(&repo, today()).await;

    // Assert
    assert_eq!(
        form.status(),
        &ActionStatus::Success("Event updated successfully! Id: 5".to_string())
    );
    assert_eq!(form.value(Field::Name), "Sprint planning");
    assert_eq!(form.value(Field::EndHour), "12:30");
    let saved = repo.get_event(EventId(5)).await.unwrap();
    assert_eq!(saved.name, "Sprint planning");
    assert_eq!(saved.end_hour.as_str(), "12:30");
}

#[tokio::test]
async fn edit_keeps_past_dates() {
    // Arrange
    let mut past = test_event(3, "Kickoff");
    past.date = date(2025, 1, 10);
    let repo = InMemoryRepository::new(vec![past]);
    let form = EventForm::load(&repo, EventId(3)).await.unwrap();

    // Act
    let form = form.submit(&repo, today()).await;

    // Assert
    assert!(matches!(form.status(), ActionStatus::Success(_)));
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn loading_missing_event_fails() {
    let repo = InMemoryRepository::new(Vec::new());
    let result = EventForm::load(&repo, EventId(99)).await;
    assert!(matches!(result, Err(evdesk_core::Error::NotFound(_))));
}
