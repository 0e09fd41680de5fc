// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The HTTP repository and the `Desk` facade against a mock events API.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use evdesk_core::{
    ActionStatus, Config, Desk, Error, EventDraft, EventForm, EventId, EventRecord, Field,
    ListScreen, SignInNotice,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::standup_draft;

fn desk_for(server: &MockServer) -> Desk {
    Desk::new(Config::new(server.uri())).unwrap()
}

fn event_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "Daily sync",
        "date": "2099-10-19T00:00:00.000Z",
        "initHour": "09:00",
        "endHour": "09:15",
    })
}

fn future_standup() -> EventDraft {
    EventDraft {
        date: "19/10/2099".to_string(),
        ..standup_draft()
    }
}

#[tokio::test]
async fn desk_create_posts_validated_fields() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .and(body_json(json!({
            "name": "Standup",
            "description": "Daily sync",
            "date": "2099-10-19",
            "initHour": "09:00",
            "endHour": "09:15",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Event created successfully!",
            "data": event_json(12, "Standup"),
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Act
    let saved = desk_for(&mock_server)
        .create(&future_standup())
        .await
        .unwrap();

    // Assert
    assert_eq!(saved.data.id, EventId(12));
    assert_eq!(saved.message.as_deref(), Some("Event created successfully!"));
}

#[tokio::test]
async fn desk_create_with_invalid_hour_never_reaches_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let draft = EventDraft {
        init_hour: "24:10".to_string(),
        ..future_standup()
    };
    match desk_for(&mock_server).create(&draft).await {
        Err(Error::Invalid(errors)) => {
            assert_eq!(errors.get(Field::InitHour), Some("Invalid time."));
        }
        other => panic!("Expected invalid input, got {other:?}"),
    }
}

#[tokio::test]
async fn server_rejection_is_a_validation_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Name already used" })),
        )
        .mount(&mock_server)
        .await;

    let form = EventForm::open(EventRecord::Draft(future_standup()));
    let desk = desk_for(&mock_server);
    let form = form.submit(desk.repository(), desk.today()).await;

    assert_eq!(
        form.status(),
        &ActionStatus::Failed("Name already used".to_string())
    );
    assert_eq!(form.value(Field::Name), "Standup");
}

#[tokio::test]
async fn missing_event_maps_to_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/41"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&mock_server)
        .await;

    let err = desk_for(&mock_server).get(EventId(41)).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(ref m) if m == "#41"));
}

#[tokio::test]
async fn delete_then_list_no_longer_contains_id() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json(3, "Planning"),
            event_json(5, "Review"),
        ])))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/events/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Event deleted successfully!" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(3, "Planning")])))
        .mount(&mock_server)
        .await;

    let desk = desk_for(&mock_server);
    let mut screen = ListScreen::new().load(desk.repository()).await;
    assert_eq!(screen.events().len(), 2);

    // Act
    screen.request_delete(screen.events()[1].clone());
    let screen = screen.confirm(desk.repository(), &desk).await;

    // Assert
    let ids: Vec<_> = screen.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EventId(3)]);
    assert_eq!(
        screen.status(),
        &ActionStatus::Success("Event deleted successfully!".to_string())
    );
}

#[tokio::test]
async fn calendar_push_without_google_section_is_config_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_json(5, "Review")))
        .mount(&mock_server)
        .await;

    let shown = Arc::new(AtomicBool::new(false));
    let notice: SignInNotice = {
        let shown = shown.clone();
        Arc::new(move |_url: &str| shown.store(true, Ordering::SeqCst))
    };

    let err = desk_for(&mock_server)
        .push_to_calendar(EventId(5), notice)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!shown.load(Ordering::SeqCst));
}
