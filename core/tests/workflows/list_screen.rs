// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! List screen workflows: load, delete and calendar dialogs.

use evdesk_core::{ActionStatus, EventId, ListScreen, PendingKind};

use crate::common::{Call, InMemoryRepository, Op, RecordingBridge, test_event};

fn three_events() -> InMemoryRepository {
    InMemoryRepository::new(vec![
        test_event(3, "Planning"),
        test_event(5, "Review"),
        test_event(8, "Retro"),
    ])
}

#[tokio::test]
async fn load_keeps_server_order() {
    // Arrange
    let repo = three_events();

    // Act
    let screen = ListScreen::new().load(&repo).await;

    // Assert
    let ids: Vec<_> = screen.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EventId(3), EventId(5), EventId(8)]);
    assert_eq!(screen.status(), &ActionStatus::Idle);
}

#[tokio::test]
async fn failed_load_reports_error() {
    let repo = three_events();
    repo.fail_on(Op::List);

    let screen = ListScreen::new().load(&repo).await;

    assert!(screen.events().is_empty());
    assert!(matches!(screen.status(), ActionStatus::Failed(_)));
}

#[tokio::test]
async fn cancel_delete_issues_no_call() {
    // Arrange
    let repo = three_events();
    let bridge = RecordingBridge::default();
    let mut screen = ListScreen::new().load(&repo).await;
    let target = screen.events()[1].clone();
    assert_eq!(target.id, EventId(5));

    // Act
    screen.request_delete(target);
    assert_eq!(screen.pending().map(|p| p.kind), Some(PendingKind::Delete));
    screen.cancel();
    let screen = screen.confirm(&repo, &bridge).await;

    // Assert
    assert!(screen.pending().is_none());
    assert_eq!(repo.calls(), vec![Call::List]);
    assert_eq!(screen.events().len(), 3);
}

#[tokio::test]
async fn confirmed_delete_reloads_without_the_event() {
    // Arrange
    let repo = three_events();
    let bridge = RecordingBridge::default();
    let mut screen = ListScreen::new().load(&repo).await;
    screen.request_delete(screen.events()[1].clone());

    // Act
    let screen = screen.confirm(&repo, &bridge).await;

    // Assert
    assert_eq!(
        repo.calls(),
        vec![Call::List, Call::Delete(EventId(5)), Call::List]
    );
    let ids: Vec<_> = screen.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EventId(3), EventId(8)]);
    assert_eq!(repo.ids(), ids);
    assert_eq!(
        screen.status(),
        &ActionStatus::Success("Event deleted successfully!".to_string())
    );
    assert!(screen.pending().is_none());
}

#[tokio::test]
async fn failed_delete_keeps_list_and_closes_dialog() {
    // Arrange
    let repo = three_events();
    let bridge = RecordingBridge::default();
    let mut screen = ListScreen::new().load(&repo).await;
    repo.fail_on(Op::Delete);
    screen.request_delete(screen.events()[0].clone());

    // Act
    let screen = screen.confirm(&repo, &bridge).await;

    // Assert
    assert_eq!(repo.calls(), vec![Call::List, Call::Delete(EventId(3))]);
    assert_eq!(screen.events().len(), 3);
    assert_eq!(repo.ids(), vec![EventId(3), EventId(5), EventId(8)]);
    assert!(matches!(screen.status(), ActionStatus::Failed(_)));
    assert!(screen.pending().is_none());
}

#[tokio::test]
async fn a_new_request_replaces_the_pending_selection() {
    // Arrange
    let repo = three_events();
    let bridge = RecordingBridge::default();
    let mut screen = ListScreen::new().load(&repo).await;

    // Act
    screen.request_delete(screen.events()[0].clone());
    screen.request_calendar_sync(screen.events()[2].clone());
    let screen = screen.confirm(&repo, &bridge).await;

    // Assert
    assert_eq!(bridge.pushed(), vec![EventId(8)]);
    assert_eq!(repo.calls(), vec![Call::List]);
    assert_eq!(
        screen.status(),
        &ActionStatus::Success("Event added to Google Calendar".to_string())
    );
}

#[tokio::test]
async fn refused_calendar_sign_in_closes_dialog_with_error() {
    // Arrange
    let repo = three_events();
    let bridge = RecordingBridge::refusing();
    let mut screen = ListScreen::new().load(&repo).await;
    screen.request_calendar_sync(screen.events()[0].clone());

    // Act
    let screen = screen.confirm(&repo, &bridge).await;

    // Assert
    assert!(bridge.pushed().is_empty());
    assert_eq!(
        screen.status(),
        &ActionStatus::Failed("Authentication failed: access_denied".to_string())
    );
    assert!(screen.pending().is_none());
}

#[tokio::test]
async fn confirm_without_dialog_is_a_no_op() {
    let repo = three_events();
    let bridge = RecordingBridge::default();

    let screen = ListScreen::new().confirm(&repo, &bridge).await;

    assert!(repo.calls().is_empty());
    assert_eq!(screen.status(), &ActionStatus::Idle);
}
