use super::*;

/// Tests deleting an original that has a translation reply.
///
/// Verifies that the reply is checked, deleted, and the link is dropped.
///
/// Expected: true, reply deleted once, no link left
#[tokio::test]
async fn deletes_linked_reply() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::new();
    gateway.seed_message(900);
    tracker.link(1, CHANNEL_ID, 900).await;

    let removed = tracker.on_deleted(deleted(1), &gateway).await;

    assert!(removed);
    assert_eq!(gateway.deleted(), vec![900]);
    assert_eq!(tracker.get(1).await, None);
}

/// Tests a delete event for a message the bot never replied to.
///
/// Expected: false with no Discord calls
#[tokio::test]
async fn ignores_unlinked_messages() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::new();

    let removed = tracker.on_deleted(deleted(1), &gateway).await;

    assert!(!removed);
    assert_eq!(gateway.exists_checks(), 0);
    assert!(gateway.deleted().is_empty());
}

/// Tests that links accumulate until their originals are deleted.
///
/// Expected: one link per linked original; deleting one original removes only its link
#[tokio::test]
async fn keeps_links_until_original_deleted() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::new();
    for original in 1..=3 {
        gateway.seed_message(900 + original);
        tracker.link(original, CHANNEL_ID, 900 + original).await;
    }
    assert_eq!(tracker.len().await, 3);

    assert!(tracker.on_deleted(deleted(2), &gateway).await);

    assert_eq!(tracker.len().await, 2);
    assert_eq!(tracker.get(2).await, None);
    assert!(tracker.get(1).await.is_some());
}

/// Tests a delete event delivered twice.
///
/// Verifies that the reply gets exactly one deletion attempt.
///
/// Expected: first call deletes, second call does nothing
#[tokio::test]
async fn attempts_deletion_at_most_once() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::new();
    gateway.seed_message(900);
    tracker.link(1, CHANNEL_ID, 900).await;

    assert!(tracker.on_deleted(deleted(1), &gateway).await);
    assert!(!tracker.on_deleted(deleted(1), &gateway).await);

    assert_eq!(gateway.deleted(), vec![900]);
    assert_eq!(gateway.exists_checks(), 1);
}

/// Tests a reply that someone already removed by hand.
///
/// Expected: false, no delete call, link dropped
#[tokio::test]
async fn skips_reply_already_gone() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::new();
    gateway.seed_message(900);
    gateway.forget_message(900);
    tracker.link(1, CHANNEL_ID, 900).await;

    let removed = tracker.on_deleted(deleted(1), &gateway).await;

    assert!(!removed);
    assert!(gateway.deleted().is_empty());
    assert_eq!(tracker.len().await, 0);
}

/// Tests a fetch failure while checking the reply.
///
/// Verifies that the error is swallowed and the link is still dropped.
///
/// Expected: false, link dropped
#[tokio::test]
async fn drops_link_when_fetch_fails() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::failing_fetches();
    tracker.link(1, CHANNEL_ID, 900).await;

    let removed = tracker.on_deleted(deleted(1), &gateway).await;

    assert!(!removed);
    assert_eq!(tracker.len().await, 0);
}

/// Tests a delete call that Discord rejects.
///
/// Verifies that the failure is swallowed, the link is dropped anyway and a second
/// delete event does not retry.
///
/// Expected: false, exactly one delete attempt, no link left
#[tokio::test]
async fn drops_link_when_delete_fails() {
    let tracker = LifecycleTracker::new();
    let gateway = RecordingGateway::failing_deletes();
    gateway.seed_message(900);
    tracker.link(1, CHANNEL_ID, 900).await;

    assert!(!tracker.on_deleted(deleted(1), &gateway).await);
    assert!(!tracker.on_deleted(deleted(1), &gateway).await);

    assert_eq!(gateway.delete_attempts(), 1);
    assert!(gateway.deleted().is_empty());
    assert_eq!(tracker.len().await, 0);
}

/// Tests the full path from auto-translate reply to deletion.
///
/// Expected: the reply posted by the pipeline is removed with its original
#[tokio::test]
async fn removes_reply_posted_by_pipeline() {
    let harness = Harness::new(
        channel_settings(CHANNEL_ID, &["es"]),
        ScriptedBackend::new(),
        "en",
    );
    let gateway = RecordingGateway::new();
    let incoming = crate::model::message::IncomingMessage {
        id: 7,
        content: "Good morning everyone".to_string(),
        is_automated_author: false,
        channel_id: CHANNEL_ID,
        guild_id: None,
    };

    harness.pipeline().handle(&incoming, &gateway).await;
    let reply_id = gateway.posted()[0].id;

    assert!(harness.lifecycle.on_deleted(deleted(7), &gateway).await);
    assert_eq!(gateway.deleted(), vec![reply_id]);
}
