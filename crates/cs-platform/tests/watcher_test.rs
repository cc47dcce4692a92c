mod common;

use std::sync::Arc;

use common::{FakeClipboard, RecordingHandler};
use cs_core::clipboard::ChangeCount;
use cs_platform::runtime::clipboard::{ClipboardWatcher, PollOutcome};

fn watcher(
    clipboard: &Arc<FakeClipboard>,
    handler: &Arc<RecordingHandler>,
) -> ClipboardWatcher<FakeClipboard> {
    ClipboardWatcher::new(clipboard.clone(), handler.clone())
}

#[tokio::test]
async fn initial_content_is_not_reported() {
    let clipboard = Arc::new(FakeClipboard::with_text(5, "X"));
    let handler = Arc::new(RecordingHandler::default());
    let watcher = watcher(&clipboard, &handler);

    assert_eq!(watcher.last_seen().await, ChangeCount(5));
    assert_eq!(watcher.check_once().await.unwrap(), PollOutcome::Unchanged);
    assert!(handler.copies().is_empty());
}

#[tokio::test]
async fn text_changes_are_reported_and_non_text_skipped() {
    let clipboard = Arc::new(FakeClipboard::with_text(5, "X"));
    let handler = Arc::new(RecordingHandler::default());
    let watcher = watcher(&clipboard, &handler);

    clipboard.set(6, Some("Y"));
    assert_eq!(
        watcher.check_once().await.unwrap(),
        PollOutcome::Text("Y".to_string())
    );

    // image copy: counter moves, no text
    clipboard.set(7, None);
    assert_eq!(watcher.check_once().await.unwrap(), PollOutcome::NonText);
    assert_eq!(watcher.last_seen().await, ChangeCount(7));

    clipboard.set(8, Some("Z"));
    assert_eq!(
        watcher.check_once().await.unwrap(),
        PollOutcome::Text("Z".to_string())
    );
    assert_eq!(watcher.check_once().await.unwrap(), PollOutcome::Unchanged);

    assert_eq!(handler.copies(), vec!["Y".to_string(), "Z".to_string()]);
}

#[tokio::test]
async fn several_changes_between_polls_report_latest_text_once() {
    let clipboard = Arc::new(FakeClipboard::with_text(1, "a"));
    let handler = Arc::new(RecordingHandler::default());
    let watcher = watcher(&clipboard, &handler);

    clipboard.set(2, Some("b"));
    clipboard.set(3, Some("c"));
    watcher.check_once().await.unwrap();

    assert_eq!(handler.copies(), vec!["c".to_string()]);
}

#[tokio::test]
async fn failed_text_read_skips_that_change() {
    let clipboard = Arc::new(FakeClipboard::with_text(1, "a"));
    let handler = Arc::new(RecordingHandler::default());
    let watcher = watcher(&clipboard, &handler);

    clipboard.set(2, Some("b"));
    clipboard.fail_text(true);
    assert!(watcher.check_once().await.is_err());

    clipboard.fail_text(false);
    assert_eq!(watcher.check_once().await.unwrap(), PollOutcome::Unchanged);
    assert!(handler.copies().is_empty());
}

#[tokio::test]
async fn failed_initial_counter_read_starts_from_zero() {
    let clipboard = Arc::new(FakeClipboard::default());
    clipboard.fail_counter(true);
    let handler = Arc::new(RecordingHandler::default());
    let watcher = watcher(&clipboard, &handler);
    assert_eq!(watcher.last_seen().await, ChangeCount::ZERO);

    clipboard.fail_counter(false);
    clipboard.set(1, Some("first"));
    assert_eq!(
        watcher.check_once().await.unwrap(),
        PollOutcome::Text("first".to_string())
    );
}
