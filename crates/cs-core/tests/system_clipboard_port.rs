//! Regression tests for the default `SystemClipboardPort::snapshot` implementation.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use cs_core::clipboard::{ChangeCount, ClipboardSnapshot};
use cs_core::ports::SystemClipboardPort;

/// Clipboard that counts reads and optionally fails the text read.
struct CountingClipboard {
    counter_reads: AtomicU8,
    text_reads: AtomicU8,
    text: Mutex<Option<String>>,
    fail_text: bool,
}

impl CountingClipboard {
    fn new(text: Option<&str>) -> Self {
        Self {
            counter_reads: AtomicU8::new(0),
            text_reads: AtomicU8::new(0),
            text: Mutex::new(text.map(str::to_string)),
            fail_text: false,
        }
    }
}

impl SystemClipboardPort for CountingClipboard {
    fn change_count(&self) -> anyhow::Result<ChangeCount> {
        self.counter_reads.fetch_add(1, Ordering::SeqCst);
        Ok(ChangeCount(42))
    }

    fn read_text(&self) -> anyhow::Result<Option<String>> {
        self.text_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_text {
            anyhow::bail!("pasteboard unavailable");
        }
        Ok(self.text.lock().unwrap().clone())
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        *self.text.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

#[test]
fn snapshot_reads_counter_and_text_once() {
    let clipboard = CountingClipboard::new(Some("hello"));

    let snapshot = clipboard.snapshot().unwrap();

    assert_eq!(snapshot, ClipboardSnapshot::text(42u64, "hello"));
    assert_eq!(clipboard.counter_reads.load(Ordering::SeqCst), 1);
    assert_eq!(clipboard.text_reads.load(Ordering::SeqCst), 1);
}

#[test]
fn snapshot_of_non_text_clipboard_has_no_text() {
    let clipboard = CountingClipboard::new(None);

    let snapshot = clipboard.snapshot().unwrap();

    assert_eq!(snapshot, ClipboardSnapshot::non_text(42u64));
}

#[test]
fn snapshot_propagates_read_errors() {
    let clipboard = CountingClipboard {
        fail_text: true,
        ..CountingClipboard::new(Some("x"))
    };

    let result = clipboard.snapshot();

    assert!(result.is_err());
}

#[test]
fn port_is_usable_as_trait_object() {
    let clipboard: Box<dyn SystemClipboardPort> = Box::new(CountingClipboard::new(None));

    clipboard.write_text("written").unwrap();

    assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("written"));
}
