#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use cs_core::clipboard::ChangeCount;
use cs_core::ports::{ClipboardChangeHandler, SystemClipboardPort};

/// Scriptable clipboard: tests bump the counter and swap the content.
#[derive(Default)]
pub struct FakeClipboard {
    state: Mutex<FakeState>,
    counter_reads: AtomicUsize,
}

#[derive(Default)]
struct FakeState {
    count: u64,
    text: Option<String>,
    fail_counter: bool,
    fail_text: bool,
}

impl FakeClipboard {
    pub fn with_text(count: u64, text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.set(count, Some(text));
        clipboard
    }

    pub fn set(&self, count: u64, text: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        state.count = count;
        state.text = text.map(str::to_string);
    }

    pub fn fail_counter(&self, fail: bool) {
        self.state.lock().unwrap().fail_counter = fail;
    }

    pub fn fail_text(&self, fail: bool) {
        self.state.lock().unwrap().fail_text = fail;
    }

    pub fn counter_reads(&self) -> usize {
        self.counter_reads.load(Ordering::SeqCst)
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        self.counter_reads.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        if state.fail_counter {
            return Err(anyhow!("pasteboard unavailable"));
        }
        Ok(ChangeCount(state.count))
    }

    fn read_text(&self) -> Result<Option<String>> {
        let state = self.state.lock().unwrap();
        if state.fail_text {
            return Err(anyhow!("text read failed"));
        }
        Ok(state.text.clone())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.count += 1;
        state.text = Some(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingHandler {
    copies: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn copies(&self) -> Vec<String> {
        self.copies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardChangeHandler for RecordingHandler {
    async fn on_text_copied(&self, text: String) -> Result<()> {
        self.copies.lock().unwrap().push(text);
        Ok(())
    }
}
