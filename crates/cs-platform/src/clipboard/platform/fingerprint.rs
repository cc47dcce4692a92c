use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use tracing::{debug, debug_span};

use cs_core::clipboard::ChangeCount;
use cs_core::ports::SystemClipboardPort;

use super::super::common::CommonClipboardImpl;

/// Synthesizes a monotonically increasing change counter from content digests.
///
/// The counter advances whenever the observed digest differs from the last
/// one. Re-copying identical content is invisible here, which only matters
/// for the history order and is absorbed by its deduplication anyway.
#[derive(Debug, Default)]
pub struct FingerprintCounter {
    state: Mutex<CounterState>,
}

#[derive(Debug, Default)]
struct CounterState {
    last: Option<[u8; 32]>,
    count: ChangeCount,
}

impl FingerprintCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current digest and get the counter value for it.
    pub fn observe(&self, digest: [u8; 32]) -> Result<ChangeCount> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| anyhow!("Fingerprint counter lock poisoned"))?;
        if state.last != Some(digest) {
            if state.last.is_some() {
                state.count = state.count.next();
            }
            state.last = Some(digest);
        }
        Ok(state.count)
    }
}

/// Clipboard adapter for platforms without a native change counter.
pub struct FingerprintClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
    counter: FingerprintCounter,
}

impl FingerprintClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
            counter: FingerprintCounter::new(),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("Clipboard context lock poisoned"))
    }
}

impl SystemClipboardPort for FingerprintClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        let digest = {
            let ctx = self.context()?;
            CommonClipboardImpl::fingerprint(&ctx)?
        };
        self.counter.observe(digest)
    }

    fn read_text(&self) -> Result<Option<String>> {
        let span = debug_span!("platform.fingerprint.read_text");
        span.in_scope(|| {
            let ctx = self.context()?;
            let text = CommonClipboardImpl::read_text(&ctx)?;
            debug!(
                has_text = text.is_some(),
                len = text.as_ref().map(|t| t.len()).unwrap_or(0),
                "Read clipboard text"
            );
            Ok(text)
        })
    }

    fn write_text(&self, text: &str) -> Result<()> {
        let span = debug_span!("platform.fingerprint.write_text", len = text.len());
        span.in_scope(|| {
            let ctx = self.context()?;
            CommonClipboardImpl::write_text(&ctx, text)?;
            debug!("Wrote clipboard text to system");
            Ok(())
        })
    }
}
