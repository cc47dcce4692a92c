use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use clipboard_rs::ClipboardContext;
use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};
use tracing::{debug, debug_span};

use cs_core::clipboard::ChangeCount;
use cs_core::ports::SystemClipboardPort;

use super::super::common::CommonClipboardImpl;

#[link(name = "AppKit", kind = "framework")]
extern "C" {}

/// macOS clipboard: `NSPasteboard.changeCount` plus clipboard-rs for text.
pub struct MacOSClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

impl MacOSClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }

    fn context(&self) -> Result<MutexGuard<'_, ClipboardContext>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("Clipboard context lock poisoned"))
    }

    fn general_pasteboard_change_count() -> Result<ChangeCount> {
        let class = Class::get("NSPasteboard")
            .ok_or_else(|| anyhow!("NSPasteboard class is unavailable"))?;
        // SAFETY: NSPasteboard is loaded (AppKit is linked) and both selectors
        // exist on every supported macOS release.
        let count: isize = unsafe {
            let pasteboard: *mut Object = msg_send![class, generalPasteboard];
            if pasteboard.is_null() {
                return Err(anyhow!("General pasteboard is unavailable"));
            }
            msg_send![pasteboard, changeCount]
        };
        Ok(ChangeCount(count.max(0) as u64))
    }
}

impl SystemClipboardPort for MacOSClipboard {
    fn change_count(&self) -> Result<ChangeCount> {
        Self::general_pasteboard_change_count()
    }

    fn read_text(&self) -> Result<Option<String>> {
        let span = debug_span!("platform.macos.read_text");
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
        let span = debug_span!("platform.macos.write_text", len = text.len());
        span.in_scope(|| {
            let ctx = self.context()?;
            CommonClipboardImpl::write_text(&ctx, text)?;
            debug!("Wrote clipboard text to system");
            Ok(())
        })
    }
}
