use anyhow::{anyhow, Context, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};

/// clipboard-rs operations shared by every platform adapter.
pub struct CommonClipboardImpl;

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl CommonClipboardImpl {
    /// Plain-text payload, `None` when no text format is on the clipboard.
    pub fn read_text(ctx: &ClipboardContext) -> Result<Option<String>> {
        if !ctx.has(ContentFormat::Text) {
            return Ok(None);
        }
        map_clipboard_err(ctx.get_text()).map(Some)
    }

    pub fn write_text(ctx: &ClipboardContext, text: &str) -> Result<()> {
        map_clipboard_err(ctx.set_text(text.to_string()))
    }

    /// Digest of the advertised formats plus the text payload.
    ///
    /// Two reads of an untouched clipboard produce the same digest; a new
    /// copy of different content (or a different format set) does not.
    /// A failed text read fails the whole fingerprint.
    pub fn fingerprint(ctx: &ClipboardContext) -> Result<[u8; 32]> {
        let formats = map_clipboard_err(ctx.available_formats())?;
        fingerprint_with(&formats, Self::read_text(ctx))
    }
}

fn fingerprint_with(formats: &[String], text: Result<Option<String>>) -> Result<[u8; 32]> {
    let text = text.context("Failed to read clipboard text for fingerprint")?;
    Ok(fingerprint_of(formats, text.as_deref()))
}

pub(crate) fn fingerprint_of(formats: &[String], text: Option<&str>) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for format in formats {
        hasher.update(format.as_bytes());
        hasher.update(&[0]);
    }
    match text {
        Some(text) => {
            hasher.update(&[1]);
            hasher.update(text.as_bytes());
        }
        None => {
            hasher.update(&[2]);
        }
    }
    *hasher.finalize().as_bytes()
}
