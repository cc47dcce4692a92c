use anyhow::{anyhow, Result};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::{debug, debug_span, info};

use cs_core::ports::PasteKeystrokePort;

/// Sends the platform paste shortcut through enigo.
///
/// macOS uses Cmd+V and needs the accessibility permission; without it
/// the OS silently drops the events or enigo reports an error.
pub struct EnigoPasteKeystroke;

impl EnigoPasteKeystroke {
    pub fn new() -> Self {
        Self
    }

    fn modifier() -> Key {
        if cfg!(target_os = "macos") {
            Key::Meta
        } else {
            Key::Control
        }
    }
}

impl Default for EnigoPasteKeystroke {
    fn default() -> Self {
        Self::new()
    }
}

impl PasteKeystrokePort for EnigoPasteKeystroke {
    fn send_paste(&self) -> Result<()> {
        let span = debug_span!("platform.input.send_paste");
        span.in_scope(|| {
            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| anyhow!("Failed to create input context: {e}"))?;
            let modifier = Self::modifier();

            enigo
                .key(modifier, Direction::Press)
                .map_err(|e| anyhow!("Failed to press paste modifier: {e}"))?;
            let click = enigo.key(Key::Unicode('v'), Direction::Click);
            // Always release the modifier, even when the click failed
            let release = enigo.key(modifier, Direction::Release);

            click.map_err(|e| anyhow!("Failed to send paste key: {e}"))?;
            release.map_err(|e| anyhow!("Failed to release paste modifier: {e}"))?;

            debug!("Sent paste keystroke");
            Ok(())
        })
    }
}

/// Paste port that only logs; used when keystroke injection is disabled.
pub struct NoopPasteKeystroke;

impl PasteKeystrokePort for NoopPasteKeystroke {
    fn send_paste(&self) -> Result<()> {
        info!("Paste keystroke disabled, clipboard content left for manual paste");
        Ok(())
    }
}
