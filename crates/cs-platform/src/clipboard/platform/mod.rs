mod fingerprint;
#[cfg(target_os = "macos")]
mod macos;

pub use fingerprint::{FingerprintClipboard, FingerprintCounter};

// macOS exposes a real pasteboard change counter
#[cfg(target_os = "macos")]
pub use macos::MacOSClipboard as LocalClipboard;

// Everywhere else the counter is derived from content fingerprints
#[cfg(not(target_os = "macos"))]
pub use fingerprint::FingerprintClipboard as LocalClipboard;
