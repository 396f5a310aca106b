//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::error::{Error, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission
/// denied. Failures surface as transient notifications at the action
/// boundary, never as panel state changes.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}
