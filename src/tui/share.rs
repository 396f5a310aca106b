//! Share action
//!
//! Terminals have no native share sheet, so sharing is a two-step
//! fallback: an optional external command from config gets the formatted
//! text as its final argument; when no command is configured (or it
//! cannot be launched), the text is copied to the clipboard instead.
//! A command that exits non-zero is treated as the user cancelling,
//! which is silent by contract.

use super::clipboard;
use crate::error::Result;
use std::process::{Command, Stdio};

/// What the share attempt ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The external share command ran successfully
    Shared,
    /// The external command exited non-zero (user cancelled) - silent
    Cancelled,
    /// No share integration available; text was copied to the clipboard
    CopiedFallback,
}

/// Share `text`, preferring the configured external command
pub fn share(share_command: Option<&str>, text: &str) -> Result<ShareOutcome> {
    if let Some(cmd) = share_command {
        match run_share_command(cmd, text) {
            Some(true) => return Ok(ShareOutcome::Shared),
            Some(false) => return Ok(ShareOutcome::Cancelled),
            // Command could not be launched at all - fall through to copy
            None => {}
        }
    }

    clipboard::copy_to_clipboard(text)?;
    Ok(ShareOutcome::CopiedFallback)
}

/// Run the share command with `text` appended as the final argument.
/// Returns Some(success) when the command ran, None when it failed to
/// launch.
fn run_share_command(cmd: &str, text: &str) -> Option<bool> {
    let mut parts = cmd.split_whitespace();
    let program = parts.next()?;

    let status = Command::new(program)
        .args(parts)
        .arg(text)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) => Some(s.success()),
        Err(e) => {
            tracing::warn!("Share command '{}' failed to launch: {}", cmd, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_command_is_shared() {
        assert_eq!(run_share_command("true", "some text"), Some(true));
    }

    #[test]
    fn nonzero_exit_is_cancellation() {
        assert_eq!(run_share_command("false", "some text"), Some(false));
    }

    #[test]
    fn unlaunchable_command_returns_none() {
        assert_eq!(
            run_share_command("definitely-not-a-real-binary-xyz", "text"),
            None
        );
    }
}
