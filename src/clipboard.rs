//! Copy-to-clipboard action for the contact section.
//!
//! Copying never fails loudly. The outcome is shown on the button for a short feedback window
//! and then the button returns to idle.

use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// How long the copy outcome stays visible.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(1200);

/// Somewhere text can be copied to.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

#[derive(Default)]
/// The operating system clipboard, opened on first use.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?,
        };
        let result = clipboard
            .set_text(text)
            .map_err(|e| Error::Clipboard(e.to_string()));
        self.inner = Some(clipboard);
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome shown on the copy button.
pub enum CopyState {
    /// Nothing to report.
    Idle,
    /// The last copy succeeded.
    Copied,
    /// The last copy failed.
    Failed,
}

/// Copy button state with a self-resetting outcome.
pub struct CopyButton {
    state: CopyState,
    reset_at: Option<Instant>,
    feedback: Duration,
}

impl CopyButton {
    #[must_use]
    /// Shows each outcome for `feedback` before returning to idle.
    pub fn new(feedback: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            reset_at: None,
            feedback,
        }
    }

    #[must_use]
    /// Current outcome.
    pub fn state(&self) -> CopyState {
        self.state
    }

    #[must_use]
    /// Caption for the button.
    pub fn label(&self) -> &'static str {
        match self.state {
            CopyState::Idle => "Copy",
            CopyState::Copied => "Copied",
            CopyState::Failed => "Failed",
        }
    }

    #[must_use]
    /// When the outcome will be cleared, if one is showing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Copies `text` and records the outcome. A newer outcome replaces the pending reset.
    pub fn press<C: Clipboard>(&mut self, clipboard: &mut C, text: &str, now: Instant) -> CopyState {
        self.state = match clipboard.set_text(text) {
            Ok(()) => CopyState::Copied,
            Err(error) => {
                tracing::warn!(%error, "copy to clipboard failed");
                CopyState::Failed
            }
        };
        self.reset_at = Some(now + self.feedback);
        self.state
    }

    /// Returns to idle once the feedback window has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.reset_at.is_some_and(|at| now >= at) {
            self.state = CopyState::Idle;
            self.reset_at = None;
        }
    }
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod tests;
