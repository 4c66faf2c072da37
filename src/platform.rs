//! Capabilities the scroll synchronisation core consumes but does not implement.
//!
//! The tracker only ever talks to these traits: a [`Router`] holding the current path, a
//! [`Viewport`] that can find and measure anchors inside the scroll container, and a
//! [`TitleSink`] for the window title. Concrete implementations for the terminal live here too.

use std::io::{self, Write};

use ratatui::crossterm::{execute, terminal::SetTitle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Options accepted by [`Router::navigate`].
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Current path plus an imperative way to change it.
///
/// Subscribers detect changes by comparing [`Router::revision`] with the value they last saw.
pub trait Router {
    /// Path of the current history entry.
    fn current_path(&self) -> &str;

    /// Moves to `path`, pushing or replacing a history entry.
    fn navigate(&mut self, path: &str, options: NavigateOptions);

    /// Counter bumped on every change of the current path.
    fn revision(&self) -> u64;
}

#[derive(Clone, Debug)]
/// In-memory history stack with browser-like back and forward.
pub struct MemoryRouter {
    entries: Vec<String>,
    index: usize,
    revision: u64,
}

impl MemoryRouter {
    #[must_use]
    /// Starts a history holding a single entry.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
            revision: 0,
        }
    }

    /// Steps back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.revision += 1;
        tracing::debug!(path = %self.current_path(), "history back");
        true
    }

    /// Steps forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        self.revision += 1;
        tracing::debug!(path = %self.current_path(), "history forward");
        true
    }

    #[must_use]
    /// Number of entries in the history stack.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> &str {
        &self.entries[self.index]
    }

    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        if options.replace {
            self.entries[self.index] = path.to_string();
        } else {
            // Pushing drops any forward entries, as a browser does.
            self.entries.truncate(self.index + 1);
            self.entries.push(path.to_string());
            self.index += 1;
        }
        self.revision += 1;
        tracing::debug!(path, replace = options.replace, "navigate");
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Position and size of an anchor, relative to the top of the viewport.
pub struct Geometry {
    /// Distance from the viewport top to the anchor top; negative once scrolled past.
    pub top: f64,
    /// Rendered height of the anchor.
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Scroll offset and visible height of the scroll container, in its own coordinates.
pub struct ScrollState {
    /// Offset of the first visible row.
    pub scroll_top: f64,
    /// Height of the visible area.
    pub client_height: f64,
}

impl ScrollState {
    #[must_use]
    /// Vertical center of the visible area in container coordinates.
    pub fn center(&self) -> f64 {
        self.scroll_top + self.client_height / 2.0
    }
}

/// Anchor lookup, measurement and scrolling inside the scroll container.
pub trait Viewport {
    /// Handle to an anchor element.
    type Anchor;

    /// Finds the anchor with `id`, if it is currently rendered.
    fn anchor(&self, id: &str) -> Option<Self::Anchor>;

    /// Measures an anchor relative to the viewport top.
    fn geometry(&self, anchor: &Self::Anchor) -> Geometry;

    /// Current scroll state, or `None` when there is no scroll container.
    fn scroll_state(&self) -> Option<ScrollState>;

    /// Smoothly scrolls so the anchor top aligns with the viewport top.
    fn scroll_into_view(&mut self, anchor: &Self::Anchor);
}

/// Fire-and-forget sink for the window title.
pub trait TitleSink {
    /// Replaces the window title.
    fn set_title(&mut self, title: &str);
}

/// Sets the terminal window title through an escape sequence.
pub struct TerminalTitle<W: Write> {
    out: W,
}

impl TerminalTitle<io::Stdout> {
    #[must_use]
    /// Writes titles to standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalTitle<W> {
    /// Writes titles to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TitleSink for TerminalTitle<W> {
    fn set_title(&mut self, title: &str) {
        if let Err(error) = execute!(self.out, SetTitle(title)) {
            tracing::debug!(%error, "failed to set terminal title");
        }
    }
}

#[cfg(test)]
#[path = "tests/platform.rs"]
mod tests;
