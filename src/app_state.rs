//! The session state wiring input, routing, scrolling and the active section together.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the viewer
//! navigates. Key presses and mouse events either move the scroll container directly (manual
//! scrolling) or request a route (navigation). Each frame then advances the smooth scroll,
//! turns container movement into scroll signals for the tracker and lets the tracker run its
//! pending measurement pass.

use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::clipboard::{Clipboard, CopyButton};
use crate::config::Config;
use crate::container::SectionContainer;
use crate::content;
use crate::nav::NavigationSurface;
use crate::platform::{MemoryRouter, Router, TitleSink};
use crate::registry::SectionRegistry;
use crate::theme::ThemeService;
use crate::tracker::{ActiveSectionTracker, ScrollOutcome};
use crate::ui;

/// Share of the viewport moved by Page Up and Page Down.
pub const PAGE_SCROLL_FACTOR: f64 = 0.9;

/// Longest the event loop sleeps when nothing is scheduled.
pub const IDLE_POLL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether the event loop should keep running.
pub enum Flow {
    /// Keep handling events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Session state for the portfolio viewer.
pub struct AppState {
    /// Section table shared with the tracker.
    pub registry: Rc<SectionRegistry>,
    /// History stack; the current entry selects the section.
    pub router: MemoryRouter,
    /// Scrollable column of sections.
    pub container: SectionContainer,
    /// Owner of the active section.
    pub tracker: ActiveSectionTracker,
    /// Header link layout.
    pub nav: NavigationSurface,
    /// Light/dark preference.
    pub theme: ThemeService,
    /// Copy-email button on the contact section.
    pub copy: CopyButton,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Screen areas of the header links, filled in while drawing.
    pub header_hits: Vec<(Rect, &'static str)>,
    seen_revision: Option<u64>,
    unmeasured_scroll: bool,
    scroll_step: f64,
    frame_interval: Duration,
}

impl AppState {
    #[must_use]
    /// Lays out the page for a viewport `viewport_height` rows tall and mounts the tracker on
    /// `initial_path`.
    pub fn new(
        config: &Config,
        registry: SectionRegistry,
        initial_path: &str,
        theme: ThemeService,
        viewport_height: u16,
    ) -> Self {
        let registry = Rc::new(registry);
        let mut container = SectionContainer::new(config.scroll_duration(), config.reduced_motion);
        container.layout(&ui::section_rows(&registry), viewport_height);
        let router = MemoryRouter::new(initial_path);
        let tracker = ActiveSectionTracker::mount(
            Rc::clone(&registry),
            router.current_path(),
            &container,
            config.timing(),
        );

        Self {
            registry,
            router,
            container,
            tracker,
            nav: NavigationSurface::new(config.header_links),
            theme,
            copy: CopyButton::new(config.copy_feedback()),
            message: None,
            header_hits: Vec::new(),
            seen_revision: None,
            unmeasured_scroll: false,
            scroll_step: f64::from(config.scroll_step),
            frame_interval: config.frame_interval(),
        }
    }

    /// Re-stacks the sections for a new viewport height.
    pub fn resize(&mut self, viewport_height: u16) {
        self.container
            .layout(&ui::section_rows(&self.registry), viewport_height);
    }

    /// Feeds a route change, if the router has one, to the tracker.
    pub fn sync_route<T: TitleSink>(&mut self, now: Instant, title: &mut T) {
        let revision = self.router.revision();
        if self.seen_revision == Some(revision) {
            return;
        }
        self.seen_revision = Some(revision);
        let outcome =
            self.tracker
                .sync_route(self.router.current_path(), now, &mut self.container, title);
        tracing::trace!(path = self.router.current_path(), ?outcome, "route synced");
    }

    /// Runs one animation frame.
    ///
    /// The measurement requested by the previous frame's scroll signal runs first, then the
    /// smooth scroll advances and any movement becomes a scroll signal for the next frame.
    /// Movement dropped by the throttle is signalled again once the throttle window has passed,
    /// so the last key press is always measured.
    pub fn frame(&mut self, now: Instant) {
        self.tracker.on_timer(now);
        self.tracker.on_animation_frame(&self.container);
        self.container.step(now);
        if self.container.take_scrolled() || self.unmeasured_scroll {
            let outcome = self.tracker.on_scroll(now);
            self.unmeasured_scroll = outcome == ScrollOutcome::Throttled;
            tracing::trace!(scroll_top = self.container.scroll_top(), ?outcome, "scroll signal");
        }
        self.copy.tick(now);
    }

    #[must_use]
    /// How long the event loop may wait for input before the next frame is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.container.is_animating()
            || self.tracker.has_pending_frame()
            || self.unmeasured_scroll
        {
            return self.frame_interval;
        }
        [self.tracker.next_deadline(), self.copy.next_deadline()]
            .into_iter()
            .flatten()
            .min()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }

    /// Requests the route for `path` through the navigation surface.
    pub fn navigate(&mut self, path: &str) {
        NavigationSurface::request(&mut self.router, path);
    }

    /// Brings the section for `path` into view.
    ///
    /// Unlike [`Self::navigate`], this also acts when `path` is already the current route but
    /// the viewer has scrolled away from its section.
    pub fn reveal(&mut self, path: &str) {
        if self.router.current_path() == path {
            self.tracker.forget_route();
            self.seen_revision = None;
        } else {
            self.navigate(path);
        }
    }

    fn scroll_manually(&mut self, delta: f64) {
        self.container.scroll_by(delta);
    }

    fn cycle_theme(&mut self) {
        let result = self.theme.cycle();
        let mode = self.theme.mode();
        let resolved = self.theme.resolved();
        self.message = Some(match result {
            Ok(_) => format!("Theme: {mode} (resolved: {})", resolved.label().to_lowercase()),
            Err(e) => format!("Theme: {mode} (not saved: {e})"),
        });
    }

    /// Handles a key press.
    pub fn handle_key<C: Clipboard>(
        &mut self,
        key: KeyEvent,
        now: Instant,
        clipboard: &mut C,
    ) -> Flow {
        let active = self.tracker.active_id();
        let page = self.container.viewport_height() * PAGE_SCROLL_FACTOR;
        if key.code != KeyCode::Char('t') {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_manually(-self.scroll_step),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_manually(self.scroll_step),
            KeyCode::PageUp => self.scroll_manually(-page),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_manually(page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_manually(-self.container.scroll_top()),
            KeyCode::End | KeyCode::Char('G') => {
                let rest = self.container.max_scroll() - self.container.scroll_top();
                self.scroll_manually(rest);
            }
            KeyCode::Tab => {
                if let Some(path) = NavigationSurface::next_path(&self.registry, active) {
                    self.reveal(path);
                }
            }
            KeyCode::BackTab => {
                if let Some(path) = NavigationSurface::prev_path(&self.registry, active) {
                    self.reveal(path);
                }
            }
            KeyCode::Left | KeyCode::Char('[') => {
                self.router.back();
            }
            KeyCode::Right | KeyCode::Char(']') => {
                self.router.forward();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                let links = NavigationSurface::index_links(&self.registry, active);
                if let Some(link) = links.get(index) {
                    self.reveal(link.path);
                }
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('c') => {
                self.copy.press(clipboard, content::EMAIL, now);
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Handles wheel scrolling and clicks on header links.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_manually(-self.scroll_step),
            MouseEventKind::ScrollDown => self.scroll_manually(self.scroll_step),
            MouseEventKind::Down(MouseButton::Left) => {
                let at = Position::new(mouse.column, mouse.row);
                let hit = self
                    .header_hits
                    .iter()
                    .find(|(area, _)| area.contains(at))
                    .map(|&(_, path)| path);
                if let Some(path) = hit {
                    self.navigate(path);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
