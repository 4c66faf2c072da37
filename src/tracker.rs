//! The state machine binding the route, the scroll position and the active section.
//!
//! Two input streams drive one output. Route changes set the active section immediately and
//! scroll its anchor into view; scroll signals re-measure which anchor sits closest to the
//! viewport center. Left alone the two would feed each other: the animated scroll started by a
//! route change emits scroll signals that would re-select whatever section the animation is
//! passing through. The tracker breaks the loop with an explicit guard:
//!
//! ```text
//!            route change, anchor present
//!   Idle  ----------------------------------->  Programmatic { settle_at }
//!    ^  ^                                          |     |
//!    |  |  route change, anchor missing            |     | route change, anchor present
//!    |  +------------------------------------------+     | (settle_at pushed back)
//!    |                                                   |
//!    +------------------- settle timeout ----------------+
//! ```
//!
//! While `Programmatic`, scroll signals are dropped. While `Idle`, they are throttled and
//! coalesced into at most one measurement pass on the next animation frame.
//!
//! The tracker does no timekeeping of its own: every entry point takes the current [`Instant`],
//! and the event loop asks [`ActiveSectionTracker::next_deadline`] how long it may sleep.

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::platform::{ScrollState, TitleSink, Viewport};
use crate::registry::SectionRegistry;
use crate::section::Section;

/// Minimum spacing between processed scroll signals.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

/// How long scroll signals stay suppressed after a route-driven scroll starts.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tuning constants for scroll processing.
pub struct TrackerTiming {
    /// Scroll signals arriving sooner than this after the last processed one are dropped.
    pub throttle: Duration,
    /// Length of the guard window opened by a route-driven scroll.
    pub settle: Duration,
}

impl Default for TrackerTiming {
    fn default() -> Self {
        Self {
            throttle: DEFAULT_THROTTLE,
            settle: DEFAULT_SETTLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether scroll signals currently drive the active section.
pub enum ScrollMode {
    /// Scroll signals are measured.
    Idle,
    /// A route-driven scroll is in flight; scroll signals are ignored until `settle_at`.
    Programmatic {
        /// When the guard lifts.
        settle_at: Instant,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a call to [`ActiveSectionTracker::sync_route`] did.
pub enum RouteOutcome {
    /// The path equals the last observed path, or the tracker is unmounted.
    Unchanged,
    /// Active section and title updated, scroll requested, guard engaged.
    Scrolled,
    /// Active section and title updated; the anchor is not rendered so nothing scrolled.
    AnchorMissing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a call to [`ActiveSectionTracker::on_scroll`] did.
pub enum ScrollOutcome {
    /// No scroll container at mount, or the tracker is unmounted.
    Detached,
    /// A route-driven scroll is in flight.
    Guarded,
    /// Too soon after the previous processed signal.
    Throttled,
    /// A measurement pass is pending for the next animation frame.
    FrameRequested,
}

/// Owns the active section and the re-entrancy guard.
pub struct ActiveSectionTracker {
    registry: Rc<SectionRegistry>,
    timing: TrackerTiming,
    active_id: &'static str,
    mode: ScrollMode,
    observed_path: Option<String>,
    last_processed_scroll: Option<Instant>,
    pending_frame: bool,
    scroll_tracking: bool,
    mounted: bool,
}

impl ActiveSectionTracker {
    /// Creates the tracker seeded from `current_path`.
    ///
    /// Scroll tracking is attached only if the viewport reports a scroll container; without one
    /// the tracker still follows route changes. The first [`Self::sync_route`] call always fires,
    /// so the initial route scrolls its section into view.
    pub fn mount<V: Viewport>(
        registry: Rc<SectionRegistry>,
        current_path: &str,
        viewport: &V,
        timing: TrackerTiming,
    ) -> Self {
        let active_id = registry.resolve_by_path(current_path).anchor_id;
        let scroll_tracking = viewport.scroll_state().is_some();
        if !scroll_tracking {
            tracing::debug!("no scroll container, scroll tracking inactive");
        }
        tracing::debug!(path = current_path, active_id, "tracker mounted");

        Self {
            registry,
            timing,
            active_id,
            mode: ScrollMode::Idle,
            observed_path: None,
            last_processed_scroll: None,
            pending_frame: false,
            scroll_tracking,
            mounted: true,
        }
    }

    #[must_use]
    /// Anchor id of the active section.
    pub fn active_id(&self) -> &'static str {
        self.active_id
    }

    #[must_use]
    /// The active section.
    pub fn active_section(&self) -> &Section {
        self.registry
            .by_anchor(self.active_id)
            .unwrap_or_else(|| self.registry.root())
    }

    #[must_use]
    /// Timing constants in effect.
    pub fn timing(&self) -> TrackerTiming {
        self.timing
    }

    #[must_use]
    /// Earliest instant at which [`Self::on_timer`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.mode {
            ScrollMode::Idle => None,
            ScrollMode::Programmatic { settle_at } => Some(settle_at),
        }
    }

    #[must_use]
    /// Whether a measurement pass is waiting for the next animation frame.
    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame
    }

    fn is_guarded(&self) -> bool {
        matches!(self.mode, ScrollMode::Programmatic { .. })
    }

    /// Reacts to the route reporting `path`.
    ///
    /// Does nothing unless `path` differs from the previously observed path. Otherwise the
    /// window title and the active section are updated before any scrolling starts, and the
    /// guard is engaged before the scroll request is issued so no intermediate scroll signal
    /// can slip through. A pending settle deadline or measurement pass from an earlier
    /// transition is cancelled first.
    pub fn sync_route<V: Viewport, T: TitleSink>(
        &mut self,
        path: &str,
        now: Instant,
        viewport: &mut V,
        title: &mut T,
    ) -> RouteOutcome {
        if !self.mounted || self.observed_path.as_deref() == Some(path) {
            return RouteOutcome::Unchanged;
        }
        self.observed_path = Some(path.to_string());

        self.mode = ScrollMode::Idle;
        self.pending_frame = false;

        if !self.registry.contains_path(path) {
            tracing::debug!(path, "unregistered path, showing the root section");
        }
        let section = self.registry.resolve_by_path(path).clone();
        title.set_title(section.title);
        self.active_id = section.anchor_id;

        let Some(anchor) = viewport.anchor(section.anchor_id) else {
            tracing::debug!(
                path,
                anchor_id = section.anchor_id,
                "anchor not rendered, skipping scroll"
            );
            return RouteOutcome::AnchorMissing;
        };

        let settle_at = now + self.timing.settle;
        self.mode = ScrollMode::Programmatic { settle_at };
        viewport.scroll_into_view(&anchor);
        tracing::debug!(path, anchor_id = section.anchor_id, "route scroll started");

        RouteOutcome::Scrolled
    }

    /// Forgets the last observed path, so the next [`Self::sync_route`] acts even when the route
    /// has not changed. Used to bring the route's section back into view after manual scrolling.
    pub fn forget_route(&mut self) {
        self.observed_path = None;
    }

    /// Fires the settle timer if it is due.
    ///
    /// Returns `true` when the guard lifted.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        match self.mode {
            ScrollMode::Programmatic { settle_at } if now >= settle_at => {
                self.mode = ScrollMode::Idle;
                tracing::trace!(active_id = self.active_id, "route scroll settled");
                true
            }
            _ => false,
        }
    }

    /// Reacts to the scroll container reporting movement.
    ///
    /// Timers due at or before `now` fire first, matching the order an event loop would
    /// deliver them in.
    pub fn on_scroll(&mut self, now: Instant) -> ScrollOutcome {
        if !self.mounted || !self.scroll_tracking {
            return ScrollOutcome::Detached;
        }
        self.on_timer(now);
        if self.is_guarded() {
            return ScrollOutcome::Guarded;
        }
        if let Some(last) = self.last_processed_scroll {
            if now.saturating_duration_since(last) < self.timing.throttle {
                return ScrollOutcome::Throttled;
            }
        }
        self.last_processed_scroll = Some(now);
        self.pending_frame = true;
        ScrollOutcome::FrameRequested
    }

    /// Runs the pending measurement pass, if any.
    ///
    /// Returns the newly active section when the closest anchor changed.
    pub fn on_animation_frame<V: Viewport>(&mut self, viewport: &V) -> Option<&Section> {
        if !std::mem::take(&mut self.pending_frame) || !self.mounted {
            return None;
        }
        let state = viewport.scroll_state()?;
        let nearest = nearest_to_center(self.registry.all(), viewport, state)?;
        if nearest.anchor_id == self.active_id {
            return None;
        }

        tracing::debug!(
            from = self.active_id,
            to = nearest.anchor_id,
            scroll_top = state.scroll_top,
            "active section changed by scroll"
        );
        self.active_id = nearest.anchor_id;
        Some(nearest)
    }

    /// Detaches from both input streams and cancels any pending timer or frame.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.scroll_tracking = false;
        self.mode = ScrollMode::Idle;
        self.pending_frame = false;
        tracing::debug!("tracker unmounted");
    }
}

/// Finds the section whose anchor midpoint lies closest to the viewport center.
///
/// Sections without a rendered anchor are skipped. Ties go to the section listed first.
pub fn nearest_to_center<'a, V: Viewport>(
    sections: &'a [Section],
    viewport: &V,
    state: ScrollState,
) -> Option<&'a Section> {
    let center = state.center();
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for section in sections {
        let Some(anchor) = viewport.anchor(section.anchor_id) else {
            continue;
        };
        let geometry = viewport.geometry(&anchor);
        let midpoint = geometry.top + state.scroll_top + geometry.height / 2.0;
        let distance = (center - midpoint).abs();
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(section);
        }
    }

    nearest
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
