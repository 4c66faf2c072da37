//! The scrollable column hosting every section anchor.
//!
//! Sections are stacked top to bottom in registry order. Each block is at least one viewport
//! tall, so a short section still fills the screen when scrolled to. Positions are measured in
//! terminal rows but kept as `f64` so smooth scrolling can pass through fractional offsets.

use std::time::{Duration, Instant};

use crate::platform::{Geometry, ScrollState, Viewport};

/// Default duration of an animated `scroll_into_view`.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(450);

#[derive(Clone, Debug, PartialEq)]
/// One laid-out section inside the container.
pub struct AnchorBlock {
    /// Anchor id of the section.
    pub anchor_id: &'static str,
    /// Offset of the block top from the container top.
    pub top: f64,
    /// Height of the block, never less than the viewport height.
    pub height: f64,
    /// Rows of actual content inside the block.
    pub content_rows: u16,
}

#[derive(Clone, Copy, Debug)]
struct ScrollAnimation {
    target: f64,
    start: Option<(Instant, f64)>,
}

/// Scroll container measured by the active section tracker.
pub struct SectionContainer {
    blocks: Vec<AnchorBlock>,
    viewport_height: f64,
    scroll_top: f64,
    last_reported_top: f64,
    animation: Option<ScrollAnimation>,
    duration: Duration,
    reduced_motion: bool,
}

impl SectionContainer {
    #[must_use]
    /// Creates an empty container; call [`Self::layout`] before measuring.
    pub fn new(duration: Duration, reduced_motion: bool) -> Self {
        Self {
            blocks: Vec::new(),
            viewport_height: 0.0,
            scroll_top: 0.0,
            last_reported_top: 0.0,
            animation: None,
            duration,
            reduced_motion,
        }
    }

    /// Stacks the given sections and records the viewport height.
    ///
    /// `sections` pairs each anchor id with the number of content rows it renders. The current
    /// scroll offset is kept and clamped to the new content height.
    pub fn layout(&mut self, sections: &[(&'static str, u16)], viewport_height: u16) {
        self.viewport_height = f64::from(viewport_height);
        self.blocks.clear();

        let mut top = 0.0;
        for &(anchor_id, content_rows) in sections {
            let height = f64::from(content_rows).max(self.viewport_height);
            self.blocks.push(AnchorBlock {
                anchor_id,
                top,
                height,
                content_rows,
            });
            top += height;
        }

        self.scroll_top = self.clamp(self.scroll_top);
        let max = self.max_scroll();
        if let Some(animation) = self.animation.as_mut() {
            animation.target = animation.target.min(max);
        }
    }

    #[must_use]
    /// Laid-out blocks in container order.
    pub fn blocks(&self) -> &[AnchorBlock] {
        &self.blocks
    }

    #[must_use]
    /// Offset of the first visible row.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    #[must_use]
    /// Height of the visible area.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    #[must_use]
    /// Total height of all blocks.
    pub fn content_height(&self) -> f64 {
        self.blocks.last().map_or(0.0, |b| b.top + b.height)
    }

    #[must_use]
    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    #[must_use]
    /// Whether a smooth scroll is in progress.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll())
    }

    /// Scrolls by `delta` rows as a user would, cancelling any smooth scroll in progress.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        self.animation = None;
        let next = self.clamp(self.scroll_top + delta);
        if (next - self.scroll_top).abs() < f64::EPSILON {
            return false;
        }
        self.scroll_top = next;
        true
    }

    /// Advances the smooth scroll animation to `now`.
    pub fn step(&mut self, now: Instant) {
        let Some(mut animation) = self.animation else {
            return;
        };
        let (started, from) = *animation.start.get_or_insert((now, self.scroll_top));
        let elapsed = now.saturating_duration_since(started);

        if self.duration.is_zero() || elapsed >= self.duration {
            self.scroll_top = self.clamp(animation.target);
            self.animation = None;
            return;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.scroll_top = self.clamp(from + (animation.target - from) * eased);
        self.animation = Some(animation);
    }

    /// Reports whether the offset moved since the previous call, like a browser's per-frame
    /// scroll event.
    pub fn take_scrolled(&mut self) -> bool {
        let moved = (self.scroll_top - self.last_reported_top).abs() >= f64::EPSILON;
        self.last_reported_top = self.scroll_top;
        moved
    }

    #[must_use]
    /// Blocks intersecting the viewport, paired with the row at which each starts on screen.
    ///
    /// The row is negative for a block whose top has scrolled above the viewport.
    pub fn visible_blocks(&self) -> Vec<(&AnchorBlock, f64)> {
        let bottom = self.scroll_top + self.viewport_height;
        self.blocks
            .iter()
            .filter(|b| b.top < bottom && b.top + b.height > self.scroll_top)
            .map(|b| (b, b.top - self.scroll_top))
            .collect()
    }
}

impl Viewport for SectionContainer {
    type Anchor = usize;

    fn anchor(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.anchor_id == id)
    }

    fn geometry(&self, anchor: &usize) -> Geometry {
        self.blocks.get(*anchor).map_or_else(Geometry::default, |b| Geometry {
            top: b.top - self.scroll_top,
            height: b.height,
        })
    }

    fn scroll_state(&self) -> Option<ScrollState> {
        Some(ScrollState {
            scroll_top: self.scroll_top,
            client_height: self.viewport_height,
        })
    }

    fn scroll_into_view(&mut self, anchor: &usize) {
        let Some(block) = self.blocks.get(*anchor) else {
            return;
        };
        let target = self.clamp(block.top);
        if self.reduced_motion {
            self.animation = None;
            self.scroll_top = target;
        } else {
            self.animation = Some(ScrollAnimation {
                target,
                start: None,
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/container.rs"]
mod tests;
