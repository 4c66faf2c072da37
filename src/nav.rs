//! Header navigation: renders the active section and turns selections into route requests.
//!
//! Holds no state of its own. Highlighting is an equality check against the tracker's active
//! anchor id, and every interaction goes through the [`Router`].

use crate::platform::{NavigateOptions, Router};
use crate::registry::{SectionRegistry, ROOT_PATH};

/// Number of section links shown in the header when not configured otherwise.
pub const DEFAULT_HEADER_LINKS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A single navigation link.
pub struct NavItem {
    /// Text shown for the link.
    pub label: &'static str,
    /// Route requested when the link is chosen.
    pub path: &'static str,
    /// Whether the link's section is the active one.
    pub active: bool,
}

/// Stateless view over the registry for header and keyboard navigation.
pub struct NavigationSurface {
    header_links: usize,
}

impl NavigationSurface {
    #[must_use]
    /// Shows at most `header_links` section links in the header.
    pub fn new(header_links: usize) -> Self {
        Self { header_links }
    }

    #[must_use]
    /// Header links: every section except the root, in registry order, up to the configured
    /// count.
    pub fn items(&self, registry: &SectionRegistry, active_id: &str) -> Vec<NavItem> {
        let root = registry.root().anchor_id;
        registry
            .all()
            .iter()
            .filter(|s| s.anchor_id != root)
            .take(self.header_links)
            .map(|s| NavItem {
                label: s.label,
                path: s.path,
                active: s.anchor_id == active_id,
            })
            .collect()
    }

    #[must_use]
    /// Every section as a link, in registry order. Backs the numeric shortcuts.
    pub fn index_links(registry: &SectionRegistry, active_id: &str) -> Vec<NavItem> {
        registry
            .all()
            .iter()
            .map(|s| NavItem {
                label: s.label,
                path: s.path,
                active: s.anchor_id == active_id,
            })
            .collect()
    }

    #[must_use]
    /// The brand link, which always leads home.
    pub fn brand() -> NavItem {
        let owner = SectionRegistry::owner();
        NavItem {
            label: owner.split_whitespace().next().unwrap_or(owner),
            path: ROOT_PATH,
            active: false,
        }
    }

    #[must_use]
    /// Path of the section after the active one, if any.
    pub fn next_path(registry: &SectionRegistry, active_id: &str) -> Option<&'static str> {
        let index = registry.position(active_id)?;
        registry.all().get(index + 1).map(|s| s.path)
    }

    #[must_use]
    /// Path of the section before the active one, if any.
    pub fn prev_path(registry: &SectionRegistry, active_id: &str) -> Option<&'static str> {
        let index = registry.position(active_id)?;
        index
            .checked_sub(1)
            .and_then(|i| registry.all().get(i))
            .map(|s| s.path)
    }

    /// Requests navigation to `path`.
    pub fn request<R: Router>(router: &mut R, path: &str) {
        if router.current_path() == path {
            return;
        }
        router.navigate(path, NavigateOptions::default());
    }
}

#[cfg(test)]
#[path = "tests/nav.rs"]
mod tests;
