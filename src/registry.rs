//! Ordered lookup table of every section on the page.
//!
//! Definition order doubles as the expected top-to-bottom layout order. The tracker relies on it
//! only as a stable iteration order (ties in the proximity scan go to the earlier section), never
//! as a ranking.

use std::collections::{HashMap, HashSet};

use crate::error::RegistryError;
use crate::section::{Section, SectionKey};

/// Route path every unknown path degrades to.
pub const ROOT_PATH: &str = "/";

const OWNER: &str = "Arethusa Aryandhana";

const PORTFOLIO: [Section; 8] = [
    Section::new(
        SectionKey::Top,
        "/",
        "top",
        "Home",
        "Arethusa Aryandhana | Full-Stack Developer",
    ),
    Section::new(
        SectionKey::Projects,
        "/projects",
        "projects",
        "Projects",
        "Projects | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Experience,
        "/experience",
        "experience",
        "Experience",
        "Experience | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Skills,
        "/skills",
        "skills",
        "Skills",
        "Skills | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Certificates,
        "/certificates",
        "certificates",
        "Certificates",
        "Certificates | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Education,
        "/education",
        "education",
        "Education",
        "Education | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Contact,
        "/contact-person",
        "contact",
        "Contact",
        "Contact | Arethusa Aryandhana",
    ),
    Section::new(
        SectionKey::Social,
        "/social-media",
        "social",
        "Social",
        "Social | Arethusa Aryandhana",
    ),
];

#[derive(Clone, Debug)]
/// Ordered sections plus the derived `path -> section` index.
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_path: HashMap<&'static str, usize>,
    root: usize,
}

impl SectionRegistry {
    /// Validates a section table and builds the path index.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is relative, if a path or anchor id repeats, or if no
    /// section is registered for [`ROOT_PATH`].
    pub fn new(sections: Vec<Section>) -> Result<Self, RegistryError> {
        let mut by_path = HashMap::with_capacity(sections.len());
        let mut anchors = HashSet::with_capacity(sections.len());

        for (index, section) in sections.iter().enumerate() {
            if !section.path.starts_with('/') {
                return Err(RegistryError::RelativePath(section.path.to_string()));
            }
            if by_path.insert(section.path, index).is_some() {
                return Err(RegistryError::DuplicatePath(section.path.to_string()));
            }
            if !anchors.insert(section.anchor_id) {
                return Err(RegistryError::DuplicateAnchor(section.anchor_id.to_string()));
            }
        }

        let root = *by_path.get(ROOT_PATH).ok_or(RegistryError::MissingRoot)?;

        Ok(Self {
            sections,
            by_path,
            root,
        })
    }

    #[must_use]
    /// The eight sections of the built-in portfolio page.
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in table is covered by tests.
    pub fn portfolio() -> Self {
        Self::new(PORTFOLIO.to_vec()).expect("built-in section table is valid")
    }

    #[must_use]
    /// Name of the person the built-in page presents.
    pub fn owner() -> &'static str {
        OWNER
    }

    #[must_use]
    /// Returns the section registered for `path`, or the root section when there is none.
    pub fn resolve_by_path(&self, path: &str) -> &Section {
        let index = self.by_path.get(path).copied().unwrap_or(self.root);
        &self.sections[index]
    }

    #[must_use]
    /// Whether `path` is registered exactly.
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    #[must_use]
    /// All sections in definition order.
    pub fn all(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// The section registered for [`ROOT_PATH`].
    pub fn root(&self) -> &Section {
        &self.sections[self.root]
    }

    #[must_use]
    /// Looks a section up by its anchor id.
    pub fn by_anchor(&self, anchor_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor_id == anchor_id)
    }

    #[must_use]
    /// Position of the section with `anchor_id` in definition order.
    pub fn position(&self, anchor_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.anchor_id == anchor_id)
    }

    #[must_use]
    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// Always false for a validated registry, which holds at least the root section.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;
