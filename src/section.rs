//! Section representation for the portfolio page.
//!
//! A section is one screen-sized division of the page, addressable both by a route path
//! (`/projects`) and by the anchor it occupies in the scroll container (`projects`). Sections
//! are built once from a static table and never change afterwards.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Stable identity of a portfolio section.
pub enum SectionKey {
    /// Landing section with name and headline.
    Top,
    /// Selected projects.
    Projects,
    /// Work history.
    Experience,
    /// Technology list.
    Skills,
    /// Courses and certifications.
    Certificates,
    /// Degrees.
    Education,
    /// Email address and copy action.
    Contact,
    /// Links to external profiles.
    Social,
}

impl SectionKey {
    #[must_use]
    /// Lowercase name used in logs and as the default anchor id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Certificates => "certificates",
            Self::Education => "education",
            Self::Contact => "contact",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Immutable record tying a route path to an anchor in the scroll container.
pub struct Section {
    /// Identity of the section.
    pub key: SectionKey,
    /// Route path that selects this section, always starting with `/`.
    pub path: &'static str,
    /// Anchor identifier inside the scroll container.
    pub anchor_id: &'static str,
    /// Short label shown in navigation.
    pub label: &'static str,
    /// Window title applied when the route selects this section.
    pub title: &'static str,
}

impl Section {
    #[must_use]
    /// Builds a section record.
    pub const fn new(
        key: SectionKey,
        path: &'static str,
        anchor_id: &'static str,
        label: &'static str,
        title: &'static str,
    ) -> Self {
        Self {
            key,
            path,
            anchor_id,
            label,
            title,
        }
    }
}
