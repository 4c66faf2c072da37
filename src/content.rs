//! Static portfolio content rendered inside each section.

#[derive(Clone, Copy, Debug)]
/// A showcased project.
pub struct Project {
    /// Project name.
    pub name: &'static str,
    /// Main technologies.
    pub tech: &'static [&'static str],
    /// Source repository.
    pub repo: &'static str,
    /// Deployed instance.
    pub live: &'static str,
}

#[derive(Clone, Copy, Debug)]
/// A past or current position.
pub struct Role {
    /// Role title.
    pub role: &'static str,
    /// Employer.
    pub company: &'static str,
    /// Period held.
    pub period: &'static str,
}

#[derive(Clone, Copy, Debug)]
/// A completed course or certification.
pub struct Certificate {
    /// Certificate name.
    pub title: &'static str,
    /// Issuing organisation.
    pub issuer: &'static str,
    /// Year awarded.
    pub year: &'static str,
    /// Verification link.
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug)]
/// An external profile or contact link.
pub struct Link {
    /// Link caption.
    pub label: &'static str,
    /// Target URL.
    pub href: &'static str,
}

/// Headline shown above the name.
pub const HEADLINE: &str = "Full-Stack Developer";

/// Core stack shown under the name.
pub const STACK: &[&str] = &["React", "Node", "Postgres"];

/// Contact address, also the copy button's payload.
pub const EMAIL: &str = "ryan.arethusa@gmail.com";

/// Showcased projects.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "StackForge",
        tech: &["React", "Node"],
        repo: "https://github.com/arethusaryandhana/stackforge",
        live: "https://stackforge.example.com",
    },
    Project {
        name: "Orderly POS",
        tech: &["React", "Redis"],
        repo: "https://github.com/arethusaryandhana/orderly-pos",
        live: "https://orderly.example.com",
    },
    Project {
        name: "API Sentinel",
        tech: &["Node", "Postgres"],
        repo: "https://github.com/arethusaryandhana/api-sentinel",
        live: "https://sentinel.example.com",
    },
];

/// Work history, newest first.
pub const EXPERIENCE: &[Role] = &[
    Role {
        role: "Full-Stack",
        company: "TechNova",
        period: "2024-Now",
    },
    Role {
        role: "Backend",
        company: "CloudWorks",
        period: "2022-2024",
    },
    Role {
        role: "Frontend",
        company: "PixelCraft",
        period: "2021-2022",
    },
];

/// Technologies listed in the skills section.
pub const SKILLS: &[&str] = &["React", "TypeScript", "Node.js", "PostgreSQL", "Docker"];

/// Certifications, newest first.
pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Full-Stack Web Dev",
        issuer: "Coursera",
        year: "2024",
        href: "https://example.com/cert-1",
    },
    Certificate {
        title: "Cloud Fundamentals",
        issuer: "GCP",
        year: "2023",
        href: "https://example.com/cert-2",
    },
    Certificate {
        title: "System Design",
        issuer: "Udemy",
        year: "2022",
        href: "https://example.com/cert-3",
    },
];

/// Degree title.
pub const DEGREE: &str = "B.Sc. Computer Science";

/// Institution and period of study.
pub const DEGREE_DETAIL: &str = "Example University - 2019-2023";

/// External profiles.
pub const SOCIALS: &[Link] = &[
    Link {
        label: "GitHub",
        href: "https://github.com/arethusaryandhana",
    },
    Link {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/arethusa-aryandhana/",
    },
    Link {
        label: "Email",
        href: "mailto:ryan.arethusa@gmail.com",
    },
];
