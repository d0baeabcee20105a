//! Content entities.
//!
//! Every entity is a `'static` literal: defined once, never mutated, never persisted.
//! Category fields are free-form tags resolved through a [`StyleTable`](crate::StyleTable).

use crate::anchors::Anchor;
use crate::style::{Icon, Tone};

/// A navigation menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: Anchor,
    pub label: &'static str,
}

/// A way to reach the portfolio owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    /// Free-text range, e.g. `2024.09 – 2025.03`.
    pub period: &'static str,
    pub location: &'static str,
    /// Category tag (`Freelance`, `Internship`, ...).
    pub kind: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub period: &'static str,
    /// Who the work was for; shown on featured cards, omitted when empty.
    pub client: &'static str,
    pub role: &'static str,
    pub stack: &'static [&'static str],
    pub url: &'static str,
    pub summary: &'static str,
    /// Category tag (`blockchain`, `fullstack`, `backend`, ...).
    pub category: &'static str,
    pub featured: bool,
}

impl Project {
    /// The first `limit` stack tags and how many were left out.
    #[must_use]
    pub fn stack_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let shown = self.stack.len().min(limit);
        (&self.stack[..shown], self.stack.len() - shown)
    }

    /// Splits projects into `(featured, other)`, both in table order.
    #[must_use]
    pub fn partition(projects: &[Self]) -> (Vec<&Self>, Vec<&Self>) {
        projects.iter().partition(|p| p.featured)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub tone: Tone,
    pub skills: &'static [&'static str],
}

/// A short "what I do" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A big headline with a caption underneath (key achievements, proficiency tiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub headline: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub details: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn project(title: &'static str, featured: bool, stack: &'static [&'static str]) -> Project {
        Project {
            title,
            subtitle: "",
            period: "",
            client: "",
            role: "",
            stack,
            url: "https://example.com",
            summary: "",
            category: "backend",
            featured,
        }
    }

    #[test]
    fn stack_preview_reports_overflow() {
        let p = project("a", true, &["Rust", "Dioxus", "Wasm", "Tokio", "Serde"]);
        let (shown, rest) = p.stack_preview(3);
        assert_eq!(shown, &["Rust", "Dioxus", "Wasm"]);
        assert_eq!(rest, 2);

        let short = project("b", true, &["Rust"]);
        assert_eq!(short.stack_preview(3), (&["Rust"][..], 0));
    }

    #[test]
    fn partition_keeps_table_order() {
        let table = [project("a", true, &[]), project("b", false, &[]), project("c", true, &[])];
        let (featured, other) = Project::partition(&table);
        let titles: Vec<_> = featured.iter().map(|p| p.title).collect();
        assert_eq!(titles, ["a", "c"]);
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].title, "b");

        let (featured, other) = Project::partition(&[]);
        assert!(featured.is_empty() && other.is_empty());
    }
}
