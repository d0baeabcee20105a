//! Display styles for category tags.
//!
//! Each section owns a small fixed [`StyleTable`] mapping its category tags to an icon and
//! a tone. Lookups are total: a tag missing from the table resolves to the table fallback.

use strum_macros::{AsRefStr, Display, EnumString};

/// Icons the page draws. Rendering lives in the UI crate; the domain only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Building,
    Calendar,
    ChevronDown,
    Code,
    Database,
    ExternalLink,
    Github,
    Globe,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Send,
    Users,
    Wrench,
    Zap,
}

/// Semantic colour of a badge, card or icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tone {
    Primary,
    Accent,
    Secondary,
    #[default]
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeStyle {
    pub icon: Icon,
    pub tone: Tone,
}

impl BadgeStyle {
    #[must_use]
    pub const fn new(icon: Icon, tone: Tone) -> Self {
        Self { icon, tone }
    }
}

/// A fixed category tag → style mapping with a fallback.
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    entries: &'static [(&'static str, BadgeStyle)],
    fallback: BadgeStyle,
}

impl StyleTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, BadgeStyle)], fallback: BadgeStyle) -> Self {
        Self { entries, fallback }
    }

    /// Resolves `tag` (ASCII case-insensitive). Unknown tags get the fallback style.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> BadgeStyle {
        self.entries
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(tag.trim()))
            .map_or(self.fallback, |(_, style)| *style)
    }

    #[must_use]
    pub const fn fallback(&self) -> BadgeStyle {
        self.fallback
    }

    /// Whether `tag` has a dedicated entry.
    #[must_use]
    pub fn knows(&self, tag: &str) -> bool {
        self.entries.iter().any(|(known, _)| known.eq_ignore_ascii_case(tag.trim()))
    }
}
