//! Data types for the page content.
//!
//! Everything here is literal and immutable: profiles and projects are
//! `&'static` records declared in [`crate::content`], colours are plain
//! values rendered straight into inline styles.

use std::fmt;

/// An RGBA colour, rendered as CSS `rgba(r, g, b, a)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// In-page navigation targets, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    About,
    Contact,
}

impl Section {
    /// All sections the header links to.
    pub const ALL: [Section; 3] = [Section::Projects, Section::About, Section::Contact];

    /// Element id of the section.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Same-page link to the section.
    pub const fn href(self) -> &'static str {
        match self {
            Section::Projects => "#projects",
            Section::About => "#about",
            Section::Contact => "#contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

/// Icon size for social links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    /// 24px, used in the hero.
    #[default]
    Regular,
    /// 32px, used in the contact section.
    Large,
}

impl IconSize {
    pub const fn pixels(self) -> u32 {
        match self {
            IconSize::Regular => 24,
            IconSize::Large => 32,
        }
    }
}

/// An outline icon on a 24x24 grid, drawn as stroked paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub paths: &'static [&'static str],
}

/// An external profile the page links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialProfile {
    /// Human readable network name, also used as the link's `aria-label`.
    pub name: &'static str,
    pub url: &'static str,
    pub glyph: Glyph,
}

/// A showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}
