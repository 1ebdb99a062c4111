#![forbid(unsafe_code)]

//! Light/dark display mode.
//!
//! The mode lives in three places that must agree: the document root's
//! `data-layout-mode` attribute (styling), a durable storage key (reload
//! persistence), and a same-named cookie (so the server can render the right
//! mode on a full page load). This module owns the value and its string
//! forms; the frontend owns the writes.

/// The document-wide presentation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Default when nothing is stored and the root attribute is unset.
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The literal persisted in storage, the cookie, and the root attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Unknown strings return `None` so
    /// callers can fall through to whatever the server rendered.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Interpret the document root attribute: only an explicit `"dark"`
    /// counts as dark, anything else (including unset) is light.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The complement, as computed by the toggle control.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
