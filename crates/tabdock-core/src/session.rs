#![forbid(unsafe_code)]

//! Persistence codec and key names for browser storage.
//!
//! The tab list is stored as a JSON array under [`OPEN_TABS_KEY`] in
//! per-session storage; the display mode is stored as a bare literal under
//! [`THEME_KEY`] in durable storage and mirrored into a cookie of the same
//! name so server-rendered pages come back in the right mode.
//!
//! Storage writes are treated as infallible by the frontend. Reads are not:
//! a session key can hold anything, so decoding returns a typed error and
//! callers degrade to an empty list.

use crate::display_mode::DisplayMode;
use crate::tabs::TabList;

/// Durable storage key (and cookie name) for the display mode.
pub const THEME_KEY: &str = "theme";

/// Session storage key for the serialized tab list.
pub const OPEN_TABS_KEY: &str = "openTabs";

/// Errors from decoding the persisted tab list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStoreError {
    /// Malformed or mistyped JSON under the session key.
    Json(String),
}

impl core::fmt::Display for TabStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "tab store JSON error: {msg}"),
        }
    }
}

impl std::error::Error for TabStoreError {}

/// Serialize the tab list for session storage.
///
/// `TabList` serialization is infallible (strings and a sequence), so this
/// returns the encoded string directly.
#[must_use]
pub fn encode_tabs(tabs: &TabList) -> String {
    serde_json::to_string(tabs).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a session-storage value into a tab list.
///
/// `None` (key absent) decodes to the empty list, matching a fresh session.
pub fn decode_tabs(raw: Option<&str>) -> Result<TabList, TabStoreError> {
    match raw {
        None => Ok(TabList::new()),
        Some(s) => serde_json::from_str(s).map_err(|e| TabStoreError::Json(e.to_string())),
    }
}

/// Cookie assignment mirroring the stored display mode, scoped to the whole
/// site. No expiry: a session cookie.
#[must_use]
pub fn theme_cookie(mode: DisplayMode) -> String {
    format!("{THEME_KEY}={};path=/", mode.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
