#![forbid(unsafe_code)]

//! Navigation sequencing and path reduction.
//!
//! Fragment navigation suspends at one fetch. A user can click again before
//! the first response lands, so each `navigate` call takes a token from the
//! [`NavSequencer`] and re-checks it when its fetch settles: only the latest
//! issued token may touch the DOM, history, or the tab list. Stale
//! completions are dropped wholesale.
//!
//! History entries and tab urls are path-only, so this module also reduces
//! an anchor's resolved href to its path.

/// Token identifying one `navigate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken(u64);

/// Issues monotonically increasing [`NavToken`]s; the newest one wins.
#[derive(Debug, Default)]
pub struct NavSequencer {
    latest: u64,
}

impl NavSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation: the returned token supersedes all earlier ones.
    pub fn issue(&mut self) -> NavToken {
        self.latest = self.latest.wrapping_add(1);
        NavToken(self.latest)
    }

    /// Whether `token` is still the latest issued.
    #[must_use]
    pub fn is_current(&self, token: NavToken) -> bool {
        token.0 == self.latest
    }
}

/// Reduce an href to its path-only form.
///
/// Accepts either an absolute same-origin url (origin prefix stripped) or an
/// already-relative path. Query and fragment are cut; an empty result maps
/// to `/`.
#[must_use]
pub fn path_of(href: &str, page_origin: &str) -> String {
    let relative = href.strip_prefix(page_origin).unwrap_or(href);
    let before_query = relative.split('?').next().unwrap_or(relative);
    let path = before_query.split('#').next().unwrap_or(before_query);
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
