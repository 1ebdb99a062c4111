#![forbid(unsafe_code)]

//! The open-tab list and its close semantics.
//!
//! A tab is a `(title, url)` pair where the url is path-only. The list is
//! ordered by first open, unique by url, and lives in per-session browser
//! storage between operations — there is no long-lived in-memory copy, so
//! every operation here is a pure transition on a freshly decoded list.
//!
//! # Design
//!
//! Closing is the only operation with a non-local outcome: closing the tab
//! for the page currently on screen has to send the user somewhere. That
//! decision is returned as a [`CloseOutcome`] instead of being performed
//! here, so the frontend applies it (navigate or just re-render) and the
//! rule stays natively testable.

use serde::{Deserialize, Serialize};

/// One open logical view: display title plus path-only url.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub title: String,
    pub url: String,
}

impl Tab {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// What the frontend must do after a close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The current page's tab was closed and another tab remains: navigate
    /// to the most recently opened survivor.
    NavigateTo(String),
    /// Re-render the strip; the content on screen stays as-is.
    RenderOnly,
}

/// Ordered, unique-by-url list of open tabs.
///
/// Serializes as a bare JSON array, matching the persisted session-storage
/// format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabList {
    tabs: Vec<Tab>,
}

impl TabList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view as open. Appends iff no entry has `url`; re-opening
    /// an existing url is a no-op that preserves the entry's position and
    /// title. Returns whether the list changed.
    pub fn open(&mut self, title: &str, url: &str) -> bool {
        if self.contains_url(url) {
            return false;
        }
        self.tabs.push(Tab::new(title, url));
        true
    }

    /// Close the tab for `url` and decide the follow-up.
    ///
    /// Removing a url that is not in the list is a no-op removal but still
    /// yields an outcome, so a stale strip can be re-rendered safely.
    pub fn close(&mut self, url: &str, current_path: &str) -> CloseOutcome {
        self.tabs.retain(|t| t.url != url);
        if url != current_path {
            return CloseOutcome::RenderOnly;
        }
        match self.tabs.last() {
            Some(next) => CloseOutcome::NavigateTo(next.url.clone()),
            None => CloseOutcome::RenderOnly,
        }
    }

    /// Close everything. The page on screen keeps its content; only the
    /// strip empties.
    pub fn close_all(&mut self) {
        self.tabs.clear();
    }

    /// Collapse the list to a single entry for the page on screen.
    pub fn close_others(&mut self, title: &str, current_path: &str) {
        self.tabs = vec![Tab::new(title, current_path)];
    }

    #[must_use]
    pub fn contains_url(&self, url: &str) -> bool {
        self.tabs.iter().any(|t| t.url == url)
    }

    /// Most recently opened tab, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Tab> {
        self.tabs.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl<'a> IntoIterator for &'a TabList {
    type Item = &'a Tab;
    type IntoIter = std::slice::Iter<'a, Tab>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[(&str, &str)]) -> TabList {
        let mut tabs = TabList::new();
        for (title, url) in entries {
            tabs.open(title, url);
        }
        tabs
    }

    // -- open --

    #[test]
    fn open_appends_in_order() {
        let tabs = list(&[("A", "/a"), ("B", "/b"), ("C", "/c")]);
        let urls: Vec<&str> = tabs.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, ["/a", "/b", "/c"]);
    }

    #[test]
    fn open_duplicate_url_is_a_noop() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b")]);
        assert!(!tabs.open("A renamed", "/a"));
        assert_eq!(tabs.len(), 2);
        // Position and title both survive.
        let first = tabs.iter().next().unwrap();
        assert_eq!(first.title, "A");
        assert_eq!(first.url, "/a");
    }

    // -- close --

    #[test]
    fn close_only_entry_empties_without_navigation() {
        let mut tabs = list(&[("A", "/a")]);
        let outcome = tabs.close("/a", "/a");
        assert_eq!(outcome, CloseOutcome::RenderOnly);
        assert!(tabs.is_empty());
    }

    #[test]
    fn close_current_falls_back_to_last_remaining() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b")]);
        let outcome = tabs.close("/b", "/b");
        assert_eq!(outcome, CloseOutcome::NavigateTo("/a".into()));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn close_current_prefers_most_recently_opened() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b"), ("C", "/c")]);
        let outcome = tabs.close("/b", "/b");
        assert_eq!(outcome, CloseOutcome::NavigateTo("/c".into()));
    }

    #[test]
    fn close_background_tab_only_rerenders() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b")]);
        let outcome = tabs.close("/a", "/b");
        assert_eq!(outcome, CloseOutcome::RenderOnly);
        assert!(!tabs.contains_url("/a"));
        assert!(tabs.contains_url("/b"));
    }

    #[test]
    fn close_unknown_url_is_noop_removal() {
        let mut tabs = list(&[("A", "/a")]);
        let outcome = tabs.close("/zzz", "/a");
        assert_eq!(outcome, CloseOutcome::RenderOnly);
        assert_eq!(tabs.len(), 1);
    }

    // -- bulk actions --

    #[test]
    fn close_all_clears() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b")]);
        tabs.close_all();
        assert!(tabs.is_empty());
    }

    #[test]
    fn close_others_collapses_to_current() {
        let mut tabs = list(&[("A", "/a"), ("B", "/b"), ("C", "/c")]);
        tabs.close_others("B", "/b");
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs.last().unwrap(), &Tab::new("B", "/b"));
    }

    #[test]
    fn close_others_registers_current_even_if_untracked() {
        let mut tabs = list(&[("A", "/a")]);
        tabs.close_others("Untracked", "/u");
        assert_eq!(tabs.len(), 1);
        assert!(tabs.contains_url("/u"));
    }
}
