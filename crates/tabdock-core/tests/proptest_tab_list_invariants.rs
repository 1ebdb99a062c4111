//! Property-based invariant tests for the open-tab list.
//!
//! Verifies:
//! 1. No sequence of opens yields two entries with equal url
//! 2. Re-opening an existing url changes neither position nor title
//! 3. Opens preserve first-open order
//! 4. close removes exactly the matching url
//! 5. Closing the current url with survivors navigates to the last survivor
//! 6. close_all always yields the empty list
//! 7. Encode/decode through the session codec preserves the list
//! 8. Decode never panics on arbitrary input

use proptest::prelude::*;
use tabdock_core::session::{decode_tabs, encode_tabs};
use tabdock_core::tabs::{CloseOutcome, TabList};

fn url_strategy() -> impl Strategy<Value = String> {
    // Small url alphabet so duplicates actually occur.
    prop::sample::select(vec![
        "/".to_string(),
        "/a".to_string(),
        "/b".to_string(),
        "/accounting/".to_string(),
        "/dashboard/".to_string(),
        "/users/42/".to_string(),
    ])
}

fn open_sequence() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Z][a-z]{0,8}", url_strategy()), 0..=20)
}

fn build(seq: &[(String, String)]) -> TabList {
    let mut tabs = TabList::new();
    for (title, url) in seq {
        tabs.open(title, url);
    }
    tabs
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Urls are unique
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn urls_are_unique(seq in open_sequence()) {
        let tabs = build(&seq);
        let mut seen = std::collections::HashSet::new();
        for tab in &tabs {
            prop_assert!(seen.insert(tab.url.clone()), "duplicate url: {}", tab.url);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Re-open preserves position and title
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reopen_preserves_position_and_title(
        seq in open_sequence(),
        title in "[A-Z][a-z]{0,8}",
        url in url_strategy(),
    ) {
        let mut tabs = build(&seq);
        let before: Vec<_> = tabs.iter().cloned().collect();
        if tabs.contains_url(&url) {
            let changed = tabs.open(&title, &url);
            let after: Vec<_> = tabs.iter().cloned().collect();
            prop_assert!(!changed);
            prop_assert_eq!(before, after);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. First-open order is preserved
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn first_open_order_is_preserved(seq in open_sequence()) {
        let tabs = build(&seq);
        // Expected order: urls by first occurrence in the sequence.
        let mut expected = Vec::new();
        for (_, url) in &seq {
            if !expected.contains(url) {
                expected.push(url.clone());
            }
        }
        let actual: Vec<String> = tabs.iter().map(|t| t.url.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. close removes exactly the matching url
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn close_removes_exactly_the_url(
        seq in open_sequence(),
        url in url_strategy(),
        current in url_strategy(),
    ) {
        let mut tabs = build(&seq);
        let before: Vec<_> = tabs.iter().cloned().collect();
        let _ = tabs.close(&url, &current);
        let after: Vec<_> = tabs.iter().cloned().collect();
        let expected: Vec<_> = before.into_iter().filter(|t| t.url != url).collect();
        prop_assert_eq!(after, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Closing the current url navigates to the last survivor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn closing_current_navigates_to_last_survivor(seq in open_sequence(), url in url_strategy()) {
        let mut tabs = build(&seq);
        let outcome = tabs.close(&url, &url);
        match outcome {
            CloseOutcome::NavigateTo(next) => {
                let last = tabs.last().expect("survivors exist when navigating");
                prop_assert_eq!(&next, &last.url);
                prop_assert_ne!(next, url);
            }
            CloseOutcome::RenderOnly => prop_assert!(tabs.is_empty()),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. close_all empties the list
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn close_all_empties(seq in open_sequence()) {
        let mut tabs = build(&seq);
        tabs.close_all();
        prop_assert!(tabs.is_empty());
        prop_assert_eq!(encode_tabs(&tabs), "[]");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Session codec preserves the list
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn codec_preserves_list(seq in open_sequence()) {
        let tabs = build(&seq);
        let decoded = decode_tabs(Some(&encode_tabs(&tabs))).expect("own encoding decodes");
        prop_assert_eq!(decoded, tabs);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Decode never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn decode_never_panics(raw in ".{0,64}") {
        let _ = decode_tabs(Some(&raw));
    }
}
