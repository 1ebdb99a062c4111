#![forbid(unsafe_code)]

//! Tab-strip markup rendering.
//!
//! The strip is rebuilt wholesale on every change: the frontend sets the tab
//! bar's innerHTML to the output of [`strip_html`]. Close affordances carry
//! their tab's url in a data attribute so a single delegated click listener
//! can route them; the anchors themselves go through the normal link
//! interception path.
//!
//! Pure string-to-string so it runs under native tests; titles come from
//! server-controlled documents but are escaped anyway since they pass
//! through innerHTML.

use tabdock_core::tabs::TabList;

/// Data attribute carrying the close target url on each close affordance.
pub const CLOSE_URL_ATTR: &str = "data-close-url";

/// Render the full strip for `tabs`, marking the entry for `active_url`.
#[must_use]
pub fn strip_html(tabs: &TabList, active_url: &str) -> String {
    let mut html = String::new();
    for tab in tabs {
        let class = if tab.url == active_url {
            "nav-link active"
        } else {
            "nav-link"
        };
        let url = escape_html(&tab.url);
        html.push_str(&format!(
            "<li class=\"nav-item\"><a class=\"{class}\" href=\"{url}\">{title}\
             <button type=\"button\" class=\"ms-1 btn-close\" {CLOSE_URL_ATTR}=\"{url}\">\u{d7}</button>\
             </a></li>",
            title = escape_html(&tab.title),
        ));
    }
    html
}

/// Minimal HTML entity escaping for text and double-quoted attribute
/// positions.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
