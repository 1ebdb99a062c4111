#![forbid(unsafe_code)]

//! DOM anchors and wire constants for the frontend.
//!
//! Everything the frontend needs to find on (or send from) the page lives in
//! one struct, so the controllers own no string literals and a host page
//! with different markup can re-anchor the shell without code changes. The
//! `Default` carries the production values.

/// Page contract: element anchors, attribute names, and the fragment-mode
/// request header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Element id of the tab strip container.
    pub tab_bar_id: String,

    /// Selector for the swappable content region, in both the live page and
    /// fetched fragment documents.
    pub content_selector: String,

    /// Element id of the loading overlay.
    pub overlay_id: String,

    /// Class toggled on the overlay while requests are pending.
    pub overlay_visible_class: String,

    /// Selector for the display-mode toggle control.
    pub theme_toggle_selector: String,

    /// Attribute on the document root carrying the display mode.
    pub mode_attr: String,

    /// Header marking a fetch as a fragment request so the server renders a
    /// partial page.
    pub fragment_header_name: String,
    pub fragment_header_value: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tab_bar_id: "open-tabs".to_string(),
            content_selector: ".main-content".to_string(),
            overlay_id: "loading-overlay".to_string(),
            overlay_visible_class: "show".to_string(),
            theme_toggle_selector: ".theme-toggle".to_string(),
            mode_attr: "data-layout-mode".to_string(),
            fragment_header_name: "X-Requested-With".to_string(),
            fragment_header_value: "XMLHttpRequest".to_string(),
        }
    }
}
