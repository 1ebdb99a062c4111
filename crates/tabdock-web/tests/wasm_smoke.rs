//! Browser smoke tests for the strip markup against a real DOM.
//!
//! Run with `wasm-pack test --headless --firefox crates/tabdock-web`.

#![cfg(target_arch = "wasm32")]

use tabdock_core::tabs::TabList;
use tabdock_web::strip::{CLOSE_URL_ATTR, strip_html};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(tabs: &TabList, active: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let ul = document.create_element("ul").unwrap();
    ul.set_inner_html(&strip_html(tabs, active));
    ul
}

#[wasm_bindgen_test]
fn strip_parses_into_list_items() {
    let mut tabs = TabList::new();
    tabs.open("Dashboard", "/dashboard/");
    tabs.open("Ledger", "/accounting/ledger/");
    let ul = mount(&tabs, "/dashboard/");

    let active = ul.query_selector("a.nav-link.active").unwrap().unwrap();
    assert_eq!(active.get_attribute("href").unwrap(), "/dashboard/");

    let close = ul
        .query_selector(&format!("[{CLOSE_URL_ATTR}='/accounting/ledger/']"))
        .unwrap();
    assert!(close.is_some());
}

#[wasm_bindgen_test]
fn hostile_title_stays_text() {
    let mut tabs = TabList::new();
    tabs.open("<img src=x onerror=boom()>", "/x");
    let ul = mount(&tabs, "/x");

    // The escaped title must not materialize as an element.
    assert!(ul.query_selector("img").unwrap().is_none());
    let anchor = ul.query_selector("a").unwrap().unwrap();
    assert!(anchor.text_content().unwrap().contains("<img"));
}
