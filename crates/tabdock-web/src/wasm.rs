#![forbid(unsafe_code)]

//! `wasm-bindgen` exports: module start, boot, and the global tab actions.
//!
//! Only compiled on `wasm32` targets. The host page calls [`boot`] once the
//! DOM is ready; the close actions back the page's tab-bar menu entries.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use tabdock_core::config::ShellConfig;

use crate::{dom, overlay, shell, theme};

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    dom::install_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Attach the theme, overlay, and tab-shell controllers to the page.
///
/// Call once the DOM is ready. Repeat calls are no-ops; controllers whose
/// anchor elements are missing stay inert.
#[wasm_bindgen]
pub fn boot() {
    if BOOTED.with(Cell::get) {
        return;
    }
    BOOTED.with(|b| b.set(true));

    let cfg = Rc::new(ShellConfig::default());
    theme::attach(cfg.clone());
    overlay::attach(cfg.clone());
    shell::attach(cfg);
}

/// Close the tab for the page currently on screen.
#[wasm_bindgen(js_name = closeCurrentTab)]
pub fn close_current_tab() {
    shell::close_tab(&dom::current_pathname());
}

/// Close every tab. The strip empties; the content on screen stays put.
#[wasm_bindgen(js_name = closeAllTabs)]
pub fn close_all_tabs() {
    shell::close_all();
}

/// Collapse the strip to just the current page.
#[wasm_bindgen(js_name = closeOtherTabs)]
pub fn close_other_tabs() {
    shell::close_others();
}
