#![forbid(unsafe_code)]

//! Theme controller: the display mode on the document root.
//!
//! Three duties, all around one attribute:
//!
//! - on attach, apply the stored preference (no-op when nothing is stored —
//!   the server-rendered attribute stands);
//! - on toggle-control clicks, complement the attribute and persist the new
//!   mode to durable storage and the site cookie;
//! - before every fragment swap, force the attribute back to the stored
//!   preference so an incoming fragment's default mode cannot flash.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use tabdock_core::config::ShellConfig;
use tabdock_core::display_mode::DisplayMode;
use tabdock_core::session::{self, THEME_KEY};

use crate::dom;

thread_local! {
    static TOGGLE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> =
        const { RefCell::new(None) };
    static BEFORE_SWAP_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> =
        const { RefCell::new(None) };
}

/// Apply the stored preference and wire the toggle + pre-swap listeners.
pub(crate) fn attach(cfg: Rc<ShellConfig>) {
    apply_stored(&cfg);

    let Some(doc) = dom::document() else {
        return;
    };

    if let Ok(Some(toggle)) = doc.query_selector(&cfg.theme_toggle_selector) {
        TOGGLE_HANDLER.with(|slot| {
            if slot.borrow().is_some() {
                return;
            }
            let cfg = cfg.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                toggle_mode(&cfg);
            }));
            let _ =
                toggle.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            *slot.borrow_mut() = Some(callback);
        });
    }

    let Some(body) = dom::body() else {
        return;
    };
    BEFORE_SWAP_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            reapply_stored(&cfg);
        }));
        let _ = body
            .add_event_listener_with_callback("htmx:beforeSwap", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

/// On page ready: only an explicitly stored preference overrides whatever
/// the server rendered.
fn apply_stored(cfg: &ShellConfig) {
    let Some(stored) = dom::local_get(THEME_KEY) else {
        return;
    };
    let Some(mode) = DisplayMode::parse(&stored) else {
        return;
    };
    set_mode_attr(cfg, mode);
}

/// Pre-swap: force the attribute to the stored preference, defaulting light.
fn reapply_stored(cfg: &ShellConfig) {
    let mode = dom::local_get(THEME_KEY)
        .and_then(|s| DisplayMode::parse(&s))
        .unwrap_or_default();
    set_mode_attr(cfg, mode);
}

/// Complement the current attribute and persist everywhere.
fn toggle_mode(cfg: &ShellConfig) {
    let Some(root) = dom::document_root() else {
        return;
    };
    let current = DisplayMode::from_attr(root.get_attribute(&cfg.mode_attr).as_deref());
    let next = current.toggled();
    let _ = root.set_attribute(&cfg.mode_attr, next.as_str());
    dom::local_set(THEME_KEY, next.as_str());
    dom::set_cookie(&session::theme_cookie(next));
    log::debug!("display mode toggled to {}", next.as_str());
}

fn set_mode_attr(cfg: &ShellConfig, mode: DisplayMode) {
    if let Some(root) = dom::document_root() {
        let _ = root.set_attribute(&cfg.mode_attr, mode.as_str());
    }
}
