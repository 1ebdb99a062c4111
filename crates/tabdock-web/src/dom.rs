#![forbid(unsafe_code)]

//! Browser plumbing shared by the controllers.
//!
//! Thin wrappers over `web-sys` with the failure posture the shell wants:
//! storage and cookie writes are fire-and-forget, reads collapse to `Option`
//! through `.ok().flatten()` chains, and a page without the expected anchors
//! simply yields `None` so callers can degrade to inert.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDocument, HtmlElement, Storage};

pub(crate) fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(crate) fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// The `<html>` element carrying the display-mode attribute.
pub(crate) fn document_root() -> Option<Element> {
    document().and_then(|d| d.document_element())
}

pub(crate) fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(crate) fn page_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub(crate) fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full browser navigation; the page unloads.
pub(crate) fn full_navigate(url: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(url);
    }
}

// ── Storage ─────────────────────────────────────────────────────

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<Storage> {
    window().and_then(|w| w.session_storage().ok().flatten())
}

pub(crate) fn local_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(crate) fn local_set(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

pub(crate) fn session_get(key: &str) -> Option<String> {
    session_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(crate) fn session_set(key: &str, value: &str) {
    if let Some(s) = session_storage() {
        let _ = s.set_item(key, value);
    }
}

/// Write a cookie assignment (`name=value;path=/`).
pub(crate) fn set_cookie(assignment: &str) {
    let Some(doc) = document() else {
        return;
    };
    let Ok(html_doc) = doc.dyn_into::<HtmlDocument>() else {
        return;
    };
    let _ = html_doc.set_cookie(assignment);
}

// ── Host hooks ──────────────────────────────────────────────────

/// Invoke the page's icon-replacement hook (`feather.replace()`) if one is
/// installed. Icons inside freshly swapped content need re-materializing.
pub(crate) fn invoke_icon_hook() {
    let global = js_sys::global();
    let Ok(feather) = Reflect::get(&global, &"feather".into()) else {
        return;
    };
    if feather.is_undefined() || feather.is_null() {
        return;
    }
    let Ok(replace) = Reflect::get(&feather, &"replace".into()) else {
        return;
    };
    let Ok(replace_fn) = replace.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = replace_fn.call0(&feather);
}

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

pub(crate) fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            // A panic in event glue would otherwise vanish silently.
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}
