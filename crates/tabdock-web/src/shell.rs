#![forbid(unsafe_code)]

//! Tab navigation controller: the strip, link interception, and
//! fragment navigation.
//!
//! # Design
//!
//! One [`ShellState`] is constructed at boot and owns the controller's DOM
//! anchors: the tab bar, the current content region (retargeted after every
//! swap), and the navigation sequencer. If either anchor is missing from
//! the page the controller is inert — no listeners, no state.
//!
//! Navigation is fetch-and-swap: request the url in fragment mode, pick the
//! content region out of the parsed response, and splice it over the live
//! one. Two degradations fall back to a full page load — a response without
//! the content region, and a failed fetch. A token from the sequencer is
//! re-checked when each fetch settles so an overtaken navigation is dropped
//! without touching the DOM, history, or the tab list.
//!
//! The document-level click listener handles both jobs on the strip: close
//! affordances (matched by their data attribute anywhere in the composed
//! path) and ordinary anchors, which go through the link policy like any
//! other link on the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    DomParser, Element, Headers, HtmlAnchorElement, Request, RequestInit, Response, SupportedType,
};

use tabdock_core::config::ShellConfig;
use tabdock_core::link_policy::{self, LinkProbe};
use tabdock_core::navigation::{self, NavSequencer, NavToken};
use tabdock_core::session::{self, OPEN_TABS_KEY};
use tabdock_core::tabs::{CloseOutcome, TabList};

use crate::dom;
use crate::strip::{self, CLOSE_URL_ATTR};

struct ShellState {
    cfg: Rc<ShellConfig>,
    tab_bar: Element,
    /// The live content region; retargeted after every swap.
    content: Element,
    nav: NavSequencer,
}

thread_local! {
    static SHELL: RefCell<Option<ShellState>> = const { RefCell::new(None) };
    static CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> =
        const { RefCell::new(None) };
    static POPSTATE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> =
        const { RefCell::new(None) };
}

/// Register the current document as a tab, render the strip, and wire the
/// listeners. Inert when the page lacks the tab bar or content region.
pub(crate) fn attach(cfg: Rc<ShellConfig>) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(tab_bar) = doc.get_element_by_id(&cfg.tab_bar_id) else {
        log::debug!("no #{} on this page; tab shell inert", cfg.tab_bar_id);
        return;
    };
    let Some(content) = doc.query_selector(&cfg.content_selector).ok().flatten() else {
        log::debug!(
            "no {} region on this page; tab shell inert",
            cfg.content_selector
        );
        return;
    };

    let installed = SHELL.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(ShellState {
            cfg,
            tab_bar,
            content,
            nav: NavSequencer::new(),
        });
        true
    });
    if !installed {
        return;
    }

    // The page we landed on is a tab, always, before any interception.
    let current = dom::current_pathname();
    let mut tabs = load_tabs();
    tabs.open(&doc.title(), &current);
    save_tabs(&tabs);
    render_strip(&tabs, &current);

    wire_click_interception();
    wire_popstate();
}

// ── Persistence ─────────────────────────────────────────────────

fn load_tabs() -> TabList {
    match session::decode_tabs(dom::session_get(OPEN_TABS_KEY).as_deref()) {
        Ok(tabs) => tabs,
        Err(err) => {
            log::warn!("discarding undecodable tab list: {err}");
            TabList::new()
        }
    }
}

fn save_tabs(tabs: &TabList) {
    dom::session_set(OPEN_TABS_KEY, &session::encode_tabs(tabs));
}

fn render_strip(tabs: &TabList, active_url: &str) {
    SHELL.with(|slot| {
        if let Some(state) = slot.borrow().as_ref() {
            state
                .tab_bar
                .set_inner_html(&strip::strip_html(tabs, active_url));
        }
    });
}

fn attached() -> bool {
    SHELL.with(|slot| slot.borrow().is_some())
}

// ── Close actions ───────────────────────────────────────────────

pub(crate) fn close_tab(url: &str) {
    if !attached() {
        return;
    }
    let current = dom::current_pathname();
    let mut tabs = load_tabs();
    let outcome = tabs.close(url, &current);
    save_tabs(&tabs);
    match outcome {
        CloseOutcome::NavigateTo(next) => navigate(&next, true),
        CloseOutcome::RenderOnly => render_strip(&tabs, &current),
    }
}

pub(crate) fn close_all() {
    if !attached() {
        return;
    }
    let mut tabs = load_tabs();
    tabs.close_all();
    save_tabs(&tabs);
    render_strip(&tabs, &dom::current_pathname());
}

pub(crate) fn close_others() {
    let Some(doc) = dom::document() else {
        return;
    };
    if !attached() {
        return;
    }
    let current = dom::current_pathname();
    let mut tabs = load_tabs();
    tabs.close_others(&doc.title(), &current);
    save_tabs(&tabs);
    render_strip(&tabs, &current);
}

// ── Event wiring ────────────────────────────────────────────────

fn wire_click_interception() {
    let Some(body) = dom::body() else {
        return;
    };
    CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(on_document_click));
        let _ = body.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

fn wire_popstate() {
    let Some(window) = dom::window() else {
        return;
    };
    POPSTATE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            // Restore the now-current location without pushing a duplicate
            // history entry.
            navigate(&dom::current_href(), false);
        }));
        let _ = window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

fn on_document_click(event: web_sys::Event) {
    // Close affordances first; they live inside tab anchors.
    if let Some(close_url) = close_url_from_event(&event) {
        event.prevent_default();
        close_tab(&close_url);
        return;
    }

    let Some(anchor) = anchor_from_event(&event) else {
        return;
    };
    let probe = LinkProbe {
        href: anchor.get_attribute("href"),
        target: anchor.target(),
        has_download: anchor.has_attribute("download"),
        origin: anchor.origin(),
    };
    if !link_policy::should_intercept(&probe, &dom::page_origin()) {
        return;
    }
    event.prevent_default();
    navigate(&anchor.href(), true);
}

fn close_url_from_event(event: &web_sys::Event) -> Option<String> {
    let path = event.composed_path();
    for index in 0..path.length() {
        let Ok(element) = path.get(index).dyn_into::<Element>() else {
            continue;
        };
        if let Some(url) = element.get_attribute(CLOSE_URL_ATTR) {
            return Some(url);
        }
    }
    None
}

fn anchor_from_event(event: &web_sys::Event) -> Option<HtmlAnchorElement> {
    let path = event.composed_path();
    for index in 0..path.length() {
        if let Ok(anchor) = path.get(index).dyn_into::<HtmlAnchorElement>() {
            return Some(anchor);
        }
    }
    None
}

// ── Fragment navigation ─────────────────────────────────────────

/// Fetch `url` in fragment mode and swap it in. The issued token makes this
/// call supersede any still-pending navigation.
pub(crate) fn navigate(url: &str, push_history: bool) {
    let issued = SHELL.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .map(|state| (state.nav.issue(), state.cfg.clone()))
    });
    let Some((token, cfg)) = issued else {
        return;
    };

    let url = url.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_fragment(&url, &cfg).await {
            Ok(html) => apply_fragment(&url, &html, push_history, token),
            Err(err) => {
                log::warn!("fragment fetch for {url} failed ({err:?}); falling back to a full load");
                dom::full_navigate(&url);
            }
        }
    });
}

async fn fetch_fragment(url: &str, cfg: &ShellConfig) -> Result<String, JsValue> {
    let window = dom::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let headers = Headers::new()?;
    headers.append(&cfg.fragment_header_name, &cfg.fragment_header_value)?;
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_headers(headers.as_ref());
    let request = Request::new_with_str_and_init(url, &init)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

fn apply_fragment(url: &str, html: &str, push_history: bool, token: NavToken) {
    SHELL.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(state) = slot.as_mut() else {
            return;
        };
        if !state.nav.is_current(token) {
            log::debug!("discarding overtaken navigation to {url}");
            return;
        }

        let Ok(parser) = DomParser::new() else {
            return;
        };
        let Ok(fragment_doc) = parser.parse_from_string(html, SupportedType::TextHtml) else {
            dom::full_navigate(url);
            return;
        };
        let Some(new_content) = fragment_doc
            .query_selector(&state.cfg.content_selector)
            .ok()
            .flatten()
        else {
            // The target doesn't support fragment rendering: load it for
            // real instead. Tab list stays untouched.
            dom::full_navigate(url);
            return;
        };

        let _ = state.content.replace_with_with_node_1(&new_content);
        state.content = new_content;

        let title = fragment_doc.title();
        if let Some(doc) = dom::document() {
            doc.set_title(&title);
        }

        let path = navigation::path_of(url, &dom::page_origin());
        let mut tabs = load_tabs();
        tabs.open(&title, &path);
        save_tabs(&tabs);
        state
            .tab_bar
            .set_inner_html(&strip::strip_html(&tabs, &path));

        if push_history {
            if let Some(w) = dom::window() {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&path));
                }
            }
        }

        dom::invoke_icon_hook();
    });
}
