#![forbid(unsafe_code)]

//! Overlay controller: loading indicator over request lifecycle events.
//!
//! The hypermedia framework dispatches its lifecycle events on the document
//! body; this controller counts them through an [`OverlayGate`] and projects
//! the count onto the overlay element's visibility class. Request-start
//! acquires; after-swap, response-error, and network send-error release.
//! With the gate, overlapping requests keep the overlay up until the last
//! one settles.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

use tabdock_core::config::ShellConfig;
use tabdock_core::overlay::OverlayGate;

use crate::dom;

thread_local! {
    static LIFECYCLE_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> =
        const { RefCell::new(Vec::new()) };
}

/// Wire the lifecycle listeners. Inert when the overlay element is absent.
pub(crate) fn attach(cfg: Rc<ShellConfig>) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(overlay) = doc.get_element_by_id(&cfg.overlay_id) else {
        return;
    };
    let Some(body) = dom::body() else {
        return;
    };

    LIFECYCLE_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }

        let gate = Rc::new(RefCell::new(OverlayGate::new()));

        // (event, acquires) — everything that settles a request releases.
        let wiring: [(&str, bool); 4] = [
            ("htmx:requestStart", true),
            ("htmx:afterSwap", false),
            ("htmx:responseError", false),
            ("htmx:sendError", false),
        ];

        for (event_name, acquires) in wiring {
            let gate = gate.clone();
            let overlay = overlay.clone();
            let cfg = cfg.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                let mut gate = gate.borrow_mut();
                if acquires {
                    gate.acquire();
                } else {
                    gate.release();
                }
                project(&overlay, &cfg, gate.is_visible());
            }));
            let _ =
                body.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });
}

fn project(overlay: &Element, cfg: &ShellConfig, visible: bool) {
    let class_list = overlay.class_list();
    let result = if visible {
        class_list.add_1(&cfg.overlay_visible_class)
    } else {
        class_list.remove_1(&cfg.overlay_visible_class)
    };
    let _ = result;
}
