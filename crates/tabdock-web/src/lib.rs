#![forbid(unsafe_code)]

//! WASM frontend for TabDock.
//!
//! This crate is the browser half of the shell: three page-lifecycle
//! controllers wired over `web-sys`, exported to the host page via
//! `wasm-bindgen`.
//!
//! - **Theme**: applies the persisted light/dark preference to the document
//!   root, toggles it from the page's toggle control, and reapplies it
//!   before every fragment swap.
//! - **Overlay**: projects the loading overlay from the hypermedia
//!   framework's request lifecycle events through a pending-request gate.
//! - **Shell**: the tab strip and fragment navigation — link interception,
//!   fetch-and-swap of the content region, history integration, and the
//!   close actions.
//!
//! The host page loads the module and calls [`boot`] once the DOM is ready:
//!
//! ```text
//! import init, { boot } from "./tabdock_web.js";
//! await init();
//! boot();
//! ```
//!
//! All decisions live in `tabdock-core`; this crate reduces DOM events to
//! plain values, asks core, and applies the outcome. Browser-API modules are
//! only compiled on `wasm32`; [`strip`] is pure and tested natively.

pub mod strip;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod shell;
#[cfg(target_arch = "wasm32")]
mod theme;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{boot, close_all_tabs, close_current_tab, close_other_tabs};
