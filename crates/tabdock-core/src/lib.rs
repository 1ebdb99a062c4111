#![forbid(unsafe_code)]

//! Core: tab-list, display-mode, and navigation state for TabDock.
//!
//! # Role in TabDock
//! `tabdock-core` is the state layer. It owns the open-tab list and its
//! close-fallback rules, the light/dark display mode, the link-interception
//! policy, the navigation sequencer, and the session-storage codec. It has no
//! browser dependencies, so every rule here is testable natively.
//!
//! # Primary responsibilities
//! - **TabList**: ordered, unique-by-url open tabs with open/close semantics.
//! - **DisplayMode**: the light/dark preference and its string forms.
//! - **Link policy**: which anchor clicks are intercepted for in-place
//!   navigation and which fall through to the browser.
//! - **NavSequencer**: monotonic tokens that discard stale fragment swaps.
//! - **OverlayGate**: the pending-request counter behind the loading overlay.
//! - **Session codec**: JSON encode/decode of the persisted tab list.
//!
//! # How it fits in the system
//! The frontend (`tabdock-web`) consumes these types from its wasm-bindgen
//! controllers: DOM events are reduced to plain values (a [`LinkProbe`], a
//! url, a title), the decision is made here, and the frontend applies the
//! outcome to the DOM, storage, and history. The split keeps browser glue
//! thin and the rules under native test.

pub mod config;
pub mod display_mode;
pub mod link_policy;
pub mod navigation;
pub mod overlay;
pub mod session;
pub mod tabs;

pub use config::ShellConfig;
pub use display_mode::DisplayMode;
pub use link_policy::{BypassReasons, LinkProbe};
pub use navigation::{NavSequencer, NavToken};
pub use overlay::OverlayGate;
pub use session::TabStoreError;
pub use tabs::{CloseOutcome, Tab, TabList};
