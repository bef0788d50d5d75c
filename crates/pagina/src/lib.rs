//! Página: page-object test layer with stale-element recovery.
//!
//! A resilience and convenience layer between test code and a browser
//! automation driver. Element lookups are deferred until use and
//! transparently re-queried when the browser invalidates a handle, so
//! page objects stay valid across re-renders instead of failing with
//! intermittent stale-element errors.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Session ── owns the driver handle + run configuration       │
//! │     │                                                        │
//! │     ├─► SearchScope (document root or element subtree)       │
//! │     │        │                                               │
//! │  PageModel / ContentBlock ── named child properties          │
//! │     │        │                                               │
//! │  TextField Button CheckBox … ── typed wrappers, each         │
//! │     │        │                   holding one proxy           │
//! │     └─► ElementProxy ── lazy resolve, requery on stale       │
//! │              │                                               │
//! │          Driver trait ── the external browser capability     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! One session, one browser handle, one logical thread of control:
//! waits are blocking poll-sleep loops, and no state is shared outside
//! a single session's object graph.

#![warn(missing_docs)]
// Lints are configured in the workspace Cargo.toml [workspace.lints]

/// Assertion helpers over controls and pages
pub mod asserts;

/// Run configuration: browser/device selection and timeout policy
pub mod config;

/// Typed element wrappers (text fields, buttons, radio groups, ...)
pub mod controls;

/// The abstract browser capability and the in-memory mock driver
pub mod driver;

/// The lazily resolving, auto-requerying element proxy
pub mod element;

/// Lazy property memoization for page objects
pub mod lazy;

/// Locators: opaque descriptions of how to find elements
pub mod locator;

/// Page models and content blocks
pub mod page;

/// Result and error types
pub mod result;

/// Search scopes: document root or element subtree
pub mod scope;

/// The test session owning the browser handle
pub mod session;

/// Polling wait options
pub mod wait;

pub use config::{
    BrowserKind, DeviceKind, RunConfig, ScreenshotPolicy, DEFAULT_COMMAND_TIMEOUT_SECS,
};
pub use controls::{
    BusyIndicator, Button, CheckBox, Control, Link, RadioButton, RadioGroup, SelectList,
    TextBlock, TextField, ENTER,
};
pub use driver::{Driver, ElementHandle, MockDriver, MockElement};
pub use element::ElementProxy;
pub use lazy::LazyProp;
pub use locator::Locator;
pub use page::{ContentBlock, PageModel};
pub use result::{PaginaError, PaginaResult};
pub use scope::SearchScope;
pub use session::Session;
pub use wait::{WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
