//! Lazily resolving, auto-requerying element proxy.
//!
//! [`ElementProxy`] is the central data structure of this crate. A
//! dynamic proxy remembers *how* to find its element (scope + locator)
//! and defers the actual lookup until use; whenever the previously
//! resolved handle has gone stale, the next access transparently
//! re-queries. A bound proxy wraps a handle that was found elsewhere
//! (e.g. a radio-group member) and never re-queries.
//!
//! Handles are invalidated by the browser engine on any DOM mutation
//! touching their subtree, which makes a cache-forever wrapper the
//! single largest source of flaky UI tests. Deferring resolution and
//! checking staleness on every access is the answer to that failure
//! mode.

use crate::driver::{Driver, ElementHandle};
use crate::locator::Locator;
use crate::result::{PaginaError, PaginaResult};
use crate::scope::SearchScope;
use crate::wait::{poll_until, WaitOptions};
use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
enum ProxyMode {
    /// Wraps a handle found elsewhere; immutable for the proxy's
    /// lifetime, never re-queried
    Static(ElementHandle),
    /// Re-resolves against the scope whenever the cached handle is
    /// absent or stale
    Dynamic {
        scope: SearchScope,
        locator: Locator,
    },
}

/// Lazily resolving wrapper around a single element handle
#[derive(Clone)]
pub struct ElementProxy {
    driver: Arc<dyn Driver>,
    mode: ProxyMode,
    creator: String,
    cached: RefCell<Option<ElementHandle>>,
}

impl ElementProxy {
    /// Create a dynamic proxy that resolves `locator` within `scope`
    /// on demand. `creator` names the page property creating the
    /// proxy, for diagnostics.
    #[must_use]
    pub fn dynamic(scope: &SearchScope, locator: Locator, creator: impl Into<String>) -> Self {
        Self {
            driver: Arc::clone(scope.driver()),
            mode: ProxyMode::Dynamic {
                scope: scope.clone(),
                locator,
            },
            creator: creator.into(),
            cached: RefCell::new(None),
        }
    }

    /// Create a static proxy bound to an already found handle. It
    /// surfaces staleness via [`ElementProxy::is_stale`] but does not
    /// self-heal; the owner recreates it when
    /// [`ElementProxy::is_requery_needed`] reports true.
    #[must_use]
    pub fn bound(
        driver: Arc<dyn Driver>,
        handle: ElementHandle,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            mode: ProxyMode::Static(handle),
            creator: creator.into(),
            cached: RefCell::new(None),
        }
    }

    /// The creator label given at construction
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Whether this proxy re-queries on staleness
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.mode, ProxyMode::Dynamic { .. })
    }

    /// The locator of a dynamic proxy, `None` for a bound one
    #[must_use]
    pub fn locator(&self) -> Option<&Locator> {
        match &self.mode {
            ProxyMode::Dynamic { locator, .. } => Some(locator),
            ProxyMode::Static(_) => None,
        }
    }

    pub(crate) fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    fn creator_label(&self) -> &str {
        if self.creator.is_empty() {
            "element"
        } else {
            &self.creator
        }
    }

    fn locator_description(&self) -> String {
        match &self.mode {
            ProxyMode::Dynamic { locator, .. } => locator.to_string(),
            ProxyMode::Static(handle) => format!("bound <{}>", handle.tag_name),
        }
    }

    /// Return a usable handle, re-querying a dynamic proxy when the
    /// cached handle is absent or stale.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when resolution yields nothing. Use
    /// [`ElementProxy::exists`] to probe without failing.
    pub fn resolve(&self) -> PaginaResult<ElementHandle> {
        match &self.mode {
            ProxyMode::Static(handle) => Ok(handle.clone()),
            ProxyMode::Dynamic { scope, locator } => {
                {
                    let cached = self.cached.borrow();
                    if let Some(handle) = cached.as_ref() {
                        if self.driver.is_stale(handle) {
                            debug!(
                                locator = %locator,
                                creator = self.creator_label(),
                                "cached handle went stale, re-querying"
                            );
                        } else {
                            return Ok(handle.clone());
                        }
                    }
                }
                let fresh = scope.find_first(locator)?;
                *self.cached.borrow_mut() = fresh.clone();
                fresh.ok_or_else(|| PaginaError::ElementNotFound {
                    locator: locator.to_string(),
                    scope: scope.describe(),
                    creator: self.creator_label().to_string(),
                })
            }
        }
    }

    /// Whether the element currently exists; never fails
    #[must_use]
    pub fn exists(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Whether the element exists and is displayed; a nonexistent
    /// element is not displayed, not an error
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.resolve()
            .ok()
            .and_then(|handle| self.driver.is_displayed(&handle).ok())
            .unwrap_or(false)
    }

    /// Whether the element exists and is enabled
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.resolve()
            .ok()
            .and_then(|handle| self.driver.is_enabled(&handle).ok())
            .unwrap_or(false)
    }

    /// Whether the bound or last-resolved handle has gone stale
    #[must_use]
    pub fn is_stale(&self) -> bool {
        match &self.mode {
            ProxyMode::Static(handle) => self.driver.is_stale(handle),
            ProxyMode::Dynamic { .. } => self
                .cached
                .borrow()
                .as_ref()
                .is_some_and(|handle| self.driver.is_stale(handle)),
        }
    }

    /// For bound proxies: whether the owner should recreate this proxy
    /// because the underlying handle went stale. Always false for
    /// dynamic proxies, which re-query on their own.
    #[must_use]
    pub fn is_requery_needed(&self) -> bool {
        match &self.mode {
            ProxyMode::Static(handle) => self.driver.is_stale(handle),
            ProxyMode::Dynamic { .. } => false,
        }
    }

    /// Block until the locator resolves to a visible element.
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when the timeout elapses; `InvalidConfiguration`
    /// on a bound proxy, which structurally cannot re-query.
    pub fn wait_until_visible(&self, options: &WaitOptions) -> PaginaResult<()> {
        let (scope, locator) = self.waitable()?;
        poll_until(options, || {
            scope
                .find_first(locator)
                .ok()
                .flatten()
                .and_then(|handle| self.driver.is_displayed(&handle).ok())
                .unwrap_or(false)
        })
        .map(|_| ())
        .map_err(|elapsed| self.timeout_error("visible", elapsed.as_millis() as u64))
    }

    /// Block until the locator resolves to nothing or to a hidden
    /// element; absence counts as invisible.
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when the timeout elapses; `InvalidConfiguration`
    /// on a bound proxy.
    pub fn wait_until_invisible(&self, options: &WaitOptions) -> PaginaResult<()> {
        let (scope, locator) = self.waitable()?;
        poll_until(options, || match scope.find_first(locator) {
            Ok(None) => true,
            Ok(Some(handle)) => !self.driver.is_displayed(&handle).unwrap_or(true),
            Err(_) => false,
        })
        .map(|_| ())
        .map_err(|elapsed| self.timeout_error("invisible", elapsed.as_millis() as u64))
    }

    fn waitable(&self) -> PaginaResult<(&SearchScope, &Locator)> {
        match &self.mode {
            ProxyMode::Dynamic { scope, locator } => Ok((scope, locator)),
            ProxyMode::Static(_) => Err(PaginaError::InvalidConfiguration {
                message: format!(
                    "{} was created from a bound element; waits require a locator and search scope",
                    self.creator_label()
                ),
            }),
        }
    }

    fn timeout_error(&self, condition: &str, elapsed_ms: u64) -> PaginaError {
        PaginaError::WaitTimeout {
            condition: condition.to_string(),
            locator: self.locator_description(),
            creator: self.creator_label().to_string(),
            elapsed_ms,
        }
    }
}

impl fmt::Debug for ElementProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementProxy")
            .field("creator", &self.creator)
            .field("locator", &self.locator_description())
            .field("cached", &*self.cached.borrow())
            .finish_non_exhaustive()
    }
}
