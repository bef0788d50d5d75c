//! Busy indicators (loading spinners).
//!
//! A busy indicator is polled, never cached: it appears and disappears
//! across renders, so every probe is a fresh lookup of the
//! (scope, locator) pair.

use crate::locator::Locator;
use crate::result::{PaginaError, PaginaResult};
use crate::scope::SearchScope;
use crate::wait::{poll_until, WaitOptions};

/// An animated loading indicator with waiting functionality
#[derive(Debug, Clone)]
pub struct BusyIndicator {
    scope: SearchScope,
    locator: Locator,
    creator: String,
}

impl BusyIndicator {
    /// Create an indicator polled within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "BusyIndicator")
    }

    /// Create an indicator with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            scope: scope.clone(),
            locator,
            creator: name.into(),
        }
    }

    /// Whether the indicator is currently shown; a missing indicator
    /// is not shown
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.probe_displayed()
    }

    fn probe_displayed(&self) -> bool {
        self.scope
            .find_first(&self.locator)
            .ok()
            .flatten()
            .and_then(|handle| self.scope.driver().is_displayed(&handle).ok())
            .unwrap_or(false)
    }

    /// Block until the indicator appears
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when it never shows up
    pub fn wait_until_appears(&self, options: &WaitOptions) -> PaginaResult<()> {
        poll_until(options, || self.probe_displayed())
            .map(|_| ())
            .map_err(|elapsed| self.timeout_error("visible", elapsed.as_millis() as u64))
    }

    /// Block until the indicator vanishes; absence counts as vanished
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when it stays visible
    pub fn wait_until_disappears(&self, options: &WaitOptions) -> PaginaResult<()> {
        poll_until(options, || !self.probe_displayed())
            .map(|_| ())
            .map_err(|elapsed| self.timeout_error("invisible", elapsed.as_millis() as u64))
    }

    /// Block until the page reports no pending asynchronous requests,
    /// then until the indicator vanishes.
    ///
    /// The order matters: the busy icon can disappear before in-flight
    /// requests finish re-rendering, and a later request may show a
    /// second spinner. Draining network activity first avoids racing
    /// it.
    ///
    /// # Errors
    ///
    /// `WaitTimeout` when either phase expires
    pub fn wait_until_idle(&self, options: &WaitOptions) -> PaginaResult<()> {
        poll_until(options, || {
            self.scope
                .driver()
                .pending_requests()
                .map(|pending| pending == 0)
                .unwrap_or(false)
        })
        .map_err(|elapsed| {
            self.timeout_error("idle (requests pending)", elapsed.as_millis() as u64)
        })?;
        self.wait_until_disappears(options)
    }

    fn timeout_error(&self, condition: &str, elapsed_ms: u64) -> PaginaError {
        PaginaError::WaitTimeout {
            condition: condition.to_string(),
            locator: self.locator.to_string(),
            creator: self.creator.clone(),
            elapsed_ms,
        }
    }
}
