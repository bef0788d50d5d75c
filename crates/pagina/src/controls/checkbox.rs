//! Checkboxes and radio buttons.
//!
//! Both expose selection state and a state-aware setter: a click
//! toggles, so the setter clicks only when the current state differs
//! from the desired one.

use super::Control;
use crate::driver::{Driver, ElementHandle};
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::PaginaResult;
use crate::scope::SearchScope;
use std::sync::Arc;
use tracing::trace;

/// A checkbox on a page
#[derive(Debug, Clone)]
pub struct CheckBox {
    proxy: ElementProxy,
}

impl CheckBox {
    /// Create a checkbox resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "CheckBox")
    }

    /// Create a checkbox with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    /// Current selection state
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the checkbox cannot be resolved
    pub fn is_selected(&self) -> PaginaResult<bool> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().is_selected(&handle)
    }

    /// Bring the checkbox to `selected`, clicking only when the state
    /// actually differs (a click toggles; clicking an already-correct
    /// checkbox would undo it)
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the checkbox cannot be resolved
    pub fn set_selected(&self, selected: bool) -> PaginaResult<()> {
        if self.is_selected()? != selected {
            trace!(creator = self.proxy.creator(), selected, "toggling");
            self.click()?;
        }
        Ok(())
    }

    /// Click the checkbox
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the checkbox cannot be resolved
    pub fn click(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().click(&handle)
    }
}

impl Control for CheckBox {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}

/// A single radio button, standalone or as a [`super::RadioGroup`]
/// member
#[derive(Debug, Clone)]
pub struct RadioButton {
    proxy: ElementProxy,
}

impl RadioButton {
    /// Create a radio button resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "RadioButton")
    }

    /// Create a radio button with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    /// Wrap an already found element. The wrapper will not re-query;
    /// its owner detects staleness through
    /// [`ElementProxy::is_requery_needed`] and recreates it.
    #[must_use]
    pub fn from_handle(
        driver: Arc<dyn Driver>,
        handle: ElementHandle,
        name: impl Into<String>,
    ) -> Self {
        Self {
            proxy: ElementProxy::bound(driver, handle, name),
        }
    }

    /// Current selection state
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the radio button cannot be resolved
    pub fn is_selected(&self) -> PaginaResult<bool> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().is_selected(&handle)
    }

    /// Bring the radio button to `selected`, clicking only on a state
    /// change
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the radio button cannot be resolved
    pub fn set_selected(&self, selected: bool) -> PaginaResult<()> {
        if self.is_selected()? != selected {
            self.click()?;
        }
        Ok(())
    }

    /// Click the radio button
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the radio button cannot be resolved
    pub fn click(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().click(&handle)
    }
}

impl Control for RadioButton {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}
