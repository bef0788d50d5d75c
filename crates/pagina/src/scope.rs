//! Search scopes: where a locator is evaluated.
//!
//! A [`SearchScope`] is either the whole document or a subtree rooted
//! at a previously found element. Scopes are cheap to clone; the driver
//! sits behind an `Arc`.

use crate::driver::{Driver, ElementHandle};
use crate::locator::Locator;
use crate::result::PaginaResult;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
enum ScopeRoot {
    Document,
    Element(ElementHandle),
}

/// A scope a [`Locator`] can be resolved against
#[derive(Clone)]
pub struct SearchScope {
    driver: Arc<dyn Driver>,
    root: ScopeRoot,
}

impl SearchScope {
    /// Scope covering the whole document
    #[must_use]
    pub fn document(driver: Arc<dyn Driver>) -> Self {
        Self {
            driver,
            root: ScopeRoot::Document,
        }
    }

    /// Scope covering the subtree rooted at `handle`
    #[must_use]
    pub fn element(driver: Arc<dyn Driver>, handle: ElementHandle) -> Self {
        Self {
            driver,
            root: ScopeRoot::Element(handle),
        }
    }

    /// Narrow this scope to the subtree rooted at `handle`
    #[must_use]
    pub fn subscope(&self, handle: ElementHandle) -> Self {
        Self::element(Arc::clone(&self.driver), handle)
    }

    /// The driver behind this scope
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Find all elements matching `locator` in this scope, in document
    /// order
    pub fn find(&self, locator: &Locator) -> PaginaResult<Vec<ElementHandle>> {
        match &self.root {
            ScopeRoot::Document => self.driver.find(None, locator),
            ScopeRoot::Element(handle) => self.driver.find(Some(handle), locator),
        }
    }

    /// Find the first element matching `locator`, `None` when nothing
    /// matches
    pub fn find_first(&self, locator: &Locator) -> PaginaResult<Option<ElementHandle>> {
        Ok(self.find(locator)?.into_iter().next())
    }

    /// Diagnostic description of the scope, used in error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.root {
            ScopeRoot::Document => "the document".to_string(),
            ScopeRoot::Element(handle) => {
                format!("the subtree under <{}> ({})", handle.tag_name, handle.id)
            }
        }
    }
}

impl fmt::Debug for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchScope")
            .field("root", &self.describe())
            .finish_non_exhaustive()
    }
}
