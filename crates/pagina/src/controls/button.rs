//! Buttons and links.

use super::Control;
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::PaginaResult;
use crate::scope::SearchScope;
use crate::wait::WaitOptions;
use std::cell::RefCell;
use tracing::trace;

#[derive(Debug, Clone)]
struct PostClickWait {
    locator: Locator,
    options: WaitOptions,
}

/// A clickable button.
///
/// Arm a post-click wait when the click triggers navigation or an
/// asynchronous re-render, so callers do not hand-roll the
/// synchronization after every click.
#[derive(Debug)]
pub struct Button {
    proxy: ElementProxy,
    scope: SearchScope,
    post_click: RefCell<Option<PostClickWait>>,
}

impl Button {
    /// Create a button resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "Button")
    }

    /// Create a button with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
            scope: scope.clone(),
            post_click: RefCell::new(None),
        }
    }

    /// After every subsequent click, wait until `locator` resolves to
    /// a visible element within this button's scope
    pub fn arm_post_click_wait(&self, locator: Locator, options: WaitOptions) {
        *self.post_click.borrow_mut() = Some(PostClickWait { locator, options });
    }

    /// Remove a previously armed post-click wait
    pub fn disarm_post_click_wait(&self) {
        *self.post_click.borrow_mut() = None;
    }

    /// Click the button, then run the armed post-click wait if any
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the button cannot be resolved;
    /// `WaitTimeout` when an armed post-click wait expires
    pub fn click(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        trace!(creator = self.proxy.creator(), "click");
        self.proxy.driver().click(&handle)?;

        let armed = self.post_click.borrow().clone();
        if let Some(wait) = armed {
            let target = ElementProxy::dynamic(
                &self.scope,
                wait.locator,
                format!("{} post-click target", self.proxy.creator()),
            );
            target.wait_until_visible(&wait.options)?;
        }
        Ok(())
    }

    /// The button's visible text
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the button cannot be resolved
    pub fn text(&self) -> PaginaResult<String> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().text(&handle)
    }
}

impl Control for Button {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}

/// A hypertext link
#[derive(Debug, Clone)]
pub struct Link {
    proxy: ElementProxy,
}

impl Link {
    /// Create a link resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "Link")
    }

    /// Create a link with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    /// Click the link
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the link cannot be resolved
    pub fn click(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().click(&handle)
    }

    /// The link's visible text
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the link cannot be resolved
    pub fn text(&self) -> PaginaResult<String> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().text(&handle)
    }
}

impl Control for Link {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}
