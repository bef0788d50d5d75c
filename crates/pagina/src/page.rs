//! Page models and content blocks.
//!
//! A page model represents one logical page: it owns the canonical
//! address, an identity check, and named child wrappers built against
//! the session's document root. A content block represents a grouped
//! chunk of html (popup, search result, record, iframe shell) rooted
//! at an element inside a page.
//!
//! Child wrappers follow one pattern: memoize the wrapper instance per
//! object (see [`crate::lazy::LazyProp`]), let its proxy re-resolve the
//! handle per access. Wrapper construction is cheap and stateless
//! aside from the proxy, so the memoization avoids churn without
//! giving up staleness safety.

use crate::driver::ElementHandle;
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::PaginaResult;
use crate::scope::SearchScope;
use crate::session::Session;
use crate::wait::WaitOptions;

/// A page object with a canonical address and an identity check
pub trait PageModel {
    /// The session this page drives
    fn session(&self) -> &Session;

    /// The page's canonical address
    fn url(&self) -> String;

    /// Whether the browser is currently on this page (e.g. a title
    /// match); used to assert that navigation landed where expected
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    fn is_at(&self) -> PaginaResult<bool>;

    /// Page name for logging and error messages
    fn page_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Navigate the session to this page's canonical address
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    fn go(&self) -> PaginaResult<()> {
        self.session().goto(&self.url())
    }

    /// Current page title
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    fn title(&self) -> PaginaResult<String> {
        self.session().title()
    }

    /// The page's query root: always the whole document
    fn scope(&self) -> SearchScope {
        self.session().document()
    }
}

/// A grouped chunk of html rooted at an element within a page.
///
/// The block's children query the subtree under its root element.
/// When the root goes stale every child transitively fails to resolve
/// until a fresh scope is obtained from [`ContentBlock::scope`].
#[derive(Debug, Clone)]
pub struct ContentBlock {
    root: ElementProxy,
    session: Session,
}

impl ContentBlock {
    /// Create a block whose root is resolved on demand within `scope`
    #[must_use]
    pub fn new(
        scope: &SearchScope,
        locator: Locator,
        session: &Session,
        name: impl Into<String>,
    ) -> Self {
        Self {
            root: ElementProxy::dynamic(scope, locator, name),
            session: session.clone(),
        }
    }

    /// Create a block rooted at an already found element
    #[must_use]
    pub fn from_handle(
        handle: ElementHandle,
        session: &Session,
        name: impl Into<String>,
    ) -> Self {
        Self {
            root: ElementProxy::bound(
                std::sync::Arc::clone(session.driver()),
                handle,
                name,
            ),
            session: session.clone(),
        }
    }

    /// The session this block belongs to
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The proxy for the block's root element
    #[must_use]
    pub fn root(&self) -> &ElementProxy {
        &self.root
    }

    /// Resolve the root and return the scope covering its subtree.
    /// Children built from this scope keep querying the resolved
    /// handle; re-obtain the scope after the block re-renders.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the root cannot be resolved
    pub fn scope(&self) -> PaginaResult<SearchScope> {
        let handle = self.root.resolve()?;
        Ok(self.session.document().subscope(handle))
    }

    /// Whether the block's root currently exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Whether the block's root is displayed
    #[must_use]
    pub fn is_displayed(&self) -> bool {
        self.root.is_displayed()
    }

    /// Block until the root is visible
    ///
    /// # Errors
    ///
    /// `WaitTimeout` on expiry; `InvalidConfiguration` for a block
    /// created from a bound handle
    pub fn wait_until_visible(&self, options: &WaitOptions) -> PaginaResult<()> {
        self.root.wait_until_visible(options)
    }

    /// Block until the root is invisible or absent
    ///
    /// # Errors
    ///
    /// `WaitTimeout` on expiry; `InvalidConfiguration` for a block
    /// created from a bound handle
    pub fn wait_until_invisible(&self, options: &WaitOptions) -> PaginaResult<()> {
        self.root.wait_until_invisible(options)
    }
}
