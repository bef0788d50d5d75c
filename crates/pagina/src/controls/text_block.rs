//! Static text areas (headings, spans, divs, footers).

use super::Control;
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::PaginaResult;
use crate::scope::SearchScope;

/// A read-only area of text on a page.
///
/// Decorative and optional text nodes are common, so reading tolerates
/// nonexistence: [`TextBlock::text`] returns `None` instead of failing.
#[derive(Debug, Clone)]
pub struct TextBlock {
    proxy: ElementProxy,
}

impl TextBlock {
    /// Create a text block resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "TextBlock")
    }

    /// Create a text block with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    /// The displayed text, `None` when the element does not exist
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let handle = self.proxy.resolve().ok()?;
        self.proxy.driver().text(&handle).ok()
    }

    /// The displayed text, failing on a missing element for callers
    /// that require presence
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the element cannot be resolved
    pub fn require_text(&self) -> PaginaResult<String> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().text(&handle)
    }
}

impl Control for TextBlock {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}
