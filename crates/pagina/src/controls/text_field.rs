//! Editable text fields.

use super::Control;
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::PaginaResult;
use crate::scope::SearchScope;

/// WebDriver key code for the Return key
pub const ENTER: &str = "\u{e006}";

/// An editable text input on a page
#[derive(Debug, Clone)]
pub struct TextField {
    proxy: ElementProxy,
}

impl TextField {
    /// Create a text field resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "TextField")
    }

    /// Create a text field with a diagnostic name (typically the page
    /// property exposing it)
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    /// The text currently in the field (the `value` attribute)
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the field cannot be resolved
    pub fn text(&self) -> PaginaResult<String> {
        let handle = self.proxy.resolve()?;
        Ok(self
            .proxy
            .driver()
            .attribute(&handle, "value")?
            .unwrap_or_default())
    }

    /// Replace the field's content with `text`. The field is cleared
    /// first; setting never appends.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the field cannot be resolved
    pub fn set_text(&self, text: &str) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        let driver = self.proxy.driver();
        driver.clear(&handle)?;
        driver.send_keys(&handle, text)
    }

    /// Send a Return key press to the field
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the field cannot be resolved
    pub fn press_enter(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().send_keys(&handle, ENTER)
    }

    /// Clear all text from the field
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the field cannot be resolved
    pub fn clear(&self) -> PaginaResult<()> {
        let handle = self.proxy.resolve()?;
        self.proxy.driver().clear(&handle)
    }
}

impl Control for TextField {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}
