//! Select lists (drop-down menus).

use super::Control;
use crate::driver::ElementHandle;
use crate::element::ElementProxy;
use crate::locator::Locator;
use crate::result::{PaginaError, PaginaResult};
use crate::scope::SearchScope;

/// A `<select>` drop-down on a page
#[derive(Debug, Clone)]
pub struct SelectList {
    proxy: ElementProxy,
}

impl SelectList {
    /// Create a select list resolved on demand within `scope`
    #[must_use]
    pub fn new(scope: &SearchScope, locator: Locator) -> Self {
        Self::named(scope, locator, "SelectList")
    }

    /// Create a select list with a diagnostic name
    #[must_use]
    pub fn named(scope: &SearchScope, locator: Locator, name: impl Into<String>) -> Self {
        Self {
            proxy: ElementProxy::dynamic(scope, locator, name),
        }
    }

    fn option_handles(&self) -> PaginaResult<Vec<ElementHandle>> {
        let handle = self.proxy.resolve()?;
        self.proxy
            .driver()
            .find(Some(&handle), &Locator::tag_name("option"))
    }

    /// The visible texts of the available options, in document order
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when the list cannot be resolved
    pub fn option_texts(&self) -> PaginaResult<Vec<String>> {
        let driver = self.proxy.driver();
        self.option_handles()?
            .iter()
            .map(|handle| driver.text(handle))
            .collect()
    }

    /// Select the option with the exact visible text `text`
    /// (case sensitive)
    ///
    /// # Errors
    ///
    /// `OptionNotFound` when no option carries that text
    pub fn select_by_text(&self, text: &str) -> PaginaResult<()> {
        let driver = self.proxy.driver();
        let options = self.option_handles()?;
        let mut texts = Vec::with_capacity(options.len());
        for handle in &options {
            let option_text = driver.text(handle)?;
            if option_text == text {
                return driver.click(handle);
            }
            texts.push(option_text);
        }
        Err(PaginaError::OptionNotFound {
            wanted: text.to_string(),
            available: texts,
        })
    }

    /// Select the option whose `value` attribute equals `value`
    ///
    /// # Errors
    ///
    /// `OptionNotFound` when no option carries that value
    pub fn select_by_value(&self, value: &str) -> PaginaResult<()> {
        let driver = self.proxy.driver();
        let options = self.option_handles()?;
        let mut values = Vec::with_capacity(options.len());
        for handle in &options {
            let option_value = driver.attribute(handle, "value")?.unwrap_or_default();
            if option_value == value {
                return driver.click(handle);
            }
            values.push(option_value);
        }
        Err(PaginaError::OptionNotFound {
            wanted: value.to_string(),
            available: values,
        })
    }
}

impl Control for SelectList {
    fn proxy(&self) -> &ElementProxy {
        &self.proxy
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::driver::{MockDriver, MockElement};
    use std::sync::Arc;

    fn color_select() -> (Arc<MockDriver>, SelectList) {
        let driver = Arc::new(MockDriver::new());
        let _ = driver.add_element(MockElement::new("sel", "select").attr("name", "color"));
        for (id, value, text) in [
            ("opt-r", "r", "Red"),
            ("opt-g", "g", "Green"),
            ("opt-b", "b", "Blue"),
        ] {
            let _ = driver.add_element(
                MockElement::new(id, "option")
                    .attr("value", value)
                    .text(text)
                    .child_of("sel"),
            );
        }
        let scope = SearchScope::document(driver.clone());
        let list = SelectList::named(&scope, Locator::name("color"), "color_picker");
        (driver, list)
    }

    #[test]
    fn test_option_texts() {
        let (_, list) = color_select();
        assert_eq!(list.option_texts().unwrap(), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_select_by_text() {
        let (driver, list) = color_select();
        list.select_by_text("Green").unwrap();
        assert!(driver.was_called("click:opt-g"));
    }

    #[test]
    fn test_select_by_value() {
        let (driver, list) = color_select();
        list.select_by_value("b").unwrap();
        assert!(driver.was_called("click:opt-b"));
    }

    #[test]
    fn test_select_by_text_unknown_fails_with_available() {
        let (_, list) = color_select();
        let err = list.select_by_text("Mauve").unwrap_err();
        match err {
            PaginaError::OptionNotFound { wanted, available } => {
                assert_eq!(wanted, "Mauve");
                assert_eq!(available, vec!["Red", "Green", "Blue"]);
            }
            other => panic!("expected OptionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_select_by_value_unknown_fails() {
        let (_, list) = color_select();
        assert!(list.select_by_value("x").is_err());
    }

    #[test]
    fn test_missing_list_fails_with_not_found() {
        let driver = Arc::new(MockDriver::new());
        let scope = SearchScope::document(driver);
        let list = SelectList::new(&scope, Locator::name("color"));
        assert!(list.option_texts().is_err());
    }
}
