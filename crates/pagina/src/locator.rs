//! Locator abstraction for describing how to find elements.
//!
//! A [`Locator`] is an opaque description of how to find an element
//! within a search scope. It never touches the page by itself; a
//! [`crate::scope::SearchScope`] evaluates it against the document or
//! an element subtree.

use std::fmt;

/// Description of how to find elements within a scope
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// Match on the `id` attribute
    Id(String),
    /// Match on the `name` attribute
    Name(String),
    /// Match on a CSS selector
    Css(String),
    /// Match on a single class name
    ClassName(String),
    /// Match on an XPath expression
    XPath(String),
    /// Match anchor elements by their exact text
    LinkText(String),
    /// Match on the element tag name
    TagName(String),
}

impl Locator {
    /// Locate by the `id` attribute
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Locate by the `name` attribute
    #[must_use]
    pub fn name(value: impl Into<String>) -> Self {
        Self::Name(value.into())
    }

    /// Locate by CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Locate by a single class name
    #[must_use]
    pub fn class_name(value: impl Into<String>) -> Self {
        Self::ClassName(value.into())
    }

    /// Locate by XPath expression
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// Locate an anchor by its exact text
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Locate by tag name
    #[must_use]
    pub fn tag_name(value: impl Into<String>) -> Self {
        Self::TagName(value.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(v) => write!(f, "by id {v:?}"),
            Self::Name(v) => write!(f, "by name {v:?}"),
            Self::Css(v) => write!(f, "by css {v:?}"),
            Self::ClassName(v) => write!(f, "by class {v:?}"),
            Self::XPath(v) => write!(f, "by xpath {v:?}"),
            Self::LinkText(v) => write!(f, "by link text {v:?}"),
            Self::TagName(v) => write!(f, "by tag {v:?}"),
        }
    }
}
