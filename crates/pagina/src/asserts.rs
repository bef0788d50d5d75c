//! Assertion helpers over controls and pages.
//!
//! Thin checks for test code that wants a diagnosable failure instead
//! of a bare `assert!`: each helper returns `AssertionFailed` carrying
//! the caller's message.

use crate::controls::Control;
use crate::page::PageModel;
use crate::result::{PaginaError, PaginaResult};

fn failed(message: &str) -> PaginaError {
    PaginaError::AssertionFailed {
        message: message.to_string(),
    }
}

/// Assert that the control's element exists
///
/// # Errors
///
/// `AssertionFailed` with `message` when it does not
pub fn exists(control: &impl Control, message: &str) -> PaginaResult<()> {
    if control.exists() {
        Ok(())
    } else {
        Err(failed(message))
    }
}

/// Assert that the control's element does not exist
///
/// # Errors
///
/// `AssertionFailed` with `message` when it does
pub fn does_not_exist(control: &impl Control, message: &str) -> PaginaResult<()> {
    if control.exists() {
        Err(failed(message))
    } else {
        Ok(())
    }
}

/// Assert that the control's element is displayed
///
/// # Errors
///
/// `AssertionFailed` with `message` when it is not
pub fn is_displayed(control: &impl Control, message: &str) -> PaginaResult<()> {
    if control.is_displayed() {
        Ok(())
    } else {
        Err(failed(message))
    }
}

/// Assert that the control's element is hidden or absent
///
/// # Errors
///
/// `AssertionFailed` with `message` when it is displayed
pub fn is_not_displayed(control: &impl Control, message: &str) -> PaginaResult<()> {
    if control.is_displayed() {
        Err(failed(message))
    } else {
        Ok(())
    }
}

/// Assert that the session currently sits on `page`
///
/// # Errors
///
/// `AssertionFailed` with `message` when the page's identity check
/// reports false; driver failures propagate as-is
pub fn is_at_page(page: &impl PageModel, message: &str) -> PaginaResult<()> {
    if page.is_at()? {
        Ok(())
    } else {
        Err(failed(message))
    }
}
