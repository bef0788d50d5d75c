//! Result and error types for Página.

use thiserror::Error;

/// Result type for Página operations
pub type PaginaResult<T> = Result<T, PaginaError>;

/// Errors that can occur in Página
///
/// Every variant that concerns an element carries the locator's string
/// form and the creator label of the object involved, so a failure can
/// be traced to a named page property rather than a bare "not found".
#[derive(Debug, Error)]
pub enum PaginaError {
    /// Resolution found no element for a locator
    #[error("expected {creator} does not exist on the page: {locator} found nothing in {scope}")]
    ElementNotFound {
        /// String form of the locator that matched nothing
        locator: String,
        /// Description of the search scope that was queried
        scope: String,
        /// Label of the object that performed the lookup
        creator: String,
    },

    /// A polling wait exceeded its timeout
    #[error(
        "{creator} is still not {condition} after {elapsed_ms}ms (using locator: {locator})"
    )]
    WaitTimeout {
        /// What the wait was polling for (e.g. "visible", "invisible")
        condition: String,
        /// String form of the locator being polled
        locator: String,
        /// Label of the object that was waited on
        creator: String,
        /// Time spent polling before giving up
        elapsed_ms: u64,
    },

    /// A select-list or radio-group lookup by value/text found no match
    #[error("no option matching {wanted:?}; available options: {available:?}")]
    OptionNotFound {
        /// The value or text that was requested
        wanted: String,
        /// The options that were actually present
        available: Vec<String>,
    },

    /// A required collaborator was absent or an operation was invoked
    /// on an object that structurally cannot support it
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was misconfigured
        message: String,
    },

    /// An assertion helper failed
    #[error("assertion failed: {message}")]
    AssertionFailed {
        /// Caller-supplied failure message
        message: String,
    },

    /// The underlying browser capability reported a failure
    #[error("driver error: {message}")]
    Driver {
        /// Error message from the capability boundary
        message: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_message_names_everything() {
        let err = PaginaError::ElementNotFound {
            locator: "by name \"q\"".to_string(),
            scope: "document".to_string(),
            creator: "search_box".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("search_box"));
        assert!(message.contains("by name \"q\""));
        assert!(message.contains("document"));
    }

    #[test]
    fn test_wait_timeout_message_contains_locator_and_elapsed() {
        let err = PaginaError::WaitTimeout {
            condition: "visible".to_string(),
            locator: "by id \"spinner\"".to_string(),
            creator: "BusyIndicator".to_string(),
            elapsed_ms: 150,
        };
        let message = err.to_string();
        assert!(message.contains("by id \"spinner\""));
        assert!(message.contains("150ms"));
        assert!(message.contains("visible"));
    }

    #[test]
    fn test_option_not_found_lists_available() {
        let err = PaginaError::OptionNotFound {
            wanted: "D".to_string(),
            available: vec!["A".to_string(), "B".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("\"D\""));
        assert!(message.contains("\"A\""));
    }
}
