//! Test session: the single owner of a browser handle.
//!
//! One session, one browser, one logical thread of control. Pages and
//! blocks hold a session back-reference and obtain their query roots
//! from it; nothing in this crate reaches a driver through ambient or
//! global state, so N parallel sessions need zero synchronization.

use crate::config::RunConfig;
use crate::driver::Driver;
use crate::result::PaginaResult;
use crate::scope::SearchScope;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Owner of the browser-automation handle for one test run
#[derive(Clone)]
pub struct Session {
    driver: Arc<dyn Driver>,
    config: Arc<RunConfig>,
}

impl Session {
    /// Create a session over a driver with the given run configuration
    #[must_use]
    pub fn new(driver: Arc<dyn Driver>, config: RunConfig) -> Self {
        Self {
            driver,
            config: Arc::new(config),
        }
    }

    /// The driver behind this session
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// This run's configuration
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Timeout for individual driver commands
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        self.config.command_timeout()
    }

    /// The root search scope covering the whole document
    #[must_use]
    pub fn document(&self) -> SearchScope {
        SearchScope::document(Arc::clone(&self.driver))
    }

    /// Navigate to `url`
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn goto(&self, url: &str) -> PaginaResult<()> {
        debug!(url, "navigating");
        self.driver.goto(url)
    }

    /// Go back in history
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn back(&self) -> PaginaResult<()> {
        debug!("navigating back");
        self.driver.back()
    }

    /// Go forward in history
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn forward(&self) -> PaginaResult<()> {
        debug!("navigating forward");
        self.driver.forward()
    }

    /// Reload the current page
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn refresh(&self) -> PaginaResult<()> {
        debug!("refreshing");
        self.driver.refresh()
    }

    /// Current page title
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn title(&self) -> PaginaResult<String> {
        self.driver.title()
    }

    /// Current page URL
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn current_url(&self) -> PaginaResult<String> {
        self.driver.current_url()
    }

    /// Full page source
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn page_source(&self) -> PaginaResult<String> {
        self.driver.page_source()
    }

    /// Execute a script in the page
    ///
    /// # Errors
    ///
    /// Propagates driver failures
    pub fn execute_script(&self, script: &str) -> PaginaResult<serde_json::Value> {
        self.driver.execute_script(script)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::driver::MockDriver;

    fn session() -> (Arc<MockDriver>, Session) {
        let driver = Arc::new(MockDriver::new());
        let session = Session::new(Arc::clone(&driver), RunConfig::new());
        (driver, session)
    }

    #[test]
    fn test_navigation_delegates_to_driver() {
        let (driver, session) = session();
        session.goto("http://www.example.com").unwrap();
        session.back().unwrap();
        session.forward().unwrap();
        session.refresh().unwrap();

        assert!(driver.was_called("goto:http://www.example.com"));
        assert!(driver.was_called("back"));
        assert!(driver.was_called("forward"));
        assert!(driver.was_called("refresh"));
    }

    #[test]
    fn test_title_and_url() {
        let (driver, session) = session();
        driver.set_title("Example");
        session.goto("http://www.example.com").unwrap();
        assert_eq!(session.title().unwrap(), "Example");
        assert_eq!(session.current_url().unwrap(), "http://www.example.com");
    }

    #[test]
    fn test_document_scope_is_root() {
        let (_, session) = session();
        assert_eq!(session.document().describe(), "the document");
    }

    #[test]
    fn test_command_timeout_comes_from_config() {
        let driver = Arc::new(MockDriver::new());
        let mut config = RunConfig::new();
        config.set_run_parameter("commandTimeout", "45");
        let session = Session::new(driver, config);
        assert_eq!(session.command_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_clones_share_one_driver() {
        let (driver, session) = session();
        let clone = session.clone();
        clone.goto("http://a.example").unwrap();
        session.goto("http://b.example").unwrap();
        assert_eq!(driver.calls_of("goto"), 2);
    }
}
