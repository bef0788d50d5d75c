//! Run configuration.
//!
//! Named settings resolved from two layers: run parameters override
//! static app settings. Keys are case-insensitive; absence returns
//! `None` rather than failing, except where a typed accessor applies a
//! hard-coded default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default command timeout in seconds
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// Browser a test run drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrowserKind {
    /// Google Chrome
    #[default]
    Chrome,
    /// Mozilla Firefox
    Firefox,
    /// Internet Explorer
    Ie,
}

/// Device layout a test run emulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Desktop layout, no emulation
    #[default]
    Desktop,
    /// Tablet layout
    Tablet,
    /// Phone layout
    Phone,
}

impl DeviceKind {
    /// Emulated device name handed to the browser for mobile layouts
    #[must_use]
    pub const fn emulation_string(self) -> &'static str {
        match self {
            Self::Desktop => "none",
            Self::Tablet => "iPad",
            Self::Phone => "iPhone 6",
        }
    }
}

/// When screenshots are captured during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScreenshotPolicy {
    /// Never capture
    #[default]
    Never,
    /// Capture when a test fails
    OnFail,
    /// Capture after every step
    Always,
}

/// Layered, case-insensitive settings for a test run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    run_parameters: HashMap<String, String>,
    app_settings: HashMap<String, String>,
}

impl RunConfig {
    /// Create an empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a run parameter (the overriding layer)
    pub fn set_run_parameter(&mut self, name: &str, value: impl Into<String>) {
        let _ = self
            .run_parameters
            .insert(name.to_lowercase(), value.into());
    }

    /// Set a static app setting (the base layer)
    pub fn set_app_setting(&mut self, name: &str, value: impl Into<String>) {
        let _ = self.app_settings.insert(name.to_lowercase(), value.into());
    }

    /// Look up a setting; the first layer defining the key wins
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        let key = name.to_lowercase();
        self.run_parameters
            .get(&key)
            .or_else(|| self.app_settings.get(&key))
            .map(String::as_str)
    }

    /// The browser for this run; unrecognized or missing values fall
    /// back to Chrome
    #[must_use]
    pub fn browser(&self) -> BrowserKind {
        match self.get("browser").map(str::to_lowercase).as_deref() {
            Some("internetexplorer" | "ie") => BrowserKind::Ie,
            Some("firefox") => BrowserKind::Firefox,
            _ => BrowserKind::Chrome,
        }
    }

    /// The device for this run; unrecognized or missing values fall
    /// back to Desktop
    #[must_use]
    pub fn device(&self) -> DeviceKind {
        match self.get("device").map(str::to_lowercase).as_deref() {
            Some("tablet") => DeviceKind::Tablet,
            Some("phone") => DeviceKind::Phone,
            _ => DeviceKind::Desktop,
        }
    }

    /// Timeout for individual driver commands; unparsable or missing
    /// values fall back to 120 seconds
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        let secs = self
            .get("commandtimeout")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Screenshot capture policy; defaults to Never
    #[must_use]
    pub fn screenshot(&self) -> ScreenshotPolicy {
        match self.get("screenshot").map(str::to_lowercase).as_deref() {
            Some("onfail") => ScreenshotPolicy::OnFail,
            Some("always") => ScreenshotPolicy::Always,
            _ => ScreenshotPolicy::Never,
        }
    }

    /// Directory screenshots are written to, if configured
    #[must_use]
    pub fn screenshot_path(&self) -> Option<&str> {
        self.get("screenshotpath")
    }

    /// Emulation string for this run's device
    #[must_use]
    pub fn emulation_string(&self) -> &'static str {
        self.device().emulation_string()
    }
}
