//! Polling wait primitive.
//!
//! All waits in this crate are synchronous blocking poll-sleep loops:
//! the condition is checked, the thread sleeps for the poll interval,
//! and the cycle repeats until the condition holds or the timeout
//! elapses. There is no scheduler handoff and no cancellation beyond
//! the timeout itself.

use std::time::{Duration, Instant};

/// Default wait timeout (15 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 15_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for polling waits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Poll interval as a [`Duration`]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll `condition` until it returns true or the timeout elapses.
///
/// The condition is checked before the first sleep, so an
/// already-satisfied wait returns without sleeping. On timeout the
/// elapsed time is returned for the caller to wrap in its own error
/// with full diagnostic context.
pub(crate) fn poll_until(
    options: &WaitOptions,
    mut condition: impl FnMut() -> bool,
) -> Result<Duration, Duration> {
    let start = Instant::now();
    loop {
        if condition() {
            return Ok(start.elapsed());
        }
        if start.elapsed() >= options.timeout() {
            return Err(start.elapsed());
        }
        std::thread::sleep(options.poll_interval());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod options_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let options = WaitOptions::default();
            assert_eq!(options.timeout_ms, DEFAULT_WAIT_TIMEOUT_MS);
            assert_eq!(options.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        }

        #[test]
        fn test_builder_chain() {
            let options = WaitOptions::new().with_timeout(100).with_poll_interval(10);
            assert_eq!(options.timeout(), Duration::from_millis(100));
            assert_eq!(options.poll_interval(), Duration::from_millis(10));
        }
    }

    mod poll_tests {
        use super::*;

        #[test]
        fn test_immediate_success_does_not_sleep() {
            let options = WaitOptions::new().with_timeout(100);
            let start = Instant::now();
            assert!(poll_until(&options, || true).is_ok());
            assert!(start.elapsed() < Duration::from_millis(40));
        }

        #[test]
        fn test_timeout_with_bounded_overrun() {
            let options = WaitOptions::new().with_timeout(100).with_poll_interval(10);
            let elapsed = poll_until(&options, || false).unwrap_err();
            assert!(elapsed >= Duration::from_millis(100));
            // one poll interval of slack, plus scheduling noise
            assert!(elapsed < Duration::from_millis(250));
        }

        #[test]
        fn test_condition_becoming_true() {
            let options = WaitOptions::new().with_timeout(500).with_poll_interval(5);
            let mut remaining = 3;
            let result = poll_until(&options, || {
                if remaining == 0 {
                    true
                } else {
                    remaining -= 1;
                    false
                }
            });
            assert!(result.is_ok());
        }
    }
}
