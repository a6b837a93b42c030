//! Manager-side operation defaults.

use std::time::Duration;

/// Default per-operation timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default transport-level retry count.
pub const DEFAULT_RETRIES: u32 = 1;

/// Per-process defaults for live-mode operations.
///
/// Read once at startup and immutable thereafter; every [`Session`]
/// created by the registry snapshots these values.
///
/// [`Session`]: crate::manager::Session
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Deadline for a single operation (the whole retry sequence shares it
    /// per attempt, not cumulatively).
    pub timeout: Duration,
    /// How many times a timed-out request is re-sent before failing.
    pub retries: u32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retries: DEFAULT_RETRIES,
        }
    }
}

impl ManagerConfig {
    /// Build a config from the environment: `SNMP_TIMEOUT` (milliseconds)
    /// and `SNMP_RETRIES`, falling back to the defaults when unset or
    /// unparsable.
    pub fn from_env() -> Self {
        let timeout = std::env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        let retries = std::env::var("SNMP_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RETRIES);

        Self { timeout, retries }
    }

    /// Override the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry count.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}
