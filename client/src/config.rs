//! Client-side configuration for the mock service layer.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Simulated round-trip time of every mock backend call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(400);

/// `localStorage` key holding the serialized session user.
pub const DEFAULT_SESSION_KEY: &str = "cci_hub_session_user";

/// Tunables for `MockBackend`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockConfig {
    /// Delay applied before each async backend call resolves (browser only).
    pub latency: Duration,
    /// Storage key for the persisted session marker.
    pub session_key: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { latency: DEFAULT_LATENCY, session_key: DEFAULT_SESSION_KEY.to_owned() }
    }
}

impl MockConfig {
    /// Configuration for tests and SSR: no delay, isolated storage key.
    #[must_use]
    pub fn instant(session_key: &str) -> Self {
        Self { latency: Duration::ZERO, session_key: session_key.to_owned() }
    }
}
