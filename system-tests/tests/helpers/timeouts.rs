// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// Dependencies: system-tests
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default timeout for a single API call in the conformance suites.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Returns the effective timeout, honoring `OBJECT_API_SYSTEM_TEST_TIMEOUT_SEC`
/// when set. The override acts as a minimum to avoid shortening explicitly
/// longer test timeouts.
#[must_use]
#[allow(clippy::panic, reason = "Invalid timeout overrides abort the suite early.")]
pub fn resolve_timeout(requested: Duration) -> Duration {
    let config = SystemTestConfig::load().unwrap_or_else(|err| panic!("{err}"));
    config.timeout.map_or(requested, |floor| std::cmp::max(requested, floor))
}
