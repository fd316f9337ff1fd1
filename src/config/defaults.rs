//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::time::Duration;

/// Default polling interval in minutes.
pub const INTERVAL_MINUTES: u64 = 5;

/// Default No-IP update endpoint.
pub const UPDATE_URL: &str = "https://dynupdate.no-ip.com/nic/update";

/// Default public-IP echo endpoint.
pub const CHECK_IP_URL: &str = "https://checkip.amazonaws.com";

/// Default polling interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_MINUTES * 60)
}
