//! Environment-based configuration loading.
//!
//! This module contains [`Config`], the single flat record of runtime
//! settings, created once at startup and then owned by the scheduler.

use std::env;
use std::fmt;
use std::time::Duration;

use super::defaults;
use super::error::{ConfigError, FieldReport, var};

/// Runtime configuration, loaded once from the environment.
///
/// Required fields (`username`, `password`, `hostname`) are guaranteed
/// non-blank after construction. The URL fields are carried as opaque
/// strings; well-formedness is checked at request time, not here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Basic-auth username for the update endpoint.
    pub username: String,

    /// Basic-auth password for the update endpoint.
    pub password: String,

    /// Hostname whose DNS record is kept up to date.
    pub hostname: String,

    /// Polling interval.
    pub interval: Duration,

    /// Update endpoint URL.
    pub update_url: String,

    /// Public-IP echo endpoint URL.
    pub check_ip_url: String,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ username: {}, hostname: {}, interval: {}m, update_url: {}, check_ip_url: {} }}",
            self.username,
            self.hostname,
            self.interval.as_secs() / 60,
            self.update_url,
            self.check_ip_url,
        )
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if any of `NOIP_USER`,
    /// `NOIP_PASS`, or `NOIP_HOST` is absent or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through a pluggable variable lookup.
    ///
    /// This is the seam used by tests; [`Config::from_env`] passes
    /// [`env::var`]. A variable that is set but empty is treated the
    /// same as an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if any required
    /// variable is absent or blank.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username = lookup(var::USER).unwrap_or_default();
        let password = lookup(var::PASS).unwrap_or_default();
        let hostname = lookup(var::HOST).unwrap_or_default();
        let interval_minutes = parse_interval_minutes(lookup(var::INTERVAL_MINUTES).as_deref());
        let update_url = lookup(var::UPDATE_URL)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::UPDATE_URL.to_string());
        let check_ip_url = lookup(var::CHECK_IP_URL)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults::CHECK_IP_URL.to_string());

        let mut missing = Vec::new();
        if username.is_empty() {
            missing.push(var::USER);
        }
        if password.is_empty() {
            missing.push(var::PASS);
        }
        if hostname.is_empty() {
            missing.push(var::HOST);
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequired {
                missing,
                report: FieldReport {
                    username,
                    password_len: password.len(),
                    hostname,
                    interval_minutes,
                },
            });
        }

        Ok(Self {
            username,
            password,
            hostname,
            interval: Duration::from_secs(interval_minutes * 60),
            update_url,
            check_ip_url,
        })
    }
}

/// Resolves the polling interval, falling back to the default.
///
/// Absent, non-numeric, and zero values all fall back; zero would make
/// the scheduler busy-loop, so it is treated as invalid rather than
/// honored.
fn parse_interval_minutes(raw: Option<&str>) -> u64 {
    match raw.and_then(|s| s.parse::<u64>().ok()) {
        Some(minutes) if minutes > 0 => minutes,
        Some(_) => {
            tracing::warn!(
                "{} must be a positive number, defaulting to {} minutes",
                var::INTERVAL_MINUTES,
                defaults::INTERVAL_MINUTES,
            );
            defaults::INTERVAL_MINUTES
        }
        None => {
            tracing::warn!(
                "{} missing or not a number, defaulting to {} minutes",
                var::INTERVAL_MINUTES,
                defaults::INTERVAL_MINUTES,
            );
            defaults::INTERVAL_MINUTES
        }
    }
}
