//! Error types for configuration loading.

use std::fmt;

use thiserror::Error;

/// Environment variable names.
///
/// Use these constants instead of string literals when reading the
/// environment or reporting which variables are missing.
pub mod var {
    /// Basic-auth username (required).
    pub const USER: &str = "NOIP_USER";
    /// Basic-auth password (required).
    pub const PASS: &str = "NOIP_PASS";
    /// Hostname to update (required).
    pub const HOST: &str = "NOIP_HOST";
    /// Polling interval in minutes.
    pub const INTERVAL_MINUTES: &str = "NOIP_INTERVAL_MINUTES";
    /// No-IP update endpoint.
    pub const UPDATE_URL: &str = "NOIP_URL";
    /// Public-IP echo endpoint.
    pub const CHECK_IP_URL: &str = "CHECK_IP_URL";
}

/// Snapshot of the loaded fields, for startup diagnostics.
///
/// The password is reported by length only, never by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    /// The username as read from the environment (may be blank).
    pub username: String,
    /// Length of the password as read from the environment.
    pub password_len: usize,
    /// The hostname as read from the environment (may be blank).
    pub hostname: String,
    /// The resolved polling interval in minutes.
    pub interval_minutes: u64,
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Username: {}", self.username)?;
        writeln!(f, "Password length: {}", self.password_len)?;
        writeln!(f, "Hostname: {}", self.hostname)?;
        write!(f, "Update interval: {} minutes", self.interval_minutes)
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are missing or blank.
    ///
    /// Fatal at startup; `main` prints this diagnostic to standard
    /// output and exits with status 1.
    #[error("Missing required environment variables: {}\n{report}", missing.join(", "))]
    MissingRequired {
        /// Names of the missing variables, in declaration order.
        missing: Vec<&'static str>,
        /// What was (and was not) populated.
        report: FieldReport,
    },
}

impl ConfigError {
    /// Returns the names of the missing variables, if any.
    #[must_use]
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            Self::MissingRequired { missing, .. } => missing,
        }
    }
}
