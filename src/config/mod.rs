//! Configuration layer for noip-updater.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Environment-based configuration loading ([`Config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! All runtime configuration comes from environment variables; the CLI
//! surface only exists for `-h`/`--help` and verbosity. Required
//! variables (`NOIP_USER`, `NOIP_PASS`, `NOIP_HOST`) have no defaults
//! and missing or blank values are fatal at startup. Optional variables
//! fall back to the constants in [`defaults`].
//!
//! URLs are deliberately NOT validated for well-formedness here; a
//! malformed URL surfaces as a per-tick request error instead of a
//! startup failure.

mod cli;
pub mod defaults;
mod env;
mod error;


pub use cli::Cli;
pub use env::Config;
pub use error::{ConfigError, FieldReport, var};
