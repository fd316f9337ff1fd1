//! CLI argument parsing using clap.
//!
//! The command-line surface is deliberately tiny: `-h`/`--help` prints
//! usage (including the environment variable reference) and exits 0;
//! everything else is configured through the environment. Unrecognized
//! arguments are accepted and ignored.

use clap::Parser;

const ENV_HELP: &str = "Environment variables:
  NOIP_USER              No-IP account username (required)
  NOIP_PASS              No-IP account password (required)
  NOIP_HOST              Hostname to update (required)
  NOIP_INTERVAL_MINUTES  Interval between updates (default: 5 minutes)
  NOIP_URL               No-IP update URL (default: https://dynupdate.no-ip.com/nic/update)
  CHECK_IP_URL           URL to check public IP (default: https://checkip.amazonaws.com)";

/// No-IP Dynamic DNS Updater
///
/// Periodically detects the public IP address and updates a No-IP
/// hostname when it changes. All settings come from the environment.
#[derive(Debug, Parser)]
#[command(name = "noipd")]
#[command(version, about, after_help = ENV_HELP)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
