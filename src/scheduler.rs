//! Fixed-interval check-and-update loop.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::checker::PublicIpSource;
use crate::updater::DnsUpdate;

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;

/// Periodic scheduler that keeps the DNS record synchronized.
///
/// On each tick: detect the public IP, compare it against the cached
/// last-updated value, and push an update when it differs. The cache
/// is overwritten only after a successful update, so a failed push is
/// retried with the same address on the next tick.
///
/// All failures are tick-local; nothing here terminates the process.
///
/// # Type Parameters
///
/// * `S` - The [`PublicIpSource`] used to detect the current address
/// * `U` - The [`DnsUpdate`] used to push changes to the provider
#[derive(Debug)]
pub struct Scheduler<S, U> {
    source: S,
    updater: U,
    interval: Duration,
    last_updated_ip: Option<String>,
}

impl<S, U> Scheduler<S, U>
where
    S: PublicIpSource,
    U: DnsUpdate,
{
    /// Creates a scheduler ticking at `interval`.
    ///
    /// The last-updated cache starts empty, so the first detected
    /// address always triggers an update.
    pub const fn new(source: S, updater: U, interval: Duration) -> Self {
        Self {
            source,
            updater,
            interval,
            last_updated_ip: None,
        }
    }

    /// Returns the IP most recently pushed with success, if any.
    #[must_use]
    pub fn last_updated_ip(&self) -> Option<&str> {
        self.last_updated_ip.as_deref()
    }

    /// Runs the loop forever.
    ///
    /// The first check happens one full interval after startup, and
    /// ticks that fall due while a tick is still running are skipped
    /// rather than queued. There is no shutdown path; the future never
    /// resolves and the process ends only via external termination.
    pub async fn run(mut self) {
        let mut timer = tokio::time::interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The interval's initial tick completes immediately; consume
        // it so the first check waits a full period.
        timer.tick().await;

        loop {
            timer.tick().await;
            self.tick().await;
        }
    }

    /// Performs one check-and-maybe-update cycle.
    pub async fn tick(&mut self) {
        let current_ip = match self.source.current_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                tracing::error!("Failed to determine public IP: {e}");
                return;
            }
        };

        if self.last_updated_ip.as_deref() == Some(current_ip.as_str()) {
            tracing::debug!("Public IP unchanged ({current_ip}), skipping update");
            return;
        }

        tracing::info!("New public IP detected: {current_ip}");
        match self.updater.update(&current_ip).await {
            Ok(()) => self.last_updated_ip = Some(current_ip),
            Err(e) => {
                // Cache stays as-is so the same address is retried
                // as "changed" on the next tick.
                tracing::error!("DNS update failed: {e}");
            }
        }
    }
}
