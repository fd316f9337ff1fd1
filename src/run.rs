//! Application execution logic.
//!
//! Wires the HTTP client, IP checker, and DNS updater into the
//! scheduler loop.

use noip_updater::checker::IpChecker;
use noip_updater::config::Config;
use noip_updater::net::ReqwestClient;
use noip_updater::scheduler::Scheduler;
use noip_updater::updater::NoIpUpdater;

/// Runs the check-and-update loop forever.
///
/// The returned future never resolves; the process ends only via
/// external termination.
pub async fn execute(config: Config) {
    let client = ReqwestClient::new();
    let checker = IpChecker::new(client.clone(), &config.check_ip_url);
    let updater = NoIpUpdater::new(client, &config);

    Scheduler::new(checker, updater, config.interval).run().await;
}
