//! Authenticated updates to the No-IP update endpoint.

use thiserror::Error;

use crate::config::Config;
use crate::net::{HttpClient, HttpError, HttpRequest};

#[cfg(test)]
#[path = "updater_tests.rs"]
mod tests;

/// Error type for DNS update failures.
///
/// Tick-local: a failed update leaves the scheduler's cached IP
/// unchanged so the same address is retried on the next tick.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The configured update URL could not be parsed.
    #[error("Invalid update URL '{url}': {reason}")]
    BadUrl {
        /// The URL string as configured.
        url: String,
        /// Why it failed to parse.
        reason: String,
    },

    /// The request to the update endpoint failed.
    #[error("DNS update request failed: {0}")]
    Request(#[from] HttpError),
}

/// Trait for pushing a detected IP to the DNS provider.
///
/// Fronts [`NoIpUpdater`] so the scheduler can be tested with a
/// recording mock.
pub trait DnsUpdate: Send + Sync {
    /// Pushes `ip` as the new address for the configured hostname.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError`] if the request could not be built or
    /// could not be transported.
    fn update(&self, ip: &str) -> impl std::future::Future<Output = Result<(), UpdateError>> + Send;
}

/// Sends authenticated GET updates to a No-IP compatible endpoint.
///
/// The request carries `hostname` and `myip` query parameters
/// (percent-encoded) and HTTP basic authentication. The provider's
/// response body is logged verbatim; response codes are not
/// interpreted, so any transported response counts as a successful
/// update.
#[derive(Debug, Clone)]
pub struct NoIpUpdater<H> {
    client: H,
    update_url: String,
    hostname: String,
    username: String,
    password: String,
}

impl<H> NoIpUpdater<H> {
    /// Creates an updater from the loaded configuration.
    pub fn new(client: H, config: &Config) -> Self {
        Self {
            client,
            update_url: config.update_url.clone(),
            hostname: config.hostname.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Builds the update request URL for `ip`.
    fn request_url(&self, ip: &str) -> Result<url::Url, UpdateError> {
        url::Url::parse_with_params(
            &self.update_url,
            &[("hostname", self.hostname.as_str()), ("myip", ip)],
        )
        .map_err(|e| UpdateError::BadUrl {
            url: self.update_url.clone(),
            reason: e.to_string(),
        })
    }
}

impl<H: HttpClient> DnsUpdate for NoIpUpdater<H> {
    async fn update(&self, ip: &str) -> Result<(), UpdateError> {
        let url = self.request_url(ip)?;
        tracing::debug!("updating via {url}");

        let request = HttpRequest::get(url).with_basic_auth(&self.username, &self.password);
        let response = self.client.execute(request).await?;

        match response.body_text() {
            Some(body) => tracing::info!("update endpoint response: {}", body.trim()),
            None => tracing::info!(
                "update endpoint returned {} with a non-UTF-8 body",
                response.status
            ),
        }

        Ok(())
    }
}
