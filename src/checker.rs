//! Public IP detection via an HTTP echo service.

use thiserror::Error;

use crate::net::{HttpClient, HttpError, HttpRequest};

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;

/// Error type for public IP detection failures.
///
/// All variants are tick-local: the scheduler logs them and tries
/// again on the next tick.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request to the echo service failed.
    #[error("IP check request failed: {0}")]
    Request(#[from] HttpError),

    /// The echo service returned a body that is not valid UTF-8.
    #[error("IP check response body was not valid UTF-8")]
    InvalidBody,
}

/// Trait for determining the current public IP address.
///
/// Fronts [`IpChecker`] so the scheduler can be driven by a scripted
/// source in tests.
pub trait PublicIpSource: Send + Sync {
    /// Returns the current public IP address as an opaque string.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] if the address could not be determined.
    fn current_ip(&self) -> impl std::future::Future<Output = Result<String, CheckError>> + Send;
}

/// Detects the public IP by querying a "what is my IP" endpoint.
///
/// The response body is whitespace-trimmed and otherwise treated
/// opaquely: no address-format validation and no status-code
/// interpretation, matching the provider contract of "plain-text IP
/// in the body".
#[derive(Debug, Clone)]
pub struct IpChecker<H> {
    client: H,
    check_url: String,
}

impl<H> IpChecker<H> {
    /// Creates a checker that queries `check_url`.
    pub fn new(client: H, check_url: impl Into<String>) -> Self {
        Self {
            client,
            check_url: check_url.into(),
        }
    }

    /// Returns the configured echo endpoint URL.
    #[must_use]
    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

impl<H: HttpClient> PublicIpSource for IpChecker<H> {
    async fn current_ip(&self) -> Result<String, CheckError> {
        let url = url::Url::parse(&self.check_url)
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        let response = self.client.execute(HttpRequest::get(url)).await?;
        let body = response.body_text().ok_or(CheckError::InvalidBody)?;

        Ok(body.trim().to_string())
    }
}
