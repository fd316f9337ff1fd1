//! Tests for the No-IP updater.

use std::sync::Mutex;
use std::time::Duration;

use super::{DnsUpdate, NoIpUpdater, UpdateError};
use crate::config::Config;
use crate::net::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a fixed response and captures requests.
struct MockClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn ok(body: &[u8]) -> Self {
        Self {
            response: Ok(HttpResponse::new(http::StatusCode::OK, body.to_vec())),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: Err(HttpError::Timeout),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(HttpError::Timeout) => Err(HttpError::Timeout),
            Err(other) => panic!("unsupported mock error: {other}"),
        }
    }
}

fn test_config() -> Config {
    Config {
        username: "alice".to_string(),
        password: "s3cret".to_string(),
        hostname: "my.host".to_string(),
        interval: Duration::from_secs(300),
        update_url: "https://ddns.example.com/nic/update".to_string(),
        check_ip_url: "https://ip.example.com".to_string(),
    }
}

#[tokio::test]
async fn builds_query_with_hostname_and_ip() {
    let updater = NoIpUpdater::new(MockClient::ok(b"good 1.2.3.4"), &test_config());

    updater.update("1.2.3.4").await.unwrap();

    let requests = updater.client.captured_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(
        requests[0].url.query(),
        Some("hostname=my.host&myip=1.2.3.4")
    );
}

#[tokio::test]
async fn attaches_configured_credentials() {
    let updater = NoIpUpdater::new(MockClient::ok(b"good"), &test_config());

    updater.update("1.2.3.4").await.unwrap();

    let requests = updater.client.captured_requests();
    let auth = requests[0].basic_auth.as_ref().expect("basic auth set");
    assert_eq!(auth.username, "alice");
    assert_eq!(auth.password, "s3cret");
}

#[tokio::test]
async fn percent_encodes_hostname() {
    let mut config = test_config();
    config.hostname = "my host/one".to_string();
    let updater = NoIpUpdater::new(MockClient::ok(b"good"), &config);

    updater.update("1.2.3.4").await.unwrap();

    let requests = updater.client.captured_requests();
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.contains("hostname=my+host%2Fone"), "query was {query}");
}

#[tokio::test]
async fn provider_response_is_not_interpreted() {
    // Even a provider-level rejection body counts as a transported
    // update; only transport failures are errors.
    let updater = NoIpUpdater::new(MockClient::ok(b"nohost"), &test_config());

    assert!(updater.update("1.2.3.4").await.is_ok());
}

#[tokio::test]
async fn transport_error_propagates() {
    let updater = NoIpUpdater::new(MockClient::failing(), &test_config());

    let err = updater.update("1.2.3.4").await.unwrap_err();

    assert!(matches!(err, UpdateError::Request(HttpError::Timeout)));
}

#[tokio::test]
async fn malformed_update_url_is_an_error() {
    let mut config = test_config();
    config.update_url = "not a url".to_string();
    let updater = NoIpUpdater::new(MockClient::ok(b"good"), &config);

    let err = updater.update("1.2.3.4").await.unwrap_err();

    assert!(matches!(err, UpdateError::BadUrl { .. }));
    let shown = err.to_string();
    assert!(shown.contains("not a url"), "error was {shown}");
}
