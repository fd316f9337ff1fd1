//! HTTP request/response types and client trait.

use super::HttpError;

/// Basic-auth credentials attached to a request.
///
/// Carried as a request field rather than a pre-encoded header so that
/// mock clients in tests can assert on the raw credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Username sent in the Authorization header.
    pub username: String,
    /// Password sent in the Authorization header.
    pub password: String,
}

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` and `url`
/// crate types for method and target.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (only GET is used by this crate)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// Optional basic-auth credentials
    pub basic_auth: Option<BasicAuth>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    #[must_use]
    pub const fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            basic_auth: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub const fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Attaches basic-auth credentials to the request.
    #[must_use]
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}

/// An HTTP response received from a server.
///
/// Contains the status code and body of the response. The body is
/// fully buffered into memory.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection or body read fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn execute(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
