//! Tests for HTTP request/response value types.

use super::http::{HttpRequest, HttpResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/nic/update").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn get_creates_get_request_without_auth() {
        let req = HttpRequest::get(test_url());

        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url.as_str(), "https://example.com/nic/update");
        assert!(req.basic_auth.is_none());
    }

    #[test]
    fn with_basic_auth_attaches_credentials() {
        let req = HttpRequest::get(test_url()).with_basic_auth("alice", "s3cret");

        let auth = req.basic_auth.expect("credentials should be set");
        assert_eq!(auth.username, "alice");
        assert_eq!(auth.password, "s3cret");
    }
}

mod http_response {
    use super::*;

    #[test]
    fn is_success_for_2xx_status() {
        let response = HttpResponse::new(http::StatusCode::OK, vec![]);
        assert!(response.is_success());

        let response = HttpResponse::new(http::StatusCode::UNAUTHORIZED, vec![]);
        assert!(!response.is_success());
    }

    #[test]
    fn body_text_returns_utf8_body() {
        let response = HttpResponse::new(http::StatusCode::OK, b"good 1.2.3.4".to_vec());
        assert_eq!(response.body_text(), Some("good 1.2.3.4"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        let response = HttpResponse::new(http::StatusCode::OK, vec![0xff, 0xfe]);
        assert_eq!(response.body_text(), None);
    }
}
