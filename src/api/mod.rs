//! Explicit per-resource API clients.
//!
//! Each operation builds a request from a [`ServiceEndpoint`], executes it
//! through a [`Transport`], and decodes the response with the matching
//! parser. 404 fallbacks are applied here, per operation.

pub mod account;
pub mod image;

pub use account::AccountApi;
pub use image::ImageApi;

use crate::{
    errors::{ApiError, ApiResult},
    headers::AUTH_TOKEN,
    transport::Transport,
};
use axum::http::{HeaderMap, Method, Request, Response, StatusCode};
use bytes::Bytes;
use tracing::{debug, warn};

/// Base URL of one service plus the token sent with every request.
///
/// For Swift this is the account's storage URL (e.g.
/// `https://swift.example.com/v1/AUTH_demo`); for Glance the versioned
/// API root (e.g. `https://glance.example.com/v1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    url: String,
    auth_token: Option<String>,
}

impl ServiceEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self {
            url,
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// `path` relative to the endpoint; an empty path is the endpoint itself.
    fn resource(&self, path: &str) -> String {
        if path.is_empty() {
            self.url.clone()
        } else {
            format!("{}/{}", self.url, path.trim_start_matches('/'))
        }
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
    ) -> ApiResult<Request<Bytes>> {
        let mut builder = Request::builder().method(method).uri(self.resource(path));
        if let Some(token) = &self.auth_token {
            builder = builder.header(AUTH_TOKEN, token);
        }
        if let Some(request_headers) = builder.headers_mut() {
            request_headers.extend(headers);
        }
        Ok(builder.body(Bytes::new())?)
    }
}

/// Execute `request`, logging the exchange.
async fn dispatch<T: Transport>(
    transport: &T,
    request: Request<Bytes>,
) -> ApiResult<Response<Bytes>> {
    let method = request.method().clone();
    let uri = request.uri().to_string();
    debug!(%method, %uri, "sending request");
    let response = transport.execute(request).await?;
    debug!(%method, %uri, status = %response.status(), "received response");
    Ok(response)
}

fn status_error(method: &Method, uri: &str, status: StatusCode) -> ApiError {
    ApiError::Status {
        method: method.clone(),
        uri: uri.to_owned(),
        status,
    }
}

/// 2xx passes; anything else is an error.
fn require_success(method: &Method, uri: &str, status: StatusCode) -> ApiResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(status_error(method, uri, status))
    }
}

/// 2xx is `true`, 404 is `false`, anything else is an error.
fn false_on_not_found(method: &Method, uri: &str, status: StatusCode) -> ApiResult<bool> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        warn!(%method, %uri, "resource not found, reporting false");
        Ok(false)
    } else {
        Err(status_error(method, uri, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let endpoint = ServiceEndpoint::new("http://glance.local/v1/");
        assert_eq!(endpoint.url(), "http://glance.local/v1");
        assert_eq!(endpoint.resource(""), "http://glance.local/v1");
        assert_eq!(
            endpoint.resource("/images/abc"),
            "http://glance.local/v1/images/abc"
        );
    }

    #[test]
    fn test_request_carries_token_and_headers() {
        let endpoint =
            ServiceEndpoint::new("http://swift.local/v1/AUTH_demo").with_auth_token("tk");
        let mut headers = HeaderMap::new();
        headers.insert("x-account-meta-color", "blue".parse().unwrap());

        let request = endpoint.request(Method::POST, "", headers).unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri(), "http://swift.local/v1/AUTH_demo");
        assert_eq!(request.headers()["x-auth-token"], "tk");
        assert_eq!(request.headers()["x-account-meta-color"], "blue");
        assert!(request.body().is_empty());
    }

    #[test]
    fn test_invalid_token_fails_request_build() {
        let endpoint = ServiceEndpoint::new("http://swift.local").with_auth_token("bad\ntoken");
        let err = endpoint
            .request(Method::HEAD, "", HeaderMap::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[test]
    fn test_status_fallbacks() {
        let method = Method::POST;
        assert!(false_on_not_found(&method, "u", StatusCode::NO_CONTENT).unwrap());
        assert!(!false_on_not_found(&method, "u", StatusCode::NOT_FOUND).unwrap());
        let err = false_on_not_found(&method, "u", StatusCode::UNAUTHORIZED).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: StatusCode::UNAUTHORIZED, .. }
        ));
        assert!(require_success(&Method::HEAD, "u", StatusCode::NOT_FOUND).is_err());
    }
}
