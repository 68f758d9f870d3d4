//! Swift account operations.
//!
//! All three calls target the storage URL itself:
//! - `HEAD` — read counters and `x-account-meta-*` metadata
//! - `POST` with `x-account-meta-*` — create or update metadata
//! - `POST` with `x-remove-account-meta-*` — delete metadata

use super::{ServiceEndpoint, dispatch, false_on_not_found, require_success};
use crate::{
    binders::account::{bind_metadata, bind_metadata_removal},
    errors::ApiResult,
    models::account::Account,
    parsers::AccountParser,
    transport::Transport,
};
use axum::http::{HeaderMap, HeaderValue, Method, header};
use std::collections::BTreeMap;

/// Client for the account resource of one Swift storage URL.
#[derive(Debug, Clone)]
pub struct AccountApi<T> {
    transport: T,
    endpoint: ServiceEndpoint,
    parser: AccountParser,
}

impl<T: Transport> AccountApi<T> {
    pub fn new(transport: T, endpoint: ServiceEndpoint) -> Self {
        Self {
            transport,
            endpoint,
            parser: AccountParser,
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Read the account. Any non-2xx status, 404 included, is an error.
    pub async fn get(&self) -> ApiResult<Account> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        let request = self.endpoint.request(Method::HEAD, "", headers)?;
        let (method, uri) = (request.method().clone(), request.uri().to_string());

        let response = dispatch(&self.transport, request).await?;
        require_success(&method, &uri, response.status())?;
        Ok(self.parser.parse(response.headers())?)
    }

    /// Create or overwrite the given metadata entries.
    ///
    /// Returns `false` when the account does not exist.
    pub async fn create_or_update_metadata(
        &self,
        metadata: &BTreeMap<String, String>,
    ) -> ApiResult<bool> {
        self.post_metadata(bind_metadata(metadata)?).await
    }

    /// Remove the given metadata keys; their values are ignored.
    ///
    /// Returns `false` when the account does not exist.
    pub async fn delete_metadata(&self, metadata: &BTreeMap<String, String>) -> ApiResult<bool> {
        self.post_metadata(bind_metadata_removal(metadata)?).await
    }

    async fn post_metadata(&self, headers: HeaderMap) -> ApiResult<bool> {
        let request = self.endpoint.request(Method::POST, "", headers)?;
        let (method, uri) = (request.method().clone(), request.uri().to_string());

        let response = dispatch(&self.transport, request).await?;
        false_on_not_found(&method, &uri, response.status())
    }
}
