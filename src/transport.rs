//! The seam between the API clients and whatever moves bytes over HTTP.
//!
//! Clients only build `Request<Bytes>` values and decode `Response<Bytes>`
//! values; a [`Transport`] executes them. [`RouterTransport`] runs requests
//! in-process against an `axum::Router`, which is how the stub service is
//! exercised without a socket.

use crate::errors::{ApiError, ApiResult};
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use bytes::Bytes;
use std::{future::Future, sync::Arc};
use tower::ServiceExt;

/// Executes one fully-built request and returns the fully-received response.
///
/// Any status code is a successful execution; interpreting it belongs to
/// the caller.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = ApiResult<Response<Bytes>>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = ApiResult<Response<Bytes>>> + Send {
        (**self).execute(request)
    }
}

/// Dispatches requests straight into an `axum::Router`.
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
}

impl RouterTransport {
    pub fn new(router: Router) -> Self {
        Self { router }
    }
}

impl Transport for RouterTransport {
    async fn execute(&self, request: Request<Bytes>) -> ApiResult<Response<Bytes>> {
        let response = self
            .router
            .clone()
            .oneshot(request.map(Body::from))
            .await
            .map_err(|never| -> ApiError { match never {} })?;

        let (parts, body) = response.into_parts();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Response::from_parts(parts, body))
    }
}
