//! Glance v1 image operations addressed by image id.

use super::{ServiceEndpoint, dispatch, false_on_not_found, require_success};
use crate::{
    binders::image::ImageMetadataUpdate,
    date::DateService,
    errors::{ApiError, ApiResult},
    models::image::ImageDetails,
    parsers::ImageDetailsParser,
    transport::Transport,
};
use axum::http::{HeaderMap, Method, StatusCode};
use tracing::warn;

/// Client for `/images/{id}` under one Glance endpoint.
#[derive(Debug, Clone)]
pub struct ImageApi<T, D> {
    transport: T,
    endpoint: ServiceEndpoint,
    parser: ImageDetailsParser<D>,
}

impl<T: Transport, D: DateService> ImageApi<T, D> {
    pub fn new(transport: T, endpoint: ServiceEndpoint, dates: D) -> Self {
        Self {
            transport,
            endpoint,
            parser: ImageDetailsParser::new(dates),
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// `HEAD /images/{id}`; `None` when the image does not exist.
    pub async fn get_details(&self, id: &str) -> ApiResult<Option<ImageDetails>> {
        let request = self
            .endpoint
            .request(Method::HEAD, &image_path(id)?, HeaderMap::new())?;
        let (method, uri) = (request.method().clone(), request.uri().to_string());

        let response = dispatch(&self.transport, request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            warn!(%method, %uri, "image not found, reporting none");
            return Ok(None);
        }
        require_success(&method, &uri, response.status())?;
        Ok(Some(self.parser.parse(response.headers())?))
    }

    /// `PUT /images/{id}` with only the fields set on `update`.
    ///
    /// Returns `false` when the image does not exist.
    pub async fn update_metadata(&self, id: &str, update: &ImageMetadataUpdate) -> ApiResult<bool> {
        let request = self
            .endpoint
            .request(Method::PUT, &image_path(id)?, update.to_headers()?)?;
        let (method, uri) = (request.method().clone(), request.uri().to_string());

        let response = dispatch(&self.transport, request).await?;
        false_on_not_found(&method, &uri, response.status())
    }

    /// `DELETE /images/{id}`; `false` when the image does not exist.
    pub async fn delete(&self, id: &str) -> ApiResult<bool> {
        let request = self
            .endpoint
            .request(Method::DELETE, &image_path(id)?, HeaderMap::new())?;
        let (method, uri) = (request.method().clone(), request.uri().to_string());

        let response = dispatch(&self.transport, request).await?;
        false_on_not_found(&method, &uri, response.status())
    }
}

/// Ids are used as a single path segment without escaping.
fn image_path(id: &str) -> ApiResult<String> {
    let safe = !matches!(id, "" | "." | "..")
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'));
    if safe {
        Ok(format!("images/{id}"))
    } else {
        Err(ApiError::InvalidId(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path_rejects_unsafe_ids() {
        assert_eq!(image_path("c1a2-b3").unwrap(), "images/c1a2-b3");
        for id in ["", "..", "../etc", "a/b", "a b", "id?x=1"] {
            assert!(matches!(image_path(id), Err(ApiError::InvalidId(_))), "{id}");
        }
    }
}
