//! HTTP handlers for the stub Swift account and Glance image endpoints.
//! Metadata travels in headers only; bodies are empty except for the JSON
//! returned by image updates and the health probe.

use super::store::StubStore;
use crate::{
    binders::{account::bind_metadata, image::{ImageMetadataUpdate, image_details_to_headers}},
    date::ChronoDateService,
    errors::AppError,
    headers::{
        ACCOUNT_BYTES_USED, ACCOUNT_CONTAINER_COUNT, ACCOUNT_META_PREFIX, ACCOUNT_OBJECT_COUNT,
        ACCOUNT_REMOVE_META_PREFIX,
    },
    models::account::Account,
    parsers::extract_prefixed,
};
use axum::{
    Json,
    body::Body,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// `GET /healthz`
///
/// Liveness probe — always 200 with a small JSON body, no store access.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// `HEAD /swift/v1/{account}` — counters plus `X-Account-Meta-*`.
pub async fn head_account(
    State(store): State<StubStore>,
    Path(account): Path<String>,
) -> Result<Response, AppError> {
    let record = store.account(&account).await?;
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    set_account_headers(response.headers_mut(), &record)?;
    Ok(response)
}

/// `POST /swift/v1/{account}` — set `X-Account-Meta-*`, drop
/// `X-Remove-Account-Meta-*`.
pub async fn post_account(
    State(store): State<StubStore>,
    Path(account): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let set = extract_prefixed(&headers, ACCOUNT_META_PREFIX)?;
    let remove = extract_prefixed(&headers, ACCOUNT_REMOVE_META_PREFIX)?;
    debug!(
        "account {}: setting {} and removing {} metadata keys",
        account,
        set.len(),
        remove.len()
    );
    store
        .update_account_metadata(&account, set, remove.into_keys())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `HEAD /glance/v1/images/{id}` — every image field as `X-Image-Meta-*`.
pub async fn head_image(
    State(store): State<StubStore>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let image = store.image(&id).await?;
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    *response.headers_mut() = image_details_to_headers(&image, &ChronoDateService)?;
    Ok(response)
}

/// `PUT /glance/v1/images/{id}` — merge header metadata, reply with the
/// updated image as JSON.
pub async fn put_image(
    State(store): State<StubStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let update = ImageMetadataUpdate::from_headers(&headers)?;
    let image = store.update_image(&id, update).await?;
    Ok(Json(json!({ "image": image })))
}

/// `DELETE /glance/v1/images/{id}` — soft-delete.
pub async fn delete_image(
    State(store): State<StubStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    store.delete_image(&id).await?;
    Ok(StatusCode::OK)
}

fn set_account_headers(headers: &mut HeaderMap, account: &Account) -> Result<(), AppError> {
    let counters = [
        (ACCOUNT_CONTAINER_COUNT, account.container_count),
        (ACCOUNT_OBJECT_COUNT, account.object_count),
        (ACCOUNT_BYTES_USED, account.bytes_used),
    ];
    for (name, value) in counters {
        if let Some(value) = value {
            headers.insert(HeaderName::from_static(name), HeaderValue::from(value));
        }
    }
    headers.extend(bind_metadata(&account.metadata)?);
    Ok(())
}
