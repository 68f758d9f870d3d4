//! Defines routes for the stub Swift and Glance endpoints.
//!
//! ## Structure
//! - **Swift account** (storage URL `/swift/v1/{account}`)
//!   - `HEAD   /swift/v1/{account}` — counters and metadata
//!   - `POST   /swift/v1/{account}` — set / remove metadata
//!
//! - **Glance images** (API root `/glance/v1`)
//!   - `HEAD   /glance/v1/images/{id}` — image metadata headers
//!   - `PUT    /glance/v1/images/{id}` — update metadata
//!   - `DELETE /glance/v1/images/{id}` — soft-delete

use super::{
    handlers::{delete_image, head_account, head_image, healthz, post_account, put_image},
    store::StubStore,
};
use axum::{
    Router,
    routing::{get, head},
};

/// Build the router for all stub routes; the store is shared state.
pub fn routes() -> Router<StubStore> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/swift/v1/{account}", head(head_account).post(post_account))
        .route(
            "/glance/v1/images/{id}",
            head(head_image).put(put_image).delete(delete_image),
        )
}

/// Router with `store` attached, ready to serve or to wrap in a
/// [`RouterTransport`](crate::transport::RouterTransport).
pub fn app(store: StubStore) -> Router {
    routes().with_state(store)
}
