#![allow(dead_code)]

use openstack_metadata::{
    api::ServiceEndpoint,
    models::ImageDetails,
    stub::{StubStore, app},
    transport::RouterTransport,
};

pub const ACCOUNT: &str = "AUTH_test";

pub struct Fixture {
    pub store: StubStore,
    pub transport: RouterTransport,
    pub seeded_image: ImageDetails,
}

pub async fn fixture() -> Fixture {
    let store = StubStore::new();
    let seeded_image = store.seed(ACCOUNT).await;
    let transport = RouterTransport::new(app(store.clone()));
    Fixture {
        store,
        transport,
        seeded_image,
    }
}

pub fn swift_endpoint(account: &str) -> ServiceEndpoint {
    ServiceEndpoint::new(format!("http://stub.local/swift/v1/{account}"))
        .with_auth_token("token-123")
}

pub fn glance_endpoint() -> ServiceEndpoint {
    ServiceEndpoint::new("http://stub.local/glance/v1/").with_auth_token("token-123")
}
