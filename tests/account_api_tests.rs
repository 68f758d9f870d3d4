mod common;

use axum::http::{Method, StatusCode};
use common::{ACCOUNT, fixture, swift_endpoint};
use openstack_metadata::{api::AccountApi, errors::ApiError};
use std::collections::BTreeMap;

fn metadata(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn get_returns_counters_of_fresh_account() {
    let fx = fixture().await;
    let api = AccountApi::new(fx.transport, swift_endpoint(ACCOUNT));

    let account = api.get().await.unwrap();
    assert_eq!(account.container_count, Some(0));
    assert_eq!(account.object_count, Some(0));
    assert_eq!(account.bytes_used, Some(0));
    assert!(account.metadata.is_empty());
}

#[tokio::test]
async fn metadata_can_be_created_updated_and_deleted() {
    let fx = fixture().await;
    let api = AccountApi::new(fx.transport, swift_endpoint(ACCOUNT));

    let created = api
        .create_or_update_metadata(&metadata(&[("Color", "Blue"), ("tier", "gold")]))
        .await
        .unwrap();
    assert!(created);

    let account = api.get().await.unwrap();
    assert_eq!(account.metadata, metadata(&[("color", "Blue"), ("tier", "gold")]));

    assert!(
        api.create_or_update_metadata(&metadata(&[("tier", "silver")]))
            .await
            .unwrap()
    );
    assert!(api.delete_metadata(&metadata(&[("color", "")])).await.unwrap());

    let account = api.get().await.unwrap();
    assert_eq!(account.metadata, metadata(&[("tier", "silver")]));

    let stored = fx.store.account(ACCOUNT).await.unwrap();
    assert_eq!(stored, account);
}

#[tokio::test]
async fn metadata_calls_on_unknown_account_report_false() {
    let fx = fixture().await;
    let api = AccountApi::new(fx.transport, swift_endpoint("AUTH_nobody"));

    assert!(
        !api.create_or_update_metadata(&metadata(&[("a", "b")]))
            .await
            .unwrap()
    );
    assert!(!api.delete_metadata(&metadata(&[("a", "")])).await.unwrap());
}

#[tokio::test]
async fn get_on_unknown_account_is_an_error() {
    let fx = fixture().await;
    let api = AccountApi::new(fx.transport, swift_endpoint("AUTH_nobody"));

    match api.get().await {
        Err(ApiError::Status {
            method,
            uri,
            status,
        }) => {
            assert_eq!(method, Method::HEAD);
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(uri.ends_with("/swift/v1/AUTH_nobody"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_metadata_key_fails_before_sending() {
    let fx = fixture().await;
    let api = AccountApi::new(fx.transport, swift_endpoint(ACCOUNT));

    let err = api
        .create_or_update_metadata(&metadata(&[("not a header", "x")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Header(_)));
    assert!(fx.store.account(ACCOUNT).await.unwrap().metadata.is_empty());
}
