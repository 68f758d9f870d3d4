//! StubStore — in-memory state behind the stub Glance and Swift endpoints.
//!
//! Accounts and images live in maps guarded by `tokio::sync::RwLock`.
//! Nothing is persisted; the store is rebuilt (and reseeded) on start.

use crate::{
    binders::image::ImageMetadataUpdate,
    errors::AppError,
    models::{
        account::Account,
        image::{ContainerFormat, DiskFormat, ImageDetails, ImageStatus},
    },
};
use chrono::{DateTime, SubsecRound, Utc};
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Bytes standing in for the seeded image payload; its MD5 is the checksum.
const SEED_PAYLOAD: &[u8] = b"cirros-0.3.1-x86_64-disk.img";

#[derive(Debug, Error)]
pub enum StubError {
    #[error("account `{0}` not found")]
    AccountNotFound(String),
    #[error("image `{0}` not found")]
    ImageNotFound(String),
}

pub type StubResult<T> = Result<T, StubError>;

impl From<StubError> for AppError {
    fn from(err: StubError) -> Self {
        AppError::not_found(err.to_string())
    }
}

/// Shared handle to the stub's accounts and images.
#[derive(Clone, Default)]
pub struct StubStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    images: Arc<RwLock<HashMap<String, ImageDetails>>>,
}

/// Wall-clock time at the seconds precision the headers carry.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `account` with zeroed counters and one public `cirros` image
    /// owned by it. Returns the image.
    pub async fn seed(&self, account: &str) -> ImageDetails {
        self.create_account(account).await;

        let id = Uuid::new_v4().to_string();
        let created_at = now();
        let image = ImageDetails {
            location: format!("swift://{account}/glance/{id}"),
            id,
            name: "cirros".into(),
            checksum: format!("{:x}", md5::compute(SEED_PAYLOAD)),
            min_disk: 0,
            min_ram: 0,
            is_public: true,
            created_at,
            updated_at: created_at,
            owner: account.to_string(),
            status: ImageStatus::Active,
            container_format: Some(ContainerFormat::Bare),
            disk_format: Some(DiskFormat::Qcow2),
            deleted_at: None,
            size: Some(SEED_PAYLOAD.len() as i64),
            properties: [("os_distro".to_string(), "cirros".to_string())].into(),
        };
        self.insert_image(image.clone()).await;
        image
    }

    /// Register an empty account; an existing one is left untouched.
    pub async fn create_account(&self, name: &str) {
        self.accounts
            .write()
            .await
            .entry(name.to_string())
            .or_insert_with(|| Account {
                container_count: Some(0),
                object_count: Some(0),
                bytes_used: Some(0),
                metadata: BTreeMap::new(),
            });
    }

    pub async fn account(&self, name: &str) -> StubResult<Account> {
        self.accounts
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StubError::AccountNotFound(name.to_string()))
    }

    /// Apply Swift metadata semantics: `set` entries overwrite, and both
    /// `remove` keys and `set` entries with an empty value are dropped.
    pub async fn update_account_metadata(
        &self,
        name: &str,
        set: BTreeMap<String, String>,
        remove: impl IntoIterator<Item = String>,
    ) -> StubResult<Account> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(name)
            .ok_or_else(|| StubError::AccountNotFound(name.to_string()))?;

        for key in remove {
            account.metadata.remove(&key);
        }
        for (key, value) in set {
            if value.is_empty() {
                account.metadata.remove(&key);
            } else {
                account.metadata.insert(key, value);
            }
        }
        debug!(
            "account {} now has {} metadata entries",
            name,
            account.metadata.len()
        );
        Ok(account.clone())
    }

    pub async fn insert_image(&self, image: ImageDetails) {
        self.images.write().await.insert(image.id.clone(), image);
    }

    /// Fetch a live image; deleted images are reported as not found.
    pub async fn image(&self, id: &str) -> StubResult<ImageDetails> {
        self.images
            .read()
            .await
            .get(id)
            .filter(|image| image.status != ImageStatus::Deleted)
            .cloned()
            .ok_or_else(|| StubError::ImageNotFound(id.to_string()))
    }

    /// Merge `update` into a live image and bump `updated_at`.
    pub async fn update_image(
        &self,
        id: &str,
        update: ImageMetadataUpdate,
    ) -> StubResult<ImageDetails> {
        let mut images = self.images.write().await;
        let image = images
            .get_mut(id)
            .filter(|image| image.status != ImageStatus::Deleted)
            .ok_or_else(|| StubError::ImageNotFound(id.to_string()))?;

        if let Some(name) = update.name {
            image.name = name;
        }
        if let Some(is_public) = update.is_public {
            image.is_public = is_public;
        }
        if let Some(min_disk) = update.min_disk {
            image.min_disk = min_disk;
        }
        if let Some(min_ram) = update.min_ram {
            image.min_ram = min_ram;
        }
        if let Some(format) = update.container_format {
            image.container_format = Some(format);
        }
        if let Some(format) = update.disk_format {
            image.disk_format = Some(format);
        }
        image.properties.extend(update.properties);
        image.updated_at = now();
        Ok(image.clone())
    }

    /// Soft-delete: the record stays with status `deleted`.
    ///
    /// Repeated calls return ImageNotFound.
    pub async fn delete_image(&self, id: &str) -> StubResult<ImageDetails> {
        let mut images = self.images.write().await;
        let image = images
            .get_mut(id)
            .filter(|image| image.status != ImageStatus::Deleted)
            .ok_or_else(|| StubError::ImageNotFound(id.to_string()))?;

        let deleted_at = now();
        image.status = ImageStatus::Deleted;
        image.deleted_at = Some(deleted_at);
        image.updated_at = deleted_at;
        debug!("soft-deleted image {}", id);
        Ok(image.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_creates_account_and_image() {
        let store = StubStore::new();
        let image = store.seed("AUTH_test").await;

        let account = store.account("AUTH_test").await.unwrap();
        assert_eq!(account.container_count, Some(0));
        assert_eq!(image.checksum, format!("{:x}", md5::compute(SEED_PAYLOAD)));
        assert_eq!(image.checksum.len(), 32);
        assert_eq!(store.image(&image.id).await.unwrap(), image);
    }

    #[tokio::test]
    async fn test_account_metadata_set_and_remove() {
        let store = StubStore::new();
        store.create_account("a").await;

        let set = [
            ("color".to_string(), "blue".to_string()),
            ("tier".to_string(), "gold".to_string()),
        ]
        .into();
        store.update_account_metadata("a", set, Vec::new()).await.unwrap();

        let set = [("tier".to_string(), String::new())].into();
        let account = store
            .update_account_metadata("a", set, vec!["color".to_string()])
            .await
            .unwrap();
        assert!(account.metadata.is_empty());

        assert!(matches!(
            store.update_account_metadata("b", BTreeMap::new(), Vec::new()).await,
            Err(StubError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_deleted_image_is_gone() {
        let store = StubStore::new();
        let image = store.seed("a").await;

        let deleted = store.delete_image(&image.id).await.unwrap();
        assert_eq!(deleted.status, ImageStatus::Deleted);
        assert!(deleted.deleted_at.is_some());
        assert!(matches!(
            store.image(&image.id).await,
            Err(StubError::ImageNotFound(_))
        ));
        assert!(store.delete_image(&image.id).await.is_err());
        assert!(
            store
                .update_image(&image.id, ImageMetadataUpdate::new().name("x"))
                .await
                .is_err()
        );
    }
}
