//! Wire names of the Glance and Swift metadata headers.
//!
//! Names are lower-case; `HeaderMap` compares them case-insensitively.

/// Namespace shared by every fixed image field header.
pub const IMAGE_META_PREFIX: &str = "x-image-meta-";

/// Prefix of free-form image property headers.
pub const IMAGE_PROPERTY_PREFIX: &str = "x-image-meta-property-";

/// Prefix of user metadata on a Swift account.
pub const ACCOUNT_META_PREFIX: &str = "x-account-meta-";

/// Prefix that asks Swift to drop an account metadata key.
pub const ACCOUNT_REMOVE_META_PREFIX: &str = "x-remove-account-meta-";

/// Value sent with removal headers; Swift ignores it.
pub const REMOVAL_VALUE: &str = "ignored";

pub const ACCOUNT_CONTAINER_COUNT: &str = "x-account-container-count";
pub const ACCOUNT_OBJECT_COUNT: &str = "x-account-object-count";
pub const ACCOUNT_BYTES_USED: &str = "x-account-bytes-used";

pub const AUTH_TOKEN: &str = "x-auth-token";

/// Fixed image fields carried under [`IMAGE_META_PREFIX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageField {
    Id,
    Name,
    Checksum,
    MinDisk,
    MinRam,
    IsPublic,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    Owner,
    Location,
    Status,
    ContainerFormat,
    DiskFormat,
    Size,
}

impl ImageField {
    /// Field token as it appears after the namespace, e.g. `min-disk`.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Checksum => "checksum",
            Self::MinDisk => "min-disk",
            Self::MinRam => "min-ram",
            Self::IsPublic => "is-public",
            Self::CreatedAt => "created-at",
            Self::UpdatedAt => "updated-at",
            Self::DeletedAt => "deleted-at",
            Self::Owner => "owner",
            Self::Location => "location",
            Self::Status => "status",
            Self::ContainerFormat => "container-format",
            Self::DiskFormat => "disk-format",
            Self::Size => "size",
        }
    }

    /// Full header name, e.g. `x-image-meta-min-disk`.
    pub fn header(&self) -> String {
        format!("{}{}", IMAGE_META_PREFIX, self.token())
    }
}
