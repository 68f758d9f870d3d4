//! Represents a Glance image as described by `x-image-meta-*` headers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lifecycle state of an image.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    Active,
    Saving,
    Queued,
    Killed,
    PendingDelete,
    Deleted,
}

impl ImageStatus {
    pub const ALL: [ImageStatus; 6] = [
        Self::Active,
        Self::Saving,
        Self::Queued,
        Self::Killed,
        Self::PendingDelete,
        Self::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Saving => "saving",
            Self::Queued => "queued",
            Self::Killed => "killed",
            Self::PendingDelete => "pending_delete",
            Self::Deleted => "deleted",
        }
    }

    /// Case-insensitive lookup of a wire token.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }
}

/// Container format wrapping the image payload.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    Bare,
    Ovf,
    Aki,
    Ari,
    Ami,
}

impl ContainerFormat {
    pub const ALL: [ContainerFormat; 5] = [Self::Bare, Self::Ovf, Self::Aki, Self::Ari, Self::Ami];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Ovf => "ovf",
            Self::Aki => "aki",
            Self::Ari => "ari",
            Self::Ami => "ami",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value))
    }
}

/// Disk format of the image payload.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiskFormat {
    Raw,
    Vhd,
    Vmdk,
    Vdi,
    Iso,
    Qcow2,
    Aki,
    Ari,
    Ami,
}

impl DiskFormat {
    pub const ALL: [DiskFormat; 9] = [
        Self::Raw,
        Self::Vhd,
        Self::Vmdk,
        Self::Vdi,
        Self::Iso,
        Self::Qcow2,
        Self::Aki,
        Self::Ari,
        Self::Ami,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Vhd => "vhd",
            Self::Vmdk => "vmdk",
            Self::Vdi => "vdi",
            Self::Iso => "iso",
            Self::Qcow2 => "qcow2",
            Self::Aki => "aki",
            Self::Ari => "ari",
            Self::Ami => "ami",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DiskFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full image metadata as returned by `HEAD /v1/images/{id}`.
///
/// Optional fields are `None` exactly when the corresponding header was
/// absent from the response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ImageDetails {
    pub id: String,
    pub name: String,

    /// MD5 of the image payload.
    pub checksum: String,

    /// Minimum disk size in GB required to boot the image.
    pub min_disk: i64,

    /// Minimum RAM in MB required to boot the image.
    pub min_ram: i64,

    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner: String,

    /// Backend location URI of the payload.
    pub location: String,

    pub status: ImageStatus,
    pub container_format: Option<ContainerFormat>,
    pub disk_format: Option<DiskFormat>,
    pub deleted_at: Option<DateTime<Utc>>,

    /// Payload size in bytes.
    pub size: Option<i64>,

    /// Free-form `x-image-meta-property-*` entries, keys lower-cased.
    pub properties: BTreeMap<String, String>,
}
