//! Represents a Swift account as described by `x-account-*` headers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account-level usage counters and user metadata.
///
/// Counters are `None` when the server did not send the header.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// Number of containers in the account.
    pub container_count: Option<i64>,

    /// Number of objects across all containers.
    pub object_count: Option<i64>,

    /// Total bytes stored in the account.
    pub bytes_used: Option<i64>,

    /// `x-account-meta-*` entries, keys lower-cased with the prefix removed.
    pub metadata: BTreeMap<String, String>,
}
