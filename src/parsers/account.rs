//! Builds [`Account`] from the headers of `HEAD` on a Swift storage URL.

use super::{FieldReader, properties::extract_prefixed};
use crate::{
    errors::HeaderError,
    headers::{
        ACCOUNT_BYTES_USED, ACCOUNT_CONTAINER_COUNT, ACCOUNT_META_PREFIX, ACCOUNT_OBJECT_COUNT,
    },
    models::account::Account,
};
use axum::http::HeaderMap;

/// Parses `x-account-*` headers. No field is required; counters that are
/// present must still be valid integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountParser;

impl AccountParser {
    pub fn parse(&self, headers: &HeaderMap) -> Result<Account, HeaderError> {
        let fields = FieldReader::new(headers);
        Ok(Account {
            container_count: fields.optional_i64(ACCOUNT_CONTAINER_COUNT, "container-count")?,
            object_count: fields.optional_i64(ACCOUNT_OBJECT_COUNT, "object-count")?,
            bytes_used: fields.optional_i64(ACCOUNT_BYTES_USED, "bytes-used")?,
            metadata: extract_prefixed(headers, ACCOUNT_META_PREFIX)?,
        })
    }
}
