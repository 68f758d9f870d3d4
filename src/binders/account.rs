//! Binds Swift account metadata maps to `x-account-meta-*` headers.

use super::append_header;
use crate::{
    errors::HeaderError,
    headers::{ACCOUNT_META_PREFIX, ACCOUNT_REMOVE_META_PREFIX, REMOVAL_VALUE},
};
use axum::http::HeaderMap;
use std::collections::BTreeMap;

/// Headers that create or overwrite each metadata entry.
///
/// Keys that already carry the prefix are sent as given.
pub fn bind_metadata(metadata: &BTreeMap<String, String>) -> Result<HeaderMap, HeaderError> {
    let mut headers = HeaderMap::new();
    for (key, value) in metadata {
        append_header(&mut headers, &prefixed(ACCOUNT_META_PREFIX, key), value)?;
    }
    Ok(headers)
}

/// Headers that remove each key of `metadata`; values are not sent.
pub fn bind_metadata_removal(
    metadata: &BTreeMap<String, String>,
) -> Result<HeaderMap, HeaderError> {
    let mut headers = HeaderMap::new();
    for key in metadata.keys() {
        let key = strip_prefix_ignore_case(key, ACCOUNT_META_PREFIX).unwrap_or(key);
        append_header(
            &mut headers,
            &prefixed(ACCOUNT_REMOVE_META_PREFIX, key),
            REMOVAL_VALUE,
        )?;
    }
    Ok(headers)
}

fn prefixed(prefix: &str, key: &str) -> String {
    if strip_prefix_ignore_case(key, prefix).is_some() {
        key.to_owned()
    } else {
        format!("{prefix}{key}")
    }
}

fn strip_prefix_ignore_case<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    let head = key.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &key[prefix.len()..])
}
