//! Single-pass extraction of prefixed, free-form metadata headers.

use super::header_text;
use crate::errors::HeaderError;
use axum::http::HeaderMap;
use std::collections::BTreeMap;

/// Collect every header whose name starts with `prefix` and is strictly
/// longer than it.
///
/// Keys are the lower-cased remainder after `prefix`; values are kept
/// verbatim. A header carrying several values contributes its last one.
pub fn extract_prefixed(
    headers: &HeaderMap,
    prefix: &str,
) -> Result<BTreeMap<String, String>, HeaderError> {
    let mut properties = BTreeMap::new();
    for (name, value) in headers {
        let name = name.as_str();
        let Some(key) = name.strip_prefix(prefix) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let key = key.to_lowercase();
        let value = header_text(value, &key)?;
        properties.insert(key, value.to_owned());
    }
    Ok(properties)
}
