//! Response-header parsers for Glance images and Swift accounts.
//!
//! Both parsers read scalar fields through [`FieldReader`] and collect
//! free-form metadata with the single-pass prefix scan in [`properties`].

pub mod account;
pub mod image_details;
pub mod properties;

pub use account::AccountParser;
pub use image_details::ImageDetailsParser;
pub use properties::extract_prefixed;

use crate::errors::HeaderError;
use axum::http::{HeaderMap, HeaderValue};

/// Decode a header value as UTF-8 text, reporting `field` on failure.
///
/// `HeaderValue::to_str` only admits visible ASCII; values bound from
/// non-ASCII text must still read back verbatim.
pub(crate) fn header_text<'a>(
    value: &'a HeaderValue,
    field: &str,
) -> Result<&'a str, HeaderError> {
    std::str::from_utf8(value.as_bytes())
        .map_err(|_| HeaderError::malformed(field, String::from_utf8_lossy(value.as_bytes())))
}

/// Typed first-value lookups over a response's headers.
pub(crate) struct FieldReader<'a> {
    headers: &'a HeaderMap,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    pub(crate) fn optional_str(
        &self,
        header: &str,
        field: &str,
    ) -> Result<Option<&'a str>, HeaderError> {
        self.headers
            .get(header)
            .map(|value| header_text(value, field))
            .transpose()
    }

    /// Absence fails before any parsing is attempted.
    pub(crate) fn required_str(&self, header: &str, field: &str) -> Result<&'a str, HeaderError> {
        self.optional_str(header, field)?
            .ok_or_else(|| HeaderError::missing(field))
    }

    pub(crate) fn required_string(&self, header: &str, field: &str) -> Result<String, HeaderError> {
        self.required_str(header, field).map(str::to_owned)
    }

    pub(crate) fn required_i64(&self, header: &str, field: &str) -> Result<i64, HeaderError> {
        parse_i64(self.required_str(header, field)?, field)
    }

    pub(crate) fn optional_i64(
        &self,
        header: &str,
        field: &str,
    ) -> Result<Option<i64>, HeaderError> {
        self.optional_str(header, field)?
            .map(|raw| parse_i64(raw, field))
            .transpose()
    }

    /// Lenient flag: only `true` (any case) is true, absence included.
    pub(crate) fn flag(&self, header: &str, field: &str) -> Result<bool, HeaderError> {
        Ok(self
            .optional_str(header, field)?
            .is_some_and(|raw| raw.eq_ignore_ascii_case("true")))
    }
}

fn parse_i64(raw: &str, field: &str) -> Result<i64, HeaderError> {
    raw.parse::<i64>()
        .map_err(|_| HeaderError::malformed(field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::HeaderName;

    fn headers(pairs: &[(&str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            let name = HeaderName::from_bytes(name.as_bytes()).unwrap();
            map.append(name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let map = headers(&[("X-Image-Meta-Name", "cirros")]);
        let reader = FieldReader::new(&map);
        assert_eq!(
            reader.required_str("x-image-meta-name", "name").unwrap(),
            "cirros"
        );
    }

    #[test]
    fn test_first_value_wins() {
        let map = headers(&[("x-image-meta-size", "1"), ("x-image-meta-size", "2")]);
        let reader = FieldReader::new(&map);
        assert_eq!(reader.optional_i64("x-image-meta-size", "size").unwrap(), Some(1));
    }

    #[test]
    fn test_integer_errors() {
        let map = headers(&[("x-image-meta-min-ram", " 12")]);
        let reader = FieldReader::new(&map);
        assert_eq!(
            reader.required_i64("x-image-meta-min-ram", "min-ram"),
            Err(HeaderError::malformed("min-ram", " 12"))
        );
        assert_eq!(
            reader.required_i64("x-image-meta-min-disk", "min-disk"),
            Err(HeaderError::missing("min-disk"))
        );
    }

    #[test]
    fn test_flag_is_lenient() {
        let map = headers(&[("a", "TRUE"), ("b", "yes"), ("c", "")]);
        let reader = FieldReader::new(&map);
        assert!(reader.flag("a", "a").unwrap());
        assert!(!reader.flag("b", "b").unwrap());
        assert!(!reader.flag("c", "c").unwrap());
        assert!(!reader.flag("d", "d").unwrap());
    }

    #[test]
    fn test_non_text_value_is_malformed() {
        let mut map = HeaderMap::new();
        map.insert("x-image-meta-owner", HeaderValue::from_bytes(b"caf\xe9").unwrap());
        let reader = FieldReader::new(&map);
        let err = reader.required_str("x-image-meta-owner", "owner").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.field(), "owner");
    }

    #[test]
    fn test_utf8_value_is_text() {
        let mut map = HeaderMap::new();
        map.insert(
            "x-image-meta-name",
            HeaderValue::from_str("Ubuntu café").unwrap(),
        );
        let reader = FieldReader::new(&map);
        assert_eq!(
            reader.required_str("x-image-meta-name", "name").unwrap(),
            "Ubuntu café"
        );
    }
}
