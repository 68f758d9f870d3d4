//! Request-side header binding: records and metadata maps into headers.

pub mod account;
pub mod image;

pub use account::{bind_metadata, bind_metadata_removal};
pub use image::{ImageMetadataUpdate, image_details_to_headers};

use crate::errors::HeaderError;
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Append `name: value`, rejecting names or values HTTP cannot carry.
pub(crate) fn append_header(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
) -> Result<(), HeaderError> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| HeaderError::malformed(name, value))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| HeaderError::malformed(name, value))?;
    headers.append(header_name, header_value);
    Ok(())
}
