//! Builds [`ImageDetails`] from the headers of `HEAD /v1/images/{id}`.
//!
//! Glance reports every fixed field as `x-image-meta-<field>` and every
//! user property as `x-image-meta-property-<key>`. Required fields must be
//! present and well-formed; optional ones are skipped only when absent.

use super::{FieldReader, properties::extract_prefixed};
use crate::{
    date::DateService,
    errors::HeaderError,
    headers::{IMAGE_PROPERTY_PREFIX, ImageField},
    models::image::{ContainerFormat, DiskFormat, ImageDetails, ImageStatus},
};
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use tracing::trace;

/// Parses image headers with an injected [`DateService`].
#[derive(Debug, Clone, Default)]
pub struct ImageDetailsParser<D> {
    dates: D,
}

impl<D: DateService> ImageDetailsParser<D> {
    pub fn new(dates: D) -> Self {
        Self { dates }
    }

    pub fn date_service(&self) -> &D {
        &self.dates
    }

    /// Decode one response's headers. Fails on the first missing or
    /// malformed field; no partial record is ever produced.
    pub fn parse(&self, headers: &HeaderMap) -> Result<ImageDetails, HeaderError> {
        let fields = FieldReader::new(headers);
        let id = required_string(&fields, ImageField::Id)?;
        let name = required_string(&fields, ImageField::Name)?;
        let checksum = required_string(&fields, ImageField::Checksum)?;
        let min_disk =
            fields.required_i64(&ImageField::MinDisk.header(), ImageField::MinDisk.token())?;
        let min_ram =
            fields.required_i64(&ImageField::MinRam.header(), ImageField::MinRam.token())?;
        let is_public =
            fields.flag(&ImageField::IsPublic.header(), ImageField::IsPublic.token())?;
        let created_at = self.required_date(&fields, ImageField::CreatedAt)?;
        let updated_at = self.required_date(&fields, ImageField::UpdatedAt)?;
        let owner = required_string(&fields, ImageField::Owner)?;
        let location = required_string(&fields, ImageField::Location)?;

        let raw_status =
            fields.required_str(&ImageField::Status.header(), ImageField::Status.token())?;
        let status = lookup(ImageField::Status, raw_status, ImageStatus::from_value)?;

        let container_format = optional_str(&fields, ImageField::ContainerFormat)?
            .map(|raw| lookup(ImageField::ContainerFormat, raw, ContainerFormat::from_value))
            .transpose()?;
        let disk_format = optional_str(&fields, ImageField::DiskFormat)?
            .map(|raw| lookup(ImageField::DiskFormat, raw, DiskFormat::from_value))
            .transpose()?;
        let deleted_at = optional_str(&fields, ImageField::DeletedAt)?
            .map(|raw| self.date(ImageField::DeletedAt, raw))
            .transpose()?;
        let size = fields.optional_i64(&ImageField::Size.header(), ImageField::Size.token())?;
        let properties = extract_prefixed(headers, IMAGE_PROPERTY_PREFIX)?;

        trace!(%id, properties = properties.len(), "parsed image details from headers");
        Ok(ImageDetails {
            id,
            name,
            checksum,
            min_disk,
            min_ram,
            is_public,
            created_at,
            updated_at,
            owner,
            location,
            status,
            container_format,
            disk_format,
            deleted_at,
            size,
            properties,
        })
    }

    fn required_date(
        &self,
        fields: &FieldReader<'_>,
        field: ImageField,
    ) -> Result<DateTime<Utc>, HeaderError> {
        let raw = fields.required_str(&field.header(), field.token())?;
        self.date(field, raw)
    }

    fn date(&self, field: ImageField, raw: &str) -> Result<DateTime<Utc>, HeaderError> {
        self.dates
            .iso8601_seconds_parse(raw)
            .ok_or_else(|| HeaderError::malformed(field.token(), raw))
    }
}

fn required_string(fields: &FieldReader<'_>, field: ImageField) -> Result<String, HeaderError> {
    fields.required_string(&field.header(), field.token())
}

fn optional_str<'a>(
    fields: &FieldReader<'a>,
    field: ImageField,
) -> Result<Option<&'a str>, HeaderError> {
    fields.optional_str(&field.header(), field.token())
}

fn lookup<T>(
    field: ImageField,
    raw: &str,
    from_value: impl Fn(&str) -> Option<T>,
) -> Result<T, HeaderError> {
    from_value(raw).ok_or_else(|| HeaderError::unknown_value(field.token(), raw))
}
