//! Binds image records and metadata updates to `x-image-meta-*` headers.

use super::append_header;
use crate::{
    date::DateService,
    errors::HeaderError,
    headers::{IMAGE_PROPERTY_PREFIX, ImageField},
    models::image::{ContainerFormat, DiskFormat, ImageDetails},
    parsers::{FieldReader, extract_prefixed},
};
use axum::http::HeaderMap;
use std::collections::BTreeMap;

/// Render every known field of `details` as Glance would send it in a
/// `HEAD` response. Parsing the result yields an equal record.
pub fn image_details_to_headers<D: DateService>(
    details: &ImageDetails,
    dates: &D,
) -> Result<HeaderMap, HeaderError> {
    let mut headers = HeaderMap::new();
    let mut put =
        |field: ImageField, value: &str| append_header(&mut headers, &field.header(), value);

    put(ImageField::Id, &details.id)?;
    put(ImageField::Name, &details.name)?;
    put(ImageField::Checksum, &details.checksum)?;
    put(ImageField::MinDisk, &details.min_disk.to_string())?;
    put(ImageField::MinRam, &details.min_ram.to_string())?;
    put(ImageField::IsPublic, if details.is_public { "true" } else { "false" })?;
    put(
        ImageField::CreatedAt,
        &dates.iso8601_seconds_format(&details.created_at),
    )?;
    put(
        ImageField::UpdatedAt,
        &dates.iso8601_seconds_format(&details.updated_at),
    )?;
    put(ImageField::Owner, &details.owner)?;
    put(ImageField::Location, &details.location)?;
    put(ImageField::Status, details.status.as_str())?;
    if let Some(format) = details.container_format {
        put(ImageField::ContainerFormat, format.as_str())?;
    }
    if let Some(format) = details.disk_format {
        put(ImageField::DiskFormat, format.as_str())?;
    }
    if let Some(deleted_at) = &details.deleted_at {
        put(ImageField::DeletedAt, &dates.iso8601_seconds_format(deleted_at))?;
    }
    if let Some(size) = details.size {
        put(ImageField::Size, &size.to_string())?;
    }

    bind_properties(&mut headers, &details.properties)?;
    Ok(headers)
}

fn bind_properties(
    headers: &mut HeaderMap,
    properties: &BTreeMap<String, String>,
) -> Result<(), HeaderError> {
    for (key, value) in properties {
        append_header(headers, &format!("{IMAGE_PROPERTY_PREFIX}{key}"), value)?;
    }
    Ok(())
}

/// Partial change to an image's metadata, sent with `PUT /v1/images/{id}`.
///
/// Only the fields that were set are bound; properties are merged into the
/// existing ones by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMetadataUpdate {
    pub name: Option<String>,
    pub is_public: Option<bool>,
    pub min_disk: Option<i64>,
    pub min_ram: Option<i64>,
    pub container_format: Option<ContainerFormat>,
    pub disk_format: Option<DiskFormat>,
    pub properties: BTreeMap<String, String>,
}

impl ImageMetadataUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_public(mut self, is_public: bool) -> Self {
        self.is_public = Some(is_public);
        self
    }

    pub fn min_disk(mut self, min_disk: i64) -> Self {
        self.min_disk = Some(min_disk);
        self
    }

    pub fn min_ram(mut self, min_ram: i64) -> Self {
        self.min_ram = Some(min_ram);
        self
    }

    pub fn container_format(mut self, format: ContainerFormat) -> Self {
        self.container_format = Some(format);
        self
    }

    pub fn disk_format(mut self, format: DiskFormat) -> Self {
        self.disk_format = Some(format);
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into().to_lowercase(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_headers(&self) -> Result<HeaderMap, HeaderError> {
        let mut headers = HeaderMap::new();
        if let Some(name) = &self.name {
            append_header(&mut headers, &ImageField::Name.header(), name)?;
        }
        if let Some(is_public) = self.is_public {
            let value = if is_public { "true" } else { "false" };
            append_header(&mut headers, &ImageField::IsPublic.header(), value)?;
        }
        if let Some(min_disk) = self.min_disk {
            append_header(&mut headers, &ImageField::MinDisk.header(), &min_disk.to_string())?;
        }
        if let Some(min_ram) = self.min_ram {
            append_header(&mut headers, &ImageField::MinRam.header(), &min_ram.to_string())?;
        }
        if let Some(format) = self.container_format {
            append_header(&mut headers, &ImageField::ContainerFormat.header(), format.as_str())?;
        }
        if let Some(format) = self.disk_format {
            append_header(&mut headers, &ImageField::DiskFormat.header(), format.as_str())?;
        }
        bind_properties(&mut headers, &self.properties)?;
        Ok(headers)
    }

    /// Read an update back from request headers. Fields without a header
    /// stay unset.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, HeaderError> {
        let fields = FieldReader::new(headers);
        let is_public = fields
            .optional_str(&ImageField::IsPublic.header(), ImageField::IsPublic.token())?
            .map(|raw| raw.eq_ignore_ascii_case("true"));
        let container_format = fields
            .optional_str(
                &ImageField::ContainerFormat.header(),
                ImageField::ContainerFormat.token(),
            )?
            .map(|raw| {
                ContainerFormat::from_value(raw).ok_or_else(|| {
                    HeaderError::unknown_value(ImageField::ContainerFormat.token(), raw)
                })
            })
            .transpose()?;
        let disk_format = fields
            .optional_str(&ImageField::DiskFormat.header(), ImageField::DiskFormat.token())?
            .map(|raw| {
                DiskFormat::from_value(raw)
                    .ok_or_else(|| HeaderError::unknown_value(ImageField::DiskFormat.token(), raw))
            })
            .transpose()?;

        Ok(Self {
            name: fields
                .optional_str(&ImageField::Name.header(), ImageField::Name.token())?
                .map(str::to_owned),
            is_public,
            min_disk: fields
                .optional_i64(&ImageField::MinDisk.header(), ImageField::MinDisk.token())?,
            min_ram: fields
                .optional_i64(&ImageField::MinRam.header(), ImageField::MinRam.token())?,
            container_format,
            disk_format,
            properties: extract_prefixed(headers, IMAGE_PROPERTY_PREFIX)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{date::ChronoDateService, models::image::ImageStatus, parsers::ImageDetailsParser};
    use chrono::{TimeZone, Utc};

    fn sample() -> ImageDetails {
        ImageDetails {
            id: "8a5a4b2e-1f0d-4c55-9d44-7c0f4f7b9e21".into(),
            name: "cirros-0.3.1".into(),
            checksum: "d972013792949d0d3ba628fbe8685bce".into(),
            min_disk: 1,
            min_ram: 512,
            is_public: true,
            created_at: Utc.with_ymd_and_hms(2013, 5, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2013, 5, 2, 11, 30, 15).unwrap(),
            owner: "tenant-42".into(),
            location: "swift+https://objects.example.com/glance/8a5a".into(),
            status: ImageStatus::Active,
            container_format: Some(ContainerFormat::Bare),
            disk_format: Some(DiskFormat::Qcow2),
            deleted_at: None,
            size: Some(13_147_648),
            properties: [("os_distro".to_string(), "cirros".to_string())].into(),
        }
    }

    #[test]
    fn test_headers_parse_back_to_same_record() {
        let details = sample();
        let headers = image_details_to_headers(&details, &ChronoDateService).unwrap();
        assert_eq!(headers["x-image-meta-min-ram"], "512");
        assert_eq!(headers["x-image-meta-property-os_distro"], "cirros");

        let parsed = ImageDetailsParser::new(ChronoDateService)
            .parse(&headers)
            .unwrap();
        assert_eq!(parsed, details);
    }

    #[test]
    fn test_private_deleted_image_round_trips() {
        let mut details = sample();
        details.is_public = false;
        details.status = ImageStatus::Deleted;
        details.deleted_at = Some(Utc.with_ymd_and_hms(2013, 6, 1, 0, 0, 0).unwrap());
        details.container_format = None;
        details.size = None;
        details.properties.clear();

        let headers = image_details_to_headers(&details, &ChronoDateService).unwrap();
        assert!(!headers.contains_key("x-image-meta-container-format"));
        let parsed = ImageDetailsParser::new(ChronoDateService)
            .parse(&headers)
            .unwrap();
        assert_eq!(parsed, details);
    }

    #[test]
    fn test_non_ascii_text_round_trips() {
        let mut details = sample();
        details.name = "Ubuntu café".into();
        details
            .properties
            .insert("description".into(), "Überall verfügbar".into());

        let headers = image_details_to_headers(&details, &ChronoDateService).unwrap();
        let parsed = ImageDetailsParser::new(ChronoDateService)
            .parse(&headers)
            .unwrap();
        assert_eq!(parsed, details);

        let update = ImageMetadataUpdate::new().name("Ubuntu café");
        let headers = update.to_headers().unwrap();
        assert_eq!(ImageMetadataUpdate::from_headers(&headers).unwrap(), update);
    }

    #[test]
    fn test_update_binds_only_set_fields() {
        let update = ImageMetadataUpdate::new()
            .name("renamed")
            .is_public(false)
            .property("Architecture", "x86_64");
        let headers = update.to_headers().unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers["x-image-meta-name"], "renamed");
        assert_eq!(headers["x-image-meta-is-public"], "false");
        assert_eq!(headers["x-image-meta-property-architecture"], "x86_64");
        assert_eq!(ImageMetadataUpdate::from_headers(&headers).unwrap(), update);
    }

    #[test]
    fn test_empty_update() {
        let update = ImageMetadataUpdate::new();
        assert!(update.is_empty());
        assert!(update.to_headers().unwrap().is_empty());
        assert!(!update.min_ram(128).is_empty());
    }

    #[test]
    fn test_update_rejects_unknown_format() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-image-meta-disk-format",
            axum::http::HeaderValue::from_static("floppy"),
        );
        assert_eq!(
            ImageMetadataUpdate::from_headers(&headers),
            Err(HeaderError::unknown_value("disk-format", "floppy"))
        );
    }
}
