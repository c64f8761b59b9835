//! Droplet models shared by the droplet, image and report endpoints.

use chrono::{DateTime, Utc};
use digitalocean_core::ids::DropletId;
use digitalocean_core::types::{Links, Meta, Region};
use digitalocean_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use validator::{Validate, ValidationError};

/// Attributes every droplet creation request must carry.
pub const REQUIRED_ATTRIBUTES: [&str; 4] = ["name", "region", "size", "image"];

/// Representation of a droplet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Droplet {
    /// Droplet id.
    pub id: DropletId,
    /// Droplet name.
    pub name: String,
    /// Memory in MiB.
    #[serde(default)]
    pub memory: u64,
    /// Virtual CPU count.
    #[serde(default)]
    pub vcpus: u32,
    /// Disk size in GiB.
    #[serde(default)]
    pub disk: u64,
    /// Whether the droplet is locked against actions.
    #[serde(default)]
    pub locked: bool,
    /// Droplet status (`new`, `active`, `off`, `archive`).
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Enabled features (`backups`, `ipv6`, ...).
    #[serde(default)]
    pub features: Vec<String>,
    /// Backup image ids.
    #[serde(default)]
    pub backup_ids: Vec<u64>,
    /// Snapshot image ids.
    #[serde(default)]
    pub snapshot_ids: Vec<u64>,
    /// Attached volume ids.
    #[serde(default)]
    pub volume_ids: Vec<String>,
    /// Image the droplet was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Kernel, for droplets with externally managed kernels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<Kernel>,
    /// Size slug.
    #[serde(default)]
    pub size_slug: String,
    /// Network interfaces.
    #[serde(default)]
    pub networks: Networks,
    /// Region the droplet runs in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// VPC the droplet belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

impl Droplet {
    /// Returns the first public IPv4 address.
    #[must_use]
    pub fn public_ipv4(&self) -> Option<&str> {
        self.networks
            .v4
            .iter()
            .find(|net| net.kind == "public")
            .map(|net| net.ip_address.as_str())
    }
}

/// Network interfaces of a droplet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Networks {
    /// IPv4 interfaces.
    #[serde(default)]
    pub v4: Vec<NetworkInterface>,
    /// IPv6 interfaces.
    #[serde(default)]
    pub v6: Vec<NetworkInterface>,
}

/// A single network interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInterface {
    /// Assigned address.
    pub ip_address: String,
    /// Netmask (IPv4) or prefix length (IPv6).
    pub netmask: Value,
    /// Gateway address.
    #[serde(default)]
    pub gateway: Option<String>,
    /// `public` or `private`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// An image: distribution base, application, snapshot or backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Image id.
    pub id: u64,
    /// Image name.
    pub name: String,
    /// Distribution name.
    #[serde(default)]
    pub distribution: String,
    /// Slug, for public images.
    #[serde(default)]
    pub slug: Option<String>,
    /// Whether the image is public.
    #[serde(default)]
    pub public: bool,
    /// Regions the image is available in.
    #[serde(default)]
    pub regions: Vec<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Image type (`base`, `snapshot`, `backup`, `custom`).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Minimum disk size in GiB for droplets built from this image.
    #[serde(default)]
    pub min_disk_size: Option<u64>,
    /// Size of the image in GiB.
    #[serde(default)]
    pub size_gigabytes: Option<f64>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Status (`NEW`, `available`, `pending`, `deleted`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A kernel available to a droplet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Kernel {
    /// Kernel id.
    pub id: u64,
    /// Kernel name.
    pub name: String,
    /// Kernel version.
    pub version: String,
}

/// Envelope of `GET /v2/droplets/{id}` and `POST /v2/droplets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropletResponse {
    /// The droplet.
    pub droplet: Droplet,
}

/// Envelope of droplet lists, including tag and neighbor queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropletsResponse {
    /// Droplets on this page.
    pub droplets: Vec<Droplet>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope of `GET /v2/images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesResponse {
    /// Images on this page.
    pub images: Vec<Image>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope of `GET /v2/droplets/{id}/kernels`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KernelsResponse {
    /// Kernels on this page.
    pub kernels: Vec<Kernel>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope of `GET /v2/droplets/{id}/snapshots`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotsResponse {
    /// Snapshot images.
    pub snapshots: Vec<Image>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope of `GET /v2/droplets/{id}/backups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupsResponse {
    /// Backup images.
    pub backups: Vec<Image>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}

/// Envelope of `GET /v2/reports/droplet_neighbors`.
///
/// Each inner list holds droplets that share a physical host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NeighborsReport {
    /// Groups of co-located droplets.
    pub neighbors: Vec<Vec<Droplet>>,
}

/// Image reference in a creation request: numeric id or public slug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImageRef {
    /// Image id.
    Id(u64),
    /// Public image slug.
    Slug(String),
}

impl Default for ImageRef {
    fn default() -> Self {
        Self::Slug(String::new())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => f.write_str(slug),
        }
    }
}

impl From<u64> for ImageRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ImageRef {
    fn from(slug: &str) -> Self {
        Self::Slug(slug.to_string())
    }
}

fn validate_image(image: &ImageRef) -> std::result::Result<(), ValidationError> {
    match image {
        ImageRef::Slug(slug) if slug.trim().is_empty() => Err(ValidationError::new("empty_image")),
        _ => Ok(()),
    }
}

/// Typed attributes for `POST /v2/droplets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct CreateDropletRequest {
    /// Droplet name (used as hostname).
    #[validate(length(min = 1))]
    pub name: String,
    /// Region slug.
    #[validate(length(min = 1))]
    pub region: String,
    /// Size slug.
    #[validate(length(min = 1))]
    pub size: String,
    /// Image id or slug.
    #[validate(custom(function = "validate_image"))]
    pub image: ImageRef,
    /// SSH key ids or fingerprints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<Value>,
    /// Enable automated backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backups: Option<bool>,
    /// Enable IPv6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<bool>,
    /// Install the monitoring agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<bool>,
    /// Tags to apply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Cloud-init user data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 65536))]
    pub user_data: Option<String>,
    /// Volume ids to attach.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    /// VPC to place the droplet in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

impl CreateDropletRequest {
    /// Create a request with the four required attributes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            size: size.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    /// Add a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Enable or disable backups.
    #[must_use]
    pub const fn with_backups(mut self, enabled: bool) -> Self {
        self.backups = Some(enabled);
        self
    }

    /// Enable or disable IPv6.
    #[must_use]
    pub const fn with_ipv6(mut self, enabled: bool) -> Self {
        self.ipv6 = Some(enabled);
        self
    }

    /// Set cloud-init user data.
    #[must_use]
    pub fn with_user_data(mut self, user_data: impl Into<String>) -> Self {
        self.user_data = Some(user_data.into());
        self
    }

    /// Validate and convert into the attribute map sent on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] when a field fails validation.
    pub fn into_attributes(self) -> Result<Map<String, Value>> {
        self.validate()?;
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::SerializationError(format!(
                "droplet request serialized to {other} instead of an object"
            ))),
        }
    }
}

/// Returns the first required attribute that is absent or `null`.
#[must_use]
pub fn missing_attribute(attributes: &Map<String, Value>) -> Option<&'static str> {
    REQUIRED_ATTRIBUTES
        .into_iter()
        .find(|key| attributes.get(*key).map_or(true, Value::is_null))
}
