//! Droplets client implementation.

use crate::models::{missing_attribute, CreateDropletRequest};
use crate::Result;
use digitalocean_core::ids::DropletId;
use digitalocean_core::query::with_param;
use digitalocean_core::{Bridge, ClientConfig, Error, Request, Verb};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

/// Client for the droplet, image and neighbor report endpoints.
#[derive(Clone)]
pub struct DropletsClient {
    bridge: Bridge,
}

impl DropletsClient {
    /// Create a client over a shared bridge.
    #[must_use]
    pub const fn new(bridge: Bridge) -> Self {
        Self { bridge }
    }

    /// Construct a client with its own bridge.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(Bridge::new(config)?))
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.bridge.base_url()
    }

    /// Create a droplet from raw attributes.
    ///
    /// `name`, `region`, `size` and `image` must be present; otherwise the call
    /// fails with [`Error::MissingAttribute`] before anything is sent.
    pub async fn create_droplet(&self, attributes: &Map<String, Value>) -> Result<Value> {
        if let Some(key) = missing_attribute(attributes) {
            warn!(attribute = key, "droplet creation is missing a required attribute");
            return Err(Error::MissingAttribute(key.to_string()));
        }

        debug!(name = ?attributes.get("name"), "creating droplet");
        let request =
            Request::new(Verb::Post, "droplets").with_body(Value::Object(attributes.clone()));
        self.bridge.fetch(request).await
    }

    /// Create a droplet from a typed, validated request.
    pub async fn create_droplet_from(&self, request: CreateDropletRequest) -> Result<Value> {
        let attributes = request.into_attributes()?;
        self.create_droplet(&attributes).await
    }

    /// Delete a droplet. Succeeds only for a 2xx status.
    pub async fn delete_droplet_by_id(&self, id: impl Into<DropletId>) -> Result<bool> {
        let path = format!("droplets/{}", id.into());
        self.bridge
            .fetch_status(Request::new(Verb::Delete, path))
            .await
    }

    /// Delete every droplet carrying `tag_name`. Succeeds only for a 2xx status.
    pub async fn delete_droplets_by_tag(&self, tag_name: &str) -> Result<bool> {
        let path = with_param("droplets", "tag_name", tag_name);
        self.bridge
            .fetch_status(Request::new(Verb::Delete, path))
            .await
    }

    /// List actions performed on a droplet.
    pub async fn get_droplet_actions_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}/actions", id.into()))
            .await
    }

    /// List backups of a droplet.
    pub async fn get_droplet_backups_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}/backups", id.into()))
            .await
    }

    /// Fetch a single droplet.
    pub async fn get_droplet_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}", id.into())).await
    }

    /// List droplets carrying `tag_name`. Same request as
    /// [`DropletsClient::get_droplets_by_tag`].
    pub async fn get_droplet_by_tag(&self, tag_name: &str) -> Result<Value> {
        self.get_droplets_by_tag(tag_name).await
    }

    /// List kernels available to a droplet.
    pub async fn get_droplet_kernels_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}/kernels", id.into()))
            .await
    }

    /// Report droplets that share a physical host.
    pub async fn get_droplet_neighbors(&self) -> Result<Value> {
        self.get_json("reports/droplet_neighbors").await
    }

    /// List droplets sharing a physical host with the given droplet.
    pub async fn get_droplet_neighbors_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}/neighbors", id.into()))
            .await
    }

    /// List droplets.
    pub async fn get_droplets(&self) -> Result<Value> {
        self.get_json("droplets").await
    }

    /// List droplets carrying `tag_name`.
    pub async fn get_droplets_by_tag(&self, tag_name: &str) -> Result<Value> {
        self.get_json(&with_param("droplets", "tag_name", tag_name))
            .await
    }

    /// List snapshots of a droplet.
    pub async fn get_droplet_snapshots_by_id(&self, id: impl Into<DropletId>) -> Result<Value> {
        self.get_json(&format!("droplets/{}/snapshots", id.into()))
            .await
    }

    /// List images.
    pub async fn get_images(&self) -> Result<Value> {
        self.get_json("images").await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        self.bridge.fetch(Request::new(Verb::Get, path)).await
    }
}
