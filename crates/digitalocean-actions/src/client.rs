//! Actions client implementation.

use crate::Result;
use digitalocean_core::ids::ActionId;
use digitalocean_core::{Bridge, ClientConfig, Request, Verb};
use serde_json::Value;
use url::Url;

/// Client for the actions endpoints.
#[derive(Clone)]
pub struct ActionsClient {
    bridge: Bridge,
}

impl ActionsClient {
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

    /// List actions performed on the account.
    ///
    /// Decodes into [`crate::ActionsResponse`].
    pub async fn get_actions(&self) -> Result<Value> {
        self.bridge.fetch(Request::new(Verb::Get, "actions")).await
    }

    /// Fetch a single action.
    ///
    /// Decodes into [`crate::ActionResponse`].
    pub async fn get_action_by_id(&self, id: impl Into<ActionId>) -> Result<Value> {
        let path = format!("actions/{}", id.into());
        self.bridge.fetch(Request::new(Verb::Get, path)).await
    }
}
