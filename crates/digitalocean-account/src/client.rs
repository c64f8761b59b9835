//! Account client implementation.

use crate::Result;
use digitalocean_core::{Bridge, ClientConfig, Request, Verb};
use serde_json::Value;
use url::Url;

/// Client for the account endpoint.
#[derive(Clone)]
pub struct AccountClient {
    bridge: Bridge,
}

impl AccountClient {
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

    /// Fetch information about the account that owns the token.
    ///
    /// Decodes into [`crate::AccountResponse`].
    pub async fn get_user_information(&self) -> Result<Value> {
        self.bridge.fetch(Request::new(Verb::Get, "account")).await
    }
}
