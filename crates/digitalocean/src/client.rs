//! The umbrella client.

use digitalocean_account::AccountClient;
use digitalocean_actions::ActionsClient;
use digitalocean_core::{Bridge, ClientConfig, Result, Transport};
use digitalocean_droplets::DropletsClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point bundling every resource client.
///
/// The resource clients hold clones of one [`Bridge`]; none of them keeps
/// per-call state, so the client can be cloned and shared between tasks.
#[derive(Clone)]
pub struct DigitalOceanClient {
    /// Account information.
    pub account: AccountClient,
    /// Action records.
    pub actions: ActionsClient,
    /// Droplets, images and neighbor reports.
    pub droplets: DropletsClient,
    bridge: Bridge,
}

impl DigitalOceanClient {
    /// Create a client that talks to the network through reqwest.
    ///
    /// The access token is not validated here; a bad token fails the first
    /// call with an authentication error.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_bridge(Bridge::new(config)?))
    }

    /// Create a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self::from_bridge(Bridge::with_transport(config, transport)?))
    }

    /// Create a client over an existing bridge.
    #[must_use]
    pub fn from_bridge(bridge: Bridge) -> Self {
        debug!(base_url = %bridge.base_url(), "DigitalOcean client ready");
        Self {
            account: AccountClient::new(bridge.clone()),
            actions: ActionsClient::new(bridge.clone()),
            droplets: DropletsClient::new(bridge.clone()),
            bridge,
        }
    }

    /// Return the shared bridge, for requests outside the typed clients.
    #[must_use]
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }
}
