//! # digitalocean
//!
//! Typed client for the DigitalOcean API v2.
//!
//! [`DigitalOceanClient`] bundles the account, actions and droplets clients
//! over one shared [`Bridge`], so every call made through it uses the same
//! access token and base URL.
//!
//! ```no_run
//! use digitalocean::{ClientConfig, DigitalOceanClient};
//!
//! # async fn run() -> digitalocean::Result<()> {
//! let client = DigitalOceanClient::new(ClientConfig::new("dop_v1_..."))?;
//! let droplets = client.droplets.get_droplets().await?;
//! println!("{droplets}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;

pub use client::DigitalOceanClient;
pub use digitalocean_account::AccountClient;
pub use digitalocean_actions::ActionsClient;
pub use digitalocean_core::{
    Bridge, ClientConfig, Error, Request, Response, Result, StatusPolicy, Transport, Verb,
    API_BASE_URL,
};
pub use digitalocean_droplets::{CreateDropletRequest, DropletsClient};

/// Data models for every resource.
pub mod models {
    pub use digitalocean_account::models as account;
    pub use digitalocean_actions::models as actions;
    pub use digitalocean_droplets::models as droplets;
}
