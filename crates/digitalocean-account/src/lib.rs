//! Account client and data models for the DigitalOcean API v2.
//!
//! Provides the account information endpoint on top of the shared
//! [`digitalocean_core::Bridge`].

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::AccountClient;
pub use models::{Account, AccountResponse, Team};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = digitalocean_core::Result<T>;
