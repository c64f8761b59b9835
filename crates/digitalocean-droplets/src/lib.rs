//! Droplets client and data models for the DigitalOcean API v2.
//!
//! Covers droplet creation and deletion, per-droplet listings (actions,
//! backups, kernels, snapshots, neighbors), tag queries, the neighbor report
//! and the image catalogue.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::DropletsClient;
pub use models::{
    BackupsResponse, CreateDropletRequest, Droplet, DropletResponse, DropletsResponse, Image,
    ImageRef, ImagesResponse, Kernel, KernelsResponse, NeighborsReport, NetworkInterface,
    Networks, SnapshotsResponse, REQUIRED_ATTRIBUTES,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = digitalocean_core::Result<T>;
