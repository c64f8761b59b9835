//! Integration tests for parsing droplet data.
//!
//! These tests validate that the droplet models can deserialize recorded
//! responses from the droplet, image, kernel, snapshot and neighbor endpoints.

use digitalocean_core::ids::DropletId;
use digitalocean_droplets::models::{
    DropletsResponse, ImagesResponse, KernelsResponse, NeighborsReport, SnapshotsResponse,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load and deserialize a fixture from disk.
fn load_fixture<T: DeserializeOwned>(name: &str) -> T {
    let fixture_path = fixtures_dir().join(name);
    let json_data = fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    });

    serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize {}: {}\nJSON: {}", name, e, json_data)
    })
}

#[test]
fn test_deserialize_droplet_list() {
    let response: DropletsResponse = load_fixture("droplets.json");

    assert_eq!(response.droplets.len(), 2, "Expected 2 droplets in test data");
    assert_eq!(response.meta.total, 6);
    assert!(response.links.pages.is_some());
}

#[test]
fn test_active_droplet() {
    let response: DropletsResponse = load_fixture("droplets.json");
    let droplet = &response.droplets[0];

    // Validate basic fields
    assert_eq!(droplet.id, DropletId::new(3164444));
    assert_eq!(droplet.name, "example.com");
    assert_eq!(droplet.status, "active");
    assert_eq!(droplet.memory, 1024);
    assert_eq!(droplet.vcpus, 1);
    assert_eq!(droplet.disk, 25);
    assert!(!droplet.locked);
    assert!(droplet.kernel.is_none());

    // Validate backups and snapshots
    assert_eq!(droplet.backup_ids, vec![53893572]);
    assert_eq!(droplet.snapshot_ids, vec![67512819]);
    assert!(droplet.features.iter().any(|f| f == "ipv6"));

    // Validate image
    let image = droplet.image.as_ref().expect("Should have an image");
    assert_eq!(image.slug.as_deref(), Some("ubuntu-20-04-x64"));
    assert_eq!(image.min_disk_size, Some(20));

    // Validate region and tags
    assert_eq!(droplet.region.as_ref().map(|r| r.slug.as_str()), Some("nyc3"));
    assert_eq!(droplet.tags, vec!["web", "env:prod"]);
}

#[test]
fn test_droplet_networks() {
    let response: DropletsResponse = load_fixture("droplets.json");
    let droplet = &response.droplets[0];

    assert_eq!(droplet.networks.v4.len(), 2);
    assert_eq!(droplet.networks.v6.len(), 1);
    assert_eq!(droplet.public_ipv4(), Some("192.241.165.154"));
    assert_eq!(droplet.networks.v6[0].netmask, serde_json::json!(64));
}

#[test]
fn test_locked_droplet_with_kernel() {
    let response: DropletsResponse = load_fixture("droplets.json");
    let droplet = &response.droplets[1];

    assert!(droplet.locked);
    assert_eq!(droplet.status, "off");
    assert!(droplet.public_ipv4().is_none());
    assert!(droplet.vpc_uuid.is_none());

    let kernel = droplet.kernel.as_ref().expect("Should have a kernel");
    assert_eq!(kernel.id, 7515);
}

#[test]
fn test_deserialize_images() {
    let response: ImagesResponse = load_fixture("images.json");

    assert_eq!(response.images.len(), 2);
    let snapshot = &response.images[0];
    assert!(snapshot.slug.is_none());
    assert!(!snapshot.public);
    assert_eq!(snapshot.kind.as_deref(), Some("snapshot"));

    let base = &response.images[1];
    assert!(base.public);
    assert_eq!(base.kind.as_deref(), Some("base"));
    assert_eq!(base.size_gigabytes, Some(2.36));
}

#[test]
fn test_deserialize_kernels() {
    let response: KernelsResponse = load_fixture("kernels.json");

    assert_eq!(response.kernels.len(), 2);
    assert_eq!(response.kernels[1].name, "DO-recovery-static-fsck");
    assert_eq!(response.kernels[1].version, "3.8.0-25-generic");
}

#[test]
fn test_deserialize_snapshots() {
    let response: SnapshotsResponse = load_fixture("snapshots.json");

    assert_eq!(response.snapshots.len(), 1);
    assert_eq!(response.snapshots[0].name, "nginx-base-snapshot");
    assert_eq!(response.meta.total, 1);
}

#[test]
fn test_deserialize_neighbors_report() {
    let report: NeighborsReport = load_fixture("neighbors.json");

    assert_eq!(report.neighbors.len(), 2, "Expected 2 host groups");
    for group in &report.neighbors {
        assert_eq!(group.len(), 2);
    }
    assert_eq!(report.neighbors[1][0].status, "new");
}
