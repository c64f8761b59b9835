//! Action models shared by the actions and droplet endpoints.

use chrono::{DateTime, Utc};
use digitalocean_core::ids::ActionId;
use digitalocean_core::types::{Links, Meta, Region};
use serde::{Deserialize, Serialize};

/// Progress of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStatus {
    /// Still running.
    InProgress,
    /// Finished successfully.
    Completed,
    /// Failed.
    Errored,
}

/// An asynchronous action record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// Action id.
    pub id: ActionId,
    /// Current status.
    pub status: ActionStatus,
    /// Action type (`create`, `reboot`, `snapshot`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// When the action started.
    pub started_at: DateTime<Utc>,
    /// When the action finished, if it has.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Id of the resource the action applies to.
    #[serde(default)]
    pub resource_id: Option<u64>,
    /// Kind of resource the action applies to.
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Region the action ran in.
    #[serde(default)]
    pub region: Option<Region>,
    /// Slug of the region the action ran in.
    #[serde(default)]
    pub region_slug: Option<String>,
}

impl Action {
    /// Returns true once the action has stopped running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != ActionStatus::InProgress
    }
}

/// Envelope of `GET /v2/actions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    /// The action.
    pub action: Action,
}

/// Envelope of `GET /v2/actions` and `GET /v2/droplets/{id}/actions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsResponse {
    /// Actions on this page.
    pub actions: Vec<Action>,
    /// Pagination links.
    #[serde(default)]
    pub links: Links,
    /// List metadata.
    #[serde(default)]
    pub meta: Meta,
}
