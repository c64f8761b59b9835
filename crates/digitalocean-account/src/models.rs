//! Account models as returned by `GET /v2/account`.

use serde::{Deserialize, Serialize};

/// Envelope of the account endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountResponse {
    /// The account.
    pub account: Account,
}

/// Information about the account that owns the access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account identifier.
    pub uuid: String,
    /// Account email address.
    pub email: String,
    /// Whether the email address has been verified.
    #[serde(default)]
    pub email_verified: bool,
    /// Account status (`active`, `warning`, `locked`).
    pub status: String,
    /// Explanation of a non-active status.
    #[serde(default)]
    pub status_message: String,
    /// Maximum number of droplets.
    #[serde(default)]
    pub droplet_limit: u32,
    /// Maximum number of floating IPs.
    #[serde(default)]
    pub floating_ip_limit: u32,
    /// Maximum number of volumes.
    #[serde(default)]
    pub volume_limit: u32,
    /// Team the token is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

/// Team membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    /// Team identifier.
    pub uuid: String,
    /// Team name.
    pub name: String,
}

impl Account {
    /// Returns true if the account can create resources.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
