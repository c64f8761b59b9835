//! Wire types shared by several resources.
//!
//! Regions appear inside actions, droplets and images alike, and every list
//! endpoint wraps its items with the same `links` and `meta` objects.

use serde::{Deserialize, Serialize};

/// A datacenter region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Region slug (e.g. `nyc3`).
    pub slug: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Size slugs available in the region.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Whether new resources can be created in the region.
    #[serde(default)]
    pub available: bool,
    /// Feature flags supported by the region.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Pagination links attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Links {
    /// Page URLs, present when the list spans several pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

/// URLs of neighbouring result pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pages {
    /// First page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// List metadata.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn region_defaults_missing_fields() {
        let region: Region = serde_json::from_value(json!({"slug": "nyc3"})).unwrap();
        assert_eq!(region.slug, "nyc3");
        assert!(region.sizes.is_empty());
        assert!(!region.available);
    }

    #[test]
    fn links_with_pages() {
        let links: Links = serde_json::from_value(json!({
            "pages": {
                "last": "https://api.digitalocean.com/v2/droplets?page=3&per_page=1",
                "next": "https://api.digitalocean.com/v2/droplets?page=2&per_page=1"
            }
        }))
        .unwrap();

        let pages = links.pages.unwrap();
        assert!(pages.first.is_none());
        assert!(pages.next.unwrap().ends_with("page=2&per_page=1"));
    }

    #[test]
    fn empty_links_and_meta() {
        let links: Links = serde_json::from_value(json!({})).unwrap();
        assert!(links.pages.is_none());
        let meta: Meta = serde_json::from_value(json!({"total": 4})).unwrap();
        assert_eq!(meta.total, 4);
    }
}
