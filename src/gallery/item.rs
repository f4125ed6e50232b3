// SPDX-License-Identifier: MPL-2.0
//! Image entries returned by the remote listing API.

use serde::{Deserialize, Serialize};

/// One entry of a fetched page.
///
/// Only `id` and `download_url` are required; the remaining fields are kept
/// when the API sends them but the carousel does not rely on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub id: String,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Page on the provider's site, not the image itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ImageItem {
    /// Builds an item carrying only the required fields.
    pub fn new(id: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            download_url: download_url.into(),
            author: None,
            width: None,
            height: None,
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_entry() {
        let items: Vec<ImageItem> =
            serde_json::from_str(r#"[{"id":"1","download_url":"a"}]"#).expect("decode");
        assert_eq!(items, vec![ImageItem::new("1", "a")]);
    }

    #[test]
    fn keeps_optional_provider_fields() {
        let raw = r#"{
            "id": "10",
            "author": "Paul Jarvis",
            "width": 2500,
            "height": 1667,
            "url": "https://unsplash.com/photos/6J--NXulQCs",
            "download_url": "https://picsum.photos/id/10/2500/1667"
        }"#;
        let item: ImageItem = serde_json::from_str(raw).expect("decode");
        assert_eq!(item.id, "10");
        assert_eq!(item.author.as_deref(), Some("Paul Jarvis"));
        assert_eq!(item.width, Some(2500));
        assert_eq!(item.download_url, "https://picsum.photos/id/10/2500/1667");
    }

    #[test]
    fn missing_download_url_is_rejected() {
        let result = serde_json::from_str::<ImageItem>(r#"{"id":"1"}"#);
        assert!(result.is_err());
    }
}
