// SPDX-License-Identifier: GPL-3.0-only

//! HTTP client for the plant monitor server
//!
//! The server exposes three JSON endpoints: the background capture status,
//! a toggle for it, and the URL of the newest captured image.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Http(reqwest::StatusCode),
}

/// Background capture state as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CaptureStatus {
    /// Whether the background capture loop is running
    pub active: bool,
    /// Whole minutes until the next capture; null or absent while inactive
    #[serde(default)]
    pub next_in: Option<u64>,
}

/// Pointer to the newest captured image
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestImage {
    /// Server-relative image path, empty while no capture exists
    pub url: String,
}

/// Client for the plant monitor HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the current background capture status
    pub async fn capture_status(&self) -> Result<CaptureStatus, ApiError> {
        self.get_json("/background_capture_status").await
    }

    /// Flip background capture on the server and return the resulting status
    pub async fn toggle_capture(&self) -> Result<CaptureStatus, ApiError> {
        let url = format!("{}/toggle_background_capture", self.base_url);
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Fetch the pointer to the newest captured image
    pub async fn latest_image(&self) -> Result<LatestImage, ApiError> {
        self.get_json("/latest_image").await
    }

    /// Download the image behind a `latest_image` URL
    ///
    /// The URL is resolved against the configured base URL and fetched with a
    /// cache-busting timestamp query so an intermediary never serves a stale
    /// capture for a reused filename.
    pub async fn fetch_image_bytes(&self, image_url: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.cache_busted(image_url, chrono::Utc::now().timestamp_millis());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(response.status()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Http(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Resolve a possibly server-relative image URL against the base URL
    fn absolute(&self, image_url: &str) -> String {
        if image_url.starts_with("http://") || image_url.starts_with("https://") {
            image_url.to_string()
        } else if image_url.starts_with('/') {
            format!("{}{}", self.base_url, image_url)
        } else {
            format!("{}/{}", self.base_url, image_url)
        }
    }

    fn cache_busted(&self, image_url: &str, millis: i64) -> String {
        let separator = if image_url.contains('?') { '&' } else { '?' };
        format!("{}{}t={}", self.absolute(image_url), separator, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://10.0.0.5:5000/");
        assert_eq!(
            client.absolute("/static/images/plant.jpg"),
            "http://10.0.0.5:5000/static/images/plant.jpg"
        );
    }

    #[test]
    fn test_absolute_passes_through_full_urls() {
        let client = ApiClient::new("http://10.0.0.5:5000");
        assert_eq!(
            client.absolute("http://elsewhere/img.jpg"),
            "http://elsewhere/img.jpg"
        );
    }

    #[test]
    fn test_cache_buster_appends_timestamp() {
        let client = ApiClient::new("http://10.0.0.5:5000");
        assert_eq!(
            client.cache_busted("/static/images/plant.jpg", 1700000000000),
            "http://10.0.0.5:5000/static/images/plant.jpg?t=1700000000000"
        );
        assert_eq!(
            client.cache_busted("/img.jpg?size=full", 7),
            "http://10.0.0.5:5000/img.jpg?size=full&t=7"
        );
    }

    #[test]
    fn test_status_deserializes_with_null_or_missing_next_in() {
        let active: CaptureStatus =
            serde_json::from_str(r#"{"active": true, "next_in": 10}"#).unwrap();
        assert_eq!(active.active, true);
        assert_eq!(active.next_in, Some(10));

        let inactive: CaptureStatus =
            serde_json::from_str(r#"{"active": false, "next_in": null}"#).unwrap();
        assert_eq!(inactive.next_in, None);

        let missing: CaptureStatus = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert_eq!(missing.next_in, None);
    }

    #[test]
    fn test_latest_image_may_be_empty() {
        let none: LatestImage = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(none.url.is_empty());
    }
}
