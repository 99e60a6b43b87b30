use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::{ApiError, Result};
use super::models::{KeyPage, StoreStats, ValueRecord};
use crate::query::KeyQuery;

/// Thin request/response client for the three read endpoints.
///
/// No caching and no retries: a failed call surfaces as an error and the next
/// user action is the retry path.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_stats(&self) -> Result<StoreStats> {
        let url = format!("{}/api/stats", self.base_url);
        self.get_json(&url, "stats").await
    }

    pub async fn fetch_keys(&self, query: &KeyQuery) -> Result<KeyPage> {
        let url = format!("{}/api/keys", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("q", query.text.as_str()), ("mode", query.mode.param())])
            .query(&[("offset", query.offset), ("limit", query.limit)])
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Parse {
            context: "keys",
            source,
        })
    }

    /// Fetch a single value. Any non-success status means the key is gone.
    pub async fn fetch_value(&self, key: &str) -> Result<ValueRecord> {
        let url = format!("{}/api/key/{}", self.base_url, urlencoding::encode(key));
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::NotFound {
                key: key.to_string(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Parse {
            context: "value",
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, context: &'static str) -> Result<T> {
        let resp = self.http.get(url).send().await?.error_for_status()?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| ApiError::Parse { context, source })
    }
}
